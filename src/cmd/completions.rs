//! Completions command implementation
//!
//! Handles the `size-snap completions` command which generates shell
//! completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};

/// Generate shell completion scripts
///
/// Outputs a completion script for the specified shell to stdout. Users can
/// redirect this to their shell's completion directory:
///
/// ```bash
/// # Bash
/// size-snap completions bash > /etc/bash_completion.d/size-snap
///
/// # Zsh
/// size-snap completions zsh > ~/.zfunc/_size-snap
/// ```
pub fn cmd_completions(shell: Shell) {
    // Re-create the command structure here since Cli lives in main.rs
    use clap::{Arg, Command};

    let mut cmd = Command::new("size-snap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bundle size snapshot diff reporter for CI")
        .arg(
            Arg::new("project-root")
                .long("project-root")
                .help("Directory containing the snapshot files")
                .global(true),
        )
        .subcommand(Command::new("report").about("Print the size-change report"))
        .subcommand(Command::new("promote").about("Make the current snapshot the baseline"))
        .subcommand(Command::new("completions").about("Generate shell completions"));

    let bin_name = "size-snap".to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
