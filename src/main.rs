use clap::{Parser, Subcommand};
use clap_complete::Shell;
use console::style;
use size_snap::cmd;
use std::path::PathBuf;
use std::process;

/// Bundle size snapshot diff reporter
///
/// size-snap compares the current size snapshot of a build's output files
/// against the previous one and prints a markdown report classifying each
/// file's change by severity.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory containing size-snapshot.json and previous-snapshot.json
    /// (defaults to the current directory)
    #[arg(long, global = true, default_value = ".")]
    project_root: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the size-change report (the default when no command is given)
    Report {
        /// Exit non-zero when the critical section has rows (for CI gates)
        #[arg(long)]
        fail_on_critical: bool,
    },

    /// Make the current snapshot the baseline for the next run
    Promote,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Report { fail_on_critical }) => {
            cmd::cmd_report(&cli.project_root, *fail_on_critical)
        }
        Some(Commands::Promote) => cmd::cmd_promote(&cli.project_root),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        // Bare invocation prints the report
        None => cmd::cmd_report(&cli.project_root, false),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("error:").red().bold(), e);
        process::exit(1);
    }
}
