use crate::check::{run_check, run_criteria, CheckArgs, CriteriaArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use donor_check::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Blood Donor Eligibility Check",
    about = "Check blood donation eligibility from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a single donor's answers
    Check(CheckArgs),
    /// Print the active eligibility criteria and the information link
    Criteria(CriteriaArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
        Command::Criteria(args) => run_criteria(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_raw_text_and_flags() {
        let cli = Cli::try_parse_from([
            "donor-check",
            "check",
            "--age",
            "25",
            "--weight",
            "55.5",
            "--unwell",
            "--json",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.age, "25");
                assert_eq!(args.weight, "55.5");
                assert!(args.unwell);
                assert!(!args.short_sleep);
                assert!(args.json);
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["donor-check"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
