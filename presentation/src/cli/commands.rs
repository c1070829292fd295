//! CLI command definitions

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for studio-consult
#[derive(Parser, Debug)]
#[command(name = "studio-consult")]
#[command(author, version, about = "Consultation request workflow client")]
#[command(long_about = r#"
Client for the studio's consultation request workflow.

End users submit consultation requests for a calendar date; admins approve
or reject them (rejection requires a reason). Decisions are one-way: an
approved or rejected consultation never changes status again.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./consult.toml      Project-level config
3. ~/.config/studio-consult/config.toml   Global config

Example:
  studio-consult list
  studio-consult approve 12
  studio-consult reject 12 --reason "Jadwal tidak tersedia"
  studio-consult submit --date 2026-09-15
  studio-consult status
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Explicit config file path
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Skip config files and use built-in defaults
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Use an in-memory backend instead of the HTTP API (demo mode)
    #[arg(long, global = true)]
    pub offline: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show pending consultation requests (admin)
    List,

    /// Approve a pending consultation (admin)
    Approve {
        /// Consultation id
        id: i64,
    },

    /// Reject a pending consultation with a reason (admin)
    Reject {
        /// Consultation id
        id: i64,

        /// Reason shown to the requesting user (must be non-empty)
        #[arg(short, long)]
        reason: String,
    },

    /// Submit a new consultation request
    Submit {
        /// Requested date (YYYY-MM-DD, today or later)
        #[arg(long)]
        date: NaiveDate,

        /// Acting user id (defaults to viewer.user_id from config)
        #[arg(long)]
        user: Option<i64>,
    },

    /// Show the viewer's latest consultation status
    Status {
        /// Viewer user id (defaults to viewer.user_id from config)
        #[arg(long)]
        user: Option<i64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_requires_reason_flag() {
        let result = Cli::try_parse_from(["studio-consult", "reject", "12"]);
        assert!(result.is_err());

        let cli =
            Cli::try_parse_from(["studio-consult", "reject", "12", "--reason", "penuh"]).unwrap();
        match cli.command {
            Command::Reject { id, reason } => {
                assert_eq!(id, 12);
                assert_eq!(reason, "penuh");
            }
            _ => panic!("expected reject command"),
        }
    }

    #[test]
    fn test_submit_parses_date() {
        let cli =
            Cli::try_parse_from(["studio-consult", "submit", "--date", "2026-09-15"]).unwrap();
        match cli.command {
            Command::Submit { date, user } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2026, 9, 15).unwrap());
                assert!(user.is_none());
            }
            _ => panic!("expected submit command"),
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["studio-consult", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
