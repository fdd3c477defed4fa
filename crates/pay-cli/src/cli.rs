//! # Command Line

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Settle orders through pluggable payment channels
#[derive(Debug, Parser)]
#[command(name = "checkout-demo", version, about)]
pub struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replay the phone / chair / car walkthrough
    Scenarios {
        /// Print the orders as JSON
        #[arg(long)]
        json: bool,
    },
    /// Settle a cart file through one channel
    Pay(PayArgs),
}

#[derive(Debug, Args)]
pub struct PayArgs {
    /// Cart file (TOML)
    #[arg(long)]
    pub cart: PathBuf,

    /// Payment channel: debit, credit or paypal
    #[arg(long)]
    pub channel: Option<String>,

    /// Verify an SMS authorizer with this code
    #[arg(long, conflicts_with = "not_robot")]
    pub sms_code: Option<String>,

    /// Verify a not-a-robot authorizer
    #[arg(long)]
    pub not_robot: bool,

    /// Print the order as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_pay() {
        let cli = Cli::try_parse_from([
            "checkout-demo",
            "pay",
            "--cart",
            "cart.toml",
            "--channel",
            "paypal",
            "--not-robot",
        ])
        .unwrap();

        match cli.command {
            Command::Pay(args) => {
                assert_eq!(args.channel.as_deref(), Some("paypal"));
                assert!(args.not_robot);
                assert!(args.sms_code.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_sms_and_robot_conflict() {
        let result = Cli::try_parse_from([
            "checkout-demo",
            "pay",
            "--cart",
            "cart.toml",
            "--sms-code",
            "1234",
            "--not-robot",
        ]);
        assert!(result.is_err());
    }
}
