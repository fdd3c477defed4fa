//! # checkout-demo
//!
//! Drive orders through the lightning-cart payment channels.
//!
//! ## Usage
//!
//! ```bash
//! # Optional credentials (demo values are used otherwise)
//! export CARD_SECURITY_CODE=1234
//! export PAYPAL_EMAIL=alice@daemonico.com
//!
//! checkout-demo scenarios
//! checkout-demo pay --cart cart.toml --channel paypal --not-robot
//! ```

use clap::Parser;
use pay_cli::{Cli, DemoConfig};
use pay_core::PaymentError;
use std::process::ExitCode;
use tracing::{error, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<PaymentError>()
                .map(PaymentError::exit_code)
                .unwrap_or(1);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = DemoConfig::from_env()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    pay_cli::run(&cli.command, &config, &mut out)
}

/// Logs go to stderr so stdout carries only the reports
fn init_tracing(json: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
