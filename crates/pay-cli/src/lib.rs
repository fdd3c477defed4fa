//! # pay-cli
//!
//! Command line driver for lightning-cart-rs.
//!
//! The driver owns everything around settlement: it builds orders from cart
//! files, picks and verifies an authorizer, registers every channel strategy
//! with its credentials, settles through the selector, and renders the result.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `scenarios [--json]` | Replay the phone / chair / car walkthrough |
//! | `pay --cart <file> [--channel <c>] [--sms-code <code> \| --not-robot] [--json]` | Settle a cart |

pub mod cart;
pub mod cli;
pub mod config;
pub mod report;
pub mod scenarios;

pub use cli::{Cli, Command, PayArgs};
pub use config::DemoConfig;

use anyhow::Context;
use cart::Cart;
use pay_core::{
    Authorizer, Order, PaymentChannel, RobotAuthorizer, SharedAuthorizer, SmsAuthorizer,
};
use report::{render_json, OrderReport};
use std::io::Write;
use tracing::{info, warn};

/// Execute a parsed command, writing reports to `out`
pub fn run<W: Write>(command: &Command, config: &DemoConfig, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Scenarios { json } => {
            let orders = scenarios::run_walkthrough(&config.channels)?;
            let refs: Vec<&Order> = orders.iter().collect();
            write_orders(out, &refs, *json)
        }
        Command::Pay(args) => pay(args, config, out),
    }
}

fn pay<W: Write>(args: &PayArgs, config: &DemoConfig, out: &mut W) -> anyhow::Result<()> {
    let channel = match args.channel.as_deref() {
        Some(label) => label.parse::<PaymentChannel>()?,
        None => config.default_channel,
    };

    let mut order = Cart::load(&args.cart)?.into_order()?;
    let authorizer = build_authorizer(args);
    let selector = pay_channels::default_selector(&config.channels, authorizer.clone());

    if channel.requires_authorization() && !authorizer.is_authorized() {
        warn!(%channel, "no authorizer verified, settlement will be refused");
    }

    info!(%channel, order_id = %order.id, total = order.total_price(), "settling order");
    let outcome = selector.settle(channel.as_str(), &mut order);

    write_orders(out, &[&order], args.json)?;
    outcome.with_context(|| format!("Failed to settle order {} via {}", order.id, channel))
}

/// Build and verify the authorizer requested on the command line.
///
/// Without a verification flag an unverified SMS authorizer is injected,
/// so gated channels refuse to settle.
fn build_authorizer(args: &PayArgs) -> SharedAuthorizer {
    if let Some(code) = args.sms_code.as_deref() {
        let sms = SmsAuthorizer::shared();
        sms.verify_sms_code(code);
        return sms;
    }

    if args.not_robot {
        let robot = RobotAuthorizer::shared();
        robot.verify_not_robot();
        return robot;
    }

    SmsAuthorizer::shared()
}

fn write_orders<W: Write>(out: &mut W, orders: &[&Order], json: bool) -> anyhow::Result<()> {
    if json {
        let rendered = render_json(orders).context("Failed to render orders as JSON")?;
        writeln!(out, "{rendered}")?;
    } else {
        for order in orders {
            writeln!(out, "{}", OrderReport::new(order))?;
        }
    }
    Ok(())
}
