//! Calendar CLI application.
//!
//! # Usage
//! ```ignore
//! gridcal               // Current month
//! gridcal -y 2026       // Year 2026
//! gridcal -y 2026 -m 1  // February 2026
//! gridcal -n 3 -w       // Three months with week numbers
//! ```
//!
//! Malformed arguments print the help text; the exit status is always 0.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use gridcal::args::{Args, print_help};
use gridcal::formatter::print_plan;
use gridcal::resolver::resolve;
use gridcal::types::CalContext;

fn main() {
    init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "falling back to help");
            print_help();
            return;
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("gridcal: {}", e);
        print_help();
    }
}

fn run(args: &Args) -> gridcal::error::Result<()> {
    let ctx = CalContext::new(args);
    let request = args.to_request();
    let plan = resolve(&request, ctx.today)?;
    tracing::debug!(?request, ?plan, "resolved render plan");

    print_plan(&ctx, &plan)
}

// Logging to stderr so it doesn't interfere with calendar output
fn init_logging() {
    let filter = EnvFilter::try_from_env("GRIDCAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
