//! Slotclock CLI - When did a slot happen, or when will it?
//!
//! `slotclock <SLOT_NUMBER> <NETWORK>` prints the recorded time of a past
//! slot, or an estimate for a future one.

pub mod commands;
pub mod config;
pub mod output;
pub mod telemetry;

use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match commands::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = telemetry::init_telemetry(&cli.log_level, cli.log_json) {
        output::print_error(&format!("Error: invalid log filter: {}", e));
        std::process::exit(1);
    }

    if let Err(e) = commands::execute(cli).await {
        let code = commands::exit_code(&e);
        output::print_error(&e.to_string());
        std::process::exit(code);
    }
}
