use clap::Parser;
use std::process;

use rhoas_cli::RhoasCli;

#[tokio::main]
async fn main() {
    rhoas_cli::logging::init_log();
    let cli = RhoasCli::parse();
    if let Err(e) = rhoas_cli::run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
