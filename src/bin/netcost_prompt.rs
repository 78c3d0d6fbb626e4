//! Console front end: asks for a purchase scenario and prints its net cost

use std::io;

use netcost::cli::PromptSession;
use netcost::config::{init_tracing, LogFormat};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Keep stdout for the conversation
    init_tracing("netcost=warn", LogFormat::Text, io::stderr);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = PromptSession::new(stdin.lock(), stdout.lock());

    let report = session.run()?;
    tracing::info!(net_cost = %report.result.net_cost, "Console session finished");

    Ok(())
}
