use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use factcheck_cli::cli::{Cli, Commands};
use factcheck_cli::output;
use factcheck_client::VerifyClient;
use factcheck_core::decode::decode_str;
use factcheck_core::telemetry::init_tracing;
use factcheck_core::{FactcheckConfig, VerificationResult};
use factcheck_view::Presenter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs)?;

    let config = match cli.config.as_deref() {
        Some(path) => FactcheckConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => FactcheckConfig::from_env(),
    };

    let result = match &cli.command {
        Commands::Verify { claim } => {
            let client = VerifyClient::new(&config.client)?;
            client.verify(claim).await?
        }
        Commands::Render { input } => read_result(input)?,
    };

    let presenter = Presenter::from_config(&config);
    let view = presenter.present(&result);
    info!(confidence = view.confidence, sources = view.sources.len(), "rendered");

    println!("{}", output::render(&view, cli.format, cli.pretty)?);
    Ok(())
}

fn read_result(input: &Path) -> Result<VerificationResult> {
    let text = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?
    };
    decode_str(&text).with_context(|| format!("{} is not JSON", input.display()))
}
