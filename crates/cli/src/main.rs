use clap::Parser;
use ferrous_rrl_domain::{CliOverrides, Config, ResponseTuple};
use ferrous_rrl_infrastructure::dns::{ResponseClassifier, ResponseParser};
use serde::Serialize;
use tracing::{debug, info};

mod bootstrap;
mod input;

use input::{parse_wildcard_origin, ResponseInput};

#[derive(Parser)]
#[command(name = "ferrous-rrl")]
#[command(version)]
#[command(about = "Ferrous RRL - classify DNS responses for Response Rate Limiting")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Override the base responses-per-second allowance
    #[arg(long)]
    responses_per_second: Option<u32>,

    /// Owner name of the zone whose wildcard synthesized the answer
    #[arg(short = 'w', long, value_name = "NAME")]
    wildcard_origin: Option<String>,

    #[command(flatten)]
    input: ResponseInput,
}

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    tuple: ResponseTuple,
    rcode: &'static str,
    allowance_per_second: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        responses_per_second: cli.responses_per_second,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging)?;

    info!("Starting Ferrous RRL v{}", env!("CARGO_PKG_VERSION"));

    let wildcard_origin = match cli.wildcard_origin.as_deref() {
        Some(raw) => parse_wildcard_origin(raw)?,
        None => None,
    };

    let bytes = cli.input.read()?;
    let report = classify(&config, &bytes, wildcard_origin.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn classify(
    config: &Config,
    response_bytes: &[u8],
    wildcard_origin: Option<&str>,
) -> anyhow::Result<Report> {
    let response = ResponseParser::parse(response_bytes)?;

    let tuple = ResponseClassifier::derive(&response, wildcard_origin);
    let allowance_per_second = config.rrl.allowance_for(tuple.allowance_category);

    debug!(
        category = %tuple.allowance_category,
        allowance_per_second,
        "Allowance resolved"
    );

    Ok(Report {
        tuple,
        rcode: ResponseParser::rcode_to_status(response.response_code()),
        allowance_per_second,
    })
}
