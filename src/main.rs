use clap::Parser;
use sim_info::utils::{logger, validation::Validate};
use sim_info::{CliConfig, OutputFormat, SimCard, SimInformation};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sim-info CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let provider = match SimInformation::system().await {
        Ok(provider) => provider,
        Err(e) => {
            tracing::error!("❌ Could not reach the platform telephony service: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let query = tokio::time::timeout(Duration::from_secs(config.timeout), provider.sim_cards());
    match query.await {
        Ok(Ok(cards)) => {
            tracing::info!("✅ Query completed: {} SIM card(s)", cards.len());
            print_sim_cards(&cards, config.format)?;
        }
        Ok(Err(e)) => {
            tracing::error!("❌ SIM query failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        Err(_) => {
            tracing::error!("❌ SIM query timed out after {}s", config.timeout);
            eprintln!("❌ SIM query timed out after {}s", config.timeout);
            std::process::exit(3);
        }
    }

    Ok(())
}

fn print_sim_cards(cards: &[SimCard], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(cards)?),
        OutputFormat::Text => {
            if cards.is_empty() {
                println!("No SIM cards detected.");
            } else {
                println!("{:<6} {:<6}", "MCC", "MNC");
                for card in cards {
                    println!("{:<6} {:<6}", card.mcc, card.mnc);
                }
            }
        }
    }

    Ok(())
}
