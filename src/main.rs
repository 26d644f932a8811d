use clap::Parser;
use std::io::{self, BufRead, Write};
use taxadex::core::ConfigProvider;
use taxadex::utils::{logger, validation::Validate};
use taxadex::{
    CliConfig, GbifClassificationProvider, InatTaxonomyProvider, LookupOrchestrator,
    LookupOutcome, TerminalSink, WikipediaDescriptionProvider,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting taxadex");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let client = reqwest::Client::new();
    let orchestrator = LookupOrchestrator::new(
        InatTaxonomyProvider::new(client.clone(), config.taxonomy_api_base()),
        GbifClassificationProvider::new(client.clone(), config.classification_api_base()),
        WikipediaDescriptionProvider::new(client, config.description_api_base()),
        TerminalSink::new(),
    );

    match config.query.clone() {
        Some(query) => {
            let outcome = orchestrator.run_lookup(&query).await;
            let exit_code = report(&config, outcome)?;
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
        None => {
            // Interactive mode: one lookup per entered line, until EOF.
            let stdin = io::stdin();
            loop {
                print!("species> ");
                io::stdout().flush()?;

                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    break;
                }
                report(&config, orchestrator.run_lookup(&line).await)?;
            }
        }
    }

    Ok(())
}

fn report(config: &CliConfig, outcome: LookupOutcome) -> Result<i32, serde_json::Error> {
    let exit_code = match outcome {
        LookupOutcome::Ok(view) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            }
            0
        }
        LookupOutcome::EmptyQuery | LookupOutcome::Superseded => 0,
        LookupOutcome::NotFound => 1,
        LookupOutcome::ProviderError { .. } => 2,
    };
    Ok(exit_code)
}
