mod cli;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use notable_core::config::load_dotenv;
use notable_core::{Config, PersonName};
use notable_llm::GenerativeIdentifier;
use notable_pipeline::{categorize, BatchReport, FallbackOrchestrator};
use notable_search::WikipediaSearch;
use notable_users::{filter_born_on_or_before, select_random, PersonSource, RandomUserClient};

use crate::cli::{CliArgs, Command, RandomArgs};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    load_dotenv();
    let args = CliArgs::parse();

    let mut config = Config::from_env();
    if let Some(model) = args.model {
        config.llm.model = model;
    }
    config.log_summary();

    match args.command {
        Command::Identify { first, last } => {
            let person = PersonName::new(first, last).context("invalid name")?;
            let orchestrator = build_orchestrator(&config, config.batch.concurrency)?;
            let identification = orchestrator.identify_with_fallback(&person).await;
            let result = categorize(&person.full_name(), &identification);
            output::print_single(&result, args.json)?;
        }
        Command::Names { names } => {
            let orchestrator = build_orchestrator(&config, config.batch.concurrency)?;
            let identifications = orchestrator.batch_identify_names(&names).await;
            let report = BatchReport::from_identifications(&identifications);
            output::print_report(&report, &[], args.json)?;
        }
        Command::Random(random) => run_random(&config, random, args.json).await?,
    }

    Ok(())
}

fn build_orchestrator(config: &Config, concurrency: usize) -> Result<FallbackOrchestrator> {
    let search =
        WikipediaSearch::new(&config.wikipedia).context("failed to create Wikipedia client")?;
    let identifier =
        GenerativeIdentifier::from_config(&config.llm).context("failed to create LLM provider")?;
    info!("{}", identifier.model_info());
    Ok(FallbackOrchestrator::new(Box::new(search), identifier).with_concurrency(concurrency))
}

async fn run_random(config: &Config, args: RandomArgs, json: bool) -> Result<()> {
    let client =
        RandomUserClient::new(&config.random_user).context("failed to create random user client")?;
    let users = client
        .fetch(args.fetch)
        .await
        .context("failed to fetch random users")?;

    let eligible = filter_born_on_or_before(&users, args.max_birth_year);
    info!(
        fetched = users.len(),
        eligible = eligible.len(),
        max_birth_year = args.max_birth_year,
        "filtered random users"
    );

    let selected = select_random(&eligible, args.select, &mut rand::thread_rng());
    let people: Vec<PersonName> = selected
        .iter()
        .filter_map(|user| match user.person_name() {
            Ok(person) => Some(person),
            Err(e) => {
                warn!(name = %user.full_name(), error = %e, "skipping unusable random user");
                None
            }
        })
        .collect();

    let concurrency = args.concurrency.unwrap_or(config.batch.concurrency);
    let orchestrator = build_orchestrator(config, concurrency)?;
    let identifications = orchestrator.batch_identify_with_fallback(&people).await;
    let report = BatchReport::from_identifications(&identifications);

    let best_work = if args.best_work {
        output::research_best_work(&orchestrator, &report).await
    } else {
        Vec::new()
    };

    output::print_report(&report, &best_work, json)
}
