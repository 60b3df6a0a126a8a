use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use newsdigest::cli::{Cli, Commands};
use newsdigest::config::Config;
use newsdigest::delivery::EmailSink;
use newsdigest::domain::{DigestMessage, DigestQuery, DigestRequest, DigestResponse};
use newsdigest::errors::DigestResult;
use newsdigest::services::{DigestService, NewsAggregator};
use newsdigest::sources::syndication::FeedClient;
use newsdigest::sources::{ArticleBodyFetcher, SourceRegistry};
use newsdigest::summarizer::SummarizationGateway;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout only carries command output
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Returns whether the command succeeded
fn run() -> DigestResult<bool> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    match cli.command {
        Commands::Send {
            query,
            email,
            num_articles,
        } => cmd_send(&config, DigestQuery::new(query, num_articles, email)),
        Commands::Request { path } => cmd_request(&config, path),
        Commands::Preview {
            query,
            num_articles,
        } => cmd_preview(&config, DigestQuery::new(query, num_articles, "")),
        Commands::Sources => cmd_sources(&config),
    }
}

fn build_service(config: &Config) -> DigestResult<DigestService<EmailSink>> {
    let registry = SourceRegistry::from_config(config)?;
    let bodies = ArticleBodyFetcher::new(FeedClient::new(config.http_timeout)?);
    let summarizer = SummarizationGateway::from_config(config)?;
    let sink = EmailSink::new(config.mail.clone());

    Ok(DigestService::new(
        NewsAggregator::new(registry).with_body_fetcher(bodies),
        summarizer,
        sink,
    ))
}

fn print_response(response: &DigestResponse) -> DigestResult<bool> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(!response.is_error())
}

fn cmd_send(config: &Config, query: DigestQuery) -> DigestResult<bool> {
    let service = build_service(config)?;
    let response = service.run(&query);

    print_response(&response)
}

fn cmd_request(config: &Config, path: Option<String>) -> DigestResult<bool> {
    let content = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let request: DigestRequest = match serde_json::from_str(&content) {
        Ok(request) => request,
        Err(e) => return print_response(&DigestResponse::error(format!("Invalid request: {}", e))),
    };

    cmd_send(config, DigestQuery::from(request))
}

fn cmd_preview(config: &Config, query: DigestQuery) -> DigestResult<bool> {
    let service = build_service(config)?;
    let articles = service.compose(&query)?;
    let message = DigestMessage::from_articles(&articles);

    println!("{}\n", message.subject);
    println!("{}", message.text_body());

    Ok(true)
}

fn cmd_sources(config: &Config) -> DigestResult<bool> {
    let registry = SourceRegistry::from_config(config)?;
    let summarizer = SummarizationGateway::from_config(config)?;

    println!("News sources (priority order):\n");
    for (i, kind) in registry.kinds().iter().enumerate() {
        println!("  {}. {}", i + 1, kind);
    }
    println!();

    if summarizer.has_external() {
        println!("Summarizer: {} (extractive fallback)", config.summarizer_url);
    } else {
        println!("Summarizer: extractive only");
    }

    Ok(true)
}
