mod cli;
mod config;
mod error;
mod intake;
mod orchestrator;
mod presenter;
mod screening;
mod ui;
mod workflow;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use console::Style;

use cli::{Cli, Command};
use config::TriagemConfig;
use intake::IntakeValidator;
use orchestrator::SubmissionOrchestrator;
use presenter::download_request;
use screening::{ScreeningClient, StubScreeningService};
use ui::SubmissionProgress;
use workflow::{DocumentRef, WorkflowState};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{} {err:#}", Style::new().red().bold().apply_to("error:"));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = TriagemConfig::load().context("failed to load configuration")?;
    let service_url = cli.service_url.unwrap_or(config.service_url.clone());

    match cli.command {
        Command::Screen {
            criteria,
            criteria_file,
            documents,
            save_report,
        } => {
            let criteria_text = resolve_criteria(criteria, criteria_file.as_deref())?;
            let client = ScreeningClient::new(service_url);
            screen(
                &config,
                &client,
                criteria_text,
                documents,
                save_report,
                cli.verbose,
            )
            .await?;
        }
        Command::Demo => {
            let criteria = "Backend engineer with Rust and distributed systems experience";
            println!("Running demo against the built-in stub backend.\n");
            demo(&config, criteria, cli.verbose).await?;
        }
    }

    Ok(())
}

/// Resolve the criteria text from the inline flag or a file.
fn resolve_criteria(inline: Option<String>, file: Option<&Path>) -> Result<String> {
    match (inline, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read criteria file {}", path.display())),
        (None, None) => anyhow::bail!("either --criteria or --criteria-file is required"),
    }
}

async fn screen(
    config: &TriagemConfig,
    client: &ScreeningClient,
    criteria_text: String,
    documents: Vec<PathBuf>,
    save_report: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let mut state = WorkflowState::new();
    state.set_criteria(criteria_text);
    state.advance().context("criteria rejected")?;
    ui::print_step(state.step);

    let mut incoming = Vec::with_capacity(documents.len());
    for path in &documents {
        let doc = DocumentRef::from_path(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        incoming.push(doc);
    }

    let validator = IntakeValidator::from_config(config);
    let added = validator
        .accept_candidates(&mut state, incoming)
        .context("document intake rejected")?;
    println!("Accepted {added} document(s) for screening.");

    let progress = SubmissionProgress::start(state.documents.len());
    let mut orchestrator = SubmissionOrchestrator::new();
    let record = match orchestrator.submit(&mut state, client, &progress).await {
        Ok(record) => {
            progress.finish_success();
            record
        }
        Err(err) => {
            let message = state.error.clone().unwrap_or_else(|| err.to_string());
            progress.finish_failure(&message);
            return Err(err).context("submission failed");
        }
    };

    let report = state
        .report
        .as_ref()
        .context("submission succeeded without a report")?;
    ui::print_step(state.step);
    progress.print_report(report);
    if verbose {
        progress.print_record(&record);
    }

    if let Some(path) = save_report {
        match download_request(report) {
            Some(url) => {
                let bytes = client
                    .fetch_report(url)
                    .await
                    .context("failed to download the generated report")?;
                std::fs::write(&path, bytes)
                    .with_context(|| format!("failed to write report to {}", path.display()))?;
                println!("\nReport saved to {}.", path.display());
            }
            None => println!("\nThe service did not produce a downloadable report."),
        }
    }

    Ok(())
}

async fn demo(config: &TriagemConfig, criteria: &str, verbose: bool) -> Result<()> {
    let backend = StubScreeningService;
    let mut state = WorkflowState::new();
    state.set_criteria(criteria);
    state.advance().context("criteria rejected")?;
    ui::print_step(state.step);

    let samples = vec![
        DocumentRef::from_bytes(
            "ana-souza.pdf",
            workflow::MIME_PDF,
            b"%PDF-1.4 demo".to_vec(),
        ),
        DocumentRef::from_bytes(
            "bruno-lima.docx",
            workflow::MIME_DOCX,
            b"PK demo docx".to_vec(),
        ),
        DocumentRef::from_bytes(
            "carla-mendes.pdf",
            workflow::MIME_PDF,
            b"%PDF-1.4 demo".to_vec(),
        ),
    ];

    let validator = IntakeValidator::from_config(config);
    validator
        .accept_candidates(&mut state, samples)
        .context("demo intake rejected")?;

    let progress = SubmissionProgress::start(state.documents.len());
    let mut orchestrator = SubmissionOrchestrator::new();
    let record = match orchestrator.submit(&mut state, &backend, &progress).await {
        Ok(record) => {
            progress.finish_success();
            record
        }
        Err(err) => {
            let message = state.error.clone().unwrap_or_else(|| err.to_string());
            progress.finish_failure(&message);
            return Err(err).context("demo submission failed");
        }
    };

    let report = state
        .report
        .as_ref()
        .context("demo submission succeeded without a report")?;
    ui::print_step(state.step);
    progress.print_report(report);
    if verbose {
        progress.print_record(&record);
    }

    Ok(())
}
