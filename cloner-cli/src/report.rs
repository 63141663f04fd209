//! Clone report rendering.

use anyhow::Result;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use cloner_git::{CloneReport, ProjectOutcome};

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "project")]
    project: String,
    #[tabled(rename = "outcome")]
    outcome: String,
    #[tabled(rename = "detail")]
    detail: String,
}

pub fn print_table(report: &CloneReport) {
    if report.results.is_empty() {
        println!("✓ no projects declared, nothing to clone");
        return;
    }

    let rows: Vec<ReportRow> = report
        .results
        .iter()
        .map(|r| ReportRow {
            project: r.project.to_string(),
            outcome: outcome_label(&r.outcome),
            detail: outcome_detail(&r.outcome),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    println!(
        "✓ {} cloned, {} skipped, {} failed",
        report.cloned(),
        report.skipped(),
        report.failed()
    );
}

pub fn print_json(report: &CloneReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn outcome_label(outcome: &ProjectOutcome) -> String {
    match outcome {
        ProjectOutcome::Cloned { .. } => "cloned".green().to_string(),
        ProjectOutcome::AlreadyExists { .. } => "exists".cyan().to_string(),
        ProjectOutcome::Unsupported { .. } => "unsupported".yellow().to_string(),
        ProjectOutcome::Failed { .. } => "failed".red().bold().to_string(),
    }
}

fn outcome_detail(outcome: &ProjectOutcome) -> String {
    match outcome {
        ProjectOutcome::Cloned {
            path: Some(path), ..
        } => path.display().to_string(),
        ProjectOutcome::Cloned { path: None, .. } => "-".to_string(),
        ProjectOutcome::AlreadyExists { path } => format!("{} already exists", path.display()),
        ProjectOutcome::Unsupported {
            source_type: Some(t),
        } => format!("source type '{t}' (git only)"),
        ProjectOutcome::Unsupported { source_type: None } => "no source".to_string(),
        ProjectOutcome::Failed { location, .. } => location.clone(),
    }
}
