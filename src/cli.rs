//! Command-line interface for the auditor.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::annotate::Annotator;
use crate::audit::{ask_document, run_audit, segment_document};
use crate::config::validate_input_path;
use crate::error::Result;
use crate::llm::LlmClient;
use crate::report::{save_audit_log, save_markdown_report};
use crate::types::RiskLabel;

/// Contract Auditor - segment contracts into clauses and score risk.
#[derive(Parser)]
#[command(name = "contract-auditor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full risk audit and write JSON log + Markdown report.
    Audit {
        /// Contract file (.pdf, .docx or .txt)
        file: PathBuf,

        /// Output directory (default: audit_logs/)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Model to use for annotation
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Print detected clauses without calling the model.
    Segment {
        /// Contract file (.pdf, .docx or .txt)
        file: PathBuf,
    },

    /// Ask a question about a contract.
    Ask {
        /// Contract file (.pdf, .docx or .txt)
        file: PathBuf,

        /// The question to answer
        question: String,

        /// Model to use
        #[arg(short, long)]
        model: Option<String>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Audit {
            file,
            output,
            model,
        } => audit_command(&file, output.as_deref(), model.as_deref()),
        Commands::Segment { file } => segment_command(&file),
        Commands::Ask {
            file,
            question,
            model,
        } => ask_command(&file, &question, model.as_deref()),
    }
}

/// Execute the audit command.
fn audit_command(
    file: &std::path::Path,
    output: Option<&std::path::Path>,
    model: Option<&str>,
) -> Result<()> {
    // Validate input and API key before any extraction or network call
    validate_input_path(file)?;
    let annotator = Annotator::new(LlmClient::from_env(model)?);

    println!(
        "{} {} with {}",
        style("Auditing").bold(),
        style(file.display()).cyan(),
        style(annotator.model()).green()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Analyzing clauses...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let audit = match run_audit(file, &annotator, |done, total| {
        pb.set_message(format!("Analyzing clause {done}/{total}..."));
    }) {
        Ok(audit) => audit,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Writing reports...");

    let log_path = save_audit_log(&audit, output);
    let report_path = save_markdown_report(&audit, output);
    pb.finish_and_clear();
    let log_path = log_path?;
    let report_path = report_path?;

    println!("  Type: {}", style(&audit.document_type).green());
    println!("  Clauses: {}", audit.detailed_analysis.len());
    println!(
        "  Risk score: {}",
        styled_score(audit.risk_score, &format!("{}/100", audit.risk_score))
    );
    println!();
    println!(
        "{} {}",
        style("JSON log:").green().bold(),
        log_path.display()
    );
    println!(
        "{} {}",
        style("Report:").green().bold(),
        report_path.display()
    );

    Ok(())
}

/// Color a score by its risk band.
fn styled_score(score: u8, text: &str) -> console::StyledObject<String> {
    let text = text.to_string();
    match RiskLabel::from_score(score) {
        RiskLabel::High => style(text).red().bold(),
        RiskLabel::Medium => style(text).yellow().bold(),
        RiskLabel::Low => style(text).green().bold(),
    }
}

/// Execute the segment command.
fn segment_command(file: &std::path::Path) -> Result<()> {
    let clauses = segment_document(file)?;

    println!(
        "{} {} clause(s) in {}",
        style("Found").bold(),
        clauses.len(),
        style(file.display()).cyan()
    );
    println!();

    for clause in &clauses {
        let preview: String = clause.content.chars().take(70).collect();
        let ellipsis = if clause.content.chars().count() > 70 {
            "..."
        } else {
            ""
        };
        println!("{}", style(&clause.header).bold());
        println!("  {preview}{ellipsis}");
    }

    Ok(())
}

/// Execute the ask command.
fn ask_command(file: &std::path::Path, question: &str, model: Option<&str>) -> Result<()> {
    validate_input_path(file)?;
    let annotator = Annotator::new(LlmClient::from_env(model)?);

    let answer = ask_document(file, &annotator, question)?;
    println!("{answer}");

    Ok(())
}
