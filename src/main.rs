use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use delay_mitigation::fixtures::{SAMPLE_EMAIL, sample_delay_triggers};
use delay_mitigation::schema::{parse_trigger_list, trigger_list_schema};
use delay_mitigation::{
    DelayTrigger, FileReportWriter, MitigationEngine, MitigationRecommendation, OutputFormat,
    RecommendationSummary, ReportWriter, Settings, parse_email_detailed, render_report, to_json,
    to_table,
};

/// Delay Mitigation CLI: rule-based responses to supplier delivery delays
#[derive(Parser, Debug)]
#[command(name = "delay-mitigation")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze the built-in sample triggers and sample email
    #[command(name = "demo")]
    Demo {
        /// Directory to write report files into
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Analyze a JSON file containing an array of delay triggers
    #[command(name = "analyze")]
    Analyze {
        #[command(flatten)]
        args: AnalyzeArgs,
    },

    /// Extract delay triggers from email text files
    #[command(name = "parse")]
    Parse {
        #[command(flatten)]
        args: ParseArgs,
    },

    /// Print the JSON Schema for trigger input files
    #[command(name = "schema")]
    Schema,
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Path to trigger JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Directory to write report files into (overrides config)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ParseArgs {
    /// Email file path or glob pattern (e.g. "inbox/*.txt")
    pattern: String,

    /// Run the parsed triggers through the mitigation engine
    #[arg(short, long)]
    analyze: bool,

    /// Output format for analyzed recommendations (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Directory to write triggers and report files into (overrides config)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let settings = Settings::load_or_default(cli.config.as_deref())?;
    let engine = MitigationEngine::with_proximity(settings.proximity.clone());

    match cli.command {
        Some(Command::Demo { output_dir }) => {
            let output_dir = output_dir.or(settings.output.dir.clone());
            handle_demo(&engine, output_dir).await
        }
        Some(Command::Analyze { args }) => handle_analyze(&engine, &settings, args).await,
        Some(Command::Parse { args }) => handle_parse(&engine, &settings, args).await,
        Some(Command::Schema) => {
            println!("{}", serde_json::to_string_pretty(&trigger_list_schema())?);
            Ok(())
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            eprintln!("Example: delay-mitigation analyze --input triggers.json --format table");
            std::process::exit(1);
        }
    }
}

/// Keep successful recommendations; log and drop the rest
fn collect_recommendations(
    engine: &MitigationEngine,
    triggers: &[DelayTrigger],
) -> Vec<MitigationRecommendation> {
    engine
        .process_delay_triggers(triggers)
        .into_iter()
        .zip(triggers)
        .filter_map(|(result, trigger)| match result {
            Ok(rec) => Some(rec),
            Err(e) => {
                warn!("Skipping {}: {}", trigger.sku, e);
                None
            }
        })
        .collect()
}

fn render(format: OutputFormat, recommendations: &[MitigationRecommendation]) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(to_json(recommendations)?),
        OutputFormat::Table => Ok(to_table(recommendations)),
        OutputFormat::Report => render_report(recommendations).context("Failed to render report"),
    }
}

async fn write_reports(dir: Option<&Path>, recommendations: &[MitigationRecommendation]) -> Result<()> {
    if let Some(dir) = dir {
        let writer = FileReportWriter::new(dir);
        let paths = writer.write_all(recommendations).await?;
        info!("Wrote {} report files to {:?}", paths.len(), dir);
    }
    Ok(())
}

fn log_summary(recommendations: &[MitigationRecommendation]) {
    let summary = RecommendationSummary::from_recommendations(recommendations);
    info!(
        "{} recommendations, {} critical",
        summary.total,
        summary.critical_count()
    );
}

async fn handle_demo(engine: &MitigationEngine, output_dir: Option<PathBuf>) -> Result<()> {
    info!("Running delay mitigation demo");

    let recommendations = collect_recommendations(engine, &sample_delay_triggers());
    log_summary(&recommendations);

    println!("=== Delivery Delay Mitigation Demo ===\n");
    println!("JSON Output:");
    println!("{}", to_json(&recommendations)?);
    println!("\n{}\n", "=".repeat(50));
    println!("Table Output:");
    println!("{}", to_table(&recommendations));
    println!("\n{}\n", "=".repeat(50));
    println!("{}", render_report(&recommendations)?);

    println!("\n=== Email Parsing Demo ===\n");
    match parse_email_detailed(SAMPLE_EMAIL) {
        Ok(trigger) => {
            println!("Parsed delay trigger:");
            println!("{}", serde_json::to_string_pretty(&trigger)?);
            match engine.analyze_delay(&trigger) {
                Ok(rec) => {
                    println!("\nGenerated recommendation:");
                    println!("{}", serde_json::to_string_pretty(&rec)?);
                }
                Err(e) => println!("\nNo recommendation: {}", e),
            }
        }
        Err(e) => println!("Failed to parse email content: {}", e),
    }

    write_reports(output_dir.as_deref(), &recommendations).await
}

async fn handle_analyze(engine: &MitigationEngine, settings: &Settings, args: AnalyzeArgs) -> Result<()> {
    let content = tokio::fs::read_to_string(&args.input)
        .await
        .context(format!("Failed to read: {:?}", args.input))?;
    let triggers = parse_trigger_list(&content)
        .context(format!("Invalid trigger file: {:?}", args.input))?;
    info!("Loaded {} triggers from {:?}", triggers.len(), args.input);

    let recommendations = collect_recommendations(engine, &triggers);
    log_summary(&recommendations);

    let format = args.format.unwrap_or(settings.output.format);
    println!("{}", render(format, &recommendations)?);

    let output_dir = args.output_dir.or(settings.output.dir.clone());
    write_reports(output_dir.as_deref(), &recommendations).await
}

/// Resolve a literal path or glob pattern to email files
fn resolve_email_paths(pattern: &str) -> Result<Vec<PathBuf>> {
    let literal = Path::new(pattern);
    if literal.is_file() {
        return Ok(vec![literal.to_path_buf()]);
    }

    let mut paths = Vec::new();
    for entry in glob::glob(pattern).context(format!("Invalid glob pattern: {}", pattern))? {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) => warn!("Skipping unreadable path: {}", e),
        }
    }

    if paths.is_empty() {
        anyhow::bail!("No email files match {}", pattern);
    }
    Ok(paths)
}

async fn handle_parse(engine: &MitigationEngine, settings: &Settings, args: ParseArgs) -> Result<()> {
    let paths = resolve_email_paths(&args.pattern)?;

    let mut triggers = Vec::new();
    for path in &paths {
        let body = tokio::fs::read_to_string(path)
            .await
            .context(format!("Failed to read: {:?}", path))?;
        match parse_email_detailed(&body) {
            Ok(trigger) => {
                info!("Parsed {} from {:?}", trigger.sku, path);
                triggers.push(trigger);
            }
            Err(e) => warn!("Failed to parse {:?}: {}", path, e),
        }
    }

    if triggers.is_empty() {
        anyhow::bail!("No delay triggers could be extracted from {} file(s)", paths.len());
    }
    info!("Extracted {} of {} emails", triggers.len(), paths.len());

    let output_dir = args.output_dir.or(settings.output.dir.clone());

    if !args.analyze {
        println!("{}", serde_json::to_string_pretty(&triggers)?);
        if let Some(dir) = &output_dir {
            FileReportWriter::new(dir).write_triggers(&triggers).await?;
        }
        return Ok(());
    }

    let recommendations = collect_recommendations(engine, &triggers);
    log_summary(&recommendations);

    let format = args.format.unwrap_or(settings.output.format);
    println!("{}", render(format, &recommendations)?);

    if let Some(dir) = &output_dir {
        FileReportWriter::new(dir).write_triggers(&triggers).await?;
    }
    write_reports(output_dir.as_deref(), &recommendations).await
}
