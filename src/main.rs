use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc;

use popup_contacts::batch::{read_inputs, Batch, ProgressEvent};
use popup_contacts::config::Settings;
use popup_contacts::{clean, extract_popup_data, CanonicalRecord, ProvisionalRecord};

#[derive(Parser)]
#[command(name = "popup_contacts", about = "Contact records from livestock-registry map popups")]
struct Cli {
    /// TOML settings file (overridden by POPUP_* environment variables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract and clean a single popup
    Extract {
        /// Visible popup text
        text_file: PathBuf,
        /// Popup markup, when the scraper captured it
        #[arg(long)]
        html: Option<PathBuf>,
        /// Page the popup was scraped from (default: configured source_url)
        #[arg(long)]
        source_url: Option<String>,
        /// Scrape date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Print the provisional record instead of the cleaned one
        #[arg(long)]
        raw: bool,
    },
    /// Clean a provisional record saved as JSON
    Clean {
        provisional_json: PathBuf,
    },
    /// Extract and clean every popup in a JSONL file
    Batch {
        input_jsonl: PathBuf,
        /// Output JSONL (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("loading settings")?;

    match cli.command {
        Commands::Extract {
            text_file,
            html,
            source_url,
            date,
            raw,
        } => {
            let text = read(&text_file)?;
            let html = html.as_deref().map(read).transpose()?;
            let meta = settings.metadata(source_url.as_deref(), date.as_deref());
            let provisional =
                extract_popup_data(&text, html.as_deref(), &meta, &settings.vocabulary());
            let json = if raw {
                serde_json::to_string_pretty(&provisional)?
            } else {
                serde_json::to_string_pretty(&clean(&provisional))?
            };
            println!("{}", json);
        }
        Commands::Clean { provisional_json } => {
            let raw = read(&provisional_json)?;
            let provisional: ProvisionalRecord = serde_json::from_str(&raw)
                .with_context(|| format!("parsing {}", provisional_json.display()))?;
            println!("{}", serde_json::to_string_pretty(&clean(&provisional))?);
        }
        Commands::Batch {
            input_jsonl,
            output,
        } => {
            let inputs = read_inputs(&input_jsonl)?;
            if inputs.is_empty() {
                eprintln!("No popups in {}.", input_jsonl.display());
                return Ok(());
            }
            let records = run_batch(settings, inputs).await?;
            write_records(&records, output.as_deref())?;
            eprintln!(
                "Wrote {} records in {}",
                records.len(),
                format_duration(t0.elapsed())
            );
        }
    }

    Ok(())
}

/// Batch work runs on a blocking thread; this task only drives the bar.
async fn run_batch(
    settings: Settings,
    inputs: Vec<popup_contacts::PopupInput>,
) -> anyhow::Result<Vec<CanonicalRecord>> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let worker = tokio::task::spawn_blocking(move || {
        let batch = Batch::new(settings);
        batch.run(&inputs, Some(&tx))
    });

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    while let Some(event) = rx.recv().await {
        match event {
            ProgressEvent::Started { total } => pb.set_length(total as u64),
            ProgressEvent::Processed { business_name, .. } => {
                pb.set_message(business_name);
                pb.inc(1);
            }
            ProgressEvent::Finished { .. } => break,
        }
    }
    pb.finish_and_clear();

    Ok(worker.await.context("batch worker panicked")??)
}

fn write_records(records: &[CanonicalRecord], output: Option<&Path>) -> anyhow::Result<()> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(
            fs::File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut out = BufWriter::new(sink);
    for record in records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
