use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use edulearn::{EduLearn, Language, Overrides, Role, Settings};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (built-in questions if omitted)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Only ask questions of this subject
    #[arg(short, long)]
    category: Option<String>,

    /// Content language: en, ta or hi
    #[arg(short, long)]
    language: Option<Language>,

    /// student or teacher
    #[arg(short, long)]
    role: Option<Role>,

    /// Settings file (defaults to ./edulearn.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where finished attempts are appended
    #[arg(long)]
    attempts: Option<PathBuf>,

    /// Log file; the terminal is taken by the UI
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("edulearn=info")),
        )
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref()).context("failed to load settings")?;
    settings.apply(Overrides {
        language: args.language,
        role: args.role,
        questions: args.questions,
        category: args.category,
        attempts_log: args.attempts,
        log_file: args.log_file,
    });

    init_tracing(&settings.log_file)?;
    tracing::info!(
        language = %settings.language,
        role = %settings.role,
        "starting edulearn"
    );

    let app = EduLearn::new(settings).context("failed to start")?;
    app.run().await.context("quiz exited with an error")?;
    Ok(())
}
