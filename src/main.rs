use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use stencil::matcher::TemplateMatcher;
use stencil::samples::SampleStore;
use stencil::server::{self, AppState};
use stencil::translator::{Translator, TranslatorConfig};

#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(about = "Template-matching validation service for generated program text")]
#[command(version)]
struct Args {
    /// External translator executable, invoked with the staged source path
    #[arg(long, env = "TRANSLATOR_BINARY")]
    translator_binary: PathBuf,

    /// Directory holding stored samples
    #[arg(long, default_value = "samples")]
    samples_dir: PathBuf,

    /// Staging directory for translator input files
    #[arg(long, default_value = "staging")]
    staging_dir: PathBuf,

    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:8000")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging enables observability and debugging in production
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting stencil");
    info!(?args, "Parsed CLI arguments");

    // WHY: validate the translator path early to fail fast with a clear error
    if !args.translator_binary.exists() {
        anyhow::bail!(
            "Translator binary does not exist: {}",
            args.translator_binary.display()
        );
    }

    tokio::fs::create_dir_all(&args.samples_dir).await?;
    tokio::fs::create_dir_all(&args.staging_dir).await?;

    info!("Service setup validation completed successfully");

    let matcher = TemplateMatcher::with_default_config();
    let translator = Translator::new(TranslatorConfig {
        binary: args.translator_binary,
        staging_dir: args.staging_dir,
    });
    let samples = SampleStore::new(args.samples_dir);

    let state = AppState::new(matcher, translator, samples);
    server::run(state, &args.bind).await
}
