use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use quickflicks_core::{
    Config, Flashcards, Pipeline, Provider, ProviderSummarizer, YoutubeTranscriptSource,
    format_flashcards, full_text, require_video_id,
};

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, ValueEnum)]
enum CliProvider {
    Huggingface,
    Openai,
    Grok,
    Gemini,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Huggingface => Provider::HuggingFace,
            CliProvider::Openai => Provider::Openai,
            CliProvider::Grok => Provider::Grok,
            CliProvider::Gemini => Provider::Gemini,
        }
    }
}

#[derive(Parser)]
#[command(name = "quickflicks", version)]
#[command(about = "Summarize YouTube videos into flashcards from their transcripts")]
struct Cli {
    /// YouTube video URL
    #[arg(value_parser = non_empty_url)]
    url: String,

    /// Summarization provider (defaults to the config file, then Hugging Face)
    #[arg(short, long)]
    provider: Option<CliProvider>,

    /// Preferred transcript language, repeatable or comma-separated (e.g. "-l de -l en")
    #[arg(short, long, action = ArgAction::Append, value_delimiter = ',')]
    lang: Vec<String>,

    /// Words per chunk handed to the summarization model
    #[arg(long)]
    max_words: Option<usize>,

    /// HTTP(S) proxy for transcript requests
    #[arg(long)]
    proxy: Option<String>,

    /// Config file (default: platform config dir, quickflicks/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print flashcards as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn non_empty_url(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Please paste a YouTube URL".to_string());
    }
    Ok(value.to_string())
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref()).await?;

    if let Some(provider) = cli.provider.clone() {
        config.provider = provider.into();
    }
    if !cli.lang.is_empty() {
        config.transcript.languages = cli.lang.clone();
    }
    if let Some(max_words) = cli.max_words {
        config.chunking.max_words = max_words;
    }
    if let Some(proxy) = &cli.proxy {
        config.transcript.proxy = Some(proxy.clone());
    }

    config.validate()?;
    Ok(config)
}

async fn run(cli: &Cli) -> Result<Flashcards> {
    let config = load_config(cli).await?;
    let video_id = require_video_id(&cli.url)?;
    tracing::debug!(%video_id, provider = config.provider.name(), "Resolved video");

    let transcripts = YoutubeTranscriptSource::new(&config.transcript, config.http.timeout())?;
    let summarizer = ProviderSummarizer::from_provider(&config.provider, config.http.timeout())?;
    let pipeline = Pipeline::new(transcripts, summarizer, config.pipeline_config()?);

    // Step 1: Fetch transcript
    let spinner = create_spinner("Fetching transcript...");
    let fragments = match pipeline.fetch_transcript(&video_id).await {
        Ok(fragments) => fragments,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };
    let duration_mins = fragments
        .last()
        .map(|f| (f.start + f.duration) / 60.0)
        .unwrap_or(0.0);
    spinner.finish_with_message(format!(
        "{} Transcript fetched: {:.1} min, {} fragments",
        style("✓").green().bold(),
        duration_mins,
        fragments.len()
    ));

    // Step 2: Summarize
    let text = full_text(&fragments);
    let chunks = pipeline.chunk_count(&text);
    let spinner = create_spinner(&format!(
        "Summarizing {} chunks with {}...",
        chunks,
        config.provider.name()
    ));
    let sentences = match pipeline.summarize_text(&text).await {
        Ok(sentences) => sentences,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };
    spinner.finish_with_message(format!(
        "{} Summarized into {} flashcards ({})",
        style("✓").green().bold(),
        sentences.len(),
        config.provider.name()
    ));

    Ok(Flashcards::new(video_id, sentences))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !cli.json {
        println!(
            "\n{}  {}\n",
            style("quickflicks").cyan().bold(),
            style("Video Summarizer").dim()
        );
    }

    let flashcards = match run(&cli).await {
        Ok(flashcards) => flashcards,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&flashcards)?);
        return Ok(());
    }

    println!("{}", style("─".repeat(60)).dim());

    // Human-readable output
    let readable = format_flashcards(&flashcards);
    println!("{}", readable);

    Ok(())
}
