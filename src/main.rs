use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use plenum::{
    execute_classify, execute_clean, execute_generate, load_metadata, read_corpus, write_corpus,
    write_labels, ClassifyConfig, GeminiClient, GeminiConfig, SegmentConfig,
};

#[derive(Parser)]
#[command(name = "plenum")]
#[command(author, version, about = "Parliamentary speech corpus reconstruction pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Segment speech transcripts into a paragraph corpus
    Generate {
        /// Directory of speech transcript files (.txt)
        #[arg(short, long)]
        corpus_dir: PathBuf,

        /// Metadata CSV keyed by file name
        #[arg(short, long)]
        metadata: PathBuf,

        /// Output corpus CSV
        #[arg(short, long)]
        output: PathBuf,

        /// Maximum paragraph length before re-splitting
        #[arg(long, default_value = "800")]
        max_paragraph_len: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Filter a paragraph corpus into content and noise
    Clean {
        /// Input corpus CSV
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV for the cleaned corpus
        #[arg(short, long)]
        output: PathBuf,

        /// Output CSV for removed paragraphs (audit)
        #[arg(short, long)]
        removed: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Label a cleaned corpus with the thematic classifier
    Classify {
        /// Input corpus CSV (cleaned)
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV for classification results
        #[arg(short, long)]
        output: PathBuf,

        /// Checkpoint CSV, written periodically and resumed from
        #[arg(long)]
        checkpoint: Option<PathBuf>,

        /// Checkpoint interval in paragraphs
        #[arg(long, default_value = "50")]
        checkpoint_every: usize,

        /// Delay between requests in milliseconds
        #[arg(long, default_value = "1000")]
        request_delay_ms: u64,

        /// Classify at most this many paragraphs
        #[arg(long)]
        limit: Option<usize>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print statistics for a paragraph corpus
    Analyze {
        /// Input corpus CSV
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            corpus_dir,
            metadata,
            output,
            max_paragraph_len,
            verbose,
        } => {
            setup_logging(verbose);
            generate(corpus_dir, metadata, output, max_paragraph_len)
        }
        Commands::Clean {
            input,
            output,
            removed,
            verbose,
        } => {
            setup_logging(verbose);
            clean(input, output, removed)
        }
        Commands::Classify {
            input,
            output,
            checkpoint,
            checkpoint_every,
            request_delay_ms,
            limit,
            verbose,
        } => {
            setup_logging(verbose);
            classify(input, output, checkpoint, checkpoint_every, request_delay_ms, limit).await
        }
        Commands::Analyze { input, verbose } => {
            setup_logging(verbose);
            analyze(input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn generate(
    corpus_dir: PathBuf,
    metadata_path: PathBuf,
    output: PathBuf,
    max_paragraph_len: usize,
) -> Result<()> {
    info!("Loading metadata from {:?}", metadata_path);
    let metadata = load_metadata(&metadata_path).context("Failed to load metadata")?;
    info!("Loaded metadata for {} speeches", metadata.len());

    let config = SegmentConfig {
        max_paragraph_len,
        ..Default::default()
    };
    let result = execute_generate(&corpus_dir, &metadata, &config)?;

    for failure in &result.failures {
        info!("Skipped {}: {}", failure.file_name, failure.error);
    }

    write_corpus(&output, &result.paragraphs).context("Failed to write corpus")?;
    info!(
        "Wrote {} paragraphs from {} speeches to {:?}",
        result.paragraphs.len(),
        result.speeches_processed,
        output
    );

    Ok(())
}

fn clean(input: PathBuf, output: PathBuf, removed_path: PathBuf) -> Result<()> {
    info!("Loading corpus from {:?}", input);
    let paragraphs = read_corpus(&input).context("Failed to read corpus")?;
    let total = paragraphs.len();
    info!("Analyzing {} paragraphs", total);

    let result = execute_clean(paragraphs);

    write_corpus(&output, &result.kept).context("Failed to write cleaned corpus")?;
    write_corpus(&removed_path, &result.removed).context("Failed to write removed corpus")?;

    let kept_pct = if total > 0 {
        result.kept.len() as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    info!(
        "Kept {} paragraphs ({:.1}%), removed {}",
        result.kept.len(),
        kept_pct,
        result.removed.len()
    );

    let mut counts: Vec<_> = result.rule_counts.iter().collect();
    counts.sort_by(|a, b| b.1.cmp(a.1));
    for (rule, count) in counts {
        info!("  {}: {}", rule, count);
    }

    Ok(())
}

async fn classify(
    input: PathBuf,
    output: PathBuf,
    checkpoint: Option<PathBuf>,
    checkpoint_every: usize,
    request_delay_ms: u64,
    limit: Option<usize>,
) -> Result<()> {
    info!("Loading corpus from {:?}", input);
    let paragraphs = read_corpus(&input).context("Failed to read corpus")?;
    info!("Classifying {} paragraphs", paragraphs.len());

    let api_config = GeminiConfig::from_env()?;
    let client = GeminiClient::new(api_config);

    let config = ClassifyConfig {
        checkpoint_every,
        request_delay_ms,
        limit,
    };
    let result =
        execute_classify(&client, &paragraphs, checkpoint.as_deref(), &config).await?;

    write_labels(&output, &result.labels).context("Failed to write results")?;
    info!(
        "Wrote {} labels to {:?} ({} failures)",
        result.labels.len(),
        output,
        result.failures
    );

    Ok(())
}

fn analyze(input: PathBuf) -> Result<()> {
    let paragraphs = read_corpus(&input).context("Failed to read corpus")?;

    println!("Corpus Analysis");
    println!("===============");
    println!("Total paragraphs: {}", paragraphs.len());

    let mut speeches: Vec<&str> = paragraphs.iter().map(|p| p.speech_id.as_str()).collect();
    speeches.sort();
    speeches.dedup();
    println!("Speeches: {}", speeches.len());
    println!();

    if paragraphs.is_empty() {
        return Ok(());
    }

    let mut lengths: Vec<usize> = paragraphs.iter().map(|p| p.paragraph_length).collect();
    lengths.sort();
    let sum: usize = lengths.iter().sum();

    println!("Paragraph Length");
    println!("----------------");
    println!("Min: {} characters", lengths[0]);
    println!("Max: {} characters", lengths[lengths.len() - 1]);
    println!("Average: {:.1} characters", sum as f64 / lengths.len() as f64);
    println!("Median: {} characters", lengths[lengths.len() / 2]);
    println!();

    println!("Paragraphs per Speech");
    println!("---------------------");
    for speech_id in speeches {
        let count = paragraphs
            .iter()
            .filter(|p| p.speech_id == speech_id)
            .count();
        println!("{}: {}", speech_id, count);
    }

    Ok(())
}
