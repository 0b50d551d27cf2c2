//! Command-line interface for article trust analysis
//!
//! Subcommands:
//! - `analyze` - Analyze one article from an argument, a file or stdin
//! - `batch` - Analyze a JSON Lines file of articles
//! - `train` - Train and save a vectorizer/classifier pair
//! - `init-config` - Write the default configuration

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use article_trust::{
    classifier::{load_dataset, sample_dataset, Trainer},
    clean_article_text,
    utils::{Config, ModelKind},
    setup_logging, AnalysisInput, AnalysisResult, ArticleAnalyzer,
};

const DEFAULT_CONFIG: &str = "article_trust.toml";

#[derive(Parser)]
#[command(name = "article-trust")]
#[command(author = "ML Trading Examples")]
#[command(version = article_trust::VERSION)]
#[command(about = "Fake-news classification, sentiment, entities and source trust for articles", long_about = None)]
struct Cli {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single article
    Analyze {
        /// Article text
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// Read the article from a file (stdin when neither is given)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// URL the article came from
        #[arg(short, long)]
        url: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Analyze articles from a JSON Lines file of {"text", "source_url"} objects
    Batch {
        /// Input file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Train the statistical classifier
    Train {
        /// Labeled CSV or JSONL with `text` and `label` columns (built-in sample when omitted)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Classifier family
        #[arg(short, long, value_enum)]
        model: Option<ModelArg>,

        /// Directory for the saved artifacts
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Write the default configuration file
    InitConfig {
        /// Output path
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModelArg {
    Logistic,
    NaiveBayes,
}

impl From<ModelArg> for ModelKind {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Logistic => ModelKind::Logistic,
            ModelArg::NaiveBayes => ModelKind::NaiveBayes,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::load_or_default(DEFAULT_CONFIG),
    };

    let log_level = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    setup_logging(log_level)?;

    match cli.command {
        Commands::Analyze {
            text,
            file,
            url,
            format,
        } => {
            let text = read_article(text, file.as_deref())?;
            analyze_article(&config, &text, url.as_deref(), format)?;
        }

        Commands::Batch { input, output } => {
            analyze_batch(&config, &input, output.as_deref())?;
        }

        Commands::Train {
            data,
            model,
            output_dir,
        } => {
            train_model(config, data.as_deref(), model, output_dir)?;
        }

        Commands::InitConfig { output } => {
            Config::create_default(&output)?;
            println!("Default configuration written to {}", output.display());
        }
    }

    Ok(())
}

/// Inline text is used as given; file and stdin input are treated as raw uploads
fn read_article(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(clean_article_text(&raw))
}

fn analyze_article(
    config: &Config,
    text: &str,
    url: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let analyzer = ArticleAnalyzer::from_config(config);
    if !analyzer.has_trained_model() {
        info!("No trained model loaded, using keyword heuristic");
    }

    let result = analyzer.analyze(text, url);
    print_result(&result, format)
}

fn print_result(result: &AnalysisResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

fn analyze_batch(config: &Config, input: &Path, output: Option<&Path>) -> Result<()> {
    let reader = BufReader::new(
        std::fs::File::open(input).with_context(|| format!("failed to open {}", input.display()))?,
    );

    let mut inputs = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let article: AnalysisInput = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid article record", input.display(), index + 1))?;
        inputs.push(article);
    }
    info!("Analyzing {} articles from {}", inputs.len(), input.display());

    let analyzer = ArticleAnalyzer::from_config(config);
    let results = analyzer.analyze_batch(&inputs);

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(std::io::BufWriter::new(std::fs::File::create(path)?)),
        None => Box::new(std::io::stdout().lock()),
    };
    for result in &results {
        writeln!(writer, "{}", serde_json::to_string(result)?)?;
    }
    writer.flush()?;

    if let Some(path) = output {
        info!("Saved {} results to {}", results.len(), path.display());
    }
    Ok(())
}

fn train_model(
    mut config: Config,
    data: Option<&Path>,
    model: Option<ModelArg>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    if let Some(model) = model {
        config.training.model = model.into();
    }
    if let Some(dir) = output_dir {
        config.artifacts.dir = dir;
    }

    let samples = match data {
        Some(path) => load_dataset(path)?,
        None => {
            info!("No dataset given, training on the built-in sample corpus");
            sample_dataset()
        }
    };
    if samples.is_empty() {
        bail!("dataset contains no samples");
    }

    let outcome = Trainer::new(config.training.clone()).train(&samples)?;
    println!("{}", outcome.report);

    outcome.artifacts.save(&config.artifacts)?;
    println!(
        "Artifacts saved to {} and {}",
        config.artifacts.vectorizer_path().display(),
        config.artifacts.model_path().display()
    );

    Ok(())
}
