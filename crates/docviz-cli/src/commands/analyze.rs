//! Analyze command - render a chart for a single document.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use docviz_core::models::request::{MAX_TOP_K, MIN_TOP_K};
use docviz_core::{AnalysisRequest, Operation, Pipeline, UploadedDocument, PLOT_FILE_NAME};

use super::config::load_config;

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input document (.txt, .docx or .pdf)
    #[arg(required = true)]
    input: PathBuf,

    /// Analysis to run
    #[arg(long, value_enum, default_value = "word-cloud")]
    operation: OperationArg,

    /// Keep English stopwords
    #[arg(long)]
    keep_stopwords: bool,

    /// Keep the original casing
    #[arg(long)]
    case_sensitive: bool,

    /// Bars in the frequency chart (1-100)
    #[arg(long, value_parser = top_k)]
    max_words: Option<usize>,

    /// Word pairs in the bigram graph (1-100)
    #[arg(long, value_parser = top_k)]
    max_bigrams: Option<usize>,

    /// Output PNG path
    #[arg(short, long, default_value = PLOT_FILE_NAME)]
    output: PathBuf,

    /// Print the analysis result as JSON
    #[arg(long)]
    json: bool,

    /// TrueType/OpenType font for labels
    #[arg(long)]
    font: Option<PathBuf>,

    /// Media type of the input instead of guessing from the extension
    #[arg(long)]
    media_type: Option<String>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OperationArg {
    /// Word cloud
    #[value(alias = "cloud")]
    WordCloud,
    /// Horizontal bar chart of the most frequent words
    #[value(alias = "word-frequency")]
    Frequency,
    /// Graph of the most frequent adjacent word pairs
    Bigrams,
    /// Pie chart of positive, neutral and negative lines
    Sentiment,
}

impl From<OperationArg> for Operation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::WordCloud => Operation::WordCloud,
            OperationArg::Frequency => Operation::WordFrequency,
            OperationArg::Bigrams => Operation::Bigrams,
            OperationArg::Sentiment => Operation::Sentiment,
        }
    }
}

fn top_k(value: &str) -> Result<usize, String> {
    let k: usize = value.parse().map_err(|_| format!("not a number: {}", value))?;
    if (MIN_TOP_K..=MAX_TOP_K).contains(&k) {
        Ok(k)
    } else {
        Err(format!("must be between {} and {}", MIN_TOP_K, MAX_TOP_K))
    }
}

/// Read the input, honouring an explicit media type.
pub fn open_document(input: &Path, media_type: Option<&str>) -> anyhow::Result<UploadedDocument> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    let document = match media_type {
        Some(media_type) => UploadedDocument::from_media_type(fs::read(input)?, media_type)?,
        None => UploadedDocument::open(input)?,
    };
    Ok(document)
}

pub async fn run(args: AnalyzeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(font) = &args.font {
        config.render.font_path = Some(font.clone());
    }

    let document = open_document(&args.input, args.media_type.as_deref())?;
    info!("Processing file: {}", args.input.display());

    let operation = Operation::from(args.operation);
    let mut request = AnalysisRequest::from_config(document, operation, &config.analysis);
    if args.keep_stopwords {
        request = request.with_stopword_removal(false);
    }
    if args.case_sensitive {
        request = request.with_case_sensitive(true);
    }
    if let Some(max_words) = args.max_words {
        request = request.with_max_words(max_words);
    }
    if let Some(max_bigrams) = args.max_bigrams {
        request = request.with_max_bigrams(max_bigrams);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("{}...", operation.label()));

    let result = Pipeline::new(config).and_then(|pipeline| pipeline.run(&request));
    pb.finish_and_clear();
    let output = result?;

    for warning in &output.extracted.warnings {
        eprintln!("{} {}", style("⚠").yellow(), warning);
    }

    fs::write(&args.output, &output.image.png)?;
    println!(
        "{} {} ({}) written to {} ({}x{})",
        style("✓").green(),
        operation.label(),
        output.analysis.summary(),
        args.output.display(),
        output.image.width,
        output.image.height
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output.analysis)?);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_k_bounds() {
        assert_eq!(top_k("1"), Ok(1));
        assert_eq!(top_k("100"), Ok(100));
        assert!(top_k("0").is_err());
        assert!(top_k("101").is_err());
        assert!(top_k("ten").is_err());
    }

    #[test]
    fn test_operation_mapping() {
        assert_eq!(Operation::from(OperationArg::Frequency), Operation::WordFrequency);
        assert_eq!(Operation::from(OperationArg::Sentiment), Operation::Sentiment);
    }
}
