//! Extract command - print the text found in a document.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use docviz_core::loader;

use super::analyze::open_document;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input document (.txt, .docx or .pdf)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Media type of the input instead of guessing from the extension
    #[arg(long)]
    media_type: Option<String>,
}

pub async fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let document = open_document(&args.input, args.media_type.as_deref())?;
    let extracted = loader::load(&document);

    for warning in &extracted.warnings {
        eprintln!("{} {}", style("⚠").yellow(), warning);
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &extracted.text)?;
            println!(
                "{} Text written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => print!("{}", extracted.text),
    }

    Ok(())
}
