use anyhow::{bail, Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use inga_cabocha::CabochaCommand;
use inga_extractor::{AnaphoraMode, Extractor, ExtractorConfig, SvmScores};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

mod inputs;
mod pool;
mod report;

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "extract-causal")]
#[command(about = "Extract causal relations from Japanese documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Documents (one sentence per line) or directories of *.txt documents
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Number of documents processed in parallel
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    threads: u32,

    /// SVM score table (`<file>:<line>:<clue>[#<n>]\t<score>`) used to filter records
    #[arg(short, long)]
    svm: Option<PathBuf>,

    /// Minimum SVM score for a record to be kept
    #[arg(long)]
    svm_threshold: Option<f64>,

    /// Clue list replacing the compiled one (`clue<TAB>kind` per line)
    #[arg(long)]
    clues: Option<PathBuf>,

    /// Demonstrative list replacing the compiled one
    #[arg(long)]
    demonstratives: Option<PathBuf>,

    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// What anaphoric clues resolve against
    #[arg(long, value_enum)]
    anaphora: Option<AnaphoraArg>,

    /// Treat each input as a list of document paths, one per line
    #[arg(long)]
    file_list: bool,

    /// Print one combined JSON array instead of writing result files
    #[arg(long)]
    stdout: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AnaphoraArg {
    /// Result of the previous accepted record
    Result,
    /// Previous line of the document
    Sentence,
}

impl From<AnaphoraArg> for AnaphoraMode {
    fn from(arg: AnaphoraArg) -> Self {
        match arg {
            AnaphoraArg::Result => Self::Result,
            AnaphoraArg::Sentence => Self::Sentence,
        }
    }
}

pub async fn main_entry() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit 1 like every other configuration error
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    run(cli).await
}

fn load_config(cli: &Cli) -> Result<ExtractorConfig> {
    let mut config = match &cli.config {
        Some(path) => ExtractorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ExtractorConfig::default(),
    };

    if let Some(path) = &cli.clues {
        config.clue_list = Some(path.clone());
    }
    if let Some(path) = &cli.demonstratives {
        config.demonstrative_list = Some(path.clone());
    }
    if let Some(anaphora) = cli.anaphora {
        config.anaphora = anaphora.into();
    }
    if let Some(threshold) = cli.svm_threshold {
        config.svm_threshold = threshold;
    }
    config.cabocha = config.cabocha.with_env_override();

    config.validate().map_err(anyhow::Error::msg)?;
    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let documents = inputs::collect_documents(&cli.inputs, cli.file_list)?;

    let parser = CabochaCommand::new(config.cabocha.clone()).context("Invalid cabocha settings")?;
    let mut extractor = Extractor::from_config(&config, Arc::new(parser))
        .context("Failed to load clue tables")?;
    if let Some(path) = &cli.svm {
        let scores = SvmScores::load(path)
            .with_context(|| format!("Failed to load SVM scores {}", path.display()))?;
        log::info!("Loaded {} SVM scores from {}", scores.len(), path.display());
        extractor = extractor.with_oracle(Arc::new(scores));
    }
    log::info!(
        "{} clues, {} demonstratives, anaphora={}",
        extractor.lexicon().clues.len(),
        extractor.lexicon().demonstratives.stems().len(),
        config.anaphora.as_str()
    );

    let total = documents.len();
    let outcomes = pool::extract_all(Arc::new(extractor), documents, cli.threads as usize).await?;

    let mut failed = 0usize;
    let mut combined = Vec::new();
    for outcome in outcomes {
        let causals = match outcome.result {
            Ok(causals) => causals,
            Err(err) => {
                if err.is_fatal() {
                    log::error!("{}: {err}", outcome.path.display());
                } else {
                    log::warn!("{}: {err}", outcome.path.display());
                }
                failed += 1;
                continue;
            }
        };

        if cli.stdout {
            combined.extend(causals);
            continue;
        }
        match report::write_report(&outcome.path, &causals) {
            Ok(path) => log::debug!("Wrote {}", path.display()),
            Err(err) => {
                log::error!("{err:#}");
                failed += 1;
            }
        }
    }

    if cli.stdout {
        print_stdout(&report::render_records(&combined)?)?;
    }
    if failed > 0 {
        bail!("{failed} of {total} documents failed");
    }
    Ok(())
}
