use ::std::{error::Error, path::PathBuf};
use clap::Parser;
use langram_classic::{evaluate, DetectorBuilder, Estimator, Mode, ModelsStorage, NgramOrder};
use langram_classic_train::{load_corpus, write_model_file, write_scores_file};
use rand::{rngs::StdRng, SeedableRng};

/// Trains per-language models on 80% of a labeled corpus
/// and evaluates them on the rest.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// gzip-compressed JSON lines with `label` and `content` fields
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the trained models
    #[arg(short, long)]
    model: PathBuf,

    /// Output file for the accuracy and macro F1 JSON
    #[arg(short, long)]
    scores: PathBuf,

    /// Maximum ngram order
    #[arg(short, long, default_value_t = 3)]
    ngram: usize,

    /// Rank list size, 0 for perplexity
    #[arg(short, long, default_value_t = 300)]
    ranked: usize,

    /// Seed of the train/test shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Add-one smoothing of the word models
    #[arg(long)]
    laplace: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    // configuration errors before any work
    let order = NgramOrder::new(args.ngram)?;
    let mode = Mode::from_rank_size(args.ranked);
    let estimator = if args.laplace {
        Estimator::Laplace
    } else {
        Estimator::Mle
    };

    let corpus = load_corpus(&args.input)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let split = corpus.train_test_split(&mut rng)?;

    let models_storage = ModelsStorage::train(&split.train, order, estimator);
    tracing::info!(languages = models_storage.len(), %order, %estimator, "trained");

    let detector = DetectorBuilder::new(&models_storage).mode(mode).build();
    let metrics = evaluate(&split.test, &detector)?;

    write_model_file(&models_storage, &args.model)?;
    write_scores_file(&metrics, &args.scores)?;
    tracing::info!(model = ?args.model, scores = ?args.scores, "written");

    Ok(())
}
