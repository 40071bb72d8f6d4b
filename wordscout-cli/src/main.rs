use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::{num::NonZeroUsize, path::PathBuf, str::FromStr, sync::Arc};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wordscout::{
    input, start_word_search_puzzle, start_words_search_puzzle, CliOverrides, Grid, GridSession,
    HiddenWord, HiddenWords, PuzzleConfig, PuzzleError, PuzzleReport, RandomWordsGrid,
};

type Result<T> = std::result::Result<T, PuzzleError>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
struct CliSearchConfig {
    /// The size for a randomly created grid of letters (a-z only), e.g. 10x10
    #[arg(short = 'g', long)]
    grid_size: Option<String>,

    /// A custom word to search in a grid of letters, e.g. foo
    #[arg(short = 'w', long)]
    word: Option<String>,

    /// A path to a text file with words to search (.txt or .log)
    #[arg(short = 'f', long)]
    words_file_path: Option<PathBuf>,

    /// Search N random words from the words file
    #[arg(short = 'n', long)]
    words_limit: Option<usize>,

    /// How to run a batch of words (pool|cooperative|sequential)
    #[arg(short = 'm', long)]
    mode: Option<String>,

    /// Number of workers for the pool mode
    #[arg(short = 'j', long)]
    threads: Option<NonZeroUsize>,

    /// Seed for a reproducible grid and word selection
    #[arg(long)]
    seed: Option<u64>,

    /// Configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (text|json)
    #[arg(long, default_value = "text")]
    format: String,

    /// Print the generated grid before the results
    #[arg(long)]
    show_grid: bool,

    /// Show only statistics, not matches
    #[arg(short, long)]
    stats: bool,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search words in a random grid of letters
    Search(Box<CliSearchConfig>),

    /// Print a random grid of letters
    Generate {
        /// The size of the grid, e.g. 10x10
        #[arg(short = 'g', long, default_value = "10x10")]
        grid_size: String,

        /// Seed for a reproducible grid
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(PuzzleError::config_error(format!(
                "Unknown output format \"{}\" (expected text or json)",
                other
            ))),
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(config) => search(*config),
        Commands::Generate { grid_size, seed } => {
            init_logging("warn");
            let grid_size = input::parse_grid_size(&grid_size)?;
            let mut grid = match seed {
                Some(seed) => RandomWordsGrid::with_seed(grid_size, seed),
                None => RandomWordsGrid::new(grid_size),
            };
            let session = GridSession::open(&mut grid)?;
            println!("{}", session.content().render()?);
            Ok(())
        }
    }
}

fn search(cli_config: CliSearchConfig) -> Result<()> {
    let file_config = PuzzleConfig::load_from(cli_config.config.as_deref())
        .map_err(|e| PuzzleError::config_error(e.to_string()))?;

    let overrides = CliOverrides {
        grid_size: cli_config
            .grid_size
            .as_deref()
            .map(input::parse_grid_size)
            .transpose()?,
        word: cli_config.word,
        words_file_path: cli_config.words_file_path,
        words_limit: cli_config.words_limit,
        execution_mode: cli_config.mode.as_deref().map(str::parse).transpose()?,
        thread_count: cli_config.threads,
        seed: cli_config.seed,
        log_level: cli_config.log_level,
    };
    let config = file_config.merge_with_cli(overrides);
    let format: OutputFormat = cli_config.format.parse()?;

    init_logging(&config.log_level);
    debug!("Using configuration: {:?}", config);

    if let Some(word) = &config.word {
        input::validate_word(word)?;
    }

    let mut grid = match config.seed {
        Some(seed) => RandomWordsGrid::with_seed(config.grid_size, seed),
        None => RandomWordsGrid::new(config.grid_size),
    };

    info!("Grid seed is {}, pass --seed to reproduce this run", grid.seed());

    // The board outlives the session, the grid rows do not
    let board = {
        let session = GridSession::open(&mut grid)?;
        let content = session.content();
        if cli_config.show_grid {
            println!("{}\n", content.render()?);
        }
        Arc::new(content.to_coordinates()?)
    };

    let report = match config.word {
        Some(word) => {
            let mut report = PuzzleReport::new();
            report.add_word_report(start_word_search_puzzle(&HiddenWord::new(board, word))?);
            report
        }
        None => {
            // Word selection follows the grid seed so a run is reproducible from it
            let mut rng = StdRng::seed_from_u64(grid.seed());
            let words =
                input::random_words(&config.words_file_path, config.words_limit, &mut rng)?;
            start_words_search_puzzle(
                HiddenWords::new(board, words),
                config.execution_mode,
                config.thread_count,
            )?
        }
    };

    match format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => print_search_results(&report, cli_config.stats),
    }
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_search_results(report: &PuzzleReport, stats_only: bool) {
    let summary = format!(
        "Found {} matches for {} of {} words",
        report.total_matches, report.words_found, report.words_searched
    );

    if stats_only {
        println!("{}", summary);
        return;
    }

    for word_report in &report.word_reports {
        if word_report.is_absent() {
            println!(
                "\n{} {}",
                word_report.word.yellow(),
                "is absent in a grid".dimmed()
            );
            continue;
        }
        println!("\n{}", word_report.word.blue().bold());
        for m in &word_report.matches {
            println!("  {}", m);
        }
    }

    for failure in &report.failures {
        println!("\n{} {}: {}", "failed".red(), failure.word, failure.error);
    }

    println!("\n{}", summary.green());
}
