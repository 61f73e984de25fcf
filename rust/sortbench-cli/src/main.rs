//! sortbench CLI: time quicksort, bubble sort and merge sort, then chart them.

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser as ClapParser, Subcommand};
use sortbench_core::chart::LineChart;
use sortbench_core::config::CONFIG_FILE_NAME;
use sortbench_core::{
    run_suite, Algorithm, BenchError, OutputFormat, Result, SortbenchConfig, SuiteReport,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// ANSI color helpers
fn green(s: &str) -> String {
    format!("\x1b[32m{}\x1b[0m", s)
}
fn red(s: &str) -> String {
    format!("\x1b[31m{}\x1b[0m", s)
}
fn status_label(label: &str) -> String {
    format!("\x1b[1;32m{:>12}\x1b[0m", label)
}

#[derive(ClapParser)]
#[command(
    name = "sortbench",
    version,
    about = "Benchmark sorting algorithms and plot the results"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: nearest sortbench.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Input lengths to sweep, comma separated
    #[arg(long, global = true, value_delimiter = ',')]
    lengths: Option<Vec<usize>>,

    /// Random inputs timed per algorithm and length
    #[arg(long, global = true)]
    trials: Option<u32>,

    /// Algorithms to run, comma separated
    #[arg(long, global = true, value_delimiter = ',')]
    algorithms: Option<Vec<Algorithm>>,

    /// Seed for reproducible inputs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// SVG chart output path
    #[arg(long, global = true)]
    chart: Option<PathBuf>,

    /// Summary format printed to stdout (text, csv, json)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Also write the full report as JSON
    #[arg(long, global = true)]
    json: Option<PathBuf>,

    /// Open the chart in the default viewer when done
    #[arg(long, global = true)]
    open: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark and write the chart (the default)
    Run,
    /// Create a sortbench.toml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Some(Commands::Init) => cmd_init(),
        Some(Commands::Run) | None => cmd_run(&cli),
    };
    if let Err(e) = result {
        eprintln!("{} {}", red("error:"), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "sortbench=debug,sortbench_core=debug"
    } else {
        "sortbench=info,sortbench_core=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file values with command-line flags layered on top.
fn resolve_config(cli: &Cli) -> Result<SortbenchConfig> {
    let (path, mut cfg) = SortbenchConfig::load(cli.config.as_deref())?;
    if let Some(path) = &path {
        debug!(path = %path.display(), "using config file");
    }

    let bench = &mut cfg.benchmark;
    if let Some(lengths) = &cli.lengths {
        bench.input_lengths = lengths.clone();
    }
    if let Some(trials) = cli.trials {
        bench.trial_count = trials;
    }
    if let Some(algorithms) = &cli.algorithms {
        bench.algorithms = algorithms.clone();
    }
    if cli.seed.is_some() {
        bench.seed = cli.seed;
    }

    let output = &mut cfg.output;
    if let Some(chart) = &cli.chart {
        output.chart = chart.clone();
    }
    if let Some(format) = cli.format {
        output.format = format;
    }
    if let Some(json) = &cli.json {
        output.json = Some(json.clone());
    }

    cfg.benchmark = cfg.benchmark.normalized();
    cfg.benchmark.validate()?;
    Ok(cfg)
}

fn cmd_run(cli: &Cli) -> Result<()> {
    let cfg = resolve_config(cli)?;
    info!(
        algorithms = cfg.benchmark.algorithms.len(),
        lengths = ?cfg.benchmark.input_lengths,
        trials = cfg.benchmark.trial_count,
        "running benchmark"
    );

    let series = run_suite(&cfg.benchmark)?;
    let report = SuiteReport::new(cfg.output.title.clone(), cfg.benchmark.clone(), series);

    print!("{}", report.render(cfg.output.format)?);

    LineChart::new(&report.series)
        .with_title(&report.title)
        .write(&cfg.output.chart)?;
    eprintln!("{} {}", status_label("Chart"), cfg.output.chart.display());

    if let Some(json) = &cfg.output.json {
        report.write_json(json)?;
        eprintln!("{} {}", status_label("Report"), json.display());
    }

    if cli.open {
        show_chart(&cfg.output.chart, |path| open::that(path))?;
    }
    Ok(())
}

/// Hand the chart to a viewer. A viewer that fails to launch fails the run.
fn show_chart<F>(path: &Path, launch: F) -> Result<()>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    launch(path).map_err(|source| BenchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "opened chart");
    Ok(())
}

fn cmd_init() -> Result<()> {
    write_template(Path::new("."))?;
    println!("{} {} {}", status_label("Created"), CONFIG_FILE_NAME, green("✓"));
    Ok(())
}

/// Write the default config into `dir`. Never replaces an existing file.
fn write_template(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(BenchError::Io {
            path,
            source: io::Error::new(io::ErrorKind::AlreadyExists, "file already exists"),
        });
    }
    std::fs::write(&path, SortbenchConfig::default_template()).map_err(|source| {
        BenchError::Io {
            path: path.clone(),
            source,
        }
    })?;
    Ok(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
