use clap::{Parser, Subcommand};
use ms_app::{
    AppResult, ModelRegistry, ScriptOutcome, ScriptSeeding, Session, SessionConfig, discovery,
    load_config,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ms-cli")]
#[command(about = "modelscript CLI - run simulation models and extend them with scripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available model variants
    Models,
    /// List data files in a directory
    Data {
        /// Directory holding `.txt` data files
        dir: PathBuf,
    },
    /// Bind data to a model, run it, apply scripts and print the results
    Run(RunArgs),
}

#[derive(clap::Args)]
struct RunArgs {
    /// Model variant name
    model: String,
    /// Path to the data file
    data: PathBuf,
    /// Script file to apply after the run (repeatable, applied in order)
    #[arg(short, long = "script")]
    scripts: Vec<PathBuf>,
    /// Inline script text, applied after all script files (repeatable)
    #[arg(short, long = "eval")]
    evals: Vec<String>,
    /// YAML session configuration
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Period label of the first column
    #[arg(long)]
    base_period: Option<i64>,
    /// Let each script see the results of the scripts before it
    #[arg(long)]
    chained: bool,
    /// Print JSON instead of tab-separated text
    #[arg(long)]
    json: bool,
    /// Output file (optional, defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Models => cmd_models(),
        Commands::Data { dir } => cmd_data(&dir),
        Commands::Run(args) => cmd_run(args),
    }
}

fn cmd_models() -> AppResult<()> {
    let models = discovery::list_models(&ModelRegistry::builtin());
    for name in models {
        println!("{}", name);
    }
    Ok(())
}

fn cmd_data(dir: &Path) -> AppResult<()> {
    let files = discovery::list_data_files(dir)?;
    if files.is_empty() {
        println!("No data files found in {}", dir.display());
    } else {
        for name in files {
            println!("{}", name);
        }
    }
    Ok(())
}

fn cmd_run(args: RunArgs) -> AppResult<()> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SessionConfig::default(),
    };
    if let Some(base_period) = args.base_period {
        config.table.base_period = base_period;
    }
    if args.chained {
        config.seeding = ScriptSeeding::Chained;
    }

    tracing::debug!(?config, "session configuration");

    let mut session = Session::new(&args.model, config)?;
    session.read_data_from(&args.data)?.run_model()?;

    for path in &args.scripts {
        let outcome = session.run_script_from_file(path)?;
        report_script(&path.display().to_string(), &outcome);
    }
    for (i, source) in args.evals.iter().enumerate() {
        let outcome = session.run_script(source);
        report_script(&format!("--eval #{}", i + 1), &outcome);
    }

    let rendered = if args.json {
        session.results_as_json()?
    } else {
        session.results_as_tsv()
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            eprintln!("✓ Results written to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn report_script(origin: &str, outcome: &ScriptOutcome) {
    match outcome {
        ScriptOutcome::Applied { changed } => {
            eprintln!("✓ {}: {} variables changed", origin, changed)
        }
        ScriptOutcome::Failed { message } => eprintln!("✗ {}: {}", origin, message),
    }
}
