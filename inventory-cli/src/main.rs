//! Inventory - command line front end for the computer inventory store
//!
//! Each subcommand maps to one store command. Results of search and sort go
//! to the results file and are listed with `show-results`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use inventory_engine::operations::{Command, Engine, Outcome};
use inventory_engine::storage::{Computer, SortKey, TextField, TEXT_CAPACITY};
use inventory_engine::StoreError;

mod config;
mod table;

use config::ConfigFile;

/// Computer inventory store
#[derive(Parser, Debug)]
#[command(name = "inventory")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Data directory for relative store file names
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Append a record to the database
    Add(AddArgs),
    /// Sort the database by processor frequency into the results file
    SortFrequency,
    /// Sort the database by processor type into the results file
    SortType,
    /// Copy records whose processor type contains TERM into the results file
    Search {
        /// Case-sensitive substring; empty matches every record
        #[arg(default_value = "")]
        term: String,
    },
    /// List the database
    Show,
    /// List the results file, then clear it
    ShowResults,
    /// Clear the database
    Clear,
    /// Clear the results file
    ClearResults,
    /// Show record counts of both files
    Stat,
}

#[derive(ClapArgs, Debug)]
struct AddArgs {
    /// Processor type
    #[arg(long)]
    processor_type: String,

    /// Processor frequency
    #[arg(long, allow_hyphen_values = true)]
    frequency: f64,

    /// RAM capacity
    #[arg(long, allow_hyphen_values = true)]
    ram: i32,

    /// HDD capacity
    #[arg(long, allow_hyphen_values = true)]
    hdd: i32,

    /// Monitor type
    #[arg(long)]
    monitor_type: String,

    /// Reject text longer than the field capacity instead of truncating it
    #[arg(long)]
    strict_text: bool,
}

impl AddArgs {
    fn into_record(self) -> Result<Computer> {
        for (field, value) in [
            ("processor type", &self.processor_type),
            ("monitor type", &self.monitor_type),
        ] {
            if TextField::fits(value) {
                continue;
            }
            if self.strict_text {
                bail!("{} {:?} does not fit in {} bytes", field, value, TEXT_CAPACITY);
            }
            warn!("{} {:?} truncated to {} bytes", field, value, TEXT_CAPACITY);
        }

        Ok(Computer::new(
            &self.processor_type,
            self.frequency,
            self.ram,
            self.hdd,
            &self.monitor_type,
        ))
    }
}

impl Action {
    fn into_command(self) -> Result<Command> {
        Ok(match self {
            Action::Add(args) => Command::Add(args.into_record()?),
            Action::SortFrequency => Command::Sort(SortKey::ProcessorFrequency),
            Action::SortType => Command::Sort(SortKey::ProcessorType),
            Action::Search { term } => Command::Search(term),
            Action::Show => Command::ShowDatabase,
            Action::ShowResults => Command::ShowResults,
            Action::Clear => Command::ClearDatabase,
            Action::ClearResults => Command::ClearResults,
            Action::Stat => Command::Stat,
        })
    }
}

fn init_logging(level: &str) -> Result<()> {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn report(engine: &Engine, command: &Command, outcome: Outcome) {
    let results = engine.results_path();
    let database = engine.database_path();

    match outcome {
        Outcome::Appended => println!("Record added."),
        Outcome::Matched(0) => println!("No records found."),
        Outcome::Matched(count) => {
            println!("{} records saved to {}", count, results.display())
        }
        Outcome::Sorted(count) => {
            println!("Sorted {} records into {}", count, results.display())
        }
        Outcome::Records(records) => {
            let title = match command {
                Command::ShowResults => format!("Results ({})", results.display()),
                _ => format!("Computer database ({})", database.display()),
            };
            print!("{}", table::render(&title, &records));
        }
        Outcome::Empty => println!("store is empty"),
        Outcome::Cleared => {
            let path = match command {
                Command::ClearDatabase => &database,
                _ => &results,
            };
            println!("File {} cleared.", path.display());
        }
        Outcome::Stats { database: db, results: res } => {
            for (path, stat) in [(&database, db), (&results, res)] {
                println!(
                    "{}: {} records, {} bytes{}",
                    path.display(),
                    stat.records,
                    stat.bytes,
                    if stat.is_valid() {
                        String::new()
                    } else {
                        format!(" ({} trailing bytes, corrupt)", stat.trailing_bytes)
                    }
                );
            }
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    Ok(match path {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    })
}

fn run(args: Args, file: ConfigFile) -> Result<()> {
    let mut store_config = file.store;
    if let Some(dir) = args.data_dir {
        store_config = store_config.with_data_dir(dir);
    }

    let engine = Engine::new(store_config);
    info!("Database: {}", engine.database_path().display());
    info!("Results: {}", engine.results_path().display());

    engine.init().context("failed to create store files")?;

    let command = args.action.into_command()?;
    let outcome = engine
        .execute(command.clone())
        .with_context(|| format!("{} failed", command.name()))?;

    report(&engine, &command, outcome);
    Ok(())
}

/// Process exit status for a failed run: the store error code, or 1
fn exit_code(e: &anyhow::Error) -> u8 {
    e.downcast_ref::<StoreError>()
        .map(|e| e.kind().as_raw())
        .unwrap_or(1)
}

fn hint(e: &anyhow::Error) -> Option<&'static str> {
    match e.downcast_ref::<StoreError>() {
        Some(e) if e.kind().is_corruption() => {
            Some("run `inventory stat` to find the file with trailing bytes, then `clear` or `clear-results` it")
        }
        _ => None,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = load_config(args.config.as_deref()).and_then(|file| {
        let level = args
            .log_level
            .as_deref()
            .or(file.log_level.as_deref())
            .unwrap_or("warn");
        init_logging(level)?;
        run(args, file)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            if let Some(hint) = hint(&e) {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(exit_code(&e))
        }
    }
}
