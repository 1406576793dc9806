use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use literacy_core::model::PassageDraft;
use services::{CatalogService, Clock, ProgressService};
use storage::json::{DEFAULT_PASSAGES_FILE, DEFAULT_STUDENTS_FILE, JsonRepository};
use storage::repository::Storage;
use tracing_subscriber::EnvFilter;
use ui::{App, AppContext};

#[derive(Parser, Debug)]
#[command(name = "literacy", version, about = "Reading literacy practice (console)")]
struct Args {
    /// Directory holding the passage and student documents
    #[arg(long, env = "LITERACY_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Passage document file name, relative to the data directory
    #[arg(long, env = "LITERACY_PASSAGES_FILE", default_value = DEFAULT_PASSAGES_FILE)]
    passages_file: PathBuf,

    /// Student document file name, relative to the data directory
    #[arg(long, env = "LITERACY_STUDENTS_FILE", default_value = DEFAULT_STUDENTS_FILE)]
    students_file: PathBuf,

    /// Password for admin mode
    #[arg(
        long,
        env = "LITERACY_ADMIN_PASSWORD",
        default_value = "admin123",
        hide_env_values = true
    )]
    admin_password: String,

    /// Log filter (e.g. `info`, `services=debug`); logs go to stderr
    #[arg(long, env = "LITERACY_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Start an interactive session (default)
    Run,
    /// Add a few sample passages if the catalog is empty
    Seed,
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_storage(args: &Args) -> Result<Storage, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(&args.data_dir)?;
    let repo = JsonRepository::new(
        args.data_dir.join(&args.passages_file),
        args.data_dir.join(&args.students_file),
    );
    tracing::info!(
        passages = %repo.passages_path().display(),
        students = %repo.students_path().display(),
        "opening stores"
    );
    Ok(Storage::json(repo))
}

fn sample_passages() -> Vec<PassageDraft> {
    vec![
        PassageDraft::new(
            "The Clever Mouse Deer",
            "A mouse deer wanted to cross a river full of crocodiles. He told them \
             the king wished to count them, so they lined up across the water. The \
             mouse deer hopped from back to back, counting, until he reached the \
             other side.",
            "Which animals lined up across the river",
            "crocodile",
        ),
        PassageDraft::new(
            "Malin Kundang",
            "Malin left his village to become a rich merchant. When he returned he \
             pretended not to know his poor mother. She prayed, a storm came, and \
             Malin was turned to stone on the beach.",
            "What was Malin turned into",
            "stone",
        ),
        PassageDraft::new(
            "The Water Cycle",
            "The sun warms the sea and water rises as vapour. High in the sky it \
             cools into clouds. When the drops grow heavy they fall back as rain.",
            "What falls from the clouds when the drops grow heavy",
            "rain",
        ),
    ]
}

fn seed(storage: &Storage) -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = CatalogService::load(Arc::clone(&storage.passages))?;
    if !catalog.catalog().is_empty() {
        println!(
            "seed: catalog already has {} passages, nothing to do.",
            catalog.passages().len()
        );
        return Ok(());
    }
    for draft in sample_passages() {
        catalog.add_passage(draft)?;
    }
    println!("seed: added {} sample passages.", catalog.passages().len());
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let storage = open_storage(&args)?;

    match args.command.unwrap_or(Command::Run) {
        Command::Run => {
            let catalog = CatalogService::load(Arc::clone(&storage.passages))?;
            let progress =
                ProgressService::load(Clock::default_clock(), Arc::clone(&storage.students))?;
            let ctx = AppContext::new(catalog, progress, args.admin_password);

            let stdin = std::io::stdin();
            let mut app = App::new(ctx, stdin.lock(), std::io::stdout());
            app.run()?;
            Ok(())
        }
        Command::Seed => seed(&storage),
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::PassageRepository;

    #[test]
    fn args_have_documented_defaults() {
        let args = Args::try_parse_from(["literacy"]).unwrap();
        assert_eq!(args.passages_file, PathBuf::from("passages.json"));
        assert_eq!(args.students_file, PathBuf::from("students.json"));
        assert!(args.command.is_none());
    }

    #[test]
    fn args_accept_overrides_and_subcommand() {
        let args = Args::try_parse_from([
            "literacy",
            "--data-dir",
            "/tmp/lit",
            "--admin-password",
            "guru",
            "seed",
        ])
        .unwrap();
        assert_eq!(args.data_dir, PathBuf::from("/tmp/lit"));
        assert_eq!(args.admin_password, "guru");
        assert_eq!(args.command, Some(Command::Seed));
    }

    #[test]
    fn sample_passages_are_valid() {
        for draft in sample_passages() {
            draft.validate().unwrap();
        }
    }

    #[test]
    fn seed_fills_empty_catalog_once() {
        let storage = Storage::in_memory();
        seed(&storage).unwrap();
        seed(&storage).unwrap();
        assert_eq!(storage.passages.load_passages().unwrap().len(), 3);
    }
}
