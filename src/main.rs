use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use paanini_docs::core::config::{self, CliOverrides, PaaniniConfig};
use paanini_docs::{DocsBrowser, DocumentStore, MarkdownSurface, PlainText, ViewState, tui};

const LOG_FILE_NAME: &str = "paanini-docs.log";

#[derive(Parser)]
#[command(
    name = "paanini-docs",
    version,
    about = "Terminal browser for the Paanini language documentation"
)]
struct Args {
    /// View to open after start
    #[arg(long, value_enum)]
    view: Option<ViewState>,

    /// Id of the document to show first
    #[arg(long)]
    doc: Option<String>,

    /// Load documents from a TOML or JSON file instead of the built-in set
    #[arg(long)]
    docs_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print `id<TAB>title` for every document
    List,
    /// Print a document as plain text
    Show {
        /// Document id (defaults to the first document)
        id: Option<String>,
    },
}

/// Install the file logger before the config is read, so config problems are
/// recorded. The configured level is applied afterwards with `log::set_max_level`.
fn init_logging() {
    let Some(dir) = config::config_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(dir.join(LOG_FILE_NAME)) {
        if WriteLogger::init(LevelFilter::Trace, log_config, log_file).is_ok() {
            log::set_max_level(LevelFilter::Info);
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging();
    info!("paanini-docs {} starting", env!("CARGO_PKG_VERSION"));

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => {
            eprintln!("warning: {e}; using default settings");
            (PaaniniConfig::default(), Some(e))
        }
    };
    let overrides = CliOverrides {
        view: args.view,
        doc: args.doc.clone(),
        docs_file: args.docs_file.clone(),
    };
    let resolved = config::resolve(&file_config, &overrides);

    if let Some(e) = config_error {
        warn!("Ignoring config file: {}", e);
    }
    for warning in &resolved.warnings {
        warn!("{}", warning);
    }
    log::set_max_level(resolved.log_level);

    let store = match &resolved.docs_file {
        Some(path) => match DocumentStore::load(path) {
            Ok(store) => store,
            Err(e) => {
                warn!("Failed to load documents: {}", e);
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => DocumentStore::builtin(),
    };
    let store = Arc::new(store);

    match args.command {
        Some(Command::List) => {
            for doc in store.list() {
                println!("{}\t{}", doc.id, doc.title);
            }
            ExitCode::SUCCESS
        }
        Some(Command::Show { id }) => {
            let browser = match id.or(resolved.start_doc) {
                Some(id) => DocsBrowser::with_active(store, id),
                None => DocsBrowser::new(store),
            };
            match browser.render_active() {
                Some(blocks) => println!("{}", PlainText::default().render(&blocks)),
                None => println!("No documentation available."),
            }
            ExitCode::SUCCESS
        }
        None => match tui::run(store, &resolved) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}
