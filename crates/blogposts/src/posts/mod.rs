use std::path::{Path, PathBuf};

use blogposts_core::seed::load_seed;
use blogposts_core::CollectionStore;

use crate::prelude::{eprintln, *};

pub mod get;
pub mod list;

#[derive(Debug, clap::Parser)]
#[command(name = "posts")]
#[command(about = "Read posts from a seed file without starting the server")]
pub struct App {
    /// JSON seed file to read posts from
    #[arg(long, env = "STORE_INIT")]
    pub store_init: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List posts, optionally filtered by title
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Show a single post
    #[clap(name = "get")]
    Get(get::GetOptions),
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let store = load_store(&app.store_init)?;

    if global.verbose {
        eprintln!(
            "Loaded {} posts from {}",
            store.len(),
            app.store_init.display()
        );
    }

    match app.command {
        Commands::List(options) => list::run(&store, options),
        Commands::Get(options) => get::run(&store, options),
    }
}

pub fn load_store(path: &Path) -> Result<CollectionStore> {
    load_seed(path).map_err(|e| eyre!("Failed to load posts: {e}"))
}
