use crate::prelude::*;
use clap::Parser;

mod error;
mod posts;
mod prelude;
mod server;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "In-memory blog post service with an HTTP JSON API"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "BLOGPOSTS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommands {
    /// Serve the posts API over HTTP
    Serve(crate::server::ServeOptions),

    /// Read posts from a seed file without starting the server
    Posts(crate::posts::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    init_logger(&app.global);

    match app.command {
        SubCommands::Serve(options) => crate::server::run(options, app.global).await,
        SubCommands::Posts(sub_app) => crate::posts::run(sub_app, app.global),
    }
}

/// `RUST_LOG` wins over the default level picked from `--verbose`
fn init_logger(global: &Global) {
    let default_filter = if global.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
