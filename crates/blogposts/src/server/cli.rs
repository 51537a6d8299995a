use std::path::PathBuf;

#[derive(Debug, Clone, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "HTTP_PORT", default_value = "8080")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HTTP_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// JSON seed file to load posts from at startup (empty store when omitted)
    #[arg(long, env = "STORE_INIT")]
    pub store_init: Option<PathBuf>,

    /// Seconds a request may wait for access to the store
    #[arg(long, env = "HTTP_TIMEOUT", default_value = "1")]
    pub timeout: u64,
}
