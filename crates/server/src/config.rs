use clap::Parser;

/// Process configuration, read from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Account service with signed-token authorization",
    long_about = None
)]
pub struct Config {
    /// Listen address.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind: String,
    /// PostgreSQL connection string.
    #[arg(long, env = "DB_URL")]
    pub database: String,
    /// Secret tokens are signed and verified with.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub secret: String,
    /// Insert one demo account before serving.
    #[arg(long)]
    pub seed: bool,
    /// HTTP worker threads (defaults to one per core).
    #[arg(long, env = "WORKERS")]
    pub workers: Option<usize>,
}
