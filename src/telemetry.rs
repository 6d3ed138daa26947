use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG` plus `default_directive`
/// (e.g. `"blog_content=info"`).
///
/// Meant for host binaries; calling it twice is an error.
pub fn init_tracing(default_directive: &str) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(default_directive.parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
