use tracing::Level;

/// Logs go to stderr so generated documents can be piped from stdout.
pub fn init(verbose: bool) -> eyre::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| eyre::eyre!("could not install tracing subscriber: {e}"))
}
