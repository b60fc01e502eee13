use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise warnings are shown, and debug
/// events too with `--verbose`.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "transmerge=debug"
    } else {
        "transmerge=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(colored::control::SHOULD_COLORIZE.should_colorize())
        .with_target(false)
        .without_time()
        .try_init();
}
