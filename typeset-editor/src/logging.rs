use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

const DEFAULT_FILTER: &str = "error,typeset_editor=info,typeset_slider=warn,typeset_trim=warn";
const VERBOSE_FILTER: &str = "warn,typeset_editor=debug,typeset_slider=debug,typeset_trim=debug";

/// Installs the global subscriber. `RUST_LOG` wins over both defaults.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match EnvFilter::try_new(fallback) {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}
