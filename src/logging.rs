use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "fincalc=debug,info"
    } else {
        "fincalc=info"
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
/// Logs go to stderr so calculator output on stdout stays valid JSON.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_crate_level_to_debug() {
        assert_eq!(default_directive(false), "fincalc=info");
        assert_eq!(default_directive(true), "fincalc=debug,info");
    }

    #[test]
    fn default_directives_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directive(verbose)).is_ok());
        }
    }
}
