use std::env;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_LOG: &str = "DEPVIZ_LOG";
pub const ENV_LOG_FORMAT: &str = "DEPVIZ_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerSettings {
    pub directive: &'static str,
    pub json: bool,
    pub ansi: bool,
}

/// Without `-v` only errors are logged; warnings reach the user through
/// `output::warn` instead.
pub fn layer_settings(verbose: u8, no_color: bool, format: Option<&str>) -> LayerSettings {
    let directive = match verbose {
        0 => "depviz=error",
        1 => "depviz=info",
        2 => "depviz=debug",
        _ => "depviz=trace",
    };
    let json = format == Some("json");
    LayerSettings {
        directive,
        json,
        ansi: !json && !no_color,
    }
}

/// Logs go to stderr so stdout stays clean for `show` output.
pub fn init_tracing(verbose: u8, no_color: bool) {
    let format = env::var(ENV_LOG_FORMAT).ok();
    let settings = layer_settings(verbose, no_color, format.as_deref());
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new(settings.directive));

    let registry = tracing_subscriber::registry().with(filter);
    // a second init (tests, embedding) keeps the first subscriber
    let _ = if settings.json {
        registry
            .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(settings.ansi)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
}
