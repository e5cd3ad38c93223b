use std::sync::Once;

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Install `env_logger` as the `log` backend. Only the first call has an effect.
///
/// The filter comes from `config`, then `RUST_LOG`, and defaults to `info`.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.env_filter.as_deref() {
            Some(filter) => {
                builder.parse_filters(filter);
            }
            None => match std::env::var("RUST_LOG") {
                Ok(filter) => {
                    builder.parse_filters(&filter);
                }
                Err(_) => {
                    builder.filter_level(log::LevelFilter::Info);
                }
            },
        }
        if builder.try_init().is_err() {
            // another logger was installed by the host
            return;
        }
        log::debug!("logging initialized");
    });
}
