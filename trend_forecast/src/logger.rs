//! Logger setup for binaries and tests

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Default filters before `RUST_LOG` is applied
fn default_builder() -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .format_timestamp_millis();
    builder
}

/// Install an `env_logger` backend once per process
///
/// Defaults to `info`; `RUST_LOG` overrides it.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = default_builder();
        builder.parse_default_env();

        // Another logger may already be installed by the host application
        let _ = builder.try_init();
    });
}
