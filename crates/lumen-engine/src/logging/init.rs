use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global `env_logger` backend once.
///
/// Filtering follows `RUST_LOG` when set (e.g. "warn",
/// "lumen_engine=debug,wgpu=warn"); otherwise info-level is used.
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
