pub mod account;
pub mod config;
pub mod text;

pub use account::Employee;
pub use text::TextStats;

/// Initialize logging to stderr, honoring `RUST_LOG` when set.
pub fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config::DEFAULT_LOG_FILTER),
    )
    .init();
}
