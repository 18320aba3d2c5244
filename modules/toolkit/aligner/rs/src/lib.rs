pub use args::Args;
pub use run::{run, Score};

mod args;
mod run;

/// Installs the stderr logger. `RUST_LOG` is honored, the default level is `info`.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}
