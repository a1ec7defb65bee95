use log::LevelFilter;

/// Initialize the logger with the specified level, RUST_LOG still overrides per module
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
	.filter_level(level)
	.parse_default_env()
	.init();
}
