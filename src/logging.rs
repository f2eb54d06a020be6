use log::LevelFilter;

/// Sets up `env_logger` for the whole process.
/// `RUST_LOG` takes precedence over the level picked by `--debug`.
pub(crate) fn init_logging(debug: bool) {
	let mut builder = env_logger::Builder::new();

	builder.filter_level(if debug { LevelFilter::Debug } else { LevelFilter::Warn });
	if let Ok(filter) = std::env::var("RUST_LOG") {
		builder.parse_filters(&filter);
	}

	builder.format_timestamp(None);
	builder.init();

	log::debug!("logging initialized");
}
