//! Logger

// Imports
use {
	itertools::Itertools,
	std::{
		collections::{HashMap, hash_map},
		env::{self, VarError},
		fs,
		path::Path,
	},
	tracing::metadata::LevelFilter,
	tracing_subscriber::{EnvFilter, prelude::*},
};

/// Initializes the logger
///
/// Logs to both stderr and `log_file`, if any
pub fn init(log_file: Option<&Path>) {
	// Warnings emitted before the logger exists
	let mut pre_init_warnings = vec![];

	// Create the terminal layer
	let term_use_colors = self::colors_enabled(&mut pre_init_warnings);
	let term_env = self::get_env_filters("RUST_LOG", "info", &mut pre_init_warnings);
	let term_layer = tracing_subscriber::fmt::layer()
		.with_writer(std::io::stderr)
		.with_ansi(term_use_colors)
		.with_filter(
			EnvFilter::builder()
				.with_default_directive(LevelFilter::INFO.into())
				.parse_lossy(term_env),
		);

	// Create the file layer, if requested
	let file_layer = log_file.and_then(|log_file| {
		// Try to create the file
		let file = match fs::File::create(log_file) {
			Ok(file) => file,
			Err(err) => {
				pre_init_warnings.push(format!("Unable to create log file {log_file:?}: {err}"));
				return None;
			},
		};

		// Then create the layer
		let env = self::get_env_filters("RUST_FILE_LOG", "debug", &mut pre_init_warnings);
		let layer = tracing_subscriber::fmt::layer()
			.with_writer(file)
			.with_ansi(false)
			.with_filter(EnvFilter::builder().parse_lossy(env));

		Some(layer)
	});

	// Register all layers to the registry
	tracing_subscriber::registry().with(term_layer).with(file_layer).init();
	tracing::debug!(?log_file, ?term_use_colors, "Initialized logging");

	// And emit all pre-init warnings
	for warning in pre_init_warnings {
		tracing::warn!("{warning}");
	}
}

/// Returns whether to colors should be enabled for the terminal layer.
fn colors_enabled(warnings: &mut Vec<String>) -> bool {
	match env::var("RUST_LOG_COLOR").map(|var| var.to_lowercase()).as_deref() {
		// By default / `1` / `yes` / `true`, use colors
		Err(VarError::NotPresent) | Ok("1" | "yes" | "true") => true,

		// On `0`, `no`, `false`, don't
		Ok("0" | "no" | "false") => false,

		// Else don't use colors, but warn
		Ok(env) => {
			warnings.push(format!(
				"Ignoring unknown `RUST_LOG_COLOR` value: {env:?}, expected `0`, `1`, `yes`, `no`, `true`, `false`"
			));
			false
		},
		Err(VarError::NotUnicode(err)) => {
			warnings.push(format!("Ignoring non-utf8 `RUST_LOG_COLOR`: {err:?}"));
			false
		},
	}
}

/// Returns the env filters of a variable.
///
/// Adds default filters, if not specified
fn get_env_filters(env: &str, default: &str, warnings: &mut Vec<String>) -> String {
	let var = match env::var(env) {
		Ok(var) => Some(var),
		Err(VarError::NotPresent) => None,
		Err(VarError::NotUnicode(var)) => {
			warnings.push(format!("Ignoring non-utf8 env variable {env:?}: {var:?}"));
			None
		},
	};

	self::with_default_filters(var.as_deref(), default)
}

/// Adds the default filters to `filters`, if not already specified
fn with_default_filters(filters: Option<&str>, default: &str) -> String {
	// Default filters
	let default_filters = [(None, default), (Some("png"), "warn")];

	// Split filters by `,`, then src and level by `=`
	let mut cur_filters = filters
		.into_iter()
		.flat_map(|filters| filters.split(','))
		.filter(|filter| !filter.is_empty())
		.map(|filter| match filter.split_once('=') {
			Some((src, level)) => (Some(src), level),
			None => (None, filter),
		})
		.collect::<HashMap<_, _>>();

	// Add all default filters, if not specified
	for (src, level) in default_filters {
		if let hash_map::Entry::Vacant(entry) = cur_filters.entry(src) {
			_ = entry.insert(level);
		}
	}

	// Then re-create it
	// Note: Sorted so the global level comes first
	cur_filters
		.into_iter()
		.sorted()
		.map(|(src, level)| match src {
			Some(src) => format!("{src}={level}"),
			None => level.to_owned(),
		})
		.join(",")
}

#[cfg(test)]
mod test {
	#[test]
	fn default_filters() {
		assert_eq!(super::with_default_filters(None, "info"), "info,png=warn", "Wrong default filters");
	}

	#[test]
	fn keeps_user_filters() {
		assert_eq!(
			super::with_default_filters(Some("trace,png=debug,sprite_import=trace"), "info"),
			"trace,png=debug,sprite_import=trace",
			"User filters should take priority"
		);
		assert_eq!(
			super::with_default_filters(Some("sprite_import=trace"), "debug"),
			"debug,png=warn,sprite_import=trace",
			"Missing defaults should be added"
		);
	}
}
