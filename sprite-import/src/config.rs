//! App configuration

// Imports
use {
	crate::args::Args,
	app_error::{AppError, Context, app_error},
	sprite_import::{LoadOptions, SurfaceSize},
	std::{collections::BTreeMap, fs, path::Path},
};

/// App configuration
#[derive(Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Config {
	/// Preset used when none is passed
	#[serde(default = "Config::default_preset")]
	pub default_preset: String,

	/// Presets
	///
	/// Presets named `general` or `enemy` override the built-in ones
	#[serde(default)]
	pub presets: BTreeMap<String, LoadOptions>,
}

impl Config {
	/// Loads the config from `path`, or the default, if unable to
	pub fn load_or_default(path: &Path) -> Self {
		match Self::load(path) {
			Ok(config) => config,
			Err(err) => {
				tracing::warn!(?path, "Unable to load config, using default: {}", err.pretty());
				Self::default()
			},
		}
	}

	/// Loads the config
	fn load(path: &Path) -> Result<Self, AppError> {
		tracing::debug!(?path, "Loading config");

		let config_toml = fs::read_to_string(path).context("Unable to open file")?;
		Self::parse(&config_toml)
	}

	/// Parses the config
	fn parse(config_toml: &str) -> Result<Self, AppError> {
		toml::from_str(config_toml).context("Unable to parse config")
	}

	/// Returns a preset by name
	pub fn preset(&self, name: &str) -> Option<LoadOptions> {
		if let Some(options) = self.presets.get(name) {
			return Some(*options);
		}

		match name {
			"general" => Some(LoadOptions::general()),
			"enemy" => Some(LoadOptions::enemy()),
			_ => None,
		}
	}

	/// Resolves the load options from the arguments.
	///
	/// Starts from the requested (or default) preset, then applies
	/// any overrides given in the arguments.
	pub fn resolve_options(&self, args: &Args) -> Result<LoadOptions, AppError> {
		let preset = args.preset.as_deref().unwrap_or(&self.default_preset);
		let mut options = self
			.preset(preset)
			.ok_or_else(|| app_error!("Unknown preset {preset:?}"))?;

		if let (Some(width), Some(height)) = (args.width, args.height) {
			options.size = SurfaceSize::new(width, height).context("Invalid surface size")?;
		}
		if args.flip {
			options.flip_horizontal = true;
		}
		if let Some(order) = args.order {
			options.order = order;
		}
		if let Some(filter) = args.filter {
			options.filter = filter;
		}

		Ok(options)
	}

	fn default_preset() -> String {
		"general".to_owned()
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			default_preset: Self::default_preset(),
			presets:        BTreeMap::new(),
		}
	}
}
