//! Sprite folder importer
//!
//! Loads a folder of images the same way a game would, and reports the
//! surfaces it got.

// Modules
mod args;
mod config;
mod logger;

// Imports
use {
	self::{args::Args, config::Config},
	app_error::{AppError, Context},
	clap::Parser,
	directories::ProjectDirs,
	sprite_import::{FolderLoader, LoadOptions, Surface},
	std::{
		io::{self, Write},
		path::{Path, PathBuf},
	},
};

fn main() -> Result<(), AppError> {
	// Get arguments
	let args = Args::parse();

	// Initialize logging
	logger::init(args.log_file.as_deref());
	tracing::debug!(?args, "Arguments");

	// Load the config
	let config = match self::config_path(&args) {
		Some(config_path) => Config::load_or_default(&config_path),
		None => Config::default(),
	};
	tracing::debug!(?config, "Loaded config");

	// Then load the folder
	let options = config
		.resolve_options(&args)
		.context("Unable to resolve load options")?;
	let surfaces = FolderLoader::new(options)
		.load(&args.dir)
		.with_context(|| format!("Unable to load folder {:?}", args.dir))?;
	tracing::info!(dir = ?args.dir, surfaces = surfaces.len(), "Loaded folder");

	// And report it
	let report = Report::new(&args.dir, options, &surfaces);
	let mut stdout = io::stdout().lock();
	match args.json {
		true => serde_json::to_writer_pretty(&mut stdout, &report).context("Unable to write json report")?,
		false => report.write_lines(&mut stdout).context("Unable to write report")?,
	}
	writeln!(stdout).context("Unable to write report")?;

	Ok(())
}

/// Returns the config path.
///
/// Uses the argument, if passed, else the project's config file, if it exists.
fn config_path(args: &Args) -> Option<PathBuf> {
	if let Some(config) = &args.config {
		return Some(config.clone());
	}

	let dirs = ProjectDirs::from("", "", "sprite-import")?;
	let config_path = dirs.config_dir().join("config.toml");
	match config_path.exists() {
		true => Some(config_path),
		false => {
			tracing::debug!(?config_path, "No config file found, using default");
			None
		},
	}
}

/// Report
#[derive(Debug)]
#[derive(serde::Serialize)]
struct Report<'a> {
	/// Folder
	dir: &'a Path,

	/// Options used
	options: LoadOptions,

	/// Surfaces
	surfaces: Vec<SurfaceReport>,
}

impl<'a> Report<'a> {
	fn new(dir: &'a Path, options: LoadOptions, surfaces: &[Surface]) -> Self {
		Self {
			dir,
			options,
			surfaces: surfaces
				.iter()
				.enumerate()
				.map(|(idx, surface)| SurfaceReport {
					idx,
					width: surface.width(),
					height: surface.height(),
				})
				.collect(),
		}
	}

	/// Writes a line per surface
	fn write_lines(&self, f: &mut impl Write) -> Result<(), io::Error> {
		write!(
			f,
			"{:?}: {} surface(s) at {}",
			self.dir,
			self.surfaces.len(),
			self.options.size
		)?;
		for surface in &self.surfaces {
			write!(f, "\n#{}: {}x{}", surface.idx, surface.width, surface.height)?;
		}

		Ok(())
	}
}

/// Surface report
#[derive(Clone, Copy, Debug)]
#[derive(serde::Serialize)]
struct SurfaceReport {
	/// Index
	idx: usize,

	/// Width
	width: u32,

	/// Height
	height: u32,
}
