//! Arguments

// Imports
use {
	sprite_import::{Order, ScaleFilter},
	std::path::PathBuf,
};

/// Arguments
#[derive(Debug)]
#[derive(clap::Parser)]
#[clap(about = "Loads every image within a folder as a scaled surface")]
pub struct Args {
	/// Folder to load
	pub dir: PathBuf,

	/// Preset to load with.
	///
	/// Either one of the built-in `general` or `enemy` presets, or
	/// a preset defined in the config.
	#[clap(long = "preset", short = 'p')]
	pub preset: Option<String>,

	/// Width to scale surfaces to.
	#[clap(long = "width", requires = "height")]
	pub width: Option<u32>,

	/// Height to scale surfaces to.
	#[clap(long = "height", requires = "width")]
	pub height: Option<u32>,

	/// Mirror surfaces horizontally
	#[clap(long = "flip")]
	pub flip: bool,

	/// Order to load surfaces in
	#[clap(long = "order", value_enum)]
	pub order: Option<Order>,

	/// Scale filter
	#[clap(long = "filter", value_enum)]
	pub filter: Option<ScaleFilter>,

	/// Config file
	#[clap(long = "config")]
	pub config: Option<PathBuf>,

	/// Log file
	///
	/// Logs everything at the debug level by default, see `RUST_FILE_LOG`
	#[clap(long = "log-file")]
	pub log_file: Option<PathBuf>,

	/// Output a json report instead of a line per surface
	#[clap(long = "json")]
	pub json: bool,
}
