//! Load options

// Imports
use {
	crate::LoadOptionsError,
	image::imageops::FilterType,
	std::{fmt, num::NonZeroU32},
};

/// Surface size
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
	/// Width
	width: NonZeroU32,

	/// Height
	height: NonZeroU32,
}

impl SurfaceSize {
	/// Creates a new size.
	///
	/// Both the width and height must be non-zero.
	pub fn new(width: u32, height: u32) -> Result<Self, LoadOptionsError> {
		match (NonZeroU32::new(width), NonZeroU32::new(height)) {
			(Some(width), Some(height)) => Ok(Self { width, height }),
			_ => Err(LoadOptionsError::ZeroSize { width, height }),
		}
	}

	/// Creates a new size from constants
	const fn from_const(width: u32, height: u32) -> Self {
		match (NonZeroU32::new(width), NonZeroU32::new(height)) {
			(Some(width), Some(height)) => Self { width, height },
			_ => panic!("Constant surface size was zero"),
		}
	}

	/// Returns the width
	#[must_use]
	pub fn width(self) -> u32 {
		self.width.get()
	}

	/// Returns the height
	#[must_use]
	pub fn height(self) -> u32 {
		self.height.get()
	}
}

impl fmt::Display for SurfaceSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.width, self.height)
	}
}

/// Filter used when scaling
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleFilter {
	/// Nearest neighbor
	#[default]
	Nearest,

	/// Linear
	Triangle,

	/// Cubic
	CatmullRom,

	/// Gaussian
	Gaussian,

	/// Lanczos with window 3
	Lanczos3,
}

impl From<ScaleFilter> for FilterType {
	fn from(filter: ScaleFilter) -> Self {
		match filter {
			ScaleFilter::Nearest => Self::Nearest,
			ScaleFilter::Triangle => Self::Triangle,
			ScaleFilter::CatmullRom => Self::CatmullRom,
			ScaleFilter::Gaussian => Self::Gaussian,
			ScaleFilter::Lanczos3 => Self::Lanczos3,
		}
	}
}

/// Order surfaces are returned in
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
	/// Order the filesystem lists each folder in.
	///
	/// Not guaranteed to be the same across platforms or filesystems.
	#[default]
	Listing,

	/// Sorted by file name within each folder
	Sorted,
}

/// Load options
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct LoadOptions {
	/// Size every surface is scaled to
	pub size: SurfaceSize,

	/// Whether to mirror surfaces horizontally
	#[serde(default)]
	pub flip_horizontal: bool,

	/// Scale filter
	#[serde(default)]
	pub filter: ScaleFilter,

	/// Order
	#[serde(default)]
	pub order: Order,

	/// Whether to recurse into symlinked folders
	#[serde(default)]
	pub follow_symlinks: bool,
}

impl LoadOptions {
	/// General surface size
	pub const GENERAL_SIZE: SurfaceSize = SurfaceSize::from_const(500, 350);

	/// Enemy surface size
	pub const ENEMY_SIZE: SurfaceSize = SurfaceSize::from_const(250, 300);

	/// Creates options that scale to `size` with all other options at their default
	#[must_use]
	pub fn new(size: SurfaceSize) -> Self {
		Self {
			size,
			flip_horizontal: false,
			filter: ScaleFilter::default(),
			order: Order::default(),
			follow_symlinks: false,
		}
	}

	/// General options, scaling to `500x350`
	#[must_use]
	pub fn general() -> Self {
		Self::new(Self::GENERAL_SIZE)
	}

	/// Enemy options, scaling to `250x300` and flipping horizontally
	#[must_use]
	pub fn enemy() -> Self {
		Self {
			flip_horizontal: true,
			..Self::new(Self::ENEMY_SIZE)
		}
	}

	/// Sets whether to flip horizontally
	#[must_use]
	pub fn with_flip_horizontal(self, flip_horizontal: bool) -> Self {
		Self {
			flip_horizontal,
			..self
		}
	}

	/// Sets the scale filter
	#[must_use]
	pub fn with_filter(self, filter: ScaleFilter) -> Self {
		Self { filter, ..self }
	}

	/// Sets the order
	#[must_use]
	pub fn with_order(self, order: Order) -> Self {
		Self { order, ..self }
	}

	/// Sets whether to recurse into symlinked folders
	#[must_use]
	pub fn with_follow_symlinks(self, follow_symlinks: bool) -> Self {
		Self {
			follow_symlinks,
			..self
		}
	}
}
