//! Surface

// Imports
use image::RgbaImage;

/// Loaded surface
///
/// Always stored as rgba, regardless of the format it was decoded from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Surface {
	/// Image
	image: RgbaImage,
}

impl Surface {
	/// Creates a surface from an image
	#[must_use]
	pub fn new(image: RgbaImage) -> Self {
		Self { image }
	}

	/// Returns the surface's width
	#[must_use]
	pub fn width(&self) -> u32 {
		self.image.width()
	}

	/// Returns the surface's height
	#[must_use]
	pub fn height(&self) -> u32 {
		self.image.height()
	}

	/// Returns the surface's size, as `(width, height)`
	#[must_use]
	pub fn size(&self) -> (u32, u32) {
		self.image.dimensions()
	}

	/// Returns the underlying pixels
	#[must_use]
	pub fn pixels(&self) -> &RgbaImage {
		&self.image
	}

	/// Returns the underlying image
	#[must_use]
	pub fn into_image(self) -> RgbaImage {
		self.image
	}
}

impl From<RgbaImage> for Surface {
	fn from(image: RgbaImage) -> Self {
		Self::new(image)
	}
}
