//! Folder loader
//!
//! Walks a folder and loads every file within it (and within it's
//! sub-folders) as a [`Surface`].
//!
//! Loading is fail-fast: the first file that can't be read or decoded
//! aborts the whole folder.

// Imports
use {
	crate::{LoadError, LoadOptions, Order, Surface},
	image::{ImageReader, imageops},
	sprite_import_util::WalkDir,
	std::path::{Path, PathBuf},
};

/// Folder loader
#[derive(Clone, Copy, Debug)]
pub struct FolderLoader {
	/// Options
	options: LoadOptions,
}

impl FolderLoader {
	/// Creates a new folder loader
	#[must_use]
	pub fn new(options: LoadOptions) -> Self {
		Self { options }
	}

	/// Returns the options
	#[must_use]
	pub fn options(&self) -> &LoadOptions {
		&self.options
	}

	/// Returns an iterator loading all surfaces within `path`.
	///
	/// Each surface is only loaded once the iterator reaches it.
	pub fn iter(&self, path: impl Into<PathBuf>) -> impl Iterator<Item = Result<Surface, LoadError>> {
		let root = path.into();
		WalkDir::builder()
			.recurse_symlink(self.options.follow_symlinks)
			.sort(self.options.order == Order::Sorted)
			.build(root.clone())
			.map(move |entry| {
				let path = entry.map_err(|source| LoadError::Walk {
					root: root.clone(),
					source,
				})?;
				self::load_surface(&path, &self.options)
			})
	}

	/// Loads all surfaces within `path`.
	pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<Surface>, LoadError> {
		let path = path.as_ref();
		tracing::debug!(?path, options = ?self.options, "Loading folder");

		let (surfaces, duration) = sprite_import_util::try_measure(|| self.iter(path).collect::<Result<Vec<_>, _>>())?;
		tracing::debug!(?path, surfaces = surfaces.len(), ?duration, "Loaded folder");

		Ok(surfaces)
	}
}

/// Loads all surfaces within `path` using `options`
pub fn load_folder(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Vec<Surface>, LoadError> {
	FolderLoader::new(*options).load(path)
}

/// Loads all surfaces within `path`, scaled to `500x350`
pub fn import_folder(path: impl AsRef<Path>) -> Result<Vec<Surface>, LoadError> {
	self::load_folder(path, &LoadOptions::general())
}

/// Loads all surfaces within `path`, scaled to `250x300` and mirrored horizontally
pub fn enemy_import_folder(path: impl AsRef<Path>) -> Result<Vec<Surface>, LoadError> {
	self::load_folder(path, &LoadOptions::enemy())
}

/// Loads a single surface
pub fn load_surface(path: &Path, options: &LoadOptions) -> Result<Surface, LoadError> {
	// Note: We guess the format from the contents, so files with a wrong
	//       (or no) extension still load.
	tracing::trace!(?path, "Loading image");
	let reader = ImageReader::open(path)
		.and_then(ImageReader::with_guessed_format)
		.map_err(|source| LoadError::Open {
			path: path.to_path_buf(),
			source,
		})?;
	let (image, load_duration) = sprite_import_util::try_measure!(reader.decode()).map_err(|source| LoadError::Decode {
		path: path.to_path_buf(),
		source,
	})?;
	tracing::trace!(?path, image_width = ?image.width(), image_height = ?image.height(), ?load_duration, "Loaded image");

	let image = image.into_rgba8();
	let (width, height) = (options.size.width(), options.size.height());
	let (mut image, resize_duration) =
		sprite_import_util::measure!(imageops::resize(&image, width, height, options.filter.into()));
	tracing::trace!(?path, ?width, ?height, ?resize_duration, "Resized image");

	if options.flip_horizontal {
		imageops::flip_horizontal_in_place(&mut image);
	}

	Ok(Surface::new(image))
}
