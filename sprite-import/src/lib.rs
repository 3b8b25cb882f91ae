//! Sprite folder importing
//!
//! Loads every image within a folder as a [`Surface`] scaled to a fixed
//! size, optionally mirrored horizontally.
//!
//! See [`import_folder`] and [`enemy_import_folder`] for the two presets,
//! or [`FolderLoader`] for custom [`LoadOptions`].

// Modules
mod error;
mod loader;
mod options;
mod surface;

// Exports
pub use self::{
	error::{LoadError, LoadOptionsError},
	loader::{FolderLoader, enemy_import_folder, import_folder, load_folder, load_surface},
	options::{LoadOptions, Order, ScaleFilter, SurfaceSize},
	surface::Surface,
};
