//! Errors

// Imports
use std::{io, path::PathBuf};

/// Error for [`load_folder`](crate::load_folder) and friends
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	/// Unable to walk the folder
	#[error("Unable to walk folder {root:?}")]
	Walk {
		/// Folder being walked
		root: PathBuf,

		#[source]
		source: io::Error,
	},

	/// Unable to open an image
	#[error("Unable to open image {path:?}")]
	Open {
		/// Image path
		path: PathBuf,

		#[source]
		source: io::Error,
	},

	/// Unable to decode an image
	#[error("Unable to decode image {path:?}")]
	Decode {
		/// Image path
		path: PathBuf,

		#[source]
		source: image::ImageError,
	},
}

impl LoadError {
	/// Returns the path that caused this error
	#[must_use]
	pub fn path(&self) -> &PathBuf {
		match self {
			Self::Walk { root: path, .. } | Self::Open { path, .. } | Self::Decode { path, .. } => path,
		}
	}
}

/// Error for creating [`LoadOptions`](crate::LoadOptions)
#[derive(PartialEq, Eq, Clone, Copy, Debug, thiserror::Error)]
pub enum LoadOptionsError {
	/// A size component was zero
	#[error("Surface size must be non-zero, found {width}x{height}")]
	ZeroSize { width: u32, height: u32 },
}
