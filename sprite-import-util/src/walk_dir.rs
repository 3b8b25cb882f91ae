//! Directory walker

// Imports
use std::{
	collections::VecDeque,
	fs,
	io,
	path::{Path, PathBuf},
};

/// Directory walker builder
#[derive(Debug)]
#[expect(missing_copy_implementations, reason = "We might have non-Copy fields in the future")]
pub struct WalkDirBuilder {
	/// Max depth
	max_depth: Option<usize>,

	/// Recurse on symlinks
	recurse_symlink: bool,

	/// Sort entries by file name
	sort: bool,
}

impl WalkDirBuilder {
	/// Sets the max depth for walking.
	///
	/// A max depth of 0 means only the root directory is read.
	#[must_use]
	pub fn max_depth(self, max_depth: Option<usize>) -> Self {
		Self { max_depth, ..self }
	}

	/// Sets if we should recurse on symlinks
	#[must_use]
	pub fn recurse_symlink(self, recurse_symlink: bool) -> Self {
		Self {
			recurse_symlink,
			..self
		}
	}

	/// Sets if entries of each directory should be sorted by file name.
	///
	/// Otherwise they're yielded in the order the filesystem lists them.
	#[must_use]
	pub fn sort(self, sort: bool) -> Self {
		Self { sort, ..self }
	}

	/// Builds the directory walker
	#[must_use]
	pub fn build(self, root: PathBuf) -> WalkDir {
		WalkDir {
			pending_dirs:    vec![(root, 0)],
			files:           VecDeque::new(),
			max_depth:       self.max_depth,
			recurse_symlink: self.recurse_symlink,
			sort:            self.sort,
		}
	}
}

/// Directory walker
///
/// Yields all files beneath the root, top-down: all files of a directory
/// are yielded before any of it's sub-directories are read.
///
/// Errors are yielded and walking continues afterwards, so callers
/// that want to fail fast should stop on the first error.
#[derive(Debug)]
pub struct WalkDir {
	/// Directories left to read, with their depth.
	///
	/// The next directory to read is at the end.
	pending_dirs: Vec<(PathBuf, usize)>,

	/// Files of the current directory left to yield
	files: VecDeque<PathBuf>,

	/// Max depth
	max_depth: Option<usize>,

	/// Recurse on symlinks
	recurse_symlink: bool,

	/// Sort entries
	sort: bool,
}

impl WalkDir {
	/// Creates a new builder
	#[must_use]
	pub fn builder() -> WalkDirBuilder {
		WalkDirBuilder {
			max_depth:       None,
			recurse_symlink: false,
			sort:            false,
		}
	}

	/// Reads a directory, queueing all of it's files and sub-directories
	fn read_dir(&mut self, path: &Path, depth: usize) -> Result<(), io::Error> {
		tracing::trace!(?path, ?depth, "Reading directory");

		let mut files = vec![];
		let mut dirs = vec![];
		for entry in fs::read_dir(path)? {
			let entry = entry?;
			let entry_path = entry.path();
			match self.entry_kind(&entry)? {
				EntryKind::File => files.push(entry_path),
				EntryKind::Dir => dirs.push(entry_path),
				EntryKind::Skip => tracing::trace!(?entry_path, "Skipping symlinked directory"),
			}
		}

		if self.sort {
			files.sort_unstable_by(|lhs, rhs| lhs.file_name().cmp(&rhs.file_name()));
			dirs.sort_unstable_by(|lhs, rhs| lhs.file_name().cmp(&rhs.file_name()));
		}

		// Note: Only recurse if we have space to
		if self.max_depth.is_none_or(|max_depth| depth < max_depth) {
			// Note: Reversed, since we pop from the end
			self.pending_dirs
				.extend(dirs.into_iter().rev().map(|dir| (dir, depth + 1)));
		}
		self.files.extend(files);

		Ok(())
	}

	/// Classifies an entry
	fn entry_kind(&self, entry: &fs::DirEntry) -> Result<EntryKind, io::Error> {
		let file_type = entry.file_type()?;
		if file_type.is_dir() {
			return Ok(EntryKind::Dir);
		}
		if !file_type.is_symlink() {
			return Ok(EntryKind::File);
		}

		// Note: Broken symlinks are yielded as files, so whoever opens them
		//       gets to report the error.
		let is_dir = fs::metadata(entry.path()).is_ok_and(|metadata| metadata.is_dir());
		Ok(match (is_dir, self.recurse_symlink) {
			(true, true) => EntryKind::Dir,
			(true, false) => EntryKind::Skip,
			(false, _) => EntryKind::File,
		})
	}
}

impl Iterator for WalkDir {
	type Item = Result<PathBuf, io::Error>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			// If we have any files left, yield them
			if let Some(file) = self.files.pop_front() {
				return Some(Ok(file));
			}

			// Else read the next directory, or finish if there are none
			let (dir, depth) = self.pending_dirs.pop()?;
			if let Err(err) = self.read_dir(&dir, depth) {
				tracing::trace!(?dir, ?err, "Unable to read directory");
				return Some(Err(err));
			}
		}
	}
}

/// Entry kind
#[derive(Clone, Copy, Debug)]
enum EntryKind {
	/// File to yield
	File,

	/// Directory to recurse into
	Dir,

	/// Ignored
	Skip,
}

#[cfg(test)]
mod test {
	use {
		super::*,
		std::{collections::HashSet, ffi::OsStr},
		tempfile::TempDir,
	};

	/// Creates a tree with `a`, `b` at the root, `sub/c` and `sub/deep/d`
	fn tree() -> TempDir {
		let dir = tempfile::tempdir().expect("Unable to create temporary directory");
		fs::create_dir_all(dir.path().join("sub/deep")).expect("Unable to create sub-directories");
		for file in ["a", "b", "sub/c", "sub/deep/d"] {
			fs::write(dir.path().join(file), file).expect("Unable to write file");
		}

		dir
	}

	fn names(walk: WalkDir) -> Vec<String> {
		walk.map(|path| {
			let path = path.expect("Unable to walk");
			path.file_name()
				.and_then(OsStr::to_str)
				.expect("File name should be utf-8")
				.to_owned()
		})
		.collect()
	}

	#[test]
	fn flattens_sub_directories() {
		let dir = tree();
		let files = WalkDir::builder()
			.build(dir.path().to_path_buf())
			.collect::<Result<HashSet<_>, _>>()
			.expect("Unable to walk");

		let expected = ["a", "b", "sub/c", "sub/deep/d"]
			.into_iter()
			.map(|file| dir.path().join(file))
			.collect::<HashSet<_>>();
		assert_eq!(files, expected, "Should yield every file with it's real path");
	}

	#[test]
	fn top_down_sorted() {
		let dir = tree();
		let names = self::names(WalkDir::builder().sort(true).build(dir.path().to_path_buf()));
		assert_eq!(names, ["a", "b", "c", "d"], "Root files should come before sub-directory files");
	}

	#[test]
	fn max_depth() {
		let dir = tree();

		let names = self::names(
			WalkDir::builder()
				.sort(true)
				.max_depth(Some(0))
				.build(dir.path().to_path_buf()),
		);
		assert_eq!(names, ["a", "b"], "Depth 0 should only read the root");

		let names = self::names(
			WalkDir::builder()
				.sort(true)
				.max_depth(Some(1))
				.build(dir.path().to_path_buf()),
		);
		assert_eq!(names, ["a", "b", "c"], "Depth 1 should read one level of sub-directories");
	}

	#[test]
	fn empty() {
		let dir = tempfile::tempdir().expect("Unable to create temporary directory");
		fs::create_dir(dir.path().join("empty")).expect("Unable to create sub-directory");

		let mut walk = WalkDir::builder().build(dir.path().to_path_buf());
		assert!(walk.next().is_none(), "Empty directories have no files");
	}

	#[test]
	fn missing_root() {
		let dir = tempfile::tempdir().expect("Unable to create temporary directory");
		let mut walk = WalkDir::builder().build(dir.path().join("missing"));

		let err = walk.next().expect("Should yield an error").expect_err("Should yield an error");
		assert_eq!(err.kind(), io::ErrorKind::NotFound, "Unexpected error: {err:?}");
		assert!(walk.next().is_none(), "Should be finished after the error");
	}

	#[cfg(unix)]
	#[test]
	fn symlinks() {
		let dir = tree();
		let target = tempfile::tempdir().expect("Unable to create temporary directory");
		fs::write(target.path().join("linked"), "linked").expect("Unable to write file");
		std::os::unix::fs::symlink(target.path(), dir.path().join("link-dir")).expect("Unable to create symlink");
		std::os::unix::fs::symlink(dir.path().join("a"), dir.path().join("link-file"))
			.expect("Unable to create symlink");

		let names = self::names(WalkDir::builder().sort(true).build(dir.path().to_path_buf()));
		assert_eq!(
			names,
			["a", "b", "link-file", "c", "d"],
			"Symlinked files should be yielded, but not symlinked directories"
		);

		let names = self::names(
			WalkDir::builder()
				.sort(true)
				.recurse_symlink(true)
				.build(dir.path().to_path_buf()),
		);
		assert_eq!(
			names,
			["a", "b", "link-file", "linked", "c", "d"],
			"Symlinked directories should be recursed into"
		);
	}
}
