//! Utility

// Modules
mod measure;
mod walk_dir;

// Exports
pub use walk_dir::{WalkDir, WalkDirBuilder};

// Imports
use std::time::{Duration, Instant};

/// Measures how long it took to execute a function
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
	let start_time = Instant::now();
	let value = f();
	let duration = start_time.elapsed();
	(value, duration)
}

/// Measures how long it took to execute a fallible function
pub fn try_measure<T, E>(f: impl FnOnce() -> Result<T, E>) -> Result<(T, Duration), E> {
	let start_time = Instant::now();
	let value = f()?;
	let duration = start_time.elapsed();
	Ok((value, duration))
}
