//! Measuring macros

/// Measures how long it took to execute a statement
#[macro_export]
macro_rules! measure {
	($value:expr) => {{
		let start_time = ::std::time::Instant::now();
		match $value {
			value => {
				let duration = ::std::time::Instant::elapsed(&start_time);
				(value, duration)
			},
		}
	}};
}

/// Measures how long it took to execute a fallible statement,
/// returning a `Result<(T, Duration), Err>`
#[macro_export]
macro_rules! try_measure {
	($value:expr) => {{
		let start_time = ::std::time::Instant::now();
		match $value {
			::std::result::Result::Ok(value) => {
				let duration = ::std::time::Instant::elapsed(&start_time);
				::std::result::Result::Ok((value, duration))
			},
			::std::result::Result::Err(err) => ::std::result::Result::Err(err),
		}
	}};
}

#[cfg(test)]
mod test {
	#[test]
	fn measure_returns_value() {
		let (value, _duration) = crate::measure!(1 + 2);
		assert_eq!(value, 3, "Measured value changed");
	}

	#[test]
	fn try_measure_ok() {
		let res = crate::try_measure!(Ok::<_, &str>(5));
		assert!(matches!(res, Ok((5, _))), "Expected value, found {res:?}");
	}

	#[test]
	fn try_measure_err() {
		let res = crate::try_measure!(Err::<u32, _>("error"));
		assert!(matches!(res, Err("error")), "Expected error, found {res:?}");
	}

	#[test]
	fn try_measure_fn() {
		let res = crate::try_measure(|| "12".parse::<u32>());
		assert!(matches!(res, Ok((12, _))), "Expected value, found {res:?}");

		let (value, _) = crate::measure(|| "abc".len());
		assert_eq!(value, 3, "Measured value changed");
	}
}
