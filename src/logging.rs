//! Diagnostic logging for the library and the command-line front end.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary (or to an embedding application).

use std::io;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbosity` picks the level
/// (0 = warn, 1 = info, 2 = debug, 3+ = trace). Later calls are no-ops, as is
/// the call when another global subscriber is already installed.
pub fn initialize(verbosity: u8) {
	INIT.call_once(|| {
		let filter = EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
		let _ = tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_writer(io::stderr)
			.with_target(false)
			.try_init();
	});
}

fn default_directive(verbosity: u8) -> String {
	let level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	format!("{}={level}", env!("CARGO_CRATE_NAME"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_maps_to_levels() {
		assert_eq!(default_directive(0), "omnisearch=warn");
		assert_eq!(default_directive(2), "omnisearch=debug");
		assert_eq!(default_directive(9), "omnisearch=trace");
	}

	#[test]
	fn repeated_initialization_is_harmless() {
		initialize(0);
		initialize(3);
	}
}
