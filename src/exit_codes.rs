//! Exit code constants for the prompter CLI.
//!
//! - 0: Success
//! - 1: Configuration error (missing payloads directory, bad config, bad args)
//! - 2: Payload failure (unparseable file, missing or invalid prompt)
//! - 3: I/O failure (unreadable file or directory)
//! - 4: Output failure (rendered payloads could not be serialized)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Configuration error: missing payloads directory, invalid config or globs.
pub const CONFIG_ERROR: i32 = 1;

/// Payload failure: a payload file could not be parsed or failed validation.
pub const PAYLOAD_FAILURE: i32 = 2;

/// I/O failure: a payload, wildcard, or config file could not be read.
pub const IO_FAILURE: i32 = 3;

/// Output failure: rendered payloads could not be serialized.
pub const OUTPUT_FAILURE: i32 = 4;
