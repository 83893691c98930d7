//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error
pub const USAGE: i32 = 64;

/// External tool could not be started
pub const UNAVAILABLE: i32 = 69;

/// External tool exited with failure
pub const SOFTWARE: i32 = 70;

/// Configuration error (missing input, bad settings)
pub const CONFIG: i32 = 78;
