//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod flags;

pub use entities::*;
pub use flags::{has_empty_tokens, parse_flags, split_lines};
