//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (ConfigProvider, CommandRunner, etc.)
//! but are themselves concrete structs, not traits.

mod compose;
mod input;
mod post;

pub use compose::ComposeService;
pub use input::{InputName, InputService};
pub use post::PostRunService;
