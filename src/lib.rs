//! compose-action: resolve CI inputs and forward them to `docker compose`.
//!
//! Inputs are read through a [`infrastructure::traits::ConfigProvider`],
//! validated by [`application::services::InputService`] and dispatched by
//! [`application::services::ComposeService`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
