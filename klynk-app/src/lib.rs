//! Klynk terminal client
//!
//! Host application around the platform-agnostic core:
//! - TOML configuration with embedded defaults
//! - Session controller over a [`klynk_protocol::RecipeSource`]
//! - Input task and cooking clock driving a single tokio cook loop
//! - Text renderer for catalog, detail, and cooking screens

#![deny(unsafe_code)]

pub mod channels;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod input;
pub mod logging;
pub mod tasks;

pub use controller::Controller;
pub use error::AppError;

/// Sample recipe tables compiled into the binary
pub const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");
