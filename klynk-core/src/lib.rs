//! Platform-agnostic core logic for the Klynk guided cooking client
//!
//! This crate contains all application logic that does not depend on
//! a rendering surface, a clock, or a data store:
//!
//! - Recipe, ingredient, and cooking step model
//! - Step sequencer with per-step countdown and auto-advance
//! - Serving-scaled ingredient quantity formatting
//! - Ingredient grouping and checklist
//! - Catalog search and filtering
//! - Session state machine
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod catalog;
pub mod config;
pub mod ingredients;
pub mod model;
pub mod scaling;
pub mod sequencer;
pub mod state;
