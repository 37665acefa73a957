//! OceanChat Core - Domain models, classifier, responder, and configuration
//!
//! This crate contains the core domain logic and port definitions for the
//! OceanChat system. The interaction surfaces (HTTP API, CLI) live in their
//! own crates and consume this one.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
pub mod responder;

pub use error::{OceanChatError, Result};
pub use responder::ChatEngine;
