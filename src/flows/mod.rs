//! Flows module - one pipeline per subcommand
//!
//! Provides:
//! - index: document -> JSON index
//! - count: document or precomputed index -> filtered, optionally sorted counts

pub mod count;
pub mod index;
