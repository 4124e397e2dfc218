//! Core module - word index data structures and the stages that use them
//!
//! This module provides:
//! - Insertion-ordered Index and Count models
//! - The document indexer
//! - Count derivation, filtering and sorting
//! - Input sources and the tagged pipeline input
//! - Rendering of indexes and count lines
//! - Error types

pub mod error;
pub mod frequency;
pub mod indexer;
pub mod input;
pub mod model;
pub mod render;
