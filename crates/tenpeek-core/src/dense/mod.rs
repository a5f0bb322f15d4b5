//! Dense array implementation
//!
//! This module provides the dense N-dimensional array the inspector summarizes,
//! organized into functional sub-modules.

// Core type definition
pub mod types;

// Operation modules
mod display;
mod statistics;

// Supporting modules
pub mod densend_traits;

// Re-export the main type
pub use types::DenseND;

pub(crate) use display::{render_nested, Layout};
