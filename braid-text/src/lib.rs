//! Text utilities for Braid.
//!
//! A small, self-contained collaborator crate: template rendering and
//! logging, a rendered-message error type, substring and whitespace
//! helpers, and human-readable type names. Nothing here depends on the
//! traversal layer in `braid-core`, and nothing there depends on this.

mod error;
mod ops;
mod render;
mod type_name;

pub use error::BraidError;
pub use ops::{contains, join, replace_first, rtrim, split};
pub use render::{log, render};
pub use type_name::{short_type_name, type_name};
