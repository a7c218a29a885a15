#![deny(missing_docs)]

//! # Corpus Models
//!
//! Core data types for the Arabic dialogue corpus viewer.
//!
//! ## Data hierarchy
//!
//! ```text
//! Vec<Dialogue>
//! └── Dialogue { topic, turns }
//!     └── Message { A?, B? }   (one entry per turn)
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`dialogue`] | `Dialogue`, `Message`, `Speaker` |
//! | [`payload`] | Unwrapping the generator's JSON-in-string payload |
//! | [`error`] | `PayloadError` |

pub mod dialogue;
pub mod error;
pub mod payload;

// Re-export all public types at crate root for convenience.
pub use dialogue::*;
pub use error::*;
pub use payload::*;
