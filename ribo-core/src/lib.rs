//! Shared primitives for the ribo DNA-to-protein decoding pipeline.
//!
//! - **Error types**: [`RiboError`] and [`Result`] for structured error handling
//! - **Traits**: [`Sequence`] and [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{RiboError, Result};
pub use traits::{Sequence, Summarizable};
