//! Domain models and types for Vitex.
//!
//! The domain layer provides:
//! - **Error types** ([`VitexError`])
//! - **Result type alias** ([`Result`])
//! - **The opaque model handle** ([`Model`]) passed between the export
//!   collaborators (builder, recipe applier, weight loader, exporter)
//!
//! # Error Handling
//!
//! All fallible library operations return [`Result<T, VitexError>`]:
//!
//! ```rust
//! use vitex::domain::{Result, VitexError};
//!
//! fn example(shape: &[usize]) -> Result<()> {
//!     if shape.len() != 3 {
//!         return Err(VitexError::Configuration("expected 3 dims".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod model;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::VitexError;
pub use model::{Model, QuantizationState, SparsityProfile};
pub use result::Result;
