//! Bluesforge Parameter Library
//!
//! This crate provides the parameter types, compiled-in catalog constants, and
//! validation used by the Bluesforge MIDI library generator. A generation run is
//! a pure function of one [`TrackParams`] tuple; no runtime configuration exists
//! beyond the constant tables defined in [`catalog`].
//!
//! # Example
//!
//! ```
//! use bluesforge_spec::{KeySignature, TrackParams};
//!
//! let params = TrackParams::new(KeySignature::EMinor, 65, 0.4, 2000);
//! let result = params.validate();
//! assert!(result.is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types, validation results, and the shared [`BackendError`] trait
//! - [`params`]: Key signatures and the per-run parameter tuple
//! - [`catalog`]: The compiled-in cross-product of parameter combinations

pub mod catalog;
pub mod error;
pub mod params;

// Re-export commonly used types at the crate root
pub use catalog::{catalog, track_filename, GRIT_CONSTANTS, SLIDE_MAGNITUDES};
pub use error::{BackendError, ErrorCode, ValidationError, ValidationResult};
pub use params::{KeySignature, TrackParams};

/// Crate version for backend identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
