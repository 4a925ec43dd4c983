//! Core infrastructure module for finetune-prep.
//!
//! - [`types`]: Row identity and category types
//! - [`constants`]: Configuration defaults
//! - [`error`]: Error handling and error types
//! - [`random`]: Seeded random number generation
//!
//! ```rust
//! use finetune_prep::core::{
//!     constants::DEFAULT_SEED,
//!     error::{PrepError, Result},
//!     random::seeded_rng,
//! };
//!
//! let _rng = seeded_rng(DEFAULT_SEED);
//! let err = PrepError::invalid_argument("sample too large");
//! assert!(err.is_invalid_argument());
//! ```

pub mod constants;
pub mod error;
pub mod random;
pub mod types;

pub use constants::*;
pub use error::{PrepError, Result};
pub use random::{draw_without_replacement, seeded_rng};
pub use types::*;

/// Initialize the logging subsystem.
///
/// Defaults `RUST_LOG` to `info` when unset. Calling this more than once is
/// harmless; later calls leave the installed logger in place.
pub fn initialize_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    // Try to initialize env_logger, ignore if already initialized
    if env_logger::try_init().is_ok() {
        log::debug!("finetune-prep {} logging initialized", crate::VERSION);
    }
}
