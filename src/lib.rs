//! Aspect-ratio-locked dimension editing for images.
//!
//! Pure integer geometry — no pixel operations, no I/O, `no_std` compatible.
//!
//! # Modules
//!
//! - [`step`] — Minimal integer step pairs via gcd reduction
//! - [`engine`] — Editing session: typed input, lock, snapping commit
//! - [`settings`] — Alt text and save payload around an engine (`alloc`)
//!
//! # Example
//!
//! ```
//! use zenratio::{Dimension, ResizeEngine, StepPair};
//!
//! let mut engine = ResizeEngine::new();
//! engine.initialize(Dimension::new(1920, 1080), None).unwrap();
//! assert_eq!(engine.step(), Some(StepPair::new(16, 9)));
//!
//! // Typing the same value back is a no-op.
//! engine.set_width("1920");
//! assert_eq!(engine.resolve().unwrap(), Dimension::new(1920, 1080));
//!
//! // Shrinking snaps to the nearest 16:9 multiple.
//! engine.set_height("500");
//! assert_eq!(engine.commit().unwrap(), Dimension::new(896, 504));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod dimension;
pub mod engine;
mod error;
#[cfg(feature = "alloc")]
pub mod settings;
pub mod step;

pub use dimension::{Dimension, Field, UnknownField};
pub use engine::{ResizeEngine, ResizeState, valid_dimensions};
pub use error::ResizeError;
#[cfg(feature = "alloc")]
pub use settings::{AltText, ImageSettings, SavedImageSettings};
pub use step::{
    GcdStep, StepCalculator, StepPair, compute_step, compute_step_fractional, gcd,
};
