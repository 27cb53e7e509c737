//! Image settings session: alt text, decorative flag, and dimensions.
//!
//! Bundles a [`ResizeEngine`] with the accessibility fields an image needs
//! before it can be saved into a document.
//!
//! # Example
//!
//! ```
//! use zenratio::{Dimension, ImageSettings};
//!
//! let mut settings = ImageSettings::new(None);
//! settings.on_image_load(Dimension::new(800, 600), None).unwrap();
//! assert!(settings.is_save_disabled());
//!
//! settings.set_alt_text("A lighthouse at dusk");
//! let saved = settings.save().unwrap();
//! assert_eq!(saved.dimensions, Dimension::new(800, 600));
//! ```

use alloc::string::String;

use log::debug;

use crate::dimension::Dimension;
use crate::engine::ResizeEngine;
use crate::error::ResizeError;
use crate::step::{GcdStep, StepCalculator};

/// Alternative text for an image.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AltText {
    /// Text read by assistive technology.
    pub value: String,
    /// Purely decorative images need no alt text.
    pub is_decorative: bool,
}

impl AltText {
    /// Seed from previously saved text; missing text starts empty.
    pub fn new(saved: Option<&str>) -> Self {
        Self {
            value: saved.map(String::from).unwrap_or_default(),
            is_decorative: false,
        }
    }

    /// Saving needs either alt text or the decorative flag.
    pub fn is_satisfied(&self) -> bool {
        self.is_decorative || !self.value.is_empty()
    }
}

/// What gets written back to the document on save.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SavedImageSettings {
    pub alt_text: String,
    pub dimensions: Dimension,
    pub is_decorative: bool,
}

/// Editing session for one selected image.
#[derive(Clone, Debug)]
pub struct ImageSettings<C = GcdStep> {
    alt_text: AltText,
    dimensions: ResizeEngine<C>,
}

impl ImageSettings<GcdStep> {
    /// Start a session, seeding alt text from the document if present.
    pub fn new(saved_alt_text: Option<&str>) -> Self {
        Self::with_engine(saved_alt_text, ResizeEngine::new())
    }
}

impl<C: StepCalculator> ImageSettings<C> {
    /// Start a session around a preconfigured engine.
    pub fn with_engine(saved_alt_text: Option<&str>, engine: ResizeEngine<C>) -> Self {
        Self {
            alt_text: AltText::new(saved_alt_text),
            dimensions: engine,
        }
    }

    /// The image element finished loading.
    ///
    /// `selection` carries dimensions already stored for this image in the
    /// document; they win over the natural size when both axes are set.
    pub fn on_image_load(
        &mut self,
        natural: Dimension,
        selection: Option<Dimension>,
    ) -> Result<(), ResizeError> {
        self.dimensions.initialize(natural, selection)
    }

    /// Current alt text state.
    pub fn alt_text(&self) -> &AltText {
        &self.alt_text
    }

    /// Replace the alt text.
    pub fn set_alt_text(&mut self, value: impl Into<String>) {
        self.alt_text.value = value.into();
    }

    /// Mark the image as decorative (or not).
    pub fn set_decorative(&mut self, is_decorative: bool) {
        self.alt_text.is_decorative = is_decorative;
    }

    /// The dimension engine.
    pub fn dimensions(&self) -> &ResizeEngine<C> {
        &self.dimensions
    }

    /// The dimension engine, for typing and committing.
    pub fn dimensions_mut(&mut self) -> &mut ResizeEngine<C> {
        &mut self.dimensions
    }

    /// Whether the save control should be disabled.
    pub fn is_save_disabled(&self) -> bool {
        !self.alt_text.is_satisfied()
    }

    /// Build the payload for the document.
    ///
    /// Uses the committed dimensions; uncommitted typing is not included.
    pub fn save(&self) -> Result<SavedImageSettings, ResizeError> {
        if self.is_save_disabled() {
            return Err(ResizeError::MissingAltText);
        }
        if !self.dimensions.is_initialized() {
            return Err(ResizeError::NotInitialized);
        }
        let saved = SavedImageSettings {
            alt_text: self.alt_text.value.clone(),
            dimensions: self.dimensions.committed(),
            is_decorative: self.alt_text.is_decorative,
        };
        debug!(
            "saving image settings: {} decorative={}",
            saved.dimensions, saved.is_decorative
        );
        Ok(saved)
    }
}
