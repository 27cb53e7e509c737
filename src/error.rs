use core::fmt;

/// Dimension editing error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResizeError {
    /// Natural image width or height is zero (or not a finite positive number).
    ZeroNaturalDimension,
    /// The engine was used before an image finished loading.
    NotInitialized,
    /// Save attempted on a non-decorative image without alt text.
    MissingAltText,
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroNaturalDimension => f.write_str("natural image dimensions must be positive"),
            Self::NotInitialized => f.write_str("no image dimensions loaded"),
            Self::MissingAltText => f.write_str("alt text is required unless the image is decorative"),
        }
    }
}

impl core::error::Error for ResizeError {}
