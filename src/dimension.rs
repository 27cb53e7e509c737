//! Width × height pairs and the field selector used by the editing engine.

use core::fmt;
use core::str::FromStr;

/// Width × height dimensions in pixels.
///
/// Natural dimensions are non-zero (loading rejects zero). An axis may be
/// zero in a local pair while the user is typing; with the ratio unlocked a
/// commit passes that value through unchanged.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimension {
    /// Create a new dimension pair.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either axis is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Read one axis.
    pub const fn get(&self, field: Field) -> u32 {
        match field {
            Field::Width => self.width,
            Field::Height => self.height,
        }
    }

    /// Write one axis, leaving the other untouched.
    pub fn set(&mut self, field: Field, value: u32) {
        match field {
            Field::Width => self.width = value,
            Field::Height => self.height = value,
        }
    }

    /// Copy with one axis replaced.
    pub const fn with(self, field: Field, value: u32) -> Self {
        match field {
            Field::Width => Self::new(value, self.height),
            Field::Height => Self::new(self.width, value),
        }
    }
}

impl From<(u32, u32)> for Dimension {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One axis of a [`Dimension`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    Width,
    Height,
}

impl Field {
    /// The opposite axis.
    pub const fn other(self) -> Self {
        match self {
            Self::Width => Self::Height,
            Self::Height => Self::Width,
        }
    }

    /// Lowercase name as used by form fields (`"width"` / `"height"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names neither `width` nor `height`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownField;

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected \"width\" or \"height\"")
    }
}

impl core::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("width") {
            Ok(Self::Width)
        } else if s.eq_ignore_ascii_case("height") {
            Ok(Self::Height)
        } else {
            Err(UnknownField)
        }
    }
}

/// Parse a typed dimension value the way a numeric text box reads it.
///
/// Leading whitespace and a single `+` are skipped, then base-10 digits are
/// consumed up to the first non-digit. Returns `None` when no digit was
/// found, when the value is negative, or when it overflows `u32`.
pub(crate) fn parse_typed(raw: &str) -> Option<u32> {
    let s = raw.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_with() {
        let mut d = Dimension::new(1920, 1080);
        assert_eq!(d.get(Field::Width), 1920);
        assert_eq!(d.get(Field::Height), 1080);
        d.set(Field::Height, 540);
        assert_eq!(d, Dimension::new(1920, 540));
        assert_eq!(d.with(Field::Width, 960), Dimension::new(960, 540));
    }

    #[test]
    fn empty_when_either_axis_zero() {
        assert!(Dimension::new(0, 10).is_empty());
        assert!(Dimension::new(10, 0).is_empty());
        assert!(!Dimension::new(1, 1).is_empty());
    }

    #[test]
    fn field_names_round_trip() {
        assert_eq!("width".parse::<Field>(), Ok(Field::Width));
        assert_eq!("Height".parse::<Field>(), Ok(Field::Height));
        assert_eq!("depth".parse::<Field>(), Err(UnknownField));
        assert_eq!(Field::Width.other(), Field::Height);
    }

    // ── parse_typed ─────────────────────────────────────────────────────

    #[test]
    fn parse_plain_digits() {
        assert_eq!(parse_typed("1000"), Some(1000));
        assert_eq!(parse_typed("  42"), Some(42));
        assert_eq!(parse_typed("+7"), Some(7));
        assert_eq!(parse_typed("0"), Some(0));
    }

    #[test]
    fn parse_stops_at_first_non_digit() {
        assert_eq!(parse_typed("640px"), Some(640));
        assert_eq!(parse_typed("12.9"), Some(12));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_typed(""), None);
        assert_eq!(parse_typed("   "), None);
        assert_eq!(parse_typed("abc"), None);
        assert_eq!(parse_typed("-5"), None);
        assert_eq!(parse_typed("+"), None);
        assert_eq!(parse_typed("99999999999"), None);
    }
}
