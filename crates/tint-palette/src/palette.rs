//! Ordered palette of color adjustments.

use std::path::Path;

use serde::Deserialize;

use crate::{Adjustment, PaletteError, PaletteResult};

/// Ordered, validated list of [`Adjustment`] records.
///
/// # Example
///
/// ```rust
/// use tint_palette::Palette;
///
/// let yaml = "
/// colors:
///   - name: Red
///     hue_shift: 0
///     saturation: 0.6
///     lightness_percent: -40
/// ";
/// let palette = Palette::from_yaml_str(yaml).unwrap();
/// assert_eq!(palette.len(), 1);
/// assert!(palette.get("red").is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    adjustments: Vec<Adjustment>,
}

/// On-disk palette layout.
#[derive(Deserialize)]
struct RawPalette {
    colors: Vec<Adjustment>,
}

impl Palette {
    /// Builds a palette from records, validating each one.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] for an empty list, or the first
    /// record's validation error.
    pub fn new(adjustments: Vec<Adjustment>) -> PaletteResult<Self> {
        if adjustments.is_empty() {
            return Err(PaletteError::Empty);
        }
        for adj in &adjustments {
            adj.validate()?;
        }
        Ok(Self { adjustments })
    }

    /// Loads and validates a palette from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::NotFound`] when the file does not exist,
    /// [`PaletteError::Yaml`] on parse failure, or a validation error.
    pub fn from_file(path: impl AsRef<Path>) -> PaletteResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PaletteError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parses and validates a palette from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> PaletteResult<Self> {
        let raw: RawPalette = serde_yaml::from_str(yaml)?;
        Self::new(raw.colors)
    }

    /// The default ten-color clothing palette.
    pub fn builtin() -> Self {
        let adjustments = vec![
            Adjustment::new("White", 0.0, 0.0, 0.0),
            Adjustment::new("Black", 0.0, 0.0, -84.0),
            Adjustment::new("Gray", 0.0, 0.0, -64.0),
            Adjustment::new("Red", 0.0, 0.6, -40.0),
            Adjustment::new("Green", 120.0, 0.30, -60.0),
            Adjustment::new("Olive", 78.0, 0.20, -45.0),
            Adjustment::new("Blue", 208.0, 0.61, -55.0),
            Adjustment::new("Navy", 208.0, 0.45, -65.0),
            Adjustment::new("Pink", 306.0, 0.40, 0.0),
            Adjustment::new("Purple", 295.0, 0.25, -50.0),
        ];
        // The table above is static and in range.
        Self { adjustments }
    }

    /// Returns the number of adjustments.
    pub fn len(&self) -> usize {
        self.adjustments.len()
    }

    /// Returns `true` if the palette has no adjustments.
    ///
    /// Always `false` for palettes built through the validating
    /// constructors.
    pub fn is_empty(&self) -> bool {
        self.adjustments.is_empty()
    }

    /// Iterates over adjustments in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Adjustment> {
        self.adjustments.iter()
    }

    /// Looks up an adjustment by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&Adjustment> {
        self.adjustments
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Adjustment;
    type IntoIter = std::slice::Iter<'a, Adjustment>;

    fn into_iter(self) -> Self::IntoIter {
        self.adjustments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_validates() {
        let palette = Palette::builtin();
        assert_eq!(palette.len(), 10);
        for adj in &palette {
            adj.validate().unwrap();
        }
    }

    #[test]
    fn test_builtin_order() {
        let palette = Palette::builtin();
        let names: Vec<&str> = palette.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names[0], "White");
        assert_eq!(names[9], "Purple");
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = "
colors:
  - name: Red
    hue_shift: 0
    saturation: 0.6
    lightness_percent: -40
  - name: Green
    hue_shift: 120
    saturation: 0.3
    lightness_percent: -60
";
        let palette = Palette::from_yaml_str(yaml).unwrap();
        assert_eq!(palette.len(), 2);
        let green = palette.get("Green").unwrap();
        assert_eq!(green.hue_shift, 120.0);
        assert_eq!(green.saturation, 0.3);
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let yaml = "
colors:
  - name: White
";
        let palette = Palette::from_yaml_str(yaml).unwrap();
        let white = palette.get("white").unwrap();
        assert_eq!(white.hue_shift, 0.0);
        assert_eq!(white.saturation, 0.0);
        assert_eq!(white.lightness_percent, 0.0);
    }

    #[test]
    fn test_rejects_out_of_range_on_load() {
        let yaml = "
colors:
  - name: Broken
    hue_shift: 720
";
        let err = Palette::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, PaletteError::Invalid { .. }));
    }

    #[test]
    fn test_rejects_empty_palette() {
        let err = Palette::from_yaml_str("colors: []").unwrap_err();
        assert!(matches!(err, PaletteError::Empty));
    }

    #[test]
    fn test_missing_file() {
        let err = Palette::from_file("/nonexistent/palette.yaml").unwrap_err();
        assert!(matches!(err, PaletteError::NotFound { .. }));
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let palette = Palette::builtin();
        assert!(palette.get("NAVY").is_some());
        assert!(palette.get("navy").is_some());
        assert!(palette.get("Mauve").is_none());
    }
}
