//! Single color adjustment record.

use serde::{Deserialize, Serialize};

use crate::{PaletteError, PaletteResult};

/// One named color variant: the three parameters of the recolor transform.
///
/// - `hue_shift` is added to the source hue (degrees, circular);
/// - `saturation` **replaces** the source saturation outright;
/// - `lightness_percent` scales the source lightness multiplicatively
///   (`l * (1 + pct/100)`, clamped to [0, 1] by the transform).
///
/// Records are immutable once loaded; [`validate`](Self::validate) enforces
/// the value ranges at configuration-load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    /// Variant name, used for output file naming.
    pub name: String,
    /// Hue shift in degrees, [0, 360). A full turn is expressed as 0.
    #[serde(default)]
    pub hue_shift: f32,
    /// Replacement saturation, [0, 1].
    #[serde(default)]
    pub saturation: f32,
    /// Lightness scale as a percentage, [-100, 100].
    #[serde(default)]
    pub lightness_percent: f32,
}

impl Adjustment {
    /// Creates a new adjustment.
    ///
    /// Does not validate; call [`validate`](Self::validate) before use when
    /// the values come from outside the crate.
    pub fn new(
        name: impl Into<String>,
        hue_shift: f32,
        saturation: f32,
        lightness_percent: f32,
    ) -> Self {
        Self {
            name: name.into(),
            hue_shift,
            saturation,
            lightness_percent,
        }
    }

    /// Checks that all fields are within their documented ranges.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Invalid`] naming the record and the offending
    /// field.
    pub fn validate(&self) -> PaletteResult<()> {
        if self.name.trim().is_empty() {
            return Err(PaletteError::Invalid {
                name: "<unnamed>".into(),
                reason: "name must not be empty".into(),
            });
        }
        if !self.hue_shift.is_finite() || !(0.0..360.0).contains(&self.hue_shift) {
            return Err(self.invalid(format!(
                "hue_shift {} outside [0, 360)",
                self.hue_shift
            )));
        }
        if !self.saturation.is_finite() || !(0.0..=1.0).contains(&self.saturation) {
            return Err(self.invalid(format!(
                "saturation {} outside [0, 1]",
                self.saturation
            )));
        }
        if !self.lightness_percent.is_finite()
            || !(-100.0..=100.0).contains(&self.lightness_percent)
        {
            return Err(self.invalid(format!(
                "lightness_percent {} outside [-100, 100]",
                self.lightness_percent
            )));
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> PaletteError {
        PaletteError::Invalid {
            name: self.name.clone(),
            reason,
        }
    }
}
