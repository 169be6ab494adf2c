//! Roll cutting planner.
//!
//! Picks the roll width and orientation that cover a window with the least
//! cross-web waste. Each candidate orientation puts one window dimension
//! across the roll; the slit width is that dimension plus trim on both sides.

use crate::config::{float_cmp, EngineConfig};
use serde::{Deserialize, Serialize};

/// Message recorded when no roll can cover a window.
pub const EXCEEDS_MAX_ROLL: &str = "exceeds maximum roll width";

/// Message recorded for non-positive window dimensions.
pub const INVALID_DIMENSIONS: &str = "invalid window dimensions";

/// Which window dimension runs across the roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    WidthAcross,
    HeightAcross,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::WidthAcross => write!(f, "width across"),
            Orientation::HeightAcross => write!(f, "height across"),
        }
    }
}

/// A feasible cut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollCut {
    /// Width the roll is slit to, trim included.
    pub slit_width_in: f64,
    /// Stock roll the slit is taken from.
    pub base_roll_in: f64,
    pub orientation: Orientation,
    /// Base roll width minus slit width.
    pub waste_in: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Roll plan for one window size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RollPlan {
    Planned(RollCut),
    Infeasible { error: String },
}

impl RollPlan {
    /// The cut, if feasible.
    pub fn cut(&self) -> Option<&RollCut> {
        match self {
            RollPlan::Planned(cut) => Some(cut),
            RollPlan::Infeasible { .. } => None,
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, RollPlan::Planned(_))
    }

    /// The error message, if infeasible.
    pub fn error(&self) -> Option<&str> {
        match self {
            RollPlan::Planned(_) => None,
            RollPlan::Infeasible { error } => Some(error),
        }
    }
}

/// Candidate for one orientation.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    orientation: Orientation,
    slit_width_in: f64,
    base_roll_in: f64,
    waste_in: f64,
}

/// Smallest supported roll that fits `slit_width_in`.
fn smallest_roll(roll_widths_in: &[f64], slit_width_in: f64) -> Option<f64> {
    roll_widths_in
        .iter()
        .copied()
        .find(|w| float_cmp::approx_ge(*w, slit_width_in))
}

fn candidate(
    orientation: Orientation,
    across_in: f64,
    config: &EngineConfig,
) -> Option<Candidate> {
    let slit_width_in = across_in + 2.0 * config.cross_trim_in;
    let base_roll_in = smallest_roll(&config.roll_widths_in, slit_width_in)?;
    Some(Candidate {
        orientation,
        slit_width_in,
        base_roll_in,
        waste_in: (base_roll_in - slit_width_in).max(0.0),
    })
}

/// Plan the cut for a window of `width_in` by `height_in`.
///
/// Never fails hard: an infeasible size yields [`RollPlan::Infeasible`].
pub fn plan_roll(width_in: f64, height_in: f64, config: &EngineConfig) -> RollPlan {
    if !(width_in.is_finite() && height_in.is_finite() && width_in > 0.0 && height_in > 0.0) {
        return RollPlan::Infeasible {
            error: INVALID_DIMENSIONS.to_string(),
        };
    }

    let width_across = candidate(Orientation::WidthAcross, width_in, config);
    let height_across = candidate(Orientation::HeightAcross, height_in, config);

    let chosen = match (width_across, height_across) {
        (None, None) => {
            tracing::debug!("{}x{} exceeds every supported roll", width_in, height_in);
            return RollPlan::Infeasible {
                error: EXCEEDS_MAX_ROLL.to_string(),
            };
        }
        (Some(w), None) => w,
        (None, Some(h)) => h,
        (Some(w), Some(h)) => {
            // Ties go to width-across.
            if h.waste_in < w.waste_in && !float_cmp::approx_eq(h.waste_in, w.waste_in) {
                h
            } else {
                w
            }
        }
    };

    let note = match (chosen.orientation, width_across.is_some()) {
        (Orientation::HeightAcross, false) => {
            let max = config.max_roll_width().unwrap_or_default();
            Some(format!("width exceeds {}\" roll; rotated", max))
        }
        (Orientation::HeightAcross, true) => Some("rotated for less waste".to_string()),
        (Orientation::WidthAcross, _) => None,
    };

    RollPlan::Planned(RollCut {
        slit_width_in: chosen.slit_width_in,
        base_roll_in: chosen.base_roll_in,
        orientation: chosen.orientation,
        waste_in: chosen.waste_in,
        note,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planned(width_in: f64, height_in: f64) -> RollCut {
        plan_roll(width_in, height_in, &EngineConfig::default())
            .cut()
            .cloned()
            .expect("size should be feasible")
    }

    #[test]
    fn test_exact_fit_has_zero_waste() {
        let cut = planned(47.0, 80.0);
        assert_eq!(cut.orientation, Orientation::WidthAcross);
        assert_eq!(cut.slit_width_in, 48.0);
        assert_eq!(cut.base_roll_in, 48.0);
        assert_eq!(cut.waste_in, 0.0);
        assert!(cut.note.is_none());
    }

    #[test]
    fn test_height_across_when_less_waste() {
        // Width 50 -> slit 51 on a 60" roll (9" waste).
        // Height 59 -> slit 60 on a 60" roll (0" waste).
        let cut = planned(50.0, 59.0);
        assert_eq!(cut.orientation, Orientation::HeightAcross);
        assert_eq!(cut.base_roll_in, 60.0);
        assert_eq!(cut.waste_in, 0.0);
        assert_eq!(cut.note.as_deref(), Some("rotated for less waste"));
    }

    #[test]
    fn test_tie_prefers_width_across() {
        let cut = planned(36.0, 36.0);
        assert_eq!(cut.orientation, Orientation::WidthAcross);
        assert_eq!(cut.waste_in, 11.0);
    }

    #[test]
    fn test_rotates_when_width_too_wide() {
        let cut = planned(100.0, 40.0);
        assert_eq!(cut.orientation, Orientation::HeightAcross);
        assert_eq!(cut.slit_width_in, 41.0);
        assert_eq!(cut.base_roll_in, 48.0);
        assert_eq!(cut.waste_in, 7.0);
        assert_eq!(cut.note.as_deref(), Some("width exceeds 72\" roll; rotated"));
    }

    #[test]
    fn test_both_orientations_infeasible() {
        let plan = plan_roll(80.0, 90.0, &EngineConfig::default());
        assert!(!plan.is_feasible());
        assert_eq!(plan.error(), Some(EXCEEDS_MAX_ROLL));
    }

    #[test]
    fn test_slit_equal_to_largest_roll_is_feasible() {
        let cut = planned(71.0, 200.0);
        assert_eq!(cut.base_roll_in, 72.0);
        assert_eq!(cut.waste_in, 0.0);
    }

    #[test]
    fn test_invalid_dimensions() {
        let plan = plan_roll(0.0, 30.0, &EngineConfig::default());
        assert_eq!(plan.error(), Some(INVALID_DIMENSIONS));
    }

    #[test]
    fn test_custom_roll_widths() {
        let config = EngineConfig::with_roll_widths([36.0]);
        let plan = plan_roll(30.0, 40.0, &config);
        let cut = plan.cut().expect("fits 36\" roll");
        assert_eq!(cut.waste_in, 5.0);
        assert!(!plan_roll(40.0, 40.0, &config).is_feasible());
    }

    #[test]
    fn test_serialized_shape() {
        let plan = plan_roll(80.0, 90.0, &EngineConfig::default());
        let json = serde_json::to_value(&plan).expect("serializable");
        assert_eq!(json["status"], "infeasible");
        assert_eq!(json["error"], EXCEEDS_MAX_ROLL);

        let json = serde_json::to_value(plan_roll(47.0, 10.0, &EngineConfig::default()))
            .expect("serializable");
        assert_eq!(json["status"], "planned");
        assert_eq!(json["orientation"], "width_across");
    }
}
