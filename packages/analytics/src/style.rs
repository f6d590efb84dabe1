//! Magnitude-based marker styling.
//!
//! Map frontends need a color and a radius per event; the palette is the
//! five-step `ColorBrewer` `YlOrRd` ramp, binned on whole-magnitude edges.

use quake_watch_models::MarkerStyle;

/// `ColorBrewer` `YlOrRd`, light to dark.
const YLORRD: [&str; 5] = ["#ffffb2", "#fecc5c", "#fd8d3c", "#f03b20", "#bd0026"];

/// Styles one event by magnitude.
///
/// The radius equals the magnitude, floored at zero so that the occasional
/// negative micro-quake magnitude still renders. Anything at or above
/// magnitude 5 lands in the darkest bin.
#[must_use]
pub const fn style_for(magnitude: f64) -> MarkerStyle {
    MarkerStyle {
        color: color_for(magnitude),
        radius: if magnitude > 0.0 { magnitude } else { 0.0 },
    }
}

const fn color_for(magnitude: f64) -> &'static str {
    if magnitude < 2.0 {
        YLORRD[0]
    } else if magnitude < 3.0 {
        YLORRD[1]
    } else if magnitude < 4.0 {
        YLORRD[2]
    } else if magnitude < 5.0 {
        YLORRD[3]
    } else {
        YLORRD[4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_step_through_the_ramp_on_whole_magnitudes() {
        assert_eq!(style_for(1.0).color, "#ffffb2");
        assert_eq!(style_for(1.9).color, "#ffffb2");
        assert_eq!(style_for(2.0).color, "#fecc5c");
        assert_eq!(style_for(3.0).color, "#fd8d3c");
        assert_eq!(style_for(4.0).color, "#f03b20");
        assert_eq!(style_for(5.0).color, "#bd0026");
        assert_eq!(style_for(7.8).color, "#bd0026");
    }

    #[test]
    fn radius_tracks_magnitude() {
        assert!((style_for(4.5).radius - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_magnitude_floors_the_radius_at_zero() {
        let style = style_for(-0.3);
        assert!((style.radius - 0.0).abs() < f64::EPSILON);
        assert_eq!(style.color, "#ffffb2");
    }

    #[test]
    fn nan_magnitude_still_produces_a_drawable_style() {
        let style = style_for(f64::NAN);
        assert!((style.radius - 0.0).abs() < f64::EPSILON);
        assert!(!style.color.is_empty());
    }
}
