//! World-to-screen mapping and label formatting for the viewer
//!
//! Screen coordinates follow the window convention: origin at the top-left,
//! y growing downward, `screen = world * scale + size / 2`.

use crate::simulation::params::AU;
use crate::simulation::states::{Body, NVec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixels_per_au: f64,
}

impl Viewport {
    /// Pixels per meter
    pub fn scale(&self) -> f64 {
        self.pixels_per_au / AU
    }

    pub fn to_screen(&self, pos: &NVec2) -> (f64, f64) {
        let scale = self.scale();
        (
            pos.x * scale + self.width as f64 / 2.0,
            pos.y * scale + self.height as f64 / 2.0,
        )
    }

    /// A path is only worth drawing once it has more than two points
    pub fn should_draw_trajectory(&self, points: usize) -> bool {
        points > 2
    }
}

/// Distance-to-anchor text in kilometers; the anchor itself gets none
pub fn distance_label(body: &Body) -> Option<String> {
    if body.anchor {
        return None;
    }
    Some(format!("{:.1}km", body.distance_to_anchor / 1000.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport { width: 800.0, height: 800.0, pixels_per_au: 250.0 }
    }

    #[test]
    fn origin_maps_to_window_center() {
        let (sx, sy) = viewport().to_screen(&NVec2::zeros());
        assert_eq!((sx, sy), (400.0, 400.0));
    }

    #[test]
    fn one_au_is_250_pixels() {
        let (sx, sy) = viewport().to_screen(&NVec2::new(-AU, AU));
        assert!((sx - 150.0).abs() < 1e-9);
        assert!((sy - 650.0).abs() < 1e-9);
    }

    #[test]
    fn trajectory_needs_three_points() {
        let vp = viewport();
        assert!(!vp.should_draw_trajectory(0));
        assert!(!vp.should_draw_trajectory(2));
        assert!(vp.should_draw_trajectory(3));
    }

    #[test]
    fn labels_skip_the_anchor() {
        let sun = Body::new(NVec2::zeros(), NVec2::zeros(), 1.0, 1.0).unwrap().as_anchor();
        assert_eq!(distance_label(&sun), None);

        let mut earth = Body::new(NVec2::new(AU, 0.0), NVec2::zeros(), 1.0, 1.0).unwrap();
        earth.distance_to_anchor = AU;
        assert_eq!(distance_label(&earth).as_deref(), Some("149600000.0km"));
    }
}
