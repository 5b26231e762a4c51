pub mod slice;

pub use slice::{partition, partition_default, Cell, Orientation, Rect, DEFAULT_MAX_DEPTH, MIN_EXTENT};

/// Configuration for treemap generation.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Outer rectangle aspect ratio, width / height (1.6 keeps leaves from
    /// going needle-thin)
    pub aspect: f64,
    /// Maximum recursion depth (hard cap, independent of input size)
    pub max_depth: u32,
    /// Axis of the top-level split; flips at each level below
    pub orientation: Orientation,
    /// Maximum number of distinct categories accepted by the plan layer
    pub max_categories: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            aspect: 1.6,
            max_depth: 50,
            orientation: Orientation::Horizontal,
            max_categories: 50,
        }
    }
}

/// Size an origin-anchored outer rectangle so its area equals `total` at
/// the given aspect ratio: `height = sqrt(total / aspect)`, `width =
/// aspect * height`. Placement moves it afterwards.
pub fn outer_rect(total: f64, aspect: f64) -> Rect {
    let h = (total / aspect).sqrt();
    let w = aspect * h;
    Rect::new(0.0, 0.0, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_rect_matches_total_area_and_aspect() {
        let outer = outer_rect(4000.0, 1.6);
        assert!((outer.area() - 4000.0).abs() < 1e-9);
        assert!((outer.width() / outer.height() - 1.6).abs() < 1e-9);
        assert_eq!((outer.x0, outer.y0), (0.0, 0.0));
    }

    #[test]
    fn outer_rect_of_zero_total_is_empty() {
        let outer = outer_rect(0.0, 1.6);
        assert_eq!(outer.area(), 0.0);
    }
}
