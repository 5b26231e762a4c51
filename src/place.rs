use crate::layout::Rect;

/// Where the treemap lands relative to the reference extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    Above,
    #[default]
    Below,
    LeftOf,
    RightOf,
}

/// Gap between the extent and the treemap, as a fraction of the extent's
/// height (above/below) or width (left/right).
const GAP_FRACTION: f64 = 0.05;

/// Smallest rectangle covering every rectangle in `rects`, for deriving a
/// reference extent from existing geometry. `None` for an empty slice.
pub fn extent(rects: &[Rect]) -> Option<Rect> {
    let first = *rects.first()?;
    Some(rects[1..].iter().fold(first, |acc, r| {
        Rect::new(
            acc.x0.min(r.x0),
            acc.y0.min(r.y0),
            acc.x1.max(r.x1),
            acc.y1.max(r.y1),
        )
    }))
}

/// Translation that moves a treemap with outer rectangle `outer` next to
/// `extent` at the given anchor, centered along the perpendicular axis.
pub fn offset_for(outer: Rect, extent: Rect, anchor: Anchor) -> (f64, f64) {
    let gap_x = extent.width() * GAP_FRACTION;
    let gap_y = extent.height() * GAP_FRACTION;
    let w = outer.width();
    let h = outer.height();

    let center_x = (extent.x0 + extent.x1) / 2.0 - w / 2.0;
    let center_y = (extent.y0 + extent.y1) / 2.0 - h / 2.0;

    let (target_x0, target_y0) = match anchor {
        Anchor::Above => (center_x, extent.y1 + gap_y),
        Anchor::Below => (center_x, extent.y0 - h - gap_y),
        Anchor::LeftOf => (extent.x0 - w - gap_x, center_y),
        Anchor::RightOf => (extent.x1 + gap_x, center_y),
    };

    (target_x0 - outer.x0, target_y0 - outer.y0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent() -> Rect {
        Rect::new(100.0, 200.0, 300.0, 400.0)
    }

    #[test]
    fn below_sits_under_the_extent_with_a_gap() {
        let outer = Rect::new(0.0, 0.0, 40.0, 25.0);
        let (dx, dy) = offset_for(outer, extent(), Anchor::Below);
        let placed = outer.translated(dx, dy);
        // Gap is 5% of the extent height (200 * 0.05 = 10).
        assert!((placed.y1 - (extent().y0 - 10.0)).abs() < 1e-12);
        // Centered horizontally on the extent.
        let placed_cx = (placed.x0 + placed.x1) / 2.0;
        assert!((placed_cx - 200.0).abs() < 1e-12);
    }

    #[test]
    fn above_sits_over_the_extent() {
        let outer = Rect::new(0.0, 0.0, 40.0, 25.0);
        let (dx, dy) = offset_for(outer, extent(), Anchor::Above);
        let placed = outer.translated(dx, dy);
        assert!((placed.y0 - (extent().y1 + 10.0)).abs() < 1e-12);
    }

    #[test]
    fn side_anchors_use_horizontal_gap_and_vertical_centering() {
        let outer = Rect::new(0.0, 0.0, 40.0, 25.0);

        let (dx, dy) = offset_for(outer, extent(), Anchor::LeftOf);
        let placed = outer.translated(dx, dy);
        assert!((placed.x1 - (extent().x0 - 10.0)).abs() < 1e-12);
        let placed_cy = (placed.y0 + placed.y1) / 2.0;
        assert!((placed_cy - 300.0).abs() < 1e-12);

        let (dx, dy) = offset_for(outer, extent(), Anchor::RightOf);
        let placed = outer.translated(dx, dy);
        assert!((placed.x0 - (extent().x1 + 10.0)).abs() < 1e-12);
    }

    #[test]
    fn extent_is_the_union_of_bounding_boxes() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(-5.0, 2.0, 3.0, 20.0),
            Rect::new(8.0, -1.0, 9.0, 4.0),
        ];
        assert_eq!(super::extent(&rects), Some(Rect::new(-5.0, -1.0, 10.0, 20.0)));

        assert_eq!(super::extent(&[]), None);
        let lone = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(super::extent(&[lone]), Some(lone));
    }

    #[test]
    fn offset_accounts_for_non_origin_outer() {
        let outer = Rect::new(50.0, 60.0, 90.0, 85.0);
        let (dx, dy) = offset_for(outer, extent(), Anchor::Below);
        let placed = outer.translated(dx, dy);
        assert!((placed.y1 - (extent().y0 - 10.0)).abs() < 1e-12);
    }
}
