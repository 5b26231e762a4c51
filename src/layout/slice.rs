use crate::error::TreemapError;

/// Extents below this are numerically too small to subdivide. One constant
/// backs all four checks: the total-weight floor, the outer width/height
/// check, and the post-split sub-extent check.
pub const MIN_EXTENT: f64 = 1e-6;

/// Recursion cap used when a caller has no opinion. `LayoutConfig` defaults
/// to a tighter 50.
pub const DEFAULT_MAX_DEPTH: u32 = 100;

/// An axis-aligned rectangle stored as min/max corners, with `x0 <= x1` and
/// `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        debug_assert!(x0 <= x1 && y0 <= y1, "corners must be ordered");
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The same rectangle shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x0: self.x0 + dx,
            y0: self.y0 + dy,
            x1: self.x1 + dx,
            y1: self.y1 + dy,
        }
    }
}

/// Which way a split cuts the rectangle. `Horizontal` lays the two halves
/// side by side (a cut along x); `Vertical` stacks them (a cut along y).
/// The orientation flips at every recursion level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// One leaf of the partition: a rectangle plus the index of the weight that
/// produced it. Guard-dropped branches make the output shorter than the
/// input, so the correlation is carried explicitly instead of by position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub index: usize,
    pub rect: Rect,
}

/// Slice-and-dice partition of `outer` into one rectangle per weight, areas
/// proportional to the weights, preserving input order.
///
/// Non-finite or negative weights are rejected before the recursion starts.
/// Every other degenerate input is defined as "produce no cell for that
/// branch": empty input, zero or sub-[`MIN_EXTENT`] totals, rectangles too
/// thin to cut, and branches past `max_depth` all silently drop out.
pub fn partition(
    weights: &[f64],
    outer: Rect,
    orientation: Orientation,
    max_depth: u32,
) -> Result<Vec<Cell>, TreemapError> {
    for (index, &value) in weights.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(TreemapError::InvalidWeight { index, value });
        }
    }

    let items: Vec<(usize, f64)> = weights.iter().copied().enumerate().collect();
    let mut cells = Vec::with_capacity(items.len());
    subdivide(&items, outer, orientation, 0, max_depth, &mut cells);
    Ok(cells)
}

/// [`partition`] with the routine-level [`DEFAULT_MAX_DEPTH`] cap, for
/// callers with no opinion on recursion depth.
pub fn partition_default(
    weights: &[f64],
    outer: Rect,
    orientation: Orientation,
) -> Result<Vec<Cell>, TreemapError> {
    partition(weights, outer, orientation, DEFAULT_MAX_DEPTH)
}

/// Recursive worker. Guards are evaluated in a fixed priority order; note
/// that the single-item check comes after the zero-total check but before
/// the `MIN_EXTENT` floors, so a lone tiny weight still gets the whole
/// rectangle.
fn subdivide(
    items: &[(usize, f64)],
    outer: Rect,
    orientation: Orientation,
    depth: u32,
    max_depth: u32,
    out: &mut Vec<Cell>,
) {
    if items.is_empty() || depth >= max_depth {
        if !items.is_empty() {
            tracing::debug!(
                "dropping {} items at depth {} (max_depth {})",
                items.len(),
                depth,
                max_depth
            );
        }
        return;
    }

    let total: f64 = items.iter().map(|&(_, w)| w).sum();
    if total <= 0.0 {
        return;
    }

    if items.len() == 1 {
        out.push(Cell {
            index: items[0].0,
            rect: outer,
        });
        return;
    }

    if total < MIN_EXTENT {
        tracing::debug!("dropping {} items with near-zero total {}", items.len(), total);
        return;
    }

    let width = outer.width();
    let height = outer.height();
    if width < MIN_EXTENT || height < MIN_EXTENT {
        tracing::debug!(
            "dropping {} items: rectangle {:.2e}x{:.2e} too thin to cut",
            items.len(),
            width,
            height
        );
        return;
    }

    // Bisect by running sum: split one past the first element that reaches
    // half the total. This approximates a 50/50 area split by cumulative
    // weight, not by item count.
    let half = total / 2.0;
    let mut acc = 0.0;
    let mut split = 0;
    for (i, &(_, w)) in items.iter().enumerate() {
        acc += w;
        if acc >= half {
            split = i + 1;
            break;
        }
    }
    if split == 0 {
        // Unreachable while total > 0 and the scan covers every element,
        // but a change in summation order could make the comparison miss.
        // Assume first element alone on the left in that case.
        split = 1;
    }

    let (left_items, right_items) = items.split_at(split);
    let left_total: f64 = left_items.iter().map(|&(_, w)| w).sum();
    let frac = left_total / total;

    // When the right half has zero total, `frac` is exactly 1.0 and
    // `x0 + width * frac` can land past `x1` by an ulp; keep the cut
    // inside the rectangle.
    let (left_rect, right_rect) = match orientation {
        Orientation::Horizontal => {
            let left_width = width * frac;
            if left_width < MIN_EXTENT {
                tracing::debug!("dropping branch: left width {:.2e} below floor", left_width);
                return;
            }
            let split_x = (outer.x0 + left_width).min(outer.x1);
            (
                Rect::new(outer.x0, outer.y0, split_x, outer.y1),
                Rect::new(split_x, outer.y0, outer.x1, outer.y1),
            )
        }
        Orientation::Vertical => {
            let left_height = height * frac;
            if left_height < MIN_EXTENT {
                tracing::debug!("dropping branch: left height {:.2e} below floor", left_height);
                return;
            }
            let split_y = (outer.y0 + left_height).min(outer.y1);
            (
                Rect::new(outer.x0, outer.y0, outer.x1, split_y),
                Rect::new(outer.x0, split_y, outer.x1, outer.y1),
            )
        }
    };

    subdivide(
        left_items,
        left_rect,
        orientation.flipped(),
        depth + 1,
        max_depth,
        out,
    );
    subdivide(
        right_items,
        right_rect,
        orientation.flipped(),
        depth + 1,
        max_depth,
        out,
    );
}
