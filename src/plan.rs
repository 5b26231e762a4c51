use crate::error::TreemapError;
use crate::layout::{self, slice, LayoutConfig, Rect};
use crate::place::{self, Anchor};
use crate::stats::{self, CategoryStats};

/// One placed treemap tile: a category's aggregate statistics plus its
/// rectangle in the target coordinate frame.
#[derive(Debug, Clone)]
pub struct TreemapCell {
    pub stats: CategoryStats,
    pub rect: Rect,
}

/// A fully computed treemap.
#[derive(Debug, Clone)]
pub struct Treemap {
    /// Bounding rectangle of the whole treemap, after placement
    pub outer: Rect,
    /// Cells in layout order (categories sorted by total weight
    /// descending). May be shorter than the category list when stability
    /// or depth guards drop a branch.
    pub cells: Vec<TreemapCell>,
}

/// Build a treemap from raw observations with the default configuration,
/// placed next to `extent` at `anchor`.
pub fn build(
    observations: &[(&str, f64)],
    extent: Rect,
    anchor: Anchor,
) -> Result<Treemap, TreemapError> {
    build_with_config(observations, extent, anchor, &LayoutConfig::default())
}

/// Full pipeline: validate weights, aggregate per category, enforce the
/// category cap, size the outer rectangle, partition, and translate the
/// result next to the reference extent.
pub fn build_with_config(
    observations: &[(&str, f64)],
    extent: Rect,
    anchor: Anchor,
    config: &LayoutConfig,
) -> Result<Treemap, TreemapError> {
    for (index, &(_, weight)) in observations.iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(TreemapError::InvalidWeight {
                index,
                value: weight,
            });
        }
    }

    let categories = stats::aggregate(observations);
    if categories.is_empty() {
        return Err(TreemapError::EmptyDataset);
    }
    if categories.len() > config.max_categories {
        return Err(TreemapError::TooManyCategories {
            count: categories.len(),
            limit: config.max_categories,
        });
    }

    let weights: Vec<f64> = categories.iter().map(|c| c.total).collect();
    let total: f64 = weights.iter().sum();
    let outer = layout::outer_rect(total, config.aspect);

    tracing::info!(
        "laying out {} categories (total weight {:.2}) in {:.1}x{:.1} outer rect",
        categories.len(),
        total,
        outer.width(),
        outer.height()
    );

    let cells = slice::partition(&weights, outer, config.orientation, config.max_depth)?;
    if cells.len() < categories.len() {
        tracing::warn!(
            "{} of {} categories dropped by stability or depth guards",
            categories.len() - cells.len(),
            categories.len()
        );
    }

    let (dx, dy) = place::offset_for(outer, extent, anchor);
    let cells = cells
        .into_iter()
        .map(|cell| TreemapCell {
            stats: categories[cell.index].clone(),
            rect: cell.rect.translated(dx, dy),
        })
        .collect();

    Ok(Treemap {
        outer: outer.translated(dx, dy),
        cells,
    })
}
