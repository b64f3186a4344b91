use crate::config::LayoutConfig;
use crate::models::placement::{ContainerSize, ItemRect, PlacementItem};
use crate::models::Point;

/// Square-ish grid splitting a container into equal cells, filled row by row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl GridLayout {
    /// `None` when there is nothing to place.
    pub fn new(count: usize, container: ContainerSize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let columns = (count as f64).sqrt().ceil() as usize;
        let rows = count.div_ceil(columns);
        Some(Self {
            columns,
            rows,
            cell_width: container.width / columns as f64,
            cell_height: container.height / rows as f64,
        })
    }

    /// Center of the cell holding item `index`.
    pub fn center(&self, index: usize) -> Point {
        let col = (index % self.columns) as f64;
        let row = (index / self.columns) as f64;
        Point::new(
            col * self.cell_width + self.cell_width / 2.0,
            row * self.cell_height + self.cell_height / 2.0,
        )
    }
}

/// Cell centers for `count` items without coordinates. Identical inputs
/// always give identical output, so re-renders do not move anything.
pub fn grid_fallback_positions(count: usize, container: ContainerSize) -> Vec<Point> {
    match GridLayout::new(count, container) {
        Some(grid) => (0..count).map(|i| grid.center(i)).collect(),
        None => Vec::new(),
    }
}

/// Top-left corners for `count` items of `item_size` pixels centered in
/// their grid cells.
pub fn grid_fallback_top_left(
    count: usize,
    container: ContainerSize,
    item_size: f64,
) -> Vec<Point> {
    grid_fallback_positions(count, container)
        .into_iter()
        .map(|c| Point::new(c.x - item_size / 2.0, c.y - item_size / 2.0))
        .collect()
}

/// On-screen boxes for every item. Items with both coordinates keep them;
/// the rest are laid out on a grid among themselves, in input order.
/// Sizes come from the item or, failing that, `default_item_size`.
pub fn resolve_placements(
    items: &[PlacementItem],
    container: ContainerSize,
    default_item_size: f64,
) -> Vec<ItemRect> {
    let unplaced = items.iter().filter(|i| !i.has_position()).count();
    let mut fallback = grid_fallback_positions(unplaced, container).into_iter();

    items
        .iter()
        .filter_map(|item| {
            let size = item.size.unwrap_or(default_item_size);
            let (center, from_grid) = match (item.x, item.y) {
                (Some(x), Some(y)) => (Point::new(x, y), false),
                _ => (fallback.next()?, true),
            };
            Some(ItemRect {
                id: item.id.clone(),
                left: center.x - size / 2.0,
                top: center.y - size / 2.0,
                width: size,
                height: size,
                fallback: from_grid,
            })
        })
        .collect()
}

/// [`resolve_placements`] sized by `config.default_item_size`.
pub fn resolve_placements_with_config(
    items: &[PlacementItem],
    container: ContainerSize,
    config: &LayoutConfig,
) -> Vec<ItemRect> {
    resolve_placements(items, container, config.default_item_size)
}

/// [`resolve_placements`] with the default configuration.
pub fn resolve_placements_default(
    items: &[PlacementItem],
    container: ContainerSize,
) -> Vec<ItemRect> {
    resolve_placements_with_config(items, container, &LayoutConfig::default())
}
