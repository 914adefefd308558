//! Spatial index over placed items.
//!
//! An R-tree of item bounding boxes used for hit testing on the label
//! surface. Point queries return candidates only; callers resolve z-order.

use crate::types::PlacedItem;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Bounding box of one placed item.
#[derive(Debug, Clone, Copy)]
pub struct ItemBounds {
    pub item_id: u64,
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl ItemBounds {
    pub fn new(item_id: u64, position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            item_id,
            min: [position.0, position.1],
            max: [position.0 + size.0, position.1 + size.1],
        }
    }

    pub fn of(item: &PlacedItem) -> Self {
        Self::new(item.id, item.position, item.size)
    }

    #[inline]
    fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min[0] && x <= self.max[0] && y >= self.min[1] && y <= self.max[1]
    }
}

impl RTreeObject for ItemBounds {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

impl PartialEq for ItemBounds {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// R-tree keyed by item id.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<ItemBounds>,
    bounds: HashMap<u64, ItemBounds>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the bounds of an item.
    pub fn upsert(&mut self, item: &PlacedItem) {
        self.remove(item.id);
        let entry = ItemBounds::of(item);
        self.tree.insert(entry);
        self.bounds.insert(item.id, entry);
    }

    pub fn remove(&mut self, item_id: u64) -> bool {
        match self.bounds.remove(&item_id) {
            Some(entry) => {
                self.tree.remove(&entry);
                true
            }
            None => false,
        }
    }

    /// Ids of all items whose bounds contain the point, in no particular order.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<u64> {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([x, y]))
            .filter(|entry| entry.contains(x, y))
            .map(|entry| entry.item_id)
            .collect()
    }

    /// Rebuild from scratch with a bulk load.
    pub fn rebuild<'a>(&mut self, items: impl Iterator<Item = &'a PlacedItem>) {
        let entries: Vec<ItemBounds> = items.map(ItemBounds::of).collect();
        self.bounds = entries.iter().map(|e| (e.item_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}
