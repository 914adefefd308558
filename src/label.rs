//! The label surface - placed items in z-order plus a spatial index.
//!
//! Items are stored back to front: the last item is drawn on top and wins
//! hit tests. Every geometry change goes through this type so the R-tree
//! never falls out of step with the items.

use crate::constants::{DEFAULT_ITEM_HEIGHT, DEFAULT_ITEM_WIDTH};
use crate::input::handles::{ResizeCorner, apply_resize};
use crate::profile_scope;
use crate::spatial_index::SpatialIndex;
use crate::types::{ItemContent, PlacedItem};
use std::collections::HashSet;

pub struct Label {
    pub items: Vec<PlacedItem>,
    pub next_item_id: u64,
    index: SpatialIndex,
}

impl Default for Label {
    fn default() -> Self {
        Self::new()
    }
}

impl Label {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_item_id: 0,
            index: SpatialIndex::new(),
        }
    }

    /// Add an item on top of the z-order and return its id.
    pub fn add_item(&mut self, position: (f32, f32), size: (f32, f32), content: ItemContent) -> u64 {
        let id = self.next_item_id;
        self.next_item_id += 1;

        let item = PlacedItem::new(id, position, size, content);
        self.index.upsert(&item);
        tracing::info!(
            item_id = id,
            kind = %item.content.element_type(),
            x = position.0,
            y = position.1,
            "item placed"
        );
        self.items.push(item);
        id
    }

    /// Add an item with the default size.
    pub fn place(&mut self, position: (f32, f32), content: ItemContent) -> u64 {
        self.add_item(position, (DEFAULT_ITEM_WIDTH, DEFAULT_ITEM_HEIGHT), content)
    }

    pub fn remove_item(&mut self, item_id: u64) -> Option<PlacedItem> {
        let pos = self.items.iter().position(|i| i.id == item_id)?;
        self.index.remove(item_id);
        let item = self.items.remove(pos);
        tracing::info!(item_id, kind = %item.content.element_type(), "item removed");
        Some(item)
    }

    pub fn get_item(&self, item_id: u64) -> Option<&PlacedItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Mutable access to an item's content.
    ///
    /// Geometry is not reachable from here; use `move_item_by` and
    /// `resize_item` so the index stays current.
    pub fn content_mut(&mut self, item_id: u64) -> Option<&mut ItemContent> {
        self.items
            .iter_mut()
            .find(|i| i.id == item_id)
            .map(|i| &mut i.content)
    }

    /// Translate an item by a pointer delta.
    pub fn move_item_by(&mut self, item_id: u64, dx: f32, dy: f32) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| i.id == item_id) else {
            return false;
        };
        item.position.0 += dx;
        item.position.1 += dy;
        self.index.upsert(item);
        true
    }

    /// Resize an item from one of its corners.
    ///
    /// Returns the new `(position, size)`; the content follows the new size.
    pub fn resize_item(
        &mut self,
        item_id: u64,
        corner: ResizeCorner,
        dx: f32,
        dy: f32,
    ) -> Option<((f32, f32), (f32, f32))> {
        let item = self.items.iter_mut().find(|i| i.id == item_id)?;
        let (position, size) = apply_resize(item.position, item.size, corner, dx, dy);
        item.position = position;
        item.set_size(size);
        self.index.upsert(item);
        Some((position, size))
    }

    /// Topmost item under a canvas point.
    pub fn item_at(&self, x: f32, y: f32) -> Option<u64> {
        profile_scope!("label_item_at");

        let candidates: HashSet<u64> = self.index.query_point(x, y).into_iter().collect();
        if candidates.is_empty() {
            return None;
        }
        self.items
            .iter()
            .rev()
            .find(|item| candidates.contains(&item.id))
            .map(|item| item.id)
    }

    /// Smallest rectangle from the canvas origin that holds every item.
    pub fn extent(&self) -> (f32, f32) {
        self.items.iter().fold((0.0_f32, 0.0_f32), |(w, h), item| {
            (
                w.max(item.position.0 + item.size.0),
                h.max(item.position.1 + item.size.1),
            )
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index.rebuild(std::iter::empty());
    }
}
