use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one frame.
///
/// `push()` is O(1). Paint-order iteration sorts an index buffer that is
/// reused across frames.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items, keeping allocations.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });
        self.sorted_dirty = true;
    }

    /// Iterates items back-to-front.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.sorted_indices.clear();
            self.sorted_indices.extend(0..self.items.len());

            let items = &self.items;
            self.sorted_indices.sort_unstable_by_key(|&i| items[i].key);
            self.sorted_dirty = false;
        }

        let items = &self.items;
        self.sorted_indices.iter().map(move |&i| &items[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point2;
    use crate::paint::Color;

    fn line(x: f32) -> (Point2, Point2) {
        (Point2::new(x, 0.0), Point2::new(x, 1.0))
    }

    fn xs(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Line(l) => l.from.x,
                _ => f32::NAN,
            })
            .collect()
    }

    #[test]
    fn paint_order_is_z_then_insertion() {
        let mut list = DrawList::new();
        let white = Color::rgb(1.0, 1.0, 1.0);

        let (a, b) = line(1.0);
        list.push_line(ZIndex::OVERLAY, a, b, white);
        let (a, b) = line(2.0);
        list.push_line(ZIndex::BACKGROUND, a, b, white);
        let (a, b) = line(3.0);
        list.push_line(ZIndex::CONTENT, a, b, white);
        let (a, b) = line(4.0);
        list.push_line(ZIndex::BACKGROUND, a, b, white);

        assert_eq!(xs(&mut list), vec![2.0, 4.0, 3.0, 1.0]);
    }

    #[test]
    fn clear_resets_order() {
        let mut list = DrawList::new();
        let (a, b) = line(1.0);
        list.push_line(ZIndex::CONTENT, a, b, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(list.items().len(), 1);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter_in_paint_order().count(), 0);

        let (a, b) = line(5.0);
        list.push_line(ZIndex::CONTENT, a, b, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(list.items()[0].key.order, 0);
    }
}
