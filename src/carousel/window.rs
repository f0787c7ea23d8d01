//! Visible-window selection for the three-up presentation.

use crate::carousel::index::step;

/// Where an entry sits in the rendered window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Left,
    Center,
    Right,
}

/// One rendered entry: the item, its index in the full list, and its slot.
#[derive(Debug, PartialEq)]
pub struct WindowEntry<'a, T> {
    pub index: usize,
    pub item: &'a T,
    pub slot: Slot,
}

impl<T> Clone for WindowEntry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for WindowEntry<'_, T> {}

/// Number of entries shown around the active item once wraparound applies.
pub const WINDOW_SIZE: usize = 3;

/// Picks the entries to render for `active` over `items`.
///
/// With three or more items the window is previous, active, next (resolved
/// circularly). Shorter lists are shown whole, in order, and the slot is
/// decided by comparing each index with `active`.
pub fn visible_window<T>(items: &[T], active: usize) -> Vec<WindowEntry<'_, T>> {
    let len = items.len();
    if len >= WINDOW_SIZE {
        return [(-1, Slot::Left), (0, Slot::Center), (1, Slot::Right)]
            .into_iter()
            .filter_map(|(delta, slot)| {
                let index = step(active, delta, len)?;
                Some(WindowEntry {
                    index,
                    item: &items[index],
                    slot,
                })
            })
            .collect();
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| WindowEntry {
            index,
            item,
            slot: match index.cmp(&active) {
                std::cmp::Ordering::Less => Slot::Left,
                std::cmp::Ordering::Equal => Slot::Center,
                std::cmp::Ordering::Greater => Slot::Right,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(window: &[WindowEntry<'_, &'static str>]) -> Vec<&'static str> {
        window.iter().map(|entry| *entry.item).collect()
    }

    #[test]
    fn three_up_centers_the_active_item() {
        let items = ["A", "B", "C", "D"];
        let window = visible_window(&items, 2);
        assert_eq!(ids(&window), vec!["B", "C", "D"]);
        assert_eq!(
            window.iter().map(|e| e.slot).collect::<Vec<_>>(),
            vec![Slot::Left, Slot::Center, Slot::Right]
        );
    }

    #[test]
    fn three_up_wraps_at_both_ends() {
        let items = ["A", "B", "C", "D"];
        assert_eq!(ids(&visible_window(&items, 0)), vec!["D", "A", "B"]);
        assert_eq!(ids(&visible_window(&items, 3)), vec!["C", "D", "A"]);
        let window = visible_window(&items, 3);
        assert_eq!(window[2].index, 0);
    }

    #[test]
    fn exactly_three_items() {
        let items = ["A", "B", "C"];
        assert_eq!(ids(&visible_window(&items, 1)), vec!["A", "B", "C"]);
        assert_eq!(ids(&visible_window(&items, 0)), vec!["C", "A", "B"]);
    }

    #[test]
    fn two_items_render_whole_list() {
        let items = ["A", "B"];
        for active in 0..2 {
            assert_eq!(ids(&visible_window(&items, active)), vec!["A", "B"]);
        }
        let window = visible_window(&items, 1);
        assert_eq!(window[0].slot, Slot::Left);
        assert_eq!(window[1].slot, Slot::Center);
        let window = visible_window(&items, 0);
        assert_eq!(window[0].slot, Slot::Center);
        assert_eq!(window[1].slot, Slot::Right);
    }

    #[test]
    fn single_and_empty() {
        let one = ["A"];
        let window = visible_window(&one, 0);
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].slot, Slot::Center);

        let none: [&str; 0] = [];
        assert!(visible_window(&none, 0).is_empty());
    }
}
