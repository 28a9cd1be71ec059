//! "Load more" paging over an already fetched list.

use super::Reducer;

/// Cards revealed initially and per click.
pub const PAGE_SIZE: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadMore {
    page_size: usize,
    total: usize,
    visible: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaginationEvent {
    LoadMore,
    /// The underlying collection was replaced and now has `total` items.
    Replaced { total: usize },
}

impl LoadMore {
    pub fn new(total: usize) -> Self {
        Self::with_page_size(total, PAGE_SIZE)
    }

    pub fn with_page_size(total: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            total,
            visible: page_size.min(total),
        }
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.visible < self.total
    }

    /// How many items the next click would reveal.
    pub fn next_page_len(&self) -> usize {
        self.page_size.min(self.total.saturating_sub(self.visible))
    }

    /// The visible prefix of `items`.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible.min(items.len())]
    }
}

impl Reducer for LoadMore {
    type Event = PaginationEvent;

    fn update(self, event: PaginationEvent) -> Self {
        match event {
            PaginationEvent::LoadMore => Self {
                visible: self.visible + self.next_page_len(),
                ..self
            },
            PaginationEvent::Replaced { total } => {
                let first_page = self.page_size.min(total);
                Self {
                    total,
                    visible: self.visible.min(total).max(first_page),
                    ..self
                }
            }
        }
    }
}
