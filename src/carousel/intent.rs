use crate::carousel::item::CarouselItem;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CarouselIntent<T> {
    /// A new item list arrived (fetch result, admin edit, preview payload).
    ReplaceItems { items: Vec<T> },
    /// Prev/next control. Stops autoplay.
    Navigate { delta: i64 },
    /// A click on a side card. Moves towards it and leaves autoplay alone.
    SideCard { delta: i64 },
    /// Dot/page selection.
    Select { index: i64 },
    /// Autoplay timer fired.
    AutoAdvance,
}

impl<T: CarouselItem> Intent for CarouselIntent<T> {}
