//! "Shop by category" data: the card type, its icon set, the built-in
//! fallback list and where the carousel loads items from.

mod category;
mod source;

pub use category::{
    default_categories, CategoryIcon, CategoryItem, ACCENT_OPTIONS, GRADIENT_OPTIONS,
};
pub use source::{load_preview_file, CatalogError, CategoryLoad, CategorySource, LoadOrigin, Route};
