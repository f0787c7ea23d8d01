//! Testimonials page: customer reviews, the owner spotlight and the closing
//! call to action.

mod source;
mod types;

pub use source::{load_preview_file, TestimonialsError, TestimonialsSource};
pub use types::{
    CallToAction, Hero, Review, Spotlight, TestimonialsData, DEFAULT_RATING, MAX_RATING,
    NO_REVIEWS,
};
