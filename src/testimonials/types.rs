use serde::{Deserialize, Serialize};

use crate::api::null_as_default;

/// Stars shown when a review has no usable rating.
pub const DEFAULT_RATING: u8 = 5;
pub const MAX_RATING: u8 = 5;

pub const NO_REVIEWS: &str =
    "No reviews added yet. Add reviews in the admin panel to see the marquee.";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Review {
    /// Whole stars to draw. Missing, zero or negative ratings count as five.
    pub fn stars(&self) -> u8 {
        match self.rating {
            Some(rating) if rating >= 1.0 => rating.round().min(f64::from(MAX_RATING)) as u8,
            _ => DEFAULT_RATING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    #[serde(default, deserialize_with = "null_as_default")]
    pub badge: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_highlight: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtitle: String,
}

/// The founder block under the marquee.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spotlight {
    #[serde(default, deserialize_with = "null_as_default")]
    pub badge: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quote: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stamp_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_highlight: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub button_text: String,
}

/// Payload of `GET /enhanced-testimonials`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TestimonialsData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviews: Vec<Review>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hero: Hero,
    #[serde(default, deserialize_with = "null_as_default")]
    pub spotlight: Spotlight,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cta: CallToAction,
}

impl TestimonialsData {
    pub fn has_reviews(&self) -> bool {
        !self.reviews.is_empty()
    }

    /// The three marquee rows: in order, reversed, and the second, third and
    /// first review.
    ///
    /// With fewer than three reviews the third row repeats the first.
    pub fn marquee_rows(&self) -> [Vec<&Review>; 3] {
        let forward: Vec<&Review> = self.reviews.iter().collect();
        let reversed: Vec<&Review> = self.reviews.iter().rev().collect();
        let rotated = if self.reviews.len() > 2 {
            vec![&self.reviews[1], &self.reviews[2], &self.reviews[0]]
        } else {
            forward.clone()
        };
        [forward, reversed, rotated]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(name: &str, rating: Option<f64>) -> Review {
        Review {
            name: name.into(),
            rating,
            ..Review::default()
        }
    }

    #[test]
    fn missing_or_zero_rating_shows_five_stars() {
        assert_eq!(review("a", None).stars(), 5);
        assert_eq!(review("a", Some(0.0)).stars(), 5);
        assert_eq!(review("a", Some(3.0)).stars(), 3);
        assert_eq!(review("a", Some(9.0)).stars(), 5);
    }

    #[test]
    fn rotates_third_row() {
        let data = TestimonialsData {
            reviews: vec![
                review("a", None),
                review("b", None),
                review("c", None),
                review("d", None),
            ],
            ..TestimonialsData::default()
        };
        let names = |row: &Vec<&Review>| row.iter().map(|r| r.name.clone()).collect::<Vec<_>>();
        let [first, second, third] = data.marquee_rows();
        assert_eq!(names(&first), vec!["a", "b", "c", "d"]);
        assert_eq!(names(&second), vec!["d", "c", "b", "a"]);
        assert_eq!(names(&third), vec!["b", "c", "a"]);
    }

    #[test]
    fn short_list_repeats_first_row() {
        let data = TestimonialsData {
            reviews: vec![review("a", None), review("b", None)],
            ..TestimonialsData::default()
        };
        let [first, _, third] = data.marquee_rows();
        assert_eq!(first, third);
    }

    #[test]
    fn decodes_camel_case_sections() {
        let data: TestimonialsData = serde_json::from_str(
            r#"{"hero":{"titleHighlight":"Love"},"spotlight":{"stampText":"Est. Since 1998"},"reviews":null}"#,
        )
        .unwrap();
        assert_eq!(data.hero.title_highlight, "Love");
        assert_eq!(data.spotlight.stamp_text, "Est. Since 1998");
        assert!(!data.has_reviews());
    }
}
