//! The "add category" form.

use thiserror::Error;

use crate::catalog::{CategoryIcon, CategoryItem, ACCENT_OPTIONS, GRADIENT_OPTIONS};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Category {0} is required")]
    MissingField(&'static str),

    #[error("A category with id '{0}' already exists")]
    DuplicateId(String),
}

/// Lowercases and joins whitespace runs with `-`.
pub fn slugify(raw: &str) -> String {
    raw.trim()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub id: String,
    pub title: String,
    pub img: String,
    pub description: String,
    pub badge: String,
    pub count: u32,
    pub icon: CategoryIcon,
    pub color: String,
    pub accent: String,
}

impl Default for CategoryDraft {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            img: String::new(),
            description: String::new(),
            badge: String::new(),
            count: 0,
            icon: CategoryIcon::CarFront,
            color: GRADIENT_OPTIONS[0].to_string(),
            accent: ACCENT_OPTIONS[0].to_string(),
        }
    }
}

impl CategoryDraft {
    /// Checks required fields and the id against `existing`, then builds the item.
    pub fn build(self, existing: &[CategoryItem]) -> Result<CategoryItem, DraftError> {
        let id = slugify(&self.id);
        if id.is_empty() {
            return Err(DraftError::MissingField("id"));
        }
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingField("title"));
        }
        if self.img.trim().is_empty() {
            return Err(DraftError::MissingField("image"));
        }
        if existing.iter().any(|item| item.id == id) {
            return Err(DraftError::DuplicateId(id));
        }

        Ok(CategoryItem {
            id,
            title: self.title,
            img: self.img,
            color: self.color,
            accent: self.accent,
            icon: self.icon,
            count: self.count,
            description: self.description,
            badge: self.badge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_categories;

    fn draft(id: &str) -> CategoryDraft {
        CategoryDraft {
            id: id.into(),
            title: "Action Figures".into(),
            img: "/chars/hero.png".into(),
            ..CategoryDraft::default()
        }
    }

    #[test]
    fn slug_rules() {
        assert_eq!(slugify("Action   Figures"), "action-figures");
        assert_eq!(slugify("  Soft\tToys "), "soft-toys");
        assert_eq!(slugify("lego"), "lego");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn builds_with_slugged_id_and_defaults() {
        let item = draft("Action Figures").build(&[]).unwrap();
        assert_eq!(item.id, "action-figures");
        assert_eq!(item.icon, CategoryIcon::CarFront);
        assert_eq!(item.color, GRADIENT_OPTIONS[0]);
    }

    #[test]
    fn required_fields() {
        assert_eq!(draft("  ").build(&[]), Err(DraftError::MissingField("id")));
        let mut no_img = draft("figures");
        no_img.img.clear();
        assert_eq!(no_img.build(&[]), Err(DraftError::MissingField("image")));
    }

    #[test]
    fn duplicate_after_slugging() {
        let existing = default_categories();
        assert_eq!(
            draft("Art").build(&existing),
            Err(DraftError::DuplicateId("art".into()))
        );
    }
}
