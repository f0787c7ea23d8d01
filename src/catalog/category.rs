use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::null_as_default;
use crate::carousel::CarouselItem;

/// Icon shown on a category card. Unknown names from the API map to `Sparkles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryIcon {
    CarFront,
    Trophy,
    Gift,
    Brain,
    Palette,
    Gamepad2,
    Zap,
    #[default]
    #[serde(other)]
    Sparkles,
}

impl CategoryIcon {
    pub const ALL: [CategoryIcon; 8] = [
        CategoryIcon::CarFront,
        CategoryIcon::Trophy,
        CategoryIcon::Gift,
        CategoryIcon::Brain,
        CategoryIcon::Palette,
        CategoryIcon::Gamepad2,
        CategoryIcon::Sparkles,
        CategoryIcon::Zap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CategoryIcon::CarFront => "CarFront",
            CategoryIcon::Trophy => "Trophy",
            CategoryIcon::Gift => "Gift",
            CategoryIcon::Brain => "Brain",
            CategoryIcon::Palette => "Palette",
            CategoryIcon::Gamepad2 => "Gamepad2",
            CategoryIcon::Sparkles => "Sparkles",
            CategoryIcon::Zap => "Zap",
        }
    }

    /// Single-cell glyph for terminal cards.
    pub fn glyph(self) -> &'static str {
        match self {
            CategoryIcon::CarFront => "🚗",
            CategoryIcon::Trophy => "🏆",
            CategoryIcon::Gift => "🎁",
            CategoryIcon::Brain => "🧠",
            CategoryIcon::Palette => "🎨",
            CategoryIcon::Gamepad2 => "🎮",
            CategoryIcon::Sparkles => "✨",
            CategoryIcon::Zap => "⚡",
        }
    }
}

impl fmt::Display for CategoryIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CategoryIcon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryIcon::ALL
            .into_iter()
            .find(|icon| icon.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown icon '{s}'"))
    }
}

/// Gradient tokens offered by the admin form.
pub const GRADIENT_OPTIONS: [&str; 6] = [
    "from-red-600 to-rose-900",
    "from-purple-600 to-indigo-900",
    "from-amber-500 to-orange-800",
    "from-emerald-500 to-green-800",
    "from-pink-500 to-rose-700",
    "from-blue-500 to-cyan-700",
];

/// Accent tokens offered by the admin form.
pub const ACCENT_OPTIONS: [&str; 6] = [
    "text-red-500",
    "text-purple-500",
    "text-amber-500",
    "text-emerald-500",
    "text-pink-500",
    "text-blue-500",
];

/// One "shop by category" card.
///
/// Every display field decodes missing or `null` values as blank, so one
/// half-filled record from the API never fails the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryItem {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub img: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub accent: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: CategoryIcon,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub badge: String,
}

impl CarouselItem for CategoryItem {
    fn item_id(&self) -> &str {
        &self.id
    }
}

impl CategoryItem {
    #[allow(clippy::too_many_arguments)]
    fn fallback(
        id: &str,
        title: &str,
        img: &str,
        color: &str,
        accent: &str,
        icon: CategoryIcon,
        count: u32,
        description: &str,
        badge: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            img: img.to_string(),
            color: color.to_string(),
            accent: accent.to_string(),
            icon,
            count,
            description: description.to_string(),
            badge: badge.to_string(),
        }
    }
}

/// Categories shown when the API is unreachable or empty.
pub fn default_categories() -> Vec<CategoryItem> {
    vec![
        CategoryItem::fallback(
            "vehicles",
            "Vehicles & Tracksets",
            "/chars/car3.png",
            "from-red-600 to-rose-900",
            "text-red-500",
            CategoryIcon::CarFront,
            42,
            "Remote control models",
            "Trending",
        ),
        CategoryItem::fallback(
            "art",
            "Art & Craft",
            "/chars/barbie.avif",
            "from-purple-600 to-indigo-900",
            "text-purple-500",
            CategoryIcon::Palette,
            36,
            "Creative kits",
            "Creative",
        ),
        CategoryItem::fallback(
            "puzzles",
            "Games & Puzzles",
            "/chars/pokemon.avif",
            "from-emerald-500 to-green-800",
            "text-emerald-500",
            CategoryIcon::Gamepad2,
            27,
            "Strategy games",
            "Fun",
        ),
    ]
}
