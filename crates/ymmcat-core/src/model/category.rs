//! Fixed plugin categories with their display label and icon.

use std::fmt;

/// Filter id that matches every category.
pub const CATEGORY_ALL: &str = "all";

/// Display metadata for a category chip or badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub icon: &'static str,
}

const ALL_INFO: CategoryInfo = CategoryInfo {
    label: "すべて",
    icon: "📦",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    VideoEffect,
    AudioEffect,
    VoiceSynthesis,
    Shape,
    Text,
    VideoOutput,
    Utility,
    Other,
}

impl Category {
    /// Every category in chip display order.
    pub const ALL: [Category; 8] = [
        Category::VideoEffect,
        Category::AudioEffect,
        Category::VoiceSynthesis,
        Category::Shape,
        Category::Text,
        Category::VideoOutput,
        Category::Utility,
        Category::Other,
    ];

    /// Serialized id as used in the dataset (`video-effect`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Category::VideoEffect => "video-effect",
            Category::AudioEffect => "audio-effect",
            Category::VoiceSynthesis => "voice-synthesis",
            Category::Shape => "shape",
            Category::Text => "text",
            Category::VideoOutput => "video-output",
            Category::Utility => "utility",
            Category::Other => "other",
        }
    }

    /// Parses a dataset id. Unknown ids return `None`.
    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == id)
    }

    /// Resolves a dataset id for display, falling back to `Other`.
    pub fn resolve(id: &str) -> Category {
        Category::from_id(id).unwrap_or(Category::Other)
    }

    pub fn info(self) -> CategoryInfo {
        let (label, icon) = match self {
            Category::VideoEffect => ("映像エフェクト", "🎬"),
            Category::AudioEffect => ("音声エフェクト", "🔊"),
            Category::VoiceSynthesis => ("音声合成", "🗣️"),
            Category::Shape => ("図形", "🔷"),
            Category::Text => ("テキスト", "✏️"),
            Category::VideoOutput => ("動画出力", "📹"),
            Category::Utility => ("ユーティリティ", "🔧"),
            Category::Other => ("その他", "📁"),
        };
        CategoryInfo { label, icon }
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    /// Info for a filter chip id, including the `all` pseudo-category.
    pub fn filter_info(filter_id: &str) -> CategoryInfo {
        if filter_id == CATEGORY_ALL {
            ALL_INFO
        } else {
            Category::resolve(filter_id).info()
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back() {
        for c in Category::ALL {
            assert_eq!(Category::from_id(c.as_str()), Some(c));
        }
    }

    #[test]
    fn unknown_id_resolves_to_other() {
        assert_eq!(Category::from_id("transition"), None);
        assert_eq!(Category::resolve("transition"), Category::Other);
        assert_eq!(Category::resolve("").info().label, "その他");
    }

    #[test]
    fn filter_info_all_chip() {
        assert_eq!(Category::filter_info("all").label, "すべて");
        assert_eq!(Category::filter_info("shape").icon, "🔷");
    }
}
