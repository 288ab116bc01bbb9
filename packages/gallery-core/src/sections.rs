use serde::Serialize;

/// ナビゲーションに並ぶギャラリーのセクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GallerySection {
    pub slug: &'static str,
    pub title: &'static str,
    pub folder: &'static str,
}

/// 表示順のセクション一覧
pub static DEFAULT_SECTIONS: [GallerySection; 3] = [
    GallerySection {
        slug: "pre-boda",
        title: "Bodas y Pre-Bodas",
        folder: "pre-boda",
    },
    GallerySection {
        slug: "pareja",
        title: "Pareja",
        folder: "pareja",
    },
    GallerySection {
        slug: "maternidad",
        title: "Maternidad",
        folder: "maternidad",
    },
];

pub fn find_section(slug: &str) -> Option<&'static GallerySection> {
    DEFAULT_SECTIONS.iter().find(|s| s.slug == slug)
}
