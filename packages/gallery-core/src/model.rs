use serde::{Deserialize, Serialize};

/// ギャラリー画像
///
/// `url` は外部の絶対 URL か、CDN 相対パスのどちらか。
/// 空文字はリモートに URL もパスも無かった場合の劣化状態
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl GalleryImage {
    /// 表示可能かどうか（URL が空なら表示側でフォールバックする）
    pub fn is_available(&self) -> bool {
        !self.url.is_empty()
    }
}

/// 表示用 URL を付与したギャラリー画像
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedImage {
    #[serde(flatten)]
    pub image: GalleryImage,
    pub thumbnail_url: String,
    pub full_screen_url: String,
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(url: &str) -> GalleryImage {
        GalleryImage {
            id: "abc".to_string(),
            url: url.to_string(),
            alt: "photo".to_string(),
            width: None,
            height: None,
        }
    }

    #[test]
    fn test_is_available() {
        assert!(image("pre-boda/a.jpg").is_available());
        assert!(!image("").is_available());
    }

    #[test]
    fn test_serialize_omits_missing_dimensions() {
        let json = serde_json::to_value(image("a.jpg")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "abc", "url": "a.jpg", "alt": "photo" })
        );

        let mut sized = image("a.jpg");
        sized.width = Some(1200);
        sized.height = Some(800);
        let json = serde_json::to_value(sized).unwrap();
        assert_eq!(json["width"], 1200);
        assert_eq!(json["height"], 800);
    }
}
