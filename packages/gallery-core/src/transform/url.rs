use crate::config::GalleryConfig;
use crate::constants::THUMBNAIL_WIDTH;
use crate::model::{GalleryImage, RenderedImage};
use crate::transform::params::{TRANSFORM_PARAM, TransformParams};

/// CDN 用の変換 URL を組み立てる
///
/// エンドポイント未設定の場合は入力をそのまま返す（パススルー）
#[derive(Debug, Clone, Default)]
pub struct UrlTransformer {
    endpoint: Option<String>,
}

impl UrlTransformer {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            endpoint: config
                .url_endpoint
                .as_deref()
                .map(|e| e.trim_end_matches('/').to_string()),
        }
    }

    /// パスと幅・品質から変換済み URL を作成する
    ///
    /// 既に変換パラメータを含む URL には二重に適用しない
    pub fn build_transformed_url(&self, path: &str, width: Option<u32>, quality: u8) -> String {
        let Some(endpoint) = self.endpoint.as_deref() else {
            tracing::warn!(path = %path, "CDN URL endpoint not configured, using original URL");
            return path.to_string();
        };

        let params = TransformParams {
            width,
            quality,
        };

        if is_absolute(path) {
            if has_transform_marker(path) {
                return path.to_string();
            }
            return append_query(path, &params.to_query());
        }

        let relative = path.strip_prefix('/').unwrap_or(path);
        let joined = format!("{endpoint}/{relative}");
        if has_transform_marker(relative) {
            return joined;
        }
        append_query(&joined, &params.to_query())
    }

    /// レスポンシブ表示用 URL（品質 80）
    pub fn responsive_url(&self, path: &str, width: u32) -> String {
        let params = TransformParams::responsive(width);
        self.build_transformed_url(path, params.width, params.quality)
    }

    /// 全画面表示用 URL（幅 1920、品質 90）
    pub fn full_screen_url(&self, path: &str) -> String {
        let params = TransformParams::full_screen();
        self.build_transformed_url(path, params.width, params.quality)
    }

    /// グリッド用と全画面用の URL を付与する
    pub fn render(&self, image: &GalleryImage) -> RenderedImage {
        let available = image.is_available();
        let (thumbnail_url, full_screen_url) = if available {
            (
                self.responsive_url(&image.url, THUMBNAIL_WIDTH),
                self.full_screen_url(&image.url),
            )
        } else {
            (String::new(), String::new())
        };

        RenderedImage {
            image: image.clone(),
            thumbnail_url,
            full_screen_url,
            available,
        }
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// `tr` クエリパラメータ、または `tr:` パスセグメントを含むか
fn has_transform_marker(url: &str) -> bool {
    let (without_fragment, _) = split_fragment(url);
    let (path, query) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (without_fragment, None),
    };

    let in_query = query.is_some_and(|q| {
        q.split('&')
            .any(|pair| pair.split('=').next() == Some(TRANSFORM_PARAM))
    });
    let in_path = path
        .split('/')
        .any(|segment| segment.starts_with("tr:"));

    in_query || in_path
}

/// `#` 以降のフラグメントを切り離す（フラグメントは `#` を含む）
fn split_fragment(url: &str) -> (&str, &str) {
    match url.find('#') {
        Some(pos) => url.split_at(pos),
        None => (url, ""),
    }
}

/// クエリはフラグメントより前に付ける
fn append_query(url: &str, query: &str) -> String {
    let (base, fragment) = split_fragment(url);
    if base.ends_with('?') || base.ends_with('&') {
        format!("{base}{query}{fragment}")
    } else if base.contains('?') {
        format!("{base}&{query}{fragment}")
    } else {
        format!("{base}?{query}{fragment}")
    }
}
