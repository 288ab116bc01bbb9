use crate::constants::DEFAULT_API_BASE_URL;
use crate::errors::ConfigError;

/// ギャラリー設定
///
/// CDN エンドポイントと API キーをまとめて保持し、
/// URL 変換とフォルダ一覧取得の両方に渡す
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    /// CDN のベース URL（未設定なら URL 変換はパススルー）
    pub url_endpoint: Option<String>,
    /// ファイル一覧 API の秘密鍵（未設定ならフォルダ一覧取得は失敗する）
    pub private_key: Option<String>,
    /// ファイル一覧 API のベース URL
    pub api_base_url: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            url_endpoint: None,
            private_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl GalleryConfig {
    /// 環境変数から GalleryConfig を作成する
    ///
    /// 任意の環境変数:
    /// - IMAGEKIT_URL_ENDPOINT
    /// - IMAGEKIT_PRIVATE_KEY
    /// - IMAGEKIT_API_BASE_URL
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意のルックアップ関数から設定を読み込み、検証する
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            url_endpoint: lookup("IMAGEKIT_URL_ENDPOINT"),
            private_key: lookup("IMAGEKIT_PRIVATE_KEY"),
            api_base_url: lookup("IMAGEKIT_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        };

        config.validate()
    }

    /// 起動時の検証
    ///
    /// 空文字は未設定として扱い、末尾のスラッシュを削除する。
    /// 未設定の値は警告のみ（エンドポイントはパススルー、鍵は一覧取得時にエラー）
    pub fn validate(self) -> Result<Self, ConfigError> {
        let url_endpoint = match non_empty(self.url_endpoint) {
            Some(endpoint) => Some(check_http_url("IMAGEKIT_URL_ENDPOINT", &endpoint)?),
            None => {
                tracing::warn!("CDN URL endpoint not configured, image URLs will pass through untransformed");
                None
            }
        };

        let private_key = non_empty(self.private_key);
        if private_key.is_none() {
            tracing::warn!("private API key not configured, folder listing is disabled");
        }

        let api_base_url = match non_empty(Some(self.api_base_url)) {
            Some(base) => check_http_url("IMAGEKIT_API_BASE_URL", &base)?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        Ok(Self {
            url_endpoint,
            private_key,
            api_base_url,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_http_url(name: &'static str, value: &str) -> Result<String, ConfigError> {
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidEndpoint {
            name,
            value: value.to_string(),
        });
    }
    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_full() {
        let config = GalleryConfig::from_lookup(lookup_from(&[
            ("IMAGEKIT_URL_ENDPOINT", "https://ik.imagekit.io/demo/"),
            ("IMAGEKIT_PRIVATE_KEY", "private_abc"),
        ]))
        .unwrap();

        // 末尾のスラッシュが削除される
        assert_eq!(config.url_endpoint.as_deref(), Some("https://ik.imagekit.io/demo"));
        assert_eq!(config.private_key.as_deref(), Some("private_abc"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = GalleryConfig::from_lookup(lookup_from(&[
            ("IMAGEKIT_URL_ENDPOINT", ""),
            ("IMAGEKIT_PRIVATE_KEY", "  "),
            ("IMAGEKIT_API_BASE_URL", ""),
        ]))
        .unwrap();

        assert_eq!(config.url_endpoint, None);
        assert_eq!(config.private_key, None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_invalid_endpoint_scheme() {
        let result = GalleryConfig::from_lookup(lookup_from(&[(
            "IMAGEKIT_URL_ENDPOINT",
            "ik.imagekit.io/demo",
        )]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEndpoint { name: "IMAGEKIT_URL_ENDPOINT", .. })
        ));
    }

    #[test]
    fn test_custom_api_base_url() {
        let config = GalleryConfig::from_lookup(lookup_from(&[(
            "IMAGEKIT_API_BASE_URL",
            "http://127.0.0.1:9000/",
        )]))
        .unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
    }
}
