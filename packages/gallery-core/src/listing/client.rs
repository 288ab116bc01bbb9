use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;

use crate::config::GalleryConfig;
use crate::errors::{ConfigError, ListingError};
use crate::listing::normalize::normalize_records;
use crate::listing::shape::ListingShape;
use crate::model::GalleryImage;

/// ファイル一覧 API クライアント
///
/// フォルダ内のファイルを 1 回のリクエストで取得し、
/// ギャラリー画像に正規化する（ページングなし、リトライなし）
#[derive(Clone)]
pub struct FolderListingClient {
    client: Client,
    api_base_url: String,
    private_key: Option<String>,
}

impl FolderListingClient {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            client: Client::new(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            private_key: config.private_key.clone(),
        }
    }

    /// フォルダ内の画像一覧を取得する
    pub async fn list_folder_images(&self, folder: &str) -> Result<Vec<GalleryImage>, ListingError> {
        // 鍵がなければネットワークに出る前に失敗
        let Some(private_key) = self.private_key.as_deref() else {
            tracing::error!(folder = %folder, "cannot list folder without a private API key");
            return Err(ConfigError::MissingPrivateKey.into());
        };

        let folder_path = normalize_folder_path(folder);
        let url = format!(
            "{}/v1/files?path={}",
            self.api_base_url,
            urlencoding::encode(&folder_path)
        );

        tracing::info!(folder = %folder_path, "fetching folder listing");
        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, basic_auth_header(private_key))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(folder = %folder_path, error = %e, "folder listing request failed");
                ListingError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .inspect_err(|e| {
                    tracing::warn!(folder = %folder_path, status = %status, error = %e, "failed to read error response body");
                })
                .unwrap_or_default();
            tracing::error!(folder = %folder_path, status = %status, body = %body, "unexpected response from file API");
            return Err(ListingError::RemoteApi {
                status: status.as_u16(),
                body,
            });
        }

        let value: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!(folder = %folder_path, error = %e, "failed to parse folder listing");
            ListingError::InvalidBody(e.to_string())
        })?;

        let shape = ListingShape::from_value(value).inspect_err(|e| {
            tracing::error!(folder = %folder_path, error = %e, "failed to decode file records");
        })?;

        Ok(normalize_records(shape.into_records(&folder_path)))
    }
}

/// 先頭にスラッシュがなければ付与する（末尾はそのまま）
pub fn normalize_folder_path(folder: &str) -> String {
    if folder.starts_with('/') {
        folder.to_string()
    } else {
        format!("/{folder}")
    }
}

/// 秘密鍵をユーザー名、パスワードを空とした Basic 認証ヘッダー
pub fn basic_auth_header(private_key: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{private_key}:")))
}
