use thiserror::Error;

/// 設定エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("private API key is not configured")]
    MissingPrivateKey,

    #[error("{name} must be an http(s) URL, got {value:?}")]
    InvalidEndpoint { name: &'static str, value: String },

    #[error("invalid bind address: {0}")]
    InvalidBindAddr(String),
}

/// 入力値の検証エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Folder parameter is required")]
    MissingFolder,

    #[error("folder is too long (max {max})")]
    FolderTooLong { max: usize },

    #[error("path traversal detected")]
    PathTraversal,

    #[error("invalid characters in folder")]
    InvalidCharacters,
}

/// フォルダ一覧取得エラー
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("remote API returned {status}: {body}")]
    RemoteApi { status: u16, body: String },

    #[error("request to remote API failed: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    InvalidBody(String),
}
