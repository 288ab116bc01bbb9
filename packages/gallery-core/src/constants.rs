/// デフォルト品質（1-100）
pub const DEFAULT_QUALITY: u8 = 80;

/// 全画面表示用の幅
pub const FULL_SCREEN_WIDTH: u32 = 1920;

/// 全画面表示用の品質
pub const FULL_SCREEN_QUALITY: u8 = 90;

/// ギャラリーグリッドのサムネイル幅
pub const THUMBNAIL_WIDTH: u32 = 800;

/// ギャラリーに表示する拡張子（小文字）
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// ファイル一覧 API のデフォルトのベース URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.imagekit.io";

/// フォルダ名の最大長
pub const MAX_FOLDER_LENGTH: usize = 1024;
