use crate::constants::{DEFAULT_QUALITY, FULL_SCREEN_QUALITY, FULL_SCREEN_WIDTH};

/// CDN 変換パラメータのクエリ名
pub const TRANSFORM_PARAM: &str = "tr";

/// 変換パラメータ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformParams {
    pub width: Option<u32>,
    pub quality: u8,
}

impl TransformParams {
    pub fn new(width: Option<u32>, quality: Option<u8>) -> Self {
        Self {
            width,
            quality: quality.unwrap_or(DEFAULT_QUALITY),
        }
    }

    /// レスポンシブ表示用（品質はデフォルト）
    pub fn responsive(width: u32) -> Self {
        Self::new(Some(width), None)
    }

    /// 全画面表示用
    pub fn full_screen() -> Self {
        Self::new(Some(FULL_SCREEN_WIDTH), Some(FULL_SCREEN_QUALITY))
    }

    /// 変換トークンを順序通りに並べる（w → q → f）
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(3);
        if let Some(w) = self.width {
            tokens.push(format!("w-{w}"));
        }
        tokens.push(format!("q-{}", self.quality));
        tokens.push("f-auto".to_string());
        tokens
    }

    /// `tr=w-800,q-80,f-auto` 形式のクエリ文字列
    pub fn to_query(&self) -> String {
        format!("{TRANSFORM_PARAM}={}", self.tokens().join(","))
    }
}
