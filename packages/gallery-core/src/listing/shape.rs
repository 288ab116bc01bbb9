use serde_json::Value;

use crate::errors::ListingError;
use crate::listing::record::RemoteFileRecord;

/// ファイル一覧レスポンスの形
///
/// API は配列をそのまま返す場合と `{ "files": [...] }` で包む場合がある
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingShape {
    /// 配列そのもの
    BareArray(Vec<RemoteFileRecord>),
    /// `files` フィールドに配列
    Wrapped(Vec<RemoteFileRecord>),
    /// 想定外の形（JSON の種類名を保持）
    Unrecognized(&'static str),
}

impl ListingShape {
    pub fn from_value(value: Value) -> Result<Self, ListingError> {
        match value {
            Value::Array(items) => Ok(Self::BareArray(decode_records(items)?)),
            Value::Object(mut object) => match object.remove("files") {
                Some(Value::Array(items)) => Ok(Self::Wrapped(decode_records(items)?)),
                _ => Ok(Self::Unrecognized("object")),
            },
            other => Ok(Self::Unrecognized(kind_of(&other))),
        }
    }

    /// 各ケースをログに残してレコード列を取り出す
    ///
    /// 想定外の形は空として扱う
    pub fn into_records(self, folder: &str) -> Vec<RemoteFileRecord> {
        match self {
            Self::BareArray(records) => {
                tracing::debug!(folder = %folder, count = records.len(), "listing returned a bare array");
                records
            }
            Self::Wrapped(records) => {
                tracing::debug!(folder = %folder, count = records.len(), "listing returned a files wrapper");
                records
            }
            Self::Unrecognized(kind) => {
                tracing::warn!(folder = %folder, kind = %kind, "unexpected listing response shape, treating as empty");
                Vec::new()
            }
        }
    }
}

fn decode_records(items: Vec<Value>) -> Result<Vec<RemoteFileRecord>, ListingError> {
    serde_json::from_value(Value::Array(items))
        .map_err(|e| ListingError::InvalidBody(format!("malformed file record: {e}")))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
