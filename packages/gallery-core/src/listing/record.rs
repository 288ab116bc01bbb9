use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// ファイル一覧 API が返すファイル情報（読み取り専用）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteFileRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub file_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub height: Option<u32>,
}

/// ID は文字列でも数値でも受け付ける
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(id)) => Some(id),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// 寸法は整数値の浮動小数点（`4000.0`）も受け付け、範囲外や非数値は無視する
fn lenient_dimension<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(Value::Number(n)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Some(v) = n.as_u64() {
        return Ok(u32::try_from(v).ok());
    }

    Ok(n.as_f64()
        .filter(|v| v.is_finite() && v.fract() == 0.0 && *v >= 0.0 && *v <= f64::from(u32::MAX))
        .map(|v| v as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let record: RemoteFileRecord = serde_json::from_value(serde_json::json!({
            "fileId": "f1",
            "name": "a.jpg",
            "filePath": "/pre-boda/a.jpg",
            "url": "https://ik.imagekit.io/demo/pre-boda/a.jpg",
            "width": 4000,
            "height": 3000,
            "type": "file",
            "size": 1234
        }))
        .unwrap();

        assert_eq!(record.file_id.as_deref(), Some("f1"));
        assert_eq!(record.file_path.as_deref(), Some("/pre-boda/a.jpg"));
        assert_eq!(record.width, Some(4000));
        assert_eq!(record.height, Some(3000));
    }

    #[test]
    fn test_lenient_fields() {
        let record: RemoteFileRecord = serde_json::from_value(serde_json::json!({
            "fileId": 12345,
            "name": "a.jpg",
            "width": 4000.0,
            "height": "3000"
        }))
        .unwrap();

        assert_eq!(record.file_id.as_deref(), Some("12345"));
        assert_eq!(record.width, Some(4000));
        assert_eq!(record.height, None);

        let record: RemoteFileRecord = serde_json::from_value(serde_json::json!({
            "name": "b.jpg",
            "width": 1.5,
            "height": -10
        }))
        .unwrap();
        assert_eq!(record.width, None);
        assert_eq!(record.height, None);
    }

    #[test]
    fn test_deserialize_sparse() {
        let record: RemoteFileRecord =
            serde_json::from_value(serde_json::json!({ "name": "a.png", "url": null })).unwrap();
        assert_eq!(record.name.as_deref(), Some("a.png"));
        assert_eq!(record.url, None);
        assert_eq!(record.file_id, None);
    }
}
