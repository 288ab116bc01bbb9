use crate::constants::SUPPORTED_EXTENSIONS;
use crate::listing::record::RemoteFileRecord;
use crate::model::GalleryImage;

/// 拡張子（小文字）が対応画像形式かどうか
pub fn is_supported_image(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// 最後の拡張子を取り除いたファイル名
pub fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => name,
    }
}

/// 画像ファイルのみ残し、元の順序のまま GalleryImage に変換する
pub fn normalize_records(records: Vec<RemoteFileRecord>) -> Vec<GalleryImage> {
    records
        .into_iter()
        .filter(|r| r.name.as_deref().is_some_and(is_supported_image))
        .enumerate()
        .map(|(index, record)| to_gallery_image(record, index))
        .collect()
}

fn to_gallery_image(record: RemoteFileRecord, index: usize) -> GalleryImage {
    let id = record
        .file_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| format!("img-{index}"));

    let url = match (record.url.filter(|u| !u.is_empty()), record.file_path) {
        (Some(url), _) => url,
        (None, Some(path)) if !path.is_empty() => {
            path.strip_prefix('/').unwrap_or(&path).to_string()
        }
        _ => {
            tracing::warn!(id = %id, name = ?record.name, "file record has neither url nor filePath");
            String::new()
        }
    };

    let alt = record
        .name
        .as_deref()
        .map(strip_extension)
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Image {}", index + 1));

    GalleryImage {
        id,
        url,
        alt,
        width: record.width,
        height: record.height,
    }
}
