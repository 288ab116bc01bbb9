use crate::constants::MAX_FOLDER_LENGTH;
use crate::errors::ValidationError;

/// クエリで受け取ったフォルダ名を検証する
/// 空文字は未指定として扱い、パストラバーサルと制御文字を拒否する
pub fn validate_folder(folder: Option<&str>) -> Result<&str, ValidationError> {
    let folder = match folder {
        Some(f) if !f.is_empty() => f,
        _ => return Err(ValidationError::MissingFolder),
    };

    if folder.len() > MAX_FOLDER_LENGTH {
        return Err(ValidationError::FolderTooLong {
            max: MAX_FOLDER_LENGTH,
        });
    }

    if folder.split('/').any(|segment| segment == "..") || folder.contains('\\') {
        return Err(ValidationError::PathTraversal);
    }

    if folder.chars().any(char::is_control) {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(folder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_folders() {
        assert_eq!(validate_folder(Some("pre-boda")), Ok("pre-boda"));
        assert_eq!(validate_folder(Some("/clients/2024/")), Ok("/clients/2024/"));
        assert_eq!(validate_folder(Some("Boda María")), Ok("Boda María"));
    }

    #[test]
    fn test_missing_folder() {
        assert_eq!(validate_folder(None), Err(ValidationError::MissingFolder));
        assert_eq!(validate_folder(Some("")), Err(ValidationError::MissingFolder));
    }

    #[test]
    fn test_path_traversal() {
        assert_eq!(validate_folder(Some("../secret")), Err(ValidationError::PathTraversal));
        assert_eq!(validate_folder(Some("a/../b")), Err(ValidationError::PathTraversal));
        assert_eq!(validate_folder(Some("a\\b")), Err(ValidationError::PathTraversal));
        // ファイル名中のドットは許可
        assert!(validate_folder(Some("v1..2")).is_ok());
    }

    #[test]
    fn test_too_long_and_control_chars() {
        let long = "a".repeat(MAX_FOLDER_LENGTH + 1);
        assert!(matches!(
            validate_folder(Some(&long)),
            Err(ValidationError::FolderTooLong { .. })
        ));
        assert_eq!(
            validate_folder(Some("a\nb")),
            Err(ValidationError::InvalidCharacters)
        );
    }
}
