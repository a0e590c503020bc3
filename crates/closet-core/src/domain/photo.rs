//! Photo Upload
//!
//! A user-selected image and the unique bucket path it is stored under.

use chrono::Utc;
use uuid::Uuid;

const SUFFIX_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Photo {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Lowercased extension of the original file name, if it has one
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Content type to send, guessed from the file name when the browser gave none
    pub fn mime_type(&self) -> String {
        if !self.content_type.trim().is_empty() {
            return self.content_type.clone();
        }
        mime_guess::from_path(&self.file_name)
            .first_or_octet_stream()
            .to_string()
    }

    /// `<unix-millis>-<random hex>.<ext>`, generated fresh on every call
    pub fn unique_path(&self) -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        self.asset_path(Utc::now().timestamp_millis(), &suffix[..SUFFIX_LEN])
    }

    pub fn asset_path(&self, millis: i64, suffix: &str) -> String {
        match self.extension() {
            Some(ext) => format!("{millis}-{suffix}.{ext}"),
            None => format!("{millis}-{suffix}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_path_keeps_extension() {
        let photo = Photo::new("Yaz Elbisesi.JPG", "image/jpeg", vec![1, 2, 3]);
        assert_eq!(photo.asset_path(1700000000000, "ab12cd34"), "1700000000000-ab12cd34.jpg");
    }

    #[test]
    fn test_asset_path_without_extension() {
        let photo = Photo::new("camera-upload", "", vec![]);
        assert_eq!(photo.extension(), None);
        assert_eq!(photo.asset_path(5, "00ff00ff"), "5-00ff00ff");
        assert_eq!(Photo::new(".hidden", "", vec![]).extension(), None);
    }

    #[test]
    fn test_unique_paths_differ() {
        let photo = Photo::new("a.png", "image/png", vec![]);
        let first = photo.unique_path();
        let second = photo.unique_path();
        assert_ne!(first, second);
        assert!(first.ends_with(".png"));
    }

    #[test]
    fn test_mime_type_guess() {
        assert_eq!(Photo::new("x.webp", "", vec![]).mime_type(), "image/webp");
        assert_eq!(Photo::new("x.webp", "image/custom", vec![]).mime_type(), "image/custom");
        assert_eq!(Photo::new("x", "", vec![]).mime_type(), "application/octet-stream");
    }

    #[test]
    fn test_mime_type_beyond_common_photos() {
        assert_eq!(Photo::new("logo.svg", "", vec![]).mime_type(), "image/svg+xml");
        assert_eq!(Photo::new("scan.bmp", " ", vec![]).mime_type(), "image/bmp");
        assert_eq!(Photo::new("IMG_0001.PNG", "", vec![]).mime_type(), "image/png");
    }
}
