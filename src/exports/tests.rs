#[cfg(test)]
mod tests {
    use crate::exports::{ExportError, export_filename, latest_export, save_review};
    use chrono::{Local, TimeZone};
    use std::fs;
    use tempfile::TempDir;

    fn timestamp_at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_export_filename_format() {
        let ts = timestamp_at(2025, 8, 30, 14, 25, 1);
        assert_eq!(export_filename(&ts), "litreview_20250830_142501.md");
    }

    #[test]
    fn test_save_review_writes_exact_content() {
        let temp_dir = TempDir::new().unwrap();
        let document = "### 📚 Literature Review on Test\n\ncontent";
        let ts = timestamp_at(2025, 8, 30, 10, 0, 0);

        let path = save_review(temp_dir.path(), document, &ts).unwrap();
        assert!(path.exists());

        // 落盘后读回应与原文档逐字节一致
        let restored = fs::read_to_string(&path).unwrap();
        assert_eq!(restored, document);
    }

    #[test]
    fn test_save_review_creates_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let ts = timestamp_at(2025, 8, 30, 10, 0, 0);

        let path = save_review(&nested, "doc", &ts).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_latest_export_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let result = latest_export(temp_dir.path());
        assert!(matches!(result, Err(ExportError::NotFound(_))));
    }

    #[test]
    fn test_latest_export_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let result = latest_export(&missing);
        assert!(matches!(result, Err(ExportError::NotFound(_))));
    }

    #[test]
    fn test_latest_export_picks_newest() {
        let temp_dir = TempDir::new().unwrap();
        let t1 = timestamp_at(2025, 8, 30, 10, 0, 0);
        let t2 = timestamp_at(2025, 8, 30, 10, 0, 1);

        save_review(temp_dir.path(), "first", &t1).unwrap();
        let second = save_review(temp_dir.path(), "second", &t2).unwrap();

        let latest = latest_export(temp_dir.path()).unwrap();
        assert_eq!(latest, second);
    }

    #[test]
    fn test_latest_export_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let ts = timestamp_at(2025, 8, 30, 10, 0, 0);
        save_review(temp_dir.path(), "doc", &ts).unwrap();

        let first = latest_export(temp_dir.path()).unwrap();
        let second = latest_export(temp_dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_latest_export_ignores_unrelated_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("notes.md"), "not an export").unwrap();
        fs::write(temp_dir.path().join("zzz.txt"), "sorted last").unwrap();

        let ts = timestamp_at(2025, 8, 30, 10, 0, 0);
        let export = save_review(temp_dir.path(), "doc", &ts).unwrap();

        let latest = latest_export(temp_dir.path()).unwrap();
        assert_eq!(latest, export);
    }

    #[test]
    fn test_latest_export_only_unrelated_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("notes.md"), "not an export").unwrap();

        let result = latest_export(temp_dir.path());
        assert!(matches!(result, Err(ExportError::NotFound(_))));
    }
}
