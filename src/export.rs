use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::extract::{ExtractionResult, NOT_FOUND};

/// Serialize results into a CSV file. A UTF-8 BOM is written first so
/// spreadsheet tools pick the right encoding for the Cyrillic fields.
pub fn write_csv(path: &Path, results: &[ExtractionResult]) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(b"\xEF\xBB\xBF")?;

    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(["File", "Name", "Title", "Phone"])?;
    for r in results {
        wtr.write_record([
            r.file.as_str(),
            r.name.as_deref().unwrap_or(NOT_FOUND),
            r.title.as_deref().unwrap_or(NOT_FOUND),
            r.phone.as_deref().unwrap_or(NOT_FOUND),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_round_trip() {
        let results = vec![
            ExtractionResult {
                file: "a.pdf".into(),
                name: Some("Петренко Іван".into()),
                title: None,
                phone: Some("0501234567".into()),
            },
            ExtractionResult {
                file: "b, with comma.docx".into(),
                name: None,
                title: Some("Менеджер".into()),
                phone: None,
            },
        ];

        let dir = std::env::temp_dir();
        let path = dir.join("cv_extract_test.csv");
        write_csv(&path, &results).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");
        let body = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let mut lines = body.lines();
        assert_eq!(lines.next(), Some("File,Name,Title,Phone"));
        assert_eq!(lines.next(), Some("a.pdf,Петренко Іван,—,0501234567"));
        assert_eq!(lines.next(), Some("\"b, with comma.docx\",—,Менеджер,—"));
        std::fs::remove_file(&path).ok();
    }
}
