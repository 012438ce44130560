use std::fs;
use std::io::{BufReader, Cursor};
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::events::Event;
use tracing::warn;

/// Best-effort text extraction for a resume document.
///
/// PDF and DOCX parse failures degrade to an empty string (the extractors
/// treat empty text as "no candidates found"); only the file read itself can
/// error. Anything that is not PDF/DOCX is read as lossy UTF-8 text.
pub fn read_file(path: &Path) -> Result<String> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    Ok(match ext.as_str() {
        "pdf" => read_pdf(&data, path),
        "docx" => read_docx(&data, path),
        _ => String::from_utf8_lossy(&data).into_owned(),
    })
}

fn read_pdf(data: &[u8], path: &Path) -> String {
    match pdf_extract::extract_text_from_mem(data) {
        Ok(text) => text,
        Err(e) => {
            warn!("pdf text extraction failed for {}: {e}", path.display());
            String::new()
        }
    }
}

fn read_docx(data: &[u8], path: &Path) -> String {
    match docx_text(data) {
        Ok(text) => text,
        Err(e) => {
            warn!("docx text extraction failed for {}: {e:#}", path.display());
            String::new()
        }
    }
}

/// Pull visible text out of `word/document.xml`: text runs concatenate within
/// a paragraph, `w:p` ends become newlines. Table cell text flows through the
/// same stream, so tables need no special casing.
fn docx_text(data: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
    let doc = archive.by_name("word/document.xml")?;
    let mut reader = quick_xml::Reader::from_reader(BufReader::new(doc));

    let mut out = String::new();
    let mut para = String::new();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(e) => para.push_str(&e.unescape()?),
            Event::Empty(e) if e.name().as_ref() == b"w:tab" => para.push(' '),
            Event::Empty(e) if e.name().as_ref() == b"w:br" => para.push('\n'),
            Event::End(e) if e.name().as_ref() == b"w:p" => {
                let line = para.trim();
                if !line.is_empty() {
                    out.push_str(line);
                    out.push('\n');
                }
                para.clear();
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("word/document.xml", options).unwrap();
        zip.write_all(document_xml.as_bytes()).unwrap();
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn docx_paragraphs_become_lines() {
        let xml = r#"<?xml version="1.0"?>
            <w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
              <w:body>
                <w:p><w:r><w:t>Петренко Іван</w:t></w:r></w:p>
                <w:p><w:r><w:t>Менеджер </w:t></w:r><w:r><w:t>з продажу</w:t></w:r></w:p>
              </w:body>
            </w:document>"#;
        let text = docx_text(&docx_bytes(xml)).unwrap();
        assert_eq!(text, "Петренко Іван\nМенеджер з продажу\n");
    }

    #[test]
    fn corrupt_docx_degrades_to_empty() {
        let path = Path::new("bogus.docx");
        assert_eq!(read_docx(b"not a zip archive", path), "");
    }
}
