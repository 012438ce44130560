pub mod name;
pub mod phone;
pub mod title;
pub mod vocab;

use serde::Serialize;

/// Display sentinel for a missing field, distinct from an empty string.
pub const NOT_FOUND: &str = "—";

/// Per-document extraction output. Assembled once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    pub file: String,
    pub name: Option<String>,
    pub title: Option<String>,
    pub phone: Option<String>,
}

/// Run the three extractors over one document. The extractors are independent
/// and share no state; empty text yields absent fields, never an error. The
/// filename is only consulted when the text gave no title.
pub fn extract_fields(text: &str, filename: &str) -> ExtractionResult {
    let name = name::extract(text);
    let title = title::from_text(text).or_else(|| title::from_filename(filename));
    let phone = phone::best(text);

    ExtractionResult {
        file: filename.to_string(),
        name,
        title,
        phone,
    }
}

/// Aggregate counts over a batch, for the summary line.
#[derive(Debug, Default)]
pub struct FieldCounts {
    pub total: usize,
    pub names: usize,
    pub titles: usize,
    pub phones: usize,
}

impl FieldCounts {
    pub fn add(&mut self, result: &ExtractionResult) {
        self.total += 1;
        self.names += result.name.is_some() as usize;
        self.titles += result.title.is_some() as usize;
        self.phones += result.phone.is_some() as usize;
    }

    pub fn print(&self) {
        println!(
            "Found {}/{} names, {}/{} titles, {}/{} phones.",
            self.names, self.total, self.titles, self.total, self.phones, self.total,
        );
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.txt", name)).unwrap()
    }

    #[test]
    fn ukrainian_resume() {
        let text = fixture("resume_uk");
        let r = extract_fields(&text, "resume_uk.txt");
        assert_eq!(r.name.as_deref(), Some("Петренко Іван Миколайович"));
        assert_eq!(r.title.as_deref(), Some("Менеджер з продажу"));
        assert_eq!(r.phone.as_deref(), Some("+380501234567"));
    }

    #[test]
    fn english_resume() {
        let text = fixture("resume_en");
        let r = extract_fields(&text, "resume_en.txt");
        assert_eq!(r.name.as_deref(), Some("John Smith"));
        assert_eq!(r.title.as_deref(), Some("Sales Manager"));
        assert_eq!(r.phone.as_deref(), Some("0501234567"));
    }

    #[test]
    fn russian_resume_keyword_title() {
        // No explicit label: the title comes from the keyword fallback
        let text = fixture("resume_ru");
        let r = extract_fields(&text, "resume_ru.txt");
        assert_eq!(r.name.as_deref(), Some("Иванова Анна Сергеевна"));
        assert_eq!(r.title.as_deref(), Some("Администратор салона красоты"));
        assert_eq!(r.phone.as_deref(), Some("8916123456"));
    }

    #[test]
    fn empty_text_yields_no_fields() {
        let r = extract_fields("", "resume.pdf");
        assert_eq!(r.name, None);
        assert_eq!(r.title, None);
        assert_eq!(r.phone, None);
    }

    #[test]
    fn filename_title_fallback() {
        let r = extract_fields("", "Резюме-менеджер-складу-12345678901.pdf");
        assert_eq!(r.title.as_deref(), Some("менеджер складу"));
    }

    #[test]
    fn counts_accumulate() {
        let mut counts = FieldCounts::default();
        counts.add(&extract_fields("", "123456.pdf"));
        let text = fixture("resume_uk");
        counts.add(&extract_fields(&text, "resume_uk.txt"));
        assert_eq!(counts.total, 2);
        assert_eq!(counts.names, 1);
        assert_eq!(counts.titles, 1);
        assert_eq!(counts.phones, 1);
    }
}
