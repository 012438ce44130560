use std::sync::LazyLock;

use regex::Regex;

use super::vocab;

/// Names are expected near the top of the document.
const SEARCH_WINDOW: usize = 50;

static HSPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static EMAIL_URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@|https?://|www\.").unwrap());
static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.(?:com|ru|ua|org|net|gov)").unwrap());
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{2}\.\d{2}\.\d{4}\b|\b(?:199|200|201|202)\d\b").unwrap());

/// Capitalized-word sequences, 3-word form first (surname given patronymic),
/// then the looser 2-word form. Covers Cyrillic (with Ukrainian letters) and
/// Latin scripts.
static NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"([А-ЯЁІЇЄҐA-Z][а-яёіїєґa-z]{2,})\s+([А-ЯЁІЇЄҐA-Z][а-яёіїєґa-z]{2,})\s+([А-ЯЁІЇЄҐA-Z][а-яёіїєґa-z]{2,})",
        r"([А-ЯЁІЇЄҐA-Z][а-яёіїєґa-z]{1,})\s+([А-ЯЁІЇЄҐA-Z][а-яёіїєґa-z]{1,})",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

#[derive(Debug)]
struct Candidate {
    score: i32,
    name: String,
    line_idx: usize,
}

/// Extract the best name candidate from the leading lines of the document.
pub fn extract(text: &str) -> Option<String> {
    let lines: Vec<String> = text
        .lines()
        .map(|l| HSPACE_RE.replace_all(l.trim(), " ").into_owned())
        .filter(|l| !l.is_empty())
        .collect();

    let mut best: Option<Candidate> = None;

    for (idx, line) in lines.iter().take(SEARCH_WINDOW).enumerate() {
        let lower = line.to_lowercase();

        // Structural noise: emails/URLs, domain suffixes, dates, digit-heavy lines
        if EMAIL_URL_RE.is_match(line) || DOMAIN_RE.is_match(line) || DATE_RE.is_match(line) {
            continue;
        }
        let digit_count = line.chars().filter(|c| c.is_ascii_digit()).count();
        if digit_count > 10 {
            continue;
        }

        // Stop-word prefix skips the line, unless a job role is mentioned:
        // a name may sit right next to its title.
        let has_profession = vocab::mentions_profession(&lower);
        if vocab::STOP_WORDS.iter().any(|w| lower.starts_with(w)) && !has_profession {
            continue;
        }

        for re in NAME_PATTERNS.iter() {
            for caps in re.captures_iter(line) {
                let words: Vec<&str> = (1..caps.len())
                    .filter_map(|i| caps.get(i))
                    .map(|m| m.as_str())
                    .collect();
                if words.len() < 2 {
                    continue;
                }
                if words.iter().any(|w| vocab::is_stop_word(w)) {
                    continue;
                }
                if words
                    .iter()
                    .all(|w| vocab::PROFESSION_WORDS.contains(&w.to_lowercase().as_str()))
                {
                    continue;
                }

                let score = score_candidate(&words, idx, line, has_profession);
                // Stable tie-break: only a strictly higher score replaces
                if best.as_ref().map_or(true, |b| score > b.score) {
                    best = Some(Candidate {
                        score,
                        name: words.join(" "),
                        line_idx: idx,
                    });
                }
            }
        }
    }

    best.map(|c| {
        tracing::debug!(score = c.score, line = c.line_idx, name = %c.name, "name candidate selected");
        c.name
    })
}

fn score_candidate(words: &[&str], line_idx: usize, line: &str, has_profession: bool) -> i32 {
    let mut score = 100 - line_idx as i32;

    if words.len() == 3 {
        score += 60;
    } else if words.len() == 2 {
        // Average word length as a proxy for full words vs. abbreviations
        let avg = words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / 2.0;
        score += if avg >= 5.0 {
            40
        } else if avg >= 3.0 {
            25
        } else {
            10
        };
    }

    if line_idx < 3 {
        score += 100;
    } else if line_idx < 10 {
        score += 50;
    }

    // Short line is likely a dedicated name line, not a sentence
    if line.chars().count() < 60 {
        score += 30;
    }

    if has_profession {
        score -= 10;
    }

    score
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_word_cyrillic() {
        let text = "Петренко Іван Миколайович\nм. Київ";
        assert_eq!(extract(text).as_deref(), Some("Петренко Іван Миколайович"));
    }

    #[test]
    fn two_word_latin() {
        let text = "John Smith\nwarehouse operations";
        assert_eq!(extract(text).as_deref(), Some("John Smith"));
    }

    #[test]
    fn first_line_full_name_beats_later_role_line() {
        let mut lines = vec!["Petrenko Ivan Mykolayovych".to_string()];
        lines.extend((0..19).map(|_| "worked with clients daily".to_string()));
        lines.push("Consultant Svitlana Boiko".to_string());
        let text = lines.join("\n");
        assert_eq!(extract(&text).as_deref(), Some("Petrenko Ivan Mykolayovych"));
    }

    #[test]
    fn email_line_excluded() {
        assert_eq!(extract("Ivan Petrenko ivan@example.com"), None);
    }

    #[test]
    fn date_line_excluded() {
        assert_eq!(extract("Experience 2020-2023"), None);
        assert_eq!(extract("Народився 15.03.1990 Іван Петренко"), None);
    }

    #[test]
    fn digit_heavy_line_excluded() {
        assert_eq!(extract("Петро Іванов 123456789012345"), None);
    }

    #[test]
    fn stop_word_prefix_excluded() {
        assert_eq!(extract("Резюме Спеціаліста Відділу"), None);
    }

    #[test]
    fn stop_word_prefix_kept_when_role_present() {
        // "досвід" starts the line, but the role keyword keeps it eligible
        let text = "Досвідчений менеджер Ковальчук Олена";
        assert_eq!(extract(text).as_deref(), Some("Ковальчук Олена"));
    }

    #[test]
    fn all_profession_words_rejected() {
        assert_eq!(extract("Менеджер Консультант"), None);
    }

    #[test]
    fn empty_text() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("   \n\n  "), None);
    }
}
