use std::sync::LazyLock;

use regex::Regex;

use super::vocab;

/// Explicit field captions only appear near the top of a resume.
const LABEL_SEARCH_CHARS: usize = 4000;
const FALLBACK_LINES: usize = 40;

/// Label patterns in fixed priority order; the first match wins, no scoring.
/// Russian, Ukrainian and English phrasings of "desired position".
static LABEL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:желаемая|бажана)\s+(?:должность|посада)[:\s\-—]*(.+?)(?:\n|$)",
        r"(?i)(?:должность|посада)[:\s\-—]+(.+?)(?:\n|$)",
        r"(?i)(?:вакансия|вакансія)[:\s\-—]+(.+?)(?:\n|$)",
        r"(?i)(?:розглядає|рассматривает)\s+(?:посади|должности)[:\s\-—]*(.+?)(?:\n|$)",
        r"(?i)(?:позиция|позиція)[:\s\-—]+(.+?)(?:\n|$)",
        r"(?i)position[:\s\-—]+(.+?)(?:\n|$)",
        r"(?i)objective[:\s\-—]+(.+?)(?:\n|$)",
        r"(?i)(?:цель|ціль)[:\s\-—]+(.+?)(?:\n|$)",
        r"(?i)(?:ищу|шукаю)\s+(?:работу|роботу)[:\s\-—]*(.+?)(?:\n|$)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static TRAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_\-—.]+$").unwrap());
static ID_TAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\d{6,}$").unwrap());
static TAIL_PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,;:.]+$").unwrap());
static NOISY_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@|https?://|www\.|\d{4}|\.com|\.ua|\.ru").unwrap());

// Filename cleanup
static EXT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.[^.]+$").unwrap());
static LONG_DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{10,}\b").unwrap());
static FILE_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2,4}[-./]\d{1,2}[-./]\d{2,4}").unwrap());
static SEP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_\-—,.]+").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static FILE_MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"(?i)workua", r"(?i)work\.ua", r"(?i)резюме", r"(?i)resume", r"(?i)\bcv\b"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

/// Extract the desired job title from document text: explicit labels first,
/// keyword vocabulary fallback second.
pub fn from_text(text: &str) -> Option<String> {
    let head = char_prefix(text, LABEL_SEARCH_CHARS);

    for re in LABEL_PATTERNS.iter() {
        let Some(caps) = re.captures(head) else {
            continue;
        };
        let mut title = caps[1].trim().to_string();
        title = TRAIL_RE.replace(&title, "").trim().to_string();
        title = title.split('\n').next().unwrap_or("").trim().to_string();
        title = ID_TAIL_RE.replace(&title, "").to_string();
        if (3..=200).contains(&title.chars().count()) {
            return Some(title);
        }
    }

    keyword_fallback(text)
}

/// Scan leading lines for role keywords and reconstruct a title phrase around
/// the first hit. Words before the first keyword (usually a name) are dropped;
/// everything after it is kept greedily.
fn keyword_fallback(text: &str) -> Option<String> {
    let lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    for line in lines.take(FALLBACK_LINES) {
        if line.chars().count() > 150 || NOISY_LINE_RE.is_match(line) {
            continue;
        }
        let lower = line.to_lowercase();
        if !vocab::TITLE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            continue;
        }

        // Everything from the first keyword-bearing word to the end of the
        // line belongs to the title; leading words (usually a name) do not.
        let cleaned = ID_TAIL_RE.replace(line, "").to_string();
        let mut kept: Vec<&str> = Vec::new();
        let mut hit = false;
        for word in cleaned.split_whitespace() {
            if !hit {
                let word_lower = word.to_lowercase();
                hit = vocab::TITLE_KEYWORDS.iter().any(|kw| word_lower.contains(kw));
            }
            if hit {
                kept.push(word);
            }
        }

        if !kept.is_empty() {
            let phrase = TAIL_PUNCT_RE
                .replace(kept.join(" ").trim(), "")
                .trim()
                .to_string();
            if (5..=150).contains(&phrase.chars().count()) {
                return Some(phrase);
            }
        }

        // Reconstruction came out too short or too long: take the whole line
        let whole = cleaned.trim();
        if (5..=100).contains(&whole.chars().count()) {
            return Some(whole.to_string());
        }
    }

    None
}

/// Title guess from the filename, used by the caller only when text-based
/// extraction found nothing. Digit-only stems carry no information.
pub fn from_filename(filename: &str) -> Option<String> {
    let stem = EXT_RE.replace(filename, "").to_string();
    if !stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut name = stem.replace("%20", " ");
    for re in FILE_MARKERS.iter() {
        name = re.replace_all(&name, " ").to_string();
    }
    name = LONG_DIGITS_RE.replace_all(&name, " ").to_string();
    name = FILE_DATE_RE.replace_all(&name, " ").to_string();
    name = SEP_RE.replace_all(&name, " ").to_string();
    let name = WS_RE.replace_all(&name, " ").trim().to_string();

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Char-boundary-safe prefix of at most `n` characters.
fn char_prefix(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

// ── Tests ──
