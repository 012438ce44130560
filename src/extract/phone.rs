use std::sync::LazyLock;

use regex::Regex;

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Digit-sequence patterns, most specific first. A candidate may be matched by
/// several patterns; duplicates are dropped by normalized value, so the list
/// order decides candidate order, not the match span.
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    // One digit with optional separators in front of it.
    let d = r"[\s\-().]*\d";
    [
        // +380XXXXXXXXX with arbitrary separators
        format!(r"\+\s?380{}", d.repeat(9)),
        // 380XXXXXXXXX without the +
        format!(r"\b380{}", d.repeat(9)),
        // 0XXXXXXXXX national format
        format!(r"\b0{}", d.repeat(9)),
        // any 10 digits with separators
        format!(r"\b\d{}", d.repeat(9)),
        // 10 contiguous digits
        r"\b\d{10}\b".to_string(),
        // 9 contiguous digits (leading zero possibly lost)
        r"\b\d{9}\b".to_string(),
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Normalize a raw match into a canonical phone string, or reject it.
///
/// Keeps digits plus at most one leading `+`, then applies format rules in
/// precedence order: 10 digits starting with 0 stay national, 12 digits
/// starting with 380 gain a `+`, 9 digits gain a leading 0, any other
/// 9-13-digit cleanup passes through unchanged.
pub fn normalize(raw: &str) -> Option<String> {
    let mut kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    while kept.contains("++") {
        kept = kept.replace("++", "+");
    }
    // `+` is only meaningful as the very first character
    if kept.len() > 1 && kept[1..].contains('+') {
        let first = &kept[..1];
        let rest: String = kept[1..].chars().filter(|c| *c != '+').collect();
        kept = format!("{first}{rest}");
    }

    let core: String = kept.chars().filter(|c| c.is_ascii_digit()).collect();
    match core.len() {
        10 if core.starts_with('0') => Some(core),
        12 if core.starts_with("380") => Some(format!("+{core}")),
        9 => Some(format!("0{core}")),
        9..=13 => Some(kept),
        _ => None,
    }
}

/// False-positive check on the digit core: year-like 8-digit runs, runs of a
/// single repeated digit, and over-long document/ID numbers.
fn is_false_positive(core: &str) -> bool {
    if core.len() == 8 && (core.starts_with("19") || core.starts_with("20")) {
        return true;
    }
    let mut chars = core.chars();
    if let Some(first) = chars.next() {
        if chars.all(|c| c == first) {
            return true;
        }
    }
    core.len() > 13
}

/// All normalized phone candidates, deduplicated, in pattern-priority order.
pub fn find_all(text: &str) -> Vec<String> {
    let text = WS_RE.replace_all(text, " ");
    let mut found: Vec<String> = Vec::new();

    for re in PATTERNS.iter() {
        for m in re.find_iter(&text) {
            let Some(phone) = normalize(m.as_str()) else {
                continue;
            };
            if found.contains(&phone) {
                continue;
            }
            let core: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
            if is_false_positive(&core) {
                continue;
            }
            found.push(phone);
        }
    }

    found
}

/// Single best candidate: recognized national/international form first
/// (`+380...` or `0...`), otherwise the first candidate found.
pub fn best(text: &str) -> Option<String> {
    let phones = find_all(text);
    phones
        .iter()
        .find(|p| p.starts_with("+380") || p.starts_with('0'))
        .or_else(|| phones.first())
        .cloned()
}

// ── Tests ──
