use std::collections::HashSet;
use std::sync::LazyLock;

/// Document-structure vocabulary that disqualifies a line (prefix match) or a
/// word (exact match) from being part of a name. Month and weekday stems cover
/// Ukrainian, Russian and English.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "резюме", "curriculum", "vitae",
        "email", "www", "http", "https",
        "розглядає", "рассматривает",
        // month stems (ru)
        "январ", "феврал", "март", "апрел", "май", "июн", "июл", "август",
        "сентябр", "октябр", "ноябр", "декабр",
        // months, genitive (uk)
        "січня", "лютого", "березня", "квітня", "травня", "червня", "липня",
        "серпня", "вересня", "жовтня", "листопада", "грудня",
        // months (en)
        "january", "february", "march", "april", "may", "june", "july",
        "august", "september", "october", "november", "december",
        // weekdays (ru)
        "понедельник", "вторник", "среда", "четверг", "пятница", "суббота",
        "воскресенье",
        // weekdays (uk)
        "понеділок", "вівторок", "середа", "четвер", "п'ятниця", "субота",
        "неділя",
        // education institutions and section headers
        "university", "університет", "інститут", "institute", "академія",
        "academy", "школа", "school",
        "освіта", "образование", "education", "досвід", "опыт", "experience",
    ]
    .into_iter()
    .collect()
});

/// Job-role words. A name often sits next to a role, so these never exclude a
/// line outright; they only adjust scoring and reject all-role "names".
pub const PROFESSION_WORDS: &[&str] = &[
    "менеджер", "manager", "адміністратор", "administrator", "продавець",
    "продавец", "консультант", "спеціаліст", "специалист", "specialist",
    "помічник", "помощник", "оператор", "operator", "директор", "director",
    "координатор", "рекрутер", "recruiter",
];

/// Combined Ukrainian/Russian/English role vocabulary for keyword-based title
/// detection (substring match against a lowercased line or word).
pub const TITLE_KEYWORDS: &[&str] = &[
    // uk
    "менеджер", "адміністратор", "продавець", "консультант", "спеціаліст",
    "помічник", "оператор", "координатор", "асистент", "керівник",
    "бариста", "офіс-менеджер", "секретар", "рекрутер",
    // ru
    "администратор", "продавец", "специалист", "помощник", "ассистент",
    "руководитель", "офис-менеджер", "секретарь",
    // en
    "manager", "administrator", "seller", "consultant", "specialist",
    "assistant", "operator", "coordinator", "director", "supervisor",
    "barista", "recruiter", "designer", "developer", "engineer",
];

/// Case-insensitive exact membership in the stop-word set.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word.to_lowercase().as_str())
}

/// True if the (lowercased) line mentions any job-role word.
pub fn mentions_profession(line_lower: &str) -> bool {
    PROFESSION_WORDS.iter().any(|w| line_lower.contains(w))
}
