//! Keyword matching shared by the scrapers and the chat surface

/// Words ignored when turning a free-text question into search terms
const STOPWORDS: &[&str] = &[
    "a", "about", "an", "and", "any", "are", "can", "do", "does", "find", "for", "give", "help",
    "helps", "how", "i", "in", "is", "it", "list", "me", "my", "need", "of", "on", "or", "please",
    "show", "some", "that", "the", "to", "tool", "tools", "what", "which", "with", "you",
];

/// Case-insensitive keyword test.
///
/// Keywords of three characters or fewer must match a whole word so that
/// `ai` does not fire on "email" or `api` on "capital".
pub fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    let haystack = haystack.to_lowercase();
    let keyword = keyword.to_lowercase();

    if keyword.chars().count() <= 3 {
        words(&haystack).any(|w| w == keyword)
    } else {
        haystack.contains(&keyword)
    }
}

/// True when any keyword matches
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| contains_keyword(haystack, k))
}

/// Lower-cased search terms with stopwords removed
pub fn terms(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut out: Vec<String> = Vec::new();
    for word in words(&lower) {
        if word.len() < 2 || STOPWORDS.contains(&word) {
            continue;
        }
        if !out.iter().any(|w| w == word) {
            out.push(word.to_string());
        }
    }
    out
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}
