// Text normalization helpers shared by the parish and category derivers
//
// Parish names and category labels arrive as accented Spanish text
// ("Orfebrería", "Nuestra Señora de la Asunción"). Every derived code is
// built from the accent-stripped form so the output stays plain ASCII.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Connector words that never contribute a letter to a derived code
/// (articles, prepositions, conjunctions common in parish names).
pub const STOP_WORDS: [&str; 10] = ["de", "la", "el", "los", "las", "y", "en", "del", "al", "a"];

/// Strip diacritics via NFD decomposition, dropping combining marks.
///
/// "María" → "Maria", "Huéscar" → "Huescar". Characters that do not
/// decompose to a base letter pass through unchanged.
pub fn strip_diacritics(input: &str) -> String {
    input.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Lookup-key form: accent-stripped and uppercased.
/// "Orfebrería" → "ORFEBRERIA".
pub fn normalize_key(input: &str) -> String {
    strip_diacritics(input).to_uppercase()
}

/// Stop-word check, case- and diacritic-insensitive.
pub fn is_stop_word(word: &str) -> bool {
    let folded = strip_diacritics(word).to_lowercase();
    STOP_WORDS.contains(&folded.as_str())
}

/// Whitespace tokenization with empty tokens discarded.
pub fn words(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

/// Tokens that survive stop-word filtering.
pub fn significant_words(input: &str) -> Vec<&str> {
    words(input).into_iter().filter(|w| !is_stop_word(w)).collect()
}

/// First usable initial of a word: the first ASCII letter after accent
/// stripping, uppercased. Returns None when the word carries no ASCII
/// letter at all (digits, punctuation, non-Latin scripts).
pub fn initial(word: &str) -> Option<char> {
    strip_diacritics(word)
        .chars()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
}

/// Right-pad a code with 'X' up to the requested width.
pub fn pad_code(mut code: String, width: usize) -> String {
    while code.len() < width {
        code.push('X');
    }
    code
}

// ============================================================================
// TESTS
// ============================================================================
