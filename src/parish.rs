// Parish Code Deriver - the PPP segment of the accession code
//
// Production scheme: one initial per significant word of the parish name
// ("Santa María la Mayor" → SMM). A legacy scheme (two letters of the name
// plus the locality initial) minted some historical codes and is kept as a
// separate function; the two are never mixed, because swapping schemes
// would change what the three letters of an already-persisted code mean.

use serde::{Deserialize, Serialize};

use crate::normalize::{initial, pad_code, significant_words, strip_diacritics, words};

/// Parish codes are always exactly 3 uppercase ASCII letters.
pub const PARISH_CODE_LEN: usize = 3;

// ============================================================================
// PARISH IDENTITY
// ============================================================================

/// Human-readable identity of a parish.
///
/// `name` is expected to be non-empty after trimming; the deriver still
/// degenerates to "XXX" rather than failing when it is not. `location`
/// only matters to the legacy scheme, which uses its first letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParishIdentity {
    pub name: String,
    pub location: Option<String>,
}

impl ParishIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        ParishIdentity {
            name: name.into(),
            location: None,
        }
    }

    pub fn with_location(name: impl Into<String>, location: impl Into<String>) -> Self {
        ParishIdentity {
            name: name.into(),
            location: Some(location.into()),
        }
    }
}

// ============================================================================
// CODE DERIVATION
// ============================================================================

/// Derive the 3-letter parish code from the parish name.
///
/// One initial per significant word (stop-words filtered); when fewer than
/// 3 letters result, the initials of ALL words are used instead. The code
/// is truncated to 3 and right-padded with 'X'. Total: any input yields
/// exactly 3 uppercase ASCII letters.
///
/// "Santa María la Mayor" → "SMM"
/// "San José"             → "SJX"
/// "Parroquia de Galera"  → "PDG" (all-words fallback)
pub fn derive_parish_code(identity: &ParishIdentity) -> String {
    let name = identity.name.trim();

    let mut code: String = significant_words(name)
        .iter()
        .filter_map(|w| initial(w))
        .collect();

    // Too few significant initials: fall back to every word, stop-words included
    if code.len() < PARISH_CODE_LEN {
        code = words(name).iter().filter_map(|w| initial(w)).collect();
    }

    code.truncate(PARISH_CODE_LEN);
    pad_code(code, PARISH_CODE_LEN)
}

/// Legacy parish-code scheme: 2 letters from the name + locality initial.
///
/// One significant word → its first 2 letters; two or more → the initials
/// of the first two; none → the first 2 letters of the raw name. The third
/// letter is the locality initial, or 'X' when no locality is known.
/// Kept for interpreting historical codes; the generator pipeline does not
/// call this.
pub fn derive_parish_code_legacy(identity: &ParishIdentity) -> String {
    let name = identity.name.trim();
    let significant = significant_words(name);

    let name_code: String = match significant.len() {
        0 => first_letters(name, 2),
        1 => first_letters(significant[0], 2),
        _ => [initial(significant[0]), initial(significant[1])]
            .into_iter()
            .flatten()
            .collect(),
    };

    let mut code = pad_code(name_code, PARISH_CODE_LEN - 1);
    let locality_initial = identity
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .and_then(initial)
        .unwrap_or('X');
    code.push(locality_initial);
    code
}

/// First `n` ASCII letters of the accent-stripped input, uppercased.
fn first_letters(input: &str, n: usize) -> String {
    strip_diacritics(input)
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(n)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_word_initials() {
        let parish = ParishIdentity::new("Santa María la Mayor");
        assert_eq!(derive_parish_code(&parish), "SMM");
    }

    #[test]
    fn test_stop_words_filtered() {
        // "de" and "la" contribute nothing when enough significant words remain
        let parish = ParishIdentity::new("Nuestra Señora de la Asunción");
        assert_eq!(derive_parish_code(&parish), "NSA");
    }

    #[test]
    fn test_truncated_to_three() {
        let parish = ParishIdentity::new("San Pedro y San Pablo");
        assert_eq!(derive_parish_code(&parish), "SPS");
    }

    #[test]
    fn test_two_words_padded() {
        assert_eq!(derive_parish_code(&ParishIdentity::new("San José")), "SJX");
        assert_eq!(derive_parish_code(&ParishIdentity::new("Cristo Rey")), "CRX");
        assert_eq!(derive_parish_code(&ParishIdentity::new("Santa Ana")), "SAX");
    }

    #[test]
    fn test_all_words_fallback() {
        // Only 2 significant initials, so every word contributes one
        let parish = ParishIdentity::new("Parroquia de Galera");
        assert_eq!(derive_parish_code(&parish), "PDG");

        let parish = ParishIdentity::new("Virgen del Carmen");
        assert_eq!(derive_parish_code(&parish), "VDC");
    }

    #[test]
    fn test_degenerate_names() {
        assert_eq!(derive_parish_code(&ParishIdentity::new("")), "XXX");
        assert_eq!(derive_parish_code(&ParishIdentity::new("   ")), "XXX");
        assert_eq!(derive_parish_code(&ParishIdentity::new("de la")), "DLX");
    }

    #[test]
    fn test_non_latin_name_degenerates() {
        // No ASCII letters anywhere: code degenerates instead of panicking
        assert_eq!(derive_parish_code(&ParishIdentity::new("山寺 1234")), "XXX");
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let parish = ParishIdentity::new("Inmaculada Concepción");
        let first = derive_parish_code(&parish);
        let second = derive_parish_code(&parish);
        assert_eq!(first, second);
        assert_eq!(first, "ICX");
    }

    #[test]
    fn test_always_three_uppercase_ascii() {
        let inputs = ["", "  ", "de", "Santiago Apóstol", "a b c d e f", "ñ"];
        for input in inputs {
            let code = derive_parish_code(&ParishIdentity::new(input));
            assert_eq!(code.len(), 3, "input {:?} gave {:?}", input, code);
            assert!(code.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_legacy_two_letter_plus_locality() {
        let parish = ParishIdentity::with_location("Santa María la Mayor", "Huéscar");
        assert_eq!(derive_parish_code_legacy(&parish), "SMH");

        let parish = ParishIdentity::with_location("San Pedro", "Alcalá");
        assert_eq!(derive_parish_code_legacy(&parish), "SPA");
    }

    #[test]
    fn test_legacy_single_significant_word() {
        // One significant word: its first two letters
        let parish = ParishIdentity::with_location("Santiago", "Baza");
        assert_eq!(derive_parish_code_legacy(&parish), "SAB");
    }

    #[test]
    fn test_legacy_missing_locality() {
        let parish = ParishIdentity::new("San José");
        assert_eq!(derive_parish_code_legacy(&parish), "SJX");
    }

    #[test]
    fn test_legacy_only_stop_words_uses_raw_name() {
        let parish = ParishIdentity::with_location("de la", "Galera");
        assert_eq!(derive_parish_code_legacy(&parish), "DEG");
    }
}
