// Category Code Deriver - the CCC segment of the accession code
//
// A fixed table maps the canonical category values (plus legacy display
// synonyms) to their 3-letter codes; anything else falls back to the first
// three letters of the normalized label. The deriver is total: it never
// fails, whatever the label.

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_key, pad_code};

/// Category codes are always exactly 3 uppercase ASCII letters.
pub const CATEGORY_CODE_LEN: usize = 3;

// ============================================================================
// CATEGORY CODE TABLE
// ============================================================================

/// Normalized label → 3-letter code. Keys are uppercase and accent-stripped.
/// Covers the canonical enumeration plus legacy synonyms still present in
/// older records ("Talla", "Ornamentos", "Telas", plural forms).
const CATEGORY_CODES: [(&str, &str); 20] = [
    ("PINTURA", "PIN"),
    ("ESCULTURA", "ESC"),
    ("ORFEBRERIA", "ORF"),
    ("TEXTIL", "TEX"),
    ("DOCUMENTO", "DOC"),
    ("LIBRO", "LIB"),
    ("MOBILIARIO", "MOB"),
    ("INSTRUMENTO_MUSICAL", "INS"),
    ("INSTRUMENTOMUSICAL", "INS"),
    ("RETABLO", "RET"),
    ("IMAGINERIA", "IMA"),
    ("VITRAL", "VIT"),
    ("CERAMICA", "CER"),
    ("METALURGIA", "MET"),
    ("OTRO", "OTR"),
    ("OTROS", "OTR"),
    ("TALLA", "TAL"),
    ("ORNAMENTOS", "ORN"),
    ("TELAS", "TEL"),
    ("DOCUMENTOS", "DOC"),
];

/// Derive the 3-letter category code from a free-form label.
///
/// Table hit wins; otherwise the first 3 ASCII letters of the normalized
/// label, right-padded with 'X'. Total function: never errors, always
/// returns exactly 3 uppercase ASCII letters.
///
/// "Orfebrería" → "ORF" (table), "Vidriera" → "VID" (fallback)
pub fn derive_category_code(label: &str) -> String {
    let key = normalize_key(label.trim());

    for (name, code) in CATEGORY_CODES {
        if name == key {
            return code.to_string();
        }
    }

    let fallback: String = key
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(CATEGORY_CODE_LEN)
        .collect();
    pad_code(fallback, CATEGORY_CODE_LEN)
}

// ============================================================================
// CANONICAL CATEGORY ENUMERATION
// ============================================================================

/// The canonical object categories accepted by the catalog's validation
/// layer. The deriver itself stays label-based so legacy and free-form
/// labels keep working; this enum is the typed surface for new records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectCategory {
    Pintura,
    Escultura,
    Orfebreria,
    Textil,
    Documento,
    Libro,
    Mobiliario,
    InstrumentoMusical,
    Retablo,
    Imagineria,
    Vitral,
    Ceramica,
    Metalurgia,
    Otro,
}

impl ObjectCategory {
    pub const ALL: [ObjectCategory; 14] = [
        ObjectCategory::Pintura,
        ObjectCategory::Escultura,
        ObjectCategory::Orfebreria,
        ObjectCategory::Textil,
        ObjectCategory::Documento,
        ObjectCategory::Libro,
        ObjectCategory::Mobiliario,
        ObjectCategory::InstrumentoMusical,
        ObjectCategory::Retablo,
        ObjectCategory::Imagineria,
        ObjectCategory::Vitral,
        ObjectCategory::Ceramica,
        ObjectCategory::Metalurgia,
        ObjectCategory::Otro,
    ];

    /// Canonical wire form (snake_case, unaccented).
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectCategory::Pintura => "pintura",
            ObjectCategory::Escultura => "escultura",
            ObjectCategory::Orfebreria => "orfebreria",
            ObjectCategory::Textil => "textil",
            ObjectCategory::Documento => "documento",
            ObjectCategory::Libro => "libro",
            ObjectCategory::Mobiliario => "mobiliario",
            ObjectCategory::InstrumentoMusical => "instrumento_musical",
            ObjectCategory::Retablo => "retablo",
            ObjectCategory::Imagineria => "imagineria",
            ObjectCategory::Vitral => "vitral",
            ObjectCategory::Ceramica => "ceramica",
            ObjectCategory::Metalurgia => "metalurgia",
            ObjectCategory::Otro => "otro",
        }
    }

    /// The 3-letter code for this category.
    pub fn code(&self) -> &'static str {
        match self {
            ObjectCategory::Pintura => "PIN",
            ObjectCategory::Escultura => "ESC",
            ObjectCategory::Orfebreria => "ORF",
            ObjectCategory::Textil => "TEX",
            ObjectCategory::Documento => "DOC",
            ObjectCategory::Libro => "LIB",
            ObjectCategory::Mobiliario => "MOB",
            ObjectCategory::InstrumentoMusical => "INS",
            ObjectCategory::Retablo => "RET",
            ObjectCategory::Imagineria => "IMA",
            ObjectCategory::Vitral => "VIT",
            ObjectCategory::Ceramica => "CER",
            ObjectCategory::Metalurgia => "MET",
            ObjectCategory::Otro => "OTR",
        }
    }

    /// Parse a label into a canonical category, accent- and
    /// case-insensitively. Returns None for anything non-canonical.
    pub fn parse(label: &str) -> Option<Self> {
        let key = normalize_key(label.trim());
        Self::ALL
            .into_iter()
            .find(|category| normalize_key(category.as_str()) == key)
    }
}

// ============================================================================
// TESTS
// ============================================================================
