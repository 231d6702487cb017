// Accession Code Generator - assembles PPP-YYYY-CCC-NNNN
//
// Pure pipeline: derive parish code, derive category code, allocate the
// sequence (the one step that touches the outside world), concatenate.
// Uniqueness under concurrent generation for the same parish is NOT
// guaranteed here: two callers can observe the same prior count and mint
// the same sequence. The persistence layer must enforce uniqueness (a
// unique constraint with conflict retry, or a per-parish lock).

use anyhow::Result;
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::derive_category_code;
use crate::parish::{derive_parish_code, ParishIdentity};
use crate::sequence::{allocate_sequence, ItemCounter};

// ============================================================================
// ACCESSION CODE
// ============================================================================

/// The human-readable accession identifier of a catalogued item:
/// `PPP-YYYY-CCC-NNNN` (parish, year, category, sequence).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessionCode(String);

impl AccessionCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AccessionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// ASSEMBLY
// ============================================================================

/// The current calendar year, local time.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Concatenate the four segments with hyphens. No re-validation: each
/// segment is already shaped by its own deriver.
pub fn assemble_code(
    parish_code: &str,
    category_code: &str,
    sequence: &str,
    year: i32,
) -> AccessionCode {
    AccessionCode(format!(
        "{}-{:04}-{}-{}",
        parish_code, year, category_code, sequence
    ))
}

// ============================================================================
// GENERATION
// ============================================================================

/// Generate the accession code for the next item of a parish, dated to the
/// current year.
///
/// `parish_id` is the opaque identifier the counting collaborator is keyed
/// by; `identity` is the display identity the parish code is derived from.
/// The only failure mode is the count query, which propagates untouched.
pub fn generate_accession_code(
    identity: &ParishIdentity,
    parish_id: &str,
    category_label: &str,
    counter: &dyn ItemCounter,
) -> Result<AccessionCode> {
    generate_accession_code_for_year(identity, parish_id, category_label, counter, current_year())
}

/// Same pipeline with an explicit year, for backdated records and tests.
pub fn generate_accession_code_for_year(
    identity: &ParishIdentity,
    parish_id: &str,
    category_label: &str,
    counter: &dyn ItemCounter,
    year: i32,
) -> Result<AccessionCode> {
    let parish_code = derive_parish_code(identity);
    let category_code = derive_category_code(category_label);
    let sequence = allocate_sequence(counter, parish_id)?;

    Ok(assemble_code(&parish_code, &category_code, &sequence, year))
}

// ============================================================================
// TESTS
// ============================================================================
