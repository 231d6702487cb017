// Patrimonio - Accession Code Generation for Parish Inventory Catalogs
// Derives the PPP-YYYY-CCC-NNNN inventory number of a catalogued item:
// parish code, year, category code, per-parish sequence number.

pub mod normalize;
pub mod parish;
pub mod category;
pub mod sequence;
pub mod generator;

// Re-export commonly used types
pub use category::{derive_category_code, ObjectCategory};
pub use generator::{
    assemble_code, current_year, generate_accession_code, generate_accession_code_for_year,
    AccessionCode,
};
pub use parish::{derive_parish_code, derive_parish_code_legacy, ParishIdentity};
pub use sequence::{
    allocate_sequence, format_sequence, InMemoryCounter, ItemCounter, SequenceContext,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
