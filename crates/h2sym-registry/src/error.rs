use crate::category::Category;

/// Errors returned by registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The code has no entry in the category's table.
    ///
    /// Peers may send codes from extensions or future revisions, so this is
    /// an ordinary outcome; callers usually fall back to the raw value.
    #[error("unrecognized {category} code {code} (0x{code:x})")]
    UnrecognizedCode { category: Category, code: u32 },

    /// No entry in the category's table carries this exact name.
    #[error("unrecognized {category} name {name:?}")]
    UnrecognizedName { category: Category, name: String },

    /// The category label could not be parsed.
    #[error("unknown category {0:?} (expected frame-type, settings-parameter or error-code)")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
