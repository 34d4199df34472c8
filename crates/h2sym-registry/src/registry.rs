use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::category::Category;
use crate::error::{RegistryError, Result};
use crate::table::CodeTable;

/// The table backing `category`.
pub fn table(category: Category) -> &'static CodeTable {
    category.table()
}

/// Canonical name for `code` in `category`.
///
/// Codes outside the table return [`RegistryError::UnrecognizedCode`]; this
/// is expected for extension and reserved codes, and never replaced by a
/// placeholder name.
pub fn lookup(category: Category, code: u32) -> Result<&'static str> {
    match category.table().get(code) {
        Some(name) => Ok(name),
        None => {
            trace!(%category, code, "unrecognized code");
            Err(RegistryError::UnrecognizedCode { category, code })
        }
    }
}

/// Code whose canonical name is exactly `name` in `category`.
pub fn code_for(category: Category, name: &str) -> Result<u32> {
    match category.table().code_of(name) {
        Some(code) => Ok(code),
        None => {
            trace!(%category, name, "unrecognized name");
            Err(RegistryError::UnrecognizedName {
                category,
                name: name.to_string(),
            })
        }
    }
}

/// Resolve `code` into a [`Symbol`] that can always be displayed.
pub fn describe(category: Category, code: u32) -> Symbol {
    Symbol {
        category,
        code,
        name: category.table().get(code),
    }
}

/// A code paired with its canonical name, when it has one.
///
/// Displays as the name, or as `UNKNOWN(0x..)` with the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symbol {
    category: Category,
    code: u32,
    name: Option<&'static str>,
}

impl Symbol {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    /// Canonical name, or `None` for an unrecognized code.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn is_known(&self) -> bool {
        self.name.is_some()
    }

    /// Convert into the strict form returned by [`lookup`].
    pub fn into_result(self) -> Result<&'static str> {
        self.name.ok_or(RegistryError::UnrecognizedCode {
            category: self.category,
            code: self.code,
        })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "UNKNOWN(0x{:x})", self.code),
        }
    }
}
