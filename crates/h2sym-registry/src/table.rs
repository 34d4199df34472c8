use crate::category::Category;

/// An immutable code-to-name table for one category.
///
/// Entries are stored in ascending code order so lookups can binary search.
#[derive(Debug)]
pub struct CodeTable {
    category: Category,
    entries: &'static [(u32, &'static str)],
}

impl CodeTable {
    pub(crate) const fn new(category: Category, entries: &'static [(u32, &'static str)]) -> Self {
        Self { category, entries }
    }

    /// The category this table names.
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Canonical name for `code`, if defined.
    pub fn get(&self, code: u32) -> Option<&'static str> {
        self.entries
            .binary_search_by_key(&code, |&(key, _)| key)
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Code whose canonical name is exactly `name`. Case-sensitive.
    pub fn code_of(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|&&(_, entry)| entry == name)
            .map(|&(code, _)| code)
    }

    /// Returns true if `code` is defined.
    pub fn contains(&self, code: u32) -> bool {
        self.get(code).is_some()
    }

    /// Number of defined codes.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(code, name)` pairs in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}
