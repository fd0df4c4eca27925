//! Read-only, ordered splice/insert material for the `Dictionary` and
//! `DictionaryInsert` operators.
//!
//! The source walks an intrusive linked list to reach the `i`-th entry; this
//! re-architects that as a plain indexable container, addressable in `O(1)`.

/// An ordered list of byte strings, indexable by position.
///
/// Cheap to share across concurrent run states: it holds no interior
/// mutability, so `&Dictionary` is `Sync` whenever `Vec<Vec<u8>>` is.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<Vec<u8>>,
}

impl Dictionary {
    /// Builds a dictionary from an ordered list of byte strings. Order is
    /// preserved and is what `get`'s index addresses.
    pub fn new(entries: Vec<Vec<u8>>) -> Self {
        Self { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if there are no entries; the `Dictionary`/`DictionaryInsert`
    /// operators fall back to `Bit` in this case.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `i`-th entry's bytes. Panics if `i >= len()` — callers only ever
    /// index with `i < len()` drawn from `rnd_get(0, len()-1)`.
    pub fn get(&self, i: usize) -> &[u8] {
        &self.entries[i]
    }
}

impl From<Vec<Vec<u8>>> for Dictionary {
    fn from(entries: Vec<Vec<u8>>) -> Self {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        let d = Dictionary::default();
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
    }

    #[test]
    fn indexes_in_order() {
        let d = Dictionary::new(vec![b"AAA".to_vec(), b"BB".to_vec()]);
        assert_eq!(d.len(), 2);
        assert_eq!(d.get(0), b"AAA");
        assert_eq!(d.get(1), b"BB");
    }
}
