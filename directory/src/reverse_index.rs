//! Number-keyed secondary index for reverse lookup.
//!
//! Each indexed number maps to the set of primary-store locations holding
//! it. Locations order by (name, slot), which is the primary store's own
//! iteration order, so indexed lookups yield records in the same order as a
//! full scan would.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::btree_set;

use crate::types::PhoneType;

/// Location of one record in the primary store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct EntryRef {
    /// Normalized name the record is stored under
    pub name: String,
    /// Position of the record among the listings for `name`
    pub slot: usize,
    pub phone_type: PhoneType,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ReverseIndex {
    by_number: BTreeMap<String, BTreeSet<EntryRef>>,
    len: usize,
}

impl ReverseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `name[slot]` holds `number`.
    pub fn insert(&mut self, number: &str, name: &str, slot: usize, phone_type: PhoneType) {
        self.by_number
            .entry(number.to_string())
            .or_default()
            .insert(EntryRef {
                name: name.to_string(),
                slot,
                phone_type,
            });
        self.len += 1;
    }

    /// Stored number and the locations holding it.
    pub fn get(&self, number: &str) -> Option<(&str, btree_set::Iter<'_, EntryRef>)> {
        self.by_number
            .get_key_value(number)
            .map(|(number, refs)| (number.as_str(), refs.iter()))
    }

    /// Total number of indexed locations
    pub const fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_locations_by_number_in_store_order() {
        let mut index = ReverseIndex::new();
        index.insert("111111111", "hello", 0, PhoneType::Home);
        index.insert("111111111", "a1a1a", 0, PhoneType::Home);
        index.insert("222222222", "ababa", 0, PhoneType::Office);
        index.insert("111111111", "aaaaa", 0, PhoneType::Home);

        assert_eq!(index.len(), 4);
        assert!(index.get("333333333").is_none());

        let (number, refs) = index.get("111111111").unwrap();
        assert_eq!(number, "111111111");
        let names: Vec<&str> = refs.map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a1a1a", "aaaaa", "hello"]);
    }

    #[test]
    fn numbers_are_matched_exactly() {
        let mut index = ReverseIndex::new();
        index.insert("+91 5566778899", "chandresh", 0, PhoneType::Cell);

        assert!(index.get("915566778899").is_none());
        assert!(index.get("+91 5566778899").is_some());
    }
}
