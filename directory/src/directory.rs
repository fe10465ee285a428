//! The phone directory store.
//!
//! Records live in a `BTreeMap` keyed by normalized name. Every listing for
//! a name sits under that one key, so the records for a name are contiguous
//! in iteration order and lookup by name is a single O(log n) seek followed
//! by a walk over the matches.
//!
//! Lookup by number is a linear scan unless the directory was built with
//! [`DirectoryConfig::reverse_index`], in which case a number-keyed
//! secondary index is maintained on every insert.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::collections::btree_set;
use std::iter::Enumerate;
use std::iter::FusedIterator;
use std::iter::Zip;
use std::ops::Bound;
use std::ops::RangeFrom;
use std::slice;

use tracing::debug;
use tracing::warn;

use crate::error::DirectoryError;
use crate::error::Result;
use crate::reverse_index::EntryRef;
use crate::reverse_index::ReverseIndex;
use crate::types::OwnedRecord;
use crate::types::PhoneType;
use crate::types::Record;
use crate::types::normalize_name;

/// Options for building a [`Directory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Maintain a number-keyed index so reverse lookup is O(log n + m)
    pub reverse_index: bool,
}

/// Number and type stored under a name.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Listing {
    number: String,
    phone_type: PhoneType,
}

impl Listing {
    fn record<'a>(&'a self, name: &'a str) -> Record<'a> {
        Record {
            name,
            number: &self.number,
            phone_type: self.phone_type,
        }
    }
}

/// In-memory phone directory.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    config: DirectoryConfig,
    entries: BTreeMap<String, Vec<Listing>>,
    len: usize,
    reverse_index: Option<ReverseIndex>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DirectoryConfig) -> Self {
        Self {
            config,
            entries: BTreeMap::new(),
            len: 0,
            reverse_index: config.reverse_index.then(ReverseIndex::new),
        }
    }

    pub const fn config(&self) -> DirectoryConfig {
        self.config
    }

    pub const fn reverse_index_enabled(&self) -> bool {
        self.reverse_index.is_some()
    }

    /// Number of stored records
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add a record. The name is stored lowercased; duplicates of both name
    /// and number are kept.
    pub fn insert(&mut self, name: &str, number: &str, phone_type: PhoneType) {
        let key = normalize_name(name);
        debug!(name = %key, number, phone_type = %phone_type, "Adding record to directory");

        let slot = self.entries.get(&key).map_or(0, Vec::len);
        if let Some(index) = self.reverse_index.as_mut() {
            index.insert(number, &key, slot, phone_type);
        }

        self.entries.entry(key).or_default().push(Listing {
            number: number.to_string(),
            phone_type,
        });
        self.len += 1;

        if let Some(index) = &self.reverse_index {
            debug_assert_eq!(index.len(), self.len, "reverse index out of sync");
        }
    }

    /// Add a record with the default type ([`PhoneType::Home`]).
    pub fn insert_default(&mut self, name: &str, number: &str) {
        self.insert(name, number, PhoneType::default());
    }

    pub fn insert_record(&mut self, record: &OwnedRecord) {
        self.insert(&record.name, &record.number, record.phone_type);
    }

    /// Add a record whose type is given as a raw numeric code.
    ///
    /// An out-of-range code leaves the directory unchanged, logs a warning
    /// and returns [`DirectoryError::InvalidPhoneType`].
    pub fn insert_code(&mut self, name: &str, number: &str, code: i64) -> Result<()> {
        let phone_type = PhoneType::from_code(code).inspect_err(|e| reject(name, number, e))?;
        self.insert(name, number, phone_type);
        Ok(())
    }

    /// Add a record whose type is given as text (`"cell"`, `"2"`, ...).
    pub fn insert_parsed(&mut self, name: &str, number: &str, phone_type: &str) -> Result<()> {
        let phone_type = phone_type
            .parse::<PhoneType>()
            .inspect_err(|e| reject(name, number, e))?;
        self.insert(name, number, phone_type);
        Ok(())
    }

    /// All records stored under `name`, compared case-insensitively.
    pub fn lookup_by_name(&self, name: &str) -> NameMatches<'_> {
        let key = normalize_name(name);
        match self.entries.get_key_value(key.as_str()) {
            Some((name, listings)) => NameMatches {
                name: name.as_str(),
                listings: listings.iter(),
            },
            None => NameMatches {
                name: "",
                listings: Default::default(),
            },
        }
    }

    /// Like [`lookup_by_name`](Self::lookup_by_name), paired with each
    /// record's 1-based position in [`dump_all`](Self::dump_all) order.
    pub fn lookup_by_name_positioned(&self, name: &str) -> Zip<RangeFrom<usize>, NameMatches<'_>> {
        let key = normalize_name(name);
        (preceding(&self.entries, &key) + 1..).zip(self.lookup_by_name(&key))
    }

    /// All records whose number equals `number` exactly.
    ///
    /// Records come out in [`dump_all`](Self::dump_all) order whether or not
    /// the reverse index is enabled.
    pub fn lookup_by_number(&self, number: &str) -> NumberMatches<'_> {
        let inner = match &self.reverse_index {
            Some(index) => NumberMatchesInner::Indexed(index.get(number)),
            None => NumberMatchesInner::Scan {
                records: self.dump_all(),
                number: number.to_string(),
            },
        };
        NumberMatches { inner }
    }

    /// Reverse lookup paired with 1-based positions in dump order.
    ///
    /// With the reverse index each match costs a count of the records filed
    /// under earlier names; without it this is a single linear scan.
    pub fn lookup_by_number_positioned(&self, number: &str) -> NumberPositions<'_> {
        let inner = match &self.reverse_index {
            Some(index) => NumberPositionsInner::Indexed {
                entries: &self.entries,
                matches: index.get(number),
            },
            None => NumberPositionsInner::Scan {
                records: self.dump_all().enumerate(),
                number: number.to_string(),
            },
        };
        NumberPositions { inner }
    }

    /// Every record, sorted by normalized name.
    pub fn dump_all(&self) -> Iter<'_> {
        Iter {
            groups: self.entries.iter(),
            current: None,
            remaining: self.len,
        }
    }
}

/// Number of records filed under keys that sort before `key`.
fn preceding(entries: &BTreeMap<String, Vec<Listing>>, key: &str) -> usize {
    entries
        .range::<str, _>((Bound::Unbounded, Bound::Excluded(key)))
        .map(|(_, listings)| listings.len())
        .sum()
}

fn reject(name: &str, number: &str, error: &DirectoryError) {
    warn!(name, number, error = %error, "Error specifying phone type, ignoring input");
}

impl<'a> IntoIterator for &'a Directory {
    type Item = Record<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.dump_all()
    }
}

/// Iterator over every record in a [`Directory`], in key order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    groups: btree_map::Iter<'a, String, Vec<Listing>>,
    current: Option<(&'a str, slice::Iter<'a, Listing>)>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Record<'a>> {
        loop {
            if let Some((name, listings)) = &mut self.current {
                if let Some(listing) = listings.next() {
                    self.remaining -= 1;
                    return Some(listing.record(*name));
                }
            }
            let (name, listings) = self.groups.next()?;
            self.current = Some((name.as_str(), listings.iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Records stored under one name.
#[derive(Debug, Clone)]
pub struct NameMatches<'a> {
    name: &'a str,
    listings: slice::Iter<'a, Listing>,
}

impl<'a> Iterator for NameMatches<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Record<'a>> {
        self.listings.next().map(|listing| listing.record(self.name))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.listings.size_hint()
    }
}

impl ExactSizeIterator for NameMatches<'_> {}
impl FusedIterator for NameMatches<'_> {}

/// Records whose number matches a query.
#[derive(Debug, Clone)]
pub struct NumberMatches<'a> {
    inner: NumberMatchesInner<'a>,
}

#[derive(Debug, Clone)]
enum NumberMatchesInner<'a> {
    Scan { records: Iter<'a>, number: String },
    Indexed(Option<(&'a str, btree_set::Iter<'a, EntryRef>)>),
}

impl<'a> Iterator for NumberMatches<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Record<'a>> {
        match &mut self.inner {
            NumberMatchesInner::Scan { records, number } => {
                records.find(|record| record.number == number.as_str())
            }
            NumberMatchesInner::Indexed(matches) => {
                let (number, refs) = matches.as_mut()?;
                let number: &'a str = *number;
                refs.next().map(|entry| Record {
                    name: &entry.name,
                    number,
                    phone_type: entry.phone_type,
                })
            }
        }
    }
}

impl FusedIterator for NumberMatches<'_> {}

/// Reverse lookup results paired with their positions.
#[derive(Debug, Clone)]
pub struct NumberPositions<'a> {
    inner: NumberPositionsInner<'a>,
}

#[derive(Debug, Clone)]
enum NumberPositionsInner<'a> {
    Scan {
        records: Enumerate<Iter<'a>>,
        number: String,
    },
    Indexed {
        entries: &'a BTreeMap<String, Vec<Listing>>,
        matches: Option<(&'a str, btree_set::Iter<'a, EntryRef>)>,
    },
}

impl<'a> Iterator for NumberPositions<'a> {
    type Item = (usize, Record<'a>);

    fn next(&mut self) -> Option<(usize, Record<'a>)> {
        match &mut self.inner {
            NumberPositionsInner::Scan { records, number } => records
                .find(|(_, record)| record.number == number.as_str())
                .map(|(idx, record)| (idx + 1, record)),
            NumberPositionsInner::Indexed { entries, matches } => {
                let entries: &'a BTreeMap<String, Vec<Listing>> = *entries;
                let (number, refs) = matches.as_mut()?;
                let number: &'a str = *number;
                let entry = refs.next()?;
                let position = preceding(entries, &entry.name) + entry.slot + 1;
                Some((
                    position,
                    Record {
                        name: &entry.name,
                        number,
                        phone_type: entry.phone_type,
                    },
                ))
            }
        }
    }
}

impl FusedIterator for NumberPositions<'_> {}
