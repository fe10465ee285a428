//! In-memory phone directory
//!
//! Records are (name, number, type) triples. Names are case-insensitive and
//! neither names nor numbers have to be unique. Lookup works by name or, in
//! reverse, by exact number.

pub mod directory;
pub mod error;
mod reverse_index;
pub mod sample;
pub mod types;

#[cfg(test)]
mod tests;

pub use directory::Directory;
pub use directory::DirectoryConfig;
pub use directory::Iter;
pub use directory::NameMatches;
pub use directory::NumberMatches;
pub use directory::NumberPositions;
pub use error::DirectoryError;
pub use error::Result;
pub use sample::SAMPLE_RECORDS;
pub use types::OwnedRecord;
pub use types::PhoneType;
pub use types::Record;
pub use types::normalize_name;
