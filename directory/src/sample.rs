//! Fixed demonstration dataset.

use tracing::info;

use crate::directory::Directory;
use crate::types::PhoneType;

/// The sample records, in insertion order. Names keep their mixed
/// casing here; several collide once case-folded.
pub const SAMPLE_RECORDS: [(&str, &str, PhoneType); 16] = [
    ("CCCCC", "333333333", PhoneType::Cell),
    ("AAAAA", "111111111", PhoneType::Home),
    ("FFFFF", "666666666", PhoneType::Other),
    ("BBBBB", "222222222", PhoneType::Office),
    ("EEEEE", "555555555", PhoneType::Home),
    ("HHHHH", "888888888", PhoneType::Cell),
    ("BBBBB", "121212121", PhoneType::Office),
    ("GGGGG", "777777777", PhoneType::Home),
    ("FfFff", "343434343", PhoneType::Other),
    ("DDDDD", "444444444", PhoneType::Office),
    ("IIIII", "999999999", PhoneType::Home),
    ("A1A1A", "111111111", PhoneType::Home),
    ("fffff", "232323232", PhoneType::Other),
    ("ABABA", "222222222", PhoneType::Office),
    ("HELLO", "111111111", PhoneType::Home),
    ("EMEME", "555555555", PhoneType::Home),
];

impl Directory {
    /// Insert every record of [`SAMPLE_RECORDS`].
    pub fn populate_sample(&mut self) {
        for (name, number, phone_type) in SAMPLE_RECORDS {
            self.insert(name, number, phone_type);
        }
        info!(
            added = SAMPLE_RECORDS.len(),
            total = self.len(),
            "Loaded sample records"
        );
    }
}
