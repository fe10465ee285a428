//! Core types for the phone directory.
//!
//! `PhoneType` is a closed set: an out-of-range value can only show up as
//! input to [`PhoneType::from_code`] or [`str::parse`], both of which fail
//! with a [`DirectoryError`] instead of producing a variant.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::DirectoryError;
use crate::error::Result;

/// Context a phone number is used in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    #[default]
    Home,
    Office,
    Cell,
    Other,
}

impl PhoneType {
    /// Every variant, in code order
    pub const ALL: [PhoneType; 4] = [
        PhoneType::Home,
        PhoneType::Office,
        PhoneType::Cell,
        PhoneType::Other,
    ];

    /// Convert a numeric code (0 = home .. 3 = other)
    pub fn from_code(code: i64) -> Result<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(DirectoryError::InvalidPhoneType(code))
    }

    /// Numeric code of this type
    pub const fn code(self) -> u8 {
        match self {
            PhoneType::Home => 0,
            PhoneType::Office => 1,
            PhoneType::Cell => 2,
            PhoneType::Other => 3,
        }
    }

    /// Human readable label
    pub const fn label(self) -> &'static str {
        match self {
            PhoneType::Home => "Home",
            PhoneType::Office => "Office",
            PhoneType::Cell => "Cellular",
            PhoneType::Other => "Other",
        }
    }
}

impl TryFrom<i64> for PhoneType {
    type Error = DirectoryError;

    fn try_from(code: i64) -> Result<Self> {
        Self::from_code(code)
    }
}

impl TryFrom<u8> for PhoneType {
    type Error = DirectoryError;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(i64::from(code))
    }
}

impl From<PhoneType> for u8 {
    fn from(phone_type: PhoneType) -> Self {
        phone_type.code()
    }
}

impl FromStr for PhoneType {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_code(code);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "home" => Ok(PhoneType::Home),
            "office" | "work" => Ok(PhoneType::Office),
            "cell" | "cellular" | "mobile" => Ok(PhoneType::Cell),
            "other" => Ok(PhoneType::Other),
            _ => Err(DirectoryError::UnknownPhoneType(s.to_string())),
        }
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-fold a name into the key used for storage and lookup.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// A record borrowed from a [`Directory`](crate::Directory).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// Normalized (lowercase) name
    pub name: &'a str,
    pub number: &'a str,
    pub phone_type: PhoneType,
}

impl Record<'_> {
    pub fn to_owned_record(&self) -> OwnedRecord {
        OwnedRecord {
            name: self.name.to_string(),
            number: self.number.to_string(),
            phone_type: self.phone_type,
        }
    }
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.number, self.phone_type)
    }
}

/// Owned (name, number, type) triple.
///
/// Used both for records copied out of a directory and for entries that are
/// about to be inserted; in the latter case the name is normalized on insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnedRecord {
    pub name: String,
    pub number: String,
    #[serde(rename = "type")]
    pub phone_type: PhoneType,
}

impl OwnedRecord {
    pub fn new(name: impl Into<String>, number: impl Into<String>, phone_type: PhoneType) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            phone_type,
        }
    }

    pub fn as_record(&self) -> Record<'_> {
        Record {
            name: &self.name,
            number: &self.number,
            phone_type: self.phone_type,
        }
    }
}

/// Parses `name,number[,type]`. A missing type means [`PhoneType::Home`].
impl FromStr for OwnedRecord {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, ',');
        let name = parts.next().unwrap_or_default().trim();
        let number = parts
            .next()
            .ok_or_else(|| DirectoryError::MalformedEntry(s.to_string()))?
            .trim();
        let phone_type = match parts.next() {
            Some(text) => text.parse()?,
            None => PhoneType::default(),
        };

        Ok(Self::new(name, number, phone_type))
    }
}
