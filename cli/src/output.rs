//! Rendering of lookup results as text or JSON lines.

use std::io::Write;

use phonebook_directory::PhoneType;
use phonebook_directory::Record;
use serde::Serialize;

use crate::error::Result;

/// One record as emitted by `--json`.
#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    position: usize,
    name: &'a str,
    number: &'a str,
    #[serde(rename = "type")]
    phone_type: PhoneType,
}

pub struct Printer<W> {
    out: W,
    json: bool,
}

impl<W: Write> Printer<W> {
    pub const fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    /// Print every `(position, record)` pair under a heading.
    ///
    /// `query` is the lookup key the records answer, if any.
    pub fn section<'a>(
        &mut self,
        heading: &str,
        query: Option<&str>,
        records: impl IntoIterator<Item = (usize, Record<'a>)>,
    ) -> Result<()> {
        if !self.json {
            writeln!(self.out, "\n{heading}")?;
            writeln!(self.out, "{}\n", "-".repeat(53))?;
        }

        let mut printed = 0usize;
        for (position, record) in records {
            if self.json {
                let line = JsonRecord {
                    query,
                    position,
                    name: record.name,
                    number: record.number,
                    phone_type: record.phone_type,
                };
                serde_json::to_writer(&mut self.out, &line)?;
                writeln!(self.out)?;
            } else {
                writeln!(self.out, "[{position}. {record} ]")?;
            }
            printed += 1;
        }

        if printed == 0 && !self.json {
            writeln!(self.out, "(no records)")?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
