//! Tabular (CSV) export
//!
//! Rows are written with the header taken from the first row's keys. Every
//! row must expose the same set of keys, in any order: cells are placed by
//! key, not by position. The whole batch is checked and rendered before the
//! destination is touched, so a failed export never leaves a partial file
//! behind.

use crate::error::{ExportError, Result};
use crate::extraction::DISEASE_NAME_COLUMN;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// A row that can be written as one CSV record
pub trait TableRow {
    /// Column names, in output order
    fn keys(&self) -> Vec<String>;

    /// Cell values, aligned with [`TableRow::keys`]
    fn values(&self) -> Result<Vec<String>>;
}

/// One FAQ entry of the normalized FAQ table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqRow {
    /// Disease the entry belongs to
    pub disease: String,
    /// Question heading
    pub question: String,
    /// Answer text
    pub answer: String,
}

impl TableRow for FaqRow {
    fn keys(&self) -> Vec<String> {
        vec![
            DISEASE_NAME_COLUMN.to_string(),
            "Question".to_string(),
            "Answer".to_string(),
        ]
    }

    fn values(&self) -> Result<Vec<String>> {
        Ok(vec![
            self.disease.clone(),
            self.question.clone(),
            self.answer.clone(),
        ])
    }
}

/// Writes rows to a CSV file
#[derive(Debug, Clone)]
pub struct TabularWriter {
    path: PathBuf,
}

impl TabularWriter {
    /// Writer targeting `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write header plus one record per row and return the number of rows.
    ///
    /// With no rows nothing is written and no file is created.
    pub fn write<R: TableRow>(&self, rows: &[R]) -> Result<usize> {
        if rows.is_empty() {
            info!("Nothing to save to {}", self.path.display());
            return Ok(0);
        }

        let (header, records) = render(rows)?;
        let mut writer = builder().from_path(&self.path)?;
        write_records(&mut writer, &header, &records)?;

        info!("Data saved to {}", self.path.display());
        Ok(records.len())
    }

    /// Same as [`TabularWriter::write`] on any byte sink
    pub fn write_to<W: io::Write, R: TableRow>(sink: W, rows: &[R]) -> Result<usize> {
        if rows.is_empty() {
            return Ok(0);
        }

        let (header, records) = render(rows)?;
        let mut writer = builder().from_writer(sink);
        write_records(&mut writer, &header, &records)?;
        Ok(records.len())
    }
}

fn builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder.terminator(csv::Terminator::CRLF);
    builder
}

type Rendered = (Vec<String>, Vec<Vec<String>>);

fn render<R: TableRow>(rows: &[R]) -> Result<Rendered> {
    let header = match rows.first() {
        Some(first) => first.keys(),
        None => return Ok((Vec::new(), Vec::new())),
    };

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let keys = row.keys();
        let values = row.values()?;
        if keys == header {
            records.push(values);
            continue;
        }

        match align(&header, &keys, values) {
            Some(aligned) => records.push(aligned),
            None => {
                return Err(ExportError::SchemaMismatch {
                    row: i,
                    expected: header,
                    found: keys,
                }
                .into())
            }
        }
    }
    Ok((header, records))
}

/// Reorder `values` (keyed by `keys`) into header order; `None` unless the
/// key sets are equal.
fn align(header: &[String], keys: &[String], values: Vec<String>) -> Option<Vec<String>> {
    if keys.len() != header.len() || values.len() != keys.len() {
        return None;
    }

    let mut by_key: HashMap<&str, String> = keys
        .iter()
        .map(String::as_str)
        .zip(values)
        .collect();
    if by_key.len() != keys.len() {
        return None;
    }

    header.iter().map(|k| by_key.remove(k.as_str())).collect()
}

fn write_records<W: io::Write>(
    writer: &mut csv::Writer<W>,
    header: &[String],
    records: &[Vec<String>],
) -> Result<()> {
    writer.write_record(header)?;
    for record in records {
        writer.write_record(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct Loose(Vec<(&'static str, &'static str)>);

    impl TableRow for Loose {
        fn keys(&self) -> Vec<String> {
            self.0.iter().map(|(k, _)| k.to_string()).collect()
        }

        fn values(&self) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|(_, v)| v.to_string()).collect())
        }
    }

    #[test]
    fn test_write_to_quotes_and_terminates() {
        let rows = vec![
            Loose(vec![("Name", "Flu"), ("Notes", "fever, cough")]),
            Loose(vec![("Name", "Cold"), ("Notes", "says \"achoo\"")]),
        ];
        let mut out = Vec::new();
        let written = TabularWriter::write_to(&mut out, &rows).unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Name,Notes\r\nFlu,\"fever, cough\"\r\nCold,\"says \"\"achoo\"\"\"\r\n"
        );
    }

    #[test]
    fn test_schema_mismatch_is_reported() {
        let rows = vec![
            Loose(vec![("Name", "Flu"), ("Notes", "")]),
            Loose(vec![("Name", "Cold")]),
        ];
        let err = TabularWriter::write_to(Vec::new(), &rows).unwrap_err();

        match err {
            Error::Export(ExportError::SchemaMismatch { row, expected, found }) => {
                assert_eq!(row, 1);
                assert_eq!(expected, vec!["Name", "Notes"]);
                assert_eq!(found, vec!["Name"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reordered_keys_are_placed_by_header() {
        let rows = vec![
            Loose(vec![("Name", "Flu"), ("Notes", "fever")]),
            Loose(vec![("Notes", "sneezing"), ("Name", "Cold")]),
        ];
        let mut out = Vec::new();
        TabularWriter::write_to(&mut out, &rows).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Name,Notes\r\nFlu,fever\r\nCold,sneezing\r\n"
        );
    }

    #[test]
    fn test_same_length_different_keys_is_mismatch() {
        let rows = vec![
            Loose(vec![("Name", "Flu"), ("Notes", "")]),
            Loose(vec![("Name", "Cold"), ("Name", "again")]),
        ];
        let err = TabularWriter::write_to(Vec::new(), &rows).unwrap_err();
        assert!(matches!(
            err,
            Error::Export(ExportError::SchemaMismatch { row: 1, .. })
        ));
    }

    #[test]
    fn test_mismatch_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = vec![
            Loose(vec![("Name", "Flu")]),
            Loose(vec![("Disease", "Cold")]),
        ];

        assert!(TabularWriter::new(&path).write(&rows).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows: Vec<FaqRow> = Vec::new();

        assert_eq!(TabularWriter::new(&path).write(&rows).unwrap(), 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_faq_rows() {
        let rows = vec![FaqRow {
            disease: "Flu".to_string(),
            question: "Contagious?".to_string(),
            answer: "Yes".to_string(),
        }];
        let mut out = Vec::new();
        TabularWriter::write_to(&mut out, &rows).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Disease Name,Question,Answer\r\nFlu,Contagious?,Yes\r\n"
        );
    }
}
