// 📤 Export - Tabular output of classification records
//
// CSV goes to any writer the caller hands in; the library never opens
// files itself.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::classifier::Classification;

/// One flat CSV row. The nested path is left out.
#[derive(Debug, Serialize)]
struct ClassificationRow<'a> {
    code: &'a str,
    name: &'a str,
    level: u8,
    category_code: &'a str,
    level1_name: &'a str,
    level2_name: &'a str,
    level3_name: &'a str,
    level4_name: &'a str,
    level5_name: &'a str,
}

impl<'a> From<&'a Classification> for ClassificationRow<'a> {
    fn from(record: &'a Classification) -> Self {
        ClassificationRow {
            code: &record.code,
            name: &record.name,
            level: record.level,
            category_code: record.category_code(),
            level1_name: &record.level1_name,
            level2_name: &record.level2_name,
            level3_name: &record.level3_name,
            level4_name: &record.level4_name,
            level5_name: &record.level5_name,
        }
    }
}

/// Write records as CSV with a header row
pub fn write_csv<W: Write>(writer: W, records: &[Classification]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in records {
        csv_writer
            .serialize(ClassificationRow::from(record))
            .with_context(|| format!("Failed to write CSV row for {}", record.code))?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Records as pretty-printed JSON, path included
pub fn to_json(records: &[Classification]) -> Result<String> {
    serde_json::to_string_pretty(records).context("Failed to serialize classifications")
}
