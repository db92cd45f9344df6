use std::fs;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, Xlsx};
use serde_json::Value;

use crate::config::ColumnsConfig;
use crate::error::BerthPlotError;
use crate::vessel::VesselRecord;

/// Supported table formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    /// Array of row objects, as written by a spreadsheet "records" export
    Json,
    /// First worksheet of an Excel workbook, header in the first row
    Xlsx,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self, BerthPlotError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(TableFormat::Csv),
            "json" => Ok(TableFormat::Json),
            "xlsx" => Ok(TableFormat::Xlsx),
            _ => Err(BerthPlotError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// Reads vessel records from a table export
pub struct TableReader;

impl TableReader {
    /// Read all vessel records from `path`
    ///
    /// Row order is preserved and becomes the vessel index. Records are not
    /// validated here; that happens when the layout is rendered.
    pub fn read_records(
        path: &Path,
        columns: &ColumnsConfig,
    ) -> Result<Vec<VesselRecord>, BerthPlotError> {
        let records = match TableFormat::from_path(path)? {
            TableFormat::Csv => Self::from_csv_str(&fs::read_to_string(path)?, columns)?,
            TableFormat::Json => Self::from_json_str(&fs::read_to_string(path)?, columns)?,
            TableFormat::Xlsx => Self::from_xlsx_bytes(&fs::read(path)?, columns)?,
        };

        log::debug!(
            "Read {} vessel records from {}",
            records.len(),
            path.display()
        );
        Ok(records)
    }

    pub fn from_csv_str(
        contents: &str,
        columns: &ColumnsConfig,
    ) -> Result<Vec<VesselRecord>, BerthPlotError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(contents.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| BerthPlotError::InvalidTable(e.to_string()))?
            .clone();

        let position = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| BerthPlotError::MissingColumn(name.to_string()))
        };
        let length_at = position(&columns.length)?;
        let berth_at = position(&columns.berth_time)?;
        let departure_at = position(&columns.departure_time)?;

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(|e| BerthPlotError::InvalidTable(e.to_string()))?;
            let cell = |at: usize, name: &str| {
                parse_number(row.get(at).unwrap_or_default(), index, name)
            };

            records.push(VesselRecord::new(
                index,
                cell(length_at, &columns.length)?,
                cell(berth_at, &columns.berth_time)?,
                cell(departure_at, &columns.departure_time)?,
            ));
        }

        Ok(records)
    }

    pub fn from_json_str(
        contents: &str,
        columns: &ColumnsConfig,
    ) -> Result<Vec<VesselRecord>, BerthPlotError> {
        let table: Value = serde_json::from_str(contents)
            .map_err(|e| BerthPlotError::InvalidTable(e.to_string()))?;

        let Value::Array(rows) = table else {
            return Err(BerthPlotError::InvalidTable(
                "expected an array of row objects".to_string(),
            ));
        };

        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                let Value::Object(fields) = row else {
                    return Err(BerthPlotError::InvalidTable(format!(
                        "row {} is not an object",
                        index + 1
                    )));
                };

                // A key absent from the first row is absent from the table
                let cell = |name: &str| match fields.get(name) {
                    Some(value) => json_number(value, index, name),
                    None if index == 0 => Err(BerthPlotError::MissingColumn(name.to_string())),
                    None => Err(BerthPlotError::MissingCell {
                        row: index + 1,
                        column: name.to_string(),
                    }),
                };

                Ok(VesselRecord::new(
                    index,
                    cell(&columns.length)?,
                    cell(&columns.berth_time)?,
                    cell(&columns.departure_time)?,
                ))
            })
            .collect()
    }

    /// Read the first worksheet of an `.xlsx` workbook
    ///
    /// The first non-empty row is the header. Fully empty rows are skipped,
    /// as the CSV reader skips blank lines.
    pub fn from_xlsx_bytes(
        contents: &[u8],
        columns: &ColumnsConfig,
    ) -> Result<Vec<VesselRecord>, BerthPlotError> {
        let mut workbook = Xlsx::new(Cursor::new(contents))
            .map_err(|e| BerthPlotError::InvalidTable(e.to_string()))?;
        let sheet = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| BerthPlotError::InvalidTable("workbook has no sheets".to_string()))?
            .map_err(|e| BerthPlotError::InvalidTable(e.to_string()))?;

        let mut rows = sheet
            .rows()
            .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)));

        let headers: Vec<String> = rows
            .next()
            .map(|row| row.iter().map(|cell| cell.to_string().trim().to_string()).collect())
            .unwrap_or_default();

        let position = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| BerthPlotError::MissingColumn(name.to_string()))
        };
        let length_at = position(&columns.length)?;
        let berth_at = position(&columns.berth_time)?;
        let departure_at = position(&columns.departure_time)?;

        rows.enumerate()
            .map(|(index, row)| {
                let cell = |at: usize, name: &str| {
                    xlsx_number(row.get(at).unwrap_or(&Data::Empty), index, name)
                };

                Ok(VesselRecord::new(
                    index,
                    cell(length_at, &columns.length)?,
                    cell(berth_at, &columns.berth_time)?,
                    cell(departure_at, &columns.departure_time)?,
                ))
            })
            .collect()
    }
}

fn parse_number(raw: &str, index: usize, column: &str) -> Result<f64, BerthPlotError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| invalid_number(raw, index, column))
}

fn json_number(value: &Value, index: usize, column: &str) -> Result<f64, BerthPlotError> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| invalid_number(&number.to_string(), index, column)),
        Value::String(raw) => parse_number(raw, index, column),
        other => Err(invalid_number(&other.to_string(), index, column)),
    }
}

fn xlsx_number(cell: &Data, index: usize, column: &str) -> Result<f64, BerthPlotError> {
    match cell {
        Data::Int(value) => Ok(*value as f64),
        Data::Float(value) => Ok(*value),
        Data::String(raw) => parse_number(raw, index, column),
        other => Err(invalid_number(&other.to_string(), index, column)),
    }
}

fn invalid_number(raw: &str, index: usize, column: &str) -> BerthPlotError {
    BerthPlotError::InvalidNumber {
        row: index + 1,
        column: column.to_string(),
        value: raw.to_string(),
    }
}
