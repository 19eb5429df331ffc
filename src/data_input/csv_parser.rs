// src/data_input/csv_parser.rs

use csv::{ByteRecord, ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;

use crate::data_input::sample_data::SampleData;
use crate::error::{AnalysisError, Result};

// Fields are already trimmed by the reader. A field that is not UTF-8 counts
// as unparseable, so only its own row is dropped.
fn get_optional_f64(record: &ByteRecord, index: usize) -> Option<f64> {
    record
        .get(index)
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
        .and_then(|s| s.parse::<f64>().ok())
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true).trim(Trim::All).flexible(true);
    builder
}

/// Parses an oscilloscope CSV export into aligned time/voltage samples.
///
/// The first row is a header. Only the first two columns are read (time in
/// seconds, voltage in volts); any further columns are ignored, whatever their
/// encoding. The header is only checked for being present, so a single-name
/// header over two-column data is fine. Rows whose time or voltage is missing,
/// unparseable or non-finite are dropped as a whole.
pub fn parse_csv(input_file_path: &Path) -> Result<SampleData> {
    let reader = reader_builder()
        .from_path(input_file_path)
        .map_err(|source| AnalysisError::Read {
            path: input_file_path.to_path_buf(),
            source,
        })?;
    log::debug!("Reading '{}'", input_file_path.display());
    parse_records(reader)
}

/// Same as [`parse_csv`], reading from any byte source.
pub fn parse_csv_reader<R: Read>(source: R) -> Result<SampleData> {
    parse_records(reader_builder().from_reader(source))
}

fn parse_records<R: Read>(mut reader: csv::Reader<R>) -> Result<SampleData> {
    let header_record = reader.byte_headers()?.clone();
    if header_record.is_empty() || header_record.iter().all(|h| h.is_empty()) {
        return Err(AnalysisError::MalformedInput {
            reason: "no header row found (expected e.g. 'time,voltage')".to_string(),
        });
    }
    log::debug!("Headers found in CSV: {:?}", header_record);

    let mut rows: Vec<(Option<f64>, Option<f64>)> = Vec::new();
    for result in reader.byte_records() {
        let record = result?;
        if record.len() < 2 {
            let line = record.position().map_or(0, |p| p.line());
            return Err(AnalysisError::MalformedInput {
                reason: format!(
                    "line {line} has {} field(s), expected at least 2 (time, voltage)",
                    record.len()
                ),
            });
        }
        rows.push((get_optional_f64(&record, 0), get_optional_f64(&record, 1)));
    }
    log::debug!("Finished reading {} data rows.", rows.len());

    SampleData::from_rows(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&str]) -> String {
        let mut text = String::from("time,voltage\n");
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        text
    }

    fn valid_rows(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{},{}", i as f64 * 0.001, i as f64)).collect()
    }

    #[test]
    fn parses_two_columns_and_ignores_extras() {
        let mut rows = valid_rows(10);
        rows[0] = "0,0,extra,42".to_string();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let data = parse_csv_reader(table(&refs).as_bytes()).unwrap();
        assert_eq!(data.len(), 10);
        assert_eq!(data.voltage()[9], 9.0);
    }

    #[test]
    fn drops_invalid_rows_and_keeps_alignment() {
        let mut rows = valid_rows(13);
        rows[1] = "nan,1.0".to_string();
        rows[4] = "0.004,".to_string();
        rows[8] = "0.008,abc".to_string();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();

        let data = parse_csv_reader(table(&refs).as_bytes()).unwrap();
        assert_eq!(data.len(), 10);
        assert_eq!(data.voltage(), &[0.0, 2.0, 3.0, 5.0, 6.0, 7.0, 9.0, 10.0, 11.0, 12.0]);
    }

    #[test]
    fn infinities_are_rejected() {
        let mut rows = valid_rows(10);
        rows[3] = "inf,1.0".to_string();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let err = parse_csv_reader(table(&refs).as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InsufficientData { valid_rows: 9, total_rows: 10, .. }
        ));
    }

    #[test]
    fn single_column_rows_are_malformed() {
        let text = "time\n0\n1\n2\n";
        let err = parse_csv_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedInput { .. }));
    }

    #[test]
    fn single_name_header_over_two_columns_loads() {
        let mut text = String::from("voltage_export\n");
        for row in valid_rows(12) {
            text.push_str(&row);
            text.push('\n');
        }
        let data = parse_csv_reader(text.as_bytes()).unwrap();
        assert_eq!(data.len(), 12);
        assert_eq!(data.voltage()[11], 11.0);
    }

    #[test]
    fn non_utf8_extra_column_is_ignored() {
        let mut bytes = b"time,voltage,unit\n".to_vec();
        for row in valid_rows(12) {
            bytes.extend_from_slice(row.as_bytes());
            bytes.extend_from_slice(b",\xB5V\n");
        }
        let data = parse_csv_reader(bytes.as_slice()).unwrap();
        assert_eq!(data.len(), 12);
    }

    #[test]
    fn non_utf8_voltage_drops_only_that_row() {
        let mut bytes = b"time,voltage\n".to_vec();
        for (i, row) in valid_rows(12).iter().enumerate() {
            if i == 3 {
                bytes.extend_from_slice(b"0.003,\xB5\n");
            } else {
                bytes.extend_from_slice(row.as_bytes());
                bytes.push(b'\n');
            }
        }
        let data = parse_csv_reader(bytes.as_slice()).unwrap();
        assert_eq!(data.len(), 11);
        assert_eq!(data.voltage()[3], 4.0);
    }

    #[test]
    fn short_row_is_malformed() {
        let mut rows = valid_rows(12);
        rows[5] = "0.005".to_string();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let err = parse_csv_reader(table(&refs).as_bytes()).unwrap_err();
        match err {
            AnalysisError::MalformedInput { reason } => assert!(reason.contains("line 7")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_malformed() {
        let err = parse_csv_reader("".as_bytes()).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedInput { .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = parse_csv(Path::new("definitely/not/here.csv")).unwrap_err();
        match err {
            AnalysisError::Read { path, .. } => {
                assert_eq!(path, Path::new("definitely/not/here.csv"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

// src/data_input/csv_parser.rs
