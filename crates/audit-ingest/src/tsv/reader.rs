//! TSV file reading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};

use super::schema::{RowSchema, TsvTable};

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Rejects files that start with a UTF-16 byte-order mark.
///
/// A UTF-8 BOM is accepted and stripped from the first header cell.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open_file(path)?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

/// Extracts are plain tab-separated text: quotes are ordinary characters.
fn open_reader(path: &Path) -> Result<Reader<BufReader<File>>> {
    validate_encoding(path)?;
    let file = open_file(path)?;
    Ok(ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(BufReader::new(file)))
}

fn next_record(reader: &mut Reader<BufReader<File>>, path: &Path) -> Result<Option<StringRecord>> {
    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => Ok(Some(record)),
        Ok(false) => Ok(None),
        Err(e) => Err(IngestError::TsvParse {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn read_header(reader: &mut Reader<BufReader<File>>, path: &Path) -> Result<RowSchema> {
    let Some(header) = next_record(reader, path)? else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };
    RowSchema::from_header(header.iter(), path)
}

/// Reads only the header row of a TSV file.
///
/// The rest of the file is never read.
pub fn read_tsv_schema(path: &Path) -> Result<RowSchema> {
    let mut reader = open_reader(path)?;
    read_header(&mut reader, path)
}

/// Reads a TSV file: header row plus every data row.
///
/// Blank lines are ignored. Extra fields past the header are dropped when they
/// are all blank; otherwise a row with more fields than the header makes the
/// whole file invalid.
pub fn read_tsv_table(path: &Path) -> Result<TsvTable> {
    let mut reader = open_reader(path)?;
    let schema = read_header(&mut reader, path)?;
    let expected = schema.len();

    let mut rows = Vec::new();
    while let Some(mut record) = next_record(&mut reader, path)? {
        if record.len() > expected && record.iter().skip(expected).all(|f| f.trim().is_empty()) {
            record.truncate(expected);
        }
        if record.len() > expected {
            return Err(IngestError::RaggedRow {
                path: path.to_path_buf(),
                line: record.position().map_or(0, csv::Position::line),
                fields: record.len(),
                expected,
            });
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(TsvTable { schema, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_tsv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_tsv_schema() {
        let file = create_temp_tsv(b"type\t case_id \tage\nx\t1\t2\n");
        let schema = read_tsv_schema(file.path()).unwrap();
        assert_eq!(schema.columns(), ["type", "case_id", "age"]);
    }

    #[test]
    fn test_read_tsv_schema_with_bom() {
        let file = create_temp_tsv("\u{feff}A\tB\n1\t2\n".as_bytes());
        let schema = read_tsv_schema(file.path()).unwrap();
        assert_eq!(schema.columns(), ["A", "B"]);
    }

    #[test]
    fn test_read_tsv_schema_empty_file() {
        let file = create_temp_tsv(b"");
        let result = read_tsv_schema(file.path());
        assert!(matches!(result, Err(IngestError::EmptyFile { .. })));
    }

    #[test]
    fn test_utf16_rejected() {
        let file = create_temp_tsv(&[0xFF, 0xFE, b'A', 0]);
        let result = read_tsv_table(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_read_tsv_table() {
        let file = create_temp_tsv(b"A\tD\n1\tx\n\n\ty\n");
        let table = read_tsv_table(file.path()).unwrap();
        assert_eq!(table.schema.columns(), ["A", "D"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1], vec!["", "y"]);
    }

    #[test]
    fn test_read_tsv_table_header_only() {
        let file = create_temp_tsv(b"C\n");
        let table = read_tsv_table(file.path()).unwrap();
        assert_eq!(table.schema.columns(), ["C"]);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_read_tsv_table_ragged_row() {
        let file = create_temp_tsv(b"A\tB\n1\t2\n1\t2\t3\n");
        let result = read_tsv_table(file.path());
        assert!(matches!(
            result,
            Err(IngestError::RaggedRow {
                line: 3,
                fields: 3,
                expected: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_read_tsv_table_quotes_are_literal() {
        let file = create_temp_tsv(b"A\tB\n\"open\tx\n1\t2\n3\t\"4\"\n");
        let table = read_tsv_table(file.path()).unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows[0], vec!["\"open", "x"]);
        assert_eq!(table.rows[2], vec!["3", "\"4\""]);
    }

    #[test]
    fn test_read_tsv_schema_quoted_header() {
        let file = create_temp_tsv(b"\"A\tB\n1\t2\n");
        let schema = read_tsv_schema(file.path()).unwrap();
        assert_eq!(schema.columns(), ["\"A", "B"]);
    }

    #[test]
    fn test_read_tsv_table_trailing_tabs() {
        let file = create_temp_tsv(b"A\tB\t\n1\t2\t\n3\t\t\n");
        let table = read_tsv_table(file.path()).unwrap();
        assert_eq!(table.schema.columns(), ["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", ""]]);
    }

    #[test]
    fn test_read_tsv_table_short_row() {
        let file = create_temp_tsv(b"A\tB\n1\n");
        let table = read_tsv_table(file.path()).unwrap();
        assert_eq!(table.rows, vec![vec!["1".to_string()]]);
    }
}
