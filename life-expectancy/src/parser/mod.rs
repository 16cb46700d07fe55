//! Raw table loader with encoding auto-detection.
//!
//! Turns a delimited file into a [`RawTable`]. No cell is interpreted here;
//! the only checks are that the file exists, decodes as text and is rectangular.

use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::models::RawTable;

/// Detect the encoding of raw bytes using chardet.
///
/// ASCII and UTF-8 input (or no verdict) is reported as `utf-8`; any other
/// charset is normalised to its `encoding_rs` name, lowercased. Latin-1 thus
/// comes back as `windows-1252`, its WHATWG superset.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _confidence, _language) = chardet::detect(bytes);
    let charset = charset.to_lowercase();

    match charset.as_str() {
        "" | "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        label => encoding_rs::Encoding::for_label(label.as_bytes())
            .map(|enc| enc.name().to_lowercase())
            .unwrap_or_else(|| label.to_string()),
    }
}

/// Decode bytes with the given encoding label.
///
/// Invalid UTF-8 is decoded lossily. Latin-1 labels decode through
/// Windows-1252, which agrees with ISO-8859-1 over 0xA0-0xFF.
pub fn decode_content(bytes: &[u8], encoding: &str) -> LoadResult<String> {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => Ok(String::from_utf8(bytes.to_vec())
            .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned())),
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            Ok(encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned())
        }
        other => encoding_rs::Encoding::for_label(other.as_bytes())
            .map(|enc| enc.decode(bytes).0.into_owned())
            .ok_or_else(|| LoadError::Encoding(format!("unsupported charset '{}'", other))),
    }
}

/// Parse delimited text into a raw table.
///
/// The first record is the header. Every data record must have as many
/// fields as the header; blank lines are skipped.
///
/// # Example
/// ```ignore
/// use life_expectancy::parse_table;
///
/// let table = parse_table("id\t2020\nA\t1.5", '\t').unwrap();
/// assert_eq!(table.headers, vec!["id", "2020"]);
/// assert_eq!(table.rows[0], vec!["A", "1.5"]);
/// ```
pub fn parse_table(content: &str, separator: char) -> LoadResult<RawTable> {
    let delimiter = u8::try_from(separator)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(LoadError::InvalidSeparator(separator))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(malformed)?
        .iter()
        .map(String::from)
        .collect();

    if headers.is_empty() {
        return Err(LoadError::EmptyFile);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(malformed)?;
        rows.push(record.iter().map(String::from).collect());
    }

    Ok(RawTable::new(headers, rows))
}

/// Load a delimited file from disk.
///
/// The file is read whole and its handle released before decoding starts.
pub fn load_raw_table<P: AsRef<Path>>(path: P, separator: char) -> LoadResult<RawTable> {
    let (table, _encoding) = load_raw_table_with_encoding(path, separator)?;
    Ok(table)
}

/// Same as [`load_raw_table`], also returning the detected encoding.
pub fn load_raw_table_with_encoding<P: AsRef<Path>>(
    path: P,
    separator: char,
) -> LoadResult<(RawTable, String)> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;

    if bytes.is_empty() {
        return Err(LoadError::EmptyFile);
    }

    let encoding = detect_encoding(&bytes);
    let content = decode_content(&bytes, &encoding)?;
    let table = parse_table(&content, separator)?;

    Ok((table, encoding))
}

fn malformed(err: csv::Error) -> LoadError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let message = match err.kind() {
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => format!(
            "found record with {} fields, but the header has {} fields",
            len, expected_len
        ),
        _ => err.to_string(),
    };
    LoadError::Malformed { line, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_simple_tsv() {
        let tsv = "unit,sex,age,geo\\time\t2020\t2021\nYR,F,Y10,PT\t81.2 b\t:";
        let table = parse_table(tsv, '\t').unwrap();

        assert_eq!(table.headers, vec!["unit,sex,age,geo\\time", "2020", "2021"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0], vec!["YR,F,Y10,PT", "81.2 b", ":"]);
    }

    #[test]
    fn test_cells_are_not_trimmed() {
        let tsv = "id\t2019 \nA\t 80.1 e";
        let table = parse_table(tsv, '\t').unwrap();

        assert_eq!(table.headers[1], "2019 ");
        assert_eq!(table.rows[0][1], " 80.1 e");
    }

    #[test]
    fn test_empty_lines_skipped() {
        let tsv = "a\tb\n1\t2\n\n3\t4\n";
        let table = parse_table(tsv, '\t').unwrap();

        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let tsv = "a\tb\tc\n1\t2\t3\n4\t5";
        let err = parse_table(tsv, '\t').unwrap_err();

        match err {
            LoadError::Malformed { line, message } => {
                assert!(line >= 2);
                assert!(message.contains("2 fields"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_content_error() {
        let err = parse_table("", '\t').unwrap_err();
        assert!(matches!(err, LoadError::EmptyFile));
    }

    #[test]
    fn test_non_ascii_separator_rejected() {
        let err = parse_table("a§b", '§').unwrap_err();
        assert!(matches!(err, LoadError::InvalidSeparator('§')));
    }

    #[test]
    fn test_wrong_separator_yields_single_column() {
        let tsv = "a\tb\n1\t2";
        let table = parse_table(tsv, ';').unwrap();

        assert_eq!(table.headers, vec!["a\tb"]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.tsv");

        let err = load_raw_table(&path, '\t').unwrap_err();
        match err {
            LoadError::NotFound(p) => assert_eq!(p, path),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.tsv");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "id\t2020\nA,B,C,PT\t1.0\n").unwrap();
        drop(file);

        let (table, encoding) = load_raw_table_with_encoding(&path, '\t').unwrap();
        assert_eq!(encoding, "utf-8");
        assert_eq!(table.rows, vec![vec!["A,B,C,PT".to_string(), "1.0".to_string()]]);
    }

    #[test]
    fn test_empty_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.tsv");
        std::fs::File::create(&path).unwrap();

        let err = load_raw_table(&path, '\t').unwrap_err();
        assert!(matches!(err, LoadError::EmptyFile));
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert_eq!(decoded, "Société");
    }

    #[test]
    fn test_latin1_high_bytes_not_remapped() {
        // 0xA4, 0xBD, 0xBE differ between ISO-8859-1 and ISO-8859-15
        let decoded = decode_content(&[0xA4, 0xBD, 0xBE], "iso-8859-1").unwrap();
        assert_eq!(decoded, "¤½¾");
    }

    #[test]
    fn test_windows_1252_decoding() {
        assert_eq!(decode_content(b"\x80", "windows-1252").unwrap(), "€");
        assert_eq!(decode_content(b"\x80", "cp1252").unwrap(), "€");
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let decoded = decode_content(b"ab\xffcd", "utf-8").unwrap();
        assert_eq!(decoded, "ab\u{FFFD}cd");
    }

    #[test]
    fn test_other_label_decoded_via_encoding_rs() {
        // 0xE8 is 'č' in ISO-8859-2
        let decoded = decode_content(&[0x63, 0xE8], "iso-8859-2").unwrap();
        assert_eq!(decoded, "cč");
    }

    #[test]
    fn test_detect_ascii_as_utf8() {
        assert_eq!(detect_encoding(b"unit,sex,age,geo\\time\t2020\n"), "utf-8");
    }

    #[test]
    fn test_load_latin1_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.tsv");

        let mut content = String::from("unit,sex,age,geo\\time\t2020\n");
        for i in 0..40 {
            content.push_str(&format!(
                "YR,F,Y{},Société générale de l'espérance de vie été\t8{}.5\n",
                i,
                i % 10
            ));
        }
        let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(&content);
        std::fs::write(&path, &bytes).unwrap();

        let (table, encoding) = load_raw_table_with_encoding(&path, '\t').unwrap();

        assert_ne!(encoding, "utf-8");
        assert_eq!(table.row_count(), 40);
        assert_eq!(
            table.rows[0][0], "YR,F,Y0,Société générale de l'espérance de vie été",
            "decoded as {}",
            encoding
        );
    }

    #[test]
    fn test_unknown_charset_error() {
        let err = decode_content(b"abc", "x-not-a-charset").unwrap_err();
        assert!(matches!(err, LoadError::Encoding(_)));
    }
}
