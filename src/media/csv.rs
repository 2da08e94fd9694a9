//! CSV table derivation for `csv` media items.
//!
//! The host needs `content`, `headers` and `rows` together. Callers usually
//! supply either the raw text or the parsed table; the missing side is
//! derived here. When both are supplied they are kept as given, even if they
//! disagree.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One table cell: numeric when the text parses as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CsvCell {
    /// Numeric cell.
    Number(Number),
    /// Anything else, trimmed.
    Text(String),
}

impl CsvCell {
    /// Coerce raw cell text: integer, then finite float, else trimmed string.
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Self::Number(n.into());
        }
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map_or_else(|| Self::Text(trimmed.to_string()), Self::Number)
    }
}

impl fmt::Display for CsvCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CsvCell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for CsvCell {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

/// Complete table as emitted to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    /// Raw text.
    pub content: String,
    /// Column names.
    pub headers: Vec<String>,
    /// Data rows.
    pub rows: Vec<Vec<CsvCell>>,
}

impl CsvTable {
    /// Fill in whichever side is missing. `None` when there is nothing to
    /// build from: no non-empty content and no rows.
    pub fn derive(
        content: Option<String>,
        headers: Option<Vec<String>>,
        rows: Option<Vec<Vec<CsvCell>>>,
    ) -> Option<Self> {
        let content = content.filter(|c| !c.is_empty());
        match (content, rows) {
            (Some(content), rows) => {
                let (parsed_headers, parsed_rows) = if headers.is_none() || rows.is_none() {
                    parse_content(&content)
                } else {
                    (Vec::new(), Vec::new())
                };
                Some(Self {
                    headers: headers.unwrap_or(parsed_headers),
                    rows: rows.unwrap_or(parsed_rows),
                    content,
                })
            }
            (None, Some(rows)) => {
                let headers = headers.unwrap_or_default();
                Some(Self {
                    content: render_content(&headers, &rows),
                    headers,
                    rows,
                })
            }
            (None, None) => None,
        }
    }
}

/// Split raw text into headers and coerced rows, skipping blank lines.
pub fn parse_content(content: &str) -> (Vec<String>, Vec<Vec<CsvCell>>) {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());
    let headers = lines
        .next()
        .map(|line| line.split(',').map(|h| h.trim().to_string()).collect())
        .unwrap_or_default();
    let rows = lines
        .map(|line| line.split(',').map(CsvCell::coerce).collect())
        .collect();
    (headers, rows)
}

/// Join headers and rows back into comma-separated text.
pub fn render_content(headers: &[String], rows: &[Vec<CsvCell>]) -> String {
    let header_line = (!headers.is_empty()).then(|| headers.join(","));
    let row_lines = rows.iter().map(|row| {
        row.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    });
    header_line.into_iter().chain(row_lines).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_content_to_table() {
        let table = CsvTable::derive(Some("a,b\n1,x\n2,y".into()), None, None).unwrap();
        assert_eq!(table.headers, ["a", "b"]);
        assert_eq!(
            serde_json::to_value(&table.rows).unwrap(),
            json!([[1, "x"], [2, "y"]])
        );
    }

    #[test]
    fn test_blank_lines_and_whitespace() {
        let (headers, rows) = parse_content("\n name , score \n\n ada , 9.5 \n  \n");
        assert_eq!(headers, ["name", "score"]);
        assert_eq!(serde_json::to_value(&rows).unwrap(), json!([["ada", 9.5]]));
    }

    #[test]
    fn test_coercion_per_cell() {
        assert_eq!(CsvCell::coerce(" 42 "), CsvCell::from(42_i64));
        assert_eq!(CsvCell::coerce("-3"), CsvCell::from(-3_i64));
        assert_eq!(CsvCell::coerce("1e3"), CsvCell::Number(Number::from_f64(1000.0).unwrap()));
        assert_eq!(CsvCell::coerce("12abc"), CsvCell::from("12abc"));
        assert_eq!(CsvCell::coerce(""), CsvCell::from(""));
        assert_eq!(CsvCell::coerce("NaN"), CsvCell::from("NaN"));
    }

    #[test]
    fn test_rows_to_content() {
        let rows = vec![vec![CsvCell::from(1_i64), CsvCell::from("x")]];
        let table = CsvTable::derive(None, Some(vec!["a".into(), "b".into()]), Some(rows)).unwrap();
        assert_eq!(table.content, "a,b\n1,x");
    }

    #[test]
    fn test_rows_without_headers() {
        let rows = vec![vec![CsvCell::from(1_i64)], vec![CsvCell::from(2_i64)]];
        let table = CsvTable::derive(None, None, Some(rows)).unwrap();
        assert!(table.headers.is_empty());
        assert_eq!(table.content, "1\n2");
    }

    #[test]
    fn test_both_sides_trusted() {
        let table = CsvTable::derive(
            Some("a\n1".into()),
            Some(vec!["z".into()]),
            Some(vec![vec![CsvCell::from(9_i64)]]),
        )
        .unwrap();
        assert_eq!(table.content, "a\n1");
        assert_eq!(table.headers, ["z"]);
        assert_eq!(table.rows, vec![vec![CsvCell::from(9_i64)]]);
    }

    #[test]
    fn test_nothing_to_build_from() {
        assert!(CsvTable::derive(None, None, None).is_none());
        assert!(CsvTable::derive(Some(String::new()), Some(vec!["a".into()]), None).is_none());
    }

    proptest! {
        #[test]
        fn test_integer_cells_survive_render_and_parse(
            values in proptest::collection::vec(proptest::collection::vec(-10_000i64..10_000, 1..5), 1..8)
        ) {
            let rows: Vec<Vec<CsvCell>> = values
                .iter()
                .map(|r| r.iter().copied().map(CsvCell::from).collect())
                .collect();
            let headers = vec!["h".to_string()];
            let text = render_content(&headers, &rows);
            let (parsed_headers, parsed_rows) = parse_content(&text);
            prop_assert_eq!(parsed_headers, headers);
            prop_assert_eq!(parsed_rows, rows);
        }
    }
}
