//! In-memory tabular dataset
//!
//! A `Dataset` is the header row plus every record of the input file, in
//! file order. The in-memory strategy materializes the whole file into one
//! before normalizing it.

use csv::StringRecord;

/// Header row plus ordered records
///
/// The column set and order are fixed by `headers`; every record has
/// exactly `headers.len()` fields (the reader rejects ragged rows).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Column names, in file order
    pub headers: StringRecord,

    /// Records, in file order
    pub records: Vec<StringRecord>,
}

impl Dataset {
    /// Create a dataset from a header row and its records
    pub fn new(headers: StringRecord, records: Vec<StringRecord>) -> Self {
        Self { headers, records }
    }

    /// Number of records (header excluded)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of the first column named `column`
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|name| name == column)
    }

    /// Look up a field by record index and column name
    pub fn field(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.records.get(row)?.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            StringRecord::from(vec!["review_id", "review_score", "review_comment_title"]),
            vec![
                StringRecord::from(vec!["r1", "5", "Otimo"]),
                StringRecord::from(vec!["r2", "1", ""]),
            ],
        )
    }

    #[test]
    fn test_len_and_is_empty() {
        let dataset = sample();
        assert_eq!(dataset.len(), 2);
        assert!(!dataset.is_empty());
        assert!(Dataset::default().is_empty());
    }

    #[test]
    fn test_field_lookup_by_column_name() {
        let dataset = sample();
        assert_eq!(dataset.field(0, "review_comment_title"), Some("Otimo"));
        assert_eq!(dataset.field(1, "review_score"), Some("1"));
        assert_eq!(dataset.field(1, "review_comment_title"), Some(""));
    }

    #[test]
    fn test_field_lookup_misses() {
        let dataset = sample();
        assert_eq!(dataset.field(0, "order_id"), None);
        assert_eq!(dataset.field(5, "review_id"), None);
    }
}
