//! Record normalizer
//!
//! Binds the configured target columns to header positions once, then
//! normalizes records one at a time or a whole [`Dataset`] in place. Fields
//! outside the target columns are copied verbatim.

use crate::core::normalize::normalize_field;
use crate::types::{Dataset, MissingPolicy, NormalizeError};
use csv::StringRecord;
use tracing::debug;

/// Header positions selected for normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    selected: Vec<bool>,
}

impl ColumnSelection {
    /// Map target column names to positions in `headers`
    ///
    /// Every position whose header matches a target is selected. Fails with
    /// `ColumnNotFound` for the first target that matches nothing.
    pub fn resolve<'a, H>(headers: H, columns: &[String]) -> Result<Self, NormalizeError>
    where
        H: IntoIterator<Item = &'a str>,
    {
        let names: Vec<&str> = headers.into_iter().collect();

        if let Some(missing) = columns
            .iter()
            .find(|column| !names.contains(&column.as_str()))
        {
            return Err(NormalizeError::column_not_found(missing));
        }

        let selected = names
            .iter()
            .map(|name| columns.iter().any(|column| column == name))
            .collect();

        Ok(Self { selected })
    }

    /// Whether the field at `index` is normalized
    pub fn contains(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    /// Number of selected positions
    pub fn count(&self) -> usize {
        self.selected.iter().filter(|&&s| s).count()
    }

    /// Width of the header the selection was resolved against
    pub fn width(&self) -> usize {
        self.selected.len()
    }
}

/// One normalized record and how many of its fields changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub fields: Vec<String>,
    pub changed: usize,
}

/// Totals for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    /// Records written (header excluded)
    pub records: usize,
    /// Columns per record
    pub columns: usize,
    /// Target fields whose value was rewritten
    pub normalized_fields: usize,
}

impl NormalizeSummary {
    /// Fold one record into the totals
    pub fn record(&mut self, normalized: &NormalizedRecord) {
        self.records += 1;
        self.normalized_fields += normalized.changed;
    }
}

/// Normalizes the free-text columns of each record
#[derive(Debug, Clone)]
pub struct RecordNormalizer {
    selection: ColumnSelection,
    missing: MissingPolicy,
    na_values: Vec<String>,
}

impl RecordNormalizer {
    /// Create a normalizer for a header row
    ///
    /// # Errors
    ///
    /// Returns `ColumnNotFound` if any of `columns` is not in `headers`.
    pub fn for_headers<'a, H>(
        headers: H,
        columns: &[String],
        missing: MissingPolicy,
    ) -> Result<Self, NormalizeError>
    where
        H: IntoIterator<Item = &'a str>,
    {
        let selection = ColumnSelection::resolve(headers, columns)?;
        debug!(
            selected = selection.count(),
            width = selection.width(),
            "Resolved target columns"
        );
        Ok(Self {
            selection,
            missing,
            na_values: Vec::new(),
        })
    }

    /// Also treat these exact values as absent in the target columns
    pub fn with_na_values(mut self, na_values: Vec<String>) -> Self {
        self.na_values = na_values;
        self
    }

    fn normalize_value(&self, value: &str) -> String {
        if self.na_values.iter().any(|marker| marker == value) {
            return self.missing.placeholder().to_string();
        }
        normalize_field(value, self.missing)
    }

    /// Normalize the selected fields of one record
    pub fn normalize_record<'a, I>(&self, fields: I) -> NormalizedRecord
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut changed = 0;
        let fields = fields
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                if !self.selection.contains(index) {
                    return value.to_string();
                }
                let normalized = self.normalize_value(value);
                if normalized != value {
                    changed += 1;
                }
                normalized
            })
            .collect();

        NormalizedRecord { fields, changed }
    }

    /// Normalize every record of `dataset` in place
    pub fn normalize_dataset(&self, dataset: &mut Dataset) -> NormalizeSummary {
        let mut summary = NormalizeSummary {
            columns: dataset.headers.len(),
            ..NormalizeSummary::default()
        };

        for record in dataset.records.iter_mut() {
            let normalized = self.normalize_record(record.iter());
            summary.record(&normalized);
            *record = StringRecord::from(normalized.fields);
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const HEADERS: [&str; 7] = [
        "review_id",
        "order_id",
        "review_score",
        "review_comment_title",
        "review_comment_message",
        "review_creation_date",
        "review_answer_timestamp",
    ];

    fn default_columns() -> Vec<String> {
        vec![
            "review_comment_title".to_string(),
            "review_comment_message".to_string(),
        ]
    }

    fn normalizer(missing: MissingPolicy) -> RecordNormalizer {
        RecordNormalizer::for_headers(HEADERS, &default_columns(), missing).unwrap()
    }

    #[test]
    fn test_resolve_selects_target_positions() {
        let selection = ColumnSelection::resolve(HEADERS, &default_columns()).unwrap();
        assert_eq!(selection.width(), 7);
        assert_eq!(selection.count(), 2);
        assert!(selection.contains(3));
        assert!(selection.contains(4));
        assert!(!selection.contains(0));
        assert!(!selection.contains(99));
    }

    #[test]
    fn test_resolve_fails_on_unknown_column() {
        let columns = vec!["review_comment_title".to_string(), "comment".to_string()];
        let result = ColumnSelection::resolve(HEADERS, &columns);
        assert_eq!(result, Err(NormalizeError::column_not_found("comment")));
    }

    #[test]
    fn test_resolve_selects_duplicate_headers() {
        let headers = ["id", "note", "note"];
        let selection = ColumnSelection::resolve(headers, &["note".to_string()]).unwrap();
        assert_eq!(selection.count(), 2);
        assert!(selection.contains(1));
        assert!(selection.contains(2));
    }

    #[rstest]
    #[case::scenario_a(
        ["r1", "o1", "5", "Otimo", "Great\nproduct\r\nthanks", "2018-01-18 00:00:00", "2018-01-18 21:46:59"],
        ["r1", "o1", "5", "Otimo", "Great product thanks", "2018-01-18 00:00:00", "2018-01-18 21:46:59"],
        1
    )]
    #[case::scenario_b_missing_title(
        ["r2", "o2", "4", "", "chegou certo", "2018-03-10 00:00:00", "2018-03-11 03:05:13"],
        ["r2", "o2", "4", "nan", "chegou certo", "2018-03-10 00:00:00", "2018-03-11 03:05:13"],
        1
    )]
    #[case::both_missing(
        ["r3", "o3", "5", "", "", "2018-02-17 00:00:00", "2018-02-18 14:36:24"],
        ["r3", "o3", "5", "nan", "nan", "2018-02-17 00:00:00", "2018-02-18 14:36:24"],
        2
    )]
    #[case::untouched(
        ["r4", "o4", "3", "ok", "produto ok", "2017-04-21 00:00:00", "2017-04-21 22:02:06"],
        ["r4", "o4", "3", "ok", "produto ok", "2017-04-21 00:00:00", "2017-04-21 22:02:06"],
        0
    )]
    fn test_normalize_record(
        #[case] input: [&str; 7],
        #[case] expected: [&str; 7],
        #[case] changed: usize,
    ) {
        let result = normalizer(MissingPolicy::Nan).normalize_record(input);
        assert_eq!(result.fields, expected);
        assert_eq!(result.changed, changed);
    }

    #[test]
    fn test_normalize_record_leaves_other_columns_verbatim() {
        // Line breaks outside the target columns are data, not our concern
        let input = ["r\n1", "o1", "5", "t", "m", "", ""];
        let result = normalizer(MissingPolicy::Nan).normalize_record(input);
        assert_eq!(result.fields[0], "r\n1");
        assert_eq!(result.fields[5], "");
        assert_eq!(result.fields[6], "");
    }

    #[test]
    fn test_normalize_record_empty_policy() {
        let input = ["r1", "o1", "5", "", "a\r\nb", "", ""];
        let result = normalizer(MissingPolicy::Empty).normalize_record(input);
        assert_eq!(result.fields[3], "");
        assert_eq!(result.fields[4], "a b");
        assert_eq!(result.changed, 1);
    }

    #[test]
    fn test_normalize_record_carriage_return_only_stays_empty() {
        let input = ["r1", "o1", "5", "\r", "ok", "", ""];
        let result = normalizer(MissingPolicy::Nan).normalize_record(input);
        assert_eq!(result.fields[3], "");
        assert_eq!(result.fields[4], "ok");
        assert_eq!(result.changed, 1);
    }

    #[rstest]
    #[case::marker_in_title(["r1", "o1", "5", "NA", "null", "NA", "d"], "nan", "nan", 2)]
    #[case::marker_is_exact(["r1", "o1", "5", " NA", "Nulled", "null", "d"], " NA", "Nulled", 0)]
    fn test_normalize_record_na_values(
        #[case] input: [&str; 7],
        #[case] title: &str,
        #[case] message: &str,
        #[case] changed: usize,
    ) {
        let normalizer = normalizer(MissingPolicy::Nan)
            .with_na_values(vec!["NA".to_string(), "null".to_string()]);
        let result = normalizer.normalize_record(input);

        assert_eq!(result.fields[3], title);
        assert_eq!(result.fields[4], message);
        // Markers outside the target columns are data
        assert_eq!(result.fields[5], input[5]);
        assert_eq!(result.changed, changed);
    }

    #[test]
    fn test_normalize_dataset_preserves_order_and_count() {
        let mut dataset = Dataset::new(
            StringRecord::from(HEADERS.to_vec()),
            vec![
                StringRecord::from(vec!["r1", "o1", "5", "", "a\nb", "d", "t"]),
                StringRecord::from(vec!["r2", "o2", "1", "ruim", "nao\r\nchegou", "d", "t"]),
                StringRecord::from(vec!["r3", "o3", "4", "bom", "bom", "d", "t"]),
            ],
        );

        let summary = normalizer(MissingPolicy::Nan).normalize_dataset(&mut dataset);

        assert_eq!(
            summary,
            NormalizeSummary {
                records: 3,
                columns: 7,
                normalized_fields: 3,
            }
        );
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.field(0, "review_id"), Some("r1"));
        assert_eq!(dataset.field(0, "review_comment_title"), Some("nan"));
        assert_eq!(dataset.field(0, "review_comment_message"), Some("a b"));
        assert_eq!(dataset.field(1, "review_comment_message"), Some("nao chegou"));
        assert_eq!(dataset.field(2, "review_id"), Some("r3"));
    }

    #[test]
    fn test_normalize_dataset_twice_is_noop() {
        let mut dataset = Dataset::new(
            StringRecord::from(HEADERS.to_vec()),
            vec![StringRecord::from(vec!["r1", "o1", "5", "", "x\r\ny\n", "d", "t"])],
        );
        let normalizer = normalizer(MissingPolicy::Nan);

        normalizer.normalize_dataset(&mut dataset);
        let once = dataset.clone();
        let summary = normalizer.normalize_dataset(&mut dataset);

        assert_eq!(dataset, once);
        assert_eq!(summary.normalized_fields, 0);
    }
}
