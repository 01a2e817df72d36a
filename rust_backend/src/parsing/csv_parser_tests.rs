#[cfg(test)]
mod tests {
    use crate::core::domain::RawValue;
    use crate::error::AnalyticsError;
    use crate::parsing::csv_parser::{load_timeseries_csv, parse_timeseries_csv};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to create a temp CSV file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    /// Test parsing a date/weight sheet
    #[test]
    fn test_parse_dates_and_weights() {
        let csv_content = "date,weight\n2025-01-01,100\n2025-01-11,110\n2025-01-21,120\n";

        let input = parse_timeseries_csv(csv_content.as_bytes()).unwrap();

        assert_eq!(input.len(), 3);
        assert_eq!(input.timestamps[0], RawValue::Text("2025-01-01".into()));
        assert_eq!(input.weights[2].as_number(), Some(120.0));
    }

    /// Test parsing a day-index sheet
    #[test]
    fn test_parse_day_index_sheet() {
        let csv_content = "day,kg\n0,250.5\n14,262.0\n";

        let input = parse_timeseries_csv(csv_content.as_bytes()).unwrap();

        assert_eq!(input.len(), 2);
        assert_eq!(input.timestamps[1].as_number(), Some(14.0));
        assert!(input.timestamps[1].as_datetime().is_none());
    }

    /// Blank cells are kept as missing so the estimator can drop the row
    #[test]
    fn test_blank_cells_become_missing() {
        let csv_content = "date,weight\n2025-01-01,\n,110\n2025-01-21,120\n";

        let input = parse_timeseries_csv(csv_content.as_bytes()).unwrap();

        assert_eq!(input.len(), 3);
        assert!(input.weights[0].is_missing());
        assert!(input.timestamps[1].is_missing());
    }

    /// Short rows yield a missing weight instead of an error
    #[test]
    fn test_short_rows_are_tolerated() {
        let csv_content = "date,weight\n2025-01-01\n2025-01-11,110\n";

        let input = parse_timeseries_csv(csv_content.as_bytes()).unwrap();

        assert_eq!(input.len(), 2);
        assert!(input.weights[0].is_missing());
    }

    /// Extra columns beyond the first two are ignored
    #[test]
    fn test_extra_columns_ignored() {
        let csv_content = "date,weight,notes\n2025-01-01,100,ok\n2025-01-11,110,limping\n";

        let input = parse_timeseries_csv(csv_content.as_bytes()).unwrap();

        assert_eq!(input.len(), 2);
        assert_eq!(input.weights[1].as_number(), Some(110.0));
    }

    /// A single-column sheet cannot describe a time series
    #[test]
    fn test_single_column_rejected() {
        let csv_content = "weight\n100\n110\n";

        let result = parse_timeseries_csv(csv_content.as_bytes());

        assert!(matches!(result, Err(AnalyticsError::MalformedTable(_))));
    }

    /// Header-only sheet parses to an empty series
    #[test]
    fn test_header_only() {
        let input = parse_timeseries_csv("date,weight\n".as_bytes()).unwrap();
        assert!(input.is_empty());
    }

    /// Test loading from a file on disk
    #[test]
    fn test_load_from_file() {
        let temp_file = create_temp_csv("date,weight\n2025-01-01,100\n2025-01-11,110\n");

        let result = load_timeseries_csv(temp_file.path());

        assert!(result.is_ok(), "Should load CSV: {:?}", result.err());
        assert_eq!(result.unwrap().len(), 2);
    }

    /// Missing file surfaces as an I/O error
    #[test]
    fn test_load_missing_file() {
        let result = load_timeseries_csv(std::path::Path::new("/nonexistent/weights.csv"));
        assert!(matches!(result, Err(AnalyticsError::Io(_))));
    }
}
