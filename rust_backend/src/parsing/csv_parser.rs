use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::domain::{RawValue, TimeSeriesInput};
use crate::error::{AnalyticsError, AnalyticsResult};

/// Load a weigh-in time series from a CSV file.
///
/// The first column holds dates (`YYYY-MM-DD` or similar) or day indices and
/// the second column holds weights. Any further columns are ignored.
pub fn load_timeseries_csv(csv_path: &Path) -> AnalyticsResult<TimeSeriesInput> {
    let file = File::open(csv_path)?;
    let input = parse_timeseries_csv(file)?;
    log::info!(
        "Loaded {} weigh-in rows from {}",
        input.len(),
        csv_path.display()
    );
    Ok(input)
}

/// Parse a weigh-in time series from any CSV reader.
///
/// A header row is required. Cell contents are kept raw: coercion to days and
/// weights happens in the growth estimator, which drops malformed rows.
pub fn parse_timeseries_csv<R: Read>(reader: R) -> AnalyticsResult<TimeSeriesInput> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        return Err(AnalyticsError::MalformedTable(format!(
            "CSV must have at least two columns (date/day, weight), found {}",
            headers.len()
        )));
    }
    log::debug!(
        "Using '{}' as the date/day column and '{}' as the weight column",
        &headers[0],
        &headers[1]
    );

    let mut input = TimeSeriesInput::new();
    for result in rdr.records() {
        let record = result?;
        let timestamp = record.get(0).map(RawValue::from_cell).unwrap_or(RawValue::Missing);
        let weight = record.get(1).map(RawValue::from_cell).unwrap_or(RawValue::Missing);
        input.push(timestamp, weight);
    }

    Ok(input)
}
