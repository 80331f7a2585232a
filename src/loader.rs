use crate::error::LoadError;
use crate::types::{AccidentRecord, Period, RawRecord};
use crate::window::latest_period;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub total_rows: usize,
    pub municipalities: usize,
    pub latest_period: Period,
}

/// Read the JSON array at `path` into memory.
///
/// The whole file is rejected on the first record that does not fit the
/// expected shape; no partial dataset is returned.
pub fn load_records(path: &Path) -> Result<(Vec<AccidentRecord>, LoadReport), LoadError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    let raw: Vec<RawRecord> = serde_json::from_str(&text)?;

    let data = raw
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            AccidentRecord::try_from(row).map_err(|source| LoadError::InvalidRecord { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let municipalities: HashSet<&str> = data.iter().map(|r| r.municipality.as_str()).collect();
    let report = LoadReport {
        total_rows: data.len(),
        municipalities: municipalities.len(),
        latest_period: latest_period(&data),
    };
    info!(
        path = %path.display(),
        rows = report.total_rows,
        municipalities = report.municipalities,
        latest = %report.latest_period,
        "loaded accident records"
    );
    Ok((data, report))
}
