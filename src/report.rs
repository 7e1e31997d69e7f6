//! Console report formatting.
//!
//! Reshapes examinations and notices into flat rows for terminal tables:
//! farm-area fields are flattened, measurements get two decimals, and
//! timestamps use a day-first layout.

use chrono::{DateTime, Utc};

use crate::alert::severity::classify_severity;
use crate::model::{ExaminationSample, NoticeRecord, PreferredUser};
use crate::parameters::{PARAMETER_REGISTRY, ParameterKey};

/// Shown for absent measurements, counts of zero and missing timestamps.
pub const EMPTY_CELL: &str = "-";

pub const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";

// ---------------------------------------------------------------------------
// Cell formatting
// ---------------------------------------------------------------------------

/// Two decimals. Absent and zero readings both show as `EMPTY_CELL`, like
/// zero warning counts.
pub fn format_measurement(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => format!("{:.2}", v),
        _ => EMPTY_CELL.to_string(),
    }
}

pub fn format_warning_count(level: u32) -> String {
    if level == 0 {
        EMPTY_CELL.to_string()
    } else {
        level.to_string()
    }
}

pub fn format_date_time(at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(t) => t.format(DATE_TIME_FORMAT).to_string(),
        None => EMPTY_CELL.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Examination rows
// ---------------------------------------------------------------------------

/// One examination, flattened for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ExaminationRow {
    pub id: String,
    pub name_farm: String,
    pub type_farm: String,
    /// Formatted measurements, in registry order.
    pub measurements: Vec<(ParameterKey, String)>,
    pub warnings: String,
    pub severity: String,
    pub created_at: String,
}

impl ExaminationRow {
    pub fn from_sample(sample: &ExaminationSample) -> Self {
        Self {
            id: sample.id.clone(),
            name_farm: sample.farm_area.name.clone(),
            type_farm: sample.farm_area.farm_type.clone(),
            measurements: PARAMETER_REGISTRY
                .iter()
                .map(|p| (p.key, format_measurement(sample.value(p.key))))
                .collect(),
            warnings: format_warning_count(sample.warning.level),
            severity: classify_severity(sample.warning.level).label().to_string(),
            created_at: format_date_time(sample.created_at),
        }
    }

    pub fn measurement(&self, key: ParameterKey) -> &str {
        self.measurements
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or(EMPTY_CELL)
    }
}

/// Tab-separated header matching `render_examination_row`.
pub fn examination_header() -> String {
    let mut cells = vec!["ID", "Name Farm", "Type"];
    cells.extend(PARAMETER_REGISTRY.iter().map(|p| p.key.wire_name()));
    cells.extend(["Number of Warn", "Severity", "Created At"]);
    cells.join("\t")
}

pub fn render_examination_row(row: &ExaminationRow) -> String {
    let mut cells = vec![row.id.as_str(), row.name_farm.as_str(), row.type_farm.as_str()];
    cells.extend(row.measurements.iter().map(|(_, v)| v.as_str()));
    cells.extend([row.warnings.as_str(), row.severity.as_str(), row.created_at.as_str()]);
    cells.join("\t")
}

// ---------------------------------------------------------------------------
// Notice rows
// ---------------------------------------------------------------------------

pub fn render_notice(notice: &NoticeRecord) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        format_date_time(notice.created_at),
        notice.channel,
        notice.title,
        notice.description
    )
}

// ---------------------------------------------------------------------------
// Recipient rows
// ---------------------------------------------------------------------------

pub const RECIPIENT_HEADER: &str = "#\tName\tEmail\tPhone\tAddress";

/// One numbered recipient row; blank fields show as `EMPTY_CELL`.
pub fn render_recipient(index: usize, user: &PreferredUser) -> String {
    let cell = |v: &str| if v.is_empty() { EMPTY_CELL.to_string() } else { v.to_string() };
    format!(
        "{}\t{}\t{}\t{}\t{}",
        index,
        cell(&user.username),
        cell(&user.email),
        cell(&user.phone),
        cell(&user.address)
    )
}
