/// Per-farm-area grouping of examinations.
///
/// Produces one summary per farm area from a flat examination list: how many
/// examinations it has, the worst severity among them, and when it was last
/// examined. Used by the `summary` command to decide where notices matter.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

use crate::alert::severity::{SeverityLevel, classify_severity};
use crate::model::ExaminationSample;

#[derive(Debug, Clone, PartialEq)]
pub struct FarmAreaSummary {
    pub farm_area_id: String,
    pub name: String,
    pub farm_type: String,
    pub exam_count: usize,
    pub worst_severity: SeverityLevel,
    pub latest_exam: Option<DateTime<Utc>>,
}

/// Groups samples by farm-area id, ordered by farm-area name then id.
pub fn group_by_farm_area(samples: &[ExaminationSample]) -> Vec<FarmAreaSummary> {
    let mut by_area: HashMap<&str, FarmAreaSummary> = HashMap::new();

    for sample in samples {
        let severity = classify_severity(sample.warning.level);
        let entry = by_area
            .entry(sample.farm_area.id.as_str())
            .or_insert_with(|| FarmAreaSummary {
                farm_area_id: sample.farm_area.id.clone(),
                name: sample.farm_area.name.clone(),
                farm_type: sample.farm_area.farm_type.clone(),
                exam_count: 0,
                worst_severity: severity,
                latest_exam: None,
            });

        entry.exam_count += 1;
        entry.worst_severity = entry.worst_severity.max(severity);
        entry.latest_exam = match (entry.latest_exam, sample.created_at) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
    }

    let mut summaries: Vec<_> = by_area.into_values().collect();
    summaries.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.farm_area_id.cmp(&b.farm_area_id))
    });
    summaries
}

/// Number of samples at each severity level. Every level is present.
pub fn severity_histogram(samples: &[ExaminationSample]) -> BTreeMap<SeverityLevel, usize> {
    let mut histogram: BTreeMap<SeverityLevel, usize> =
        SeverityLevel::ALL.iter().map(|s| (*s, 0)).collect();
    for sample in samples {
        *histogram
            .entry(classify_severity(sample.warning.level))
            .or_insert(0) += 1;
    }
    histogram
}

/// Samples whose severity is at least `min`, in their original order.
pub fn at_or_above(samples: &[ExaminationSample], min: SeverityLevel) -> Vec<ExaminationSample> {
    samples
        .iter()
        .filter(|s| classify_severity(s.warning.level) >= min)
        .cloned()
        .collect()
}
