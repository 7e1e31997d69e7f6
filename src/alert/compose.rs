//! Alert composition for flagged examinations.
//!
//! Turns one examination into an `AlertPayload`: a subject line carrying the
//! farm area and severity, and a multi-line report listing every flagged
//! parameter with its measured value and a fixed risk sentence.
//!
//! Inclusion is driven by the warning flags only. A flagged parameter whose
//! value is missing still gets a line, rendered with `MISSING_VALUE`.

use crate::alert::severity::{SeverityLevel, classify_severity};
use crate::model::{AlertPayload, ExaminationSample};
use crate::parameters::{PARAMETER_REGISTRY, Parameter, ParameterKey};

/// First line of every report.
pub const CONTENT_HEADER: &str = "Environmental Data:";

/// Rendered in place of value and unit when a flagged parameter has no value.
pub const MISSING_VALUE: &str = "N/A";

// ---------------------------------------------------------------------------
// Line rendering
// ---------------------------------------------------------------------------

/// Formats a measurement with its unit suffix appended directly, e.g. `3.2mg/l`.
pub fn format_value(value: Option<f64>, unit: Option<&str>) -> String {
    match value {
        Some(v) => format!("{}{}", v, unit.unwrap_or("")),
        None => MISSING_VALUE.to_string(),
    }
}

/// Renders the report line for one flagged parameter.
pub fn render_line(parameter: &Parameter, value: Option<f64>) -> String {
    format!(
        "- {}: {}. {}",
        parameter.display_name,
        format_value(value, parameter.unit),
        parameter.explanation
    )
}

/// Registry rows whose warning flag is set on `sample`, in canonical order.
pub fn flagged_parameters(
    sample: &ExaminationSample,
) -> impl Iterator<Item = &'static Parameter> + '_ {
    PARAMETER_REGISTRY
        .iter()
        .filter(move |p| sample.warning.is_flagged(p.key))
}

/// Flagged parameters with no measured value; these render as `MISSING_VALUE`.
pub fn missing_values(sample: &ExaminationSample) -> Vec<ParameterKey> {
    flagged_parameters(sample)
        .map(|p| p.key)
        .filter(|key| sample.value(*key).is_none())
        .collect()
}

/// Builds the report body: the header, then one line per flagged parameter.
pub fn compose_content(sample: &ExaminationSample) -> String {
    let mut lines = vec![CONTENT_HEADER.to_string()];

    for parameter in flagged_parameters(sample) {
        lines.push(render_line(parameter, sample.value(parameter.key)));
    }

    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Subject lines
// ---------------------------------------------------------------------------

/// `[<area name> Alert] - <severity label>`
pub fn alert_title(farm_area_name: &str, severity: SeverityLevel) -> String {
    format!("[{} Alert] - {}", farm_area_name, severity.label())
}

/// `This is a <severity label> alert for the <area type>`
pub fn alert_description(farm_area_type: &str, severity: SeverityLevel) -> String {
    format!("This is a {} alert for the {}", severity.label(), farm_area_type)
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Composes the alert for one examination on behalf of `acting_user_id`.
///
/// Never fails: a sample with no flags yields a payload whose content is
/// just the header. Whether such a payload is worth sending is the caller's
/// decision.
pub fn compose_alert(sample: &ExaminationSample, acting_user_id: &str) -> AlertPayload {
    let severity = classify_severity(sample.warning.level);

    AlertPayload {
        title: alert_title(&sample.farm_area.name, severity),
        description: alert_description(&sample.farm_area.farm_type, severity),
        content: compose_content(sample),
        user_id: acting_user_id.to_string(),
        farm_area_id: sample.farm_area.id.clone(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FarmAreaRef;

    fn sample_for(name: &str, farm_type: &str) -> ExaminationSample {
        ExaminationSample::new(
            "exam-1",
            FarmAreaRef {
                id: "area-1".to_string(),
                name: name.to_string(),
                farm_type: farm_type.to_string(),
            },
        )
    }

    fn detail_lines(content: &str) -> Vec<&str> {
        content.lines().skip(1).collect()
    }

    // --- Content ------------------------------------------------------------

    #[test]
    fn test_no_flags_yields_header_only() {
        let mut sample = sample_for("North Bay", "Oyster farming");
        sample.dissolved_oxygen = Some(7.5);
        sample.ph = Some(7.9);

        let payload = compose_alert(&sample, "user-1");
        assert_eq!(payload.content, CONTENT_HEADER);
    }

    #[test]
    fn test_single_flag_yields_single_line() {
        let mut sample = sample_for("North Bay", "Oyster farming");
        sample.dissolved_oxygen = Some(3.2);
        sample.ph = Some(5.1);
        sample.warning.is_do = true;
        sample.warning.level = 1;

        let payload = compose_alert(&sample, "user-1");
        let lines = detail_lines(&payload.content);
        assert_eq!(lines.len(), 1, "content was:\n{}", payload.content);
        assert!(lines[0].contains("DO"));
        assert!(lines[0].contains("3.2mg/l"));
        assert!(!payload.content.contains("pH"), "unflagged pH must not appear");
    }

    #[test]
    fn test_line_format() {
        let mut sample = sample_for("A", "Cobia farming");
        sample.salinity = Some(12.0);
        sample.warning.is_salinity = true;

        let content = compose_content(&sample);
        assert_eq!(
            detail_lines(&content),
            ["- Salinity: 12‰. Low salinity aquatic environments can affect the ability \
              of aquatic species to sustain life."]
        );
    }

    #[test]
    fn test_both_temperature_flags_produce_two_lines() {
        let mut sample = sample_for("A", "Cobia farming");
        sample.temperature = Some(17.0);
        sample.temperature_right = Some(34.5);
        sample.warning.is_temperature = true;
        sample.warning.is_temperature_right = true;
        sample.warning.level = 2;

        let content = compose_content(&sample);
        let lines = detail_lines(&content);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("- Temperature: 17°C."));
        assert!(lines[1].starts_with("- Temperature: 34.5°C."));
        assert_ne!(lines[0], lines[1]);
    }

    #[test]
    fn test_lines_follow_registry_order_not_flag_order() {
        let mut sample = sample_for("A", "Cobia farming");
        sample.rainfall = Some(120.0);
        sample.ph = Some(5.0);
        sample.dissolved_oxygen = Some(2.0);
        sample.warning.is_rainfall = true;
        sample.warning.is_ph = true;
        sample.warning.is_do = true;

        let content = compose_content(&sample);
        let lines = detail_lines(&content);
        assert!(lines[0].starts_with("- DO:"));
        assert!(lines[1].starts_with("- pH:"));
        assert!(lines[2].starts_with("- Rainfall: 120mm."));
    }

    #[test]
    fn test_dimensionless_value_has_no_suffix() {
        let mut sample = sample_for("A", "Cobia farming");
        sample.ph = Some(5.1);
        sample.warning.is_ph = true;

        let content = compose_content(&sample);
        assert!(content.contains("- pH: 5.1. Low pH"));
    }

    #[test]
    fn test_flagged_missing_value_renders_placeholder() {
        let mut sample = sample_for("A", "Mangrove forest");
        sample.warning.is_cd = true;
        sample.warning.level = 1;

        let content = compose_content(&sample);
        let lines = detail_lines(&content);
        assert_eq!(lines.len(), 1, "flag drives inclusion even without a value");
        assert!(lines[0].starts_with(&format!("- Cd: {}.", MISSING_VALUE)));
    }

    #[test]
    fn test_missing_values_lists_flagged_gaps_only() {
        let mut sample = sample_for("South Cove", "Cobia farming");
        sample.dissolved_oxygen = Some(3.2);
        sample.warning.is_do = true;
        sample.warning.is_cd = true;
        sample.warning.level = 2;

        assert_eq!(missing_values(&sample), [ParameterKey::Cadmium]);
        sample.cadmium = Some(0.02);
        assert!(missing_values(&sample).is_empty());
    }

    #[test]
    fn test_value_without_flag_is_skipped() {
        let mut sample = sample_for("A", "Mangrove forest");
        sample.mercury = Some(0.9);

        assert_eq!(compose_content(&sample), CONTENT_HEADER);
    }

    #[test]
    fn test_every_flag_emits_its_row() {
        let mut sample = sample_for("A", "Mangrove forest");
        sample.warning = serde_json::from_str(
            r#"{"isDO":true,"isTemperature":true,"isPH":true,"isTemperatureRight":true,
                "isAmmonia":true,"isBOD5":true,"isCOD":true,"isColiform":true,
                "isClarity":true,"isPhosphat":true,"isSalinity":true,"isAlkalinity":true,
                "isSuspendedSolids":true,"isTotalCrom":true,"isH2S":true,"isCN":true,
                "isAs":true,"isCd":true,"isPb":true,"isCu":true,"isHg":true,"isMn":true,
                "isFe":true,"isZn":true,"isCr6":true,"isF":true,"isTotalPH":true,
                "isRainfall":true,"level":28}"#,
        )
        .expect("valid flags");

        let content = compose_content(&sample);
        assert_eq!(detail_lines(&content).len(), PARAMETER_REGISTRY.len());
        assert!(flagged_parameters(&sample).any(|p| p.key == ParameterKey::Rainfall));
    }

    // --- Subject lines ------------------------------------------------------

    #[test]
    fn test_moderate_example_scenario() {
        let mut sample = sample_for("North Bay", "Oyster farming");
        sample.ph = Some(5.1);
        sample.dissolved_oxygen = Some(6.8);
        sample.warning.is_ph = true;
        sample.warning.is_do = false;
        sample.warning.level = 6;

        let payload = compose_alert(&sample, "user-7");
        assert_eq!(payload.title, "[North Bay Alert] - Moderate Level");
        assert_eq!(
            payload.description,
            "This is a Moderate Level alert for the Oyster farming"
        );
        assert_eq!(detail_lines(&payload.content).len(), 1);
        assert!(payload.content.contains("pH: 5.1"));
        assert!(!payload.content.contains("DO"));
        assert_eq!(payload.user_id, "user-7");
        assert_eq!(payload.farm_area_id, "area-1");
    }

    #[test]
    fn test_title_uses_all_four_labels() {
        for (level, label) in [
            (0, "Low Level"),
            (7, "Moderate Level"),
            (10, "High Level"),
            (20, "Severe Level"),
        ] {
            let mut sample = sample_for("South Cove", "Cobia farming");
            sample.warning.level = level;
            let payload = compose_alert(&sample, "u");
            assert_eq!(payload.title, format!("[South Cove Alert] - {}", label));
        }
    }

    #[test]
    fn test_level_is_not_recomputed_from_flags() {
        let mut sample = sample_for("A", "Cobia farming");
        sample.warning.is_do = true;
        sample.warning.level = 14;

        let payload = compose_alert(&sample, "u");
        assert!(payload.title.ends_with("Severe Level"));
    }
}
