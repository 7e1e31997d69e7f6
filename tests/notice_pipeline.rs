/// End-to-end tests for the notice pipeline, without network access
///
/// Tests verify:
/// 1. Fixture examinations load in the API's wire format
/// 2. Selection → composition → dispatch preserves order and content
/// 3. The dispatch gate refuses empty selections before any I/O
/// 4. The pending batch is cleared after success and after failure
///
/// Run with: cargo test --test notice_pipeline

use std::cell::RefCell;

use aquaguardian_notice::alert::compose::{CONTENT_HEADER, missing_values};
use aquaguardian_notice::alert::severity::SeverityLevel;
use aquaguardian_notice::analysis::groupings::{at_or_above, group_by_farm_area};
use aquaguardian_notice::dev_mode::{DevMode, DryRunSink};
use aquaguardian_notice::model::{AlertPayload, ApiError, ExaminationSample};
use aquaguardian_notice::parameters::ParameterKey;
use aquaguardian_notice::notice::{
    NoticeBatch, NoticeError, NoticeSink, dispatch_notices, pick_by_ids, select_for_notice,
};

const FIXTURE: &str = "tests/fixtures/examinations.json";

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

fn load_fixture() -> Vec<ExaminationSample> {
    DevMode::new(FIXTURE)
        .load_samples()
        .expect("fixture should load")
}

/// Fails every batch the way an unreachable server would, and counts calls.
struct FailingSink {
    calls: RefCell<usize>,
}

impl NoticeSink for FailingSink {
    fn send_many(&self, _payloads: &[AlertPayload]) -> Result<bool, ApiError> {
        *self.calls.borrow_mut() += 1;
        Err(ApiError::Transport("connection refused".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Fixture loading
// ---------------------------------------------------------------------------

#[test]
fn test_fixture_loads_all_examinations() {
    let samples = load_fixture();
    assert_eq!(samples.len(), 3);
    assert_eq!(samples[1].farm_area.name, "South Cove");
    assert_eq!(samples[1].hexavalent_chromium, None);
    assert_eq!(samples[1].cadmium, None, "explicit null should be None");
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

#[test]
fn test_north_bay_moderate_alert() {
    let samples = load_fixture();
    let payloads = select_for_notice(&samples[..1], "manager-1");

    let alert = &payloads[0];
    assert_eq!(alert.title, "[North Bay Alert] - Moderate Level");
    assert_eq!(
        alert.description,
        "This is a Moderate Level alert for the Oyster farming"
    );
    let lines: Vec<_> = alert.content.lines().collect();
    assert_eq!(lines[0], CONTENT_HEADER);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("pH: 5.1."));
    assert!(!alert.content.contains("DO"), "unflagged DO must not appear");
}

#[test]
fn test_south_cove_severe_alert_lists_every_flag() {
    let samples = load_fixture();
    let payloads = select_for_notice(&samples[1..2], "manager-1");

    let alert = &payloads[0];
    assert_eq!(alert.title, "[South Cove Alert] - Severe Level");
    let details: Vec<_> = alert.content.lines().skip(1).collect();
    assert_eq!(details.len(), 6);
    assert!(details[0].contains("DO: 3.2mg/l."));
    assert!(details[1].contains("Temperature: 17°C."));
    assert!(details[2].contains("Temperature: 34.5°C."));
    assert!(details[3].contains("Ammonia(NH₃): 0.9mg/l."));
    assert!(details[4].contains("Coliform: 5400CFU/100ml."));
    assert!(details[5].contains("Cd: N/A."), "flagged null value gets a placeholder");
}

#[test]
fn test_flagged_gaps_are_reported_separately_from_content() {
    let samples = load_fixture();
    assert_eq!(missing_values(&samples[1]), [ParameterKey::Cadmium]);
    assert!(missing_values(&samples[0]).is_empty());
    assert!(missing_values(&samples[2]).is_empty());
}

#[test]
fn test_unflagged_examination_yields_header_only() {
    let samples = load_fixture();
    let payloads = select_for_notice(&samples[2..], "manager-1");
    assert_eq!(payloads[0].content, CONTENT_HEADER);
    assert_eq!(payloads[0].title, "[Mangrove Edge Alert] - Low Level");
}

// ---------------------------------------------------------------------------
// Selection & dispatch
// ---------------------------------------------------------------------------

#[test]
fn test_selection_order_drives_dispatch_order() {
    let samples = load_fixture();
    let ids = vec![
        "exam-mangrove-1".to_string(),
        "exam-north-1".to_string(),
        "exam-south-1".to_string(),
    ];
    let (picked, unknown) = pick_by_ids(&samples, &ids);
    assert!(unknown.is_empty());

    let sink = DryRunSink::new();
    let mut batch = NoticeBatch::new("manager-1");
    batch.select(&picked);
    assert_eq!(batch.dispatch(&sink), Ok(3));

    let areas: Vec<_> = sink.sent().into_iter().map(|p| p.farm_area_id).collect();
    assert_eq!(areas, ["area-mangrove", "area-north", "area-south"]);
    assert!(batch.is_empty(), "selection is cleared after success");
}

#[test]
fn test_min_severity_filter_then_dispatch() {
    let samples = load_fixture();
    let urgent = at_or_above(&samples, SeverityLevel::High);
    assert_eq!(urgent.len(), 1);

    let sink = DryRunSink::new();
    let sent = dispatch_notices(&sink, &select_for_notice(&urgent, "manager-1"))
        .expect("dry run accepts");
    assert_eq!(sent, 1);
    assert_eq!(sink.sent()[0].farm_area_id, "area-south");
}

#[test]
fn test_empty_selection_never_reaches_the_sink() {
    let sink = FailingSink { calls: RefCell::new(0) };
    let mut batch = NoticeBatch::new("manager-1");
    batch.select(&[]);

    assert_eq!(batch.dispatch(&sink), Err(NoticeError::NothingSelected));
    assert_eq!(*sink.calls.borrow(), 0);
}

#[test]
fn test_failed_dispatch_discards_selection() {
    let samples = load_fixture();
    let sink = FailingSink { calls: RefCell::new(0) };
    let mut batch = NoticeBatch::new("manager-1");
    batch.select(&samples);

    let result = batch.dispatch(&sink);
    assert!(matches!(result, Err(NoticeError::DispatchFailed(ref r)) if r.contains("refused")));
    assert_eq!(*sink.calls.borrow(), 1, "no retry");
    assert!(batch.is_empty(), "selection is cleared after failure too");
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

#[test]
fn test_fixture_groups_into_three_areas() {
    let summaries = group_by_farm_area(&load_fixture());
    let names: Vec<_> = summaries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Mangrove Edge", "North Bay", "South Cove"]);
    assert_eq!(summaries[2].worst_severity, SeverityLevel::Severe);
}
