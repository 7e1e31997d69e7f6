/// Development mode utilities for working without the live API
///
/// When the AquaGuardian backend is unavailable, use this module to replay
/// examinations from a JSON fixture (the same shape the API returns) and to
/// dispatch notices into a sink that only logs them.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::ingest::aquaguardian::parse_examinations;
use crate::logging::{self, Component};
use crate::model::{AlertPayload, ApiError, ExaminationSample};
use crate::notice::NoticeSink;

/// Configuration for development mode data replay
pub struct DevMode {
    /// JSON file holding an array of examinations (or `{"data": [...]}`)
    pub fixture_path: PathBuf,
}

impl DevMode {
    pub fn new(fixture_path: impl AsRef<Path>) -> Self {
        Self {
            fixture_path: fixture_path.as_ref().to_path_buf(),
        }
    }

    /// Load the replayed examinations
    pub fn load_samples(&self) -> Result<Vec<ExaminationSample>, Box<dyn std::error::Error>> {
        let body = std::fs::read_to_string(&self.fixture_path)?;
        let samples = parse_examinations(&body)?;
        logging::debug(
            Component::System,
            None,
            &format!(
                "loaded {} examinations from {}",
                samples.len(),
                self.fixture_path.display()
            ),
        );
        Ok(samples)
    }
}

/// Accepts every batch without network I/O and keeps what it was given.
#[derive(Debug, Default)]
pub struct DryRunSink {
    sent: RefCell<Vec<AlertPayload>>,
}

impl DryRunSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything accepted so far, in dispatch order.
    pub fn sent(&self) -> Vec<AlertPayload> {
        self.sent.borrow().clone()
    }
}

impl NoticeSink for DryRunSink {
    fn send_many(&self, payloads: &[AlertPayload]) -> Result<bool, ApiError> {
        for payload in payloads {
            logging::info(
                Component::Notice,
                Some(&payload.farm_area_id),
                &format!("[dry run] {}", payload.title),
            );
        }
        self.sent.borrow_mut().extend_from_slice(payloads);
        Ok(true)
    }
}
