//! Pending-notice selection.
//!
//! A selection of examinations becomes an ordered batch of payloads. The
//! batch is owned by whoever runs the "send notice" use case and is passed
//! explicitly; there is no ambient selection state.

use crate::alert::compose::{compose_alert, missing_values};
use crate::logging::{self, Component};
use crate::model::{AlertPayload, ExaminationSample};
use crate::notice::dispatch::{NoticeError, NoticeSink, dispatch_notices};

/// Composes one payload per sample, preserving the selection order.
pub fn select_for_notice(
    samples: &[ExaminationSample],
    acting_user_id: &str,
) -> Vec<AlertPayload> {
    samples
        .iter()
        .map(|sample| compose_alert(sample, acting_user_id))
        .collect()
}

/// Picks samples by id, in the order the ids are given.
///
/// Returns the picked samples and the ids that matched nothing. A repeated id
/// is picked once per mention.
pub fn pick_by_ids(
    samples: &[ExaminationSample],
    ids: &[String],
) -> (Vec<ExaminationSample>, Vec<String>) {
    let mut picked = Vec::with_capacity(ids.len());
    let mut unknown = Vec::new();

    for id in ids {
        match samples.iter().find(|s| &s.id == id) {
            Some(sample) => picked.push(sample.clone()),
            None => unknown.push(id.clone()),
        }
    }

    (picked, unknown)
}

/// The pending batch for one acting user.
#[derive(Debug, Clone, Default)]
pub struct NoticeBatch {
    acting_user_id: String,
    pending: Vec<AlertPayload>,
}

impl NoticeBatch {
    pub fn new(acting_user_id: impl Into<String>) -> Self {
        Self {
            acting_user_id: acting_user_id.into(),
            pending: Vec::new(),
        }
    }

    /// Replaces the pending batch with payloads for `samples`.
    ///
    /// A new selection always supersedes the previous one, the way a table
    /// selection change does. Flagged parameters without a value are logged
    /// here, since their lines carry a placeholder.
    pub fn select(&mut self, samples: &[ExaminationSample]) {
        for sample in samples {
            for key in missing_values(sample) {
                logging::warn(
                    Component::Alert,
                    Some(&sample.id),
                    &format!(
                        "{} is flagged but has no value; rendering placeholder",
                        key.wire_name()
                    ),
                );
            }
        }
        self.pending = select_for_notice(samples, &self.acting_user_id);
    }

    pub fn pending(&self) -> &[AlertPayload] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn acting_user_id(&self) -> &str {
        &self.acting_user_id
    }

    /// Sends the pending batch through `sink`.
    ///
    /// Once the sink has been called the pending batch is cleared, whether
    /// the dispatch succeeded or failed. A refused empty batch is left as is.
    pub fn dispatch<S: NoticeSink + ?Sized>(&mut self, sink: &S) -> Result<usize, NoticeError> {
        let result = dispatch_notices(sink, &self.pending);
        if !matches!(result, Err(NoticeError::NothingSelected)) {
            self.pending.clear();
        }
        result
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
