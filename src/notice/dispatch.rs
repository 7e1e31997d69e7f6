//! Dispatch gate for composed notices.
//!
//! The REST collaborator sits behind the `NoticeSink` trait so the gate can be
//! exercised without a server. A dispatch is a single call: no retry, no
//! rollback. An empty batch is refused before any I/O.

use std::fmt;

use crate::logging::{self, Component};
use crate::model::{AlertPayload, ApiError};

// ---------------------------------------------------------------------------
// Sink
// ---------------------------------------------------------------------------

/// Anything that can accept a batch of notices in one request.
///
/// `Ok(true)` means the collaborator acknowledged the batch; `Ok(false)` is
/// a falsy acknowledgement and counts as a failure.
pub trait NoticeSink {
    fn send_many(&self, payloads: &[AlertPayload]) -> Result<bool, ApiError>;
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
pub enum NoticeError {
    /// Nothing was selected; the request was never made.
    NothingSelected,
    /// The collaborator rejected the batch or could not be reached.
    DispatchFailed(String),
}

impl fmt::Display for NoticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeError::NothingSelected => {
                write!(f, "Please select at least one examination to send notice")
            }
            NoticeError::DispatchFailed(reason) => {
                write!(f, "Send notice to area failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for NoticeError {}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

/// Submits `payloads` through `sink` in one call.
///
/// Returns the number of notices accepted. Fails with
/// `NoticeError::NothingSelected` when `payloads` is empty, without touching
/// the sink.
pub fn dispatch_notices<S: NoticeSink + ?Sized>(
    sink: &S,
    payloads: &[AlertPayload],
) -> Result<usize, NoticeError> {
    if payloads.is_empty() {
        logging::warn(Component::Notice, None, "no examinations selected; nothing sent");
        return Err(NoticeError::NothingSelected);
    }

    let outcome = match sink.send_many(payloads) {
        Ok(true) => Ok(payloads.len()),
        Ok(false) => Err(NoticeError::DispatchFailed(
            "server did not acknowledge the batch".to_string(),
        )),
        Err(e) => {
            logging::log_api_failure("send-many-notice", "Send notices", &e);
            Err(NoticeError::DispatchFailed(e.to_string()))
        }
    };

    logging::log_dispatch_summary(payloads.len(), outcome.is_ok());

    outcome
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every batch it receives and answers with a fixed result.
    struct RecordingSink {
        answer: Result<bool, ApiError>,
        batches: RefCell<Vec<Vec<AlertPayload>>>,
    }

    impl RecordingSink {
        fn answering(answer: Result<bool, ApiError>) -> Self {
            Self {
                answer,
                batches: RefCell::new(Vec::new()),
            }
        }
    }

    impl NoticeSink for RecordingSink {
        fn send_many(&self, payloads: &[AlertPayload]) -> Result<bool, ApiError> {
            self.batches.borrow_mut().push(payloads.to_vec());
            match &self.answer {
                Ok(ack) => Ok(*ack),
                Err(ApiError::HttpError(code)) => Err(ApiError::HttpError(*code)),
                Err(_) => Err(ApiError::Transport("unreachable".to_string())),
            }
        }
    }

    fn payload(area: &str) -> AlertPayload {
        AlertPayload {
            title: format!("[{} Alert] - Low Level", area),
            description: "This is a Low Level alert for the Oyster farming".to_string(),
            content: "Environmental Data:".to_string(),
            user_id: "user-1".to_string(),
            farm_area_id: area.to_string(),
        }
    }

    #[test]
    fn test_empty_batch_is_refused_without_calling_sink() {
        let sink = RecordingSink::answering(Ok(true));
        let result = dispatch_notices(&sink, &[]);
        assert_eq!(result, Err(NoticeError::NothingSelected));
        assert!(sink.batches.borrow().is_empty(), "sink must not be called");
    }

    #[test]
    fn test_acknowledged_batch_reports_count() {
        let sink = RecordingSink::answering(Ok(true));
        let batch = vec![payload("a"), payload("b")];
        assert_eq!(dispatch_notices(&sink, &batch), Ok(2));
        assert_eq!(sink.batches.borrow().len(), 1, "one request per batch");
        assert_eq!(sink.batches.borrow()[0], batch);
    }

    #[test]
    fn test_falsy_acknowledgement_is_a_failure() {
        let sink = RecordingSink::answering(Ok(false));
        let result = dispatch_notices(&sink, &[payload("a")]);
        assert!(matches!(result, Err(NoticeError::DispatchFailed(_))));
    }

    #[test]
    fn test_server_error_is_a_failure_and_not_retried() {
        let sink = RecordingSink::answering(Err(ApiError::HttpError(500)));
        let result = dispatch_notices(&sink, &[payload("a")]);
        match result {
            Err(NoticeError::DispatchFailed(reason)) => assert!(reason.contains("500")),
            other => panic!("expected DispatchFailed, got {:?}", other),
        }
        assert_eq!(sink.batches.borrow().len(), 1, "no retry");
    }

    #[test]
    fn test_guard_message_is_user_facing() {
        assert!(NoticeError::NothingSelected.to_string().contains("select at least one"));
    }
}
