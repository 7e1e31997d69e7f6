//! Batch selection and dispatch of composed alerts.
//!
//! `batch` owns the pending selection and maps examinations to payloads;
//! `dispatch` is the gate in front of the external "send many notices" call.

pub mod batch;
pub mod dispatch;

pub use batch::{NoticeBatch, pick_by_ids, select_for_notice};
pub use dispatch::{NoticeError, NoticeSink, dispatch_notices};
