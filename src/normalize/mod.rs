//! Normalization logic for the attendance reconciliation engine.
//!
//! This module contains the pure functions that canonicalize the raw
//! strings arriving from the source feeds: worker identifiers, calendar
//! dates in half a dozen spellings, 12- and 24-hour clock times, and the
//! elapsed-span calculation derived from a resolved start/end pair.

mod date;
mod duration;
mod time;
mod worker_key;

pub use date::{DateOrder, normalize_date, normalize_date_with};
pub use duration::{SpanHours, span_between};
pub use time::normalize_time;
pub use worker_key::normalize_worker_key;
