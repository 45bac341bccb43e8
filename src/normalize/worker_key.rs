//! Worker identity normalization.
//!
//! This module canonicalizes the raw worker identifiers that the source
//! feeds disagree on: casing, whitespace, noise prefixes, and
//! "Last, First" orderings all collapse to one comparable key.

/// Prefixes the feeds prepend to identifiers without changing identity.
const NOISE_PREFIXES: [&str; 4] = ["driver:", "id:", "employee:", "worker:"];

/// Normalizes a raw worker identifier into a canonical join key.
///
/// The canonical form is lowercase, single-spaced, comma-free, and ordered
/// "First Last". Two raw identifiers that normalize to the same string are
/// treated as the same worker; no fuzzy matching happens here.
///
/// Normalization steps, in order:
/// 1. Trim and case-fold to lowercase.
/// 2. Strip known noise prefixes (`driver:`, `id:`, `employee:`,
///    `worker:`), repeatedly, so stacked prefixes dissolve.
/// 3. Reorder `"Last, First"` to `"First Last"` on the first comma; any
///    remaining commas become spaces. Prefixes are stripped again after
///    the reorder, since `"Smith, Driver: John"` moves one to the front.
/// 4. Collapse internal whitespace runs to single spaces.
///
/// An empty result means the record has no usable worker key; callers
/// treat that as a drop condition.
///
/// # Arguments
///
/// * `raw` - The worker identifier exactly as a source feed supplied it
///
/// # Returns
///
/// The canonical key as a `String`, possibly empty.
///
/// # Example
///
/// ```
/// use attendance_engine::normalize::normalize_worker_key;
///
/// assert_eq!(normalize_worker_key("Driver: John Smith"), "john smith");
/// assert_eq!(normalize_worker_key("Smith, John"), "john smith");
/// assert_eq!(normalize_worker_key("  john   SMITH "), "john smith");
/// ```
pub fn normalize_worker_key(raw: &str) -> String {
    let mut key = strip_noise_prefixes(raw.trim().to_lowercase());

    // "Last, First" becomes "First Last"; the swap happens at the first
    // comma only, so "doe, jane v." keeps its suffix intact.
    if let Some((last, first)) = key.split_once(',') {
        key = format!("{} {}", first.trim(), last.trim());
    }
    // The reorder can move a prefix into leading position, so strip again;
    // this keeps repeated normalization a fixpoint.
    let key = strip_noise_prefixes(key.replace(',', " "));

    key.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips leading noise prefixes until none remain.
///
/// Stacked prefixes ("worker: driver: jane") dissolve one at a time.
fn strip_noise_prefixes(mut key: String) -> String {
    loop {
        let stripped = NOISE_PREFIXES
            .iter()
            .find_map(|prefix| key.strip_prefix(prefix))
            .map(|rest| rest.trim_start().to_string());
        match stripped {
            Some(rest) => key = rest,
            None => return key,
        }
    }
}
