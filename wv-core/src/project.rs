//! Read-model projection
//!
//! Maps stored collection state plus the caller's requested identifier list
//! into the ordered, consumer-facing sequence. Output order is always the
//! requested order, never arrival order.

use std::collections::HashMap;

use crate::data::ProjectedRecord;
use crate::registry;

/// Project the requested identifiers over the stored records
///
/// Pure function of the state snapshot and the input order: one output
/// record per requested identifier, stored records first, then pending
/// placeholders (with registry metadata for known identifiers, bare
/// identifier-only metadata for unknown ones).
pub(crate) fn project<I>(records: &HashMap<String, ProjectedRecord>, ids: I) -> Vec<ProjectedRecord>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    ids.into_iter()
        .map(|id| {
            let id = id.as_ref();
            match records.get(id) {
                Some(record) => record.clone(),
                None => match registry::lookup(id) {
                    Some(def) => ProjectedRecord::pending(def),
                    None => ProjectedRecord::pending_unknown(id),
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Rating;
    use crate::engine::classify;

    fn records_with_cls() -> HashMap<String, ProjectedRecord> {
        let cls = registry::lookup("CLS").unwrap();
        let rating = classify(cls, 0.05);
        let mut records = HashMap::new();
        records.insert("CLS".to_string(), ProjectedRecord::classified(cls, 0.05, rating));
        records
    }

    #[test]
    fn output_length_and_order_follow_the_request() {
        let records = records_with_cls();
        let projected = project(&records, ["TTFB", "CLS", "LCP"]);
        let ids: Vec<&str> = projected.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["TTFB", "CLS", "LCP"]);
    }

    #[test]
    fn stored_records_project_as_is() {
        let records = records_with_cls();
        let projected = project(&records, ["CLS"]);
        assert_eq!(projected[0].value, Some(0.05));
        assert_eq!(projected[0].rating, Some(Rating::Good));
        assert!(!projected[0].loading);
    }

    #[test]
    fn known_identifier_without_record_is_pending_with_metadata() {
        let records = HashMap::new();
        let projected = project(&records, ["LCP"]);
        assert!(projected[0].loading);
        assert!(projected[0].supported);
        assert_eq!(projected[0].long_name, Some("Largest Contentful Paint"));
    }

    #[test]
    fn unknown_identifier_degrades_to_bare_placeholder() {
        let records = HashMap::new();
        let projected = project(&records, ["INP"]);
        assert_eq!(projected[0].id, "INP");
        assert!(projected[0].loading);
        assert_eq!(projected[0].long_name, None);
        assert_eq!(projected[0].unit, None);
    }

    #[test]
    fn projecting_repeatedly_is_stable() {
        let records = records_with_cls();
        let first = project(&records, ["CLS", "FID"]);
        let second = project(&records, ["CLS", "FID"]);
        assert_eq!(first, second);
    }
}
