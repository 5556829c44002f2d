//! Collection session engine
//!
//! A `Collector` owns all mutable state for one collection session (one page
//! view): which vitals were requested, which turned out unsupported, and the
//! classified record for each vital that has reported. Sessions are plain
//! values with no ambient globals, so independent sessions never interfere.
//!
//! Sensors deliver reports through sinks that hold only a `Weak` reference
//! to the session state: dropping the collector releases every registered
//! callback, and reports arriving afterwards (sensors may fire during page
//! unload) degrade to no-ops.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use wv_error::{Result, VitalsError};

use crate::adapter::{ReportSink, SensorAdapters};
use crate::constants::vitals;
use crate::data::{CollectorConfig, ProjectedRecord, RawReport};
use crate::engine::classify::classify;
use crate::probe::{self, CapabilitySurface};
use crate::project;
use crate::registry;

/// Per-session mutable collection state
#[derive(Debug, Default)]
struct SessionState {
    /// identifier -> stored record (classified or unsupported)
    records: HashMap<String, ProjectedRecord>,
    /// identifiers already handled by request() this session
    handled: HashSet<String>,
}

/// One collection session: subscribes sensors, ingests and classifies their
/// reports, and projects the ordered read-model.
pub struct Collector {
    state: Arc<Mutex<SessionState>>,
    capabilities: Box<dyn CapabilitySurface + Send + Sync>,
    adapters: SensorAdapters,
}

impl Collector {
    pub fn new(
        capabilities: Box<dyn CapabilitySurface + Send + Sync>,
        adapters: SensorAdapters,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::default())),
            capabilities,
            adapters,
        }
    }

    /// Register interest in a set of vital identifiers
    ///
    /// Identifiers already handled this session are skipped, so repeated
    /// calls (including re-entrant ones from a sensor callback) are no-ops
    /// for known identifiers. Per-identifier failures are downgraded to
    /// diagnostics; this never panics and never propagates an error.
    pub fn request<I>(&self, ids: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for id in ids {
            let id = id.as_ref();
            if let Err(err) = self.request_one(id) {
                warn!(vital = %id, "{}", err);
            }
        }
    }

    /// Register interest in the full default vital set
    pub fn request_default(&self) {
        self.request(vitals::DEFAULT_SET);
    }

    /// Register interest in the vitals named by a configuration
    ///
    /// Unlike per-identifier failures, a structurally invalid configuration
    /// is surfaced to the caller.
    pub fn request_config(&self, config: &CollectorConfig) -> Result<()> {
        crate::data::validate_config(config)?;
        self.request(&config.vitals);
        Ok(())
    }

    fn request_one(&self, id: &str) -> Result<()> {
        // Mark handled before touching registry or adapter so the identifier
        // is never retried and a re-entrant request is a no-op.
        {
            let mut state = self.state.lock();
            if !state.handled.insert(id.to_string()) {
                return Ok(());
            }
        }

        let def = match registry::lookup(id) {
            Some(def) => def,
            None => return Err(VitalsError::UnknownVital(id.to_string())),
        };

        if !probe::is_available(def, self.capabilities.as_ref()) {
            let capability = def.required_capability.unwrap_or("unknown");
            self.state
                .lock()
                .records
                .insert(id.to_string(), ProjectedRecord::unsupported(def));
            return Err(VitalsError::unsupported(def.long_name, capability));
        }

        // The source may report synchronously, so the state lock must not be
        // held across this call.
        self.adapters
            .subscribe(id, self.sink())
            .map_err(|_| VitalsError::missing_adapter(def.long_name))?;

        debug!(vital = %id, "subscribed");
        Ok(())
    }

    /// Build the classification sink handed to sensor sources
    fn sink(&self) -> ReportSink {
        let state = Arc::downgrade(&self.state);
        Arc::new(move |report: RawReport| {
            let state = match state.upgrade() {
                Some(state) => state,
                None => return, // session released
            };
            if let Err(err) = ingest(&state, report) {
                warn!("dropping sensor report: {}", err);
            }
        })
    }

    /// Project the current state for the requested identifiers, in order
    ///
    /// Pure read: performs no subscription side effects and is safe to call
    /// on every state change or re-render.
    pub fn project<I>(&self, ids: I) -> Vec<ProjectedRecord>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let state = self.state.lock();
        project::project(&state.records, ids)
    }

    /// Project the full default vital set
    pub fn project_default(&self) -> Vec<ProjectedRecord> {
        self.project(vitals::DEFAULT_SET)
    }

    /// End the session, detaching every registered sensor callback
    ///
    /// Equivalent to dropping the collector; reports delivered afterwards
    /// are discarded by the sinks' weak handles.
    pub fn release(self) {
        drop(self);
    }
}

/// Single state-update entry point for incoming sensor reports
fn ingest(state: &Mutex<SessionState>, report: RawReport) -> Result<()> {
    if report.id.trim().is_empty() {
        return Err(VitalsError::malformed("report has no identifier"));
    }
    if !report.value.is_finite() {
        return Err(VitalsError::malformed(format!(
            "non-finite value for {}",
            report.id
        )));
    }
    let def = registry::lookup(&report.id).ok_or_else(|| {
        VitalsError::malformed(format!("report for unknown identifier {}", report.id))
    })?;

    let mut state = state.lock();
    // First value wins: repeated and late deliveries are expected from the
    // underlying sources, and unsupported vitals never transition.
    if state.records.contains_key(&report.id) {
        debug!(vital = %report.id, "duplicate report discarded");
        return Ok(());
    }

    let rating = classify(def, report.value);
    debug!(vital = %report.id, value = report.value, rating = %rating, "vital classified");
    state
        .records
        .insert(report.id.clone(), ProjectedRecord::classified(def, report.value, rating));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::StaticCapabilities;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn collector_with(adapters: SensorAdapters) -> Collector {
        Collector::new(Box::new(StaticCapabilities::full()), adapters)
    }

    #[test]
    fn synchronous_report_during_subscribe_does_not_deadlock() {
        let mut adapters = SensorAdapters::new();
        adapters.register("TTFB", |sink| {
            sink(RawReport {
                id: "TTFB".into(),
                value: 90.0,
            });
        });

        let collector = collector_with(adapters);
        collector.request(["TTFB"]);

        let records = collector.project(["TTFB"]);
        assert_eq!(records[0].value, Some(90.0));
        assert!(!records[0].loading);
    }

    #[test]
    fn repeated_request_subscribes_once() {
        let subscriptions = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&subscriptions);

        let mut adapters = SensorAdapters::new();
        adapters.register("CLS", move |_sink| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let collector = collector_with(adapters);
        collector.request(["CLS"]);
        collector.request(["CLS"]);

        assert_eq!(subscriptions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn missing_adapter_leaves_vital_pending() {
        let collector = collector_with(SensorAdapters::new());
        collector.request(["LCP"]);

        let records = collector.project(["LCP"]);
        assert!(records[0].loading);
        assert!(records[0].supported);
        assert_eq!(records[0].value, None);
    }

    #[test]
    fn malformed_reports_are_dropped() {
        let state = Arc::new(Mutex::new(SessionState::default()));

        let no_id = RawReport {
            id: "  ".into(),
            value: 1.0,
        };
        assert!(ingest(&state, no_id).is_err());

        let non_finite = RawReport {
            id: "CLS".into(),
            value: f64::NAN,
        };
        assert!(ingest(&state, non_finite).is_err());

        let unknown = RawReport {
            id: "INP".into(),
            value: 1.0,
        };
        assert!(ingest(&state, unknown).is_err());

        assert!(state.lock().records.is_empty());
    }

    #[test]
    fn report_for_unsupported_vital_is_discarded() {
        let mut adapters = SensorAdapters::new();
        adapters.register("FID", |_sink| {});

        // No first-input capability: FID is recorded unsupported up front.
        let caps = StaticCapabilities::new(["paint", "layout-shift"]);
        let collector = Collector::new(Box::new(caps), adapters);
        collector.request(["FID"]);

        let state = Arc::clone(&collector.state);
        let report = RawReport {
            id: "FID".into(),
            value: 10.0,
        };
        ingest(&state, report).unwrap();

        let records = collector.project(["FID"]);
        assert!(!records[0].supported);
        assert_eq!(records[0].value, None);
        assert_eq!(records[0].rating, None);
    }
}
