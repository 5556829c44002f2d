//! Sensor adapter registry
//!
//! Wraps each independent measurement source behind one uniform asynchronous
//! reporting interface. The external measurement library supplies one
//! subscription function per vital; the engine hands each a report sink that
//! may be invoked zero or more times, at any point in the page's life.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use wv_error::{Result, VitalsError};

use crate::data::RawReport;

/// Shared handle through which a sensor delivers reports
///
/// Sinks must stay safe to invoke after the subscribing session has ended;
/// the engine guarantees late invocations degrade to no-ops.
pub type ReportSink = Arc<dyn Fn(RawReport) + Send + Sync>;

/// Registry of sensor subscription functions, keyed by vital identifier
#[derive(Default)]
pub struct SensorAdapters {
    sources: HashMap<String, Box<dyn Fn(ReportSink) + Send>>,
}

impl SensorAdapters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the subscription function for one vital
    ///
    /// Registering the same identifier twice replaces the earlier source.
    pub fn register<F>(&mut self, id: impl Into<String>, subscribe: F)
    where
        F: Fn(ReportSink) + Send + 'static,
    {
        self.sources.insert(id.into(), Box::new(subscribe));
    }

    /// Returns true when a source is registered for the identifier
    pub fn contains(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    /// Subscribe the sink to the sensor for `id`
    ///
    /// The source may invoke the sink synchronously before this returns;
    /// callers must not hold engine state locks across this call.
    pub(crate) fn subscribe(&self, id: &str, sink: ReportSink) -> Result<()> {
        match self.sources.get(id) {
            Some(source) => {
                source(sink);
                Ok(())
            }
            None => Err(VitalsError::missing_adapter(id)),
        }
    }
}

impl fmt::Debug for SensorAdapters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&str> = self.sources.keys().map(String::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("SensorAdapters").field("sources", &ids).finish()
    }
}
