//! Observed loading entrypoint.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::QueryResult;
use crate::types::DataSet;

use super::json;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Options controlling observed loading.
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load a JSON record file, reporting the outcome to `options.observer`.
///
/// On success the observer gets [`LoadStats`] for the new dataset. On failure it gets
/// `on_failure` with the [`LoadSeverity`] of the error, then `on_alert` too if that severity is
/// at or above `options.alert_at_or_above`.
///
/// ```no_run
/// use std::sync::Arc;
///
/// use passenger_query::ingestion::{load_from_path, LoadOptions, StdErrObserver};
/// use passenger_query::processing::get_unique_values;
///
/// # fn main() -> Result<(), passenger_query::QueryError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     ..Default::default()
/// };
/// let ds = load_from_path("titanic-passengers.json", &opts)?;
/// println!("{:?}", get_unique_values(&ds, "embarked"));
/// # Ok(())
/// # }
/// ```
pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> QueryResult<DataSet> {
    let path = path.as_ref();
    let result = json::load_records_from_path(path);

    if let Some(obs) = options.observer.as_ref() {
        let ctx = LoadContext {
            path: path.to_path_buf(),
        };
        match &result {
            Ok(ds) => obs.on_success(&ctx, &LoadStats::from_dataset(ds)),
            Err(e) => {
                let sev = LoadSeverity::of(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}
