//! Load outcome reporting.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::QueryError;
use crate::types::DataSet;

/// How bad a failed load is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// The file was read but its content is not a usable record export.
    Error,
    /// The file could not be read at all.
    Critical,
}

impl LoadSeverity {
    /// Classify a load error.
    pub fn of(error: &QueryError) -> Self {
        match error {
            QueryError::Io(_) => LoadSeverity::Critical,
            QueryError::Json(err) if err.is_io() => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        }
    }
}

/// The file a load attempt was made on.
#[derive(Debug, Clone)]
pub struct LoadContext {
    pub path: PathBuf,
}

/// Shape of a freshly loaded export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of passenger records.
    pub records: usize,
    /// Distinct property names seen across all `fields` objects.
    pub properties: usize,
    /// Fields present with an explicit `null`.
    pub null_values: usize,
}

impl LoadStats {
    pub fn from_dataset(dataset: &DataSet) -> Self {
        let mut names = BTreeSet::new();
        let mut null_values = 0;
        for r in dataset {
            for (name, v) in &r.fields {
                names.insert(name.as_str());
                null_values += usize::from(v.is_null());
            }
        }
        Self {
            records: dataset.len(),
            properties: names.len(),
            null_values,
        }
    }
}

/// Receives the outcome of [`super::load_from_path`].
pub trait LoadObserver: Send + Sync {
    fn on_success(&self, _ctx: &LoadContext, _stats: &LoadStats) {}

    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &QueryError) {}

    /// Called after `on_failure` when the severity meets the configured threshold.
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &QueryError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Logs load outcomes to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl StdErrObserver {
    fn line(ctx: &LoadContext, outcome: &str) -> String {
        format!("[load] path={} {outcome}", ctx.path.display())
    }
}

impl LoadObserver for StdErrObserver {
    fn on_success(&self, ctx: &LoadContext, stats: &LoadStats) {
        eprintln!(
            "{}",
            Self::line(
                ctx,
                &format!(
                    "records={} properties={} null_values={}",
                    stats.records, stats.properties, stats.null_values
                )
            )
        );
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &QueryError) {
        eprintln!("{}", Self::line(ctx, &format!("failed={severity:?} err={error}")));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &QueryError) {
        eprintln!("[ALERT] {}", Self::line(ctx, &format!("failed={severity:?} err={error}")));
    }
}
