//! Dashboard aggregation store

use bullyguard_core::{BatchEntry, ClassificationRecord, DashboardSnapshot, Error, Result};
use parking_lot::RwLock;
use tracing::debug;

/// Column order for the results table and the download CSV
pub const RESULT_COLUMNS: [&str; 5] = ["Text", "Label", "Confidence", "Explanation", "Highlights"];

/// Process-wide counters plus the last-batch CSV buffer
///
/// A single lock guards both, so a reader never observes a batch's counters
/// without its buffer replacement (or the reverse). Handlers mutate state
/// only through these methods, never through raw fields. Nothing here is
/// persisted; counters start at zero on every process start.
pub struct DashboardStore {
    inner: RwLock<DashboardInner>,
}

struct DashboardInner {
    total_entries: u64,
    bullying_cases: u64,
    last_batch_csv: String,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(DashboardInner {
                total_entries: 0,
                bullying_cases: 0,
                // header-only until the first batch is recorded
                last_batch_csv: render_batch_csv(&[]).unwrap_or_default(),
            }),
        }
    }

    /// Record one classified message
    pub fn record_one(&self, record: &ClassificationRecord) {
        let mut inner = self.inner.write();
        inner.total_entries += 1;
        if record.is_bullying() {
            inner.bullying_cases += 1;
        }
    }

    /// Record a processed batch and replace the download buffer.
    /// Counter updates and the buffer swap happen under one write lock.
    pub fn record_batch(&self, entries: &[BatchEntry]) -> Result<()> {
        let rendered = render_batch_csv(entries)?;

        let mut inner = self.inner.write();
        for entry in entries {
            inner.total_entries += 1;
            if entry.record.is_bullying() {
                inner.bullying_cases += 1;
            }
        }
        inner.last_batch_csv = rendered;
        drop(inner);

        debug!(rows = entries.len(), "batch recorded");
        Ok(())
    }

    /// Current counter values
    pub fn snapshot(&self) -> DashboardSnapshot {
        let inner = self.inner.read();
        DashboardSnapshot {
            total_entries: inner.total_entries,
            bullying_cases: inner.bullying_cases,
        }
    }

    /// CSV rendering of the most recent batch, header-only before the first
    pub fn last_batch_csv(&self) -> String {
        self.inner.read().last_batch_csv.clone()
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a batch as CSV in download column order
fn render_batch_csv(entries: &[BatchEntry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(RESULT_COLUMNS)
        .map_err(|e| Error::internal(format!("failed to render batch CSV: {e}")))?;

    for entry in entries {
        writer
            .write_record([
                entry.text.as_str(),
                entry.record.verdict().as_str(),
                &entry.record.confidence.to_string(),
                entry.record.explanation.as_str(),
                entry.record.highlights.as_str(),
            ])
            .map_err(|e| Error::internal(format!("failed to render batch CSV: {e}")))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::internal(format!("failed to render batch CSV: {e}")))?;
    String::from_utf8(bytes).map_err(|e| Error::internal(format!("batch CSV was not UTF-8: {e}")))
}
