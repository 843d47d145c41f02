use super::table::{render, RenderedTable};
use super::view_state::{ViewPhase, ViewState};
use crate::ports::outbound::{DiagnosticEntry, DiagnosticSink, RecordProvider};
use crate::registry::domain::AuthorityRecord;
use crate::shared::error::ProviderError;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::{AbortHandle, JoinHandle};

/// Result of one mount's fetch
#[derive(Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The fetch succeeded and its records now back the view
    Loaded { count: usize },
    /// The provider failed; the failure was recorded and the view stayed empty
    Failed(ProviderError),
    /// The view was unmounted or re-mounted before the fetch finished
    Discarded,
}

struct Inner {
    state: ViewState,
    /// Bumped by every mount and unmount; a fetch only lands if its epoch is current
    epoch: u64,
    in_flight: Option<AbortHandle>,
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// ReadThroughView - fetches a snapshot of records once per mount
///
/// The provider and diagnostic sink are injected. Mounting resets the view,
/// spawns a single `fetch_all()` task on the tokio runtime and returns
/// immediately. A successful fetch replaces the view state wholesale; a failed
/// fetch is recorded to the diagnostic sink and leaves the view empty. The view
/// never retries and never surfaces the error itself.
///
/// At most one fetch is outstanding per view: re-mounting or unmounting aborts
/// the previous task, and a result that arrives for a stale mount is dropped
/// instead of being applied.
///
/// Must be mounted from within a tokio runtime.
pub struct ReadThroughView<P: ?Sized, D: ?Sized> {
    label: String,
    provider: Arc<P>,
    diagnostics: Arc<D>,
    inner: Arc<Mutex<Inner>>,
}

impl<P, D> ReadThroughView<P, D>
where
    P: RecordProvider + ?Sized + 'static,
    D: DiagnosticSink + ?Sized + 'static,
{
    /// Creates an unmounted, empty view
    ///
    /// # Arguments
    /// * `label` - Name used as the diagnostic source (e.g. the listing title)
    /// * `provider` - Read capability the view fetches from
    /// * `diagnostics` - Sink that receives fetch failures
    pub fn new(label: impl Into<String>, provider: Arc<P>, diagnostics: Arc<D>) -> Self {
        Self {
            label: label.into(),
            provider,
            diagnostics,
            inner: Arc::new(Mutex::new(Inner {
                state: ViewState::new(),
                epoch: 0,
                in_flight: None,
            })),
        }
    }

    /// Mounts the view and starts its single fetch
    pub fn mount(&self) -> MountHandle {
        let mut inner = lock(&self.inner);
        inner.epoch += 1;
        let epoch = inner.epoch;
        if let Some(previous) = inner.in_flight.take() {
            previous.abort();
        }
        inner.state.clear();

        let provider = Arc::clone(&self.provider);
        let diagnostics = Arc::clone(&self.diagnostics);
        let shared = Arc::clone(&self.inner);
        let label = self.label.clone();

        tracing::debug!(view = %label, epoch, "mounting view");
        let task = tokio::spawn(async move {
            let result = AssertUnwindSafe(provider.fetch_all())
                .catch_unwind()
                .await
                .unwrap_or_else(|payload| Err(ProviderError::Panicked(panic_message(payload))));
            settle(&shared, epoch, &label, diagnostics.as_ref(), result)
        });
        inner.in_flight = Some(task.abort_handle());

        MountHandle { epoch, task }
    }

    /// Tears the view down: drops its records and invalidates any in-flight fetch
    pub fn unmount(&self) {
        let mut inner = lock(&self.inner);
        inner.epoch += 1;
        if let Some(in_flight) = inner.in_flight.take() {
            in_flight.abort();
        }
        inner.state.clear();
        tracing::debug!(view = %self.label, "unmounted view");
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Snapshot of the records currently held
    pub fn records(&self) -> Vec<AuthorityRecord> {
        lock(&self.inner).state.records().to_vec()
    }

    pub fn phase(&self) -> ViewPhase {
        lock(&self.inner).state.phase()
    }

    /// Whether the current mount's fetch has not settled yet
    pub fn is_pending(&self) -> bool {
        lock(&self.inner).in_flight.is_some()
    }

    /// Renders the records currently held
    pub fn render(&self) -> RenderedTable {
        render(lock(&self.inner).state.records())
    }
}

impl<P: ?Sized, D: ?Sized> Drop for ReadThroughView<P, D> {
    fn drop(&mut self) {
        let mut inner = lock(&self.inner);
        inner.epoch += 1;
        if let Some(in_flight) = inner.in_flight.take() {
            in_flight.abort();
        }
    }
}

/// Applies a finished fetch to the view if its mount is still current
fn settle<D: DiagnosticSink + ?Sized>(
    shared: &Mutex<Inner>,
    epoch: u64,
    label: &str,
    diagnostics: &D,
    result: Result<Vec<AuthorityRecord>, ProviderError>,
) -> FetchOutcome {
    let mut inner = lock(shared);
    if inner.epoch != epoch {
        tracing::debug!(view = %label, epoch, current = inner.epoch, "discarding late fetch result");
        return FetchOutcome::Discarded;
    }
    inner.in_flight = None;

    match result {
        Ok(records) => {
            let count = records.len();
            inner.state.replace(records);
            tracing::debug!(view = %label, count, "view loaded");
            FetchOutcome::Loaded { count }
        }
        Err(error) => {
            drop(inner);
            diagnostics.record(DiagnosticEntry::error(label, error.to_string()));
            FetchOutcome::Failed(error)
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Handle to one mount's fetch task
pub struct MountHandle {
    epoch: u64,
    task: JoinHandle<FetchOutcome>,
}

impl MountHandle {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Waits for the fetch to settle
    pub async fn settled(self) -> FetchOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => FetchOutcome::Discarded,
            Err(e) => {
                tracing::error!(error = %e, "fetch task panicked");
                FetchOutcome::Discarded
            }
        }
    }
}
