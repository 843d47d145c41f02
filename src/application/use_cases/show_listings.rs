use crate::application::dto::ListingRequest;
use crate::application::read_models::{BoardReport, ListingReport, ListingStatus, ReportMetadata};
use crate::ports::outbound::{
    DiagnosticEntry, DiagnosticSink, ProgressReporter, RecordProvider, RecordSource,
};
use crate::registry::domain::{duplicate_addresses, Listing};
use crate::registry::view::{FetchOutcome, ReadThroughView};
use crate::shared::Result;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;

type ListingView<D> = ReadThroughView<dyn RecordProvider, D>;

/// ShowListingsUseCase - loads registry listings into read-through views
///
/// This use case is the bootstrap layer for views: it asks the record source
/// for one provider per listing, mounts a view for each, waits for all of them
/// to settle and turns what the views hold into a board report.
///
/// A listing whose fetch fails is still part of the report, with an empty
/// table and an `Unavailable` status.
///
/// # Type Parameters
/// * `S` - RecordSource implementation
/// * `D` - DiagnosticSink implementation shared by all views
/// * `PR` - ProgressReporter implementation
pub struct ShowListingsUseCase<S, D: ?Sized, PR> {
    source: S,
    diagnostics: Arc<D>,
    progress_reporter: PR,
}

impl<S, D, PR> ShowListingsUseCase<S, D, PR>
where
    S: RecordSource,
    D: DiagnosticSink + ?Sized + 'static,
    PR: ProgressReporter,
{
    /// Creates a new ShowListingsUseCase with injected dependencies
    pub fn new(source: S, diagnostics: Arc<D>, progress_reporter: PR) -> Self {
        Self {
            source,
            diagnostics,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Returns an error only if a provider cannot be built. Fetch failures are
    /// reported per listing in the returned report.
    pub async fn execute(&self, request: ListingRequest) -> Result<BoardReport> {
        let listings = request.listings();
        let description = self.source.describe();
        self.progress_reporter.report(&format!(
            "🔗 Reading {} listing(s) from {}",
            listings.len(),
            description
        ));

        // Step 1: one view per listing
        let views = self.build_views(listings)?;

        // Step 2: mount every view, then wait for all of them
        let outcomes = self.mount_and_settle(&views).await;

        // Step 3: render what the views hold
        let reports: Vec<ListingReport> = views
            .iter()
            .zip(outcomes)
            .map(|((listing, view), outcome)| self.build_listing_report(*listing, view, &outcome))
            .collect();

        let report = BoardReport::new(ReportMetadata::new(description), reports);
        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {} of {} listing(s), {} row(s)",
            report.listings.len() - report.unavailable_count(),
            report.listings.len(),
            report.total_rows()
        ));

        Ok(report)
    }

    fn build_views(&self, listings: &[Listing]) -> Result<Vec<(Listing, ListingView<D>)>> {
        listings
            .iter()
            .map(|&listing| {
                let provider = self.source.provider(listing)?;
                let view =
                    ReadThroughView::new(listing.title(), provider, Arc::clone(&self.diagnostics));
                Ok((listing, view))
            })
            .collect()
    }

    /// Mounts every view and collects their outcomes in view order
    async fn mount_and_settle(&self, views: &[(Listing, ListingView<D>)]) -> Vec<FetchOutcome> {
        let total = views.len();
        let mut pending: FuturesUnordered<_> = views
            .iter()
            .enumerate()
            .map(|(position, (_, view))| {
                let handle = view.mount();
                async move { (position, handle.settled().await) }
            })
            .collect();

        let mut outcomes: Vec<Option<FetchOutcome>> = (0..total).map(|_| None).collect();
        let mut settled = 0;
        while let Some((position, outcome)) = pending.next().await {
            settled += 1;
            self.progress_reporter
                .report_progress(settled, total, Some(views[position].0.title()));
            outcomes[position] = Some(outcome);
        }

        outcomes
            .into_iter()
            .map(|outcome| outcome.unwrap_or(FetchOutcome::Discarded))
            .collect()
    }

    fn build_listing_report(
        &self,
        listing: Listing,
        view: &ListingView<D>,
        outcome: &FetchOutcome,
    ) -> ListingReport {
        let status = ListingStatus::from_outcome(outcome);
        if let ListingStatus::Unavailable { reason } = &status {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: {} could not be loaded: {}",
                listing.title(),
                reason
            ));
        }

        let records = view.records();
        for address in duplicate_addresses(&records) {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: {} lists address {} more than once",
                listing.title(),
                address
            ));
            self.diagnostics.record(DiagnosticEntry::warning(
                view.label(),
                format!("address {} appears more than once", address),
            ));
        }

        ListingReport::new(listing, status, view.render())
    }
}
