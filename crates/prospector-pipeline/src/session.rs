//! Long-lived holder of the current lead collection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use prospector_core::{LeadCollection, SearchParams};
use tokio::sync::RwLock;

use crate::collaborator::SearchCollaborator;
use crate::error::{ExportError, SessionError};
use crate::export::{export_file_name, to_csv};
use crate::search::{run_search_with, SearchOptions};

/// One user's view of the prospecting tool: at most one search in flight
/// and the collection from the most recent successful search.
pub struct LeadSession {
    service: Arc<dyn SearchCollaborator>,
    options: SearchOptions,
    current: RwLock<Current>,
    in_flight: AtomicBool,
}

/// A rendered CSV download of the current collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// Download name derived from the city searched, e.g. `leads-sevilla.csv`.
    pub file_name: String,
    pub csv: String,
}

#[derive(Default)]
struct Current {
    leads: LeadCollection,
    params: Option<SearchParams>,
}

/// Clears the in-flight flag on drop, including when the search future is
/// cancelled.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl LeadSession {
    #[must_use]
    pub fn new(service: Arc<dyn SearchCollaborator>, options: SearchOptions) -> Self {
        Self {
            service,
            options,
            current: RwLock::new(Current::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Runs a search and replaces the current collection with its result.
    ///
    /// The current collection is cleared as soon as the search starts and
    /// stays empty if it fails.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Busy`] if another search is in flight and
    /// [`SessionError::Search`] if the search fails.
    pub async fn search(&self, params: &SearchParams) -> Result<LeadCollection, SessionError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("search rejected: another search is in flight");
            return Err(SessionError::Busy);
        }
        let _guard = InFlightGuard(&self.in_flight);

        *self.current.write().await = Current::default();

        let collection = run_search_with(self.service.as_ref(), params, &self.options).await?;
        *self.current.write().await = Current {
            leads: collection.clone(),
            params: Some(params.clone()),
        };
        Ok(collection)
    }

    /// Snapshot of the current collection.
    pub async fn leads(&self) -> LeadCollection {
        self.current.read().await.leads.clone()
    }

    /// Parameters of the search that produced the current collection.
    pub async fn last_params(&self) -> Option<SearchParams> {
        self.current.read().await.params.clone()
    }

    /// CSV for the current collection and its file name, or `None` when the
    /// collection is empty. Both come from the same snapshot.
    ///
    /// # Errors
    ///
    /// Propagates [`to_csv`] errors.
    pub async fn export_csv(&self) -> Result<Option<CsvExport>, ExportError> {
        let current = self.current.read().await;
        let Some(csv) = to_csv(current.leads.as_slice())? else {
            return Ok(None);
        };
        let file_name = current
            .params
            .as_ref()
            .map_or_else(|| "leads.csv".to_string(), |p| export_file_name(p.city()));
        Ok(Some(CsvExport { file_name, csv }))
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}
