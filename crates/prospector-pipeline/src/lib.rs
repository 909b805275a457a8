//! The lead result pipeline.
//!
//! Turns the free-text answer of the search service into an ordered,
//! enriched [`prospector_core::LeadCollection`]:
//!
//! 1. [`search::build_prompt`] builds the single prompt for a search.
//! 2. A [`SearchCollaborator`] answers it with free text.
//! 3. [`extract`] isolates the JSON array in that text.
//! 4. [`normalize`] types each candidate and attaches slug and outreach text.
//! 5. [`sort`] orders the leads by star rating.
//!
//! [`export`] renders a collection as CSV, and [`LeadSession`] holds the
//! current collection for long-lived callers.

pub mod collaborator;
pub mod error;
pub mod export;
pub mod extract;
pub mod normalize;
pub mod search;
pub mod session;
pub mod sort;
pub mod templates;

pub use collaborator::{CollaboratorError, SearchCollaborator, SearchRequest};
pub use error::{ExportError, MalformedResponse, SearchError, SessionError};
pub use export::{export_file_name, to_csv, write_csv_file, CSV_HEADERS};
pub use extract::{extract_json_array, extract_with_strategy};
pub use normalize::{normalize, normalize_all, RawLeadCandidate};
pub use search::{build_prompt, run_search, run_search_with, SearchOptions};
pub use session::{CsvExport, LeadSession};
pub use sort::sort_by_stars;
pub use templates::{landing_url, OutreachMessages, LANDING_BASE_URL};
