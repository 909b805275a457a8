//! CSV rendering of a lead collection.
//!
//! Every field is quoted and embedded quotes are doubled. An empty
//! collection produces no output at all, not a header-only file.

use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use prospector_core::{slugify, NormalizedLead};

use crate::error::ExportError;

pub const CSV_HEADERS: [&str; 9] = [
    "Name",
    "Address",
    "Phone",
    "Email",
    "Maps Link",
    "Stars",
    "Email Subject",
    "Email Body",
    "Chat Message",
];

/// Renders `leads` as CSV text, or `None` when there is nothing to export.
///
/// Rows are separated by `\n` with no trailing newline.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if a record cannot be written and
/// [`ExportError::Encoding`] if the output is not valid UTF-8.
pub fn to_csv(leads: &[NormalizedLead]) -> Result<Option<String>, ExportError> {
    if leads.is_empty() {
        return Ok(None);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for lead in leads {
        let stars = lead.stars.to_string();
        writer.write_record([
            lead.name.as_str(),
            lead.address.as_deref().unwrap_or_default(),
            lead.phone.as_deref().unwrap_or_default(),
            lead.email.as_str(),
            lead.maps_link.as_deref().unwrap_or_default(),
            stars.as_str(),
            lead.email_subject.as_str(),
            lead.email_body.as_str(),
            lead.chat_message.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.into_error()))?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(Some(text))
}

/// Writes the CSV for `leads` to `path`.
///
/// Returns the written path, or `None` without touching the filesystem when
/// `leads` is empty.
///
/// # Errors
///
/// Returns any [`to_csv`] error, or [`ExportError::Io`] if the file cannot be
/// written.
pub fn write_csv_file(
    leads: &[NormalizedLead],
    path: &Path,
) -> Result<Option<PathBuf>, ExportError> {
    let Some(csv) = to_csv(leads)? else {
        tracing::debug!(path = %path.display(), "no leads to export; skipping file");
        return Ok(None);
    };

    std::fs::write(path, csv).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), rows = leads.len(), "leads exported");
    Ok(Some(path.to_path_buf()))
}

/// Download file name for a search in `city`, e.g. `leads-sevilla.csv`.
#[must_use]
pub fn export_file_name(city: &str) -> String {
    let slug = slugify(city);
    if slug.is_empty() {
        "leads.csv".to_string()
    } else {
        format!("leads-{slug}.csv")
    }
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
