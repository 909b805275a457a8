//! `prospector search` handler.

use std::path::PathBuf;

use prospector_core::{AppConfig, LeadCollection, NormalizedLead, SearchParams};
use prospector_gemini::GeminiClient;
use prospector_pipeline::{export_file_name, run_search_with, write_csv_file, SearchOptions};

#[derive(Debug)]
pub(crate) struct SearchArgs {
    pub query: String,
    pub city: String,
    pub limit: u32,
    pub output: Option<PathBuf>,
    pub no_export: bool,
}

/// Runs one search, prints the leads, and writes the CSV unless disabled.
///
/// # Errors
///
/// Returns an error if the arguments are invalid, the Gemini client cannot be
/// built, the search fails, or the CSV cannot be written.
pub(crate) async fn run_search_command(config: &AppConfig, args: &SearchArgs) -> anyhow::Result<()> {
    let params = SearchParams::new(&args.query, &args.city, args.limit)?;

    let client = GeminiClient::with_base_url(
        &config.gemini_api_key,
        &config.gemini_model,
        config.gemini_timeout_secs,
        &config.gemini_base_url,
    )?;
    let options = SearchOptions::from_config(config);

    println!(
        "searching for {} \"{}\" in {}...",
        params.limit(),
        params.query(),
        params.city()
    );

    let collection = match run_search_with(&client, &params, &options).await {
        Ok(collection) => collection,
        Err(e) => {
            tracing::error!(error = %e, "search failed");
            anyhow::bail!("{}", e.user_message());
        }
    };

    if collection.is_empty() {
        println!("no leads found; nothing to export");
        return Ok(());
    }

    print_leads(&collection);

    if args.no_export {
        return Ok(());
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(export_file_name(params.city())));
    if let Some(written) = write_csv_file(collection.as_slice(), &path)? {
        println!("exported {} leads to {}", collection.len(), written.display());
    }

    Ok(())
}

fn print_leads(collection: &LeadCollection) {
    println!("{:<7}{:<36}{:<20}EMAIL", "STARS", "NAME", "PHONE");
    for lead in collection {
        println!(
            "{:<7}{:<36}{:<20}{}",
            lead.stars,
            truncate(&lead.name, 34),
            truncate(lead.phone.as_deref().unwrap_or("-"), 18),
            email_cell(lead)
        );
    }
}

/// The lead's email, or `-` when the service found none.
fn email_cell(lead: &NormalizedLead) -> &str {
    if lead.has_email() {
        &lead.email
    } else {
        "-"
    }
}

/// Shortens `s` to at most `max` characters, marking the cut with `…`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
