//! Retrieval of the country dataset.

use crate::countries::Country;
use crate::errors::{GenError, Result};
use crate::http_client::HttpClient;

/// Default endpoint, projected down to the three fields the generator reads.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name,altSpellings,cca2";

const MAX_ERROR_BODY: usize = 200;

/// GET `url` and decode the body as a JSON array of countries.
///
/// The body is read in full before decoding. Transport failures, non-2xx
/// statuses and bodies that do not match [`Country`] are all errors.
pub async fn fetch_countries(http: &HttpClient, url: &str) -> Result<Vec<Country>> {
    tracing::info!(url, "Fetching country dataset");

    let resp = http.get_client().get(url).send().await?;
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        tracing::debug!(status = status.as_u16(), "Request rejected");
        let message = match truncate(body.trim(), MAX_ERROR_BODY) {
            "" => status.canonical_reason().unwrap_or("unknown status").to_string(),
            text => text.to_string(),
        };
        return Err(GenError::Server {
            status: status.as_u16(),
            message,
        });
    }

    let countries: Vec<Country> = crate::json::deserialize(&body)?;
    tracing::debug!(
        countries = countries.len(),
        bytes = body.len(),
        "Decoded country dataset"
    );
    Ok(countries)
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
