// =============================================================================
// scrapers/mod.rs — THE READING ROOM
// =============================================================================
//
// One module per document type the Parliament of Ghana publishes: agendas,
// votes & proceedings, the leadership roster, and bills. The four are
// structurally identical on purpose — fetch one page, pull the table
// apart, normalize the fields, estimate pagination, and if anything at
// all goes wrong, serve the curated fallback instead of an error.
//
// That last part is the house policy: availability over accuracy. The
// caller always receives a well-formed page. What it additionally
// receives, unlike in older incarnations of this system, is an `origin`
// marker saying whether the page is live, a placeholder, or a fallback —
// so nobody has to guess whether the Speaker on screen is the current one.
//
// Each scraper is request-scoped and stateless: no caching, no retries,
// no shared mutable anything. Two concurrent requests are two independent
// fetches of the same government web page.
// =============================================================================

pub mod agenda;
pub mod bills;
pub mod leadership;
pub mod votes_proceedings;

use crate::models::ScrapeError;

/// Fetch one page of HTML, uncached, or say precisely why we couldn't.
///
/// `Cache-Control: no-cache` on every request — the whole point of this
/// engine is that the data is fresher than whatever a proxy remembers.
pub(crate) async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
) -> Result<String, ScrapeError> {
    let response = client
        .get(url)
        .header("Cache-Control", "no-cache")
        .send()
        .await
        .map_err(|source| ScrapeError::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status,
        });
    }

    response
        .text()
        .await
        .map_err(|source| ScrapeError::Network {
            url: url.to_string(),
            source,
        })
}
