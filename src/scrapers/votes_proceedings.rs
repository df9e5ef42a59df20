// =============================================================================
// votes_proceedings.rs — THE MINUTES DESK
// =============================================================================
//
// Votes & Proceedings are the official record of what a sitting actually
// did — the closest thing the House publishes to minutes. Same listing
// shape as the agendas at /docs?type=VP: prose date, linked title,
// twenty to a page. No meeting classifier here; proceedings are dated,
// not numbered.
// =============================================================================

use chrono::Utc;
use scraper::Html;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::dates;
use crate::extract::{self, ITEMS_PER_PAGE};
use crate::models::{DataOrigin, ScrapeError, VotesProceedingsData, VotesProceedingsItem};
use crate::urls;

use super::fetch_page;

// (raw date, title, formatted date, weekday)
const FALLBACK_PROCEEDINGS: &[(&str, &str, &str, &str)] = &[
    (
        "Wednesday, 30th July, 2025",
        "Votes and Proceedings - Wednesday 30th July, 2025",
        "2025-07-30",
        "Wednesday",
    ),
    (
        "Tuesday, 29th July, 2025",
        "Votes and Proceedings - Tuesday 29th July, 2025",
        "2025-07-29",
        "Tuesday",
    ),
    (
        "Monday, 28th July, 2025",
        "Votes and Proceedings - Monday 28th July, 2025",
        "2025-07-28",
        "Monday",
    ),
];

/// Fetch one page of Votes & Proceedings. Infallible by policy.
pub async fn fetch(
    client: &reqwest::Client,
    config: &Config,
    page: u32,
) -> VotesProceedingsData {
    match try_fetch(client, config, page).await {
        Ok(data) => {
            info!(
                page = page,
                items = data.proceedings.len(),
                total_pages = data.total_pages,
                "votes & proceedings scrape complete"
            );
            data
        }
        Err(error) => {
            warn!(
                page = page,
                error = %error,
                "votes & proceedings scrape failed — serving curated fallback"
            );
            fallback_data(&config.base_url)
        }
    }
}

async fn try_fetch(
    client: &reqwest::Client,
    config: &Config,
    page: u32,
) -> Result<VotesProceedingsData, ScrapeError> {
    let url = format!("{}/docs?type=VP&page={}", config.base_url, page);
    debug!(url = %url, "fetching votes & proceedings listing");

    let body = fetch_page(client, &url).await?;
    let (proceedings, total_pages) = parse_listing(&body, &config.base_url);

    Ok(VotesProceedingsData {
        proceedings,
        total_pages,
        current_page: page,
        last_updated: Utc::now(),
        origin: DataOrigin::Live,
    })
}

fn parse_listing(html: &str, base_url: &str) -> (Vec<VotesProceedingsItem>, u32) {
    let document = Html::parse_document(html);
    let rows = extract::document_rows(&document);
    let total_pages = extract::estimate_total_pages(&document, rows.len());

    let proceedings = rows
        .into_iter()
        .take(ITEMS_PER_PAGE)
        .map(|row| {
            let normalized = dates::normalize(&row.date_text);
            let url = match row.href.as_deref() {
                Some(href) => urls::absolutize(base_url, Some(href)),
                None => format!("{}/docs?type=VP", base_url),
            };
            VotesProceedingsItem {
                date: row.date_text,
                title: row.title_text,
                url,
                formatted_date: normalized.formatted_date,
                day_of_week: normalized.day_of_week,
            }
        })
        .collect();

    (proceedings, total_pages)
}

fn fallback_data(base_url: &str) -> VotesProceedingsData {
    let listing_url = format!("{}/docs?type=VP", base_url);
    VotesProceedingsData {
        proceedings: FALLBACK_PROCEEDINGS
            .iter()
            .map(|(date, title, formatted, weekday)| VotesProceedingsItem {
                date: date.to_string(),
                title: title.to_string(),
                url: listing_url.clone(),
                formatted_date: formatted.to_string(),
                day_of_week: weekday.to_string(),
            })
            .collect(),
        total_pages: 1,
        current_page: 1,
        last_updated: Utc::now(),
        origin: DataOrigin::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const BASE: &str = "https://www.parliament.gh";

    #[test]
    fn test_parse_listing_extracts_proceedings() {
        let html = r#"<table>
            <tr><td>Date</td><td>Title</td></tr>
            <tr><td>Wednesday, 30th July, 2025</td>
                <td><a href="/epanel/docs/vp.pdf">Votes and Proceedings - Wednesday 30th July, 2025</a></td></tr>
        </table>
        <a href="/docs?type=VP&page=4">last</a>"#;
        let (proceedings, total_pages) = parse_listing(html, BASE);
        assert_eq!(proceedings.len(), 1);
        assert_eq!(total_pages, 4);
        assert_eq!(proceedings[0].formatted_date, "2025-07-30");
        assert_eq!(proceedings[0].day_of_week, "Wednesday");
        assert_eq!(
            proceedings[0].url,
            "https://www.parliament.gh/epanel/docs/vp.pdf"
        );
    }

    #[tokio::test]
    async fn test_unreachable_upstream_serves_fallback() {
        let config = Config {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout: Duration::from_secs(2),
            user_agent: "test".to_string(),
            listen_port: 0,
        };
        let client = reqwest::Client::new();

        let data = fetch(&client, &config, 2).await;

        assert_eq!(data.origin, DataOrigin::Fallback);
        assert_eq!(data.proceedings.len(), 3);
        assert_eq!(data.total_pages, 1);
        assert_eq!(data.current_page, 1);
        assert_eq!(data.proceedings[0].day_of_week, "Wednesday");
    }
}
