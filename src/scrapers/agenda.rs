// =============================================================================
// agenda.rs — THE ORDER PAPER WATCH
// =============================================================================
//
// Agendas are the schedule documents for parliamentary sittings, listed at
// /docs?type=AG as a paginated two-column table: a prose date and a titled
// link to a PDF. The titles carry the one piece of metadata anyone asks
// for — which meeting of the session cycle the sitting belongs to — so
// every row goes through the meeting-type classifier on its way out.
//
// When the site is down, slow, or rearranged, the caller gets the curated
// sample below, clearly marked `origin: fallback`. Three representative
// agendas spanning three parliaments — enough for a frontend to render
// something honest-looking while the real site collects itself.
// =============================================================================

use chrono::Utc;
use scraper::Html;
use tracing::{debug, info, warn};

use crate::classify;
use crate::config::Config;
use crate::dates;
use crate::extract::{self, ITEMS_PER_PAGE};
use crate::models::{AgendaData, AgendaItem, DataOrigin, MeetingType, ScrapeError};
use crate::urls;

use super::fetch_page;

// (raw date, title, formatted date, weekday, meeting type)
const FALLBACK_AGENDAS: &[(&str, &str, &str, &str, MeetingType)] = &[
    (
        "Thursday, 12th June, 2025",
        "Agenda for the Second Meeting of Parliament Commencing on Tuesday 27th May-July, 2025",
        "2025-06-12",
        "Thursday",
        MeetingType::Second,
    ),
    (
        "Tuesday, 25th January, 2022",
        "Agenda - 1st Meeting 25th January-5th March, 2022",
        "2022-01-25",
        "Tuesday",
        MeetingType::First,
    ),
    (
        "Tuesday, 30th October, 2018",
        "Agenda for the 3rd Meeting of Parliament commencing on Tuesday, 30th October, 2018",
        "2018-10-30",
        "Tuesday",
        MeetingType::Third,
    ),
];

/// Fetch one page of agenda documents. Infallible by policy: any failure
/// is logged and replaced with the curated fallback page.
pub async fn fetch(client: &reqwest::Client, config: &Config, page: u32) -> AgendaData {
    match try_fetch(client, config, page).await {
        Ok(data) => {
            info!(
                page = page,
                items = data.agendas.len(),
                total_pages = data.total_pages,
                "agenda scrape complete"
            );
            data
        }
        Err(error) => {
            warn!(
                page = page,
                error = %error,
                "agenda scrape failed — serving curated fallback"
            );
            fallback_data(&config.base_url)
        }
    }
}

async fn try_fetch(
    client: &reqwest::Client,
    config: &Config,
    page: u32,
) -> Result<AgendaData, ScrapeError> {
    let url = format!("{}/docs?type=AG&page={}", config.base_url, page);
    debug!(url = %url, "fetching agenda listing");

    let body = fetch_page(client, &url).await?;
    let (agendas, total_pages) = parse_listing(&body, &config.base_url);

    Ok(AgendaData {
        agendas,
        total_pages,
        current_page: page,
        last_updated: Utc::now(),
        origin: DataOrigin::Live,
    })
}

/// Pull agenda items and a page-count estimate out of one listing page.
/// Synchronous on purpose: the parsed document never crosses an await.
fn parse_listing(html: &str, base_url: &str) -> (Vec<AgendaItem>, u32) {
    let document = Html::parse_document(html);
    let rows = extract::document_rows(&document);

    // Estimate from the pre-cap row count; the cap below is our own.
    let total_pages = extract::estimate_total_pages(&document, rows.len());

    let agendas = rows
        .into_iter()
        .take(ITEMS_PER_PAGE)
        .map(|row| {
            let normalized = dates::normalize(&row.date_text);
            let meeting_type = classify::meeting_type(&row.title_text);
            let url = match row.href.as_deref() {
                Some(href) => urls::absolutize(base_url, Some(href)),
                None => format!("{}/docs?type=AG", base_url),
            };
            AgendaItem {
                date: row.date_text,
                title: row.title_text,
                url,
                formatted_date: normalized.formatted_date,
                day_of_week: normalized.day_of_week,
                meeting_type,
            }
        })
        .collect();

    (agendas, total_pages)
}

fn fallback_data(base_url: &str) -> AgendaData {
    let listing_url = format!("{}/docs?type=AG", base_url);
    AgendaData {
        agendas: FALLBACK_AGENDAS
            .iter()
            .map(|(date, title, formatted, weekday, meeting_type)| AgendaItem {
                date: date.to_string(),
                title: title.to_string(),
                url: listing_url.clone(),
                formatted_date: formatted.to_string(),
                day_of_week: weekday.to_string(),
                meeting_type: *meeting_type,
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

    fn test_config(base_url: &str) -> Config {
        Config {
            base_url: base_url.to_string(),
            request_timeout: Duration::from_secs(2),
            user_agent: "test".to_string(),
            listen_port: 0,
        }
    }

    #[test]
    fn test_parse_listing_normalizes_and_classifies() {
        let html = r#"<table>
            <tr><td>Date</td><td>Title</td></tr>
            <tr><td>Thursday, 12th June, 2025</td>
                <td><a href="/epanel/docs/ag2.pdf">Agenda for the Second Meeting</a></td></tr>
        </table>"#;
        let (agendas, total_pages) = parse_listing(html, BASE);
        assert_eq!(total_pages, 1);
        assert_eq!(agendas.len(), 1);
        let item = &agendas[0];
        assert_eq!(item.formatted_date, "2025-06-12");
        assert_eq!(item.day_of_week, "Thursday");
        assert_eq!(item.meeting_type, MeetingType::Second);
        assert_eq!(item.url, "https://www.parliament.gh/epanel/docs/ag2.pdf");
    }

    #[test]
    fn test_parse_listing_caps_at_twenty_but_estimates_from_all() {
        let mut html = String::from("<table>");
        for i in 0..45 {
            html.push_str(&format!(
                "<tr><td>Monday, 2nd June, 2025</td><td><a href=\"/d{i}.pdf\">Agenda {i}</a></td></tr>"
            ));
        }
        html.push_str("</table>");

        let (agendas, total_pages) = parse_listing(&html, BASE);
        assert_eq!(agendas.len(), ITEMS_PER_PAGE);
        // 45 rows, no pagination links: ceil(45 / 20) = 3.
        assert_eq!(total_pages, 3);
    }

    #[test]
    fn test_parse_listing_rows_without_links_get_listing_url() {
        let html = r#"<table>
            <tr><td>Monday, 2nd June, 2025</td><td>Unlinked agenda</td></tr>
        </table>"#;
        let (agendas, _) = parse_listing(html, BASE);
        assert_eq!(agendas[0].url, "https://www.parliament.gh/docs?type=AG");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_serves_fallback() {
        // Port 9 on loopback: nothing listens there, the connection is
        // refused immediately, and the fetch must not raise.
        let config = test_config("http://127.0.0.1:9");
        let client = reqwest::Client::new();

        let data = fetch(&client, &config, 3).await;

        assert_eq!(data.origin, DataOrigin::Fallback);
        assert_eq!(data.agendas.len(), 3);
        assert_eq!(data.total_pages, 1);
        assert_eq!(data.current_page, 1);
        assert_eq!(data.agendas[0].meeting_type, MeetingType::Second);
        assert_eq!(data.agendas[0].formatted_date, "2025-06-12");
    }
}
