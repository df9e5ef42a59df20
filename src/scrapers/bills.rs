// =============================================================================
// bills.rs — THE LEGISLATION LEDGER
// =============================================================================
//
// Bills live at /docs?type=Bills&OT in a wider table than the other
// document types: title (with the link), who laid it, when it was laid,
// and when it was gazetted — the dates in numeric DD-MM-YYYY form rather
// than the prose the agenda table uses, because the two pages were
// evidently built in different decades.
//
// The site publishes nothing else about a bill, so the rest of the record
// is inference: category, tags and priority read out of the title, status
// and stage read out of the two dates, and a synthetic HB number from the
// bill's position in the listing. All of it is honest guesswork and lives
// in classify.rs.
// =============================================================================

use chrono::Utc;
use scraper::Html;
use tracing::{debug, info, warn};

use crate::classify;
use crate::config::Config;
use crate::dates;
use crate::extract::{self, ITEMS_PER_PAGE};
use crate::models::{
    BillPriority, BillStage, BillStatus, BillsData, DataOrigin, ParliamentBill, ScrapeError,
};
use crate::selectors;
use crate::urls;

use super::fetch_page;

/// Fetch one page of bills. Infallible by policy.
pub async fn fetch(client: &reqwest::Client, config: &Config, page: u32) -> BillsData {
    match try_fetch(client, config, page).await {
        Ok(data) => {
            info!(
                page = page,
                items = data.bills.len(),
                total_pages = data.total_pages,
                "bills scrape complete"
            );
            data
        }
        Err(error) => {
            warn!(
                page = page,
                error = %error,
                "bills scrape failed — serving curated fallback"
            );
            fallback_data(&config.base_url)
        }
    }
}

async fn try_fetch(
    client: &reqwest::Client,
    config: &Config,
    page: u32,
) -> Result<BillsData, ScrapeError> {
    let url = format!("{}/docs?type=Bills&OT&page={}", config.base_url, page);
    debug!(url = %url, "fetching bills listing");

    let body = fetch_page(client, &url).await?;
    let (bills, total_pages) = parse_listing(&body, &config.base_url);

    Ok(BillsData {
        bills,
        total_pages,
        current_page: page,
        last_updated: Utc::now(),
        origin: DataOrigin::Live,
    })
}

fn parse_listing(html: &str, base_url: &str) -> (Vec<ParliamentBill>, u32) {
    let document = Html::parse_document(html);
    let mut bills = Vec::new();

    // The bills table is its own four-column shape, so the shared
    // two-column extractor doesn't apply here.
    for row in document.select(&selectors::TABLE_ROWS) {
        let cells: Vec<_> = row.select(&selectors::ROW_CELLS).collect();
        if cells.len() < 4 {
            continue;
        }

        let title = cells[0].text().collect::<String>().trim().to_string();
        let laid_by = cells[1].text().collect::<String>().trim().to_string();
        let laid_on = cells[2].text().collect::<String>().trim().to_string();
        let gazetted_on = cells[3].text().collect::<String>().trim().to_string();

        if title.is_empty() || title == "Title" || laid_by.is_empty() || laid_on.is_empty() {
            continue;
        }

        let href = cells[0]
            .select(&selectors::ANCHOR)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string);

        let formatted_laid_on = dates::normalize_numeric(&laid_on);
        let formatted_gazetted_on = if gazetted_on.is_empty() {
            String::new()
        } else {
            dates::normalize_numeric(&gazetted_on)
        };

        let status = classify::bill_status(&formatted_laid_on, &formatted_gazetted_on);
        let url = match href.as_deref() {
            Some(href) => urls::absolutize(base_url, Some(href)),
            None => format!("{}/docs?type=Bills&OT", base_url),
        };

        bills.push(ParliamentBill {
            bill_number: classify::bill_number(bills.len()),
            category: classify::bill_category(&title),
            stage: classify::bill_stage(status),
            priority: classify::bill_priority(&title),
            description: classify::bill_description(&title),
            tags: classify::bill_tags(&title),
            status,
            url,
            title,
            laid_by,
            laid_on,
            gazetted_on,
            formatted_laid_on,
            formatted_gazetted_on,
        });
    }

    let total_pages = extract::estimate_total_pages(&document, bills.len());
    bills.truncate(ITEMS_PER_PAGE);

    (bills, total_pages)
}

fn fallback_data(base_url: &str) -> BillsData {
    let listing_url = format!("{}/docs?type=Bills&OT", base_url);
    BillsData {
        bills: vec![
            ParliamentBill {
                title: "Public Holidays and Commemorative Days (Amendment) Bill, 2025"
                    .to_string(),
                laid_by: "Hon. Muntaka Mohammed-Mubarak (Minister responsible for Interior)"
                    .to_string(),
                laid_on: "20-06-2025".to_string(),
                gazetted_on: "20-06-2025".to_string(),
                url: listing_url.clone(),
                bill_number: "HB-2025-001".to_string(),
                category: "Governance".to_string(),
                status: BillStatus::Passed,
                stage: BillStage::RoyalAssent,
                priority: BillPriority::Medium,
                description: "The Public Holidays and Commemorative Days (Amendment) Bill, \
                              2025 aims to amend existing legislation in Ghana."
                    .to_string(),
                tags: vec![
                    "Amendment".to_string(),
                    "Bill".to_string(),
                    "Public".to_string(),
                    "Holidays".to_string(),
                ],
                formatted_laid_on: "2025-06-20".to_string(),
                formatted_gazetted_on: "2025-06-20".to_string(),
            },
            ParliamentBill {
                title: "Affirmative Action (Gender Equality) Bill, 2024".to_string(),
                laid_by: "Hon. Dakoa Newman".to_string(),
                laid_on: "31-10-2024".to_string(),
                gazetted_on: "31-10-2023".to_string(),
                url: listing_url,
                bill_number: "HB-2024-002".to_string(),
                category: "Social".to_string(),
                status: BillStatus::InProgress,
                stage: BillStage::CommitteeStage,
                priority: BillPriority::High,
                description: "The Affirmative Action (Gender Equality) Bill, 2024 aims to \
                              introduce new legislation in Ghana."
                    .to_string(),
                tags: vec![
                    "Affirmative".to_string(),
                    "Action".to_string(),
                    "Gender".to_string(),
                    "Equality".to_string(),
                    "Bill".to_string(),
                ],
                formatted_laid_on: "2024-10-31".to_string(),
                formatted_gazetted_on: "2023-10-31".to_string(),
            },
        ],
        total_pages: 1,
        current_page: 1,
        last_updated: Utc::now(),
        origin: DataOrigin::Fallback,
    }
}
