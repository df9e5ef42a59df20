// =============================================================================
// leadership.rs — THE FRONT BENCH ROSTER
// =============================================================================
//
// The leadership page at /gen?LD is supposed to list the Speaker, the
// deputies, the leaders and the whips. What it has actually rendered for
// as long as anyone has checked is a "Coming soon" placeholder. We scrape
// it structurally anyway — the candidate selectors in selectors.rs
// describe the markup we expect to appear someday — and when the page
// yields nothing, we substitute the fixed roster below.
//
// That roster is a deliberate, documented approximation of real-world
// data, not a bug: eight named office-holders of the 8th Parliament with
// the portrait URLs the site's admin panel uses. Responses built from it
// say `origin: placeholder` so nobody mistakes it for a live scrape.
// =============================================================================

use chrono::Utc;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::{DataOrigin, LeadershipData, ParliamentLeader, ScrapeError};
use crate::selectors;
use crate::urls;

use super::fetch_page;

/// Live rosters are capped here, and the placeholder roster has exactly
/// this many entries.
const MAX_LEADERS: usize = 8;

// (name, position, portrait path, bio)
const PLACEHOLDER_ROSTER: &[(&str, &str, &str, &str)] = &[
    (
        "Rt. Hon. Alban Sumana Kingsford Bagbin",
        "Speaker of Parliament",
        "/epanel/leadership/speaker.jpg",
        "Speaker of the 8th Parliament of Ghana",
    ),
    (
        "Hon. Osei Kyei-Mensah-Bonsu",
        "Majority Leader",
        "/epanel/leadership/majority-leader.jpg",
        "Majority Leader and Minister for Parliamentary Affairs",
    ),
    (
        "Hon. Haruna Iddrisu",
        "Minority Leader",
        "/epanel/leadership/minority-leader.jpg",
        "Minority Leader and Member of Parliament for Tamale South",
    ),
    (
        "Hon. Alexander Kwamena Afenyo-Markin",
        "Deputy Majority Leader",
        "/epanel/leadership/deputy-majority.jpg",
        "Deputy Majority Leader and Member of Parliament for Effutu",
    ),
    (
        "Hon. James Klutse Avedzi",
        "Deputy Minority Leader",
        "/epanel/leadership/deputy-minority.jpg",
        "Deputy Minority Leader and Member of Parliament for Ketu North",
    ),
    (
        "Hon. Frank Annoh-Dompreh",
        "Majority Chief Whip",
        "/epanel/leadership/majority-whip.jpg",
        "Majority Chief Whip and Member of Parliament for Nsawam-Adoagyiri",
    ),
    (
        "Hon. Muntaka Mubarak",
        "Minority Chief Whip",
        "/epanel/leadership/minority-whip.jpg",
        "Minority Chief Whip and Member of Parliament for Asawase",
    ),
    (
        "Hon. Joseph Osei-Owusu",
        "First Deputy Speaker",
        "/epanel/leadership/first-deputy-speaker.jpg",
        "First Deputy Speaker and Member of Parliament for Bekwai",
    ),
];

/// Fetch the leadership roster. Infallible by policy: a failed scrape
/// serves the first three placeholder entries as fallback, and a
/// successful scrape of a structurally empty page serves the full
/// placeholder roster.
pub async fn fetch(client: &reqwest::Client, config: &Config) -> LeadershipData {
    match try_fetch(client, config).await {
        Ok(data) => {
            info!(
                leaders = data.leaders.len(),
                origin = %data.origin,
                "leadership scrape complete"
            );
            data
        }
        Err(error) => {
            warn!(
                error = %error,
                "leadership scrape failed — serving curated fallback"
            );
            fallback_data(&config.base_url)
        }
    }
}

async fn try_fetch(
    client: &reqwest::Client,
    config: &Config,
) -> Result<LeadershipData, ScrapeError> {
    let url = format!("{}/gen?LD", config.base_url);
    debug!(url = %url, "fetching leadership page");

    let body = fetch_page(client, &url).await?;
    let (leaders, origin) = roster_or_placeholder(&body, &config.base_url);

    Ok(LeadershipData {
        leaders,
        last_updated: Utc::now(),
        origin,
    })
}

/// Structural extraction first; the fixed roster when the page has
/// nothing to extract.
fn roster_or_placeholder(html: &str, base_url: &str) -> (Vec<ParliamentLeader>, DataOrigin) {
    let mut leaders = parse_roster(html, base_url);
    if leaders.is_empty() {
        debug!("leadership page has no structural entries — substituting placeholder roster");
        return (placeholder_roster(base_url), DataOrigin::Placeholder);
    }
    leaders.truncate(MAX_LEADERS);
    (leaders, DataOrigin::Live)
}

fn parse_roster(html: &str, base_url: &str) -> Vec<ParliamentLeader> {
    let document = Html::parse_document(html);

    document
        .select(&selectors::LEADER_BLOCKS)
        .filter_map(|block| {
            let name = first_text(block, &selectors::LEADER_NAME);
            let position = first_text(block, &selectors::LEADER_POSITION);

            // An entry is only an entry if we can say who and what.
            if name.is_empty() || position.is_empty() {
                return None;
            }

            let image_url = block
                .select(&selectors::IMAGE)
                .next()
                .and_then(|img| img.value().attr("src"))
                .map(|src| urls::absolutize(base_url, Some(src)));

            let bio = Some(first_text(block, &selectors::LEADER_BIO))
                .filter(|text| !text.is_empty());

            Some(ParliamentLeader {
                name,
                position,
                image_url,
                bio,
            })
        })
        .collect()
}

/// Trimmed text of the first descendant matching `candidates`, or `""`.
fn first_text(block: ElementRef<'_>, candidates: &Selector) -> String {
    block
        .select(candidates)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn placeholder_roster(base_url: &str) -> Vec<ParliamentLeader> {
    PLACEHOLDER_ROSTER
        .iter()
        .map(|(name, position, portrait, bio)| ParliamentLeader {
            name: name.to_string(),
            position: position.to_string(),
            image_url: Some(format!("{}{}", base_url, portrait)),
            bio: Some(bio.to_string()),
        })
        .collect()
}

fn fallback_data(base_url: &str) -> LeadershipData {
    let mut leaders = placeholder_roster(base_url);
    leaders.truncate(3);
    LeadershipData {
        leaders,
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
    fn test_structural_extraction() {
        let html = r#"
            <div class="leader">
                <h3>Rt. Hon. Example Speaker</h3>
                <span class="position">Speaker of Parliament</span>
                <img src="/epanel/leadership/speaker.jpg">
                <p>Presides over the House.</p>
            </div>
            <div class="member">
                <h4>Hon. Example Leader</h4>
                <div class="role">Majority Leader</div>
            </div>"#;
        let leaders = parse_roster(html, BASE);
        assert_eq!(leaders.len(), 2);
        assert_eq!(leaders[0].name, "Rt. Hon. Example Speaker");
        assert_eq!(leaders[0].position, "Speaker of Parliament");
        assert_eq!(
            leaders[0].image_url.as_deref(),
            Some("https://www.parliament.gh/epanel/leadership/speaker.jpg")
        );
        assert_eq!(leaders[0].bio.as_deref(), Some("Presides over the House."));
        assert_eq!(leaders[1].bio, None);
        assert_eq!(leaders[1].image_url, None);
    }

    #[test]
    fn test_entries_missing_name_or_position_are_discarded() {
        let html = r#"
            <div class="leader"><h3>Name Only</h3></div>
            <div class="leader"><span class="position">Position Only</span></div>"#;
        assert!(parse_roster(html, BASE).is_empty());
    }

    #[test]
    fn test_empty_page_substitutes_full_placeholder_roster() {
        let (leaders, origin) =
            roster_or_placeholder("<html><body><p>Coming soon</p></body></html>", BASE);
        assert_eq!(origin, DataOrigin::Placeholder);
        assert_eq!(leaders.len(), 8);
        for leader in &leaders {
            assert!(!leader.name.is_empty());
            assert!(!leader.position.is_empty());
        }
        assert_eq!(leaders[0].position, "Speaker of Parliament");
    }

    #[test]
    fn test_live_roster_is_capped_at_eight() {
        let mut html = String::new();
        for i in 0..12 {
            html.push_str(&format!(
                r#"<div class="mp"><h3>Hon. Member {i}</h3><span class="role">Whip {i}</span></div>"#
            ));
        }
        let (leaders, origin) = roster_or_placeholder(&html, BASE);
        assert_eq!(origin, DataOrigin::Live);
        assert_eq!(leaders.len(), 8);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_serves_three_entry_fallback() {
        let config = Config {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout: Duration::from_secs(2),
            user_agent: "test".to_string(),
            listen_port: 0,
        };
        let client = reqwest::Client::new();

        let data = fetch(&client, &config).await;

        assert_eq!(data.origin, DataOrigin::Fallback);
        assert_eq!(data.leaders.len(), 3);
        assert_eq!(data.leaders[0].name, "Rt. Hon. Alban Sumana Kingsford Bagbin");
    }
}
