// =============================================================================
// models.rs — THE PUBLIC RECORD, AS STRUCTS
// =============================================================================
//
// These are the wire shapes the engine serves. Each record is a plain
// immutable value, produced fresh on every scrape and never cached or
// mutated afterwards — a page of parliamentary documents has no identity
// beyond its fields.
//
// Field names serialize as camelCase because the frontend consuming this
// JSON predates the engine and its naming preferences won.
// =============================================================================

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the data in a response actually came from. This is the one place
/// the engine editorializes: a caller deserves to know whether it is
/// looking at the live public record or at our curated stand-in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    /// Scraped from parliament.gh moments ago. The real thing.
    Live,

    /// The scrape succeeded but the page had nothing structural to offer
    /// (the leadership page has said "Coming soon" for years), so a fixed
    /// roster was substituted. Deliberate approximation, not an error.
    Placeholder,

    /// Something failed — network, HTTP status, parsing — and a curated
    /// sample was substituted so the caller still gets a well-formed page.
    Fallback,
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataOrigin::Live => write!(f, "live"),
            DataOrigin::Placeholder => write!(f, "placeholder"),
            DataOrigin::Fallback => write!(f, "fallback"),
        }
    }
}

/// Ordinal classification of a parliamentary session cycle, extracted from
/// the agenda title by substring match. Parliament numbers its meetings
/// First through Tenth; anything that doesn't say which meeting it is
/// gets the generic label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MeetingType {
    #[serde(rename = "First Meeting")]
    First,
    #[serde(rename = "Second Meeting")]
    Second,
    #[serde(rename = "Third Meeting")]
    Third,
    #[serde(rename = "Fourth Meeting")]
    Fourth,
    #[serde(rename = "Fifth Meeting")]
    Fifth,
    #[serde(rename = "Sixth Meeting")]
    Sixth,
    #[serde(rename = "Seventh Meeting")]
    Seventh,
    #[serde(rename = "Eighth Meeting")]
    Eighth,
    #[serde(rename = "Ninth Meeting")]
    Ninth,
    #[serde(rename = "Tenth Meeting")]
    Tenth,
    /// The title mentioned no ordinal we recognize.
    #[serde(rename = "Parliamentary Meeting")]
    Parliamentary,
}

impl fmt::Display for MeetingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MeetingType::First => "First Meeting",
            MeetingType::Second => "Second Meeting",
            MeetingType::Third => "Third Meeting",
            MeetingType::Fourth => "Fourth Meeting",
            MeetingType::Fifth => "Fifth Meeting",
            MeetingType::Sixth => "Sixth Meeting",
            MeetingType::Seventh => "Seventh Meeting",
            MeetingType::Eighth => "Eighth Meeting",
            MeetingType::Ninth => "Ninth Meeting",
            MeetingType::Tenth => "Tenth Meeting",
            MeetingType::Parliamentary => "Parliamentary Meeting",
        };
        write!(f, "{}", label)
    }
}

/// Where a bill stands in its legislative life, inferred from its dates.
/// The website doesn't publish status, so we read the tea leaves: a recent
/// laying means work in progress, an old gazette date means it went through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BillStatus {
    #[serde(rename = "introduced")]
    Introduced,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "passed")]
    Passed,
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillStatus::Introduced => write!(f, "introduced"),
            BillStatus::InProgress => write!(f, "in-progress"),
            BillStatus::Passed => write!(f, "passed"),
        }
    }
}

/// The procedural stage implied by a bill's status. Coarse, like the
/// status it derives from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BillStage {
    #[serde(rename = "First Reading")]
    FirstReading,
    #[serde(rename = "Committee Stage")]
    CommitteeStage,
    #[serde(rename = "Royal Assent")]
    RoyalAssent,
}

impl fmt::Display for BillStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillStage::FirstReading => write!(f, "First Reading"),
            BillStage::CommitteeStage => write!(f, "Committee Stage"),
            BillStage::RoyalAssent => write!(f, "Royal Assent"),
        }
    }
}

/// How urgently a bill's title reads. "Emergency" in the title means high;
/// amendments and repeals are routine-but-notable; the rest is normal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BillPriority {
    #[serde(rename = "high")]
    High,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "normal")]
    Normal,
}

impl fmt::Display for BillPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillPriority::High => write!(f, "high"),
            BillPriority::Medium => write!(f, "medium"),
            BillPriority::Normal => write!(f, "normal"),
        }
    }
}

/// One published agenda document: a sitting's schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    /// The date cell exactly as the site renders it,
    /// e.g. "Thursday, 12th June, 2025".
    pub date: String,

    /// The document title exactly as the site renders it.
    pub title: String,

    /// Absolute URL of the document, or the listing page when the row
    /// carried no link. Never a bare relative path.
    pub url: String,

    /// The date cell normalized to YYYY-MM-DD.
    pub formatted_date: String,

    /// Weekday name, title-cased, or "Unknown" when the date cell
    /// resisted all parsing.
    pub day_of_week: String,

    /// Which meeting of the session cycle this agenda belongs to.
    pub meeting_type: MeetingType,
}

/// One page of agenda documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgendaData {
    /// Source table row order, at most 20 per page.
    pub agendas: Vec<AgendaItem>,
    pub total_pages: u32,
    pub current_page: u32,
    pub last_updated: DateTime<Utc>,
    pub origin: DataOrigin,
}

/// One Votes & Proceedings document: the official minutes-equivalent
/// record of a sitting. Same shape as an agenda item minus the meeting
/// classification — proceedings are dated, not numbered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VotesProceedingsItem {
    pub date: String,
    pub title: String,
    pub url: String,
    pub formatted_date: String,
    pub day_of_week: String,
}

/// One page of Votes & Proceedings documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VotesProceedingsData {
    pub proceedings: Vec<VotesProceedingsItem>,
    pub total_pages: u32,
    pub current_page: u32,
    pub last_updated: DateTime<Utc>,
    pub origin: DataOrigin,
}

/// One presiding or party officer of Parliament.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParliamentLeader {
    pub name: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// The leadership roster. Not paginated — there are only so many Speakers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadershipData {
    /// At most 8 entries.
    pub leaders: Vec<ParliamentLeader>,
    pub last_updated: DateTime<Utc>,
    pub origin: DataOrigin,
}

/// One bill before the House, as listed on the documents page, enriched
/// with everything our classifiers can squeeze out of four table cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParliamentBill {
    pub title: String,

    /// Who laid the bill before the House, verbatim from the table.
    pub laid_by: String,

    /// Laying date as rendered, e.g. "20-06-2025".
    pub laid_on: String,

    /// Gazette date as rendered; may be empty.
    pub gazetted_on: String,

    pub url: String,

    /// Synthetic house-bill number, "HB-<year>-<NNN>". The site assigns
    /// no number, so position in the listing stands in for one.
    pub bill_number: String,

    /// Keyword-derived subject category, e.g. "Finance".
    pub category: String,

    pub status: BillStatus,
    pub stage: BillStage,
    pub priority: BillPriority,

    /// Generated one-sentence summary. The site publishes titles only.
    pub description: String,

    /// Keyword tags lifted from the title, at most 5.
    pub tags: Vec<String>,

    pub formatted_laid_on: String,
    pub formatted_gazetted_on: String,
}

/// One page of bills.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillsData {
    pub bills: Vec<ParliamentBill>,
    pub total_pages: u32,
    pub current_page: u32,
    pub last_updated: DateTime<Utc>,
    pub origin: DataOrigin,
}

/// Everything that can go wrong between us and the public record.
/// All three variants are caught at the scraper boundary and converted
/// into fallback data — callers of the public fetch functions never see
/// this type, but tests and logs do.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The request never completed: DNS, connect, TLS, timeout.
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered, unhelpfully.
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The body came back but didn't contain what a parliament documents
    /// page is supposed to contain. The current extraction path is total —
    /// an unrecognizable page yields an empty listing, not an error — so
    /// this variant is the reserved slot for extraction code that can
    /// actually fail, not something today's scrapers produce.
    #[allow(dead_code)]
    #[error("failed to parse page content: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_type_serializes_to_label() {
        let json = serde_json::to_string(&MeetingType::Third).unwrap();
        assert_eq!(json, "\"Third Meeting\"");
        let json = serde_json::to_string(&MeetingType::Parliamentary).unwrap();
        assert_eq!(json, "\"Parliamentary Meeting\"");
    }

    #[test]
    fn test_agenda_item_uses_camel_case_keys() {
        let item = AgendaItem {
            date: "Thursday, 12th June, 2025".into(),
            title: "Agenda".into(),
            url: "https://www.parliament.gh/docs?type=AG".into(),
            formatted_date: "2025-06-12".into(),
            day_of_week: "Thursday".into(),
            meeting_type: MeetingType::Second,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("formattedDate").is_some());
        assert!(json.get("dayOfWeek").is_some());
        assert_eq!(json["meetingType"], "Second Meeting");
    }

    #[test]
    fn test_leader_omits_absent_optionals() {
        let leader = ParliamentLeader {
            name: "Hon. Example".into(),
            position: "Speaker".into(),
            image_url: None,
            bio: None,
        };
        let json = serde_json::to_value(&leader).unwrap();
        assert!(json.get("imageUrl").is_none());
        assert!(json.get("bio").is_none());
    }

    #[test]
    fn test_bill_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&BillStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::to_string(&BillStage::RoyalAssent).unwrap(),
            "\"Royal Assent\""
        );
        assert_eq!(
            serde_json::to_string(&BillPriority::Normal).unwrap(),
            "\"normal\""
        );
    }

    #[test]
    fn test_scrape_error_messages_name_the_url() {
        let status_err = ScrapeError::Status {
            url: "https://www.parliament.gh/docs?type=AG&page=1".to_string(),
            status: reqwest::StatusCode::BAD_GATEWAY,
        };
        assert!(status_err.to_string().contains("502"));
        assert!(status_err.to_string().contains("/docs?type=AG"));

        let parse_err = ScrapeError::Parse("no document table".to_string());
        assert!(parse_err.to_string().contains("no document table"));
    }

    #[test]
    fn test_data_origin_is_lowercase_on_the_wire() {
        assert_eq!(serde_json::to_string(&DataOrigin::Live).unwrap(), "\"live\"");
        assert_eq!(
            serde_json::to_string(&DataOrigin::Fallback).unwrap(),
            "\"fallback\""
        );
    }
}
