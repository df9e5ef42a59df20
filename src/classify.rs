// =============================================================================
// classify.rs — THE TITLE READER
// =============================================================================
//
// The site publishes titles, not metadata. Everything downstream wants
// metadata. This module closes the gap with keyword scanning: which
// meeting of the session an agenda belongs to, what subject a bill is
// about, how urgent its title sounds, and where it probably stands in the
// legislative process.
//
// All of it runs on Aho-Corasick automatons — multi-pattern matching in a
// single pass, case-insensitive, built once per process. For a 60-byte
// title this is extravagant, but the automaton also never gets a substring
// check subtly wrong, and we only have to state the keyword tables once.
// =============================================================================

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use chrono::{Datelike, Duration, Utc};

use crate::dates;
use crate::models::{BillPriority, BillStage, BillStatus, MeetingType};

/// Ordinal meeting phrases, in priority order. A title matching several
/// (it happens — rescheduling notices mention two meetings) classifies as
/// the earliest ordinal, not the leftmost occurrence.
const MEETING_PHRASES: [&str; 10] = [
    "first meeting",
    "second meeting",
    "third meeting",
    "fourth meeting",
    "fifth meeting",
    "sixth meeting",
    "seventh meeting",
    "eighth meeting",
    "ninth meeting",
    "tenth meeting",
];

const MEETING_TYPES: [MeetingType; 10] = [
    MeetingType::First,
    MeetingType::Second,
    MeetingType::Third,
    MeetingType::Fourth,
    MeetingType::Fifth,
    MeetingType::Sixth,
    MeetingType::Seventh,
    MeetingType::Eighth,
    MeetingType::Ninth,
    MeetingType::Tenth,
];

static MEETING_AUTOMATON: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(MEETING_PHRASES)
        .expect("failed to build meeting automaton — the phrases are invalid somehow")
});

/// Bill subject categories, checked in this order: the first category with
/// any keyword hit wins. The keyword lists came from reading two decades
/// of bill titles on the site.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("Education", &["education", "school", "student", "teacher", "curriculum", "learning", "university", "college"]),
    ("Finance", &["finance", "tax", "levy", "customs", "excise", "income", "budget", "fiscal", "revenue"]),
    ("Health", &["health", "medical", "hospital", "healthcare", "disease", "medicine", "medical trust"]),
    ("Infrastructure", &["infrastructure", "development", "construction", "road", "bridge", "investment fund"]),
    ("Environment", &["environment", "climate", "green", "forest", "sustainability", "carbon", "emissions"]),
    ("Technology", &["technology", "ict", "digital", "electronic", "communication", "cyber"]),
    ("Governance", &["governance", "democracy", "constitution", "parliament", "public officers", "conduct"]),
    ("Social", &["social", "community", "youth", "women", "children", "welfare", "affirmative action"]),
    ("Economic", &["economic", "business", "company", "bank", "financial", "market", "trade"]),
    ("Legal", &["legal", "criminal", "offences", "law", "justice", "attorney", "court"]),
];

/// One automaton over every category keyword, with a parallel table
/// mapping pattern index back to its category. Keywords are flattened in
/// category order, so the smallest matched pattern index always belongs to
/// the highest-priority matched category.
static CATEGORY_AUTOMATON: LazyLock<(AhoCorasick, Vec<&'static str>)> = LazyLock::new(|| {
    let mut patterns = Vec::new();
    let mut owners = Vec::new();
    for (category, keywords) in CATEGORY_KEYWORDS {
        for keyword in *keywords {
            patterns.push(*keyword);
            owners.push(*category);
        }
    }
    let automaton = AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(&patterns)
        .expect("failed to build category automaton");
    (automaton, owners)
});

/// Tag keywords, in the order tags are emitted. A title matching more
/// than five keeps the first five.
const TAG_KEYWORDS: &[&str] = &[
    "amendment", "repeal", "bill", "act", "regulation", "levy", "tax", "fund",
    "authority", "agency", "institute", "university", "college", "service",
    "development", "investment", "infrastructure", "health", "education",
    "finance", "customs", "excise", "income", "electronic", "communication",
    "criminal", "offences", "public", "officers", "conduct", "affirmative",
    "action", "gender", "equality", "fisheries", "aquaculture", "energy",
    "sector", "borrowers", "lenders", "companies", "bankers", "marketing",
];

/// Classify an agenda title into its session-cycle meeting.
///
/// Substring match, case-insensitive, no word boundaries — a title
/// containing "third meeting" anywhere matches, even glued to other
/// words. No recognized ordinal means the generic label.
pub fn meeting_type(title: &str) -> MeetingType {
    MEETING_AUTOMATON
        .find_iter(title)
        .map(|m| m.pattern().as_usize())
        .min()
        .map(|idx| MEETING_TYPES[idx])
        .unwrap_or(MeetingType::Parliamentary)
}

/// Classify a bill title into a subject category, or "General".
pub fn bill_category(title: &str) -> String {
    let (automaton, owners) = &*CATEGORY_AUTOMATON;
    automaton
        .find_iter(title)
        .map(|m| m.pattern().as_usize())
        .min()
        .map(|idx| owners[idx].to_string())
        .unwrap_or_else(|| "General".to_string())
}

/// Extract up to five tags from a bill title. Tag order follows the
/// keyword table, not position in the title.
pub fn bill_tags(title: &str) -> Vec<String> {
    let lower = title.to_lowercase();
    TAG_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .map(|keyword| capitalize_first(keyword))
        .take(5)
        .collect()
}

/// How urgent the title reads.
pub fn bill_priority(title: &str) -> BillPriority {
    let lower = title.to_lowercase();
    if lower.contains("emergency") || lower.contains("urgent") {
        BillPriority::High
    } else if lower.contains("amendment") || lower.contains("repeal") {
        BillPriority::Medium
    } else {
        BillPriority::Normal
    }
}

/// Infer a bill's status from its normalized laying and gazette dates.
///
/// The rules, in order: a gazette date in the future means it passed; a
/// laying within the last ~6 months means it is still being worked; a
/// gazette date in the past means it passed; otherwise it was merely
/// introduced. Unparseable or empty dates fail every comparison, matching
/// the Invalid Date semantics the frontend was built against.
pub fn bill_status(formatted_laid_on: &str, formatted_gazetted_on: &str) -> BillStatus {
    let today = Utc::now().date_naive();
    let laid = dates::parse_iso(formatted_laid_on);
    let gazetted = dates::parse_iso(formatted_gazetted_on);

    if gazetted.is_some_and(|d| d > today) {
        return BillStatus::Passed;
    }

    let six_months_ago = today - Duration::days(180);
    if laid.is_some_and(|d| d > six_months_ago) {
        return BillStatus::InProgress;
    }

    if gazetted.is_some_and(|d| d < today) {
        return BillStatus::Passed;
    }

    BillStatus::Introduced
}

/// The procedural stage implied by a status.
pub fn bill_stage(status: BillStatus) -> BillStage {
    match status {
        BillStatus::Introduced => BillStage::FirstReading,
        BillStatus::InProgress => BillStage::CommitteeStage,
        BillStatus::Passed => BillStage::RoyalAssent,
    }
}

/// Synthetic house-bill number: "HB-<year>-<NNN>" from the bill's position
/// in the current listing. The site assigns no numbers of its own.
pub fn bill_number(index: usize) -> String {
    format!("HB-{}-{:03}", Utc::now().year(), index + 1)
}

/// Generated one-sentence description. Titles are all the site gives us,
/// so the sentence is honest about being derived from one.
pub fn bill_description(title: &str) -> String {
    let lower = title.to_lowercase();
    let aim = if lower.contains("amendment") {
        "amend existing legislation"
    } else if lower.contains("repeal") {
        "repeal existing legislation"
    } else {
        "introduce new legislation"
    };
    format!("The {} aims to {} in Ghana.", title, aim)
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
