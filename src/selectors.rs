// =============================================================================
// selectors.rs — EVERY CSS SELECTOR WE DEPEND ON, IN ONE PLACE
// =============================================================================
//
// The scrapers are coupled to parliament.gh's markup, and that markup can
// change without notice or changelog. When it does, the fix belongs here:
// one table of selectors, precompiled once, shared by every scraper. No
// parsing logic should ever contain a selector string of its own.
//
// The leadership selectors are candidates, not certainties — the live page
// currently renders a placeholder, so `.leader`/`.member`/etc. describe
// the markup we expect to appear, not markup anyone has seen.
// =============================================================================

use std::sync::LazyLock;

use scraper::Selector;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("selector table contains invalid CSS")
}

/// Every row of every table on a documents page.
pub static TABLE_ROWS: LazyLock<Selector> = LazyLock::new(|| selector("table tr"));

/// Data cells within a row.
pub static ROW_CELLS: LazyLock<Selector> = LazyLock::new(|| selector("td"));

/// Anchors — used both for document links inside cells and for the
/// whole-page pagination scan.
pub static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));

/// Images, for leader portraits.
pub static IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("img"));

/// Candidate containers for one leadership entry.
pub static LEADER_BLOCKS: LazyLock<Selector> =
    LazyLock::new(|| selector(".leader, .leadership, .member, .mp"));

/// Candidate elements holding a leader's name.
pub static LEADER_NAME: LazyLock<Selector> =
    LazyLock::new(|| selector("h3, h4, .name, .title"));

/// Candidate elements holding a leader's position.
pub static LEADER_POSITION: LazyLock<Selector> =
    LazyLock::new(|| selector(".position, .role, .title"));

/// Candidate elements holding a leader's biography.
pub static LEADER_BIO: LazyLock<Selector> =
    LazyLock::new(|| selector(".bio, .description, p"));
