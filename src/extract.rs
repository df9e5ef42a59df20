// =============================================================================
// extract.rs — TABLE ARCHAEOLOGY
// =============================================================================
//
// The documents pages are one big HTML table: a date cell, a title cell
// with (usually) a link, repeated for twenty rows, wrapped in whatever
// header and navigation rows the CMS felt like emitting that day. This
// module digs the actual records out.
//
// The pagination estimate lives here too, because it reads the same page.
// It is a heuristic twice over: it trusts that the biggest page number
// mentioned in any link approximates the page count, and failing that,
// that the site renders exactly twenty items per page. When the requested
// page is the last one and no higher-numbered links render, the estimate
// undercounts. Known, accepted, left alone.
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::selectors;

/// Items the site renders per listing page. Also the cap we apply to our
/// own output.
pub const ITEMS_PER_PAGE: usize = 20;

/// A table row reduced to the three things the scrapers care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub date_text: String,
    pub title_text: String,
    /// First anchor href in the title cell, verbatim (not yet absolutized).
    pub href: Option<String>,
}

static PAGE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"page=(\d+)").expect("page pattern is invalid somehow"));

/// Extract (date, title, href) triples from every table row, in document
/// order.
///
/// Rows are kept only if they have at least two cells, both non-empty
/// after trimming, and are not the literal "Date"/"Title" header row —
/// the site marks headers with plain `<td>`, so literal comparison is the
/// only header detection available.
pub fn document_rows(document: &Html) -> Vec<RawRow> {
    let mut rows = Vec::new();

    for row in document.select(&selectors::TABLE_ROWS) {
        let cells: Vec<_> = row.select(&selectors::ROW_CELLS).collect();
        if cells.len() < 2 {
            continue;
        }

        let date_text = cells[0].text().collect::<String>().trim().to_string();
        let title_text = cells[1].text().collect::<String>().trim().to_string();

        if date_text.is_empty() || title_text.is_empty() {
            continue;
        }
        if date_text == "Date" || title_text == "Title" {
            continue;
        }

        let href = cells[1]
            .select(&selectors::ANCHOR)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string);

        rows.push(RawRow {
            date_text,
            title_text,
            href,
        });
    }

    rows
}

/// Estimate the total page count from a listing page.
///
/// Scans every anchor for a `page=N` query parameter and takes the
/// maximum, floor 1. If that scan comes up empty-handed and the page
/// yielded content, assumes the site's twenty-per-page layout:
/// `ceil(item_count / 20)`. `item_count` is the pre-cap row count.
pub fn estimate_total_pages(document: &Html, item_count: usize) -> u32 {
    let mut total: u32 = 1;

    for anchor in document.select(&selectors::ANCHOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if let Some(caps) = PAGE_PARAM.captures(href) {
            if let Ok(page) = caps[1].parse::<u32>() {
                if page > total {
                    total = page;
                }
            }
        }
    }

    if total == 1 && item_count > 0 {
        total = (item_count as u32).div_ceil(ITEMS_PER_PAGE as u32).max(1);
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_rows_extract_in_document_order() {
        let document = doc(
            r#"<table>
                <tr><td>Date</td><td>Title</td></tr>
                <tr><td>Thursday, 12th June, 2025</td>
                    <td><a href="/epanel/docs/a.pdf">Agenda A</a></td></tr>
                <tr><td>Friday, 13th June, 2025</td>
                    <td><a href="/epanel/docs/b.pdf">Agenda B</a></td></tr>
            </table>"#,
        );
        let rows = document_rows(&document);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title_text, "Agenda A");
        assert_eq!(rows[1].title_text, "Agenda B");
        assert_eq!(rows[0].href.as_deref(), Some("/epanel/docs/a.pdf"));
    }

    #[test]
    fn test_header_row_is_skipped_by_literal_text() {
        let document = doc(
            r#"<table>
                <tr><td>Date</td><td>Some title</td></tr>
                <tr><td>Some date</td><td>Title</td></tr>
            </table>"#,
        );
        assert!(document_rows(&document).is_empty());
    }

    #[test]
    fn test_short_and_empty_rows_are_skipped() {
        let document = doc(
            r#"<table>
                <tr><td>only one cell</td></tr>
                <tr><td>   </td><td>has title</td></tr>
                <tr><td>has date</td><td></td></tr>
                <tr><th>Date</th><th>Title</th></tr>
            </table>"#,
        );
        assert!(document_rows(&document).is_empty());
    }

    #[test]
    fn test_first_anchor_in_title_cell_wins() {
        let document = doc(
            r#"<table><tr>
                <td>Monday, 2nd June, 2025</td>
                <td><a href="/first.pdf">x</a><a href="/second.pdf">y</a></td>
            </tr></table>"#,
        );
        let rows = document_rows(&document);
        assert_eq!(rows[0].href.as_deref(), Some("/first.pdf"));
    }

    #[test]
    fn test_row_without_anchor_has_no_href() {
        let document = doc(
            r#"<table><tr><td>Monday, 2nd June, 2025</td><td>No link here</td></tr></table>"#,
        );
        assert_eq!(document_rows(&document)[0].href, None);
    }

    #[test]
    fn test_pagination_takes_max_page_seen() {
        let document = doc(
            r#"<p>
                <a href="/docs?type=AG&page=1">1</a>
                <a href="/docs?type=AG&page=3">3</a>
                <a href="/docs?type=AG&page=2">2</a>
            </p>"#,
        );
        assert_eq!(estimate_total_pages(&document, 5), 3);
    }

    #[test]
    fn test_pagination_ignores_anchors_without_page_param() {
        let document = doc(r#"<a href="/docs?type=AG">all</a><a href="/about">about</a>"#);
        assert_eq!(estimate_total_pages(&document, 0), 1);
    }

    #[test]
    fn test_pagination_falls_back_to_item_count() {
        let document = doc("<p>no links at all</p>");
        assert_eq!(estimate_total_pages(&document, 20), 1);
        assert_eq!(estimate_total_pages(&document, 45), 3);
        assert_eq!(estimate_total_pages(&document, 0), 1);
    }
}
