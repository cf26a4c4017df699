use std::fmt;

use anyhow::{bail, Result};

/// Lists up to this many pages render every page number.
pub const VISIBLE_MAX: u32 = 10;
/// "Near an edge" means within this many pages of it.
pub const EDGE_PAGES: u32 = 5;
/// Pages shown as a solid run against an edge of a long list.
pub const EDGE_RUN: u32 = 8;
/// Pages shown either side of the current page in the middle of a long list.
pub const WINDOW_RADIUS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(u32),
    Ellipsis,
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{n}"),
            PageToken::Ellipsis => f.write_str("…"),
        }
    }
}

/// Page strip for a paginated table: every page for short lists, edge runs
/// and a window centered on the current page for long ones, collapsed with
/// ellipses. Pages are 1-based.
pub fn page_window(current_page: u32, total_pages: u32) -> Result<Vec<PageToken>> {
    if current_page == 0 || current_page > total_pages.max(1) {
        bail!("current page {current_page} outside 1..={total_pages}");
    }
    if total_pages == 0 {
        // A fully filtered-out table has no pages and renders no strip.
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    if total_pages <= VISIBLE_MAX {
        out.extend((1..=total_pages).map(PageToken::Page));
    } else if current_page <= EDGE_PAGES {
        out.extend((1..=EDGE_RUN).map(PageToken::Page));
        out.push(PageToken::Ellipsis);
        out.push(PageToken::Page(total_pages));
    } else if current_page >= total_pages - (EDGE_PAGES - 1) {
        out.push(PageToken::Page(1));
        out.push(PageToken::Ellipsis);
        out.extend((total_pages - (EDGE_RUN - 1)..=total_pages).map(PageToken::Page));
    } else {
        out.push(PageToken::Page(1));
        out.push(PageToken::Ellipsis);
        out.extend(
            (current_page - WINDOW_RADIUS..=current_page + WINDOW_RADIUS).map(PageToken::Page),
        );
        out.push(PageToken::Ellipsis);
        out.push(PageToken::Page(total_pages));
    }
    Ok(out)
}
