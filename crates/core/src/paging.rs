//! Page arithmetic and fixed-width table formatting
//!
//! Rows are two left-justified columns, each padded or truncated to
//! [`COLUMN_WIDTH`] characters, separated by [`COLUMN_GAP`] spaces.

/// Rows shown before asking to continue
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Width of the name and address columns, in characters
pub const COLUMN_WIDTH: usize = 25;

/// Spaces between the two columns
pub const COLUMN_GAP: usize = 5;

/// Number of pages needed to show `total_items`
///
/// Zero items means zero pages.
pub fn total_pages(total_items: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    total_items.div_ceil(limit)
}

/// Calculate pagination bounds for a given page
///
/// Returns (start_index, end_index) for slicing the items array.
/// Returns an error if the page is out of range, the limit is zero, or there
/// are no items.
pub fn calculate_pagination(
    total_items: usize,
    page: usize,
    limit: usize,
) -> Result<(usize, usize), String> {
    if total_items == 0 {
        return Err("No items available for pagination".to_string());
    }

    if limit == 0 {
        return Err("Page size must be at least 1".to_string());
    }

    if page == 0 {
        return Err("Pages are numbered from 1".to_string());
    }

    let start = (page - 1) * limit;

    if start >= total_items {
        let total_pages = total_pages(total_items, limit);
        return Err(format!(
            "Page {page} is out of range. Only {total_pages} pages available."
        ));
    }

    let end = (start + limit).min(total_items);
    Ok((start, end))
}

/// Format one table row, without the line terminator
///
/// Keeps a trailing space after the second column.
pub fn format_row(name: &str, address: &str) -> String {
    format!(
        "{name:<width$.width$}{gap}{address:<width$.width$} ",
        width = COLUMN_WIDTH,
        gap = " ".repeat(COLUMN_GAP),
    )
}

/// The table header row
pub fn format_header() -> String {
    format_row("NAME", "ADDRESS")
}

/// Prompt shown after `page` (1-indexed) when more pages follow
pub fn page_prompt(page: usize, total_pages: usize) -> String {
    format!("(Page {page} of {total_pages}) Show next page? Y/N : ")
}

/// Whether a prompt answer asks to stop paging
///
/// Only a leading `N` or `n` stops; every other answer, including an empty
/// line, continues.
pub fn should_stop(answer: &str) -> bool {
    matches!(answer.chars().next(), Some('N' | 'n'))
}
