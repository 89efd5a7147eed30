use crate::prelude::*;
use foodtrucks_core::listing::TruckListing;
use foodtrucks_core::paging::{
    calculate_pagination, format_header, format_row, page_prompt, should_stop, total_pages,
};
use std::io::{BufRead, Write};
use std::num::NonZeroUsize;

/// Print the listings table one page at a time
///
/// Writes the header, then each page of rows. Between pages the user is asked
/// whether to continue; an answer starting with `N`/`n`, or end of input,
/// stops early. Returns the number of pages shown.
pub fn present<R: BufRead, W: Write>(
    listings: &[TruckListing],
    page_size: NonZeroUsize,
    input: &mut R,
    output: &mut W,
) -> Result<usize> {
    writeln!(output, "{}", format_header()).map_err(Error::from)?;

    let limit = page_size.get();
    let pages = total_pages(listings.len(), limit);
    let mut shown = 0;

    for page in 1..=pages {
        let (start, end) =
            calculate_pagination(listings.len(), page, limit).map_err(|e| eyre!("{}", e))?;

        for listing in &listings[start..end] {
            let row = format_row(
                listing.vendor_name.as_deref().unwrap_or_default(),
                listing.address.as_deref().unwrap_or_default(),
            );
            writeln!(output, "{row}").map_err(Error::from)?;
        }
        shown = page;

        if page == pages {
            break;
        }

        write!(output, "{}", page_prompt(page, pages)).map_err(Error::from)?;
        output.flush().map_err(Error::from)?;

        let mut answer = Vec::new();
        if input.read_until(b'\n', &mut answer).map_err(Error::from)? == 0 {
            log::debug!("Input closed after page {page} of {pages}");
            break;
        }
        if should_stop(&String::from_utf8_lossy(&answer)) {
            break;
        }
    }

    output.flush().map_err(Error::from)?;
    log::debug!("Showed {shown} of {pages} pages");

    Ok(shown)
}
