use std::cmp::Ordering;

use crate::listing::TruckListing;

/// Case-insensitive ordering of two listings by vendor name
///
/// Characters are compared after lowercasing, so "Apple" and "apple" are
/// equal. A missing name sorts as the empty string.
pub fn compare_vendor_names(a: &TruckListing, b: &TruckListing) -> Ordering {
    let a = a.vendor_name.as_deref().unwrap_or_default();
    let b = b.vendor_name.as_deref().unwrap_or_default();

    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Stable in-place sort by vendor name; equal names keep their order
pub fn sort_by_vendor(listings: &mut [TruckListing]) {
    listings.sort_by(compare_vendor_names);
}
