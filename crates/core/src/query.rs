/// Query parameter the permit API filters the day of week on
pub const DAY_OF_WEEK_PARAM: &str = "dayofweekstr";

/// Build the request URL for one day's listings
///
/// The day name is appended as-is; English day names never need escaping.
/// No other parameters are sent, all filtering beyond the day happens locally.
pub fn build_query_url(endpoint: &str, day: &str) -> String {
    format!("{endpoint}?{DAY_OF_WEEK_PARAM}={day}")
}
