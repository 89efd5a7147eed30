use crate::prelude::{eprintln, println, *};
use chrono::{DateTime, Local, TimeZone};
use foodtrucks_core::listing::{decode_listings, TruckListing};
use foodtrucks_core::paging::DEFAULT_PAGE_SIZE;
use foodtrucks_core::query::build_query_url;
use foodtrucks_core::schedule::{open_now, TimeContext, TimeOfDay};
use foodtrucks_core::sorting::sort_by_vendor;
use std::num::NonZeroUsize;

use crate::fetch::fetch_body;
use crate::pager;

/// San Francisco mobile food facility permit schedule
pub const DEFAULT_ENDPOINT: &str = "http://data.sfgov.org/resource/bbb8-hzi6.json";

const FAILURE_PREFIX: &str = "Error encountered while generating list of available food trucks";

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, clap::Args, Clone)]
pub struct FinderOptions {
    /// Permit API endpoint, queried with ?dayofweekstr=<day>
    #[arg(long, env = "FOODTRUCKS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Number of trucks per page
    #[arg(short, long, env = "FOODTRUCKS_PAGE_SIZE", default_value_t = default_page_size())]
    pub page_size: NonZeroUsize,

    /// Day of week to search instead of today (e.g. Monday)
    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(DAY_NAMES))]
    pub day: Option<String>,

    /// Time of day to search instead of now, as HH:MM (24-hour)
    #[arg(long, value_parser = parse_clock_time)]
    pub time: Option<TimeOfDay>,

    /// Output the open trucks as JSON instead of the paginated table
    #[arg(long)]
    pub json: bool,
}

fn default_page_size() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN)
}

fn parse_clock_time(value: &str) -> std::result::Result<TimeOfDay, String> {
    let time: TimeOfDay = value.parse()?;
    if time.hour > 23 || time.minute > 59 {
        return Err(f!("'{value}' is not a valid time of day"));
    }
    Ok(time)
}

/// Resolve the day and time to search for, applying any overrides
pub fn resolve_time_context<Tz: TimeZone>(
    options: &FinderOptions,
    now: &DateTime<Tz>,
) -> TimeContext {
    let mut context = TimeContext::from_datetime(now);

    if let Some(day) = &options.day {
        context.day = day.clone();
    }
    if let Some(time) = options.time {
        context.hour = time.hour;
        context.minute = time.minute;
    }

    context
}

fn search_summary(now: &TimeContext, url: &str) -> String {
    f!("Searching {} at {}: {}", now.day, now.time_of_day(), url)
}

/// Fetch the day's listings and return the open ones, sorted by vendor name
pub async fn find_open_trucks(
    client: &reqwest::Client,
    endpoint: &str,
    now: &TimeContext,
    global: &crate::Global,
) -> Result<Vec<TruckListing>> {
    let url = build_query_url(endpoint, &now.day);

    if global.verbose {
        eprintln!("{}", search_summary(now, &url));
    }

    let body = fetch_body(client, &url).await?;
    let listings = decode_listings(&body).map_err(Error::from)?;
    let decoded = listings.len();

    let mut open = open_now(listings, now);
    sort_by_vendor(&mut open);

    log::debug!("{} of {decoded} listings are open", open.len());
    if global.verbose {
        eprintln!("{} of {decoded} listings are open", open.len());
    }

    Ok(open)
}

/// Module entry point
pub async fn run(options: FinderOptions, global: crate::Global) -> Result<()> {
    let now = resolve_time_context(&options, &Local::now());
    let client = reqwest::Client::new();

    let open = find_open_trucks(&client, &options.endpoint, &now, &global).await?;

    if options.json {
        return output_json(&open);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    pager::present(
        &open,
        options.page_size,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )?;

    Ok(())
}

/// Convert the open listings to a JSON string
fn format_listings_json(listings: &[TruckListing]) -> Result<String> {
    serde_json::to_string_pretty(listings).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn output_json(listings: &[TruckListing]) -> Result<()> {
    let json = format_listings_json(listings)?;
    println!("{}", json);
    Ok(())
}

/// The single line printed when the run fails
pub fn failure_message(err: &color_eyre::Report) -> String {
    f!("{FAILURE_PREFIX}: {err}")
}
