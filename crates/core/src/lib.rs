//! Core library for foodtrucks
//!
//! This crate implements the **Functional Core** of the foodtrucks application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The foodtrucks project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`foodtrucks_core`** (this crate): Pure transformation functions with zero I/O
//! - **`foodtrucks`**: HTTP, clock, terminal interaction and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no reads of the system clock
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`listing`]: The `TruckListing` record and the JSON decoder for the permit API
//! - [`schedule`]: Time context resolution and the open-now filter
//! - [`query`]: Request URL construction
//! - [`sorting`]: Vendor name ordering
//! - [`paging`]: Page arithmetic and fixed-width row formatting
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use foodtrucks_core::listing::decode_listings;
//! use foodtrucks_core::schedule::{open_now, TimeContext};
//! use foodtrucks_core::sorting::sort_by_vendor;
//!
//! let listings = decode_listings(body)?;
//! let now = TimeContext::new("Monday", 12, 0);
//!
//! let mut open = open_now(&listings, &now);
//! sort_by_vendor(&mut open);
//! ```

pub mod listing;
pub mod paging;
pub mod query;
pub mod schedule;
pub mod sorting;
