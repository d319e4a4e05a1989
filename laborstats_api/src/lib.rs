//! Read-only client for the ILAB Sweat & Toil API
//! (<https://developer.dol.gov/others/sweat-and-toil/>).
//!
//! ```no_run
//! # async fn run() -> Result<(), laborstats_api::Error> {
//! use laborstats_api::Client;
//!
//! let mut client = Client::new("my-secret-key");
//! client.add_filter("limit", "10")?;
//! let countries = client.query_countries().await?;
//! # Ok(())
//! # }
//! ```
mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, SECRET_KEY_HEADER};
pub use self::errors::Error;
pub use self::query::{
    build_endpoint, FilterKey, QueryFilters, SortDirection, API_PATH, DEFAULT_BASE_URL,
};
pub use self::types::Resource;
