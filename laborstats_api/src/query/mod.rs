mod common;
pub use self::common::{FilterKey, SortDirection};

mod filters;
pub use self::filters::QueryFilters;

mod endpoint;
pub use self::endpoint::{build_endpoint, API_PATH, DEFAULT_BASE_URL};
