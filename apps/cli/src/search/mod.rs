// Profile Location — builds search-engine queries from extracted JD
// attributes and turns result pages into a deduplicated, ordered list of
// candidate profile URLs.

pub mod locator;
pub mod profile_url;
pub mod queries;

pub use locator::ProfileLocator;
pub use profile_url::ProfileUrl;
