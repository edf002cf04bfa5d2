// src/config/consts.rs

// Net config
pub const DOCS_BASE_URL: &str = "https://learn.microsoft.com/en-us/windows/client-management/mdm/";
pub const INDEX_SLUG: &str = "policy-configuration-service-provider";
pub const USER_AGENT: &str = concat!("csp_lookup/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Local cache
pub const CACHE_FILE_NAME: &str = "policiesFound.json";

// Index page filters
pub const SLUG_PREFIX: &str = "policy-csp";
pub const SLUG_MARKER: &str = "policy-";

// Support table
pub const NO_POLICIES: &str = "No Policies";
pub const EDITION_ADVANCE: &str = "Education";
pub const FINISHED: &str = "Finished!";
