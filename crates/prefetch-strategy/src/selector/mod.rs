//! Resource selectors: map a predicted navigation onto concrete URLs.

mod url_catalog;

pub use url_catalog::UrlCatalog;
