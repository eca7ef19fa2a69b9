//! Helpers derived from the site configuration

pub mod ignore;
pub mod url;

pub use ignore::IgnoreMatcher;
pub use url::*;
