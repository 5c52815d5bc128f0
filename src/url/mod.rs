//! URL handling for pagesift
//!
//! This module decides which discovered links belong to the target site and
//! which of those look like article pages: [`SiteScope`] answers the
//! same-host question and rebuilds absolute URLs, [`LinkFilter`] matches
//! paths against the configured article pattern.

mod filter;
mod scope;

pub use filter::{LinkFilter, PathMatch};
pub use scope::SiteScope;
