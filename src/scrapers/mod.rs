//! Scraping building blocks for the latest-news listing.
//!
//! Collection is split in two halves that meet in [`crate::collector`]:
//!
//! 1. **Retrieval** ([`source`]): turn a URL into markup. [`source::PageSource`]
//!    is the trait the collector depends on; [`source::HttpPageSource`] is the
//!    `reqwest` implementation.
//! 2. **Extraction** ([`feed`]): turn markup into article records and a
//!    continuation link, through a typed query interface over the parsed
//!    document.
//!
//! Neither half knows about pagination or limits.

pub mod feed;
pub mod source;
