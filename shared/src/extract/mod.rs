//! Response-text extraction
//!
//! The upstream model returns free-form Markdown with no guaranteed
//! grammar. These extractors pull structured data out of it on a
//! best-effort basis: every extractor is a pure function of the input
//! text, never panics, and encodes failure as `None` rather than a
//! sentinel value that could be mistaken for real data.

mod crops;
mod price;

pub use crops::*;
pub use price::*;
