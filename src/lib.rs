//! Build and serialize podcast RSS feeds.
//!
//! Construct a [`Feed`], populate it through the `add_*` operations (which
//! validate and default fields along the way), then render it as an RSS 2.0
//! document with iTunes tags via [`Feed::write_to`] or [`Feed::to_xml`].

pub mod duration;
pub mod episode;
pub mod error;
pub mod feed;
pub mod text;
pub mod types;

// Re-export main types for convenience
pub use duration::format_duration;
pub use episode::{Enclosure, Episode};
pub use error::{ParseError, RenderError, ValidationError};
pub use feed::{AtomLink, Author, Category, Feed, Image, ItunesImage};
pub use types::{EnclosureType, ShowType};
