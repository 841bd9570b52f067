// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io::Write;

use chrono::{DateTime, Utc};

use crate::episode::Episode;
use crate::error::{RenderError, ValidationError};
use crate::feed::model::{AtomLink, Author, Category, Image, ItunesImage};
use crate::feed::render;
use crate::text::{truncate_chars, truncate_with_ellipsis};
use crate::types::ShowType;

/// RFC 1123 with a numeric zone, e.g. `Sat, 04 Feb 2017 08:21:52 +0000`
const RFC1123Z: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Character cap for channel and episode descriptions/summaries
const SUMMARY_MAX_CHARS: usize = 4000;

/// Character cap for the iTunes subtitle, ellipsis included
const SUBTITLE_MAX_CHARS: usize = 64;

/// A podcast feed: the RSS channel plus its episodes
///
/// Construct with [`Feed::new`], populate through the `add_*` and `set_*`
/// operations, then serialize with [`Feed::write_to`] or [`Feed::to_xml`].
/// Mutators take `&mut self` and rendering takes `&self`, so concurrent
/// renders of a feed that is not being mutated are safe by construction.
#[derive(Debug, Clone)]
pub struct Feed {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Flat comma-joined category list; RSS 2.0 `category` supports one tier
    /// only. Kept in sync with `categories` by [`Feed::add_category`].
    pub category: String,
    pub copyright: Option<String>,
    pub generator: String,
    pub language: String,
    pub last_build_date: String,
    pub managing_editor: Option<String>,
    pub pub_date: String,
    pub ttl: Option<u32>,
    pub image: Option<Image>,
    pub atom_link: Option<AtomLink>,
    pub itunes_author: Option<String>,
    pub subtitle: Option<String>,
    pub summary: Option<String>,
    pub explicit: Option<bool>,
    pub show_type: Option<ShowType>,
    pub owner: Option<Author>,
    pub itunes_image: Option<ItunesImage>,
    pub categories: Vec<Category>,
    pub episodes: Vec<Episode>,
    now_fn: fn() -> DateTime<Utc>,
}

impl Feed {
    /// Create a feed with the required channel fields
    ///
    /// `None` timestamps default to the current UTC time. The description
    /// is capped at 4000 characters.
    pub fn new(
        title: &str,
        link: &str,
        description: &str,
        pub_date: Option<DateTime<Utc>>,
        last_build_date: Option<DateTime<Utc>>,
    ) -> Self {
        let now_fn: fn() -> DateTime<Utc> = Utc::now;
        Self {
            title: title.to_string(),
            link: link.to_string(),
            description: truncate_chars(description, SUMMARY_MAX_CHARS).to_string(),
            category: String::new(),
            copyright: None,
            generator: format!(
                "podfeed v{} (github.com/jakobwesthoff/podfeed)",
                env!("CARGO_PKG_VERSION")
            ),
            language: "en-us".to_string(),
            last_build_date: format_date(last_build_date, now_fn),
            managing_editor: None,
            pub_date: format_date(pub_date, now_fn),
            ttl: None,
            image: None,
            atom_link: None,
            itunes_author: None,
            subtitle: None,
            summary: None,
            explicit: None,
            show_type: None,
            owner: None,
            itunes_image: None,
            categories: Vec::new(),
            episodes: Vec::new(),
            now_fn,
        }
    }

    /// Replace the clock used for "now" defaulting
    ///
    /// Lets tests pin a deterministic time; the constructor's date
    /// defaulting already happened, so call the date setters afterwards if
    /// those need the new clock too.
    pub fn set_clock(&mut self, now_fn: fn() -> DateTime<Utc>) {
        self.now_fn = now_fn;
    }

    /// Set the feed author contact
    ///
    /// Fills both `managingEditor` and `itunes:author` with the formatted
    /// `email (name)` contact. An empty email is a no-op.
    pub fn add_author(&mut self, name: &str, email: &str) {
        if email.is_empty() {
            return;
        }
        let formatted = Author {
            name: name.to_string(),
            email: email.to_string(),
        }
        .formatted();
        self.managing_editor = Some(formatted.clone());
        self.itunes_author = Some(formatted);
    }

    /// Add a fully-qualified self-reference to the feed's own URL
    ///
    /// Declares the Atom namespace on the rendered document. An empty href
    /// is a no-op.
    pub fn add_atom_link(&mut self, href: &str) {
        if href.is_empty() {
            return;
        }
        self.atom_link = Some(AtomLink {
            href: href.to_string(),
            rel: "self".to_string(),
            mime_type: "application/rss+xml".to_string(),
        });
    }

    /// Append a category with optional sub-categories
    ///
    /// Repeated calls accumulate; there is no dedup or removal. The flat
    /// RSS `category` string and the structured iTunes list are kept in
    /// sync. Empty labels are skipped: an empty category is a no-op and
    /// empty sub-labels are dropped individually.
    pub fn add_category(&mut self, category: &str, subcategories: &[&str]) {
        if category.is_empty() {
            return;
        }

        if self.category.is_empty() {
            self.category = category.to_string();
        } else {
            self.category = format!("{},{}", self.category, category);
        }

        let children = subcategories
            .iter()
            .filter(|sub| !sub.is_empty())
            .map(|sub| Category {
                text: sub.to_string(),
                subcategories: Vec::new(),
            })
            .collect();
        self.categories.push(Category {
            text: category.to_string(),
            subcategories: children,
        });
    }

    /// Set the channel artwork
    ///
    /// The RSS image's title and link are copied from the feed; the same
    /// URL also becomes the `itunes:image`. An empty URL is a no-op.
    pub fn add_image(&mut self, url: &str) {
        if url.is_empty() {
            return;
        }
        self.image = Some(Image {
            url: url.to_string(),
            title: self.title.clone(),
            link: self.link.clone(),
            ..Image::default()
        });
        self.itunes_image = Some(ItunesImage {
            href: url.to_string(),
        });
    }

    /// Set the publish date, defaulting to now when `None`
    pub fn add_pub_date(&mut self, datetime: Option<DateTime<Utc>>) {
        self.pub_date = format_date(datetime, self.now_fn);
    }

    /// Set the last-build date, defaulting to now when `None`
    pub fn add_last_build_date(&mut self, datetime: Option<DateTime<Utc>>) {
        self.last_build_date = format_date(datetime, self.now_fn);
    }

    /// Set the iTunes subtitle, truncated to 64 characters with `...`
    ///
    /// Apple wants just a few words here. An empty subtitle is a no-op.
    pub fn add_subtitle(&mut self, subtitle: &str) {
        if subtitle.is_empty() {
            return;
        }
        self.subtitle = Some(truncate_with_ellipsis(subtitle, SUBTITLE_MAX_CHARS));
    }

    /// Set the iTunes summary, truncated to 4000 characters
    ///
    /// Rendered as CDATA, so rich text is allowed. An empty summary is a
    /// no-op.
    pub fn add_summary(&mut self, summary: &str) {
        if summary.is_empty() {
            return;
        }
        self.summary = Some(truncate_chars(summary, SUMMARY_MAX_CHARS).to_string());
    }

    /// Set the `itunes:owner` contact; both name and email are required
    pub fn set_owner(&mut self, name: &str, email: &str) {
        if name.is_empty() || email.is_empty() {
            return;
        }
        self.owner = Some(Author {
            name: name.to_string(),
            email: email.to_string(),
        });
    }

    /// Set the channel-level `itunes:explicit` flag
    pub fn set_explicit(&mut self, explicit: bool) {
        self.explicit = Some(explicit);
    }

    /// Set the `itunes:type` of the show
    pub fn set_show_type(&mut self, show_type: ShowType) {
        self.show_type = Some(show_type);
    }

    /// Validate and register an episode, returning the new episode count
    ///
    /// The episode must carry a title and description, plus either an
    /// enclosure (with URL and a recognized type) or a link. On success the
    /// remaining fields are defaulted in place: pub date and author are
    /// formatted, the GUID falls back to the enclosure URL (or the link),
    /// a blank link is filled from the enclosure URL, a negative enclosure
    /// length clamps to zero, and the iTunes author/image fall back to the
    /// feed-level values. On failure the feed is unchanged.
    pub fn add_episode(&mut self, mut episode: Episode) -> Result<usize, ValidationError> {
        if episode.title.is_empty() || episode.description.is_empty() {
            return Err(ValidationError::MissingTitleAndDescription);
        }
        if let Some(enclosure) = &episode.enclosure {
            if enclosure.url.is_empty() {
                return Err(ValidationError::MissingEnclosureUrl {
                    title: episode.title,
                });
            }
            if enclosure.enclosure_type.is_placeholder() {
                return Err(ValidationError::MissingEnclosureType {
                    title: episode.title,
                });
            }
        } else if episode.link.is_empty() {
            return Err(ValidationError::MissingLink {
                title: episode.title,
            });
        }

        episode.pub_date_formatted = format_date(episode.pub_date, self.now_fn);
        episode.author_formatted = episode
            .author
            .as_ref()
            .map(Author::formatted)
            .unwrap_or_default();

        if let Some(enclosure) = episode.enclosure.as_mut() {
            if episode.guid.is_empty() {
                // The enclosure URL doubles as the permalink GUID.
                episode.guid = enclosure.url.clone();
            }
            if enclosure.length < 0 {
                enclosure.length = 0;
            }
            enclosure.length_formatted = enclosure.length.to_string();
            enclosure.type_formatted = enclosure.enclosure_type.as_mime().to_string();

            // A link set by the caller is an article reference and wins;
            // otherwise the enclosure URL is the canonical link.
            if episode.link.is_empty() {
                episode.link = enclosure.url.clone();
            }
        } else if episode.guid.is_empty() {
            episode.guid = episode.link.clone();
        }

        if episode.itunes_author.is_none() {
            if let Some(author) = &episode.author {
                episode.itunes_author = Some(author.email.clone());
            } else if let Some(feed_author) = &self.itunes_author {
                episode.author = Some(Author {
                    name: String::new(),
                    email: feed_author.clone(),
                });
                episode.itunes_author = Some(feed_author.clone());
            } else if let Some(editor) = &self.managing_editor {
                episode.author = Some(Author {
                    name: String::new(),
                    email: editor.clone(),
                });
                episode.itunes_author = Some(editor.clone());
            }
        }
        if episode.image.is_none() {
            if let Some(image) = &self.image {
                episode.image = Some(ItunesImage {
                    href: image.url.clone(),
                });
            }
        }

        self.episodes.push(episode);
        Ok(self.episodes.len())
    }

    /// Serialize the feed as an RSS 2.0 document into the given sink
    pub fn write_to<W: Write>(&self, sink: W) -> Result<(), RenderError> {
        render::write_feed(self, sink)
    }

    /// Render the feed to an XML string
    pub fn to_xml(&self) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Format a timestamp (or now, when absent) in the RFC 1123 numeric-zone
/// form RSS requires
fn format_date(datetime: Option<DateTime<Utc>>, now_fn: fn() -> DateTime<Utc>) -> String {
    datetime.unwrap_or_else(now_fn).format(RFC1123Z).to_string()
}
