// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::duration::format_duration;
use crate::feed::{Author, ItunesImage};
use crate::text::truncate_chars;
use crate::types::EnclosureType;

/// A downloadable asset attached to an episode
///
/// `length_formatted` and `type_formatted` are serialization twins filled
/// in during [`Feed::add_episode`](crate::Feed::add_episode); don't set
/// them yourself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enclosure {
    pub url: String,
    pub length: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub length_formatted: String,
    pub enclosure_type: EnclosureType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub type_formatted: String,
}

/// A single entry in a podcast feed
///
/// Article minimal requirements are Title, Description and Link. Audio,
/// video and download minimal requirements are Title, Description and an
/// Enclosure with URL and Type set. Everything else is optional and gets
/// defaulted or formatted when the episode is added to a
/// [`Feed`](crate::Feed).
///
/// `guid`, `pub_date_formatted` and `author_formatted` are overwritten
/// during registration unless already set; leave them alone under normal
/// use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Episode {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub guid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author_formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pub_date_formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enclosure: Option<Enclosure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itunes_author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ItunesImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit: Option<bool>,
}

impl Episode {
    /// Create an episode with the two always-required fields
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            ..Self::default()
        }
    }

    /// Attach the downloadable asset for this episode
    pub fn add_enclosure(&mut self, url: &str, enclosure_type: EnclosureType, length_bytes: i64) {
        self.enclosure = Some(Enclosure {
            url: url.to_string(),
            length: length_bytes,
            enclosure_type,
            ..Enclosure::default()
        });
    }

    /// Set the iTunes episode artwork
    ///
    /// RSS 2.0 has no item-level image; this only emits `itunes:image`.
    /// An empty URL is a no-op.
    pub fn add_image(&mut self, url: &str) {
        if url.is_empty() {
            return;
        }
        self.image = Some(ItunesImage {
            href: url.to_string(),
        });
    }

    /// Set the publish date
    ///
    /// Episodes without one get "now" at registration time.
    pub fn add_pub_date(&mut self, datetime: DateTime<Utc>) {
        self.pub_date = Some(datetime);
    }

    /// Set the iTunes duration from a length in seconds
    ///
    /// Non-positive input is a no-op: an existing duration stays as it is.
    pub fn add_duration(&mut self, duration_seconds: i64) {
        if duration_seconds <= 0 {
            return;
        }
        self.duration = Some(format_duration(duration_seconds as u64));
    }

    /// Set the iTunes summary, truncated to 4000 characters
    ///
    /// Rendered as CDATA, so rich text such as `<a href="...">` links is
    /// allowed. An empty summary is a no-op.
    pub fn add_summary(&mut self, summary: &str) {
        if summary.is_empty() {
            return;
        }
        self.summary = Some(truncate_chars(summary, 4000).to_string());
    }
}
