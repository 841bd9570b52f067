use serde::{Deserialize, Serialize};

/// A named author with contact email
///
/// Doubles as the `itunes:owner` pair, for which Apple requires both name
/// and email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub email: String,
}

impl Author {
    /// Format as the RSS contact convention: `email (name)`, or the bare
    /// email when no name is set
    pub fn formatted(&self) -> String {
        if self.name.is_empty() {
            self.email.clone()
        } else {
            format!("{} ({})", self.email, self.name)
        }
    }
}

/// Channel artwork for the RSS `image` element
///
/// Apple expects square artwork between 1400x1400 and 3000x3000 pixels in
/// JPEG or PNG. Title and link are filled from the feed's own when added
/// through [`Feed::add_image`](crate::Feed::add_image).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub title: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Artwork reference for the `itunes:image` tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItunesImage {
    pub href: String,
}

/// A two-tier iTunes category
///
/// Children are sub-categories; nesting stops there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcategories: Vec<Category>,
}

/// Self-referencing `atom:link` for the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomLink {
    pub href: String,
    pub rel: String,
    pub mime_type: String,
}
