use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Fallback MIME string for enclosure types outside the supported set
const MIME_DEFAULT: &str = "application/octet-stream";

/// MIME category of a downloadable enclosure
///
/// The supported set follows the Apple Podcasts file-type list:
/// https://help.apple.com/itc/podcasts_connect/#/itcb54353390
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnclosureType {
    M4a,
    M4v,
    Mp4,
    Mp3,
    Mov,
    Pdf,
    Epub,
    /// Placeholder for an enclosure whose type was never set.
    ///
    /// Formats to `application/octet-stream` but is rejected when the
    /// episode is added to a feed, and is never produced by parsing.
    #[default]
    Unknown,
}

impl EnclosureType {
    /// Returns the canonical MIME string for this enclosure type
    ///
    /// Total: `Unknown` maps to the generic `application/octet-stream`
    /// placeholder rather than failing.
    pub fn as_mime(&self) -> &'static str {
        match self {
            EnclosureType::M4a => "audio/x-m4a",
            EnclosureType::M4v => "video/x-m4v",
            EnclosureType::Mp4 => "video/mp4",
            EnclosureType::Mp3 => "audio/mpeg",
            EnclosureType::Mov => "video/quicktime",
            EnclosureType::Pdf => "application/pdf",
            EnclosureType::Epub => "document/x-epub",
            EnclosureType::Unknown => MIME_DEFAULT,
        }
    }

    /// True if this type formats to the generic placeholder instead of a
    /// canonical MIME string
    pub(crate) fn is_placeholder(&self) -> bool {
        self.as_mime() == MIME_DEFAULT
    }
}

impl fmt::Display for EnclosureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mime())
    }
}

impl FromStr for EnclosureType {
    type Err = ParseError;

    /// Parses a canonical MIME string into an enclosure type
    ///
    /// Strict: anything outside the supported set fails, including the
    /// `application/octet-stream` placeholder that `as_mime` emits for
    /// `Unknown`. Formatting is lenient, parsing is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audio/x-m4a" => Ok(EnclosureType::M4a),
            "video/x-m4v" => Ok(EnclosureType::M4v),
            "video/mp4" => Ok(EnclosureType::Mp4),
            "audio/mpeg" => Ok(EnclosureType::Mp3),
            "video/quicktime" => Ok(EnclosureType::Mov),
            "application/pdf" => Ok(EnclosureType::Pdf),
            "document/x-epub" => Ok(EnclosureType::Epub),
            _ => Err(ParseError::UnknownEnclosureType(s.to_string())),
        }
    }
}

/// Presentation order of a show's episodes
///
/// Episodic (the default) presents newest episodes first; Serial presents
/// episodes in sequential order and requires episode numbers. Rendered as
/// the `itunes:type` channel tag when set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShowType {
    #[default]
    Episodic,
    Serial,
}

impl ShowType {
    /// Returns the tag text for this show type
    pub fn as_str(&self) -> &'static str {
        match self {
            ShowType::Episodic => "Episodic",
            ShowType::Serial => "Serial",
        }
    }
}

impl fmt::Display for ShowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShowType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Episodic" => Ok(ShowType::Episodic),
            "Serial" => Ok(ShowType::Serial),
            _ => Err(ParseError::UnknownShowType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_TYPES: [EnclosureType; 7] = [
        EnclosureType::M4a,
        EnclosureType::M4v,
        EnclosureType::Mp4,
        EnclosureType::Mp3,
        EnclosureType::Mov,
        EnclosureType::Pdf,
        EnclosureType::Epub,
    ];

    #[test]
    fn enclosure_type_mime_round_trips() {
        for t in KNOWN_TYPES {
            assert_eq!(t.as_mime().parse::<EnclosureType>(), Ok(t));
        }
    }

    #[test]
    fn enclosure_type_formats_known_mime_strings() {
        assert_eq!(EnclosureType::Mp3.as_mime(), "audio/mpeg");
        assert_eq!(EnclosureType::M4a.as_mime(), "audio/x-m4a");
        assert_eq!(EnclosureType::Mov.as_mime(), "video/quicktime");
        assert_eq!(EnclosureType::Epub.as_mime(), "document/x-epub");
    }

    #[test]
    fn unknown_formats_to_placeholder_but_never_parses() {
        assert_eq!(EnclosureType::Unknown.as_mime(), "application/octet-stream");
        assert_eq!(
            "application/octet-stream".parse::<EnclosureType>(),
            Err(ParseError::UnknownEnclosureType(
                "application/octet-stream".to_string()
            ))
        );
    }

    #[test]
    fn unrecognized_mime_strings_fail_to_parse() {
        for s in ["audio/ogg", "AUDIO/MPEG", "", "mp3"] {
            assert!(s.parse::<EnclosureType>().is_err(), "parsed {s:?}");
        }
    }

    #[test]
    fn default_enclosure_type_is_the_placeholder() {
        assert!(EnclosureType::default().is_placeholder());
        assert!(!EnclosureType::Mp3.is_placeholder());
    }

    #[test]
    fn show_type_round_trips() {
        for t in [ShowType::Episodic, ShowType::Serial] {
            assert_eq!(t.as_str().parse::<ShowType>(), Ok(t));
        }
    }

    #[test]
    fn show_type_rejects_unknown_tokens() {
        assert_eq!(
            "episodic".parse::<ShowType>(),
            Err(ParseError::UnknownShowType("episodic".to_string()))
        );
    }
}
