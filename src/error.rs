use thiserror::Error;

/// Errors that reject an episode during [`Feed::add_episode`](crate::Feed::add_episode)
///
/// The feed is left untouched when any of these is returned; an episode is
/// never partially added.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title and Description are required")]
    MissingTitleAndDescription,

    #[error("{title}: Enclosure.URL is required")]
    MissingEnclosureUrl { title: String },

    #[error("{title}: Enclosure.Type is required")]
    MissingEnclosureType { title: String },

    #[error("{title}: Link is required when not using Enclosure")]
    MissingLink { title: String },
}

/// Errors that can occur when parsing string tokens into feed enums
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognized enclosure MIME type '{0}'")]
    UnknownEnclosureType(String),

    #[error("unrecognized show type '{0}'")]
    UnknownShowType(String),
}

/// Errors that can occur while rendering a feed to an output sink
///
/// The feed itself remains valid and re-renderable after a failure.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write XML output: {0}")]
    Write(#[from] std::io::Error),

    #[error("Rendered XML was not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
