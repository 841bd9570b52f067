mod channel;
mod model;
mod render;

pub use channel::Feed;
pub use model::{AtomLink, Author, Category, Image, ItunesImage};
