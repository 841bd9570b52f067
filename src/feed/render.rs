// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::episode::Episode;
use crate::error::RenderError;
use crate::feed::Feed;
use crate::feed::model::Category;

const RSS_VERSION: &str = "2.0";
const ITUNES_NS: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";
const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Serialize a feed as a complete RSS 2.0 + iTunes document
///
/// Emits the XML declaration, the `rss` envelope (the Atom namespace is
/// declared only when the feed carries an atom link), the channel fields in
/// RSS tag order and one `item` per episode, indented two spaces per level.
pub(crate) fn write_feed<W: Write>(feed: &Feed, sink: W) -> Result<(), RenderError> {
    let mut writer = Writer::new_with_indent(sink, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", RSS_VERSION));
    if feed.atom_link.is_some() {
        rss.push_attribute(("xmlns:atom", ATOM_NS));
    }
    rss.push_attribute(("xmlns:itunes", ITUNES_NS));
    writer.write_event(Event::Start(rss))?;

    write_channel(&mut writer, feed)?;

    writer.write_event(Event::End(BytesEnd::new("rss")))?;
    Ok(())
}

fn write_channel<W: Write>(writer: &mut Writer<W>, feed: &Feed) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    text_element(writer, "title", &feed.title)?;
    text_element(writer, "link", &feed.link)?;
    text_element(writer, "description", &feed.description)?;
    if !feed.category.is_empty() {
        text_element(writer, "category", &feed.category)?;
    }
    opt_text_element(writer, "copyright", feed.copyright.as_deref())?;
    if !feed.generator.is_empty() {
        text_element(writer, "generator", &feed.generator)?;
    }
    if !feed.language.is_empty() {
        text_element(writer, "language", &feed.language)?;
    }
    if !feed.last_build_date.is_empty() {
        text_element(writer, "lastBuildDate", &feed.last_build_date)?;
    }
    opt_text_element(writer, "managingEditor", feed.managing_editor.as_deref())?;
    if !feed.pub_date.is_empty() {
        text_element(writer, "pubDate", &feed.pub_date)?;
    }
    if let Some(ttl) = feed.ttl {
        text_element(writer, "ttl", &ttl.to_string())?;
    }

    if let Some(image) = &feed.image {
        writer.write_event(Event::Start(BytesStart::new("image")))?;
        text_element(writer, "url", &image.url)?;
        text_element(writer, "title", &image.title)?;
        text_element(writer, "link", &image.link)?;
        opt_text_element(writer, "description", image.description.as_deref())?;
        if let Some(width) = image.width {
            text_element(writer, "width", &width.to_string())?;
        }
        if let Some(height) = image.height {
            text_element(writer, "height", &height.to_string())?;
        }
        writer.write_event(Event::End(BytesEnd::new("image")))?;
    }

    if let Some(atom_link) = &feed.atom_link {
        let mut tag = BytesStart::new("atom:link");
        tag.push_attribute(("href", atom_link.href.as_str()));
        tag.push_attribute(("rel", atom_link.rel.as_str()));
        tag.push_attribute(("type", atom_link.mime_type.as_str()));
        closed_element(writer, tag)?;
    }

    opt_text_element(writer, "itunes:author", feed.itunes_author.as_deref())?;
    opt_text_element(writer, "itunes:subtitle", feed.subtitle.as_deref())?;
    if let Some(summary) = &feed.summary {
        cdata_element(writer, "itunes:summary", summary)?;
    }
    if let Some(image) = &feed.itunes_image {
        let mut tag = BytesStart::new("itunes:image");
        tag.push_attribute(("href", image.href.as_str()));
        closed_element(writer, tag)?;
    }
    if let Some(explicit) = feed.explicit {
        text_element(writer, "itunes:explicit", bool_str(explicit))?;
    }
    if let Some(show_type) = feed.show_type {
        text_element(writer, "itunes:type", show_type.as_str())?;
    }
    if let Some(owner) = &feed.owner {
        writer.write_event(Event::Start(BytesStart::new("itunes:owner")))?;
        text_element(writer, "itunes:name", &owner.name)?;
        text_element(writer, "itunes:email", &owner.email)?;
        writer.write_event(Event::End(BytesEnd::new("itunes:owner")))?;
    }
    for category in &feed.categories {
        write_category(writer, category)?;
    }

    for episode in &feed.episodes {
        write_item(writer, episode)?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))
}

fn write_category<W: Write>(writer: &mut Writer<W>, category: &Category) -> io::Result<()> {
    let mut tag = BytesStart::new("itunes:category");
    tag.push_attribute(("text", category.text.as_str()));

    if category.subcategories.is_empty() {
        return closed_element(writer, tag);
    }
    writer.write_event(Event::Start(tag))?;
    for sub in &category.subcategories {
        let mut tag = BytesStart::new("itunes:category");
        tag.push_attribute(("text", sub.text.as_str()));
        closed_element(writer, tag)?;
    }
    writer.write_event(Event::End(BytesEnd::new("itunes:category")))
}

fn write_item<W: Write>(writer: &mut Writer<W>, episode: &Episode) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("item")))?;

    text_element(writer, "guid", &episode.guid)?;
    text_element(writer, "title", &episode.title)?;
    text_element(writer, "link", &episode.link)?;
    text_element(writer, "description", &episode.description)?;
    if !episode.author_formatted.is_empty() {
        text_element(writer, "author", &episode.author_formatted)?;
    }
    if !episode.pub_date_formatted.is_empty() {
        text_element(writer, "pubDate", &episode.pub_date_formatted)?;
    }
    if let Some(enclosure) = &episode.enclosure {
        let mut tag = BytesStart::new("enclosure");
        tag.push_attribute(("url", enclosure.url.as_str()));
        tag.push_attribute(("length", enclosure.length_formatted.as_str()));
        tag.push_attribute(("type", enclosure.type_formatted.as_str()));
        closed_element(writer, tag)?;
    }
    opt_text_element(writer, "itunes:author", episode.itunes_author.as_deref())?;
    opt_text_element(writer, "itunes:subtitle", episode.subtitle.as_deref())?;
    if let Some(summary) = &episode.summary {
        cdata_element(writer, "itunes:summary", summary)?;
    }
    if let Some(image) = &episode.image {
        let mut tag = BytesStart::new("itunes:image");
        tag.push_attribute(("href", image.href.as_str()));
        closed_element(writer, tag)?;
    }
    opt_text_element(writer, "itunes:duration", episode.duration.as_deref())?;
    if let Some(explicit) = episode.explicit {
        text_element(writer, "itunes:explicit", bool_str(explicit))?;
    }

    writer.write_event(Event::End(BytesEnd::new("item")))
}

/// Write `<name>text</name>` on a single line
fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))
}

fn opt_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: Option<&str>,
) -> io::Result<()> {
    match text {
        Some(text) => text_element(writer, name, text),
        None => Ok(()),
    }
}

/// Write `<name><![CDATA[text]]></name>`, leaving embedded markup intact
fn cdata_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::CData(BytesCData::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))
}

/// Write an attribute-only element as a `<tag ...></tag>` pair
///
/// The empty text event keeps the closing tag on the same line; the end
/// tag would otherwise land on its own indented line.
fn closed_element<W: Write>(writer: &mut Writer<W>, tag: BytesStart<'_>) -> io::Result<()> {
    let end = tag.to_end().into_owned();
    writer.write_event(Event::Start(tag))?;
    writer.write_event(Event::Text(BytesText::new("")))?;
    writer.write_event(Event::End(end))
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
