/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::{AlbumProps, PhotoProps, PhotoUpload};
use bytes::{BufMut, Bytes, BytesMut};
use chrono::{DateTime, Utc};
use quick_xml::escape::escape;
use strum_macros::IntoStaticStr;

/// Boundary used for photo uploads when none is given
pub const DEFAULT_BOUNDARY: &str = "===============picasa-rs==";

const ENTRY_OPEN: &str = "<entry xmlns='http://www.w3.org/2005/Atom' \
     xmlns:media='http://search.yahoo.com/mrss/' \
     xmlns:gphoto='http://schemas.google.com/photos/2007'>\n";
const ENTRY_CLOSE: &str = "</entry>\n";
const ALBUM_CATEGORY: &str = "  <category scheme='http://schemas.google.com/g/2005#kind' \
     term='http://schemas.google.com/photos/2007#album'/>\n";
const PHOTO_CATEGORY: &str = "  <category scheme='http://schemas.google.com/g/2005#kind' \
     term='http://schemas.google.com/photos/2007#photo'/>\n";

/// The API wants timestamps in milliseconds. Sub-second precision is dropped.
pub fn timestamp_millis(ts: &DateTime<Utc>) -> i64 {
    ts.timestamp() * 1000
}

/// Request bodies sent to the API
#[derive(Debug, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Template<'a> {
    NewAlbum(&'a AlbumProps),
    NewPhoto(&'a PhotoUpload),
    UpdatePhoto(&'a PhotoProps),
}

impl Template<'_> {
    /// Name of the template, i.e. `new_album`
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    pub fn render(&self) -> Bytes {
        log::trace!("rendering {} template", self.kind());
        match self {
            Template::NewAlbum(props) => Bytes::from(render_new_album(props)),
            Template::NewPhoto(upload) => render_new_photo(upload),
            Template::UpdatePhoto(props) => Bytes::from(render_update_photo(props)),
        }
    }
}

fn push_element(xml: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        xml.push_str(&format!("  <{name}>{}</{name}>\n", escape(value)));
    }
}

fn push_text_element(xml: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        xml.push_str(&format!("  <{name} type='text'>{}</{name}>\n", escape(value)));
    }
}

fn push_keywords(xml: &mut String, keywords: Option<&str>) {
    if let Some(keywords) = keywords {
        xml.push_str(&format!(
            "  <media:group>\n    <media:keywords>{}</media:keywords>\n  </media:group>\n",
            escape(keywords)
        ));
    }
}

fn render_new_album(props: &AlbumProps) -> String {
    let mut xml = String::from(ENTRY_OPEN);
    push_text_element(&mut xml, "title", props.title.as_deref());
    push_text_element(&mut xml, "summary", props.summary.as_deref());
    push_element(&mut xml, "gphoto:location", props.location.as_deref());
    push_element(&mut xml, "gphoto:access", props.access.map(<&str>::from));
    push_element(
        &mut xml,
        "gphoto:timestamp",
        props
            .timestamp
            .as_ref()
            .map(|ts| timestamp_millis(ts).to_string())
            .as_deref(),
    );
    push_keywords(&mut xml, props.keywords.as_deref());
    xml.push_str(ALBUM_CATEGORY);
    xml.push_str(ENTRY_CLOSE);
    xml
}

fn render_update_photo(props: &PhotoProps) -> String {
    let mut xml = String::from(ENTRY_OPEN);
    push_text_element(&mut xml, "title", props.title.as_deref());
    push_text_element(&mut xml, "summary", props.summary.as_deref());
    push_element(&mut xml, "gphoto:albumid", props.album_id.as_deref());
    push_element(
        &mut xml,
        "gphoto:timestamp",
        props
            .timestamp
            .as_ref()
            .map(|ts| timestamp_millis(ts).to_string())
            .as_deref(),
    );
    push_keywords(&mut xml, props.keywords.as_deref());
    xml.push_str(PHOTO_CATEGORY);
    xml.push_str(ENTRY_CLOSE);
    xml
}

// multipart/related body: Atom metadata part followed by the media part
fn render_new_photo(upload: &PhotoUpload) -> Bytes {
    let mut entry = String::from(ENTRY_OPEN);
    push_text_element(&mut entry, "title", Some(upload.title.as_str()));
    push_text_element(&mut entry, "summary", upload.summary.as_deref());
    entry.push_str(PHOTO_CATEGORY);
    entry.push_str(ENTRY_CLOSE);

    let boundary = upload.boundary.as_str();
    let mut body = BytesMut::with_capacity(entry.len() + upload.binary.len() + 256);
    body.put_slice(b"Media multipart posting\r\n");
    body.put_slice(format!("--{boundary}\r\n").as_bytes());
    body.put_slice(b"Content-Type: application/atom+xml\r\n\r\n");
    body.put_slice(entry.as_bytes());
    body.put_slice(format!("\r\n--{boundary}\r\n").as_bytes());
    body.put_slice(format!("Content-Type: {}\r\n\r\n", upload.content_type).as_bytes());
    body.put_slice(&upload.binary);
    body.put_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body.freeze()
}
