/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::parsers::{from_empty_text_to_none, from_text_node};
use serde::Deserialize;

// Link relations used by the API
pub const REL_EDIT: &str = "edit";
pub const REL_EDIT_MEDIA: &str = "edit-media";
pub const REL_FEED: &str = "http://schemas.google.com/g/2005#feed";
pub const REL_POST: &str = "http://schemas.google.com/g/2005#post";
pub const REL_ALTERNATE: &str = "alternate";
pub const REL_SELF: &str = "self";
pub const REL_NEXT: &str = "next";

/// Atom `<link>` element
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Link {
    #[serde(rename = "@rel")]
    pub rel: String,

    #[serde(default, rename = "@type")]
    pub link_type: Option<String>,

    #[serde(rename = "@href")]
    pub href: String,
}

/// Finds the first link with the given relation
pub fn find_link<'a>(links: &'a [Link], rel: &str) -> Option<&'a Link> {
    links.iter().find(|l| l.rel == rel)
}

/// `<media:group>` block attached to albums and photos
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Media {
    #[serde(default, rename = "title", deserialize_with = "from_text_node")]
    pub title: String,

    #[serde(default, rename = "description", deserialize_with = "from_text_node")]
    pub description: String,

    #[serde(default, rename = "keywords", deserialize_with = "from_text_node")]
    pub keywords: String,

    #[serde(default, rename = "credit", deserialize_with = "from_empty_text_to_none")]
    pub credit: Option<String>,

    #[serde(default, rename = "content")]
    pub contents: Vec<MediaContent>,

    #[serde(default, rename = "thumbnail")]
    pub thumbnails: Vec<MediaThumbnail>,
}

impl Media {
    /// Keywords split on commas with surrounding whitespace removed
    pub fn keyword_list(&self) -> Vec<&str> {
        self.keywords
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect()
    }
}

/// `<media:content>`, the full size media
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MediaContent {
    #[serde(rename = "@url")]
    pub url: String,

    #[serde(default, rename = "@type")]
    pub content_type: Option<String>,

    #[serde(default, rename = "@medium")]
    pub medium: Option<String>,

    #[serde(default, rename = "@width")]
    pub width: Option<u32>,

    #[serde(default, rename = "@height")]
    pub height: Option<u32>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MediaThumbnail {
    #[serde(rename = "@url")]
    pub url: String,

    #[serde(default, rename = "@width")]
    pub width: Option<u32>,

    #[serde(default, rename = "@height")]
    pub height: Option<u32>,
}
