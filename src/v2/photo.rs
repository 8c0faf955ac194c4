/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::atom::{REL_EDIT, REL_EDIT_MEDIA, find_link};
use crate::v2::errors::PicasaError;
use crate::v2::parsers::{
    from_access, from_empty_text_to_none, from_millis, from_rfc3339, from_text_node,
    from_text_parse,
};
use crate::v2::{
    Access, ApiRequest, Client, DEFAULT_BOUNDARY, Link, Media, Method, PhotoFile, Template,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::PathBuf;

/// Holds information returned for a photo (or video) entry
#[derive(Deserialize, Debug, Clone)]
pub struct Photo {
    #[serde(default, rename = "@etag")]
    pub etag: Option<String>,

    #[serde(default, rename = "id", deserialize_with = "from_empty_text_to_none")]
    pub id: Option<String>,

    #[serde(default, rename = "albumid", deserialize_with = "from_empty_text_to_none")]
    pub album_id: Option<String>,

    #[serde(default, rename = "title", deserialize_with = "from_text_node")]
    pub title: String,

    #[serde(default, rename = "summary", deserialize_with = "from_text_node")]
    pub summary: String,

    #[serde(default, rename = "access", deserialize_with = "from_access")]
    pub access: Option<Access>,

    #[serde(default, rename = "width", deserialize_with = "from_text_parse")]
    pub width: Option<u32>,

    #[serde(default, rename = "height", deserialize_with = "from_text_parse")]
    pub height: Option<u32>,

    #[serde(default, rename = "size", deserialize_with = "from_text_parse")]
    pub size: Option<u64>,

    #[serde(default, rename = "checksum", deserialize_with = "from_empty_text_to_none")]
    pub checksum: Option<String>,

    #[serde(default, rename = "timestamp", deserialize_with = "from_millis")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(default, rename = "commentCount", deserialize_with = "from_text_parse")]
    pub comment_count: Option<u32>,

    #[serde(default, rename = "published", deserialize_with = "from_rfc3339")]
    pub published: Option<DateTime<Utc>>,

    #[serde(default, rename = "updated", deserialize_with = "from_rfc3339")]
    pub updated: Option<DateTime<Utc>>,

    #[serde(default, rename = "content")]
    pub content: Option<PhotoContent>,

    #[serde(default, rename = "link")]
    pub links: Vec<Link>,

    #[serde(default, rename = "group")]
    pub media: Option<Media>,
}

impl Photo {
    pub fn link(&self, rel: &str) -> Option<&Link> {
        find_link(&self.links, rel)
    }

    /// Url to send metadata updates to
    pub fn edit_link(&self) -> Option<&Link> {
        self.link(REL_EDIT)
    }

    /// Url to replace the binary at
    pub fn edit_media_link(&self) -> Option<&Link> {
        self.link(REL_EDIT_MEDIA)
    }

    /// Url of the full size media
    pub fn url(&self) -> Option<&str> {
        self.content.as_ref().map(|c| c.src.as_str())
    }
}

impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl std::fmt::Display for Photo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "title: {}, id: {}",
            self.title,
            self.id.as_deref().unwrap_or("-")
        )
    }
}

/// Atom `<content>` of a photo entry
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PhotoContent {
    #[serde(default, rename = "@type")]
    pub content_type: Option<String>,

    #[serde(rename = "@src")]
    pub src: String,
}

/// Properties used when uploading a photo.
///
/// Whatever of `title`, `binary` and `content_type` is not given is taken from
/// `file_path` (file name, file contents, type guessed from extension).
#[derive(Debug, Default, Clone)]
pub struct CreatePhotoProps {
    /// i.e. "/home/john/Images/me.png"
    pub file_path: Option<PathBuf>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub binary: Option<Bytes>,
    /// One of "image/jpeg", "image/png", "image/bmp", "image/gif" or a supported video type
    pub content_type: Option<String>,
    /// Multipart boundary, defaults to [`DEFAULT_BOUNDARY`]
    pub boundary: Option<String>,
}

impl CreatePhotoProps {
    /// Fills in missing values from the file and checks nothing required is left out
    pub fn resolve(self) -> Result<PhotoUpload, PicasaError> {
        let file = self
            .file_path
            .as_ref()
            .map_or_else(PhotoFile::none, PhotoFile::open);
        let boundary = self
            .boundary
            .unwrap_or_else(|| DEFAULT_BOUNDARY.to_string());

        let title = match self.title {
            Some(title) => title,
            None => file.name().ok_or_else(|| missing("title"))?,
        };
        let binary = match self.binary {
            Some(binary) => binary,
            None => file.binary()?.ok_or_else(|| missing("binary"))?,
        };
        let content_type = match self.content_type {
            Some(content_type) => content_type,
            None => file
                .content_type()
                .map(String::from)
                .ok_or_else(|| missing("content_type"))?,
        };

        Ok(PhotoUpload {
            title,
            summary: self.summary,
            binary,
            content_type,
            boundary,
        })
    }
}

fn missing(field: &str) -> PicasaError {
    PicasaError::InvalidArgument(format!("{field} must be specified"))
}

/// Upload with every required value present
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub title: String,
    pub summary: Option<String>,
    pub binary: Bytes,
    pub content_type: String,
    pub boundary: String,
}

/// Properties used to update photo metadata
#[derive(Debug, Default, Clone)]
pub struct PhotoProps {
    pub title: Option<String>,
    pub summary: Option<String>,
    /// Album the photo will be moved to
    pub album_id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub keywords: Option<String>,
    /// Only update when the photo's ETag matches
    pub etag: Option<String>,
}

/// Photo operations for the client's user
#[derive(Debug, Clone)]
pub struct PhotoApi {
    client: Client,
}

impl PhotoApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Uploads a photo into the album
    pub async fn create(&self, album_id: &str, params: CreatePhotoProps) -> Result<Photo, PicasaError> {
        let upload = params.resolve()?;
        log::trace!("uploading {} ({} bytes)", upload.title, upload.binary.len());

        let mut headers = self.client.auth_header();
        headers.insert(
            "Content-Type",
            format!("multipart/related; boundary=\"{}\"", upload.boundary),
        );
        let body = Template::NewPhoto(&upload).render();
        let request = ApiRequest::new(Method::Post, self.client.album_path(album_id))
            .with_headers(headers)
            .with_body(body);
        self.client.send(request).await?.parse_root::<Photo>("entry")
    }

    /// Updates photo metadata, returning the updated photo
    pub async fn update(
        &self,
        album_id: &str,
        photo_id: &str,
        params: PhotoProps,
    ) -> Result<Photo, PicasaError> {
        let mut headers = self.client.if_match_header(params.etag.as_deref());
        headers.insert("Content-Type", "application/xml".to_string());
        let body = Template::UpdatePhoto(&params).render();
        let request = ApiRequest::new(Method::Patch, self.client.photo_path(album_id, photo_id))
            .with_headers(headers)
            .with_body(body);
        self.client.send(request).await?.parse_root::<Photo>("entry")
    }

    /// Destroys the photo, only when `etag` matches if given
    pub async fn destroy(
        &self,
        album_id: &str,
        photo_id: &str,
        etag: Option<&str>,
    ) -> Result<bool, PicasaError> {
        let request = ApiRequest::new(Method::Delete, self.client.photo_path(album_id, photo_id))
            .with_headers(self.client.if_match_header(etag));
        self.client.send(request).await?;
        Ok(true)
    }

    /// Same as [`PhotoApi::destroy`]
    pub async fn delete(
        &self,
        album_id: &str,
        photo_id: &str,
        etag: Option<&str>,
    ) -> Result<bool, PicasaError> {
        self.destroy(album_id, photo_id, etag).await
    }

    /// Gets the photo.
    ///
    /// Fails with [`PicasaError::NotFound`] when the album or photo is gone and
    /// [`PicasaError::PreconditionFailed`] when `etag` is given and does not match.
    pub async fn fetch(
        &self,
        album_id: &str,
        photo_id: &str,
        etag: Option<&str>,
    ) -> Result<Photo, PicasaError> {
        let request = ApiRequest::new(Method::Get, self.client.photo_path(album_id, photo_id))
            .with_headers(self.client.if_match_header(etag));
        self.client.send(request).await?.parse_root::<Photo>("entry")
    }
}
