/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::atom::{REL_EDIT, REL_NEXT, find_link};
use crate::v2::errors::PicasaError;
use crate::v2::parsers::{
    from_access, from_empty_text_to_none, from_millis, from_rfc3339, from_text_node,
    from_text_parse,
};
use crate::v2::{
    Access, ApiRequest, Client, Link, Media, Method, Photo, QueryOptions, Template,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Holds information returned for a single album.
///
/// Built either from an album entry or from an album feed, in which case
/// [`Album::photos`] holds the photos the feed listed.
#[derive(Deserialize, Debug, Clone)]
pub struct Album {
    #[serde(default, rename = "@etag")]
    pub etag: Option<String>,

    #[serde(default, rename = "id", deserialize_with = "from_empty_text_to_none")]
    pub id: Option<String>,

    #[serde(default, rename = "name", deserialize_with = "from_empty_text_to_none")]
    pub name: Option<String>,

    #[serde(default, rename = "title", deserialize_with = "from_text_node")]
    pub title: String,

    #[serde(default, rename = "summary", deserialize_with = "from_text_node")]
    pub summary: String,

    #[serde(default, rename = "location", deserialize_with = "from_empty_text_to_none")]
    pub location: Option<String>,

    #[serde(default, rename = "access", deserialize_with = "from_access")]
    pub access: Option<Access>,

    #[serde(default, rename = "timestamp", deserialize_with = "from_millis")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(default, rename = "numphotos", deserialize_with = "from_text_parse")]
    pub num_photos: Option<u32>,

    #[serde(default, rename = "numphotosremaining", deserialize_with = "from_text_parse")]
    pub num_photos_remaining: Option<u32>,

    #[serde(default, rename = "bytesUsed", deserialize_with = "from_text_parse")]
    pub bytes_used: Option<u64>,

    #[serde(default, rename = "user", deserialize_with = "from_empty_text_to_none")]
    pub user: Option<String>,

    #[serde(default, rename = "nickname", deserialize_with = "from_empty_text_to_none")]
    pub nickname: Option<String>,

    #[serde(default, rename = "published", deserialize_with = "from_rfc3339")]
    pub published: Option<DateTime<Utc>>,

    #[serde(default, rename = "updated", deserialize_with = "from_rfc3339")]
    pub updated: Option<DateTime<Utc>>,

    #[serde(default, rename = "link")]
    pub links: Vec<Link>,

    #[serde(default, rename = "group")]
    pub media: Option<Media>,

    #[serde(default, rename = "entry")]
    pub photos: Vec<Photo>,
}

impl Album {
    pub fn link(&self, rel: &str) -> Option<&Link> {
        find_link(&self.links, rel)
    }

    /// Url to send updates of this album to
    pub fn edit_link(&self) -> Option<&Link> {
        self.link(REL_EDIT)
    }
}

impl PartialEq for Album {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl std::fmt::Display for Album {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "title: {}, id: {}",
            self.title,
            self.id.as_deref().unwrap_or("-")
        )
    }
}

/// Albums feed for a user
#[derive(Deserialize, Debug, Clone)]
pub struct AlbumList {
    #[serde(default, rename = "@etag")]
    pub etag: Option<String>,

    #[serde(default, rename = "title", deserialize_with = "from_text_node")]
    pub title: String,

    #[serde(default, rename = "user", deserialize_with = "from_empty_text_to_none")]
    pub user: Option<String>,

    #[serde(default, rename = "nickname", deserialize_with = "from_empty_text_to_none")]
    pub nickname: Option<String>,

    #[serde(default, rename = "thumbnail", deserialize_with = "from_empty_text_to_none")]
    pub thumbnail: Option<String>,

    #[serde(default, rename = "totalResults", deserialize_with = "from_text_parse")]
    pub total_results: Option<u32>,

    #[serde(default, rename = "startIndex", deserialize_with = "from_text_parse")]
    pub start_index: Option<u32>,

    #[serde(default, rename = "itemsPerPage", deserialize_with = "from_text_parse")]
    pub items_per_page: Option<u32>,

    #[serde(default, rename = "link")]
    pub links: Vec<Link>,

    #[serde(default, rename = "entry")]
    pub albums: Vec<Album>,
}

impl AlbumList {
    pub fn link(&self, rel: &str) -> Option<&Link> {
        find_link(&self.links, rel)
    }

    /// Link to the following page when the feed was limited with `max_results`
    pub fn next_link(&self) -> Option<&Link> {
        self.link(REL_NEXT)
    }
}

/// Properties used to create or update an album.
///
/// `title` is required when creating. `etag` is only used by updates.
#[derive(Debug, Default, Clone)]
pub struct AlbumProps {
    pub title: Option<String>,
    pub summary: Option<String>,
    /// Location of album photos, i.e. "Poland"
    pub location: Option<String>,
    pub access: Option<Access>,
    pub timestamp: Option<DateTime<Utc>>,
    /// Comma separated, i.e. "vacation, poland"
    pub keywords: Option<String>,
    /// Only update when the album's ETag matches
    pub etag: Option<String>,
}

/// Album operations for the client's user
#[derive(Debug, Clone)]
pub struct AlbumApi {
    client: Client,
}

impl AlbumApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Returns the albums of the user
    pub async fn list(&self, options: &QueryOptions) -> Result<AlbumList, PicasaError> {
        let request = ApiRequest::new(Method::Get, self.client.user_api_path())
            .with_query(options.to_params())
            .with_headers(self.client.auth_header());
        self.client.send(request).await?.parse_root::<AlbumList>("feed")
    }

    /// Returns the album with its photos.
    ///
    /// Fails with [`PicasaError::NotFound`] when the album does not exist.
    pub async fn show(&self, album_id: &str, options: &QueryOptions) -> Result<Album, PicasaError> {
        let request = ApiRequest::new(Method::Get, self.client.album_path(album_id))
            .with_query(options.to_params())
            .with_headers(self.client.auth_header());
        self.client.send(request).await?.parse_root::<Album>("feed")
    }

    /// Creates an album.
    ///
    /// `timestamp` defaults to now and `access` to [`Access::Private`].
    pub async fn create(&self, mut params: AlbumProps) -> Result<Album, PicasaError> {
        if params.title.as_deref().is_none_or(str::is_empty) {
            return Err(PicasaError::InvalidArgument(
                "You must specify title".to_string(),
            ));
        }
        check_access(&params)?;
        params.timestamp.get_or_insert_with(Utc::now);
        params.access.get_or_insert(Access::Private);
        log::trace!("creating album {:?}", params.title);

        let body = Template::NewAlbum(&params).render();
        let request = ApiRequest::new(Method::Post, self.client.user_api_path())
            .with_headers(self.client.auth_header())
            .with_body(body);
        self.client.send(request).await?.parse_root::<Album>("entry")
    }

    /// Updates the properties that are set in `params`.
    ///
    /// With `etag` set the update only happens if the album was not changed since,
    /// otherwise [`PicasaError::PreconditionFailed`] is returned.
    pub async fn update(&self, album_id: &str, params: AlbumProps) -> Result<Album, PicasaError> {
        check_access(&params)?;
        let headers = self.client.if_match_header(params.etag.as_deref());
        let body = Template::NewAlbum(&params).render();
        let request = ApiRequest::new(Method::Patch, self.client.album_entry_path(album_id))
            .with_headers(headers)
            .with_body(body);
        self.client.send(request).await?.parse_root::<Album>("entry")
    }

    /// Destroys the album, only when `etag` matches if given
    pub async fn destroy(&self, album_id: &str, etag: Option<&str>) -> Result<bool, PicasaError> {
        let request = ApiRequest::new(Method::Delete, self.client.album_entry_path(album_id))
            .with_headers(self.client.if_match_header(etag));
        self.client.send(request).await?;
        Ok(true)
    }

    /// Same as [`AlbumApi::destroy`]
    pub async fn delete(&self, album_id: &str, etag: Option<&str>) -> Result<bool, PicasaError> {
        self.destroy(album_id, etag).await
    }
}

// `Access::Unknown` only comes out of responses and has no wire value
fn check_access(params: &AlbumProps) -> Result<(), PicasaError> {
    match params.access {
        Some(Access::Unknown) => Err(PicasaError::InvalidArgument(
            "access level cannot be unknown".to_string(),
        )),
        _ => Ok(()),
    }
}
