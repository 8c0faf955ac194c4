/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::PicasaError;
use async_trait::async_trait;
use bytes::Bytes;
use num_enum::TryFromPrimitive;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::{NsReader, Reader, Writer};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use strum_macros::{Display, IntoStaticStr};

// Root Picasa Web Albums API
pub const API_ORIGIN: &str = "https://picasaweb.google.com";

// Protocol version sent with every request
pub const GDATA_VERSION: &str = "2";

// Sent with bodies that do not set their own content type
pub const ATOM_CONTENT_TYPE: &str = "application/atom+xml";

const ATOM_NS: &[u8] = b"http://www.w3.org/2005/Atom";

/// Headers attached to a request. Keys are the canonical header names.
pub type Headers = BTreeMap<&'static str, String>;

/// Query parameters the specific API call expects
pub type ApiParams = Vec<(String, String)>;

/// HTTP verbs used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// A single request handed to a [`Transport`].
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: ApiParams,
    pub headers: Headers,
    pub body: Option<Bytes>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Headers::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: ApiParams) -> Self {
        self.query = query;
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns the value of the named header if set
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response returned by a [`Transport`].
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Converts non-success statuses into the matching error
    pub fn error_for_status(self) -> Result<Self, PicasaError> {
        use ApiStatusCodes as S;
        match S::try_from(self.status) {
            Ok(S::NotFound) => Err(PicasaError::NotFound(self.body)),
            Ok(S::PreconditionFailed) => Err(PicasaError::PreconditionFailed(self.body)),
            _ if (200..300).contains(&self.status) => Ok(self),
            _ => Err(PicasaError::ApiResponse(self.status, self.body)),
        }
    }

    /// Local name of the document's root element, if there is one
    pub fn root_name(&self) -> Result<Option<String>, PicasaError> {
        let mut reader = Reader::from_str(&self.body);
        loop {
            match reader.read_event()? {
                Event::Start(e) | Event::Empty(e) => {
                    return Ok(Some(
                        String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                    ));
                }
                Event::Eof => return Ok(None),
                _ => (),
            }
        }
    }

    /// Deserializes the body, requiring the root element to be `root`
    pub fn parse_root<T: DeserializeOwned>(&self, root: &'static str) -> Result<T, PicasaError> {
        match self.root_name()? {
            Some(name) if name == root => {
                Ok(quick_xml::de::from_str::<T>(&strip_atom_ids(&self.body)?)?)
            }
            _ => Err(PicasaError::ResponseMissing(root)),
        }
    }
}

/// Removes every Atom `<id>` element from `xml`.
///
/// The deserializer matches on local names, so the Atom `id` (a URI) and
/// `gphoto:id` would both land on the same field. Only `gphoto:id` is kept.
pub fn strip_atom_ids(xml: &str) -> Result<String, PicasaError> {
    let mut reader = NsReader::from_str(xml);
    let mut writer = Writer::new(Vec::with_capacity(xml.len()));
    let mut depth = 0usize;
    loop {
        match reader.read_resolved_event()? {
            (_, Event::Eof) => break,
            (_, Event::Start(_)) if depth > 0 => depth += 1,
            (_, Event::End(_)) if depth > 0 => depth -= 1,
            _ if depth > 0 => (),
            (ResolveResult::Bound(Namespace(ATOM_NS)), Event::Start(e))
                if e.local_name().as_ref() == b"id" =>
            {
                depth = 1
            }
            (ResolveResult::Bound(Namespace(ATOM_NS)), Event::Empty(e))
                if e.local_name().as_ref() == b"id" => {}
            (_, event) => writer.write_event(event)?,
        }
    }
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Performs the actual HTTP exchange.
///
/// Implementations return whatever status the server sent; mapping non-success
/// statuses to errors is done by [`crate::v2::Client`]. Returning
/// [`PicasaError::NotFound`] or [`PicasaError::PreconditionFailed`] directly is
/// also fine.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, PicasaError>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Clone)]
pub struct HttpTransport {
    origin: String,
    https_client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport that talks to the given origin, i.e. `https://picasaweb.google.com`
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.into(),
            https_client: reqwest::Client::new(),
        }
    }

    /// Creates a transport reusing an existing `reqwest` client
    pub fn with_client(origin: &str, https_client: reqwest::Client) -> Self {
        Self {
            origin: origin.into(),
            https_client,
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(API_ORIGIN)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("origin", &self.origin)
            .finish()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, PicasaError> {
        let mut req_url = url::Url::parse(&self.origin)?.join(&request.path)?;
        if !request.query.is_empty() {
            req_url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        log::debug!("{} {}", request.method, request.path);

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self
            .https_client
            .request(method, req_url)
            .header("GData-Version", GDATA_VERSION);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }
        let has_content_type = request.header("Content-Type").is_some();
        if let Some(body) = request.body {
            if !has_content_type {
                builder = builder.header("Content-Type", ATOM_CONTENT_TYPE);
            }
            builder = builder.body(body);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        if !(200..300).contains(&status) {
            log::warn!("{} {} failed with status {}", request.method, request.path, status);
        }
        Ok(ApiResponse { status, body })
    }
}

/// Status codes the API is documented to return
#[derive(Debug, TryFromPrimitive)]
#[repr(u16)]
pub enum ApiStatusCodes {
    // Good Codes
    Ok = 200,
    Created = 201,
    Accepted = 202,
    NoContent = 204,
    NotModified = 304,

    // Failing Codes
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    Conflict = 409,
    PreconditionFailed = 412,
    InternalServerError = 500,
    ServiceUnavailable = 503,
}
