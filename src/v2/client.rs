/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v2::errors::PicasaError;
use crate::v2::{API_ORIGIN, AlbumApi, ApiRequest, ApiResponse, Headers, HttpTransport, PhotoApi, Transport};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

// ETag value matching any version of a resource
pub const ANY_ETAG: &str = "*";

/// User identity and optional authorization token used for every request.
#[derive(Clone)]
pub struct Credentials {
    user_id: String,
    authorization_header: Option<String>,
}

impl Credentials {
    /// Creates credentials for the given user (google username/email).
    ///
    /// The authorization header is sent verbatim as `Authorization`, i.e.
    /// `"Bearer <token>"`. Anonymous access to public albums works without one.
    pub fn new(user_id: &str, authorization_header: Option<&str>) -> Result<Self, PicasaError> {
        if user_id.trim().is_empty() {
            return Err(PicasaError::MissingCredential("user_id".to_string()));
        }
        Ok(Self {
            user_id: user_id.into(),
            authorization_header: authorization_header.map(Into::into),
        })
    }

    /// Reads `PICASA_USER_ID` and the optional `PICASA_AUTHORIZATION_HEADER`
    pub fn from_env() -> Result<Self, PicasaError> {
        let user_id = std::env::var("PICASA_USER_ID")
            .map_err(|_| PicasaError::MissingCredential("PICASA_USER_ID".to_string()))?;
        let authorization_header = std::env::var("PICASA_AUTHORIZATION_HEADER").ok();
        Self::new(&user_id, authorization_header.as_deref())
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn authorization_header(&self) -> Option<&str> {
        self.authorization_header.as_deref()
    }

    /// Headers carrying the authorization token, empty when there is none
    pub fn auth_header(&self) -> Headers {
        let mut header = Headers::new();
        if let Some(token) = &self.authorization_header {
            header.insert("Authorization", token.clone());
        }
        header
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field(
                "authorization_header",
                &self.authorization_header.as_ref().map(|_| "xxx"),
            )
            .finish()
    }
}

/// Settings applied when building a [`Client`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host requests are sent to
    pub origin: String,

    /// Use the legacy `back_compat` feed paths instead of `api`
    pub back_compat: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: API_ORIGIN.to_string(),
            back_compat: false,
        }
    }
}

/// Entry point for talking to the Picasa Web Albums API.
///
/// Cloning is cheap and clones share the same settings, so changing the
/// back-compat switch on one clone affects the next path built by any of them.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    creds: Credentials,
    back_compat: AtomicBool,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client talking to the public API with default settings
    pub fn new(creds: Credentials) -> Self {
        Self::with_config(creds, ClientConfig::default())
    }

    pub fn with_config(creds: Credentials, config: ClientConfig) -> Self {
        let transport = Arc::new(HttpTransport::new(&config.origin));
        Self::with_transport(creds, config, transport)
    }

    /// Creates a client sending requests through the provided transport.
    /// `config.origin` is not used since the transport decides where requests go.
    pub fn with_transport(
        creds: Credentials,
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                creds,
                back_compat: AtomicBool::new(config.back_compat),
                transport,
            }),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.inner.creds
    }

    pub fn user_id(&self) -> &str {
        self.inner.creds.user_id()
    }

    pub fn auth_header(&self) -> Headers {
        self.inner.creds.auth_header()
    }

    pub fn back_compat(&self) -> bool {
        self.inner.back_compat.load(Ordering::SeqCst)
    }

    /// Switches path scheme for every path built after this call
    pub fn set_back_compat(&self, val: bool) {
        self.inner.back_compat.store(val, Ordering::SeqCst);
    }

    /// Feed path for the user, i.e. `/data/feed/api/user/{user_id}`
    pub fn user_api_path(&self) -> String {
        let scheme = if self.back_compat() { "back_compat" } else { "api" };
        format!("/data/feed/{}/user/{}", scheme, self.user_id())
    }

    pub fn album_path(&self, album_id: &str) -> String {
        format!("{}/albumid/{}", self.user_api_path(), album_id)
    }

    pub fn photo_path(&self, album_id: &str, photo_id: &str) -> String {
        format!("{}/albumid/{}/photoid/{}", self.user_api_path(), album_id, photo_id)
    }

    /// Entry path used when updating or deleting an album.
    ///
    /// Always uses the `api` scheme; the back-compat switch is ignored here.
    pub fn album_entry_path(&self, album_id: &str) -> String {
        format!("/data/entry/api/user/{}/albumid/{}", self.user_id(), album_id)
    }

    /// Auth headers plus `If-Match` for conditional writes
    pub fn if_match_header(&self, etag: Option<&str>) -> Headers {
        let mut headers = self.auth_header();
        headers.insert("If-Match", etag.unwrap_or(ANY_ETAG).to_string());
        headers
    }

    /// Album operations for this client's user
    pub fn album(&self) -> AlbumApi {
        AlbumApi::new(self.clone())
    }

    /// Photo operations for this client's user
    pub fn photo(&self) -> PhotoApi {
        PhotoApi::new(self.clone())
    }

    /// Sends the request and maps failing statuses to errors
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, PicasaError> {
        self.inner.transport.send(request).await?.error_for_status()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("creds", &self.inner.creds)
            .field("back_compat", &self.back_compat())
            .finish()
    }
}
