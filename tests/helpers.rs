/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use async_trait::async_trait;
use picasa::v2::{
    ApiRequest, ApiResponse, Client, ClientConfig, Credentials, Method, PicasaError, Transport,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub(crate) const ALBUM_LIST: &str = include_str!("fixtures/album_list.xml");
#[allow(dead_code)]
pub(crate) const ALBUM_FEED: &str = include_str!("fixtures/album_feed.xml");
#[allow(dead_code)]
pub(crate) const ALBUM_ENTRY: &str = include_str!("fixtures/album_entry.xml");
#[allow(dead_code)]
pub(crate) const PHOTO_ENTRY: &str = include_str!("fixtures/photo_entry.xml");

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Records every request and answers with queued responses.
///
/// With a current ETag set it behaves like the server for conditional writes:
/// a PATCH/DELETE whose `If-Match` is neither `*` nor the current ETag gets a 412.
#[derive(Default)]
pub(crate) struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Result<ApiResponse, PicasaError>>>,
    current_etag: Mutex<Option<String>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn with_etag(etag: &str) -> Arc<Self> {
        let mock = Self::default();
        *mock.current_etag.lock().unwrap() = Some(etag.to_string());
        Arc::new(mock)
    }

    pub(crate) fn push_response(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
    }

    pub(crate) fn push_error(&self, err: PicasaError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, PicasaError> {
        let conditional = matches!(request.method, Method::Patch | Method::Delete);
        let if_match = request.header("If-Match").map(String::from);
        self.requests.lock().unwrap().push(request);

        if conditional {
            if let (Some(current), Some(if_match)) =
                (self.current_etag.lock().unwrap().clone(), if_match)
            {
                if if_match != "*" && if_match != current {
                    return Ok(ApiResponse::new(412, "Mismatch: etags = [\"stale\"]"));
                }
            }
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::new(200, "")))
    }
}

#[allow(dead_code)]
pub(crate) fn client_for(mock: &Arc<MockTransport>, user_id: &str) -> Client {
    client_with_creds(mock, Credentials::new(user_id, None).unwrap())
}

#[allow(dead_code)]
pub(crate) fn client_with_creds(mock: &Arc<MockTransport>, creds: Credentials) -> Client {
    Client::with_transport(creds, ClientConfig::default(), mock.clone())
}

#[allow(dead_code)]
pub(crate) fn body_text(request: &ApiRequest) -> String {
    let body = request.body.as_ref().expect("request has no body");
    String::from_utf8_lossy(body).into_owned()
}

/// Text between `<tag>` and `</tag>` in a rendered body
#[allow(dead_code)]
pub(crate) fn element_text<'a>(body: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = body.find(&open)? + open.len();
    let end = body[start..].find(&close)? + start;
    Some(&body[start..end])
}
