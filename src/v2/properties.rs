/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::ApiParams;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Visibility of an album
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Access {
    Unknown,
    Public,
    Private,
    Protected,
}

/// Which albums to return when authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum AccessFilter {
    All,
    Private,
    Public,
    Visible,
}

/// Query parameters accepted by the feed requests.
///
/// See [partial responses](https://developers.google.com/gdata/docs/2.0/reference#PartialResponseRequest)
/// for the `fields` syntax.
#[derive(Debug, Default, Clone)]
pub struct QueryOptions {
    pub access: Option<AccessFilter>,
    pub fields: Option<String>,
    pub max_results: Option<u32>,
    /// 1-based index of the first result
    pub start_index: Option<u32>,
    pub tag: Option<String>,
    pub kind: Option<String>,
    pub thumbsize: Option<String>,
    pub imgmax: Option<String>,

    /// Any other parameter, sent as given apart from `_` becoming `-` in the key
    pub extra: Vec<(String, String)>,
}

impl QueryOptions {
    /// Converts into the query pairs sent on the wire
    pub fn to_params(&self) -> ApiParams {
        let mut params: ApiParams = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                params.push((dasherize(key), value));
            }
        };
        push("access", self.access.map(|v| v.to_string()));
        push("fields", self.fields.clone());
        push("max_results", self.max_results.map(|v| v.to_string()));
        push("start_index", self.start_index.map(|v| v.to_string()));
        push("tag", self.tag.clone());
        push("kind", self.kind.clone());
        push("thumbsize", self.thumbsize.clone());
        push("imgmax", self.imgmax.clone());
        for (key, value) in &self.extra {
            push(key, Some(value.clone()));
        }
        params
    }
}

fn dasherize(key: &str) -> String {
    key.replace('_', "-")
}
