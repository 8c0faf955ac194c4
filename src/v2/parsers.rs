/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::Access;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt::Display;
use std::str::FromStr;

// Element whose text is wanted while its attributes (i.e. `type='text'`) are not
#[derive(Deserialize, Default)]
struct TextNode {
    #[serde(rename = "$text", default)]
    value: String,
}

fn text_of<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let node: TextNode = Deserialize::deserialize(deserializer)?;
    let value = node.value.trim();
    if value.is_empty() {
        Ok(None)
    } else {
        Ok(Some(value.to_string()))
    }
}

// Parses the text of an element, empty text is ""
pub fn from_text_node<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(text_of(deserializer)?.unwrap_or_default())
}

// Parses the text of an element that may be empty and sets to None
pub fn from_empty_text_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    text_of(deserializer)
}

// Parses numeric element text
pub fn from_text_parse<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match text_of(deserializer)? {
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

// Parses milliseconds since the epoch
pub fn from_millis<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match from_text_parse::<D, i64>(deserializer)? {
        Some(ms) => DateTime::from_timestamp_millis(ms)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {ms}"))),
        None => Ok(None),
    }
}

// Parses RFC 3339 dates such as `published` and `updated`
pub fn from_rfc3339<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match text_of(deserializer)? {
        Some(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

// Parses access level
pub fn from_access<'de, D>(deserializer: D) -> Result<Option<Access>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(text_of(deserializer)?.map(|s| Access::from_str(&s).unwrap_or(Access::Unknown)))
}
