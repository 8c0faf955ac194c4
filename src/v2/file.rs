/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::PicasaError;
use bytes::Bytes;
use std::path::{Path, PathBuf};

/// Source of photo data that can fill in an upload's title, binary and content type.
///
/// [`PhotoFile::none`] stands in when no file was given and yields nothing.
#[derive(Debug, Clone, Default)]
pub struct PhotoFile {
    path: Option<PathBuf>,
}

impl PhotoFile {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    pub fn none() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// File name including extension, i.e. `me.png`
    pub fn name(&self) -> Option<String> {
        self.path
            .as_ref()?
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
    }

    /// Extension without the dot
    pub fn extension(&self) -> Option<String> {
        self.path
            .as_ref()?
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
    }

    /// Contents of the file. Only reads when called.
    pub fn binary(&self) -> Result<Option<Bytes>, PicasaError> {
        match &self.path {
            Some(path) => Ok(Some(Bytes::from(std::fs::read(path)?))),
            None => Ok(None),
        }
    }

    /// Content type guessed from the extension
    pub fn content_type(&self) -> Option<&'static str> {
        content_type_for_extension(&self.extension()?)
    }
}

/// Media types the API accepts, keyed by file extension
pub fn content_type_for_extension(extension: &str) -> Option<&'static str> {
    let content_type = match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "png" => "image/png",
        "bmp" => "image/bmp",
        "3gp" => "video/3gpp",
        "avi" => "video/avi",
        "mov" => "video/quicktime",
        "mp4" => "video/mp4",
        "mpeg" | "mpg" => "video/mpeg",
        "asf" => "video/x-ms-asf",
        "wmv" => "video/x-ms-wmv",
        _ => return None,
    };
    Some(content_type)
}
