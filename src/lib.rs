/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Picasa
//!
//! This library was created for working with the Picasa Web Albums Data API (GData version 2).
//!
//! ## Features
//!
//! - Albums
//!     - List albums of a user
//!     - Show an album and the photos it contains
//!     - Create, update and delete albums
//! - Photos
//!     - Upload from a file or from memory
//!     - Update metadata, move between albums
//!     - Fetch and delete
//! - Optimistic concurrency through ETags (`If-Match`)
//! - Lower level interface ([`v2::Transport`]) for handling the raw communication
//!
//! *Requests are authorized with an opaque authorization header (i.e. `Bearer <token>`).
//! Getting the token is left up to the consumer of this library*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! picasa = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use picasa::v2::{AlbumProps, Client, Credentials, QueryOptions, PicasaError};
//!
//! async fn make_album(user_id: &str, token: &str) -> Result<(), PicasaError> {
//!     let client = Client::new(Credentials::new(user_id, Some(token))?);
//!
//!     // List the albums of the user
//!     let albums = client.album().list(&QueryOptions::default()).await?;
//!     for album in &albums.albums {
//!         println!("{album}");
//!     }
//!
//!     // Create a new album, title is required
//!     let album = client
//!         .album()
//!         .create(AlbumProps {
//!             title: Some("Vacation".to_string()),
//!             keywords: Some("vacation, poland".to_string()),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     // Delete it again, but only if nobody changed it meanwhile
//!     if let Some(id) = album.id.as_deref() {
//!         client.album().destroy(id, album.etag.as_deref()).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod v2;
