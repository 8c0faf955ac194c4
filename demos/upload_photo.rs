/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate picasa;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use picasa::v2::{Client, CreatePhotoProps, Credentials, PhotoProps};

// Usage: upload_photo <album id> <path to image>
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let album_id = args.next().context("album id missing")?;
    let file_path = args.next().context("file path missing")?;

    let client = Client::new(Credentials::from_env()?);

    // Title, binary and content type all come from the file
    let photo = client
        .photo()
        .create(
            &album_id,
            CreatePhotoProps {
                file_path: Some(file_path.into()),
                ..Default::default()
            },
        )
        .await?;
    println!("Uploaded: {}", photo);

    let photo_id = photo.id.clone().context("uploaded photo has no id")?;
    let photo = client
        .photo()
        .update(
            &album_id,
            &photo_id,
            PhotoProps {
                summary: Some("Uploaded with picasa-rs".to_string()),
                etag: photo.etag.clone(),
                ..Default::default()
            },
        )
        .await?;
    println!("Updated: {} {:?}", photo, photo.url());
    Ok(())
}
