/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate picasa;

use anyhow::Result;
use dotenvy::dotenv;
use picasa::v2::{AccessFilter, Client, Credentials, QueryOptions};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // PICASA_USER_ID is required, PICASA_AUTHORIZATION_HEADER only for private albums
    let client = Client::new(Credentials::from_env()?);

    let mut options = QueryOptions {
        access: Some(AccessFilter::All),
        max_results: Some(25),
        start_index: Some(1),
        ..Default::default()
    };

    // Page through the albums using start-index
    loop {
        let page = client.album().list(&options).await?;
        for album in &page.albums {
            println!(
                "{} photos: {} access: {}",
                album,
                album.num_photos.unwrap_or_default(),
                album.access.map_or("-".to_string(), |a| a.to_string()),
            );
        }

        if page.next_link().is_none() || page.albums.is_empty() {
            break;
        }
        let next = options.start_index.unwrap_or(1) + page.albums.len() as u32;
        options.start_index = Some(next);
    }
    Ok(())
}
