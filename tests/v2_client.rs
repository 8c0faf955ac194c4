/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::{self, MockTransport};
    use chrono::{TimeZone, Utc};
    use picasa::v2::{
        Access, AccessFilter, Album, AlbumProps, ApiResponse, Client, ClientConfig, Credentials,
        Photo, PicasaError, QueryOptions, Template, content_type_for_extension, strip_atom_ids,
    };

    #[test]
    fn user_api_path_default() {
        let mock = MockTransport::new();
        let client = helpers::client_for(&mock, "foo.bar");
        assert_eq!(client.user_api_path(), "/data/feed/api/user/foo.bar");
    }

    #[test]
    fn user_api_path_back_compat_is_read_at_call_time() {
        let mock = MockTransport::new();
        let client = helpers::client_for(&mock, "foo.bar");
        let albums = client.album();

        client.set_back_compat(true);
        assert!(albums.client().back_compat());
        assert_eq!(
            albums.client().user_api_path(),
            "/data/feed/back_compat/user/foo.bar"
        );

        client.set_back_compat(false);
        assert_eq!(
            albums.client().user_api_path(),
            "/data/feed/api/user/foo.bar"
        );
    }

    #[test]
    fn back_compat_from_config() {
        let mock = MockTransport::new();
        let client = Client::with_transport(
            Credentials::new("foo.bar", None).unwrap(),
            ClientConfig {
                back_compat: true,
                ..Default::default()
            },
            mock.clone(),
        );
        assert_eq!(
            client.album_path("1"),
            "/data/feed/back_compat/user/foo.bar/albumid/1"
        );
    }

    #[test]
    fn sub_resource_paths() {
        let mock = MockTransport::new();
        let client = helpers::client_for(&mock, "a@b.com");
        assert_eq!(client.album_path("42"), "/data/feed/api/user/a@b.com/albumid/42");
        assert_eq!(
            client.photo_path("42", "7"),
            "/data/feed/api/user/a@b.com/albumid/42/photoid/7"
        );
    }

    #[test]
    fn album_entry_path_ignores_back_compat() {
        let mock = MockTransport::new();
        let client = helpers::client_for(&mock, "a@b.com");
        let expected = "/data/entry/api/user/a@b.com/albumid/42";
        assert_eq!(client.album_entry_path("42"), expected);
        client.set_back_compat(true);
        assert_eq!(client.album_entry_path("42"), expected);
    }

    #[test]
    fn missing_user_id() {
        let err = Credentials::new("", Some("Bearer abc")).unwrap_err();
        assert!(matches!(err, PicasaError::MissingCredential(_)));
        let err = Credentials::new("   ", None).unwrap_err();
        assert!(matches!(err, PicasaError::MissingCredential(_)));
    }

    #[test]
    fn auth_header() {
        let anonymous = Credentials::new("foo.bar", None).unwrap();
        assert!(anonymous.auth_header().is_empty());

        let creds = Credentials::new("foo.bar", Some("Bearer abc")).unwrap();
        let header = creds.auth_header();
        assert_eq!(header.len(), 1);
        assert_eq!(header.get("Authorization").map(String::as_str), Some("Bearer abc"));
    }

    #[test]
    fn credentials_debug_hides_token() {
        let creds = Credentials::new("foo.bar", Some("Bearer secret-token")).unwrap();
        let printed = format!("{:?}", creds);
        assert!(printed.contains("foo.bar"));
        assert!(!printed.contains("secret-token"));
    }

    #[test]
    fn if_match_header_defaults_to_any() {
        let mock = MockTransport::new();
        let client = helpers::client_with_creds(
            &mock,
            Credentials::new("foo.bar", Some("Bearer abc")).unwrap(),
        );
        let headers = client.if_match_header(None);
        assert_eq!(headers.get("If-Match").map(String::as_str), Some("*"));
        assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer abc"));

        let headers = client.if_match_header(Some("\"abc\""));
        assert_eq!(headers.get("If-Match").map(String::as_str), Some("\"abc\""));
    }

    #[test]
    fn query_options_are_dasherized() {
        assert!(QueryOptions::default().to_params().is_empty());

        let options = QueryOptions {
            access: Some(AccessFilter::Visible),
            max_results: Some(10),
            start_index: Some(11),
            fields: Some("entry(title)".to_string()),
            extra: vec![("hide_nav".to_string(), "true".to_string())],
            ..Default::default()
        };
        let params = options.to_params();
        let pairs: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("access", "visible"),
                ("fields", "entry(title)"),
                ("max-results", "10"),
                ("start-index", "11"),
                ("hide-nav", "true"),
            ]
        );
    }

    #[test]
    fn status_mapping() {
        assert!(ApiResponse::new(200, "").error_for_status().is_ok());
        assert!(ApiResponse::new(201, "").error_for_status().is_ok());
        assert!(matches!(
            ApiResponse::new(404, "No album found.").error_for_status(),
            Err(PicasaError::NotFound(msg)) if msg == "No album found."
        ));
        assert!(matches!(
            ApiResponse::new(412, "Mismatch").error_for_status(),
            Err(PicasaError::PreconditionFailed(_))
        ));
        assert!(matches!(
            ApiResponse::new(500, "oops").error_for_status(),
            Err(PicasaError::ApiResponse(500, _))
        ));
        assert!(matches!(
            ApiResponse::new(418, "teapot").error_for_status(),
            Err(PicasaError::ApiResponse(418, _))
        ));
    }

    #[test]
    fn root_element_must_match() {
        let resp = ApiResponse::new(200, helpers::ALBUM_ENTRY);
        assert_eq!(resp.root_name().unwrap().as_deref(), Some("entry"));
        assert!(matches!(
            resp.parse_root::<picasa::v2::AlbumList>("feed"),
            Err(PicasaError::ResponseMissing("feed"))
        ));

        let empty = ApiResponse::new(200, "");
        assert_eq!(empty.root_name().unwrap(), None);
        assert!(matches!(
            empty.parse_root::<picasa::v2::Album>("entry"),
            Err(PicasaError::ResponseMissing("entry"))
        ));
    }

    #[test]
    fn atom_id_does_not_clash_with_gphoto_id() {
        let xml = "<entry xmlns='http://www.w3.org/2005/Atom' \
                   xmlns:gphoto='http://schemas.google.com/photos/2007'>\
                   <id>https://picasaweb.google.com/data/entry/api/user/a/albumid/3</id>\
                   <gphoto:id>3</gphoto:id>\
                   <title>t</title>\
                   <id/>\
                   </entry>";

        let stripped = strip_atom_ids(xml).unwrap();
        assert!(!stripped.contains("https://"));
        assert!(stripped.contains("<gphoto:id>3</gphoto:id>"));

        let album: Album = ApiResponse::new(200, xml).parse_root("entry").unwrap();
        assert_eq!(album.id.as_deref(), Some("3"));
        assert_eq!(album.title, "t");

        let photo: Photo = ApiResponse::new(200, helpers::PHOTO_ENTRY)
            .parse_root("entry")
            .unwrap();
        assert_eq!(photo.id.as_deref(), Some("5598956213410429858"));
    }

    #[test]
    fn unbound_id_is_kept() {
        let xml = "<entry><id>7</id></entry>";
        assert_eq!(strip_atom_ids(xml).unwrap(), xml);
    }

    #[test]
    fn album_template_lines() {
        let props = AlbumProps {
            title: Some("Fish & Chips".to_string()),
            access: Some(Access::Protected),
            timestamp: Some(Utc.with_ymd_and_hms(2011, 4, 22, 0, 0, 0).unwrap()),
            keywords: Some("uk, food".to_string()),
            ..Default::default()
        };
        let template = Template::NewAlbum(&props);
        assert_eq!(template.kind(), "new_album");

        let body = String::from_utf8(template.render().to_vec()).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(
            lines[1..6],
            [
                "  <title type='text'>Fish &amp; Chips</title>",
                "  <gphoto:access>protected</gphoto:access>",
                "  <gphoto:timestamp>1303430400000</gphoto:timestamp>",
                "  <media:group>",
                "    <media:keywords>uk, food</media:keywords>",
            ]
        );
        assert_eq!(lines[6], "  </media:group>");
        assert!(lines[7].starts_with("  <category "));
        assert_eq!(lines.last(), Some(&"</entry>"));
        assert!(body.ends_with("</entry>\n"));
    }

    #[test]
    fn content_types() {
        assert_eq!(content_type_for_extension("JPG"), Some("image/jpeg"));
        assert_eq!(content_type_for_extension("jpeg"), Some("image/jpeg"));
        assert_eq!(content_type_for_extension("png"), Some("image/png"));
        assert_eq!(content_type_for_extension("mov"), Some("video/quicktime"));
        assert_eq!(content_type_for_extension("mpg"), Some("video/mpeg"));
        assert_eq!(content_type_for_extension("txt"), None);
    }
}
