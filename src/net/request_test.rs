#![cfg(not(feature = "hydrate"))]

use super::*;

fn header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_options_are_get_same_origin_without_body() {
    let opts = RequestOptions::default();
    assert_eq!(opts.method, HttpMethod::Get);
    assert_eq!(opts.credentials, Credentials::SameOrigin);
    assert_eq!(opts.body.kind(), BodyKind::Empty);
}

#[test]
fn default_headers_carry_json_content_type() {
    let headers = RequestOptions::get().effective_headers();
    assert_eq!(headers.len(), 1);
    assert_eq!(header(&headers, "content-type"), Some("application/json"));
}

#[test]
fn method_strings_match_http_verbs() {
    assert_eq!(HttpMethod::Get.as_str(), "GET");
    assert_eq!(RequestOptions::post().method.as_str(), "POST");
    assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
}

// =============================================================
// Header merging
// =============================================================

#[test]
fn caller_headers_are_added_alongside_defaults() {
    let headers = RequestOptions::get()
        .header("X-Requested-With", "pagekit")
        .effective_headers();
    assert_eq!(header(&headers, "Content-Type"), Some("application/json"));
    assert_eq!(header(&headers, "X-Requested-With"), Some("pagekit"));
}

#[test]
fn caller_content_type_overrides_default_case_insensitively() {
    let headers = RequestOptions::post()
        .header("content-type", "text/plain")
        .text("hi")
        .effective_headers();
    assert_eq!(headers.len(), 1);
    assert_eq!(header(&headers, "Content-Type"), Some("text/plain"));
}

#[test]
fn later_caller_header_wins() {
    let headers = RequestOptions::get()
        .header("Accept", "text/html")
        .header("accept", "application/json")
        .effective_headers();
    let accepts = headers.iter().filter(|(n, _)| n.eq_ignore_ascii_case("accept")).count();
    assert_eq!(accepts, 1);
    assert_eq!(header(&headers, "Accept"), Some("application/json"));
}

// =============================================================
// Bodies
// =============================================================

#[test]
fn json_body_is_valid_json_with_json_content_type() {
    let opts = RequestOptions::post()
        .json(&serde_json::json!({ "subject": "math", "count": 3 }))
        .unwrap();
    assert_eq!(opts.body.kind(), BodyKind::Json);

    let raw = opts.encoded_body().unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["subject"], "math");
    assert_eq!(parsed["count"], 3);

    let headers = opts.effective_headers();
    assert_eq!(header(&headers, "Content-Type"), Some("application/json"));
}

#[test]
fn json_body_accepts_serializable_structs() {
    #[derive(serde::Serialize)]
    struct Payload<'a> {
        name: &'a str,
    }
    let opts = RequestOptions::post().json(&Payload { name: "notes" }).unwrap();
    assert_eq!(opts.encoded_body().unwrap().as_deref(), Some("{\"name\":\"notes\"}"));
}

#[test]
fn form_body_drops_content_type() {
    let opts = RequestOptions::post().form(vec![("file".to_owned(), "a.png".to_owned())]);
    let headers = opts.effective_headers();
    assert_eq!(header(&headers, "Content-Type"), None);
    assert_eq!(opts.encoded_body().unwrap(), None);
}

#[test]
fn form_body_drops_caller_content_type_too() {
    let headers = RequestOptions::post()
        .header("Content-Type", "application/json")
        .header("X-Token", "t")
        .form(Vec::new())
        .effective_headers();
    assert_eq!(header(&headers, "Content-Type"), None);
    assert_eq!(header(&headers, "X-Token"), Some("t"));
}

#[test]
fn text_body_is_sent_verbatim() {
    let opts = RequestOptions::post().text("{\"raw\":true}");
    assert_eq!(opts.encoded_body().unwrap().as_deref(), Some("{\"raw\":true}"));
}

#[test]
fn empty_body_encodes_to_none() {
    assert_eq!(RequestOptions::get().encoded_body().unwrap(), None);
}

// =============================================================
// Option names from page scripts
// =============================================================

#[test]
fn method_parse_is_case_insensitive() {
    assert_eq!(HttpMethod::parse("post"), Some(HttpMethod::Post));
    assert_eq!(HttpMethod::parse(" Delete "), Some(HttpMethod::Delete));
    assert_eq!(HttpMethod::parse("TRACE"), None);
}

#[test]
fn credentials_parse_accepts_fetch_modes() {
    assert_eq!(Credentials::parse("same-origin"), Some(Credentials::SameOrigin));
    assert_eq!(Credentials::parse("include"), Some(Credentials::Include));
    assert_eq!(Credentials::parse("omit"), Some(Credentials::Omit));
    assert_eq!(Credentials::parse("always"), None);
}

#[test]
fn script_options_default_to_get_same_origin() {
    let opts = RequestOptions::from_script(ScriptOptions::default(), RequestBody::Empty).unwrap();
    assert_eq!(opts.method, HttpMethod::Get);
    assert_eq!(opts.credentials, Credentials::SameOrigin);
    assert!(opts.headers.is_empty());
}

#[test]
fn script_options_map_fetch_fields() {
    let script: ScriptOptions = serde_json::from_str(
        r#"{"method": "put", "credentials": "include", "headers": {"X-Token": "abc"}}"#,
    )
    .unwrap();
    let body = RequestBody::Json(serde_json::json!({ "title": "Chapter 3" }));
    let opts = RequestOptions::from_script(script, body).unwrap();
    assert_eq!(opts.method, HttpMethod::Put);
    assert_eq!(opts.credentials, Credentials::Include);
    assert_eq!(opts.body.kind(), BodyKind::Json);
    let headers = opts.effective_headers();
    assert_eq!(header(&headers, "X-Token"), Some("abc"));
    assert_eq!(header(&headers, "Content-Type"), Some("application/json"));
}

#[test]
fn script_form_body_has_no_content_type() {
    let opts = RequestOptions::from_script(
        ScriptOptions {
            method: Some("POST".to_owned()),
            ..ScriptOptions::default()
        },
        RequestBody::Form(vec![("image".to_owned(), "scan.jpg".to_owned())]),
    )
    .unwrap();
    assert_eq!(header(&opts.effective_headers(), "Content-Type"), None);
}

#[test]
fn script_options_reject_unknown_names() {
    let bad_method = ScriptOptions {
        method: Some("CONNECT".to_owned()),
        ..ScriptOptions::default()
    };
    assert!(matches!(
        RequestOptions::from_script(bad_method, RequestBody::Empty),
        Err(ApiError::Request(_))
    ));
    let bad_credentials = ScriptOptions {
        credentials: Some("sometimes".to_owned()),
        ..ScriptOptions::default()
    };
    assert!(RequestOptions::from_script(bad_credentials, RequestBody::Empty).is_err());
}
