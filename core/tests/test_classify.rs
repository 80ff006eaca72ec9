//! End-to-end properties of the public classifier API.

use filetype::{classify, Classification, MimeCategory};
use proptest::prelude::*;

#[test]
fn test_documented_examples() {
    let cases = [
        ("data:image/png;base64,iVBORw0KG...", "image"),
        ("data:text/plain;charset=utf-8,hello", "text"),
        ("data:application/json,{}", "application"),
        ("data:audio/mpeg;base64,//uQ...", "unknown"),
        ("not-a-data-uri", "unknown"),
        ("data:", "unknown"),
        ("", "unknown"),
    ];

    for (uri, expected) in cases {
        assert_eq!(classify(uri).as_str(), expected, "uri: {uri:?}");
    }
}

#[test]
fn test_common_subtypes() {
    let cases = [
        ("data:image/svg+xml;utf8,<svg/>", MimeCategory::Image),
        ("data:image/jpeg;base64,/9j/4AAQ", MimeCategory::Image),
        ("data:text/html;charset=US-ASCII,%3Ch1%3E", MimeCategory::Text),
        ("data:application/octet-stream;base64,AAEC", MimeCategory::Application),
        ("data:application/vnd.ms-excel,", MimeCategory::Application),
        ("data:video/webm;base64,GkXf", MimeCategory::Unknown),
        ("data:;base64,SGVsbG8=", MimeCategory::Unknown),
    ];

    for (uri, expected) in cases {
        assert_eq!(classify(uri), expected, "uri: {uri:?}");
    }
}

#[test]
fn test_response_shape() {
    let response = Classification::from(classify("data:image/webp;base64,UklGR"));
    assert_eq!(
        serde_json::to_value(response).unwrap(),
        serde_json::json!({ "type": "image" })
    );
}

#[test]
fn test_concurrent_calls_agree() {
    let uris = [
        "data:image/png,",
        "data:text/plain,",
        "data:application/zip,",
        "data:audio/wav,",
        "garbage",
    ];
    let expected: Vec<_> = uris.iter().map(|u| classify(u)).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || uris.iter().map(|u| classify(u)).collect::<Vec<_>>()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

proptest! {
    #[test]
    fn prop_total_over_arbitrary_strings(s in ".*") {
        let label = classify(&s);
        prop_assert!(MimeCategory::ALL.contains(&label));
    }

    #[test]
    fn prop_total_over_data_uris(rest in "[a-z/;:,= +-]{0,40}") {
        let uri = format!("data:{rest}");
        let label = classify(&uri);
        prop_assert!(MimeCategory::ALL.contains(&label));
    }

    #[test]
    fn prop_deterministic(s in ".*") {
        prop_assert_eq!(classify(&s), classify(&s));
    }

    #[test]
    fn prop_non_data_scheme_is_unknown(s in "[^d].*") {
        prop_assert_eq!(classify(&s), MimeCategory::Unknown);
    }

    #[test]
    fn prop_payload_never_affects_label(
        main in "(image|text|application|audio|video)",
        sub in "[a-z0-9.+-]{1,12}",
        payload in ".*",
    ) {
        let uri = format!("data:{main}/{sub};base64,{payload}");
        prop_assert_eq!(classify(&uri), MimeCategory::from_main_type(&main));
    }
}
