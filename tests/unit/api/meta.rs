use super::*;

#[test]
fn parse_accepts_the_wire_shape() {
    let meta = BannerMeta::parse(
        br#"{ "color": "Red", "patterns": [ { "pattern": "border", "color": "black" } ] }"#,
    )
    .unwrap();
    assert_eq!(meta.color, "Red");
    assert_eq!(
        meta.patterns,
        vec![MetaPattern {
            pattern: "border".to_string(),
            color: "black".to_string(),
        }]
    );
}

#[test]
fn parse_ignores_unknown_fields() {
    let meta = BannerMeta::parse(br#"{ "color": "red", "patterns": [], "version": 2 }"#).unwrap();
    assert!(meta.patterns.is_empty());
}

#[test]
fn parse_rejects_bad_shapes_as_shape_errors() {
    for body in [
        &b"not json"[..],
        br#"{ "patterns": [] }"#,
        br#"{ "color": "red" }"#,
        br#"{ "color": 3, "patterns": [] }"#,
        br#"{ "color": "red", "patterns": [ { "pattern": "border" } ] }"#,
        br#"[]"#,
    ] {
        let err = BannerMeta::parse(body).unwrap_err();
        assert!(
            matches!(err, BannerError::MetadataShape(_)),
            "{}: {err}",
            String::from_utf8_lossy(body)
        );
    }
}

#[test]
fn to_banner_resolves_names_and_ids() {
    let meta = BannerMeta {
        color: "Red".to_string(),
        patterns: vec![
            MetaPattern {
                pattern: "curly_border".to_string(),
                color: "light_blue".to_string(),
            },
            MetaPattern {
                pattern: "Creeper".to_string(),
                color: "Black".to_string(),
            },
        ],
    };
    let banner = meta.to_banner().unwrap();
    assert_eq!(banner.color, Color::Red);
    assert_eq!(
        banner.layers,
        vec![
            Layer::new("layer-0", Pattern::CurlyBorder, Color::LightBlue),
            Layer::new("layer-1", Pattern::Creeper, Color::Black),
        ]
    );
}

#[test]
fn to_banner_rejects_unknown_names() {
    let meta = BannerMeta {
        color: "red".to_string(),
        patterns: vec![MetaPattern {
            pattern: "tartan".to_string(),
            color: "black".to_string(),
        }],
    };
    let err = meta.to_banner().unwrap_err();
    assert!(matches!(err, BannerError::MetadataShape(_)));
    assert!(err.to_string().contains("patterns[0]"));

    let meta = BannerMeta {
        color: "crimson".to_string(),
        patterns: vec![],
    };
    assert!(matches!(
        meta.to_banner(),
        Err(BannerError::MetadataShape(_))
    ));
}

#[test]
fn from_banner_emits_visible_layers_only() {
    let mut banner = Banner::new(Color::LightGray).with_layer(Pattern::Bricks, Color::Brown);
    banner.push(Pattern::Flow, Color::Cyan).hidden = true;

    let meta = BannerMeta::from(&banner);
    assert_eq!(meta.color, "light_gray");
    assert_eq!(meta.patterns.len(), 1);
    assert_eq!(meta.patterns[0].pattern, "bricks");
    assert_eq!(
        serde_json::to_value(&meta).unwrap(),
        serde_json::json!({
            "color": "light_gray",
            "patterns": [{ "pattern": "bricks", "color": "brown" }]
        })
    );
}

#[test]
fn meta_url_appends_encoded_code() {
    let client = MetaClient::new(reqwest::Client::new(), "http://localhost:3000/api/").unwrap();
    assert_eq!(
        client.meta_url("f010045").as_str(),
        "http://localhost:3000/api/v1/meta/f010045"
    );
    assert_eq!(
        client.meta_url("a/b c").as_str(),
        "http://localhost:3000/api/v1/meta/a%2Fb%20c"
    );

    let client = MetaClient::new(reqwest::Client::new(), "http://localhost:3000/api").unwrap();
    assert_eq!(
        client.meta_url("e").as_str(),
        "http://localhost:3000/api/v1/meta/e"
    );
}

#[test]
fn new_rejects_unusable_base_urls() {
    assert!(matches!(
        MetaClient::new(reqwest::Client::new(), "not a url"),
        Err(BannerError::Validation(_))
    ));
    assert!(MetaClient::new(reqwest::Client::new(), "mailto:someone@example.test").is_err());
}
