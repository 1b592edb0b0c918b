use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BannerError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BannerError::metadata_fetch("x")
            .to_string()
            .contains("metadata fetch error:")
    );
    assert!(
        BannerError::metadata_shape("x")
            .to_string()
            .contains("metadata shape error:")
    );
}

#[test]
fn asset_load_names_the_pattern() {
    let err = BannerError::asset_load(Pattern::CurlyBorder, "404 Not Found");
    let msg = err.to_string();
    assert!(msg.contains("curly_border"));
    assert!(msg.contains("404 Not Found"));
    assert!(matches!(
        err,
        BannerError::AssetLoad {
            pattern: Pattern::CurlyBorder,
            ..
        }
    ));
}

#[test]
fn dimension_mismatch_reports_both_sizes() {
    let err = BannerError::dimension_mismatch(
        Canvas {
            width: 20,
            height: 40,
        },
        Canvas {
            width: 22,
            height: 42,
        },
    );
    assert_eq!(
        err.to_string(),
        "dimension mismatch: expected 20x40, got 22x42"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BannerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
