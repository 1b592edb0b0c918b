use super::*;

#[test]
fn table_covers_every_pattern_once() {
    assert_eq!(Pattern::ALL.len(), 43);
    assert_eq!(Pattern::ALL[0], Pattern::Base);
    assert_eq!(Pattern::ALL[42], Pattern::TriangleTop);
    let mut names: Vec<_> = Pattern::ALL.iter().map(|p| p.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Pattern::ALL.len());
}

#[test]
fn ordinals_follow_declaration_order() {
    for (i, pattern) in Pattern::ALL.iter().enumerate() {
        assert_eq!(usize::from(pattern.ordinal()), i);
        assert_eq!(Pattern::from_ordinal(i as u8), Some(*pattern));
    }
    assert_eq!(Pattern::from_ordinal(43), None);
}

#[test]
fn url_path_is_snake_case_name() {
    assert_eq!(Pattern::Base.url_path(), "base");
    assert_eq!(Pattern::CurlyBorder.url_path(), "curly_border");
    assert_eq!(Pattern::HalfHorizontalBottom.url_path(), "half_horizontal_bottom");
    assert_eq!(Pattern::StripeDownleft.url_path(), "stripe_downleft");
}

#[test]
fn names_parse_in_several_spellings() {
    for spelling in ["CurlyBorder", "curly_border", "curly-border"] {
        assert_eq!(spelling.parse::<Pattern>().unwrap(), Pattern::CurlyBorder);
    }
    assert_eq!(Pattern::from_name("Border"), Some(Pattern::Border));
    assert!("tartan".parse::<Pattern>().is_err());
}

#[test]
fn only_base_is_not_a_layer() {
    let non_layers: Vec<_> = Pattern::ALL.iter().filter(|p| !p.is_layer()).collect();
    assert_eq!(non_layers, vec![&Pattern::Base]);
}
