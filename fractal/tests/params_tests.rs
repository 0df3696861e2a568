use fractal::{ComparisonParams, Const, FractalParams, Origin, ParamError};

#[test]
fn defaults_match_dashboard_sliders() {
    let params = FractalParams::default();
    assert_eq!(params.order, Const::DEFAULT_ORDER);
    assert_eq!(params.katz, Const::DEFAULT_KATZ);
    assert_eq!(params.origin, Origin::Corner);
    assert!(params.validate().is_ok());
}

#[test]
fn yaml_patch_overrides_only_named_fields() {
    let params = FractalParams::from_yaml_str("order: 100\norigin: centre\n")
        .expect("patch parses");
    assert_eq!(params.order, 100);
    assert_eq!(params.katz, Const::DEFAULT_KATZ);
    assert_eq!(params.origin, Origin::Centre);
}

#[test]
fn yaml_patch_rejects_unknown_origin() {
    assert!(matches!(
        FractalParams::from_yaml_str("origin: diagonal\n"),
        Err(ParamError::InvalidOrigin(_))
    ));
}

#[test]
fn origin_parse_accepts_both_spellings() {
    assert_eq!(Origin::parse("Centre").expect("parses"), Origin::Centre);
    assert_eq!(Origin::parse("center").expect("parses"), Origin::Centre);
    assert_eq!(Origin::parse(" corner ").expect("parses"), Origin::Corner);
    assert!(Origin::parse("edge").is_err());
}

#[test]
fn origin_offset_is_the_only_variant_difference() {
    assert_eq!(Origin::Corner.offset(257), 0);
    assert_eq!(Origin::Centre.offset(257), 128);
    assert_eq!(Origin::Centre.offset(100), 50);
}

#[test]
fn comparison_patch_covers_both_generations() {
    let yaml = "a:\n  order: 80\nb:\n  order: 90\n  katz: 0.7\n";
    let params = ComparisonParams::from_yaml_str(yaml).expect("patch parses");
    assert_eq!(params.a.order, 80);
    assert_eq!(params.a.katz, Const::DEFAULT_KATZ);
    assert_eq!(params.b.order, 90);
    assert_eq!(params.b.katz, 0.7);
}
