//! Integration tests for the SSN rule through the public API.

use idcheck_validator::prelude::*;
use idcheck_validator::validators::ssn::validate;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// FORMAT SELECTION
// ============================================================================

#[rstest]
#[case::default_dashed(SsnOptions::new(), "123-45-6789", true)]
#[case::default_plain(SsnOptions::new(), "123456789", false)]
#[case::default_spaced(SsnOptions::new(), "123 45 6789", false)]
#[case::format1_dashed(SsnOptions::new().format(SsnFormat::Dashed), "123-45-6789", true)]
#[case::format2_dashed(SsnOptions::new().format(SsnFormat::Plain), "123-45-6789", false)]
#[case::format2_plain(SsnOptions::new().format(SsnFormat::Plain), "123456789", true)]
#[case::format3_spaced(SsnOptions::new().format(SsnFormat::Spaced), "123 45 6789", true)]
#[case::format3_dashed(SsnOptions::new().format(SsnFormat::Spaced), "123-45-6789", false)]
#[case::all_dashed(SsnOptions::new().all(), "123-45-6789", true)]
#[case::all_plain(SsnOptions::new().all(), "123456789", true)]
#[case::all_spaced(SsnOptions::new().all(), "123 45 6789", true)]
#[case::all_mixed_separators(SsnOptions::new().all(), "123-45 6789", false)]
#[case::all_too_short(SsnOptions::new().all(), "12345678", false)]
#[case::all_letters(SsnOptions::new().all(), "abc-de-fghi", false)]
fn format_selection(#[case] options: SsnOptions, #[case] value: &str, #[case] expected: bool) {
    assert_eq!(validate(value, &options), Ok(expected));
}

#[rstest]
#[case::arabic_indic_default(
    SsnOptions::new(),
    "\u{661}\u{662}\u{663}-\u{664}\u{665}-\u{666}\u{667}\u{668}\u{669}"
)]
#[case::fullwidth_default(SsnOptions::new(), "１２３-４５-６７８９")]
#[case::arabic_indic_format2(
    SsnOptions::new().format(SsnFormat::Plain),
    "\u{661}\u{662}\u{663}\u{664}\u{665}\u{666}\u{667}\u{668}\u{669}"
)]
#[case::fullwidth_format2(
    SsnOptions::new().format(SsnFormat::Plain),
    "１２３４５６７８９"
)]
#[case::fullwidth_all(SsnOptions::new().all(), "１２３４５６７８９")]
#[case::devanagari_all(SsnOptions::new().all(), "१२३ ४५ ६७८९")]
#[case::mixed_scripts_all(SsnOptions::new().all(), "123-45-６７８９")]
fn non_ascii_digits_are_rejected(#[case] options: SsnOptions, #[case] value: &str) {
    assert_eq!(validate(value, &options), Ok(false));
}

// ============================================================================
// CUSTOM PATTERN
// ============================================================================

#[rstest]
#[case::bare(r"^\d{4}$")]
#[case::literal(r"/^\d{4}$/")]
fn custom_pattern_accepts_four_digits(#[case] pattern: &str) {
    let options = SsnOptions::new().with_pattern(pattern);
    assert_eq!(validate("1234", &options), Ok(true));
    assert_eq!(validate("12345", &options), Ok(false));
}

#[rstest]
#[case::with_format2(SsnOptions::new().format(SsnFormat::Plain))]
#[case::with_all(SsnOptions::new().all())]
fn custom_pattern_applies_regardless_of_flags(#[case] options: SsnOptions) {
    let options = options.with_pattern(r"^\d{4}$");
    assert_eq!(validate("1234", &options), Ok(true));
    assert_eq!(validate("12345", &options), Ok(false));
}

#[rstest]
#[case::multi_line(r"/^\d{4}$/m", "note\n1234")]
#[case::dot_matches_new_line(r"/^a.b$/s", "a\nb")]
#[case::combined(r"/^A.B$/ims", "x\na\nb")]
fn literal_flags_are_honoured(#[case] pattern: &str, #[case] value: &str) {
    assert_eq!(validate(value, &SsnOptions::new().with_pattern(pattern)), Ok(true));
}

#[rstest]
#[case::global("/^1$/g")]
#[case::sticky("/^1$/y")]
fn stateful_flags_are_rejected(#[case] pattern: &str) {
    let err = validate("1", &SsnOptions::new().with_pattern(pattern)).unwrap_err();
    assert_eq!(err.code(), "RULE_INVALID_PATTERN");
}

#[test]
fn custom_pattern_replaces_the_default_format() {
    let options = SsnOptions::new().with_pattern(r"^\d{4}$");
    assert_eq!(validate("123-45-6789", &options), Ok(false));
}

#[test]
fn invalid_custom_pattern_is_a_configuration_error() {
    let err = validate("1234", &SsnOptions::new().with_pattern(r"^\d{4")).unwrap_err();
    assert!(err.is_configuration());
    assert!(matches!(err, RuleError::InvalidPattern { .. }));
}

// ============================================================================
// PERFORM STEP
// ============================================================================

#[test]
fn empty_value_is_not_an_error_once_wrapped() {
    let rule = Ssn::default().skip_empty();
    assert!(rule.validate("").is_ok());
    assert!(Ssn::default().validate("").is_err());
}

#[test]
fn error_rendering() {
    let err = Ssn::default().validate("12-345-6789").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"ssn: Value is not a valid social security number (params: [formats=dashed])"
    );

    let err = err.with_field("applicant.ssn");
    insta::assert_json_snapshot!(err, @r#"
    {
      "code": "ssn",
      "message": "Value is not a valid social security number",
      "field": "applicant.ssn",
      "params": [
        [
          "formats",
          "dashed"
        ]
      ]
    }
    "#);
}

#[test]
fn options_roundtrip_through_json() {
    let options = SsnOptions::new()
        .format(SsnFormat::Spaced)
        .with_pattern("/^x$/i");
    let json = serde_json::to_value(&options).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "format1": false,
            "format2": false,
            "format3": true,
            "all": false,
            "with": "/^x$/i"
        })
    );
    assert_eq!(serde_json::from_value::<SsnOptions>(json).unwrap(), options);
}
