//! The spec mini-language, exercised end to end: one field, one argument,
//! every knob.

use textfmt::{args, format};

fn fmt_int(spec: &str, value: i64) -> String {
    format(&std::format!("{{:{spec}}}"), args![value]).unwrap()
}

fn fmt_str(spec: &str, value: &str) -> String {
    format(&std::format!("{{:{spec}}}"), args![value]).unwrap()
}

#[test]
fn alignment_matrix_for_numbers() {
    assert_eq!(fmt_int("<6", -42), "-42   ");
    assert_eq!(fmt_int(">6", -42), "   -42");
    assert_eq!(fmt_int("^6", -42), " -42  ");
    assert_eq!(fmt_int("=6", -42), "-   42");
    assert_eq!(fmt_int("6", -42), "   -42"); // default: right
}

#[test]
fn alignment_matrix_for_strings() {
    assert_eq!(fmt_str("<6", "ab"), "ab    "); // default too
    assert_eq!(fmt_str("6", "ab"), "ab    ");
    assert_eq!(fmt_str(">6", "ab"), "    ab");
    assert_eq!(fmt_str("^6", "ab"), "  ab  ");
}

#[test]
fn center_puts_the_shorter_run_first() {
    assert_eq!(fmt_str("^5", "ab"), " ab  ");
    assert_eq!(fmt_str("^7", "ab"), "  ab   ");
}

#[test]
fn custom_fill_characters() {
    assert_eq!(fmt_int("*>6", 42), "****42");
    assert_eq!(fmt_int("·^6", 42), "··42··");
    assert_eq!(fmt_str("=<4", "ab"), "ab==");
}

#[test]
fn width_never_truncates() {
    assert_eq!(fmt_str("2", "overflow"), "overflow");
    assert_eq!(fmt_int("1", 12345), "12345");
    assert_eq!(fmt_str("0", "x"), "x");
}

#[test]
fn zero_flag_versus_explicit_alignment() {
    assert_eq!(fmt_int("08", -42), "-0000042");
    assert_eq!(fmt_int(">08", -42), "     -42"); // explicit align wins, space fill
    assert_eq!(fmt_int("0>8", -42), "00000-42"); // '0' as an ordinary fill char
}

#[test]
fn bases_with_signs_and_prefixes() {
    assert_eq!(fmt_int("+#b", 5), "+0b101");
    assert_eq!(fmt_int("+#o", 8), "+0o10");
    assert_eq!(fmt_int(" #x", 255), " 0xff");
    assert_eq!(fmt_int("#X", 255), "0XFF");
    assert_eq!(fmt_int("#010x", -255), "-0x000000ff");
}

#[test]
fn uppercase_base_prefixes() {
    assert_eq!(fmt_int("#B", 5), "0B101");
    assert_eq!(fmt_int("#O", 8), "0O10");
}

#[test]
fn precision_on_floats() {
    let pi = 3.14159265;
    assert_eq!(
        format("{0:.0f} {0:.3f} {0:.6f}", args![pi]).unwrap(),
        "3 3.142 3.141593"
    );
}

#[test]
fn general_notation_picks_a_side() {
    assert_eq!(format("{}", args![1234.5]).unwrap(), "1234.5");
    assert_eq!(format("{}", args![12345678.0]).unwrap(), "1.23457e+07");
    assert_eq!(format("{}", args![0.0001]).unwrap(), "0.0001");
    assert_eq!(format("{}", args![0.00001]).unwrap(), "1e-05");
}

#[test]
fn exponent_always_has_a_sign_and_two_digits() {
    assert_eq!(format("{:.1e}", args![1.0]).unwrap(), "1.0e+00");
    assert_eq!(format("{:.1e}", args![123.0]).unwrap(), "1.2e+02");
    assert_eq!(format("{:.1e}", args![0.5]).unwrap(), "5.0e-01");
    assert_eq!(format("{:.1E}", args![123.0]).unwrap(), "1.2E+02");
}

#[test]
fn nonfinite_floats_ignore_precision() {
    assert_eq!(format("{:.3f}", args![f64::INFINITY]).unwrap(), "inf");
    assert_eq!(format("{:.3F}", args![f64::INFINITY]).unwrap(), "INF");
    assert_eq!(format("{:+.3f}", args![f64::NAN]).unwrap(), "+nan");
    assert_eq!(
        format("{:f}", args![f64::NEG_INFINITY]).unwrap(),
        "-inf"
    );
}

#[test]
fn percent_scales_by_one_hundred() {
    assert_eq!(format("{:.1%}", args![0.995]).unwrap(), "99.5%");
    assert_eq!(format("{:>8.0%}", args![1.0]).unwrap(), "    100%");
}

#[test]
fn sign_space_reserves_a_column() {
    assert_eq!(
        format("{0: .1f}\n{1: .1f}", args![1.5, -1.5]).unwrap(),
        " 1.5\n-1.5"
    );
}

// Type-dependent legality: the same spec text, accepted or rejected per the
// argument it meets.

#[test]
fn spec_legality_depends_on_the_argument() {
    for spec in ["+", ",", "#", "=8"] {
        let template = std::format!("{{:{spec}}}");
        assert!(
            format(&template, args![1]).is_ok(),
            "{spec:?} should be legal for integers"
        );
        assert!(
            format(&template, args!["s"]).unwrap_err().is_spec(),
            "{spec:?} should be illegal for strings"
        );
    }
}

#[test]
fn string_specs_reject_numeric_types() {
    assert!(format("{:d}", args!["s"]).unwrap_err().is_spec());
    assert!(format("{:b}", args!["s"]).unwrap_err().is_spec());
    assert!(format("{:c}", args!["s"]).unwrap_err().is_spec());
    assert!(format("{:.2f}", args!["s"]).unwrap_err().is_spec());
    // Containers render through the string path, so they reject it too.
    assert!(format("{:c}", args![vec![1, 2, 3]]).unwrap_err().is_spec());
}

#[test]
fn float_specs_reject_integer_types() {
    for spec in ["b", "o", "x", "X", "d", "c"] {
        let template = std::format!("{{:{spec}}}");
        assert!(
            format(&template, args![1.5]).unwrap_err().is_spec(),
            "{spec:?} should be illegal for floats"
        );
    }
}

#[test]
fn string_presentation_rejected_for_integers() {
    assert!(format("{:s}", args![1]).unwrap_err().is_spec());
}

#[test]
fn malformed_specs_fail_at_render_time() {
    // The template compiles; the spec text is only judged against an
    // argument.
    let template = textfmt::compile("{:5..2}").unwrap();
    assert!(template.format(args![1]).unwrap_err().is_spec());
    assert!(textfmt::compile("{:not a spec}").is_ok());
    assert!(format("{:not a spec}", args![1]).unwrap_err().is_spec());
}

#[test]
fn character_codes_out_of_range() {
    assert!(format("{:c}", args![-1]).unwrap_err().is_spec());
    assert!(format("{:c}", args![0x110000i64]).unwrap_err().is_spec());
}

#[test]
fn alternate_form_is_allowed_for_character_presentation() {
    assert_eq!(format("{:#c}", args![97]).unwrap(), "a");
}

#[test]
fn grouped_bases() {
    assert_eq!(fmt_int(",x", 0xABCDEF), "abc,def");
    assert_eq!(fmt_int(",o", 0o7654321), "7,654,321");
}

#[test]
fn repeated_field_with_different_specs() {
    assert_eq!(
        format("{0:d} {0:b} {0:o} {0:x}", args![42]).unwrap(),
        "42 101010 52 2a"
    );
}
