use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #e11d48 "), Some((225, 29, 72)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("e11d48"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
}

#[test]
fn rgba_css_formats_palette_colors() {
    assert_eq!(rgba_css("#fda4af", 1.0), "rgba(253, 164, 175, 1.000)");
    assert_eq!(rgba_css("#fff1f2", 0.25), "rgba(255, 241, 242, 0.250)");
}

#[test]
fn rgba_css_clamps_alpha_and_falls_back_to_black() {
    assert_eq!(rgba_css("#e11d48", 1.5), "rgba(225, 29, 72, 1.000)");
    assert_eq!(rgba_css("rose", -1.0), "rgba(0, 0, 0, 0.000)");
}
