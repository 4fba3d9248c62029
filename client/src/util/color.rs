//! Hex color parsing for canvas fills.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    let digits = hex.bytes().map(nibble).collect::<Option<Vec<u8>>>()?;
    match digits.as_slice() {
        &[r, g, b] => Some((r * 17, g * 17, b * 17)),
        &[r1, r2, g1, g2, b1, b2] => Some(((r1 << 4) | r2, (g1 << 4) | g2, (b1 << 4) | b2)),
        _ => None,
    }
}

fn nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// CSS `rgba()` string for a hex color at the given opacity.
///
/// Unparseable colors fall back to black so a bad palette entry still draws.
pub fn rgba_css(hex: &str, alpha: f64) -> String {
    let (r, g, b) = parse_hex_rgb(hex).unwrap_or((0, 0, 0));
    let alpha = alpha.clamp(0.0, 1.0);
    format!("rgba({r}, {g}, {b}, {alpha:.3})")
}
