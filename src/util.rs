use base64::Engine;
use image::Rgba;

use crate::industry::LogoSize;

/// Fallback color when a hex string cannot be parsed (the default primary
/// used throughout the industry table).
pub const DEFAULT_COLOR: Rgba<u8> = Rgba([59, 130, 246, 255]);

/// Parse `#RRGGBB` (leading `#` optional) into an opaque RGBA pixel.
/// Malformed input falls back to [`DEFAULT_COLOR`] rather than erroring;
/// colors come from a static table and a bad entry should never take a
/// mockup down.
pub fn hex_to_rgb(s: &str) -> Rgba<u8> {
    let s = s.trim().trim_start_matches('#');
    if s.len() != 6 {
        return DEFAULT_COLOR;
    }
    match hex::decode(s) {
        Ok(b) => Rgba([b[0], b[1], b[2], 255]),
        Err(_) => DEFAULT_COLOR,
    }
}

/// Base logo footprint in pixels for an industry styling tier.
/// The positioning engine may still shrink this via its width/height caps.
pub fn logo_px(size: LogoSize) -> u32 {
    match size {
        LogoSize::Small => 120,
        LogoSize::Medium => 160,
        LogoSize::Large => 200,
    }
}

pub fn parse_data_uri(input: &str) -> Option<String> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    if let Some(rest) = s.strip_prefix("data:") {
        // data:image/png;base64,....
        let (_, b64) = rest.split_once(',')?;
        return Some(b64.trim().to_string());
    }
    // assume plain base64
    Some(s.to_string())
}

pub fn b64_decode(input: &str) -> Option<Vec<u8>> {
    let b64 = parse_data_uri(input)?;
    let engine = base64::engine::general_purpose::STANDARD;
    engine.decode(b64.as_bytes()).ok()
}

/// Shorten to at most `max_len` characters, appending `...` when trimmed.
/// Counts chars, not bytes: company names and taglines are arbitrary
/// user text and must never split a multi-byte character.
pub fn truncate_with_ellipsis(s: String, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s;
    }
    if max_len <= 3 {
        return "...".to_string();
    }
    let mut out: String = s.chars().take(max_len - 3).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        assert_eq!(hex_to_rgb("#3B82F6"), Rgba([59, 130, 246, 255]));
        assert_eq!(hex_to_rgb("1E293B"), Rgba([30, 41, 59, 255]));
    }

    #[test]
    fn hex_malformed_falls_back_to_default() {
        assert_eq!(hex_to_rgb(""), DEFAULT_COLOR);
        assert_eq!(hex_to_rgb("#fff"), DEFAULT_COLOR);
        assert_eq!(hex_to_rgb("#ZZZZZZ"), DEFAULT_COLOR);
        assert_eq!(hex_to_rgb("not a color"), DEFAULT_COLOR);
    }

    #[test]
    fn logo_px_is_ordered_by_tier() {
        assert!(logo_px(LogoSize::Small) < logo_px(LogoSize::Medium));
        assert!(logo_px(LogoSize::Medium) < logo_px(LogoSize::Large));
    }

    #[test]
    fn data_uri_extracts_payload() {
        assert_eq!(
            parse_data_uri("data:image/png;base64,aGVsbG8=").as_deref(),
            Some("aGVsbG8=")
        );
        assert_eq!(b64_decode("data:image/png;base64,aGVsbG8=").unwrap(), b"hello");
        assert_eq!(b64_decode("aGVsbG8=").unwrap(), b"hello");
        assert!(b64_decode("").is_none());
    }

    #[test]
    fn truncation_keeps_short_strings_intact() {
        assert_eq!(truncate_with_ellipsis("Acme".into(), 25), "Acme");
        assert_eq!(
            truncate_with_ellipsis("A very long company name indeed".into(), 10),
            "A very ..."
        );
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        // 25 two-byte chars: 50 bytes, but only 25 chars, so untouched.
        let short = "Ä".repeat(25);
        assert_eq!(truncate_with_ellipsis(short.clone(), 40), short);

        // Trimming a multi-byte name lands on a char boundary.
        let long = "Ö".repeat(50);
        let out = truncate_with_ellipsis(long, 40);
        assert_eq!(out.chars().count(), 40);
        assert!(out.ends_with("..."));
        assert!(out.starts_with('Ö'));
    }
}
