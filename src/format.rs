/// Compact magnitude rendering for transaction counts: 1234 -> "1.2k",
/// 1230000 -> "1.2M", anything under a thousand stays exact.
pub fn abbreviate(n: Option<i64>) -> String {
    let n = match n {
        Some(n) => n,
        None => return String::new(),
    };
    let magnitude = n.abs();
    if magnitude < 1_000 {
        return n.to_string();
    }
    let (divisor, suffix) = if magnitude < 1_000_000 {
        (1e3, "k")
    } else if magnitude < 1_000_000_000 {
        (1e6, "M")
    } else {
        (1e9, "B")
    };
    let scaled = format!("{:.1}", n as f64 / divisor);
    let trimmed = scaled.strip_suffix(".0").unwrap_or(&scaled);
    format!("{}{}", trimmed, suffix)
}

/// Clips `text` to at most `limit` characters, replacing the tail with "..."
/// so the clipped result is exactly `limit` characters long.
pub fn clamp_to_limit(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_owned();
    }
    let mut clipped: String = text.chars().take(limit - 3).collect();
    clipped.push_str("...");
    clipped
}

#[cfg(test)]
mod tests {
    use super::{abbreviate, clamp_to_limit};

    #[test]
    fn abbreviate_keeps_small_magnitudes_exact() {
        assert_eq!(abbreviate(Some(0)), "0");
        assert_eq!(abbreviate(Some(7)), "7");
        assert_eq!(abbreviate(Some(999)), "999");
        assert_eq!(abbreviate(Some(-42)), "-42");
    }

    #[test]
    fn abbreviate_scales_thousands_millions_billions() {
        assert_eq!(abbreviate(Some(1234)), "1.2k");
        assert_eq!(abbreviate(Some(50000)), "50k");
        assert_eq!(abbreviate(Some(1230000)), "1.2M");
        assert_eq!(abbreviate(Some(1230000000)), "1.2B");
    }

    #[test]
    fn abbreviate_strips_trailing_zero_decimal() {
        assert_eq!(abbreviate(Some(1000)), "1k");
        assert_eq!(abbreviate(Some(2000000)), "2M");
    }

    #[test]
    fn abbreviate_maps_absent_to_empty() {
        assert_eq!(abbreviate(None), "");
    }

    #[test]
    fn clamp_leaves_short_text_alone() {
        let text = "a".repeat(280);
        assert_eq!(clamp_to_limit(&text, 280), text);
        assert_eq!(clamp_to_limit("hello", 280), "hello");
    }

    #[test]
    fn clamp_clips_to_exactly_the_limit_with_a_marker() {
        let text = "b".repeat(300);
        let clipped = clamp_to_limit(&text, 280);
        assert_eq!(clipped.chars().count(), 280);
        assert!(clipped.ends_with("..."));
    }
}
