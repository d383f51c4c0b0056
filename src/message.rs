use crate::format::{abbreviate, clamp_to_limit};
use crate::metrics::DerivedMetrics;

pub const MAX_POST_CHARS: usize = 280;

/// The one and only rendering path for the post. Three fixed lines, plus an
/// explainer link when one is configured, clipped to the platform limit.
pub fn compose(metrics: &DerivedMetrics, explainer_url: &str) -> String {
    let btc = &metrics.btc;
    let bsv = &metrics.bsv;
    let line_one = format!(
        "BTC fee:{}s ~{}m | BSV fee:{}s ~{}m",
        btc.simple_fee, btc.eta_minutes, bsv.simple_fee, bsv.eta_minutes
    );
    let line_two = format!("1KB data — BTC:{}s | BSV:{}s", btc.one_kb_fee, bsv.one_kb_fee);
    let line_three = format!(
        "Backlog — BTC:{}tx(~{}b) | BSV:{}tx(~{}b)",
        abbreviate(Some(btc.backlog_count as i64)),
        btc.backlog_blocks,
        abbreviate(Some(bsv.backlog_count as i64)),
        bsv.backlog_blocks
    );
    let mut text = format!("{}\n{}\n{}", line_one, line_two, line_three);
    if !explainer_url.is_empty() {
        text.push_str(&format!("\nMore: {}", explainer_url));
    }
    clamp_to_limit(&text, MAX_POST_CHARS)
}

#[cfg(test)]
mod tests {
    use super::{compose, MAX_POST_CHARS};
    use crate::metrics::{DerivedMetrics, NetworkMetrics};

    fn sample_metrics() -> DerivedMetrics {
        DerivedMetrics {
            btc: NetworkMetrics {
                simple_fee: 1400,
                one_kb_fee: 10_000,
                eta_minutes: 60,
                backlog_count: 45_123,
                backlog_blocks: 2.5,
            },
            bsv: NetworkMetrics {
                simple_fee: 226,
                one_kb_fee: 1000,
                eta_minutes: 20,
                backlog_count: 50_000,
                backlog_blocks: 2.0,
            },
        }
    }

    #[test]
    fn renders_exactly_three_lines_without_a_url() {
        let text = compose(&sample_metrics(), "");
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "BTC fee:1400s ~60m | BSV fee:226s ~20m");
        assert_eq!(lines[1], "1KB data — BTC:10000s | BSV:1000s");
        assert_eq!(lines[2], "Backlog — BTC:45.1ktx(~2.5b) | BSV:50ktx(~2b)");
        assert!(text.chars().count() <= MAX_POST_CHARS);
    }

    #[test]
    fn appends_a_fourth_line_when_a_url_is_configured() {
        let text = compose(&sample_metrics(), "https://example.com/fees");
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "More: https://example.com/fees");
    }

    #[test]
    fn never_exceeds_the_platform_limit() {
        let url = format!("https://example.com/{}", "f".repeat(300));
        let text = compose(&sample_metrics(), &url);
        assert_eq!(text.chars().count(), MAX_POST_CHARS);
        assert!(text.ends_with("..."));
    }
}
