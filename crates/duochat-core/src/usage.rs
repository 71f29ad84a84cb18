//! Token and cost estimation for session usage.
//!
//! This is a deliberate approximation: no sub-word tokenization is
//! performed. Token counts are derived from character counts at roughly
//! 0.7 tokens per character, and cost uses GPT-3.5 Turbo reference prices.
//! The figures are a rough running indicator, never billing-accurate.

/// Estimated tokens per character.
pub const TOKENS_PER_CHAR: f64 = 0.7;
/// Reference price per 1K prompt tokens in USD.
pub const PROMPT_COST_PER_1K: f64 = 0.0015;
/// Reference price per 1K completion tokens in USD.
pub const COMPLETION_COST_PER_1K: f64 = 0.002;

/// Estimated usage for a single request/response exchange.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageEstimate {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
    pub cost: f64,
}

/// Estimate token usage and cost from character counts.
///
/// Pure function: no state, no side effects.
pub fn estimate(prompt_chars: usize, completion_chars: usize) -> UsageEstimate {
    let prompt_tokens = (prompt_chars as f64 * TOKENS_PER_CHAR) as u64;
    let completion_tokens = (completion_chars as f64 * TOKENS_PER_CHAR) as u64;
    let cost = prompt_tokens as f64 * PROMPT_COST_PER_1K / 1000.0
        + completion_tokens as f64 * COMPLETION_COST_PER_1K / 1000.0;

    UsageEstimate {
        prompt_tokens,
        completion_tokens,
        total_tokens: prompt_tokens + completion_tokens,
        cost,
    }
}

/// Running usage totals for one session. Reset only by an explicit clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageTotals {
    prompt_tokens: u64,
    completion_tokens: u64,
    total_tokens: u64,
    total_cost: f64,
}

impl UsageTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one exchange's estimate.
    pub fn add(&mut self, estimate: UsageEstimate) {
        self.prompt_tokens = self.prompt_tokens.saturating_add(estimate.prompt_tokens);
        self.completion_tokens = self
            .completion_tokens
            .saturating_add(estimate.completion_tokens);
        self.total_tokens = self.total_tokens.saturating_add(estimate.total_tokens);
        self.total_cost += estimate.cost;
    }

    pub fn prompt_tokens(&self) -> u64 {
        self.prompt_tokens
    }

    pub fn completion_tokens(&self) -> u64 {
        self.completion_tokens
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn is_zero(&self) -> bool {
        self.total_tokens == 0 && self.total_cost == 0.0
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Format a token count with commas (e.g., "45,230").
    pub fn format_tokens(tokens: u64) -> String {
        let s = tokens.to_string();
        let mut result = String::new();
        let chars: Vec<char> = s.chars().collect();
        for (i, c) in chars.iter().enumerate() {
            if i > 0 && (chars.len() - i) % 3 == 0 {
                result.push(',');
            }
            result.push(*c);
        }
        result
    }

    /// Format a cost as currency (e.g., "$0.000105").
    pub fn format_cost(cost: f64) -> String {
        if cost < 0.01 {
            format!("${:.6}", cost)
        } else if cost < 1.0 {
            format!("${:.4}", cost)
        } else {
            format!("${:.2}", cost)
        }
    }

    /// Generate the session usage report shown by the `/usage` command.
    pub fn render_breakdown(&self) -> String {
        let separator = "──────────────────────────────────────────────";

        let mut output = String::new();
        output.push_str("Session Usage (estimated)\n");
        output.push_str(separator);
        output.push_str("\n\n");

        output.push_str(&format!(
            "Prompt tokens:      {:>10}\n",
            Self::format_tokens(self.prompt_tokens)
        ));
        output.push_str(&format!(
            "Completion tokens:  {:>10}\n",
            Self::format_tokens(self.completion_tokens)
        ));
        output.push_str(separator);
        output.push('\n');
        output.push_str(&format!(
            "Total tokens:       {:>10}\n",
            Self::format_tokens(self.total_tokens)
        ));
        output.push_str(&format!(
            "Total cost:         {:>10}\n\n",
            Self::format_cost(self.total_cost)
        ));

        output.push_str("Token counts are a character-based estimate, not real tokenization.");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_known_values() {
        let est = estimate(100, 50);
        assert_eq!(est.prompt_tokens, 70);
        assert_eq!(est.completion_tokens, 35);
        assert_eq!(est.total_tokens, 105);

        let expected_cost = 70.0 * 0.0015 / 1000.0 + 35.0 * 0.002 / 1000.0;
        assert!((est.cost - expected_cost).abs() < 1e-12);
    }

    #[test]
    fn test_estimate_zero() {
        let est = estimate(0, 0);
        assert_eq!(est.prompt_tokens, 0);
        assert_eq!(est.completion_tokens, 0);
        assert_eq!(est.total_tokens, 0);
        assert_eq!(est.cost, 0.0);
    }

    #[test]
    fn test_estimate_floors_fractional_tokens() {
        // 5 chars * 0.7 = 3.5 -> 3
        let est = estimate(5, 5);
        assert_eq!(est.prompt_tokens, 3);
        assert_eq!(est.completion_tokens, 3);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        assert_eq!(estimate(123, 456), estimate(123, 456));
    }

    #[test]
    fn test_totals_start_at_zero() {
        let totals = UsageTotals::new();
        assert_eq!(totals.prompt_tokens(), 0);
        assert_eq!(totals.completion_tokens(), 0);
        assert_eq!(totals.total_tokens(), 0);
        assert_eq!(totals.total_cost(), 0.0);
        assert!(totals.is_zero());
    }

    #[test]
    fn test_totals_accumulate() {
        let mut totals = UsageTotals::new();
        totals.add(estimate(100, 50));
        totals.add(estimate(100, 50));

        assert_eq!(totals.prompt_tokens(), 140);
        assert_eq!(totals.completion_tokens(), 70);
        assert_eq!(totals.total_tokens(), 210);
        assert!(totals.total_cost() > 0.0);
        assert!(!totals.is_zero());
    }

    #[test]
    fn test_totals_reset() {
        let mut totals = UsageTotals::new();
        totals.add(estimate(100, 50));
        totals.reset();
        assert!(totals.is_zero());
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let mut totals = UsageTotals::new();
        totals.add(UsageEstimate {
            prompt_tokens: u64::MAX - 10,
            completion_tokens: 0,
            total_tokens: u64::MAX - 10,
            cost: 0.0,
        });
        totals.add(UsageEstimate {
            prompt_tokens: 100,
            completion_tokens: 0,
            total_tokens: 100,
            cost: 0.0,
        });
        assert_eq!(totals.prompt_tokens(), u64::MAX);
    }

    #[test]
    fn test_format_tokens() {
        assert_eq!(UsageTotals::format_tokens(0), "0");
        assert_eq!(UsageTotals::format_tokens(999), "999");
        assert_eq!(UsageTotals::format_tokens(1000), "1,000");
        assert_eq!(UsageTotals::format_tokens(45230), "45,230");
    }

    #[test]
    fn test_format_cost() {
        assert_eq!(UsageTotals::format_cost(0.000105), "$0.000105");
        assert_eq!(UsageTotals::format_cost(0.5), "$0.5000");
        assert_eq!(UsageTotals::format_cost(1.61), "$1.61");
    }

    #[test]
    fn test_render_breakdown_contains_expected_parts() {
        let mut totals = UsageTotals::new();
        totals.add(estimate(100, 50));

        let breakdown = totals.render_breakdown();
        assert!(breakdown.contains("Session Usage"));
        assert!(breakdown.contains("Prompt tokens:"));
        assert!(breakdown.contains("Completion tokens:"));
        assert!(breakdown.contains("Total tokens:"));
        assert!(breakdown.contains("Total cost:"));
        assert!(breakdown.contains("estimate"));
    }
}
