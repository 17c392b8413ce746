//! Gamification: points for engagement.

/// Activities that earn points.
pub const EARNING_RULES: &[&str] = &[
    "Logging symptoms",
    "Logging food and lifestyle journals",
    "Following treatment plans",
];

/// Confirmation shown after redeeming.
pub fn redeem_points(points: u32) -> String {
    tracing::info!(points, "Points redeemed");
    format!("Points redeemed successfully! You have {points} points remaining.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redeem_message_includes_points() {
        assert_eq!(
            redeem_points(10),
            "Points redeemed successfully! You have 10 points remaining."
        );
    }

    #[test]
    fn redeem_zero_points() {
        assert!(redeem_points(0).contains("You have 0 points"));
    }

    #[test]
    fn three_ways_to_earn() {
        assert_eq!(EARNING_RULES.len(), 3);
    }
}
