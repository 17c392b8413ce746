//! Home page text.

use crate::config::APP_NAME;

pub const FEATURES: &[&str] = &[
    "AI-Powered Symptom Tracking",
    "Microbiome Testing Integration",
    "Food and Lifestyle Journaling",
    "Personalized Treatment Plans",
    "Remote Doctor Consultation",
    "Gamification for User Engagement",
];

pub fn welcome_text() -> String {
    let mut text = format!(
        "Welcome to the {APP_NAME}\n\n\
         This platform helps you manage your gut health effectively. Features include:"
    );
    for feature in FEATURES {
        text.push_str("\n- ");
        text.push_str(feature);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_lists_every_feature() {
        let text = welcome_text();
        assert!(text.starts_with("Welcome to the Gut Health Management Platform"));
        for feature in FEATURES {
            assert!(text.contains(&format!("- {feature}")));
        }
    }
}
