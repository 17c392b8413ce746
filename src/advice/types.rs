use serde::{Deserialize, Serialize};

use super::AdviceError;
use crate::models::InputError;

/// Chat-style text generation backend (allows mocking).
pub trait AdviceClient {
    /// Send a system message and a user message, return the reply text.
    fn complete(&self, system: &str, user: &str) -> Result<String, AdviceError>;
}

/// A free-text question that is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AdviceQuery(String);

impl AdviceQuery {
    /// Returns `None` for empty or whitespace-only input; callers should then
    /// skip the request entirely.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::try_from(raw.to_string()).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AdviceQuery {
    type Error = InputError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if raw.trim().is_empty() {
            Err(InputError::EmptyQuery)
        } else {
            Ok(Self(raw))
        }
    }
}

impl From<AdviceQuery> for String {
    fn from(query: AdviceQuery) -> Self {
        query.0
    }
}

/// What the user gets back from an advice request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum AdviceResponse {
    /// Reply text from the service, untouched.
    Generated(String),
    /// Static text for the call site, used when the service failed.
    Fallback(String),
}

impl AdviceResponse {
    pub fn text(&self) -> &str {
        match self {
            Self::Generated(text) | Self::Fallback(text) => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Places in the app that ask the service for advice. Each one carries its
/// own persona and its own fallback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceSite {
    TreatmentPlan,
    DoctorConsultation,
}

impl AdviceSite {
    /// System-role message sent ahead of the user's query.
    pub fn role_context(&self) -> &'static str {
        match self {
            Self::TreatmentPlan => {
                "You are a healthcare assistant providing personalized treatment plans for gut health."
            }
            Self::DoctorConsultation => "You are a virtual doctor specializing in gut health.",
        }
    }

    /// Heading shown above a generated reply.
    pub fn reply_heading(&self) -> &'static str {
        match self {
            Self::TreatmentPlan => "Treatment Plan:",
            Self::DoctorConsultation => "Doctor's Response:",
        }
    }

    /// Heading shown above the fallback text.
    pub fn fallback_heading(&self) -> &'static str {
        match self {
            Self::TreatmentPlan => "OpenAI API is unavailable. Here's some general advice:",
            Self::DoctorConsultation => "OpenAI API is unavailable. Here's some advice:",
        }
    }

    pub fn fallback_text(&self) -> &'static str {
        match self {
            Self::TreatmentPlan => concat!(
                "- **Stay Hydrated:** Drink plenty of water.\n",
                "- **Improve Diet:** Avoid processed foods and focus on whole foods.\n",
                "- **Stress Management:** Practice relaxation techniques like yoga or meditation.",
            ),
            Self::DoctorConsultation => concat!(
                "- **Monitor Symptoms:** Track any changes in your gut health.\n",
                "- **See a Professional:** Seek medical help if symptoms persist.",
            ),
        }
    }
}
