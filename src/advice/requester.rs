use super::types::{AdviceClient, AdviceQuery, AdviceResponse, AdviceSite};
use super::AdviceError;

/// Sends user questions to the advice service under a given persona.
pub struct AdviceRequester<C: AdviceClient> {
    client: C,
}

impl<C: AdviceClient> AdviceRequester<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Ask the service and return its reply verbatim.
    ///
    /// The query is assumed to be non-empty; see [`AdviceQuery::parse`].
    pub fn request_advice(&self, query: &str, role_context: &str) -> Result<String, AdviceError> {
        tracing::debug!(query_len = query.len(), "Sending advice request");
        self.client.complete(role_context, query)
    }

    /// Ask on behalf of a call site. Any failure becomes the site's fallback.
    pub fn advise(&self, site: AdviceSite, query: &AdviceQuery) -> AdviceResponse {
        match self.request_advice(query.as_str(), site.role_context()) {
            Ok(text) => {
                tracing::info!(site = ?site, "Advice generated");
                AdviceResponse::Generated(text)
            }
            Err(e) => {
                tracing::warn!(site = ?site, error = %e, "Advice service failed, using fallback");
                AdviceResponse::Fallback(site.fallback_text().to_string())
            }
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}
