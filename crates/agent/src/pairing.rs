//! Pairing recommendations for an opened menu item.
//!
//! [`PairingService::recommend`] never fails: any transport, parse or
//! contract problem with the model is logged and replaced by a house pairing
//! picked from the same complementary pool. The only place the fallback
//! identifies itself is the `reason` text, which carries
//! [`offline_marker`].

use std::sync::Arc;
use std::time::Duration;

use lounge_core::{
    Catalog, Language, MenuItem, PairingOutcome, PairingRecommendation, PairingSection,
    PairingTicket,
};
use rand::Rng;
use tracing::{info, warn};

use crate::llm::{CompletionRequest, LlmClient, LlmError};
use crate::prompt::{build_prompt, response_schema};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(12);
pub const DEFAULT_VENUE: &str = "The Botanical Lounge";

/// Source of the fallback candidate index.
pub trait CandidatePicker: Send + Sync {
    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn pick(&self, len: usize) -> usize;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPicker;

impl CandidatePicker for UniformPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

pub fn offline_marker(lang: Language) -> &'static str {
    match lang {
        Language::Es => "(Modo Offline)",
        Language::En => "(Offline Mode)",
    }
}

pub struct PairingService {
    client: Arc<dyn LlmClient>,
    catalog: Arc<Catalog>,
    picker: Arc<dyn CandidatePicker>,
    venue: String,
    timeout: Duration,
}

impl PairingService {
    pub fn new(client: Arc<dyn LlmClient>, catalog: Arc<Catalog>) -> Self {
        Self {
            client,
            catalog,
            picker: Arc::new(UniformPicker),
            venue: DEFAULT_VENUE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_picker(mut self, picker: Arc<dyn CandidatePicker>) -> Self {
        self.picker = picker;
        self
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn recommend(
        &self,
        item: &MenuItem,
        section: PairingSection,
        lang: Language,
    ) -> PairingRecommendation {
        let candidates = self.catalog.pairing_pool(section);
        if candidates.is_empty() {
            warn!(
                event_name = "pairing.pool_empty",
                item_id = %item.id,
                section = ?section,
                "no complementary items to pair with"
            );
            return unavailable(lang);
        }

        match self.request(item, section, lang, candidates).await {
            Ok(recommendation) => {
                info!(
                    event_name = "pairing.recommended",
                    item_id = %item.id,
                    lang = %lang,
                    suggested_item = %recommendation.suggested_item,
                    "pairing recommendation received"
                );
                recommendation
            }
            Err(error) => {
                warn!(
                    event_name = "pairing.fallback",
                    item_id = %item.id,
                    lang = %lang,
                    error_kind = error.kind(),
                    error = %error,
                    "pairing request failed; serving house pairing"
                );
                self.fallback(candidates, lang)
            }
        }
    }

    /// Resolves a detail-view ticket. The outcome still has to be applied
    /// to the view, which drops it if the visitor has moved on.
    pub async fn fulfill(&self, ticket: PairingTicket) -> PairingOutcome {
        let recommendation =
            self.recommend(ticket.item(), ticket.section(), ticket.language()).await;
        PairingOutcome { ticket, recommendation }
    }

    async fn request(
        &self,
        item: &MenuItem,
        section: PairingSection,
        lang: Language,
        candidates: &[MenuItem],
    ) -> Result<PairingRecommendation, LlmError> {
        let request = CompletionRequest {
            prompt: build_prompt(item, section, lang, candidates, &self.venue),
            response_schema: response_schema(),
        };

        let raw = tokio::time::timeout(self.timeout, self.client.complete(&request))
            .await
            .map_err(|_| {
                LlmError::TransportFailure(format!(
                    "no response within {}ms",
                    self.timeout.as_millis()
                ))
            })??;

        parse_recommendation(&raw, candidates, lang)
    }

    fn fallback(&self, candidates: &[MenuItem], lang: Language) -> PairingRecommendation {
        let index = self.picker.pick(candidates.len()).min(candidates.len() - 1);
        let suggested_item = candidates[index].display_name(lang).to_string();

        let (recommendation, reason) = match lang {
            Language::Es => (
                "Este acompañamiento realza los matices de tu elección, creando una experiencia equilibrada y sofisticada en nuestro lounge.",
                "Armonía de sabores seleccionada por nuestro criterio de sommelier",
            ),
            Language::En => (
                "This accompaniment enhances the nuances of your choice, creating a balanced and sophisticated experience in our lounge.",
                "Harmony of flavors selected by our sommelier criteria",
            ),
        };

        PairingRecommendation {
            suggested_item,
            recommendation: recommendation.to_string(),
            reason: format!("{reason} {}.", offline_marker(lang)),
        }
    }
}

fn unavailable(lang: Language) -> PairingRecommendation {
    let (suggested_item, recommendation, reason) = match lang {
        Language::Es => (
            "Sin maridaje disponible",
            "Pregunta a nuestro equipo por la sugerencia del día.",
            "No hay productos con los que maridar esta elección",
        ),
        Language::En => (
            "No pairing available",
            "Ask our team for today's suggestion.",
            "There are no items to pair with this choice",
        ),
    };

    PairingRecommendation {
        suggested_item: suggested_item.to_string(),
        recommendation: recommendation.to_string(),
        reason: format!("{reason} {}.", offline_marker(lang)),
    }
}

/// Parses the model's answer and checks it against the candidate list.
///
/// An accepted suggestion is rewritten to the catalog spelling of the
/// matching candidate.
pub fn parse_recommendation(
    raw: &str,
    candidates: &[MenuItem],
    lang: Language,
) -> Result<PairingRecommendation, LlmError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    let mut parsed = serde_json::from_str::<PairingRecommendation>(raw)
        .map_err(|error| LlmError::MalformedResponse(error.to_string()))?;

    for (field, value) in [
        ("suggestedItem", &parsed.suggested_item),
        ("recommendation", &parsed.recommendation),
        ("reason", &parsed.reason),
    ] {
        if value.trim().is_empty() {
            return Err(LlmError::MalformedResponse(format!("field `{field}` is empty")));
        }
    }

    let wanted = normalize(&parsed.suggested_item);
    let canonical = candidates
        .iter()
        .map(|candidate| candidate.display_name(lang))
        .find(|name| normalize(name) == wanted)
        .ok_or_else(|| {
            LlmError::MalformedResponse(format!(
                "suggested item `{}` is not in the pairing pool",
                parsed.suggested_item
            ))
        })?;

    parsed.suggested_item = canonical.to_string();
    Ok(parsed)
}

fn normalize(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}
