use aisummary_common::{Result, SummaryConfig};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::prompts::summary_prompt;
use crate::registry::ProviderRegistry;
use crate::sanitize::{sanitize, truncate_at_boundary, ELLIPSIS};
use crate::types::{SummaryRequest, SummaryResult};

/// Summary generator delegating to the configured chat provider
pub struct SummaryGenerator {
    registry: Arc<ProviderRegistry>,
}

impl SummaryGenerator {
    /// Create new summary generator
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    /// Generate a summary for the given request
    ///
    /// Never fails across this boundary: any underlying error is wrapped
    /// into a failed [`SummaryResult`] with a descriptive message.
    pub async fn generate(
        &self,
        request: &SummaryRequest,
        settings: &SummaryConfig,
    ) -> SummaryResult {
        match self.try_generate(request, settings).await {
            Ok(text) => SummaryResult::ok(text),
            Err(e) => {
                warn!("Summary generation failed: {}", e);
                SummaryResult::err(format!("Failed to generate summary: {}", e))
            }
        }
    }

    async fn try_generate(
        &self,
        request: &SummaryRequest,
        settings: &SummaryConfig,
    ) -> Result<String> {
        // Find the default selected provider and model
        let (provider, selection) = self.registry.resolve_default()?;

        let text = sanitize(&request.raw_text);
        info!(
            "Generating summary - Provider: {}, Model: {}, Text length: {} chars",
            selection.provider_id,
            selection.model_id,
            text.len()
        );

        let prompt = summary_prompt(
            &settings.prompt,
            request.min_length,
            request.max_length,
            &text,
        );

        let response = provider
            .chat(&prompt.system, &prompt.user, &selection.model_id)
            .await?;

        debug!("Provider response length: {} chars", response.len());
        Ok(enforce_length(response, request.max_length))
    }
}

/// Ensure the summary stays within the upper length bound
///
/// Responses longer than `max_length` are truncated with an ellipsis
/// marker. Short responses pass through unchanged; only the upper bound
/// is enforced.
fn enforce_length(summary: String, max_length: usize) -> String {
    let bounded = if summary.len() > max_length {
        let cut = max_length.saturating_sub(ELLIPSIS.len());
        format!("{}{}", truncate_at_boundary(&summary, cut), ELLIPSIS)
    } else {
        summary
    };

    bounded.trim().to_string()
}
