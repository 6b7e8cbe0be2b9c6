use tracing::{info, warn};

use crate::client::{GeminiClient, GeminiConfig};
use crate::error::InsightsError;
use crate::fallback::fallback_analysis;
use crate::model::{AnalysisResponse, RideDetails};

/// Anything that can produce a narrative for a ride, possibly failing.
pub trait NarrativeSource: Send + Sync {
    fn generate(&self, details: &RideDetails) -> Result<AnalysisResponse, InsightsError>;
}

/// Narrative front door: remote source when available, local fallback
/// otherwise.
pub struct InsightsNarrator {
    source: Option<Box<dyn NarrativeSource>>,
}

impl InsightsNarrator {
    pub fn new(source: Box<dyn NarrativeSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Narrator that always answers with the local fallback.
    pub fn offline() -> Self {
        Self { source: None }
    }

    /// Gemini-backed narrator. Without a usable key or client it degrades to
    /// [`InsightsNarrator::offline`].
    pub fn from_config(api_key: Option<&str>, config: &GeminiConfig) -> Self {
        let Some(api_key) = api_key else {
            info!("no narrative API key configured, using local insights");
            return Self::offline();
        };

        match GeminiClient::new(api_key, config) {
            Ok(client) => Self::new(Box::new(client)),
            Err(error) => {
                warn!(%error, "narrative client unavailable, using local insights");
                Self::offline()
            }
        }
    }

    pub fn is_online(&self) -> bool {
        self.source.is_some()
    }

    pub fn mobility_insights(&self, details: &RideDetails) -> AnalysisResponse {
        let Some(source) = self.source.as_ref() else {
            return fallback_analysis(details);
        };

        match source.generate(details) {
            Ok(analysis) => analysis,
            Err(error) => {
                warn!(
                    %error,
                    college = %details.college_name,
                    provider = %details.provider,
                    "failed to generate mobility insights, using fallback"
                );
                fallback_analysis(details)
            }
        }
    }
}
