use pool_core::Provider;
use serde::{Deserialize, Serialize};

/// Trip parameters the narrative is generated for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideDetails {
    pub college_name: String,
    pub destination: String,
    pub student_count: u32,
    pub total_fare: f64,
    pub provider: Provider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_lng: Option<f64>,
}

impl RideDetails {
    pub fn new(
        college_name: impl Into<String>,
        destination: impl Into<String>,
        student_count: u32,
        total_fare: f64,
        provider: Provider,
    ) -> Self {
        Self {
            college_name: college_name.into(),
            destination: destination.into(),
            student_count,
            total_fare,
            provider,
            current_lat: None,
            current_lng: None,
        }
    }

    pub fn with_origin(self, lat: f64, lng: f64) -> Self {
        Self {
            current_lat: Some(lat),
            current_lng: Some(lng),
            ..self
        }
    }

    /// Origin as `(lat, lng)` when both coordinates are known.
    pub fn origin(&self) -> Option<(f64, f64)> {
        Some((self.current_lat?, self.current_lng?))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Structured narrative. Every text field is required when parsed from a
/// model response; `grounding_sources` is filled from grounding metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub split_suggestion: String,
    pub environmental_benefits: String,
    pub economic_impact: String,
    pub safety_measures: Vec<String>,
    pub feasibility_analysis: String,
    pub weekly_savings: String,
    pub integration_flow: String,
    pub optimization_logic: String,
    #[serde(default)]
    pub grounding_sources: Vec<GroundingSource>,
}
