//! Gemini `generateContent` request/response shapes (only the fields we use).

use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub(crate) contents: Vec<Content>,
    pub(crate) tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tool_config: Option<ToolConfig>,
}

#[derive(Serialize, Deserialize, Default)]
pub(crate) struct Content {
    #[serde(default)]
    pub(crate) parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Default)]
pub(crate) struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Tool {
    pub(crate) google_maps: GoogleMaps,
}

#[derive(Serialize)]
pub(crate) struct GoogleMaps {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ToolConfig {
    pub(crate) retrieval_config: RetrievalConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RetrievalConfig {
    pub(crate) lat_lng: LatLngLiteral,
}

#[derive(Serialize)]
pub(crate) struct LatLngLiteral {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
}

#[derive(Deserialize, Default)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub(crate) candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    #[serde(default)]
    pub(crate) content: Option<Content>,
    #[serde(default)]
    pub(crate) grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroundingMetadata {
    #[serde(default)]
    pub(crate) grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize, Default)]
pub(crate) struct GroundingChunk {
    #[serde(default)]
    pub(crate) maps: Option<MapsChunk>,
}

#[derive(Deserialize, Default)]
pub(crate) struct MapsChunk {
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) uri: Option<String>,
}

impl GenerateContentRequest {
    pub(crate) fn grounded(prompt: String, origin: Option<(f64, f64)>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: Some(prompt) }],
            }],
            tools: vec![Tool {
                google_maps: GoogleMaps {},
            }],
            tool_config: origin.map(|(latitude, longitude)| ToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: LatLngLiteral {
                        latitude,
                        longitude,
                    },
                },
            }),
        }
    }
}
