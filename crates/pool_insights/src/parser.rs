use crate::error::InsightsError;
use crate::model::{AnalysisResponse, GroundingSource};
use crate::wire::GenerateContentResponse;

const JSON_FENCE_OPEN: &str = "```json\n";
const FENCE_CLOSE: &str = "\n```";

/// Locate the JSON payload inside free-form model text.
///
/// Tried in order: a fenced ```` ```json ```` block, the span from the first
/// `{` to the last `}`, and finally the whole text.
pub fn extract_json_block(text: &str) -> &str {
    if let Some(start) = text.find(JSON_FENCE_OPEN) {
        let body = &text[start + JSON_FENCE_OPEN.len()..];
        if let Some(end) = body.find(FENCE_CLOSE) {
            return &body[..end];
        }
    }

    match (text.find('{'), text.rfind('}')) {
        (Some(open), Some(close)) if open < close => &text[open..=close],
        _ => text,
    }
}

/// Concatenated text parts of the first candidate.
pub(crate) fn response_text(resp: &GenerateContentResponse) -> String {
    resp.candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect::<String>()
        })
        .unwrap_or_default()
}

/// Maps grounding sources of the first candidate.
pub(crate) fn grounding_sources(resp: &GenerateContentResponse) -> Vec<GroundingSource> {
    resp.candidates
        .first()
        .and_then(|candidate| candidate.grounding_metadata.as_ref())
        .map(|metadata| {
            metadata
                .grounding_chunks
                .iter()
                .filter_map(|chunk| chunk.maps.as_ref())
                .map(|maps| GroundingSource {
                    title: maps.title.clone(),
                    uri: maps.uri.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn parse_generate_response(
    resp: GenerateContentResponse,
) -> Result<AnalysisResponse, InsightsError> {
    let text = response_text(&resp);
    if text.trim().is_empty() {
        return Err(InsightsError::EmptyResponse);
    }

    let mut analysis: AnalysisResponse = serde_json::from_str(extract_json_block(&text))?;
    analysis.grounding_sources = grounding_sources(&resp);
    Ok(analysis)
}
