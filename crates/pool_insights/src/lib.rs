//! Ride insights: cost, safety and impact narrative for a pooled trip.
//!
//! The narrative comes from a remote generative model (Gemini with Google Maps
//! grounding). Any failure along the way (missing credential, transport,
//! HTTP status, unparsable payload) is absorbed by [`InsightsNarrator`],
//! which substitutes a deterministic local narrative built from the same
//! ride details. Callers never see an error.

pub mod client;
pub mod error;
pub mod fallback;
pub mod model;
pub mod narrator;
pub mod parser;
pub mod prompt;

mod wire;


pub use client::{GeminiClient, GeminiConfig};
pub use error::InsightsError;
pub use model::{AnalysisResponse, GroundingSource, RideDetails};
pub use narrator::{InsightsNarrator, NarrativeSource};
