use anyhow::{bail, Context};
use pool_insights::{GeminiConfig, InsightsNarrator};
use pool_store::{PoolSink, SupabaseConfig, SupabaseStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::cli::GlobalArgs;

/// Resolved runtime configuration for one invocation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub seed: Option<u64>,
    pub gemini_api_key: Option<String>,
    pub gemini: GeminiConfig,
    /// `None` when either Supabase value is missing.
    pub supabase: Option<SupabaseConfig>,
}

impl TryFrom<&GlobalArgs> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(args: &GlobalArgs) -> anyhow::Result<Self> {
        if args.gemini_model.trim().is_empty() {
            bail!("GEMINI_MODEL must not be empty");
        }
        if args.gemini_endpoint.trim().is_empty() {
            bail!("GEMINI_ENDPOINT must not be empty");
        }

        let gemini_api_key = [args.gemini_api_key.as_deref(), args.api_key.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|key| !key.is_empty())
            .map(str::to_string);

        Ok(Self {
            seed: args.seed,
            gemini_api_key,
            gemini: GeminiConfig {
                endpoint: args.gemini_endpoint.trim().to_string(),
                model: args.gemini_model.trim().to_string(),
                ..GeminiConfig::default()
            },
            supabase: SupabaseConfig::from_parts(
                args.supabase_url.as_deref(),
                args.supabase_anon_key.as_deref(),
            ),
        })
    }
}

impl AppConfig {
    pub fn narrator(&self) -> InsightsNarrator {
        InsightsNarrator::from_config(self.gemini_api_key.as_deref(), &self.gemini)
    }

    pub fn sink(&self) -> anyhow::Result<PoolSink> {
        let Some(supabase) = &self.supabase else {
            info!("SUPABASE_URL or SUPABASE_ANON_KEY not set, pools will not be saved");
            return Ok(PoolSink::disabled());
        };
        let store = SupabaseStore::new(supabase).context("invalid Supabase configuration")?;
        Ok(PoolSink::new(Box::new(store)))
    }

    /// Random source for identities and the demo queue. `stream` keeps
    /// seeded runs from reusing the allocator's sequence.
    pub fn rng(&self, stream: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ stream),
            None => StdRng::from_entropy(),
        }
    }
}
