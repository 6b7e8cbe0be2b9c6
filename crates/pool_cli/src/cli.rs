use clap::{Args, Parser, Subcommand};
use pool_core::{Gender, Provider};
use pool_insights::client::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "studentpool",
    version,
    about = "Pool students into shared cab rides",
    long_about = "Allocate capped student ride pools, narrate their economics,\n\
                  and drive the accept flow from the command line."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Gemini API key. Without one, insights use the offline narrative.
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Older name for the Gemini key, read when `GEMINI_API_KEY` is unset.
    #[arg(long = "api-key", global = true, env = "API_KEY", hide_env_values = true, hide = true)]
    pub api_key: Option<String>,

    #[arg(long, global = true, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub gemini_model: String,

    #[arg(long, global = true, env = "GEMINI_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub gemini_endpoint: String,

    /// Supabase project URL. Pools are saved only when the anon key is set too.
    #[arg(long, global = true, env = "SUPABASE_URL")]
    pub supabase_url: Option<String>,

    #[arg(long, global = true, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub supabase_anon_key: Option<String>,

    /// Seed for reproducible pools and identifiers
    #[arg(long, global = true, env = "STUDENTPOOL_SEED")]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Allocate a pool for one request and save it
    Match(MatchArgs),
    /// Narrate the economics of a pooled ride
    Insights(InsightsArgs),
    /// Go online as a driver and accept a queued request
    Driver(DriverArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TripArgs {
    #[arg(long)]
    pub college: String,

    #[arg(long)]
    pub destination: String,

    /// Uber, Ola or Rapido (case-insensitive)
    #[arg(long, default_value_t = Provider::Uber)]
    pub provider: Provider,

    /// Current latitude; the campus default is used without it
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    #[command(flatten)]
    pub trip: TripArgs,

    /// Riders already in your party, clamped to 1..=4
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub party_size: i32,

    /// Only pool with female riders (applies to female requesters)
    #[arg(long)]
    pub female_only: bool,

    /// Sign in under this name before matching
    #[arg(long, requires = "gender")]
    pub name: Option<String>,

    #[arg(long, requires = "gender")]
    pub email: Option<String>,

    /// male or female
    #[arg(long)]
    pub gender: Option<Gender>,
}

#[derive(Args, Debug, Clone)]
pub struct InsightsArgs {
    #[command(flatten)]
    pub trip: TripArgs,

    #[arg(long, default_value_t = 4)]
    pub students: u32,

    /// Total booking fare in rupees
    #[arg(long)]
    pub fare: f64,
}

#[derive(Args, Debug, Clone)]
pub struct DriverArgs {
    /// Only print the visible request queue
    #[arg(long)]
    pub list: bool,

    /// Request to accept; defaults to the first visible one
    #[arg(long)]
    pub request: Option<String>,

    /// Evict the rider at this 1-based roster position (repeatable)
    #[arg(long = "no-show", value_name = "POSITION")]
    pub no_show: Vec<usize>,

    /// Fare to split across the final roster
    #[arg(long)]
    pub fare: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_parses_provider_and_negative_party() {
        let cli = Cli::try_parse_from([
            "studentpool",
            "match",
            "--college",
            "IIT Bombay",
            "--destination",
            "Main Building",
            "--provider",
            "ola",
            "--party-size",
            "-3",
        ])
        .expect("parse");

        let Commands::Match(args) = cli.command else {
            panic!("expected match subcommand");
        };
        assert_eq!(args.trip.provider, Provider::Ola);
        assert_eq!(args.party_size, -3);
        assert!(!args.female_only);
    }

    #[test]
    fn name_requires_gender() {
        let result = Cli::try_parse_from([
            "studentpool",
            "match",
            "--college",
            "X",
            "--destination",
            "Y",
            "--name",
            "Asha",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let result = Cli::try_parse_from([
            "studentpool",
            "insights",
            "--college",
            "X",
            "--destination",
            "Y",
            "--fare",
            "300",
            "--provider",
            "bolt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn driver_collects_repeated_no_shows() {
        let cli = Cli::try_parse_from(["studentpool", "driver", "--no-show", "2", "--no-show", "4"])
            .expect("parse");
        let Commands::Driver(args) = cli.command else {
            panic!("expected driver subcommand");
        };
        assert_eq!(args.no_show, vec![2, 4]);
        assert!(args.request.is_none());
    }
}
