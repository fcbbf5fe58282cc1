//! Test data generation for benchmarks.
//!
//! Generators are seeded so runs are reproducible.

use livequery_core::{CustomVariables, CustomVarsColumnDef, CustomVarsKind};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Variable names hosts draw from.
pub const VARIABLE_NAMES: [&str; 8] = [
    "PATH", "TAGS", "SITE", "OWNER", "RACK", "MAINTENANCE", "TIER", "NOTES",
];

/// Scale factor for benchmark data generation.
#[derive(Clone, Copy, Debug, Default)]
pub enum Scale {
    /// 100 hosts.
    Small,
    /// 10,000 hosts.
    #[default]
    Medium,
    /// 100,000 hosts.
    Large,
}

impl Scale {
    /// Number of hosts for this scale.
    pub fn count(&self) -> usize {
        match self {
            Scale::Small => 100,
            Scale::Medium => 10_000,
            Scale::Large => 100_000,
        }
    }
}

/// A host record with custom variables.
#[derive(Debug, Clone)]
pub struct BenchHost {
    pub name: String,
    pub vars: CustomVariables,
}

impl BenchHost {
    /// Accessor used by the host columns.
    pub fn vars(&self) -> &CustomVariables {
        &self.vars
    }

    /// A host column of the given kind, e.g. `host_custom_variables`.
    pub fn column(kind: CustomVarsKind) -> CustomVarsColumnDef<BenchHost> {
        CustomVarsColumnDef::for_table("host_", kind, BenchHost::vars)
    }
}

/// Generate `scale.count()` hosts, each defining a random subset of
/// [`VARIABLE_NAMES`].
pub fn generate_hosts(scale: Scale) -> Vec<BenchHost> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..scale.count())
        .map(|i| {
            let mut vars = CustomVariables::new();
            for name in VARIABLE_NAMES {
                if rng.gen_bool(0.6) {
                    let len = rng.gen_range(4..24);
                    let value: String = (&mut rng)
                        .sample_iter(&Alphanumeric)
                        .take(len)
                        .map(char::from)
                        .collect();
                    vars.insert(name, format!("/{value}"));
                }
            }
            BenchHost {
                name: format!("host_{i}"),
                vars,
            }
        })
        .collect()
}
