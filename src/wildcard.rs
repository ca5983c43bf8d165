//! Wildcard DNS probing.
//!
//! A zone with a catch-all record answers for any name under it, which makes
//! absence-of-record evidence unreliable for that zone. The prober resolves
//! one randomized, almost-certainly-nonexistent subdomain; an address answer
//! means the zone is wildcarded.

use std::sync::Mutex;

use hickory_resolver::proto::rr::RecordType;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::dns::{RecordStatus, Resolve};

/// Probes zones for catch-all DNS configuration.
///
/// The random source is owned by the prober rather than drawn from ambient
/// global state, so tests can pin it with [`WildcardProber::with_seed`].
/// Randomness here only needs to dodge collisions with real names; it is not
/// security-sensitive.
pub struct WildcardProber {
    rng: Mutex<SmallRng>,
}

impl WildcardProber {
    /// Creates a prober seeded from the operating system.
    pub fn new() -> Self {
        WildcardProber {
            rng: Mutex::new(SmallRng::from_os_rng()),
        }
    }

    /// Creates a prober with a fixed seed, for deterministic tests.
    pub fn with_seed(seed: u64) -> Self {
        WildcardProber {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }

    /// Builds the synthetic probe name for `domain`.
    pub fn probe_name(&self, domain: &str) -> String {
        let n: u32 = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .random_range(0..100_000);
        format!("wildcard-{n}.{domain}")
    }

    /// Returns true when a random subdomain of `domain` resolves to an address.
    ///
    /// Only the address record type is queried. Probe failures of any kind
    /// count as "no wildcard" -- the flag is advisory and never blocks a scan.
    pub async fn probe(&self, resolver: &dyn Resolve, domain: &str) -> bool {
        let probe_name = self.probe_name(domain);
        match resolver.resolve(&probe_name, &[RecordType::A]).await {
            Ok(result) => result
                .record("A")
                .map(|a| a.status == RecordStatus::NoError && !a.values.is_empty())
                .unwrap_or(false),
            Err(_) => false,
        }
    }
}

impl Default for WildcardProber {
    fn default() -> Self {
        Self::new()
    }
}
