//! Deterministic list generation and proptest strategies.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use randlist_core::RandList;

/// Generate a seeded list of `len` nodes, each with a uniformly random
/// auxiliary link into the same list (self links included).
///
/// Deterministic for a given `(seed, len)` pair.
pub fn random_list(seed: u64, len: usize) -> RandList {
    let mut rng = StdRng::seed_from_u64(seed);
    RandList::from_payloads((0..len).map(|i| format!("Node {}", i + 1)), |_, n| {
        if n == 0 {
            None
        } else {
            Some(rng.gen_range(0..n))
        }
    })
}

/// Strategy for a single payload line.
///
/// Printable ASCII so payloads never contain a newline, filtered so no
/// payload reads as the sentinel (a format limitation of the encoding).
pub fn payload() -> impl Strategy<Value = String> {
    "[ -~]{0,32}".prop_filter("payload must not read as the sentinel", |s| s != "-1")
}

fn targets_for(len: usize) -> BoxedStrategy<Vec<Option<usize>>> {
    if len == 0 {
        Just(Vec::new()).boxed()
    } else {
        prop::collection::vec(prop::option::of(0..len), len).boxed()
    }
}

/// Parameters for building a list: payloads plus one optional auxiliary
/// target position per node.
#[derive(Debug, Clone)]
pub struct ListParams {
    pub payloads: Vec<String>,
    pub rand_targets: Vec<Option<usize>>,
}

impl Arbitrary for ListParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::collection::vec(payload(), 0..48)
            .prop_flat_map(|payloads| {
                let targets = targets_for(payloads.len());
                (Just(payloads), targets)
            })
            .prop_map(|(payloads, rand_targets)| ListParams {
                payloads,
                rand_targets,
            })
            .boxed()
    }
}

/// Build a list from parameters.
pub fn list_from_params(params: &ListParams) -> RandList {
    RandList::from_payloads(params.payloads.iter().cloned(), |position, _| {
        params.rand_targets.get(position).copied().flatten()
    })
}
