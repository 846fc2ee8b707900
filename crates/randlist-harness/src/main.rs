//! Demo and timing harness.
//!
//! Runs the worked three-node scenario through a real file, then times
//! encode/decode over growing list sizes and reports allocator totals.

use std::time::Instant;

use anyhow::{ensure, Context, Result};

use randlist::alloc::CountingAllocator;
use randlist::{load_from_path, save_to_path, RandList};
use randlist_testkit::generators::random_list;
use randlist_testkit::rand_positions;

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator::new();

const DEMO_PATH: &str = "serialized_list.txt";
const PERF_PATH: &str = "perf_serialized_list.txt";

const PERF_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];
const PERF_SEED: u64 = 0xC0FFEE;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    demo().context("demo round trip failed")?;
    perf().context("timing run failed")?;

    tracing::info!(
        total_allocated = ALLOC.total_allocated(),
        current_usage = ALLOC.current_usage(),
        "allocator bytes"
    );
    Ok(())
}

/// The worked scenario: three nodes, rand links 1->3, 2->1, 3->2.
fn demo() -> Result<()> {
    let mut list = RandList::new();
    let node1 = list.push_back("Node 1");
    let node2 = list.push_back("Node 2");
    let node3 = list.push_back("Node 3");
    list.set_rand(node1, Some(node3))?;
    list.set_rand(node2, Some(node1))?;
    list.set_rand(node3, Some(node2))?;

    save_to_path(&list, DEMO_PATH)?;
    let decoded = load_from_path(DEMO_PATH)?;

    ensure!(decoded.len() == 3, "demo list length changed in transit");
    ensure!(
        rand_positions(&decoded) == [None, Some(0), Some(1)],
        "demo aliasing changed in transit"
    );
    tracing::info!(len = decoded.len(), path = DEMO_PATH, "demo round trip ok");
    Ok(())
}

/// Timed encode/decode over growing sizes.
fn perf() -> Result<()> {
    for size in PERF_SIZES {
        let list = random_list(PERF_SEED ^ size as u64, size);

        let start = Instant::now();
        save_to_path(&list, PERF_PATH)?;
        let encode_elapsed = start.elapsed();

        let start = Instant::now();
        let decoded = load_from_path(PERF_PATH)?;
        let decode_elapsed = start.elapsed();

        ensure!(decoded.len() == size, "decoded length mismatch at {size}");

        tracing::info!(
            size,
            encode_ms = encode_elapsed.as_secs_f64() * 1_000.0,
            decode_ms = decode_elapsed.as_secs_f64() * 1_000.0,
            "codec timings"
        );
    }
    Ok(())
}
