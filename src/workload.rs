//! Workload driver for exercising the store under load: random DAG
//! construction, reachability query storms, and scaling analysis.

use pods_core::Poset;
use pods_registry::PosetStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Statistics collected during a workload run
#[derive(Clone, Debug)]
pub struct WorkloadStats {
    pub posets: usize,
    pub elements_per_poset: usize,
    pub relations_attempted: usize,
    pub relations_accepted: usize,
    pub queries: usize,
    pub total_time: Duration,
    pub ops_per_second: f64,
}

impl WorkloadStats {
    pub fn print(&self) {
        println!("\n╔════════════════════════════════════════════════════════════╗");
        println!("║              Workload Statistics                           ║");
        println!("╠════════════════════════════════════════════════════════════╣");
        println!("║  Posets:                    {:>30} ║", self.posets);
        println!("║  Elements per Poset:        {:>30} ║", self.elements_per_poset);
        println!("║  Relations Attempted:       {:>30} ║", self.relations_attempted);
        println!("║  Relations Accepted:        {:>30} ║", self.relations_accepted);
        println!("║  Reachability Queries:      {:>30} ║", self.queries);
        println!("║  Total Time:                {:>29}s ║", format!("{:.3}", self.total_time.as_secs_f64()));
        println!("║  Operations/Second:         {:>30.0} ║", self.ops_per_second);
        println!("╚════════════════════════════════════════════════════════════╝");
    }
}

fn label(i: usize) -> String {
    format!("e{}", i)
}

/// Populate one poset with `elements` values and `edge_attempts` random
/// relation insertions. Rejected insertions (reflexive, implied, or
/// cycle-closing) are part of the exercise: the engine must refuse them
/// without disturbing anything.
fn build_random_dag(
    store: &mut PosetStore,
    id: pods_registry::PosetId,
    elements: usize,
    edge_attempts: usize,
    rng: &mut StdRng,
) -> (usize, usize) {
    for i in 0..elements {
        store
            .insert(id, &label(i))
            .expect("freshly labeled element should insert");
    }

    let mut accepted = 0;
    for _ in 0..edge_attempts {
        let a = rng.gen_range(0..elements);
        let b = rng.gen_range(0..elements);
        if store.order(id, &label(a), &label(b)).is_ok() {
            accepted += 1;
        }
    }
    (edge_attempts, accepted)
}

/// Multi-poset workload: build random DAGs across the store, then fire a
/// query storm at them.
pub fn workload_store(
    posets: usize,
    elements: usize,
    edge_attempts: usize,
    queries: usize,
) -> WorkloadStats {
    let mut rng = StdRng::seed_from_u64(7);
    let mut store = PosetStore::new();
    let start = Instant::now();

    let ids: Vec<_> = (0..posets).map(|_| store.create()).collect();
    let mut attempted_total = 0;
    let mut accepted_total = 0;
    for &id in &ids {
        let (attempted, accepted) =
            build_random_dag(&mut store, id, elements, edge_attempts, &mut rng);
        attempted_total += attempted;
        accepted_total += accepted;
    }

    for _ in 0..queries {
        let id = ids[rng.gen_range(0..ids.len())];
        let a = label(rng.gen_range(0..elements));
        let b = label(rng.gen_range(0..elements));
        let _ = store.holds(id, &a, &b).expect("labels are live");
    }

    let total_time = start.elapsed();
    let total_ops = posets * elements + attempted_total + queries;
    WorkloadStats {
        posets,
        elements_per_poset: elements,
        relations_attempted: attempted_total,
        relations_accepted: accepted_total,
        queries,
        total_time,
        ops_per_second: total_ops as f64 / total_time.as_secs_f64(),
    }
}

/// Churn workload on a single poset: interleaved element removal and
/// re-insertion against a random DAG, verifying the count afterwards.
pub fn workload_churn(elements: usize, edge_attempts: usize, rounds: usize) -> WorkloadStats {
    let mut rng = StdRng::seed_from_u64(11);
    let mut poset = Poset::new();
    let start = Instant::now();

    for i in 0..elements {
        poset.insert(&label(i)).expect("fresh label");
    }
    let mut attempted = 0;
    let mut accepted = 0;
    for _ in 0..edge_attempts {
        let a = rng.gen_range(0..elements);
        let b = rng.gen_range(0..elements);
        attempted += 1;
        if poset.order(&label(a), &label(b)).is_ok() {
            accepted += 1;
        }
    }

    for _ in 0..rounds {
        let victim = rng.gen_range(0..elements);
        poset.remove(&label(victim)).expect("victim is live");
        poset.insert(&label(victim)).expect("victim was just removed");
    }
    assert_eq!(poset.len(), elements);

    let total_time = start.elapsed();
    let total_ops = elements + attempted + 2 * rounds;
    WorkloadStats {
        posets: 1,
        elements_per_poset: elements,
        relations_attempted: attempted,
        relations_accepted: accepted,
        queries: 0,
        total_time,
        ops_per_second: total_ops as f64 / total_time.as_secs_f64(),
    }
}

/// Scaling analysis: how query cost grows with DAG size.
pub fn workload_scaling(max_elements: usize, step: usize) {
    let mut rng = StdRng::seed_from_u64(13);
    println!("\n  {:>10}  {:>12}  {:>14}", "elements", "edges", "10k queries");

    let mut size = step;
    while size <= max_elements {
        let mut store = PosetStore::new();
        let id = store.create();
        let (_, accepted) = build_random_dag(&mut store, id, size, size * 4, &mut rng);

        let start = Instant::now();
        for _ in 0..10_000 {
            let a = label(rng.gen_range(0..size));
            let b = label(rng.gen_range(0..size));
            let _ = store.holds(id, &a, &b).expect("labels are live");
        }
        let elapsed = start.elapsed();
        println!(
            "  {:>10}  {:>12}  {:>13}ms",
            size,
            accepted,
            elapsed.as_millis()
        );
        size += step;
    }
}
