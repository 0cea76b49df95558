use pods_api::PosetApi;
use workload::{workload_churn, workload_scaling, workload_store};
pub mod workload;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║            STORE WORKLOADS                                 ║");
    println!("╚════════════════════════════════════════════════════════════╝");

    // Workload 1: small multi-poset store
    let stats = workload_store(4, 100, 300, 1_000);
    stats.print();

    // Workload 2: medium multi-poset store
    let stats = workload_store(10, 500, 2_000, 10_000);
    stats.print();

    // Workload 3: element churn on a dense single poset
    let stats = workload_churn(200, 1_000, 500);
    stats.print();

    // Workload 4: scaling analysis
    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║          SCALING ANALYSIS (reachability)                   ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    workload_scaling(1_000, 200);

    // A quick pass over the sentinel surface as well.
    let api = PosetApi::new();
    let id = api.new_poset();
    for v in ["A", "B", "C"] {
        api.insert(id, Some(v));
    }
    api.add(id, Some("A"), Some("B"));
    api.add(id, Some("B"), Some("C"));
    assert!(api.test(id, Some("A"), Some("C")));
    api.delete(id);

    println!("\n✓ All workloads completed successfully!");
}
