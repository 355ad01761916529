use queuesim_metrics::export::csv::HEADER;
use queuesim_metrics::{export_csv, export_json, sweep, ExperimentConfig};

#[test]
fn sweep_reproduces_queueing_trends() {
    let experiment = ExperimentConfig {
        service_means: vec![0.5, 0.9],
        seed: 2024,
        ..Default::default()
    };
    let rows = sweep(&experiment).unwrap();

    // Below saturation utilization tracks service / interarrival.
    assert!((rows[0].utilization - 0.5).abs() < 0.08, "{:?}", rows[0]);
    assert!((rows[1].utilization - 0.9).abs() < 0.08, "{:?}", rows[1]);

    // Delay grows steeply as the server approaches saturation.
    assert!(rows[1].average_delay > rows[0].average_delay);

    // Total time is roughly customers * interarrival when not saturated.
    assert!((rows[0].total_time - 1000.0).abs() < 150.0, "{:?}", rows[0]);
}

#[test]
fn sweep_results_round_trip_through_exports() {
    let experiment = ExperimentConfig {
        service_means: vec![0.5, 0.6, 0.7],
        replications: 2,
        customer_cap: 100,
        ..Default::default()
    };
    let rows = sweep(&experiment).unwrap();

    let dir = std::env::temp_dir();
    let csv_path = dir.join("queuesim_pipeline.csv");
    let json_path = dir.join("queuesim_pipeline.json");

    export_csv(&rows, &csv_path).unwrap();
    export_json(&rows, &json_path, false).unwrap();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next().unwrap(), HEADER.join(","));
    assert_eq!(lines.count(), 3);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["row_count"], 3);

    std::fs::remove_file(csv_path).ok();
    std::fs::remove_file(json_path).ok();
}
