use sensorscatter::{partition_records, MeasurementRecord};

fn sample() -> Vec<MeasurementRecord> {
    vec![
        MeasurementRecord::new("pH", 1.0, 6.5),
        MeasurementRecord::new("Moisture", 1.0, 40.0),
        MeasurementRecord::new("Temp", 1.0, 22.0),
    ]
}

#[test]
fn partition_splits_exactly_by_variable() {
    let merged = sample();
    let series = partition_records(&merged);
    assert_eq!(series.ph, vec![MeasurementRecord::new("pH", 1.0, 6.5)]);
    assert_eq!(
        series.moisture,
        vec![MeasurementRecord::new("Moisture", 1.0, 40.0)]
    );
}

#[test]
fn other_variables_appear_in_neither_series() {
    let merged = vec![
        MeasurementRecord::new("Temp", 1.0, 22.0),
        MeasurementRecord::new("Humidity", 2.0, 55.0),
        MeasurementRecord::new("ph", 3.0, 6.0), // label comparison is exact
    ];
    let series = partition_records(&merged);
    assert!(series.ph.is_empty());
    assert!(series.moisture.is_empty());
}

#[test]
fn empty_input_yields_empty_series() {
    let series = partition_records(&[]);
    assert!(series.ph.is_empty());
    assert!(series.moisture.is_empty());
}

#[test]
fn partition_is_stable_and_order_preserving() {
    let merged = vec![
        MeasurementRecord::new("Moisture", 3.0, 31.0),
        MeasurementRecord::new("pH", 1.0, 6.1),
        MeasurementRecord::new("Moisture", 1.0, 45.0),
        MeasurementRecord::new("pH", 3.0, 7.2),
        MeasurementRecord::new("Temp", 2.0, 19.5),
        MeasurementRecord::new("pH", 2.0, 6.8),
    ];
    let series = partition_records(&merged);

    let ph_nodes: Vec<f64> = series.ph.iter().map(|r| r.node_id).collect();
    let moisture_nodes: Vec<f64> = series.moisture.iter().map(|r| r.node_id).collect();
    assert_eq!(ph_nodes, vec![1.0, 3.0, 2.0]);
    assert_eq!(moisture_nodes, vec![3.0, 1.0]);

    // Union of both series is exactly the pH/Moisture subset, no duplicates.
    assert_eq!(series.ph.len() + series.moisture.len(), 5);
}

#[test]
fn partition_does_not_mutate_input() {
    let merged = sample();
    let before = merged.clone();
    let _ = partition_records(&merged);
    assert_eq!(merged, before);
}

#[test]
fn partition_of_equal_input_is_equal() {
    let merged = sample();
    assert_eq!(partition_records(&merged), partition_records(&merged));
}

#[test]
fn plot_points_follow_partition_order() {
    let merged = vec![
        MeasurementRecord::new("pH", 2.0, 6.8),
        MeasurementRecord::new("pH", 1.0, 6.1),
        MeasurementRecord::new("Moisture", 5.0, 38.0),
    ];
    let series = partition_records(&merged);
    assert_eq!(series.ph_points(), vec![[2.0, 6.8], [1.0, 6.1]]);
    assert_eq!(series.moisture_points(), vec![[5.0, 38.0]]);
}
