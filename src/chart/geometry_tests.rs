//! Tests for chart geometry

use super::geometry::*;
use crate::vessel::VesselRecord;
use proptest::prelude::*;

fn records(rows: &[(f64, f64, f64)]) -> Vec<VesselRecord> {
    rows.iter()
        .enumerate()
        .map(|(i, &(length, berth, departure))| VesselRecord::new(i, length, berth, departure))
        .collect()
}

#[test]
fn test_single_vessel_geometry() {
    let shapes = compute_shapes(&records(&[(100.0, 0.0, 60.0)]), ChartScale::default());

    assert_eq!(shapes.len(), 1);
    assert_eq!(
        shapes[0],
        RectangleShape {
            x: 0.0,
            y: 0.0,
            width: 60.0 * 0.8,
            height: 100.0 * 0.8,
        }
    );
}

#[test]
fn test_offsets_accumulate_previous_heights_and_gap() {
    let scale = ChartScale::new(1.0, 0.5);
    let shapes = compute_shapes(
        &records(&[(100.0, 0.0, 10.0), (40.0, 5.0, 20.0), (60.0, 8.0, 30.0)]),
        scale,
    );

    assert_eq!(shapes[0].y, 0.0);
    assert_eq!(shapes[1].y, 50.0 + VESSEL_GAP);
    assert_eq!(shapes[2].y, 50.0 + VESSEL_GAP + 20.0 + VESSEL_GAP);
}

#[test]
fn test_x_and_width_use_width_scale() {
    let scale = ChartScale::new(2.0, 1.0);
    let shapes = compute_shapes(&records(&[(10.0, 15.0, 40.0)]), scale);

    assert_eq!(shapes[0].x, 30.0);
    assert_eq!(shapes[0].width, 50.0);
    assert_eq!(shapes[0].height, 10.0);
}

#[test]
fn test_empty_records_produce_no_shapes() {
    assert!(compute_shapes(&[], ChartScale::default()).is_empty());
}

#[test]
fn test_contains_is_boundary_inclusive() {
    let shape = RectangleShape {
        x: 10.0,
        y: 20.0,
        width: 5.0,
        height: 4.0,
    };

    assert!(shape.contains(10.0, 20.0));
    assert!(shape.contains(15.0, 24.0));
    assert!(shape.contains(12.5, 22.0));
    assert!(!shape.contains(9.99, 22.0));
    assert!(!shape.contains(15.01, 22.0));
    assert!(!shape.contains(12.0, 24.5));
}

#[test]
fn test_center() {
    let shape = RectangleShape {
        x: 0.0,
        y: 10.0,
        width: 48.0,
        height: 80.0,
    };
    assert_eq!(shape.center(), (24.0, 50.0));
}

#[test]
fn test_is_drawable() {
    let mut shape = RectangleShape {
        x: -MAX_CHART_EXTENT,
        y: 0.0,
        width: 2.0 * MAX_CHART_EXTENT,
        height: 1.0,
    };
    assert!(shape.is_drawable());

    shape.width = f64::MAX;
    assert!(!shape.is_drawable());

    shape.width = 1.0;
    shape.y = f64::NAN;
    assert!(!shape.is_drawable());
}

#[test]
fn test_clip_to_bounds() {
    let bounds = ChartBounds {
        x: [0.0, 100.0],
        y: [0.0, 50.0],
    };
    let shape = RectangleShape {
        x: -20.0,
        y: 40.0,
        width: 50.0,
        height: 30.0,
    };

    assert_eq!(
        bounds.clip(&shape),
        Some(VisibleEdges {
            left: 0.0,
            right: 30.0,
            bottom: 40.0,
            top: 50.0,
        })
    );

    let outside = RectangleShape { x: 120.0, ..shape };
    assert_eq!(bounds.clip(&outside), None);
}

#[test]
fn test_bounds_center() {
    let bounds = ChartBounds {
        x: [-10.0, 210.0],
        y: [0.0, 50.0],
    };
    assert_eq!(bounds.center(), (100.0, 25.0));
}

#[test]
fn test_autoscale_empty_is_unit_square() {
    let bounds = ChartBounds::autoscale(&[] as &[RectangleShape]);
    assert_eq!(bounds, ChartBounds::default());
    assert_eq!(bounds.x, [0.0, 1.0]);
    assert_eq!(bounds.y, [0.0, 1.0]);
}

#[test]
fn test_autoscale_pads_five_percent() {
    let shapes = [
        RectangleShape {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 50.0,
        },
        RectangleShape {
            x: 100.0,
            y: 60.0,
            width: 100.0,
            height: 140.0,
        },
    ];

    let bounds = ChartBounds::autoscale(&shapes);

    assert_eq!(bounds.x, [-10.0, 210.0]);
    assert_eq!(bounds.y, [-10.0, 210.0]);
    assert_eq!(bounds.width(), 220.0);
    assert_eq!(bounds.height(), 220.0);
}

#[test]
fn test_autoscale_widens_zero_span() {
    let shapes = [RectangleShape {
        x: 5.0,
        y: 0.0,
        width: 0.0,
        height: 8.0,
    }];

    let bounds = ChartBounds::autoscale(&shapes);

    assert_eq!(bounds.x, [4.0, 6.0]);
}

fn valid_rows() -> impl Strategy<Value = Vec<(f64, f64, f64)>> {
    prop::collection::vec(
        (1.0f64..400.0, 0.0f64..1_000.0, 0.0f64..500.0)
            .prop_map(|(length, berth, stay)| (length, berth, berth + stay)),
        0..20,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_one_shape_per_record_without_vertical_overlap(rows in valid_rows()) {
        let records = records(&rows);
        let shapes = compute_shapes(&records, ChartScale::default());

        prop_assert_eq!(shapes.len(), records.len());
        for pair in shapes.windows(2) {
            prop_assert!(pair[1].y >= pair[0].y + pair[0].height);
        }
    }

    #[test]
    fn prop_compute_shapes_is_deterministic(rows in valid_rows()) {
        let records = records(&rows);
        let scale = ChartScale::new(0.8, 0.8);

        prop_assert_eq!(compute_shapes(&records, scale), compute_shapes(&records, scale));
    }

    #[test]
    fn prop_autoscale_contains_every_shape(rows in valid_rows()) {
        let shapes = compute_shapes(&records(&rows), ChartScale::default());
        let bounds = ChartBounds::autoscale(&shapes);

        for shape in &shapes {
            prop_assert!(bounds.x[0] <= shape.x && shape.right() <= bounds.x[1]);
            prop_assert!(bounds.y[0] <= shape.y && shape.top() <= bounds.y[1]);
        }
    }
}
