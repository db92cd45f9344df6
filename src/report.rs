//! Plain-text layout table for `--print`

use std::fmt::Write;

use crate::chart::VesselShape;

const HEADERS: [&str; 8] = [
    "vessel",
    "length",
    "berth",
    "departure",
    "x",
    "y",
    "width",
    "height",
];

/// Format the computed layout, one row per vessel
pub fn layout_report(shapes: &[VesselShape]) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3], HEADERS[4], HEADERS[5], HEADERS[6],
        HEADERS[7]
    );

    for vessel in shapes {
        let record = &vessel.record;
        let shape = &vessel.shape;
        let _ = writeln!(
            out,
            "{:>6} {:>10} {:>10} {:>10} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            record.number(),
            record.length,
            record.berth_time,
            record.departure_time,
            shape.x,
            shape.y,
            shape.width,
            shape.height
        );
    }

    out
}
