//! Number rendering for SVG attribute values

/// Render a length so it always carries a fractional part
///
/// Uses the shortest representation that round-trips, so `3.0 * 1.4` renders as
/// `4.199999999999999` and whole values render as `7.0` rather than `7`.
pub fn svg_number(value: f64) -> String {
    let rendered = value.to_string();
    if value.is_finite() && !rendered.contains('.') {
        format!("{rendered}.0")
    } else {
        rendered
    }
}
