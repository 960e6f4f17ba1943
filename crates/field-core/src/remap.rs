/// Linearly map `value` from `[start1, end1]` onto `[start2, end2]`.
///
/// The result is floor-clamped at zero: a negative mapping (e.g. a particle
/// already past an edge) yields `0.0`. Values past `end1` are NOT capped,
/// so callers can tell "deep inside" (`> end2`) apart from "inside the band".
#[inline]
pub fn remap(value: f32, start1: f32, end1: f32, start2: f32, end2: f32) -> f32 {
    let span = end1 - start1;
    if span == 0.0 {
        return start2.max(0.0);
    }

    let remapped = (value - start1) * (end2 - start2) / span + start2;
    if remapped > 0.0 {
        remapped
    } else {
        // Also catches NaN
        0.0
    }
}
