//! Clamped linear rescaling, used to turn a joint angle into a completion
//! percentage.

/// Clamp `value` into `input` then rescale linearly into `output`
///
/// `input` may be given in either order. A zero-width input range yields
/// `output.0`; a NaN value passes through as NaN.
pub fn interpolate(value: f32, input: (f32, f32), output: (f32, f32)) -> f32 {
    let (in_min, in_max) = input;
    let (out_min, out_max) = output;

    if value.is_nan() {
        return f32::NAN;
    }

    if in_min == in_max {
        return out_min;
    }

    let lo = in_min.min(in_max);
    let hi = in_min.max(in_max);
    let clamped = value.clamp(lo, hi);

    out_min + (clamped - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Interpolate, then round and clamp into an integer percentage 0-100
///
/// A NaN value is 0%, never a boundary picked by the calibration direction.
pub fn to_percentage(value: f32, input: (f32, f32), output: (f32, f32)) -> u8 {
    let scaled = interpolate(value, input, output).round();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, 100.0) as u8
}
