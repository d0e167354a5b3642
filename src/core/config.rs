/// Relative tolerance used when comparing vector components and distances.
pub const REL_TOLERANCE: f64 = 1e-4;
/// Absolute tolerance, dominates comparisons close to zero.
pub const ABS_TOLERANCE: f64 = 1e-5;
/// Per-channel tolerance for colour equality. Wider than one byte step so that
/// a colour survives its 4-byte packing.
pub const COLOR_TOLERANCE: f64 = 0.01;
/// Decimal places used by the `Display` impls.
pub const DISPLAY_PRECISION: usize = 3;
