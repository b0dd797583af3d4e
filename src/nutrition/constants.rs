/// Reference amount that per-100 nutrient values are expressed against.
pub const REFERENCE_QUANTITY: f64 = 100.0;
