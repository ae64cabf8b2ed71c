/// Floating point type used throughout system
pub type Real = f64;
