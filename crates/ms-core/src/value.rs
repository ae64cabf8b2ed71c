//! Values held by a variable namespace.

use core::fmt;

use crate::Real;

/// A numeric value bound to a name.
///
/// Models only ever export `Int` (the horizon) and `Series`; scripts may
/// additionally produce plain `Scalar`s.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Scalar(Real),
    Series(Vec<Real>),
}

impl From<Vec<Real>> for Value {
    fn from(values: Vec<Real>) -> Self {
        Value::Series(values)
    }
}

impl From<Real> for Value {
    fn from(x: Real) -> Self {
        Value::Scalar(x)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

/// Scalars print in their default decimal form; series print tab-separated.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Scalar(x) => write!(f, "{x}"),
            Value::Series(values) => {
                for (i, x) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\t")?;
                    }
                    write!(f, "{x}")?;
                }
                Ok(())
            }
        }
    }
}
