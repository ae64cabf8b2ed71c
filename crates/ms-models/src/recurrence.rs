//! First-order multiplicative recurrence summed into an aggregate.
//!
//! For each category `c` with multiplier series `m_c`:
//!
//! ```text
//! Y[0] = Σ± X_c[0]
//! X_c[t] = m_c[t] * X_c[t-1]        t in 1..LL
//! Y[t] = Σ± X_c[t]
//! ```
//!
//! where each category enters the sum with its [`Sign`].

use ms_core::Real;

use crate::error::{ModelError, ModelResult};
use crate::model::ModelState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Add,
    Subtract,
}

/// A base series, its growth multiplier, and how it enters the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub base: &'static str,
    pub multiplier: &'static str,
    pub sign: Sign,
}

impl Category {
    pub const fn added(base: &'static str, multiplier: &'static str) -> Self {
        Self {
            base,
            multiplier,
            sign: Sign::Add,
        }
    }

    pub const fn subtracted(base: &'static str, multiplier: &'static str) -> Self {
        Self {
            base,
            multiplier,
            sign: Sign::Subtract,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recurrence {
    pub categories: &'static [Category],
    pub aggregate: &'static str,
}

impl Recurrence {
    /// Apply the recurrence to `state` in place.
    ///
    /// The aggregate is reallocated at horizon length; with a zero horizon it
    /// ends up empty and nothing else changes.
    pub fn apply(&self, state: &mut ModelState) -> ModelResult<()> {
        let ll = state.horizon();
        for category in self.categories {
            check_len(state, category.base, ll)?;
            check_len(state, category.multiplier, ll)?;
        }
        if state.slot(self.aggregate).is_none() {
            return Err(ModelError::UndeclaredField {
                field: self.aggregate,
            });
        }

        let mut aggregate = vec![0.0; ll];
        if ll > 0 {
            aggregate[0] = self.signed_sum(state, 0);
        }
        for t in 1..ll {
            for category in self.categories {
                let m = state.series(category.multiplier).map_or(0.0, |m| m[t]);
                if let Some(x) = state.series_mut(category.base) {
                    x[t] = m * x[t - 1];
                }
            }
            aggregate[t] = self.signed_sum(state, t);
        }

        if let Some(y) = state.series_mut(self.aggregate) {
            *y = aggregate;
        }
        Ok(())
    }

    fn signed_sum(&self, state: &ModelState, t: usize) -> Real {
        let mut total = 0.0;
        for category in self.categories {
            let x = state.series(category.base).map_or(0.0, |x| x[t]);
            match category.sign {
                Sign::Add => total += x,
                Sign::Subtract => total -= x,
            }
        }
        total
    }
}

fn check_len(state: &ModelState, field: &'static str, expected: usize) -> ModelResult<()> {
    let len = state
        .series(field)
        .ok_or(ModelError::UndeclaredField { field })?
        .len();
    if len != expected {
        return Err(ModelError::LengthMismatch {
            field,
            len,
            expected,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldDecl;

    const FIELDS: &[FieldDecl] = &[
        FieldDecl::horizon("LL"),
        FieldDecl::series("ma"),
        FieldDecl::series("mb"),
        FieldDecl::series("xa"),
        FieldDecl::series("xb"),
        FieldDecl::series("yy"),
    ];

    const REC: Recurrence = Recurrence {
        categories: &[Category::added("xa", "ma"), Category::subtracted("xb", "mb")],
        aggregate: "yy",
    };

    fn state(ll: usize, values: &[(&str, Vec<Real>)]) -> ModelState {
        let mut s = ModelState::new(FIELDS);
        s.set_horizon(ll);
        for (name, v) in values {
            *s.series_mut(name).unwrap() = v.clone();
        }
        s
    }

    #[test]
    fn signed_aggregate_over_periods() {
        let mut s = state(
            3,
            &[
                ("ma", vec![1.0, 2.0, 3.0]),
                ("mb", vec![1.0, 1.0, 0.5]),
                ("xa", vec![5.0, 0.0, 0.0]),
                ("xb", vec![1.0, 0.0, 0.0]),
            ],
        );
        REC.apply(&mut s).unwrap();
        assert_eq!(s.series("xa").unwrap(), [5.0, 10.0, 30.0]);
        assert_eq!(s.series("xb").unwrap(), [1.0, 1.0, 0.5]);
        assert_eq!(s.series("yy").unwrap(), [4.0, 9.0, 29.5]);
    }

    #[test]
    fn zero_horizon_is_noop() {
        let mut s = state(0, &[]);
        REC.apply(&mut s).unwrap();
        assert!(s.series("yy").unwrap().is_empty());
    }

    #[test]
    fn single_period_uses_bound_values() {
        let mut s = state(
            1,
            &[
                ("ma", vec![9.0]),
                ("mb", vec![9.0]),
                ("xa", vec![7.0]),
                ("xb", vec![2.0]),
            ],
        );
        REC.apply(&mut s).unwrap();
        assert_eq!(s.series("xa").unwrap(), [7.0]);
        assert_eq!(s.series("yy").unwrap(), [5.0]);
    }

    #[test]
    fn short_series_is_rejected() {
        let mut s = state(2, &[("ma", vec![1.0])]);
        let err = REC.apply(&mut s).unwrap_err();
        assert_eq!(
            err,
            ModelError::LengthMismatch {
                field: "xa",
                len: 0,
                expected: 2
            }
        );
    }
}
