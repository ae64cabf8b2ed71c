//! Binding of raw data tokens onto a model's declared fields.

use ms_core::Real;
use ms_data::NamedVectorSet;
use tracing::debug;

use crate::error::{ModelError, ModelResult};
use crate::model::{FieldKind, Model};

/// Populate `model` from `data`.
///
/// The horizon is the `LATA` token count. Each declared series is parsed,
/// padded with its last value up to the horizon or cut down to it. A series
/// absent from the data becomes all zeros. Nothing is written to the model
/// unless every field parses.
pub fn bind(model: &mut dyn Model, data: &NamedVectorSet) -> ModelResult<()> {
    let ll = data.horizon().ok_or(ModelError::MissingHorizon)?;

    let mut staged = Vec::new();
    for field in model.fields() {
        if field.kind != FieldKind::Series {
            continue;
        }
        let values = match data.get(field.name) {
            Some(tokens) => parse_series(field.name, tokens, ll)?,
            None => {
                debug!(field = field.name, "no record, left at zero");
                vec![0.0; ll]
            }
        };
        staged.push(values);
    }

    let state = model.state_mut();
    state.set_horizon(ll);
    state.replace_series(staged);
    debug!(model = model.name(), horizon = ll, "bound data");
    Ok(())
}

fn parse_series(field: &str, tokens: &[String], ll: usize) -> ModelResult<Vec<Real>> {
    if tokens.is_empty() {
        return Err(ModelError::EmptySeries {
            field: field.to_string(),
        });
    }

    let mut values = Vec::with_capacity(ll);
    // Tokens past the horizon are never read.
    for (index, token) in tokens.iter().take(ll).enumerate() {
        let x = token
            .parse::<Real>()
            .map_err(|_| ModelError::InvalidNumber {
                field: field.to_string(),
                index,
                token: token.clone(),
            })?;
        values.push(x);
    }

    if let Some(&last) = values.last() {
        values.resize(ll, last);
    }
    Ok(values)
}
