//! Script evaluation against a fresh scope.

use ms_core::Namespace;
use rhai::{Array, Dynamic, Engine, EvalAltResult, FLOAT, INT, Position, Scope};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::convert::{from_dynamic, to_dynamic};
use crate::error::ScriptResult;

/// Largest array a script may build, by default.
pub const DEFAULT_MAX_ARRAY_SIZE: usize = 1_000_000;

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Upper bound on operations per evaluation. `None` means unlimited.
    pub max_operations: Option<u64>,
    /// Upper bound on array length, for literals and for `zeros`/`filled`.
    pub max_array_size: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_operations: None,
            max_array_size: DEFAULT_MAX_ARRAY_SIZE,
        }
    }
}

/// Evaluates scripts. Holds no state between evaluations.
pub struct ScriptEngine {
    engine: Engine,
}

impl Default for ScriptEngine {
    fn default() -> Self {
        Self::new(&EngineOptions::default())
    }
}

impl ScriptEngine {
    pub fn new(options: &EngineOptions) -> Self {
        let mut engine = Engine::new();

        if let Some(limit) = options.max_operations {
            engine.set_max_operations(limit);
        }
        engine.set_max_array_size(options.max_array_size);

        engine.on_print(|text| info!(target: "script", "{text}"));
        engine.on_debug(|text, source, pos| {
            debug!(target: "script", source = source.unwrap_or(""), %pos, "{text}")
        });

        register_utilities(&mut engine, options.max_array_size);

        Self { engine }
    }

    /// Run `source` with every entry of `namespace` declared as a mutable
    /// variable and return the whole resulting scope.
    ///
    /// A name bound more than once (shadowing) resolves to its last value.
    /// Values without a numeric representation are left out.
    pub fn evaluate(&self, namespace: &Namespace, source: &str) -> ScriptResult<Namespace> {
        let mut scope = Scope::new();
        for (name, value) in namespace.iter() {
            scope.push_dynamic(name.to_string(), to_dynamic(value));
        }

        self.engine.run_with_scope(&mut scope, source)?;

        let mut result = Namespace::new();
        for (name, _constant, value) in scope.iter() {
            match from_dynamic(&value) {
                Some(v) => result.insert(name, v),
                None => debug!(name, kind = value.type_name(), "skipping non-numeric script value"),
            }
        }
        Ok(result)
    }
}

fn register_utilities(engine: &mut Engine, max_len: usize) {
    engine.register_fn("zeros", move |n: INT| -> Result<Array, Box<EvalAltResult>> {
        Ok(vec![Dynamic::from_float(0.0); array_len(n, max_len)?])
    });
    engine.register_fn("filled", move |n: INT, v: FLOAT| -> Result<Array, Box<EvalAltResult>> {
        Ok(vec![Dynamic::from_float(v); array_len(n, max_len)?])
    });
    engine.register_fn("filled", move |n: INT, v: INT| -> Result<Array, Box<EvalAltResult>> {
        Ok(vec![Dynamic::from_float(v as FLOAT); array_len(n, max_len)?])
    });
    engine.register_fn("sum", |a: Array| -> Result<FLOAT, Box<EvalAltResult>> {
        numbers(&a).map(|xs| xs.iter().sum())
    });
    engine.register_fn("mean", |a: Array| -> Result<FLOAT, Box<EvalAltResult>> {
        let xs = numbers(&a)?;
        if xs.is_empty() {
            return Err(runtime_error("mean of an empty array"));
        }
        Ok(xs.iter().sum::<FLOAT>() / xs.len() as FLOAT)
    });
}

/// Negative lengths give an empty array; lengths past `max_len` are refused
/// before anything is allocated.
fn array_len(n: INT, max_len: usize) -> Result<usize, Box<EvalAltResult>> {
    let len = usize::try_from(n.max(0)).unwrap_or(usize::MAX);
    if len > max_len {
        return Err(runtime_error(&format!(
            "array length {n} exceeds the limit of {max_len}"
        )));
    }
    Ok(len)
}

fn numbers(a: &Array) -> Result<Vec<FLOAT>, Box<EvalAltResult>> {
    a.iter()
        .map(|v| {
            v.as_float()
                .or_else(|_| v.as_int().map(|i| i as FLOAT))
                .map_err(|_| runtime_error("array holds a non-numeric element"))
        })
        .collect()
}

fn runtime_error(message: &str) -> Box<EvalAltResult> {
    Box::new(EvalAltResult::ErrorRuntime(
        Dynamic::from(message.to_string()),
        Position::NONE,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::Value;

    fn namespace() -> Namespace {
        let mut ns = Namespace::new();
        ns.insert("LL", Value::Int(3));
        ns.insert("KI", vec![10.0, 11.0, 13.2]);
        ns
    }

    #[test]
    fn host_utilities() {
        let engine = ScriptEngine::default();
        let out = engine
            .evaluate(
                &namespace(),
                "let zz = zeros(LL); let ff = filled(2, 7); let total = sum(KI); let avg = mean([1, 2.0]);",
            )
            .unwrap();
        assert_eq!(out.get("zz"), Some(&Value::Series(vec![0.0; 3])));
        assert_eq!(out.get("ff"), Some(&Value::Series(vec![7.0, 7.0])));
        assert_eq!(out.get("total"), Some(&Value::Scalar(10.0 + 11.0 + 13.2)));
        assert_eq!(out.get("avg"), Some(&Value::Scalar(1.5)));
    }

    #[test]
    fn operation_limit_stops_runaway_script() {
        let engine = ScriptEngine::new(&EngineOptions {
            max_operations: Some(1_000),
            ..EngineOptions::default()
        });
        let err = engine.evaluate(&namespace(), "loop { }").unwrap_err();
        assert!(err.to_string().contains("evaluation failed"));
    }

    #[test]
    fn array_len_clamps_negative_and_refuses_oversize() {
        assert_eq!(array_len(-4, 10).unwrap(), 0);
        assert_eq!(array_len(10, 10).unwrap(), 10);
        assert!(array_len(11, 10).is_err());
        assert!(array_len(INT::MAX, DEFAULT_MAX_ARRAY_SIZE).is_err());
    }
}
