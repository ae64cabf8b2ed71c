//! One model, one data set, any number of script passes.

use std::path::Path;

use ms_core::{Namespace, ScriptResultSet};
use ms_data::NamedVectorSet;
use ms_models::{Model, ModelRegistry};
use ms_results::ResultTable;
use ms_script::ScriptEngine;
use tracing::{info, warn};

use crate::config::{ScriptSeeding, SessionConfig};
use crate::error::{AppError, AppResult};

/// What became of a script invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptOutcome {
    /// The script ran. `changed` counts the kept results it created or gave
    /// a new value; untouched seed variables are merged but not counted.
    Applied { changed: usize },
    /// The script failed to evaluate. Nothing was merged.
    Failed { message: String },
}

impl ScriptOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ScriptOutcome::Applied { .. })
    }
}

/// Owns a model instance and the results its scripts produced.
pub struct Session {
    model: Box<dyn Model>,
    results: ScriptResultSet,
    engine: ScriptEngine,
    config: SessionConfig,
}

impl Session {
    /// Session over a built-in variant.
    pub fn new(model_name: &str, config: SessionConfig) -> AppResult<Self> {
        Self::with_registry(&ModelRegistry::builtin(), model_name, config)
    }

    pub fn with_registry(
        registry: &ModelRegistry,
        model_name: &str,
        config: SessionConfig,
    ) -> AppResult<Self> {
        let model = registry.create(model_name)?;
        let engine = ScriptEngine::new(&config.engine);
        info!(model = model_name, "session created");
        Ok(Self {
            model,
            results: ScriptResultSet::new(),
            engine,
            config,
        })
    }

    pub fn model(&self) -> &dyn Model {
        self.model.as_ref()
    }

    pub fn script_results(&self) -> &ScriptResultSet {
        &self.results
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Load a data file and bind it to the model.
    pub fn read_data_from(&mut self, path: &Path) -> AppResult<&mut Self> {
        let data = ms_data::read_vectors(path)?;
        info!(path = %path.display(), "read data");
        self.bind_data(&data)
    }

    pub fn bind_data(&mut self, data: &NamedVectorSet) -> AppResult<&mut Self> {
        ms_models::bind(self.model.as_mut(), data)?;
        Ok(self)
    }

    pub fn run_model(&mut self) -> AppResult<&mut Self> {
        self.model.run()?;
        info!(
            model = self.model.name(),
            horizon = self.model.horizon(),
            "model run complete"
        );
        Ok(self)
    }

    /// Evaluate a script and merge its output into the session results.
    ///
    /// A failing script is logged and leaves the session as it was.
    pub fn run_script(&mut self, source: &str) -> ScriptOutcome {
        let seed = self.script_seed();
        match self.engine.evaluate(&seed, source) {
            Ok(namespace) => {
                let changed = namespace
                    .iter()
                    .filter(|(name, value)| {
                        ScriptResultSet::accepts(name) && seed.get(name) != Some(*value)
                    })
                    .count();
                let kept = self.results.absorb(namespace);
                info!(changed, kept, total = self.results.len(), "script applied");
                ScriptOutcome::Applied { changed }
            }
            Err(err) => {
                warn!(error = %err, "script failed, results unchanged");
                ScriptOutcome::Failed {
                    message: err.to_string(),
                }
            }
        }
    }

    /// Read a script file and evaluate it. An unreadable file is an error;
    /// evaluation failures are reported through the outcome.
    pub fn run_script_from_file(&mut self, path: &Path) -> AppResult<ScriptOutcome> {
        let source = std::fs::read_to_string(path).map_err(|e| AppError::ScriptFileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!(path = %path.display(), "running script file");
        Ok(self.run_script(&source))
    }

    pub fn results_table(&self) -> ResultTable {
        ResultTable::build(self.model.as_ref(), &self.results, &self.config.table)
    }

    pub fn results_as_tsv(&self) -> String {
        self.results_table().to_tsv()
    }

    pub fn results_as_json(&self) -> AppResult<String> {
        Ok(self.results_table().to_json()?)
    }

    fn script_seed(&self) -> Namespace {
        let mut seed = self.model.namespace();
        if self.config.seeding == ScriptSeeding::Chained {
            for (name, value) in self.results.iter() {
                seed.insert(name, value.clone());
            }
        }
        seed
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("model", &self.model.name())
            .field("results", &self.results)
            .field("config", &self.config)
            .finish()
    }
}
