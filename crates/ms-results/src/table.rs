//! The result table and its text forms.

use std::collections::HashSet;

use ms_core::{HORIZON_NAME, ScriptResultSet, Value};
use ms_models::Model;
use serde::{Deserialize, Serialize};

use crate::ResultsResult;

/// Label of the header row.
pub const HEADER_LABEL: &str = "LATA";

/// How a scalar script result is laid out in its row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarRendering {
    /// The value once, in the first period column.
    #[default]
    Single,
    /// Only the row label, no cells.
    LabelOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Period label of the first column.
    pub base_period: i64,
    pub scalar_rendering: ScalarRendering,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            base_period: 2015,
            scalar_rendering: ScalarRendering::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub label: String,
    pub cells: Vec<String>,
}

/// Header of period labels followed by labeled rows. Labels are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    pub header: Vec<String>,
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Model series first, in declaration order, then script results not
    /// already shown. A script value never replaces a model row of the same
    /// name.
    pub fn build(model: &dyn Model, results: &ScriptResultSet, options: &TableOptions) -> Self {
        let ll = model.horizon();

        let mut header = Vec::with_capacity(ll + 1);
        header.push(HEADER_LABEL.to_string());
        // Labels past i64::MAX repeat the maximum rather than overflow.
        header.extend((0..ll).map(|i| options.base_period.saturating_add(i as i64).to_string()));

        let mut rows = Vec::new();
        let mut emitted = HashSet::new();

        for (name, values) in model.state().series_iter() {
            let cells = values.iter().take(ll).map(|x| x.to_string()).collect();
            rows.push(ResultRow {
                label: name.to_string(),
                cells,
            });
            emitted.insert(name.to_string());
        }

        for (name, value) in results.iter() {
            if name == HORIZON_NAME || emitted.contains(name) {
                continue;
            }
            let cells = match value {
                Value::Series(values) => values.iter().map(|x| x.to_string()).collect(),
                scalar => match options.scalar_rendering {
                    ScalarRendering::Single => vec![scalar.to_string()],
                    ScalarRendering::LabelOnly => Vec::new(),
                },
            };
            rows.push(ResultRow {
                label: name.to_string(),
                cells,
            });
            emitted.insert(name.to_string());
        }

        Self { header, rows }
    }

    pub fn row(&self, label: &str) -> Option<&ResultRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    /// Tab-separated text, one line per row, each line ending in `\n`.
    pub fn to_tsv(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.header.join("\t"));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.label);
            for cell in &row.cells {
                out.push('\t');
                out.push_str(cell);
            }
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> ResultsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::Namespace;
    use ms_data::NamedVectorSet;
    use ms_models::{Model1, bind};

    fn run_model() -> Model1 {
        let mut model = Model1::new();
        let data = NamedVectorSet::parse("LATA 2015 2016 2017\nKI 10\ntwKI 1 1.1 1.2\n");
        bind(&mut model, &data).unwrap();
        model.run().unwrap();
        model
    }

    fn results(entries: Vec<(&str, Value)>) -> ScriptResultSet {
        let mut set = ScriptResultSet::new();
        set.absorb(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<Namespace>(),
        );
        set
    }

    #[test]
    fn header_counts_from_base_period() {
        let table = ResultTable::build(&run_model(), &ScriptResultSet::new(), &TableOptions {
            base_period: 1990,
            ..TableOptions::default()
        });
        assert_eq!(table.header, vec!["LATA", "1990", "1991", "1992"]);
    }

    #[test]
    fn header_saturates_at_largest_period() {
        let table = ResultTable::build(&run_model(), &ScriptResultSet::new(), &TableOptions {
            base_period: i64::MAX - 1,
            ..TableOptions::default()
        });
        let max = i64::MAX.to_string();
        assert_eq!(table.header[1], (i64::MAX - 1).to_string());
        assert_eq!(table.header[2..], [max.clone(), max]);
    }

    #[test]
    fn model_rows_follow_declaration_without_horizon() {
        let table = ResultTable::build(&run_model(), &ScriptResultSet::new(), &TableOptions::default());
        let labels: Vec<_> = table.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["twKI", "twKS", "twINW", "twEKS", "twIMP", "KI", "KS", "INW", "EKS", "IMP", "PKB"]
        );
        let ki = table.row("KI").unwrap();
        assert_eq!(ki.cells[0], "10");
        assert_eq!(ki.cells[1], (1.1 * 10.0_f64).to_string());
    }

    #[test]
    fn model_field_wins_over_script_value() {
        let set = results(vec![
            ("KI", Value::Series(vec![-1.0, -1.0, -1.0])),
            ("ZZ", Value::Series(vec![1.0, 2.0])),
        ]);
        let table = ResultTable::build(&run_model(), &set, &TableOptions::default());

        assert_eq!(table.rows.iter().filter(|r| r.label == "KI").count(), 1);
        assert_eq!(table.row("KI").unwrap().cells[0], "10");
        assert_eq!(table.rows.last().unwrap().label, "ZZ");
        assert_eq!(table.row("ZZ").unwrap().cells, vec!["1", "2"]);
    }

    #[test]
    fn scalar_rendered_once_or_label_only() {
        let set = results(vec![("ab", Value::Int(6))]);
        let model = run_model();

        let single = ResultTable::build(&model, &set, &TableOptions::default());
        assert_eq!(single.row("ab").unwrap().cells, vec!["6"]);
        assert!(single.to_tsv().ends_with("ab\t6\n"));

        let label_only = ResultTable::build(&model, &set, &TableOptions {
            scalar_rendering: ScalarRendering::LabelOnly,
            ..TableOptions::default()
        });
        assert!(label_only.row("ab").unwrap().cells.is_empty());
        assert!(label_only.to_tsv().ends_with("\nab\n"));
    }

    #[test]
    fn empty_model_has_bare_rows() {
        let model = Model1::new();
        let table = ResultTable::build(&model, &ScriptResultSet::new(), &TableOptions::default());
        let tsv = table.to_tsv();
        assert!(tsv.starts_with("LATA\ntwKI\n"));
    }

    #[test]
    fn json_carries_the_same_rows() {
        let table = ResultTable::build(&run_model(), &ScriptResultSet::new(), &TableOptions::default());
        let json = table.to_json().unwrap();
        let back: ResultTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
