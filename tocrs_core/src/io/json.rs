//! Module providing JSON IO for scenario sets and results
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::result::SolutionResult;
use crate::comparison::ScenarioComparison;
use crate::io::IoError;
use crate::production::scenario::Scenario;

/// Represents a JSON serialized set of scenarios
#[derive(Serialize, Deserialize)]
struct JsonScenarioSet {
    scenarios: Vec<Scenario>,
}

/// Read a set of scenarios from a JSON file
///
/// The file holds `{"scenarios": [...]}`, each scenario has a `name` and the fields
/// `heat_treatment`, `machining`, `assembly`, `demand_a`, `demand_b`, `profit_a`, and
/// `profit_b`. Missing numeric fields take their baseline value.
pub fn read_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, IoError> {
    let json_data = fs::read_to_string(path)?;
    scenarios_from_str(&json_data)
}

/// Parse a set of scenarios from a JSON string, see [`read_scenarios`] for the format
pub fn scenarios_from_str(json_data: &str) -> Result<Vec<Scenario>, IoError> {
    let set: JsonScenarioSet = serde_json::from_str(json_data)?;
    Ok(set.scenarios)
}

/// Serialize a set of scenarios to a JSON string, see [`read_scenarios`] for the format
pub fn scenarios_to_string(scenarios: &[Scenario]) -> Result<String, IoError> {
    let set = JsonScenarioSet {
        scenarios: scenarios.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&set)?)
}

/// Write a set of scenarios to a JSON file
pub fn write_scenarios<P: AsRef<Path>>(path: P, scenarios: &[Scenario]) -> Result<(), IoError> {
    fs::write(path, scenarios_to_string(scenarios)?)?;
    Ok(())
}

/// Serialize a result to a JSON string, values which are not available become `null`
pub fn result_to_json(result: &SolutionResult) -> Result<String, IoError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Serialize a comparison of scenarios to a JSON string
///
/// Every outcome carries `is_best`, and the comparison carries `best_index` and the
/// `improvement` of the best outcome over the first one (see [`ScenarioComparison::report`]).
pub fn comparison_to_json(comparison: &ScenarioComparison) -> Result<String, IoError> {
    Ok(serde_json::to_string_pretty(&comparison.report())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use serde_json::Value;

    use crate::comparison::solve_all;
    use crate::production::scenario::{default_scenarios, ScenarioParameters, BASELINE};
    use crate::{solve_scenario, Configuration, TocError};

    #[test]
    fn read_json() {
        let data_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test_data")
            .join("scenarios")
            .join("the_goal.json");
        let scenarios = read_scenarios(data_path).unwrap();
        assert_eq!(scenarios, default_scenarios());
    }

    #[test]
    fn missing_fields_take_baseline() {
        let scenarios =
            scenarios_from_str(r#"{"scenarios": [{"name": "Tight", "machining": 120}]}"#)
                .unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].name, "Tight");
        assert_eq!(
            scenarios[0].parameters,
            ScenarioParameters {
                capacity_machining: 120.,
                ..BASELINE
            }
        );
    }

    #[test]
    fn scenarios_round_trip() {
        let json = scenarios_to_string(&default_scenarios()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["scenarios"][1]["heat_treatment"], 200.);
        assert_eq!(scenarios_from_str(&json).unwrap(), default_scenarios());
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            scenarios_from_str("{\"scenarios\": 3}"),
            Err(IoError::Serde(_))
        ));
        assert!(matches!(
            read_scenarios("does/not/exist.json"),
            Err(IoError::File(_))
        ));
    }

    #[test]
    fn result_json() -> Result<(), TocError> {
        let result = solve_scenario(&BASELINE)?;
        let value: Value = serde_json::from_str(&result_to_json(&result)?).unwrap();
        assert_eq!(value["status"], "Optimal");
        assert_eq!(value["bottleneck"], "Heat Treatment");
        assert_eq!(value["stages"][0]["stage"], "Heat Treatment");
        assert_eq!(value["constraints"][0]["name"], "machining");

        let broken = solve_scenario(&ScenarioParameters {
            capacity_machining: -10.,
            ..BASELINE
        })?;
        let value: Value = serde_json::from_str(&result_to_json(&broken)?).unwrap();
        assert_eq!(value["status"], "Infeasible");
        assert!(value["product_a"].is_null());
        assert!(value["constraints"][0]["shadow_price"].is_null());
        Ok(())
    }

    #[test]
    fn comparison_json() -> Result<(), TocError> {
        let comparison = solve_all(&default_scenarios(), &Configuration::default())?;
        let value: Value = serde_json::from_str(&comparison_to_json(&comparison)?).unwrap();
        assert_eq!(value["best_index"], 1);
        assert_eq!(value["outcomes"][1]["scenario"]["name"], "Elevate Bottleneck");
        assert_eq!(value["outcomes"][1]["is_best"], true);
        assert_eq!(value["outcomes"][0]["is_best"], false);
        assert_eq!(value["outcomes"][0]["result"]["status"], "Optimal");
        let absolute = value["improvement"]["absolute"].as_f64().unwrap();
        assert!((absolute - 900.).abs() < 1e-6);
        let percent = value["improvement"]["percent"].as_f64().unwrap();
        assert!((percent - 18.75).abs() < 1e-6);
        Ok(())
    }
}
