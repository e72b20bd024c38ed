use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

use tocrs_core::analysis::result::SolutionResult;
use tocrs_core::configuration::ConfigurationBuilder;
use tocrs_core::io::json;
use tocrs_core::production::scenario::default_scenarios;
use tocrs_core::{ScenarioParameters, TocError};

fn to_py_err<E: Into<TocError>>(err: E) -> PyErr {
    PyRuntimeError::new_err(err.into().to_string())
}

/// Usage of a single stage
#[pyclass(name = "StageUsage")]
#[derive(Clone)]
struct PyStageUsage {
    #[pyo3(get)]
    stage: String,
    #[pyo3(get)]
    used: Option<f64>,
    #[pyo3(get)]
    capacity: f64,
    #[pyo3(get)]
    utilization_pct: Option<f64>,
    #[pyo3(get)]
    zero_capacity: bool,
}

/// Shadow price and slack of a constraint
#[pyclass(name = "ConstraintRow")]
#[derive(Clone)]
struct PyConstraintRow {
    #[pyo3(get)]
    name: String,
    #[pyo3(get)]
    shadow_price: Option<f64>,
    #[pyo3(get)]
    slack: Option<f64>,
}

/// Result of solving a scenario, values are None unless the status is "Optimal"
#[pyclass(name = "SolutionResult")]
struct PySolutionResult {
    inner: SolutionResult,
}

#[pymethods]
impl PySolutionResult {
    #[getter]
    fn status(&self) -> String {
        self.inner.status.to_string()
    }

    #[getter]
    fn product_a(&self) -> Option<f64> {
        self.inner.product_a
    }

    #[getter]
    fn product_b(&self) -> Option<f64> {
        self.inner.product_b
    }

    #[getter]
    fn total_throughput(&self) -> Option<f64> {
        self.inner.total_throughput
    }

    #[getter]
    fn bottleneck(&self) -> String {
        self.inner.bottleneck.to_string()
    }

    #[getter]
    fn stages(&self) -> Vec<PyStageUsage> {
        self.inner
            .stages
            .iter()
            .map(|s| PyStageUsage {
                stage: s.stage.to_string(),
                used: s.used,
                capacity: s.capacity,
                utilization_pct: s.utilization_pct,
                zero_capacity: s.zero_capacity,
            })
            .collect()
    }

    #[getter]
    fn constraints(&self) -> Vec<PyConstraintRow> {
        self.inner
            .constraints
            .iter()
            .map(|c| PyConstraintRow {
                name: c.name.clone(),
                shadow_price: c.shadow_price,
                slack: c.slack,
            })
            .collect()
    }

    fn is_optimal(&self) -> bool {
        self.inner.is_optimal()
    }

    fn to_json(&self) -> PyResult<String> {
        json::result_to_json(&self.inner).map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "SolutionResult(status={}, product_a={:?}, product_b={:?}, total_throughput={:?}, bottleneck={})",
            self.inner.status,
            self.inner.product_a,
            self.inner.product_b,
            self.inner.total_throughput,
            self.inner.bottleneck
        )
    }
}

/// Solve a single scenario, the defaults are the baseline scenario
#[pyfunction]
#[pyo3(signature = (
    heat_treatment_capacity=160.0,
    machining_capacity=200.0,
    assembly_capacity=180.0,
    demand_a=50.0,
    demand_b=80.0,
    profit_a=90.0,
    profit_b=60.0
))]
fn solve_scenario(
    heat_treatment_capacity: f64,
    machining_capacity: f64,
    assembly_capacity: f64,
    demand_a: f64,
    demand_b: f64,
    profit_a: f64,
    profit_b: f64,
) -> PyResult<PySolutionResult> {
    let params = ScenarioParameters::new(
        heat_treatment_capacity,
        machining_capacity,
        assembly_capacity,
        demand_a,
        demand_b,
        profit_a,
        profit_b,
    );
    let inner = tocrs_core::solve_scenario(&params).map_err(to_py_err)?;
    Ok(PySolutionResult { inner })
}

/// Solve every scenario of a JSON scenario set and return the comparison as JSON
#[pyfunction]
#[pyo3(signature = (scenarios_json, processes=1))]
fn compare_scenarios(scenarios_json: &str, processes: u32) -> PyResult<String> {
    let scenarios = json::scenarios_from_str(scenarios_json).map_err(to_py_err)?;
    let config = ConfigurationBuilder::default()
        .processes(processes)
        .build()
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
    let comparison =
        tocrs_core::comparison::solve_all(&scenarios, &config).map_err(to_py_err)?;
    json::comparison_to_json(&comparison).map_err(to_py_err)
}

/// The canonical scenarios as a JSON scenario set
#[pyfunction]
fn default_scenarios_json() -> PyResult<String> {
    json::scenarios_to_string(&default_scenarios()).map_err(to_py_err)
}

/// Send log messages of the solver to stderr, `level` is an env filter such as "debug"
#[pyfunction]
#[pyo3(signature = (level="info"))]
fn init_logging(level: &str) -> PyResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

/// A Python module implemented in Rust. The name of this function must match
/// the `lib.name` setting in the `Cargo.toml`, else Python will not be able to
/// import the module.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(solve_scenario, m)?)?;
    m.add_function(wrap_pyfunction!(compare_scenarios, m)?)?;
    m.add_function(wrap_pyfunction!(default_scenarios_json, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    m.add_class::<PySolutionResult>()?;
    m.add_class::<PyStageUsage>()?;
    m.add_class::<PyConstraintRow>()?;
    Ok(())
}
