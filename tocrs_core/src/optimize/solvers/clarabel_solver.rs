//! Implements a solver interface for Clarabel
use clarabel::algebra::CscMatrix;
use clarabel::solver::{
    DefaultSettingsBuilder, DefaultSolver, IPSolver, SolverStatus, SupportedConeT,
};
use nalgebra::{DMatrix, DVector};

use crate::optimize::objective::ObjectiveSense;
use crate::optimize::problem::LinearProgram;
use crate::optimize::solvers::{assemble_solution, Solver, SolverError};
use crate::optimize::{OptimizationStatus, ProblemSolution};

/// Solves linear programs with the Clarabel interior point solver
///
/// The program is handed to Clarabel as `min q'x s.t. Ax + s = b, s >= 0`, where the
/// rows of `A` are the constraints of the program followed by one `-x <= -lower_bound`
/// row per variable. For a maximization the objective is negated, the dual values of the
/// constraint rows are converted back into shadow prices of the program objective.
#[derive(Clone, Debug)]
pub struct ClarabelSolver {
    /// Maximum number of interior point iterations
    max_iterations: u32,
    /// Feasibility and duality gap tolerance
    tolerance: f64,
}

impl ClarabelSolver {
    /// Create a new Clarabel solver
    pub fn new(max_iterations: u32, tolerance: f64) -> Self {
        ClarabelSolver {
            max_iterations,
            tolerance,
        }
    }
}

impl Solver for ClarabelSolver {
    fn name(&self) -> &'static str {
        "clarabel"
    }

    fn solve(&self, program: &LinearProgram) -> Result<ProblemSolution, SolverError> {
        let n = program.num_variables();
        let m = program.num_constraints();

        let sign = match program.objective().sense() {
            ObjectiveSense::Maximize => -1.,
            ObjectiveSense::Minimize => 1.,
        };
        let q: Vec<f64> = program
            .objective_coefficients()
            .iter()
            .map(|c| sign * c)
            .collect();

        let mut a = DMatrix::zeros(m + n, n);
        a.view_mut((0, 0), (m, n))
            .copy_from(&program.constraint_matrix());
        for j in 0..n {
            a[(m + j, j)] = -1.;
        }
        let b: Vec<f64> = program
            .bounds()
            .iter()
            .copied()
            .chain(program.lower_bounds().iter().map(|lb| -lb))
            .collect();

        let p = CscMatrix::<f64>::zeros((n, n));
        let a = to_csc(&a);
        let cones = [SupportedConeT::NonnegativeConeT(m + n)];
        let settings = DefaultSettingsBuilder::default()
            .verbose(false)
            .max_iter(self.max_iterations)
            .tol_feas(self.tolerance)
            .tol_gap_abs(self.tolerance)
            .tol_gap_rel(self.tolerance)
            .build()
            .map_err(|e| SolverError::InvalidSettings(e.to_string()))?;

        let mut solver = DefaultSolver::new(&p, &q, &a, &b, &cones, settings);
        solver.solve();

        let status = match solver.solution.status {
            SolverStatus::Solved => OptimizationStatus::Optimal,
            SolverStatus::AlmostSolved => {
                tracing::warn!("clarabel only reached reduced accuracy, reporting as optimal");
                OptimizationStatus::Optimal
            }
            SolverStatus::PrimalInfeasible | SolverStatus::AlmostPrimalInfeasible => {
                OptimizationStatus::Infeasible
            }
            SolverStatus::DualInfeasible | SolverStatus::AlmostDualInfeasible => {
                OptimizationStatus::Unbounded
            }
            other => {
                tracing::warn!(status = ?other, "clarabel stopped without a conclusion");
                OptimizationStatus::Undefined
            }
        };
        if status != OptimizationStatus::Optimal {
            return Ok(ProblemSolution::not_optimal(status));
        }

        let x = DVector::from_column_slice(&solver.solution.x);
        // z is the dual of the minimization Clarabel solved, flip back to the program's sense
        let duals = DVector::from_iterator(
            m,
            solver.solution.z.iter().take(m).map(|z| -sign * z),
        );
        Ok(assemble_solution(program, &x, &duals))
    }
}

/// Convert a dense matrix into Clarabel's compressed sparse column format
fn to_csc(dense: &DMatrix<f64>) -> CscMatrix<f64> {
    let sparse = nalgebra_sparse::CscMatrix::from(dense);
    CscMatrix::new(
        sparse.nrows(),
        sparse.ncols(),
        sparse.col_offsets().to_vec(),
        sparse.row_indices().to_vec(),
        sparse.values().to_vec(),
    )
}
