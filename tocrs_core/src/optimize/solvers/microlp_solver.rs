//! Implements a solver interface for microlp
use microlp::{ComparisonOp, OptimizationDirection, Problem};
use nalgebra::DVector;

use crate::optimize::objective::ObjectiveSense;
use crate::optimize::problem::LinearProgram;
use crate::optimize::solvers::{assemble_solution, Solver, SolverError};
use crate::optimize::{OptimizationStatus, ProblemSolution};

/// Solves linear programs with the microlp simplex solver
///
/// microlp does not report dual values, so once the program is solved the dual program
/// `min (b - A*lb)'y s.t. A'y >= c, y >= 0` (written for a maximization) is solved as well,
/// and its solution gives the shadow prices.
#[derive(Clone, Debug, Default)]
pub struct MicrolpSolver {}

impl MicrolpSolver {
    /// Create a new microlp solver
    pub fn new() -> Self {
        MicrolpSolver {}
    }

    /// Solve the dual of a maximization program with objective `c`
    fn solve_dual(
        &self,
        program: &LinearProgram,
        c: &DVector<f64>,
    ) -> Result<DVector<f64>, SolverError> {
        let a = program.constraint_matrix();
        let shifted_bounds = program.bounds() - &a * program.lower_bounds();

        let mut dual = Problem::new(OptimizationDirection::Minimize);
        let prices: Vec<_> = shifted_bounds
            .iter()
            .map(|b| dual.add_var(*b, (0., f64::INFINITY)))
            .collect();
        for (j, column) in a.column_iter().enumerate() {
            dual.add_constraint(
                prices.iter().copied().zip(column.iter().copied()),
                ComparisonOp::Ge,
                c[j],
            );
        }
        let solution = dual
            .solve()
            .map_err(|e| SolverError::Backend(format!("dual program: {}", e)))?;
        Ok(DVector::from_iterator(
            prices.len(),
            prices.iter().map(|y| solution[*y]),
        ))
    }
}

impl Solver for MicrolpSolver {
    fn name(&self) -> &'static str {
        "microlp"
    }

    fn solve(&self, program: &LinearProgram) -> Result<ProblemSolution, SolverError> {
        let sign = match program.objective().sense() {
            ObjectiveSense::Maximize => 1.,
            ObjectiveSense::Minimize => -1.,
        };
        // Always solved as a maximization of sign * c
        let c = program.objective_coefficients() * sign;

        let mut primal = Problem::new(OptimizationDirection::Maximize);
        let vars: Vec<_> = program
            .variables()
            .values()
            .zip(c.iter())
            .map(|(v, coef)| primal.add_var(*coef, (v.lower_bound(), f64::INFINITY)))
            .collect();
        let a = program.constraint_matrix();
        for (row, bound) in a.row_iter().zip(program.bounds().iter()) {
            primal.add_constraint(
                vars.iter().copied().zip(row.iter().copied()),
                ComparisonOp::Le,
                *bound,
            );
        }

        let solution = match primal.solve() {
            Ok(solution) => solution,
            Err(microlp::Error::Infeasible) => {
                return Ok(ProblemSolution::not_optimal(OptimizationStatus::Infeasible))
            }
            Err(microlp::Error::Unbounded) => {
                return Ok(ProblemSolution::not_optimal(OptimizationStatus::Unbounded))
            }
            #[allow(unreachable_patterns)]
            Err(other) => {
                tracing::warn!(error = %other, "microlp stopped without a conclusion");
                return Ok(ProblemSolution::not_optimal(OptimizationStatus::Undefined));
            }
        };
        let x = DVector::from_iterator(vars.len(), vars.iter().map(|v| solution[*v]));
        let duals = self.solve_dual(program, &c)? * sign;
        Ok(assemble_solution(program, &x, &duals))
    }
}
