//! Dependency Graph Application Layer
//!
//! Main entry point: `BuildDependencyGraphUseCase::new(DependencyGraphBuilder::new())`

use crate::errors::Result;
use crate::features::dependency_graph::infrastructure::DependencyGraph;
use crate::features::dependency_graph::ports::DependencyAnalyzer;
use crate::shared::models::ProcedureBody;
use rayon::prelude::*;
use tracing::{info, warn};

pub struct BuildDependencyGraphUseCase<A: DependencyAnalyzer> {
    analyzer: A,
}

impl<A: DependencyAnalyzer> BuildDependencyGraphUseCase<A> {
    pub fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    pub fn execute(&self, body: &ProcedureBody) -> Result<DependencyGraph> {
        self.analyzer.analyze(body)
    }

    /// Build every body in parallel.
    ///
    /// Bodies are independent; one failing body does not affect the others.
    /// Results keep the input order.
    pub fn execute_all(&self, bodies: &[ProcedureBody]) -> Vec<Result<DependencyGraph>> {
        let results: Vec<Result<DependencyGraph>> = bodies
            .par_iter()
            .map(|body| self.analyzer.analyze(body))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(failed, total = bodies.len(), "some dependency graphs failed");
        }
        info!(
            bodies = bodies.len(),
            built = bodies.len() - failed,
            "dependency graphs built"
        );

        results
    }
}
