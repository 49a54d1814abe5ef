//! Feature modules
//!
//! Each feature contains:
//! - domain/         - Value types shared by the feature
//! - ports/          - Interface definitions (traits)
//! - application/    - Use cases
//! - infrastructure/ - Implementations

pub mod dependency_graph;
