//! Observability hooks for plan creation.
//!
//! Plans do not print or log anything on their own. Callers attach a
//! [`PlanObserver`] to the builder to decide what happens when a plan is made.

pub mod plan_observer;

pub use plan_observer::{PlanObserver, StdoutPlanObserver, TracingPlanObserver};
