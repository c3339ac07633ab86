//! Plan creation observers.

use crate::models::Plan;
use std::io::Write;

/// Hook notified once for every plan that is successfully built.
pub trait PlanObserver {
    fn plan_created(&self, plan: &Plan);
}

impl<F> PlanObserver for F
where
    F: Fn(&Plan),
{
    fn plan_created(&self, plan: &Plan) {
        self(plan)
    }
}

/// Emits a structured `info` event per plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPlanObserver;

impl PlanObserver for TracingPlanObserver {
    fn plan_created(&self, plan: &Plan) {
        tracing::info!(
            customer = %plan.customer().name(),
            brand = %plan.phone().brand(),
            model = %plan.phone().model(),
            serial_number = %plan.phone().serial_number(),
            contract_months = plan.contract().months(),
            monthly_price = plan.monthly_price(),
            total_price = plan.total_price(),
            currency = %plan.currency(),
            phone_included = plan.phone_included(),
            "Plan created"
        );
    }
}

/// Writes a human-readable announcement to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutPlanObserver;

impl StdoutPlanObserver {
    /// The two announcement lines, without trailing newline.
    pub fn render(plan: &Plan) -> String {
        format!(
            "Plan for {} created.\nPlan details: {}",
            plan.customer().name(),
            plan
        )
    }
}

impl PlanObserver for StdoutPlanObserver {
    fn plan_created(&self, plan: &Plan) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", Self::render(plan)) {
            tracing::warn!("Failed to announce plan on stdout: {}", e);
        }
    }
}
