use crate::domain::model::{CostReport, DeploymentCosts};
use crate::output::format::{format_count, format_currency, format_percent};

const RULE: &str = "==================================================";
const THIN_RULE: &str = "--------------------------------------------------";

pub fn render_report(report: &CostReport) -> String {
    let mut out = String::new();

    out.push_str("\nKnative Cost Savings Calculator\n");
    out.push_str(RULE);
    out.push('\n');

    out.push_str("\nInput Parameters:\n");
    out.push_str(&format!("  Services: {}\n", report.inputs.services));
    out.push_str(&format!(
        "  Replicas per service: {}\n",
        report.inputs.replicas
    ));
    out.push_str(&format!(
        "  Usage hours/week: {}\n",
        report.inputs.usage_hours_per_week
    ));
    out.push_str(&format!(
        "  Cost per pod-hour: {}\n",
        format_currency(report.inputs.cost_per_unit_hour)
    ));

    out.push_str("\nResults:\n");
    out.push_str(THIN_RULE);
    out.push('\n');

    out.push_str("\nTraditional K8s (always-on):\n");
    push_projection(&mut out, &report.always_on);

    out.push_str("\nKnative (scale-to-zero):\n");
    push_projection(&mut out, &report.scale_to_zero);

    out.push_str("\nPotential Savings:\n");
    out.push_str(&format!(
        "  Weekly: {} ({})\n",
        format_currency(report.savings.per_week),
        format_percent(report.savings.percent)
    ));
    out.push_str(&format!(
        "  Monthly: {} ({})\n",
        format_currency(report.savings.per_month),
        format_percent(report.savings.percent)
    ));
    out.push_str(&format!(
        "  Yearly: {} ({})\n",
        format_currency(report.savings.per_year),
        format_percent(report.savings.percent)
    ));

    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str("Note: These are estimates based on YOUR inputs.\n");
    out.push_str("Actual savings depend on workload patterns and cold start tolerance.\n");
    out.push_str(RULE);
    out.push_str("\n\n");

    out
}

pub fn render_scenario(report: &CostReport) -> String {
    let name = report.name.as_deref().unwrap_or("Unnamed");
    format!("\n{}\nScenario: {}\n{}\n{}", RULE, name, RULE, render_report(report))
}

fn push_projection(out: &mut String, costs: &DeploymentCosts) {
    out.push_str(&format!(
        "  Pod-hours/week: {}\n",
        format_count(costs.unit_hours_per_week)
    ));
    out.push_str(&format!(
        "  Weekly cost: {}\n",
        format_currency(costs.cost_per_week)
    ));
    out.push_str(&format!(
        "  Monthly cost: {}\n",
        format_currency(costs.cost_per_month)
    ));
    out.push_str(&format!(
        "  Yearly cost: {}\n",
        format_currency(costs.cost_per_year)
    ));
}
