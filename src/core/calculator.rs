use crate::domain::model::{CostInputs, CostReport, DeploymentCosts, Savings};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const HOURS_PER_WEEK: f64 = 168.0;
pub const WEEKS_PER_MONTH: f64 = 4.33; // average
pub const WEEKS_PER_YEAR: f64 = 52.0;

impl Validate for CostInputs {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_count("services", self.services)?;
        validation::validate_positive_count("replicas", self.replicas)?;
        validation::validate_positive_number("usage_hours", self.usage_hours_per_week)?;
        validation::validate_max("usage_hours", self.usage_hours_per_week, HOURS_PER_WEEK)?;
        validation::validate_positive_number("cost_per_hour", self.cost_per_unit_hour)?;
        Ok(())
    }
}

pub fn compute_cost_report(inputs: CostInputs) -> Result<CostReport> {
    inputs.validate()?;

    let instances = f64::from(inputs.services) * f64::from(inputs.replicas);

    let always_on = projection(instances * HOURS_PER_WEEK, inputs.cost_per_unit_hour);
    let scale_to_zero = projection(
        instances * inputs.usage_hours_per_week,
        inputs.cost_per_unit_hour,
    );

    let per_week = always_on.cost_per_week - scale_to_zero.cost_per_week;
    // guard is unreachable for validated inputs
    let percent = if always_on.cost_per_week > 0.0 {
        per_week / always_on.cost_per_week * 100.0
    } else {
        0.0
    };

    let savings = Savings {
        per_week,
        per_month: always_on.cost_per_month - scale_to_zero.cost_per_month,
        per_year: always_on.cost_per_year - scale_to_zero.cost_per_year,
        percent,
    };

    Ok(CostReport {
        name: None,
        inputs,
        always_on,
        scale_to_zero,
        savings,
    })
}

fn projection(unit_hours_per_week: f64, cost_per_unit_hour: f64) -> DeploymentCosts {
    let cost_per_week = unit_hours_per_week * cost_per_unit_hour;
    DeploymentCosts {
        unit_hours_per_week,
        cost_per_week,
        cost_per_month: cost_per_week * WEEKS_PER_MONTH,
        cost_per_year: cost_per_week * WEEKS_PER_YEAR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CalcError;

    fn inputs(services: u32, replicas: u32, usage_hours: f64, cost_per_hour: f64) -> CostInputs {
        CostInputs {
            services,
            replicas,
            usage_hours_per_week: usage_hours,
            cost_per_unit_hour: cost_per_hour,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_reference_scenario() {
        let report = compute_cost_report(inputs(10, 3, 45.0, 0.05)).unwrap();

        assert_close(report.always_on.unit_hours_per_week, 5040.0);
        assert_close(report.always_on.cost_per_week, 252.0);
        assert_close(report.scale_to_zero.unit_hours_per_week, 1350.0);
        assert_close(report.scale_to_zero.cost_per_week, 67.5);
        assert_close(report.savings.per_week, 184.5);
        assert_close(report.savings.percent, 73.21428571428571);
    }

    #[test]
    fn test_monthly_and_yearly_projections() {
        let report = compute_cost_report(inputs(10, 3, 45.0, 0.05)).unwrap();

        assert_close(report.always_on.cost_per_month, 252.0 * WEEKS_PER_MONTH);
        assert_close(report.always_on.cost_per_year, 252.0 * WEEKS_PER_YEAR);
        assert_close(report.savings.per_month, 184.5 * WEEKS_PER_MONTH);
        assert_close(report.savings.per_year, 184.5 * WEEKS_PER_YEAR);
    }

    #[test]
    fn test_full_week_usage_has_zero_savings() {
        let report = compute_cost_report(inputs(4, 2, 168.0, 0.10)).unwrap();

        assert_eq!(report.savings.per_week, 0.0);
        assert_eq!(report.savings.per_month, 0.0);
        assert_eq!(report.savings.per_year, 0.0);
        assert_eq!(report.savings.percent, 0.0);
    }

    #[test]
    fn test_usage_hours_above_week_rejected() {
        let result = compute_cost_report(inputs(4, 2, 168.0001, 0.10));
        assert!(matches!(result, Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_non_positive_inputs_rejected() {
        assert!(compute_cost_report(inputs(0, 2, 45.0, 0.05)).is_err());
        assert!(compute_cost_report(inputs(10, 0, 45.0, 0.05)).is_err());
        assert!(compute_cost_report(inputs(10, 3, 0.0, 0.05)).is_err());
        assert!(compute_cost_report(inputs(10, 3, -1.0, 0.05)).is_err());
        assert!(compute_cost_report(inputs(10, 3, 45.0, 0.0)).is_err());
        assert!(compute_cost_report(inputs(10, 3, 45.0, -0.05)).is_err());
    }

    #[test]
    fn test_savings_shrink_as_usage_grows() {
        let low = compute_cost_report(inputs(5, 2, 20.0, 0.08)).unwrap();
        let mid = compute_cost_report(inputs(5, 2, 80.0, 0.08)).unwrap();
        let high = compute_cost_report(inputs(5, 2, 140.0, 0.08)).unwrap();

        assert!(low.savings.per_week > mid.savings.per_week);
        assert!(mid.savings.per_week > high.savings.per_week);
    }

    #[test]
    fn test_costs_scale_linearly_with_services() {
        let base = compute_cost_report(inputs(10, 3, 45.0, 0.05)).unwrap();
        let doubled = compute_cost_report(inputs(20, 3, 45.0, 0.05)).unwrap();

        assert_close(doubled.always_on.cost_per_week, base.always_on.cost_per_week * 2.0);
        assert_close(
            doubled.scale_to_zero.cost_per_week,
            base.scale_to_zero.cost_per_week * 2.0,
        );
        assert_close(doubled.savings.per_week, base.savings.per_week * 2.0);
    }

    #[test]
    fn test_percent_stays_within_range() {
        for usage in [0.1, 1.0, 42.0, 100.0, 167.9] {
            let report = compute_cost_report(inputs(3, 3, usage, 0.07)).unwrap();
            assert!(report.scale_to_zero.cost_per_week <= report.always_on.cost_per_week);
            assert!(report.savings.percent >= 0.0);
            assert!(report.savings.percent < 100.0);
        }
    }
}
