use csv::Writer;

use crate::domain::model::CostReport;
use crate::utils::error::Result;

pub fn single_report(report: &CostReport) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = Writer::from_writer(&mut buf);

        writer.write_record(["Metric", "Value"])?;

        writer.write_record([
            "Services".to_string(),
            report.inputs.services.to_string(),
        ])?;
        writer.write_record([
            "Replicas".to_string(),
            report.inputs.replicas.to_string(),
        ])?;
        writer.write_record([
            "Usage Hours/Week".to_string(),
            report.inputs.usage_hours_per_week.to_string(),
        ])?;
        writer.write_record([
            "Cost per Pod-Hour".to_string(),
            format!("${:.2}", report.inputs.cost_per_unit_hour),
        ])?;

        writer.write_record([
            "Traditional Pod-Hours/Week".to_string(),
            format!("{:.0}", report.always_on.unit_hours_per_week),
        ])?;
        writer.write_record([
            "Traditional Weekly Cost".to_string(),
            format!("${:.2}", report.always_on.cost_per_week),
        ])?;
        writer.write_record([
            "Traditional Monthly Cost".to_string(),
            format!("${:.2}", report.always_on.cost_per_month),
        ])?;
        writer.write_record([
            "Traditional Yearly Cost".to_string(),
            format!("${:.2}", report.always_on.cost_per_year),
        ])?;

        writer.write_record([
            "Knative Pod-Hours/Week".to_string(),
            format!("{:.0}", report.scale_to_zero.unit_hours_per_week),
        ])?;
        writer.write_record([
            "Knative Weekly Cost".to_string(),
            format!("${:.2}", report.scale_to_zero.cost_per_week),
        ])?;
        writer.write_record([
            "Knative Monthly Cost".to_string(),
            format!("${:.2}", report.scale_to_zero.cost_per_month),
        ])?;
        writer.write_record([
            "Knative Yearly Cost".to_string(),
            format!("${:.2}", report.scale_to_zero.cost_per_year),
        ])?;

        writer.write_record([
            "Weekly Savings".to_string(),
            format!("${:.2}", report.savings.per_week),
        ])?;
        writer.write_record([
            "Monthly Savings".to_string(),
            format!("${:.2}", report.savings.per_month),
        ])?;
        writer.write_record([
            "Yearly Savings".to_string(),
            format!("${:.2}", report.savings.per_year),
        ])?;
        writer.write_record([
            "Savings Percentage".to_string(),
            format!("{:.1}%", report.savings.percent),
        ])?;

        writer.flush()?;
    }
    Ok(buf)
}

pub fn batch_report(reports: &[CostReport]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = Writer::from_writer(&mut buf);

        writer.write_record([
            "Scenario",
            "Services",
            "Replicas",
            "Usage Hours",
            "Cost/Hour",
            "Traditional Yearly",
            "Knative Yearly",
            "Yearly Savings",
            "Savings %",
        ])?;

        for report in reports {
            writer.write_record([
                report.name.clone().unwrap_or_else(|| "Unnamed".to_string()),
                report.inputs.services.to_string(),
                report.inputs.replicas.to_string(),
                report.inputs.usage_hours_per_week.to_string(),
                format!("${:.2}", report.inputs.cost_per_unit_hour),
                format!("${:.2}", report.always_on.cost_per_year),
                format!("${:.2}", report.scale_to_zero.cost_per_year),
                format!("${:.2}", report.savings.per_year),
                format!("{:.1}%", report.savings.percent),
            ])?;
        }

        writer.flush()?;
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::batch::run_batch;
    use crate::core::calculator::compute_cost_report;
    use crate::domain::model::{CostInputs, Scenario};

    fn sample_report() -> CostReport {
        compute_cost_report(CostInputs {
            services: 10,
            replicas: 3,
            usage_hours_per_week: 45.0,
            cost_per_unit_hour: 0.05,
        })
        .unwrap()
    }

    #[test]
    fn test_single_report_lists_metric_value_pairs() {
        let data = single_report(&sample_report()).unwrap();
        let text = String::from_utf8(data).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Metric,Value");
        assert!(lines.contains(&"Services,10"));
        assert!(lines.contains(&"Usage Hours/Week,45"));
        assert!(lines.contains(&"Cost per Pod-Hour,$0.05"));
        assert!(lines.contains(&"Traditional Weekly Cost,$252.00"));
        assert!(lines.contains(&"Knative Weekly Cost,$67.50"));
        assert!(lines.contains(&"Yearly Savings,$9594.00"));
        assert!(lines.contains(&"Savings Percentage,73.2%"));
    }

    #[test]
    fn test_batch_report_one_row_per_scenario() {
        let reports = run_batch(vec![
            Scenario {
                name: Some("small".to_string()),
                services: 2,
                replicas: 1,
                usage_hours: 10.0,
                cost_per_hour: 0.05,
            },
            Scenario {
                name: None,
                services: 10,
                replicas: 3,
                usage_hours: 45.0,
                cost_per_hour: 0.05,
            },
        ])
        .unwrap();

        let data = batch_report(&reports).unwrap();
        let text = String::from_utf8(data).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Scenario,Services,Replicas,Usage Hours,Cost/Hour,Traditional Yearly,Knative Yearly,Yearly Savings,Savings %"
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("small,2,1,10,$0.05,"));
        assert!(lines[2].starts_with("Unnamed,10,3,45,$0.05,"));
        assert!(lines[2].contains("$13104.00"));
        assert!(lines[2].ends_with("73.2%"));
    }
}
