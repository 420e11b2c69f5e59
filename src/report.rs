//! Text report formatters.
//!
//! Each formatter is a pure function from a configuration plus its
//! breakdown to a fixed-template plain-text report. Currency figures are
//! thousands-grouped with cents rounding and trailing zeros trimmed;
//! power figures use one decimal place.

use std::fmt;

use crate::factory::{FactoryBreakdown, FactoryConfig};
use crate::manpower::{ManpowerBreakdown, ManpowerConfig};
use crate::robot::{RobotBreakdown, RobotConfig};

/// Format a USD amount: `$` prefix, grouped integer part, at most two
/// decimal places with trailing zeros trimmed.
pub fn format_usd(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = cents / 100;
    let frac = (cents % 100) as u32;

    let mut out = String::new();
    if value < 0.0 && cents > 0 {
        out.push('-');
    }
    out.push('$');
    out.push_str(&group_thousands(whole));
    if frac != 0 {
        if frac % 10 == 0 {
            out.push_str(&format!(".{}", frac / 10));
        } else {
            out.push_str(&format!(".{frac:02}"));
        }
    }
    out
}

/// Format an integer count with thousands grouping.
pub fn format_count(value: u64) -> String {
    group_thousands(u128::from(value))
}

/// Format a power figure in kW with one decimal place.
pub fn format_kw(value: f64) -> String {
    format!("{value:.1}")
}

fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

struct FactoryReport<'a> {
    config: &'a FactoryConfig,
    breakdown: &'a FactoryBreakdown,
}

impl fmt::Display for FactoryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.config;
        let b = self.breakdown;

        writeln!(f, "AI Data Center Cost Analysis Report")?;
        writeln!(f, "===================================")?;
        writeln!(f)?;
        writeln!(f, "Facility Configuration:")?;
        writeln!(f, "- Size: {} sq ft", format_count(u64::from(c.facility_size)))?;
        writeln!(f, "- Racks: {}", c.rack_count)?;
        writeln!(f, "- GPU Type: {}", c.gpu_type.as_str().to_uppercase())?;
        writeln!(f, "- Total GPUs: {}", format_count(b.compute.gpu_count))?;
        writeln!(f, "- Power Draw: {} kW (with PUE)", format_kw(b.compute.total_power_with_pue))?;
        writeln!(f)?;
        writeln!(f, "Capital Expenditure (CAPEX):")?;
        writeln!(f, "- Building Construction: {}", format_usd(b.building_cost))?;
        writeln!(f, "- Infrastructure: {}", format_usd(b.infrastructure.total))?;
        writeln!(f, "- GPU Hardware: {}", format_usd(b.compute.gpu_cost))?;
        writeln!(f, "- Total CAPEX: {}", format_usd(b.totals.capex))?;
        writeln!(f)?;
        writeln!(f, "Operating Expenditure (OPEX - Annual):")?;
        writeln!(f, "- Electricity: {}", format_usd(b.operating.annual_power))?;
        writeln!(f, "- Staffing: {}", format_usd(b.operating.annual_staff))?;
        writeln!(f, "- Total Annual OPEX: {}", format_usd(b.operating.total))?;
        writeln!(f)?;
        writeln!(f, "5-Year Total Cost of Ownership: {}", format_usd(b.totals.five_year_tco))
    }
}

/// Render the data-center cost report.
pub fn factory_report(config: &FactoryConfig, breakdown: &FactoryBreakdown) -> String {
    FactoryReport { config, breakdown }.to_string()
}

struct ManpowerReport<'a> {
    config: &'a ManpowerConfig,
    breakdown: &'a ManpowerBreakdown,
}

impl fmt::Display for ManpowerReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.config;
        let b = self.breakdown;

        writeln!(f, "AI Manpower Cost Analysis Report")?;
        writeln!(f, "================================")?;
        writeln!(f)?;
        writeln!(f, "Project Configuration:")?;
        writeln!(f, "- Type: {}", c.project_type)?;
        writeln!(f, "- Region: {}", c.region.as_str().to_uppercase())?;
        writeln!(f, "- Employment: {}", c.employment_type.as_str())?;
        writeln!(f, "- Duration: {} months", c.project_duration)?;
        writeln!(f, "- Team Size: {} people", b.team_size)?;
        writeln!(f, "- Remote Work: {}", if c.remote_work { "Yes" } else { "No" })?;
        writeln!(f)?;
        writeln!(f, "Team Composition:")?;
        for role in &b.roles {
            writeln!(
                f,
                "- {}: {} @ {}/month = {}",
                role.name,
                role.count,
                format_usd(role.unit_cost),
                format_usd(role.total_cost)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Cost Summary:")?;
        writeln!(f, "- Monthly Cost: {}", format_usd(b.monthly_cost))?;
        writeln!(f, "- Total Project Cost: {}", format_usd(b.total_project_cost))?;
        match b.avg_cost_per_person {
            Some(avg) => writeln!(f, "- Average Cost per Person: {}/month", format_usd(avg)),
            None => writeln!(f, "- Average Cost per Person: n/a"),
        }
    }
}

/// Render the team cost report.
pub fn manpower_report(config: &ManpowerConfig, breakdown: &ManpowerBreakdown) -> String {
    ManpowerReport { config, breakdown }.to_string()
}

struct RobotReport<'a> {
    config: &'a RobotConfig,
    breakdown: &'a RobotBreakdown,
}

impl fmt::Display for RobotReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.config;
        let b = self.breakdown;

        writeln!(f, "AI Robot Cost Analysis Report")?;
        writeln!(f, "=============================")?;
        writeln!(f)?;
        writeln!(f, "Project Configuration:")?;
        writeln!(f, "- Team Size: {} developers", c.team_size)?;
        writeln!(f, "- Compute Module: {}", c.compute_module.as_str().to_uppercase())?;
        writeln!(f, "- LiDAR: {}", c.lidar_model.as_str())?;
        writeln!(f, "- Cameras: {}", c.camera_count)?;
        writeln!(f, "- Training Hours: {}", c.training_hours)?;
        writeln!(f, "- Cloud Region: {}", c.cloud_region.as_str())?;
        writeln!(f)?;
        writeln!(f, "Cost Breakdown:")?;
        writeln!(f, "- Licensing: {}", format_usd(b.licensing))?;
        writeln!(f, "- Hardware Total: {}", format_usd(b.hardware.total))?;
        writeln!(f, "  - Compute Module: {}", format_usd(b.hardware.module))?;
        writeln!(f, "  - LiDAR: {}", format_usd(b.hardware.lidar))?;
        writeln!(f, "  - Cameras: {}", format_usd(b.hardware.cameras))?;
        writeln!(f, "  - Actuators: {}", format_usd(b.hardware.actuators))?;
        writeln!(f, "  - Microcontroller: {}", format_usd(b.hardware.microcontroller))?;
        writeln!(f, "- Training: {}", format_usd(b.training))?;
        writeln!(f, "- Prototyping: {}", format_usd(b.prototyping))?;
        writeln!(f, "- Chassis: {}", format_usd(b.chassis))?;
        writeln!(f, "- Annual Power: {}", format_usd(b.annual_power))?;
        writeln!(f)?;
        writeln!(f, "TOTAL PROJECT COST: {}", format_usd(b.total))
    }
}

/// Render the robotics project cost report.
pub fn robot_report(config: &RobotConfig, breakdown: &RobotBreakdown) -> String {
    RobotReport { config, breakdown }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{factory, manpower, robot};

    #[test]
    fn usd_formatting() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(1_234_567.0), "$1,234,567");
        assert_eq!(format_usd(131.4), "$131.4");
        assert_eq!(format_usd(13_166.666_666), "$13,166.67");
        assert_eq!(format_usd(40_720.4), "$40,720.4");
        assert_eq!(format_usd(-5_000.0), "-$5,000");
        assert_eq!(format_usd(0.004), "$0");
    }

    #[test]
    fn count_and_kw_formatting() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(500), "500");
        assert_eq!(format_count(4_000), "4,000");
        assert_eq!(format_count(100_000), "100,000");
        assert_eq!(format_kw(6_004.0), "6004.0");
        assert_eq!(format_kw(3_800.25), "3800.2");
    }

    #[test]
    fn factory_report_contains_every_aggregate() {
        let config = factory::FactoryConfig::default();
        let breakdown = factory::calculate(&config);
        let report = factory_report(&config, &breakdown);

        assert!(report.contains("AI Data Center Cost Analysis Report"));
        assert!(report.contains("- Size: 100,000 sq ft"));
        assert!(report.contains("- Total GPUs: 4,000"));
        assert!(report.contains("- Power Draw: 6004.0 kW (with PUE)"));
        assert!(report.contains("- GPU Hardware: $123,880,000"));
        assert!(report.contains(&format!("- Building Construction: {}", format_usd(breakdown.building_cost))));
        assert!(report.contains(&format!("- Infrastructure: {}", format_usd(breakdown.infrastructure.total))));
        assert!(report.contains(&format!("- Total CAPEX: {}", format_usd(breakdown.totals.capex))));
        assert!(report.contains(&format!("- Electricity: {}", format_usd(breakdown.operating.annual_power))));
        assert!(report.contains(&format!("- Staffing: {}", format_usd(breakdown.operating.annual_staff))));
        assert!(report.contains(&format!("- Total Annual OPEX: {}", format_usd(breakdown.operating.total))));
        assert!(report.contains(&format!(
            "5-Year Total Cost of Ownership: {}",
            format_usd(breakdown.totals.five_year_tco)
        )));
    }

    #[test]
    fn manpower_report_lists_only_staffed_roles() {
        let config = manpower::ManpowerConfig {
            ai_researchers: 0,
            ..manpower::ManpowerConfig::default()
        };
        let breakdown = manpower::calculate(&config);
        let report = manpower_report(&config, &breakdown);

        assert!(report.contains("- Region: US"));
        assert!(report.contains("- ML Engineers: 2 @ "));
        assert!(!report.contains("AI Researchers"));
        assert!(report.contains(&format!("- Monthly Cost: {}", format_usd(breakdown.monthly_cost))));
        assert!(report.contains(&format!(
            "- Total Project Cost: {}",
            format_usd(breakdown.total_project_cost)
        )));
    }

    #[test]
    fn manpower_report_handles_empty_team() {
        let config = manpower::ManpowerConfig {
            ml_engineers: 0,
            ai_researchers: 0,
            data_scientists: 0,
            mlops_engineers: 0,
            devops_engineers: 0,
            product_managers: 0,
            ..manpower::ManpowerConfig::default()
        };
        let breakdown = manpower::calculate(&config);
        let report = manpower_report(&config, &breakdown);

        assert!(report.contains("- Team Size: 0 people"));
        assert!(report.contains("- Average Cost per Person: n/a"));
    }

    #[test]
    fn robot_report_contains_every_component() {
        let config = robot::RobotConfig::default();
        let breakdown = robot::calculate(&config);
        let report = robot_report(&config, &breakdown);

        assert!(report.contains("- Compute Module: ORIN-NX"));
        assert!(report.contains("- LiDAR: ouster-os1"));
        assert!(report.contains("- Licensing: $10,000"));
        assert!(report.contains("- Hardware Total: $7,339"));
        assert!(report.contains("  - Cameras: $700"));
        assert!(report.contains("- Training: $250"));
        assert!(report.contains("- Annual Power: $131.4"));
        assert!(report.contains("TOTAL PROJECT COST: $40,720.4"));
    }
}
