//! AI team staffing cost calculator.
//!
//! Per-role monthly costs come from region salary tables; full-time
//! salaries are annual figures divided by 12, freelance rates are hourly
//! figures at 160 billable hours a month. Remote work applies a flat 15%
//! discount to every role total.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const WORK_HOURS_PER_MONTH: f64 = 160.0;
pub const REMOTE_DISCOUNT: f64 = 0.85;

/// Hiring region for the whole team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Us,
    Eu,
    India,
    Asia,
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
            Region::India => "india",
            Region::Asia => "asia",
        }
    }

    /// Full-time annual salary in USD for a role hired in this region.
    pub fn fulltime_salary(self, role: Role) -> f64 {
        use Region::*;
        use Role::*;
        match (self, role) {
            (Us, MlEngineer) => 158_000.0,
            (Us, AiResearcher) => 258_000.0,
            (Us, DataScientist) => 140_000.0,
            (Us, MlopsEngineer) => 155_000.0,
            (Us, DevopsEngineer) => 135_000.0,
            (Us, ProductManager) => 180_000.0,
            (Eu, MlEngineer) => 95_000.0,
            (Eu, AiResearcher) => 180_000.0,
            (Eu, DataScientist) => 85_000.0,
            (Eu, MlopsEngineer) => 105_000.0,
            (Eu, DevopsEngineer) => 90_000.0,
            (Eu, ProductManager) => 120_000.0,
            (India, MlEngineer) => 25_000.0,
            (India, AiResearcher) => 45_000.0,
            (India, DataScientist) => 22_000.0,
            (India, MlopsEngineer) => 28_000.0,
            (India, DevopsEngineer) => 20_000.0,
            (India, ProductManager) => 35_000.0,
            (Asia, MlEngineer) => 55_000.0,
            (Asia, AiResearcher) => 95_000.0,
            (Asia, DataScientist) => 48_000.0,
            (Asia, MlopsEngineer) => 58_000.0,
            (Asia, DevopsEngineer) => 45_000.0,
            (Asia, ProductManager) => 75_000.0,
        }
    }

    /// Freelance hourly rate in USD for a role hired in this region.
    pub fn freelance_rate(self, role: Role) -> f64 {
        use Region::*;
        use Role::*;
        match (self, role) {
            (Us, MlEngineer) => 150.0,
            (Us, AiResearcher) => 200.0,
            (Us, DataScientist) => 130.0,
            (Us, MlopsEngineer) => 140.0,
            (Us, DevopsEngineer) => 125.0,
            (Us, ProductManager) => 160.0,
            (Eu, MlEngineer) => 120.0,
            (Eu, AiResearcher) => 150.0,
            (Eu, DataScientist) => 100.0,
            (Eu, MlopsEngineer) => 110.0,
            (Eu, DevopsEngineer) => 95.0,
            (Eu, ProductManager) => 130.0,
            (India, MlEngineer) => 35.0,
            (India, AiResearcher) => 55.0,
            (India, DataScientist) => 30.0,
            (India, MlopsEngineer) => 38.0,
            (India, DevopsEngineer) => 28.0,
            (India, ProductManager) => 45.0,
            (Asia, MlEngineer) => 65.0,
            (Asia, AiResearcher) => 110.0,
            (Asia, DataScientist) => 55.0,
            (Asia, MlopsEngineer) => 68.0,
            (Asia, DevopsEngineer) => 52.0,
            (Asia, ProductManager) => 85.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    Fulltime,
    Freelance,
}

impl EmploymentType {
    pub fn as_str(self) -> &'static str {
        match self {
            EmploymentType::Fulltime => "fulltime",
            EmploymentType::Freelance => "freelance",
        }
    }
}

/// Team roles, in the order they appear in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    MlEngineer,
    AiResearcher,
    DataScientist,
    MlopsEngineer,
    DevopsEngineer,
    ProductManager,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::MlEngineer,
        Role::AiResearcher,
        Role::DataScientist,
        Role::MlopsEngineer,
        Role::DevopsEngineer,
        Role::ProductManager,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Role::MlEngineer => "ML Engineers",
            Role::AiResearcher => "AI Researchers",
            Role::DataScientist => "Data Scientists",
            Role::MlopsEngineer => "MLOps Engineers",
            Role::DevopsEngineer => "DevOps Engineers",
            Role::ProductManager => "Product Managers",
        }
    }
}

/// Team configuration. `project_type` is informational only and never
/// enters the arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManpowerConfig {
    pub project_type: String,
    pub region: Region,
    pub employment_type: EmploymentType,
    /// Duration in months.
    #[serde(deserialize_with = "crate::input::lenient_or_one")]
    pub project_duration: u32,
    #[serde(deserialize_with = "crate::input::lenient")]
    pub ml_engineers: u32,
    #[serde(deserialize_with = "crate::input::lenient")]
    pub ai_researchers: u32,
    #[serde(deserialize_with = "crate::input::lenient")]
    pub data_scientists: u32,
    #[serde(deserialize_with = "crate::input::lenient")]
    pub mlops_engineers: u32,
    #[serde(deserialize_with = "crate::input::lenient")]
    pub devops_engineers: u32,
    #[serde(deserialize_with = "crate::input::lenient")]
    pub product_managers: u32,
    pub remote_work: bool,
}

impl ManpowerConfig {
    pub fn role_count(&self, role: Role) -> u32 {
        match role {
            Role::MlEngineer => self.ml_engineers,
            Role::AiResearcher => self.ai_researchers,
            Role::DataScientist => self.data_scientists,
            Role::MlopsEngineer => self.mlops_engineers,
            Role::DevopsEngineer => self.devops_engineers,
            Role::ProductManager => self.product_managers,
        }
    }

    pub fn team_size(&self) -> u32 {
        Role::ALL.iter().map(|r| self.role_count(*r)).sum()
    }
}

impl Default for ManpowerConfig {
    fn default() -> Self {
        Self {
            project_type: "rag-system".to_string(),
            region: Region::Us,
            employment_type: EmploymentType::Fulltime,
            project_duration: 6,
            ml_engineers: 2,
            ai_researchers: 1,
            data_scientists: 1,
            mlops_engineers: 1,
            devops_engineers: 1,
            product_managers: 1,
            remote_work: false,
        }
    }
}

/// Cost line for one role. `unit_cost` is the monthly cost per person
/// before the remote discount; `total_cost` is after it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCost {
    pub role: Role,
    pub name: &'static str,
    pub count: u32,
    pub unit_cost: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManpowerBreakdown {
    /// Roles with a non-zero headcount, in declaration order.
    pub roles: Vec<RoleCost>,
    pub monthly_cost: f64,
    pub total_project_cost: f64,
    pub team_size: u32,
    /// `None` when the team is empty.
    pub avg_cost_per_person: Option<f64>,
}

/// Calculate the team cost breakdown.
///
/// Roles with zero headcount are omitted from the breakdown entirely;
/// they still contribute zero to the team size.
pub fn calculate(config: &ManpowerConfig) -> ManpowerBreakdown {
    let remote_multiplier = if config.remote_work { REMOTE_DISCOUNT } else { 1.0 };

    let mut monthly_cost = 0.0;
    let mut roles = Vec::new();
    for role in Role::ALL {
        let count = config.role_count(role);
        if count == 0 {
            continue;
        }

        let unit_cost = match config.employment_type {
            EmploymentType::Freelance => config.region.freelance_rate(role) * WORK_HOURS_PER_MONTH,
            EmploymentType::Fulltime => config.region.fulltime_salary(role) / 12.0,
        };
        let total_cost = unit_cost * f64::from(count) * remote_multiplier;
        monthly_cost += total_cost;

        roles.push(RoleCost {
            role,
            name: role.display_name(),
            count,
            unit_cost,
            total_cost,
        });
    }

    let team_size = config.team_size();
    let avg_cost_per_person = if team_size == 0 {
        None
    } else {
        Some(monthly_cost / f64::from(team_size))
    };

    ManpowerBreakdown {
        roles,
        monthly_cost,
        total_project_cost: monthly_cost * f64::from(config.project_duration),
        team_size,
        avg_cost_per_person,
    }
}
