//! AI robotics project cost calculator.
//!
//! Sums per-seat licensing, a single-robot hardware bill of materials,
//! cloud training time, prototyping, a fixed chassis cost, and a yearly
//! power estimate at a fixed 100 W average draw.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

const LICENSE_COST_PER_SEAT: f64 = 2_000.0;
const CAMERA_UNIT_COST: f64 = 350.0;
const ACTUATOR_UNIT_COST: f64 = 200.0;
const MICROCONTROLLER_COST: f64 = 40.0;
const PROTOTYPE_UNIT_COST: f64 = 1_500.0;
const CHASSIS_COST: f64 = 20_000.0;
/// Assumed average draw of the robot in kW.
const AVERAGE_DRAW_KW: f64 = 0.1;
const HOURS_PER_YEAR: f64 = 365.0 * 24.0;

/// Embedded compute module options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComputeModule {
    OrinNx,
    OrinAgx,
}

impl ComputeModule {
    /// Unit price in USD.
    pub fn unit_price(self) -> f64 {
        match self {
            ComputeModule::OrinNx => 399.0,
            ComputeModule::OrinAgx => 1_999.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComputeModule::OrinNx => "orin-nx",
            ComputeModule::OrinAgx => "orin-agx",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LidarModel {
    OusterOs1,
    VelodyneVlp16,
}

impl LidarModel {
    /// Unit price in USD.
    pub fn unit_price(self) -> f64 {
        match self {
            LidarModel::OusterOs1 => 5_000.0,
            LidarModel::VelodyneVlp16 => 4_000.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LidarModel::OusterOs1 => "ouster-os1",
            LidarModel::VelodyneVlp16 => "velodyne-vlp16",
        }
    }
}

/// Cloud region used for model training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloudRegion {
    UsEast,
    UsWest,
    EuWest,
}

impl CloudRegion {
    /// GPU instance rate in USD per hour.
    pub fn hourly_rate(self) -> f64 {
        match self {
            CloudRegion::UsEast => 2.50,
            CloudRegion::UsWest => 2.75,
            CloudRegion::EuWest => 3.20,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CloudRegion::UsEast => "us-east",
            CloudRegion::UsWest => "us-west",
            CloudRegion::EuWest => "eu-west",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RobotConfig {
    #[serde(deserialize_with = "crate::input::lenient")]
    pub team_size: u32,
    pub compute_module: ComputeModule,
    pub lidar_model: LidarModel,
    #[serde(deserialize_with = "crate::input::lenient")]
    pub camera_count: u32,
    #[serde(deserialize_with = "crate::input::lenient")]
    pub actuator_count: u32,
    #[serde(deserialize_with = "crate::input::lenient")]
    pub training_hours: u32,
    #[serde(deserialize_with = "crate::input::lenient")]
    pub prototype_count: u32,
    pub cloud_region: CloudRegion,
    #[serde(deserialize_with = "crate::input::lenient")]
    pub power_cost_per_kwh: f64,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            team_size: 5,
            compute_module: ComputeModule::OrinNx,
            lidar_model: LidarModel::OusterOs1,
            camera_count: 2,
            actuator_count: 6,
            training_hours: 100,
            prototype_count: 2,
            cloud_region: CloudRegion::UsEast,
            power_cost_per_kwh: 0.15,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareCosts {
    pub module: f64,
    pub lidar: f64,
    pub cameras: f64,
    pub actuators: f64,
    pub microcontroller: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotBreakdown {
    pub licensing: f64,
    pub hardware: HardwareCosts,
    pub training: f64,
    pub prototyping: f64,
    pub chassis: f64,
    pub annual_power: f64,
    pub total: f64,
}

/// Calculate the robotics project cost breakdown.
pub fn calculate(config: &RobotConfig) -> RobotBreakdown {
    let licensing = f64::from(config.team_size) * LICENSE_COST_PER_SEAT;

    let module = config.compute_module.unit_price();
    let lidar = config.lidar_model.unit_price();
    let cameras = f64::from(config.camera_count) * CAMERA_UNIT_COST;
    let actuators = f64::from(config.actuator_count) * ACTUATOR_UNIT_COST;
    let hardware_total = module + lidar + cameras + actuators + MICROCONTROLLER_COST;

    let training = f64::from(config.training_hours) * config.cloud_region.hourly_rate();
    let prototyping = f64::from(config.prototype_count) * PROTOTYPE_UNIT_COST;
    let annual_power = HOURS_PER_YEAR * AVERAGE_DRAW_KW * config.power_cost_per_kwh;

    let total = licensing + hardware_total + training + prototyping + CHASSIS_COST + annual_power;

    RobotBreakdown {
        licensing,
        hardware: HardwareCosts {
            module,
            lidar,
            cameras,
            actuators,
            microcontroller: MICROCONTROLLER_COST,
            total: hardware_total,
        },
        training,
        prototyping,
        chassis: CHASSIS_COST,
        annual_power,
        total,
    }
}
