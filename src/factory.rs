//! AI data-center build and operating cost calculator.
//!
//! Maps a facility configuration through static pricing tables to an
//! itemized CAPEX/OPEX breakdown with a 5-year total cost of ownership.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

const RACK_UNIT_COST: f64 = 3_000.0;
const NETWORKING_COST_PER_RACK: f64 = 30_000.0;
/// Non-GPU draw per rack (switches, fans, CPUs) in watts.
const RACK_OVERHEAD_WATTS: f64 = 2_000.0;
const HOURS_PER_YEAR: f64 = 24.0 * 365.0;
/// Cooling plant is sized in 5 MW increments.
const COOLING_STEP_KW: f64 = 5_000.0;
const COOLING_STEP_COST: f64 = 2_000_000.0;
/// Backup power is sized in 2 MW increments.
const BACKUP_STEP_KW: f64 = 2_000.0;
const BACKUP_STEP_COST: f64 = 750_000.0;
const TCO_YEARS: f64 = 5.0;

/// GPU models offered for the compute build-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GpuType {
    H100,
    A100,
    L40s,
}

impl GpuType {
    /// Unit price in USD.
    pub fn unit_price(self) -> f64 {
        match self {
            GpuType::H100 => 30_970.0,
            GpuType::A100 => 18_000.0,
            GpuType::L40s => 8_000.0,
        }
    }

    /// Nameplate draw per card in watts.
    pub fn power_watts(self) -> f64 {
        match self {
            GpuType::H100 => 700.0,
            GpuType::A100 => 400.0,
            GpuType::L40s => 300.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GpuType::H100 => "h100",
            GpuType::A100 => "a100",
            GpuType::L40s => "l40s",
        }
    }
}

/// Construction region for the facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Us,
    Eu,
    Asia,
}

impl Region {
    /// Construction cost per square foot in USD.
    pub fn construction_cost_per_sqft(self) -> f64 {
        match self {
            Region::Us => 800.0,
            Region::Eu => 900.0,
            Region::Asia => 600.0,
        }
    }

    /// Annual salary per operations staff member in USD.
    pub fn annual_staff_salary(self) -> f64 {
        match self {
            Region::Us => 120_000.0,
            Region::Eu => 85_000.0,
            Region::Asia => 35_000.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
            Region::Asia => "asia",
        }
    }
}

/// Facility configuration. JSON field names are camelCase so saved
/// configurations from the web dashboard keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactoryConfig {
    /// Facility size in square feet.
    #[serde(deserialize_with = "crate::input::lenient")]
    pub facility_size: u32,
    #[serde(deserialize_with = "crate::input::lenient")]
    pub rack_count: u32,
    pub gpu_type: GpuType,
    #[serde(deserialize_with = "crate::input::lenient_or_one")]
    pub gpu_per_rack: u32,
    #[serde(deserialize_with = "crate::input::lenient")]
    pub power_cost_per_kwh: f64,
    /// Power usage effectiveness: total facility draw over IT draw.
    #[serde(deserialize_with = "crate::input::lenient_or_unity")]
    pub pue: f64,
    #[serde(deserialize_with = "crate::input::lenient")]
    pub staff_count: u32,
    pub region: Region,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            facility_size: 100_000,
            rack_count: 500,
            gpu_type: GpuType::H100,
            gpu_per_rack: 8,
            power_cost_per_kwh: 0.15,
            pue: 1.58,
            staff_count: 15,
            region: Region::Us,
        }
    }
}

/// Itemized cost breakdown for one facility configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactoryBreakdown {
    pub building_cost: f64,
    pub infrastructure: Infrastructure,
    pub compute: Compute,
    pub operating: Operating,
    pub totals: Totals,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Infrastructure {
    pub racks: f64,
    pub networking: f64,
    pub cooling: f64,
    pub backup: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Compute {
    pub gpu_count: u64,
    pub gpu_cost: f64,
    /// Raw IT load in kW, before the PUE multiplier.
    pub total_power_kw: f64,
    pub total_power_with_pue: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operating {
    pub annual_power: f64,
    pub annual_staff: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub capex: f64,
    pub opex_annual: f64,
    pub five_year_tco: f64,
}

/// Cooling plant cost for a given raw IT load, sized in 5 MW steps.
pub fn cooling_cost(total_power_kw: f64) -> f64 {
    (total_power_kw / COOLING_STEP_KW).ceil() * COOLING_STEP_COST
}

/// Backup power cost for a given raw IT load, sized in 2 MW steps.
pub fn backup_power_cost(total_power_kw: f64) -> f64 {
    (total_power_kw / BACKUP_STEP_KW).ceil() * BACKUP_STEP_COST
}

/// Calculate the full cost breakdown for a facility configuration.
///
/// Pure and infallible: degenerate inputs (zero racks, zero staff)
/// produce degenerate but well-defined results.
pub fn calculate(config: &FactoryConfig) -> FactoryBreakdown {
    let building_cost = f64::from(config.facility_size) * config.region.construction_cost_per_sqft();

    let rack_cost = f64::from(config.rack_count) * RACK_UNIT_COST;
    let networking_cost = f64::from(config.rack_count) * NETWORKING_COST_PER_RACK;

    let gpu_count = u64::from(config.rack_count) * u64::from(config.gpu_per_rack);
    let gpu_cost = gpu_count as f64 * config.gpu_type.unit_price();

    let total_power_kw = (gpu_count as f64 * config.gpu_type.power_watts()
        + f64::from(config.rack_count) * RACK_OVERHEAD_WATTS)
        / 1000.0;
    let total_power_with_pue = total_power_kw * config.pue;
    let annual_power = total_power_with_pue * HOURS_PER_YEAR * config.power_cost_per_kwh;

    let cooling = cooling_cost(total_power_kw);
    let backup = backup_power_cost(total_power_kw);

    let annual_staff = f64::from(config.staff_count) * config.region.annual_staff_salary();

    let capex = building_cost + rack_cost + networking_cost + gpu_cost + cooling + backup;
    let opex_annual = annual_power + annual_staff;
    let five_year_tco = capex + opex_annual * TCO_YEARS;

    FactoryBreakdown {
        building_cost,
        infrastructure: Infrastructure {
            racks: rack_cost,
            networking: networking_cost,
            cooling,
            backup,
            total: rack_cost + networking_cost + cooling + backup,
        },
        compute: Compute {
            gpu_count,
            gpu_cost,
            total_power_kw,
            total_power_with_pue,
        },
        operating: Operating {
            annual_power,
            annual_staff,
            total: opex_annual,
        },
        totals: Totals {
            capex,
            opex_annual,
            five_year_tco,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn reference_facility() {
        let config = FactoryConfig::default();
        let b = calculate(&config);

        assert_eq!(b.compute.gpu_count, 4_000);
        assert_eq!(b.compute.gpu_cost, 123_880_000.0);
        assert_eq!(b.compute.total_power_kw, 3_800.0);
        assert!(close(b.compute.total_power_with_pue, 6_004.0));
        assert_eq!(b.building_cost, 80_000_000.0);
        assert_eq!(b.infrastructure.racks, 1_500_000.0);
        assert_eq!(b.infrastructure.networking, 15_000_000.0);
        assert_eq!(b.infrastructure.cooling, 2_000_000.0);
        assert_eq!(b.infrastructure.backup, 1_500_000.0);
        assert_eq!(b.operating.annual_staff, 1_800_000.0);
    }

    #[test]
    fn capex_and_tco_identities() {
        let b = calculate(&FactoryConfig::default());

        let capex = b.building_cost
            + b.infrastructure.racks
            + b.infrastructure.networking
            + b.compute.gpu_cost
            + b.infrastructure.cooling
            + b.infrastructure.backup;
        assert_eq!(b.totals.capex, capex);
        assert_eq!(b.totals.opex_annual, b.operating.annual_power + b.operating.annual_staff);
        assert_eq!(b.totals.five_year_tco, b.totals.capex + b.totals.opex_annual * 5.0);
    }

    #[test]
    fn cooling_and_backup_step_boundaries() {
        assert_eq!(cooling_cost(5_000.0), 2_000_000.0);
        assert_eq!(cooling_cost(5_000.001), 4_000_000.0);
        assert_eq!(cooling_cost(0.0), 0.0);
        assert_eq!(backup_power_cost(2_000.0), 750_000.0);
        assert_eq!(backup_power_cost(2_000.001), 1_500_000.0);
        assert_eq!(backup_power_cost(0.0), 0.0);
    }

    #[test]
    fn zero_racks_is_degenerate_but_defined() {
        let config = FactoryConfig {
            rack_count: 0,
            ..FactoryConfig::default()
        };
        let b = calculate(&config);

        assert_eq!(b.compute.gpu_count, 0);
        assert_eq!(b.compute.gpu_cost, 0.0);
        assert_eq!(b.compute.total_power_kw, 0.0);
        assert_eq!(b.infrastructure.cooling, 0.0);
        assert_eq!(b.infrastructure.backup, 0.0);
        // Building and staff costs are independent of the rack count.
        assert_eq!(b.building_cost, 80_000_000.0);
        assert_eq!(b.operating.annual_staff, 1_800_000.0);
    }

    #[test]
    fn region_pricing_tables() {
        assert_eq!(Region::Us.construction_cost_per_sqft(), 800.0);
        assert_eq!(Region::Eu.construction_cost_per_sqft(), 900.0);
        assert_eq!(Region::Asia.construction_cost_per_sqft(), 600.0);
        assert_eq!(Region::Asia.annual_staff_salary(), 35_000.0);
        assert_eq!(GpuType::A100.unit_price(), 18_000.0);
        assert_eq!(GpuType::L40s.power_watts(), 300.0);
    }
}
