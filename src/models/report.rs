use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::models::{
    container::{ContainerKind, PlantingContainer},
    garden::{Cell, CellStatus},
    plant::{Plant, PlantCategory},
    Coordinate,
};

/// Cell counts per lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub empty: usize,
    pub planted: usize,
    pub harvested: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: CellStatus) {
        match status {
            CellStatus::Empty => self.empty += 1,
            CellStatus::Planted => self.planted += 1,
            CellStatus::Harvested => self.harvested += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenSummary {
    pub garden_name: String,
    pub zone: String,
    pub total_containers: usize,
    pub total_cells: usize,
    pub occupied_cells: usize,
    pub available_cells: usize,
    pub by_status: StatusCounts,
    /// Square inches, rounded to two decimals.
    pub total_planting_area: f64,
    pub plant_types_in_library: usize,
}

/// A planted cell whose projected harvest falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingHarvest {
    pub cell_id: String,
    pub container_id: String,
    pub coordinate: Coordinate,
    pub plant_id: String,
    pub plant_name: String,
    pub planted_on: NaiveDate,
    pub ready_on: NaiveDate,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellReport {
    pub id: String,
    pub coordinate: Coordinate,
    pub status: CellStatus,
    pub plant_id: Option<String>,
    pub planted_on: Option<NaiveDate>,
    pub ready_on: Option<NaiveDate>,
}

impl From<&Cell> for CellReport {
    fn from(cell: &Cell) -> Self {
        Self {
            id: cell.id().to_string(),
            coordinate: cell.coordinate(),
            status: cell.status(),
            plant_id: cell.plant_id().map(String::from),
            planted_on: cell.planted_on(),
            ready_on: cell.projected_harvest_date().ok(),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerReport {
    pub id: String,
    pub name: String,
    pub kind: ContainerKind,
    pub location: Option<String>,
    pub area: f64,
    pub volume: f64,
    pub drainage: String,
    pub mobile: bool,
}

impl From<&dyn PlantingContainer> for ContainerReport {
    fn from(container: &dyn PlantingContainer) -> Self {
        Self {
            id: container.id().to_string(),
            name: container.name().to_string(),
            kind: container.kind(),
            location: container.location().map(String::from),
            area: container.calculate_area(),
            volume: container.calculate_volume(),
            drainage: container.get_drainage_type().to_string(),
            mobile: container.is_mobile(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantReport {
    pub id: String,
    pub name: String,
    pub species: String,
    pub category: PlantCategory,
    pub days_to_maturity: u32,
    pub spacing_inches: f64,
    pub watering: String,
    pub harvest_method: String,
    pub frost_tolerant: bool,
}

impl From<&dyn Plant> for PlantReport {
    fn from(plant: &dyn Plant) -> Self {
        Self {
            id: plant.id().to_string(),
            name: plant.name().to_string(),
            species: plant.species().to_string(),
            category: plant.category(),
            days_to_maturity: plant.days_to_maturity(),
            spacing_inches: plant.get_spacing_requirement(),
            watering: plant.get_water_frequency().to_string(),
            harvest_method: plant.get_harvest_method().to_string(),
            frost_tolerant: plant.is_frost_tolerant(),
        }
    }
}
