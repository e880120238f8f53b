use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{GardenError, Result};
use crate::models::plant::Plant;
use crate::models::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    Empty,
    Planted,
    Harvested,
}

/// What is growing in a cell. Plants are immutable once catalogued, so
/// the maturity period is captured at planting time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planting {
    pub plant_id: String,
    pub plant_name: String,
    pub days_to_maturity: u32,
    pub planted_on: NaiveDate,
}

impl Planting {
    pub fn ready_on(&self) -> Option<NaiveDate> {
        self.planted_on
            .checked_add_days(Days::new(u64::from(self.days_to_maturity)))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum CellState {
    Empty,
    Planted(Planting),
    Harvested,
}

/// One plantable slot of a container.
///
/// A cell refers to its container and plant by identifier only; the
/// owning tables live in the garden manager.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    id: String,
    container_id: String,
    coordinate: Coordinate,
    state: CellState,
}

impl Cell {
    pub fn new(container_id: impl Into<String>, coordinate: Coordinate) -> Self {
        let container_id = container_id.into();
        Self {
            id: format!("{container_id}_{coordinate}"),
            container_id,
            coordinate,
            state: CellState::Empty,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn status(&self) -> CellStatus {
        match self.state {
            CellState::Empty => CellStatus::Empty,
            CellState::Planted(_) => CellStatus::Planted,
            CellState::Harvested => CellStatus::Harvested,
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self.state, CellState::Planted(_))
    }

    pub fn planting(&self) -> Option<&Planting> {
        match &self.state {
            CellState::Planted(planting) => Some(planting),
            _ => None,
        }
    }

    pub fn plant_id(&self) -> Option<&str> {
        self.planting().map(|p| p.plant_id.as_str())
    }

    pub fn planted_on(&self) -> Option<NaiveDate> {
        self.planting().map(|p| p.planted_on)
    }

    /// Puts `plant` in the cell. Empty and harvested cells accept a new
    /// planting; a planted cell does not.
    pub fn plant(&mut self, plant: &dyn Plant, planted_on: NaiveDate) -> Result<()> {
        if self.is_occupied() {
            return Err(GardenError::CellOccupied {
                cell_id: self.id.clone(),
            });
        }
        self.state = CellState::Planted(Planting {
            plant_id: plant.id().to_string(),
            plant_name: plant.name().to_string(),
            days_to_maturity: plant.days_to_maturity(),
            planted_on,
        });
        Ok(())
    }

    /// Clears the cell and returns what was growing in it.
    pub fn harvest(&mut self) -> Result<Planting> {
        match std::mem::replace(&mut self.state, CellState::Harvested) {
            CellState::Planted(planting) => Ok(planting),
            previous => {
                self.state = previous;
                Err(GardenError::CellEmpty {
                    cell_id: self.id.clone(),
                })
            }
        }
    }

    /// Planting date plus the plant's days to maturity.
    pub fn projected_harvest_date(&self) -> Result<NaiveDate> {
        let planting = self.planting().ok_or_else(|| GardenError::NotPlanted {
            cell_id: self.id.clone(),
        })?;
        planting.ready_on().ok_or_else(|| GardenError::DateOutOfRange {
            cell_id: self.id.clone(),
        })
    }

    /// e.g. `Main Bed - Cell A1`
    pub fn location_label(&self, container_name: &str) -> String {
        format!("{container_name} - Cell {}", self.coordinate)
    }

    /// e.g. `Main Bed - Cell A1: Growing Tomato`
    pub fn describe(&self, container_name: &str) -> String {
        let status = match &self.state {
            CellState::Planted(planting) => format!("Growing {}", planting.plant_name),
            CellState::Harvested => "Harvested".to_string(),
            CellState::Empty => "Empty".to_string(),
        };
        format!("{}: {status}", self.location_label(container_name))
    }
}
