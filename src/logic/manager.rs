use std::collections::BTreeMap;
use std::fmt;

use chrono::{Local, NaiveDate};
use log::debug;

use crate::error::{GardenError, Result};
use crate::logic::harvest::upcoming_harvests;
use crate::models::{
    container::PlantingContainer,
    garden::{Cell, Planting},
    plant::{Plant, PlantCategory},
    report::{GardenSummary, StatusCounts, UpcomingHarvest},
    Coordinate,
};

/// Cells are keyed by owning container, then position.
type CellKey = (String, Coordinate);

/// Owns every container, cell and catalogued plant of one garden.
///
/// Cells hold identifiers, never references: all lookups go through the
/// tables kept here.
#[derive(Debug)]
pub struct GardenManager {
    name: String,
    zone: String,
    containers: BTreeMap<String, Box<dyn PlantingContainer>>,
    cells: BTreeMap<CellKey, Cell>,
    catalog: BTreeMap<String, Box<dyn Plant>>,
}

impl GardenManager {
    pub fn new(name: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            zone: zone.into(),
            containers: BTreeMap::new(),
            cells: BTreeMap::new(),
            catalog: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    // -----------------------------------------------------------------------
    // Containers
    // -----------------------------------------------------------------------

    pub fn add_container<C: PlantingContainer + 'static>(&mut self, container: C) -> Result<()> {
        self.add_boxed_container(Box::new(container))
    }

    pub fn add_boxed_container(&mut self, container: Box<dyn PlantingContainer>) -> Result<()> {
        let id = container.id().to_string();
        if self.containers.contains_key(&id) {
            return Err(GardenError::DuplicateId {
                kind: "container",
                id,
            });
        }
        debug!("added container {}", container.info());
        self.containers.insert(id, container);
        Ok(())
    }

    pub fn container(&self, id: &str) -> Option<&dyn PlantingContainer> {
        self.containers.get(id).map(|c| c.as_ref())
    }

    pub fn containers(&self) -> impl Iterator<Item = &dyn PlantingContainer> {
        self.containers.values().map(|c| c.as_ref())
    }

    /// Relocates a mobile container; fixed containers refuse.
    pub fn move_container(&mut self, id: &str, new_location: &str) -> Result<String> {
        let container = self
            .containers
            .get_mut(id)
            .ok_or_else(|| GardenError::UnknownContainer(id.to_string()))?;
        let message = container.relocate(new_location)?;
        debug!("{message}");
        Ok(message)
    }

    pub fn get_total_planting_area(&self) -> f64 {
        self.containers.values().map(|c| c.calculate_area()).sum()
    }

    // -----------------------------------------------------------------------
    // Plant catalog
    // -----------------------------------------------------------------------

    pub fn add_plant_to_library<P: Plant + 'static>(&mut self, plant: P) -> Result<()> {
        self.add_boxed_plant(Box::new(plant))
    }

    pub fn add_boxed_plant(&mut self, plant: Box<dyn Plant>) -> Result<()> {
        let id = plant.id().to_string();
        if self.catalog.contains_key(&id) {
            return Err(GardenError::DuplicateId { kind: "plant", id });
        }
        debug!("catalogued plant {}", plant.profile());
        self.catalog.insert(id, plant);
        Ok(())
    }

    pub fn plant(&self, id: &str) -> Option<&dyn Plant> {
        self.catalog.get(id).map(|p| p.as_ref())
    }

    pub fn plants(&self) -> impl Iterator<Item = &dyn Plant> {
        self.catalog.values().map(|p| p.as_ref())
    }

    pub fn get_plants_by_category(&self, category: PlantCategory) -> Vec<&dyn Plant> {
        self.plants().filter(|p| p.category() == category).collect()
    }

    // -----------------------------------------------------------------------
    // Cells
    // -----------------------------------------------------------------------

    pub fn create_cell(&mut self, container_id: &str, coordinate: Coordinate) -> Result<&Cell> {
        if !self.containers.contains_key(container_id) {
            return Err(GardenError::UnknownContainer(container_id.to_string()));
        }
        let key = (container_id.to_string(), coordinate);
        if self.cells.contains_key(&key) {
            return Err(GardenError::DuplicateCell {
                container_id: container_id.to_string(),
                coordinate,
            });
        }
        let cell = Cell::new(container_id, coordinate);
        debug!("created cell {}", cell.id());
        Ok(self.cells.entry(key).or_insert(cell))
    }

    pub fn cell(&self, container_id: &str, coordinate: Coordinate) -> Option<&Cell> {
        self.cells.get(&(container_id.to_string(), coordinate))
    }

    /// All cells, ordered by container id then coordinate.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    fn cell_mut(&mut self, container_id: &str, coordinate: Coordinate) -> Result<&mut Cell> {
        self.cells
            .get_mut(&(container_id.to_string(), coordinate))
            .ok_or_else(|| GardenError::UnknownCell {
                container_id: container_id.to_string(),
                coordinate,
            })
    }

    /// Plants a catalogued plant into an existing cell.
    pub fn plant_cell(
        &mut self,
        container_id: &str,
        coordinate: Coordinate,
        plant_id: &str,
        planted_on: NaiveDate,
    ) -> Result<()> {
        let plant = self
            .catalog
            .get(plant_id)
            .ok_or_else(|| GardenError::UnknownPlant(plant_id.to_string()))?;
        let cell = self
            .cells
            .get_mut(&(container_id.to_string(), coordinate))
            .ok_or_else(|| GardenError::UnknownCell {
                container_id: container_id.to_string(),
                coordinate,
            })?;
        cell.plant(plant.as_ref(), planted_on)?;
        debug!("planted {} in {} on {planted_on}", plant.name(), cell.id());
        Ok(())
    }

    pub fn harvest_cell(&mut self, container_id: &str, coordinate: Coordinate) -> Result<Planting> {
        let cell = self.cell_mut(container_id, coordinate)?;
        let planting = cell.harvest()?;
        debug!("harvested {} from {}", planting.plant_name, cell.id());
        Ok(planting)
    }

    /// Cells not currently growing anything (empty or harvested).
    pub fn get_available_cells(&self) -> Vec<&Cell> {
        self.cells().filter(|c| !c.is_occupied()).collect()
    }

    pub fn get_occupied_cells(&self) -> Vec<&Cell> {
        self.cells().filter(|c| c.is_occupied()).collect()
    }

    /// `Main Bed - Cell A1`, or the bare cell id if the container is gone.
    pub fn cell_location(&self, cell: &Cell) -> String {
        match self.container(cell.container_id()) {
            Some(container) => cell.location_label(container.name()),
            None => cell.id().to_string(),
        }
    }

    // -----------------------------------------------------------------------
    // Reports
    // -----------------------------------------------------------------------

    /// Recomputed from a full scan of the cells on every call.
    pub fn get_garden_summary(&self) -> GardenSummary {
        let mut by_status = StatusCounts::default();
        for cell in self.cells() {
            by_status.record(cell.status());
        }
        let total_cells = self.cells.len();
        let area = self.get_total_planting_area();

        GardenSummary {
            garden_name: self.name.clone(),
            zone: self.zone.clone(),
            total_containers: self.containers.len(),
            total_cells,
            occupied_cells: by_status.planted,
            available_cells: total_cells - by_status.planted,
            by_status,
            total_planting_area: (area * 100.0).round() / 100.0,
            plant_types_in_library: self.catalog.len(),
        }
    }

    /// Harvests due between today (local calendar) and `days_ahead` days
    /// from now.
    pub fn get_upcoming_harvests(&self, days_ahead: u32) -> Vec<UpcomingHarvest> {
        self.upcoming_harvests_from(Local::now().date_naive(), days_ahead)
    }

    pub fn upcoming_harvests_from(&self, today: NaiveDate, days_ahead: u32) -> Vec<UpcomingHarvest> {
        upcoming_harvests(self.cells(), today, days_ahead)
    }
}

impl fmt::Display for GardenManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let planted = self.cells().filter(|c| c.is_occupied()).count();
        write!(
            f,
            "{} (Zone {}): {} of {} cells planted",
            self.name,
            self.zone,
            planted,
            self.cells.len()
        )
    }
}
