use log::{info, warn};

use crate::error::Result;
use crate::logic::manager::GardenManager;
use crate::models::layout::GardenLayout;

/// Builds a garden from a blueprint. Sections are applied in order
/// (containers, plants, cells, plantings) and the first invalid entry
/// aborts the load.
pub fn load_layout(
    name: impl Into<String>,
    zone: impl Into<String>,
    layout: &GardenLayout,
) -> Result<GardenManager> {
    let mut manager = GardenManager::new(name, zone);

    for spec in &layout.containers {
        manager.add_boxed_container(spec.build()?)?;
    }
    for spec in &layout.plants {
        manager.add_boxed_plant(spec.build()?)?;
    }
    for spec in &layout.cells {
        manager.create_cell(&spec.container_id, spec.coordinate())?;
    }
    for spec in &layout.plantings {
        manager.plant_cell(
            &spec.container_id,
            spec.coordinate(),
            &spec.plant_id,
            spec.planted_on,
        )?;
    }

    if layout.cells.is_empty() {
        warn!("layout for '{}' defines no cells", manager.name());
    }
    info!(
        "loaded garden '{}': {} containers, {} plants, {} cells, {} plantings",
        manager.name(),
        layout.containers.len(),
        layout.plants.len(),
        layout.cells.len(),
        layout.plantings.len()
    );
    Ok(manager)
}
