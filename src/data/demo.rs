use chrono::{Days, NaiveDate};

use crate::models::{
    container::ContainerKind,
    layout::{CellSpec, ContainerSpec, GardenLayout, PlantSpec, PlantingSpec},
    plant::{HarvestType, PlantKind},
};

fn container(kind: ContainerKind, id: &str, name: &str, location: &str) -> ContainerSpec {
    ContainerSpec {
        kind,
        id: id.into(),
        name: name.into(),
        location: Some(location.into()),
        length: None,
        width: None,
        depth: None,
        diameter: None,
        material: None,
        has_drainage_holes: None,
        has_heating: None,
        has_supplemental_light: None,
    }
}

fn plant(kind: PlantKind, id: &str, name: &str, species: &str, days: i64) -> PlantSpec {
    PlantSpec {
        kind,
        id: id.into(),
        name: name.into(),
        species: species.into(),
        days_to_maturity: days,
        harvest_type: None,
        perennial: None,
        bloom_color: None,
        attracts_pollinators: None,
    }
}

fn cells(container_id: &str, rows: usize, cols: usize) -> Vec<CellSpec> {
    (0..rows)
        .flat_map(|row| {
            (0..cols).map(move |col| CellSpec {
                container_id: container_id.into(),
                row,
                col,
            })
        })
        .collect()
}

fn planting(container_id: &str, row: usize, col: usize, plant_id: &str, planted_on: NaiveDate) -> PlantingSpec {
    PlantingSpec {
        container_id: container_id.into(),
        row,
        col,
        plant_id: plant_id.into(),
        planted_on,
    }
}

fn days_before(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(today)
}

/// A small backyard garden with plantings staggered around `today`, so
/// that some harvests fall inside a one-week window and some do not.
pub fn demo_layout(today: NaiveDate) -> GardenLayout {
    let bed = ContainerSpec {
        length: Some(96.0),
        width: Some(48.0),
        depth: Some(12.0),
        material: Some("cedar".into()),
        ..container(ContainerKind::RaisedBed, "bed1", "Main Vegetable Bed", "backyard")
    };
    let pot = ContainerSpec {
        diameter: Some(16.0),
        depth: Some(12.0),
        has_drainage_holes: Some(true),
        ..container(ContainerKind::ContainerPot, "pot1", "Herb Container", "patio")
    };
    let planter = ContainerSpec {
        length: Some(72.0),
        width: Some(30.0),
        depth: Some(14.0),
        has_heating: Some(true),
        has_supplemental_light: Some(true),
        ..container(
            ContainerKind::GreenhousePlanter,
            "gh1",
            "Greenhouse Planter 1",
            "greenhouse",
        )
    };

    let plants = vec![
        plant(PlantKind::Vegetable, "v1", "Tomato", "Solanum lycopersicum", 75),
        PlantSpec {
            harvest_type: Some(HarvestType::Continuous),
            ..plant(PlantKind::Vegetable, "v2", "Lettuce", "Lactuca sativa", 45)
        },
        plant(PlantKind::Herb, "h1", "Basil", "Ocimum basilicum", 21),
        PlantSpec {
            perennial: Some(true),
            ..plant(PlantKind::Herb, "h2", "Thyme", "Thymus vulgaris", 90)
        },
        PlantSpec {
            bloom_color: Some("orange".into()),
            ..plant(PlantKind::Flower, "f1", "Marigold", "Tagetes", 45)
        },
    ];

    let mut all_cells = cells("bed1", 2, 2);
    all_cells.extend(cells("pot1", 1, 1));
    all_cells.extend(cells("gh1", 1, 2));

    let plantings = vec![
        planting("bed1", 0, 0, "v1", days_before(today, 70)),
        planting("bed1", 0, 1, "v2", days_before(today, 10)),
        planting("pot1", 0, 0, "h1", days_before(today, 15)),
        planting("gh1", 0, 0, "f1", days_before(today, 40)),
    ];

    GardenLayout {
        containers: vec![bed, pot, planter],
        plants,
        cells: all_cells,
        plantings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::layout::load_layout;

    #[test]
    fn test_demo_layout_loads() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let manager = load_layout("Demo", "7a", &demo_layout(today)).unwrap();
        let summary = manager.get_garden_summary();
        assert_eq!(summary.total_containers, 3);
        assert_eq!(summary.total_cells, 7);
        assert_eq!(summary.occupied_cells, 4);
        assert_eq!(summary.plant_types_in_library, 5);
    }

    #[test]
    fn test_demo_week_has_three_harvests() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let manager = load_layout("Demo", "7a", &demo_layout(today)).unwrap();
        let upcoming = manager.upcoming_harvests_from(today, 7);
        let ids: Vec<_> = upcoming.iter().map(|u| u.plant_id.as_str()).collect();
        // tomato and marigold both ready in 5 days, basil in 6
        assert_eq!(ids, vec!["v1", "f1", "h1"]);
    }
}
