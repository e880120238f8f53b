use chrono::NaiveDate;
use float_cmp::approx_eq;
use garden_manager::{
    models::{
        container::{ContainerPot, GreenhousePlanter, PlantingContainer, RaisedBed},
        garden::CellStatus,
        plant::{Flower, HarvestType, Herb, Plant, PlantCategory, Vegetable},
        Coordinate,
    },
    GardenError, GardenManager,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn backyard() -> GardenManager {
    let mut manager = GardenManager::new("Backyard", "7a");
    manager
        .add_container(
            RaisedBed::new("bed1", "Main Vegetable Bed", 96.0, 48.0, 12.0)
                .unwrap()
                .with_location("backyard"),
        )
        .unwrap();
    manager
        .add_container(
            ContainerPot::new("pot1", "Herb Container", 14.0, 12.0)
                .unwrap()
                .with_location("patio"),
        )
        .unwrap();
    manager
        .add_container(
            GreenhousePlanter::new("gh1", "Greenhouse Planter", 72.0, 30.0, 14.0)
                .unwrap()
                .with_heating(true),
        )
        .unwrap();
    manager
        .add_plant_to_library(Vegetable::new("v1", "Tomato", "Solanum lycopersicum", 75).unwrap())
        .unwrap();
    manager
        .add_plant_to_library(
            Vegetable::new("v2", "Bean", "Phaseolus vulgaris", 55)
                .unwrap()
                .with_harvest_type(HarvestType::Continuous),
        )
        .unwrap();
    manager
        .add_plant_to_library(Herb::new("h1", "Basil", "Ocimum basilicum", 21).unwrap())
        .unwrap();
    manager
        .add_plant_to_library(Flower::new("f1", "Marigold", "Tagetes", 45).unwrap())
        .unwrap();
    for col in 0..3 {
        manager.create_cell("bed1", Coordinate::new(0, col)).unwrap();
    }
    manager.create_cell("pot1", Coordinate::new(0, 0)).unwrap();
    manager.create_cell("gh1", Coordinate::new(0, 0)).unwrap();
    manager
}

// ---------------------------------------------------------------------------
// Geometry is polymorphic over the container trait
// ---------------------------------------------------------------------------

#[test]
fn scenario_areas_through_trait_objects() {
    let manager = backyard();
    let bed = manager.container("bed1").unwrap();
    let pot = manager.container("pot1").unwrap();
    let planter = manager.container("gh1").unwrap();

    assert_eq!(bed.calculate_area(), 4608.0, "96 x 48 bed");
    assert!(
        approx_eq!(f64, pot.calculate_area(), 153.94, epsilon = 0.005),
        "radius 7 pot must be about 153.94 sq in, got {}",
        pot.calculate_area()
    );
    assert_eq!(planter.calculate_area(), 2160.0);
    assert!(pot.is_mobile());
    assert!(!bed.is_mobile());
}

#[test]
fn scenario_rectangular_and_circular_formulas_hold() {
    for (length, width) in [(1.0, 1.0), (0.5, 12.25), (96.0, 48.0), (3.3, 7.1)] {
        let bed = RaisedBed::new("b", "b", length, width, 10.0).unwrap();
        assert!(approx_eq!(f64, bed.calculate_area(), length * width, ulps = 2));
        assert!(approx_eq!(
            f64,
            bed.calculate_volume(),
            length * width * 10.0,
            ulps = 4
        ));
    }
    for radius in [0.5, 1.0, 7.0, 22.5] {
        let pot = ContainerPot::new("p", "p", radius * 2.0, 10.0).unwrap();
        assert!(approx_eq!(
            f64,
            pot.calculate_area(),
            std::f64::consts::PI * radius * radius,
            ulps = 4
        ));
    }
}

#[test]
fn scenario_catalog_is_polymorphic() {
    let manager = backyard();
    let spacing: Vec<(String, f64)> = manager
        .plants()
        .map(|p| (p.name().to_string(), p.get_spacing_requirement()))
        .collect();
    assert!(spacing.contains(&("Tomato".into(), 24.0)));
    assert!(spacing.contains(&("Basil".into(), 10.0)));
    assert!(spacing.contains(&("Marigold".into(), 8.0)));

    let vegetables = manager.get_plants_by_category(PlantCategory::Vegetable);
    assert_eq!(vegetables.len(), 2);
    let bean = manager.plant("v2").unwrap();
    assert!(bean.get_harvest_method().contains("regularly"));
}

// ---------------------------------------------------------------------------
// Cell lifecycle through the manager
// ---------------------------------------------------------------------------

#[test]
fn scenario_fresh_cell_is_empty_and_unprojectable() {
    let manager = backyard();
    let cell = manager.cell("bed1", Coordinate::new(0, 0)).unwrap();
    assert_eq!(cell.status(), CellStatus::Empty);
    assert!(matches!(
        cell.projected_harvest_date(),
        Err(GardenError::NotPlanted { .. })
    ));
}

#[test]
fn scenario_tomato_projection_is_planting_plus_75_days() {
    let mut manager = backyard();
    let planted_on = date(2025, 3, 20);
    manager
        .plant_cell("bed1", Coordinate::new(0, 0), "v1", planted_on)
        .unwrap();
    let cell = manager.cell("bed1", Coordinate::new(0, 0)).unwrap();
    assert_eq!(
        cell.projected_harvest_date().unwrap(),
        planted_on + chrono::Days::new(75)
    );
    assert_eq!(cell.projected_harvest_date().unwrap(), date(2025, 6, 3));
}

#[test]
fn scenario_occupied_and_empty_errors() {
    let mut manager = backyard();
    let a1 = Coordinate::new(0, 0);
    manager.plant_cell("bed1", a1, "v1", date(2025, 4, 1)).unwrap();

    assert!(matches!(
        manager.plant_cell("bed1", a1, "h1", date(2025, 4, 2)),
        Err(GardenError::CellOccupied { .. })
    ));

    let empty = Coordinate::new(0, 1);
    assert!(matches!(
        manager.harvest_cell("bed1", empty),
        Err(GardenError::CellEmpty { .. })
    ));

    manager.harvest_cell("bed1", a1).unwrap();
    assert!(matches!(
        manager.harvest_cell("bed1", a1),
        Err(GardenError::CellEmpty { .. })
    ));
}

#[test]
fn scenario_replant_round_trip() {
    let mut manager = backyard();
    let a1 = Coordinate::new(0, 0);
    manager.plant_cell("bed1", a1, "v1", date(2025, 4, 1)).unwrap();
    let harvested = manager.harvest_cell("bed1", a1).unwrap();
    assert_eq!(harvested.planted_on, date(2025, 4, 1));

    manager.plant_cell("bed1", a1, "h1", date(2025, 7, 1)).unwrap();
    let cell = manager.cell("bed1", a1).unwrap();
    assert_eq!(cell.status(), CellStatus::Planted);
    assert_eq!(cell.plant_id(), Some("h1"));
    assert_eq!(cell.planted_on(), Some(date(2025, 7, 1)));
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[test]
fn scenario_thirty_day_harvest_window() {
    let mut manager = backyard();
    let today = date(2025, 6, 1);
    // basil ready 06-10, marigold ready 06-05, tomato ready 08-15 (outside)
    manager
        .plant_cell("pot1", Coordinate::new(0, 0), "h1", date(2025, 5, 20))
        .unwrap();
    manager
        .plant_cell("gh1", Coordinate::new(0, 0), "f1", date(2025, 4, 21))
        .unwrap();
    manager
        .plant_cell("bed1", Coordinate::new(0, 0), "v1", today)
        .unwrap();
    // two beans ready the same day, tie broken by coordinate
    manager
        .plant_cell("bed1", Coordinate::new(0, 2), "v2", date(2025, 5, 1))
        .unwrap();
    manager
        .plant_cell("bed1", Coordinate::new(0, 1), "v2", date(2025, 5, 1))
        .unwrap();

    let upcoming = manager.upcoming_harvests_from(today, 30);
    let order: Vec<_> = upcoming.iter().map(|u| u.cell_id.as_str()).collect();
    assert_eq!(order, vec!["gh1_A1", "pot1_A1", "bed1_A2", "bed1_A3"]);
    assert!(
        upcoming.windows(2).all(|w| w[0].ready_on <= w[1].ready_on),
        "Harvests must be sorted by ready date"
    );
    assert!(
        !upcoming.iter().any(|u| u.plant_id == "v1"),
        "Tomato ready in 75 days is outside a 30 day window"
    );
}

#[test]
fn scenario_summary_tracks_every_status() {
    let mut manager = backyard();
    manager
        .plant_cell("bed1", Coordinate::new(0, 0), "v1", date(2025, 4, 1))
        .unwrap();
    manager
        .plant_cell("bed1", Coordinate::new(0, 1), "v2", date(2025, 4, 1))
        .unwrap();
    manager.harvest_cell("bed1", Coordinate::new(0, 1)).unwrap();

    let summary = manager.get_garden_summary();
    assert_eq!(summary.total_cells, 5);
    assert_eq!(summary.occupied_cells, 1);
    assert_eq!(summary.available_cells, 4);
    assert_eq!(summary.by_status.empty, 3);
    assert_eq!(summary.by_status.planted, 1);
    assert_eq!(summary.by_status.harvested, 1);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["gardenName"], "Backyard");
    assert_eq!(json["byStatus"]["harvested"], 1);
}

#[test]
fn scenario_unknown_container_cannot_get_cells() {
    let mut manager = backyard();
    assert_eq!(
        manager.create_cell("shed", Coordinate::new(0, 0)).unwrap_err(),
        GardenError::UnknownContainer("shed".into())
    );
}
