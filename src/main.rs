use std::fs;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use log::info;

use garden_manager::{
    config::{GardenConfig, OutputFormat, ENV_LAYOUT},
    data::demo::demo_layout,
    logic::layout::load_layout,
    models::{
        layout::GardenLayout,
        report::{CellReport, ContainerReport, PlantReport},
    },
    GardenManager,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GardenConfig::from_env().context("invalid garden configuration")?;
    let today = Local::now().date_naive();

    let layout = match &config.layout_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("cannot read layout file {}", path.display()))?;
            GardenLayout::from_json(&json)
                .with_context(|| format!("malformed layout file {}", path.display()))?
        }
        None => {
            info!("{ENV_LAYOUT} not set, using the built-in demo garden");
            demo_layout(today)
        }
    };
    let manager = load_layout(&config.name, &config.zone, &layout)?;

    match config.output {
        OutputFormat::Text => print_text(&manager, today, config.harvest_window_days),
        OutputFormat::Json => print_json(&manager, today, config.harvest_window_days)?,
    }
    Ok(())
}

fn print_text(manager: &GardenManager, today: NaiveDate, window: u32) {
    println!("🌱 {manager}");
    println!();

    println!("Containers");
    for container in manager.containers() {
        println!("  {}", container.info());
        println!(
            "    area {:>10.1} sq in   volume {:>10.1} cu in",
            container.calculate_area(),
            container.calculate_volume()
        );
        println!("    drainage: {}", container.get_drainage_type());
    }
    println!();

    println!("Plant catalog");
    for plant in manager.plants() {
        println!(
            "  {:<30} {:>4} in apart, {} days, {}",
            plant.profile().to_string(),
            plant.get_spacing_requirement(),
            plant.days_to_maturity(),
            if plant.is_frost_tolerant() {
                "frost tolerant"
            } else {
                "frost sensitive"
            }
        );
        println!("    water: {}", plant.get_water_frequency());
        println!("    harvest: {}", plant.get_harvest_method());
    }
    println!();

    println!("Cells");
    for cell in manager.cells() {
        let name = manager
            .container(cell.container_id())
            .map(|c| c.name())
            .unwrap_or_else(|| cell.container_id());
        println!("  {}", cell.describe(name));
    }
    println!();

    let summary = manager.get_garden_summary();
    println!("Summary");
    println!("  containers:       {}", summary.total_containers);
    println!(
        "  cells:            {} ({} planted, {} available)",
        summary.total_cells, summary.occupied_cells, summary.available_cells
    );
    println!("  planting area:    {} sq in", summary.total_planting_area);
    println!("  plants in library {}", summary.plant_types_in_library);
    println!();

    let upcoming = manager.upcoming_harvests_from(today, window);
    println!("Harvests due in the next {window} days");
    if upcoming.is_empty() {
        println!("  none");
    }
    for harvest in &upcoming {
        let location = manager
            .cell(&harvest.container_id, harvest.coordinate)
            .map(|cell| manager.cell_location(cell))
            .unwrap_or_else(|| harvest.cell_id.clone());
        println!("  {}  {:<12} {}", harvest.ready_on, harvest.plant_name, location);
    }
}

fn print_json(manager: &GardenManager, today: NaiveDate, window: u32) -> anyhow::Result<()> {
    let report = serde_json::json!({
        "summary": manager.get_garden_summary(),
        "containers": manager.containers().map(ContainerReport::from).collect::<Vec<_>>(),
        "plants": manager.plants().map(PlantReport::from).collect::<Vec<_>>(),
        "cells": manager.cells().map(CellReport::from).collect::<Vec<_>>(),
        "harvestWindowDays": window,
        "upcomingHarvests": manager.upcoming_harvests_from(today, window),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
