use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GardenError, Result};
use crate::models::{
    container::{ContainerKind, ContainerPot, GreenhousePlanter, PlantingContainer, RaisedBed},
    plant::{Flower, HarvestType, Herb, Plant, PlantKind, Vegetable},
    Coordinate,
};

/// Blueprint of a whole garden, as stored in a JSON layout file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenLayout {
    #[serde(default)]
    pub containers: Vec<ContainerSpec>,
    #[serde(default)]
    pub plants: Vec<PlantSpec>,
    #[serde(default)]
    pub cells: Vec<CellSpec>,
    #[serde(default)]
    pub plantings: Vec<PlantingSpec>,
}

impl GardenLayout {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// A container entry. Which dimension fields are required depends on `kind`:
/// rectangular containers need `length`, `width` and `depth`, pots need
/// `diameter` and `depth`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSpec {
    pub kind: ContainerKind,
    pub id: String,
    pub name: String,
    pub location: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub depth: Option<f64>,
    pub diameter: Option<f64>,
    pub material: Option<String>,
    pub has_drainage_holes: Option<bool>,
    pub has_heating: Option<bool>,
    pub has_supplemental_light: Option<bool>,
}

impl ContainerSpec {
    pub fn build(&self) -> Result<Box<dyn PlantingContainer>> {
        let container: Box<dyn PlantingContainer> = match self.kind {
            ContainerKind::PlantingContainer => {
                return Err(GardenError::AbstractInstantiation {
                    kind: self.kind.as_str(),
                })
            }
            ContainerKind::RaisedBed => {
                let mut bed = RaisedBed::new(
                    &self.id,
                    &self.name,
                    self.require("length", self.length)?,
                    self.require("width", self.width)?,
                    self.require("depth", self.depth)?,
                )?;
                if let Some(material) = &self.material {
                    bed = bed.with_material(material);
                }
                if let Some(location) = &self.location {
                    bed = bed.with_location(location);
                }
                Box::new(bed)
            }
            ContainerKind::ContainerPot => {
                let mut pot = ContainerPot::new(
                    &self.id,
                    &self.name,
                    self.require("diameter", self.diameter)?,
                    self.require("depth", self.depth)?,
                )?
                .with_drainage_holes(self.has_drainage_holes.unwrap_or(true));
                if let Some(location) = &self.location {
                    pot = pot.with_location(location);
                }
                Box::new(pot)
            }
            ContainerKind::GreenhousePlanter => {
                let mut planter = GreenhousePlanter::new(
                    &self.id,
                    &self.name,
                    self.require("length", self.length)?,
                    self.require("width", self.width)?,
                    self.require("depth", self.depth)?,
                )?
                .with_heating(self.has_heating.unwrap_or(false))
                .with_supplemental_light(self.has_supplemental_light.unwrap_or(false));
                if let Some(location) = &self.location {
                    planter = planter.with_location(location);
                }
                Box::new(planter)
            }
        };
        Ok(container)
    }

    fn require(&self, field: &'static str, value: Option<f64>) -> Result<f64> {
        value.ok_or_else(|| GardenError::MissingField {
            kind: self.kind.as_str(),
            id: self.id.clone(),
            field,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantSpec {
    pub kind: PlantKind,
    pub id: String,
    pub name: String,
    pub species: String,
    /// Signed so that negative values in a file are reported, not rejected
    /// by the parser.
    pub days_to_maturity: i64,
    pub harvest_type: Option<HarvestType>,
    pub perennial: Option<bool>,
    pub bloom_color: Option<String>,
    pub attracts_pollinators: Option<bool>,
}

impl PlantSpec {
    pub fn build(&self) -> Result<Box<dyn Plant>> {
        let plant: Box<dyn Plant> = match self.kind {
            PlantKind::Plant => {
                return Err(GardenError::AbstractInstantiation {
                    kind: self.kind.as_str(),
                })
            }
            PlantKind::Vegetable => Box::new(
                Vegetable::new(&self.id, &self.name, &self.species, self.maturity()?)?
                    .with_harvest_type(self.harvest_type.unwrap_or_default()),
            ),
            PlantKind::Herb => Box::new(
                Herb::new(&self.id, &self.name, &self.species, self.maturity()?)?
                    .with_perennial(self.perennial.unwrap_or(false)),
            ),
            PlantKind::Flower => {
                let mut flower = Flower::new(&self.id, &self.name, &self.species, self.maturity()?)?
                    .with_pollinators(self.attracts_pollinators.unwrap_or(true));
                if let Some(color) = &self.bloom_color {
                    flower = flower.with_bloom_color(color);
                }
                Box::new(flower)
            }
        };
        Ok(plant)
    }

    fn maturity(&self) -> Result<u32> {
        u32::try_from(self.days_to_maturity)
            .ok()
            .filter(|days| *days > 0)
            .ok_or(GardenError::InvalidMaturity(self.days_to_maturity))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellSpec {
    pub container_id: String,
    pub row: usize,
    pub col: usize,
}

impl CellSpec {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantingSpec {
    pub container_id: String,
    pub row: usize,
    pub col: usize,
    pub plant_id: String,
    pub planted_on: NaiveDate,
}

impl PlantingSpec {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.row, self.col)
    }
}
