use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GardenError, Result};

pub const CUBIC_INCHES_PER_CUBIC_FOOT: f64 = 1728.0;
pub const CUBIC_FEET_PER_CUBIC_YARD: f64 = 27.0;

/// Container kinds known to the garden, including the abstract base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    /// The shared base of every container. Never constructible.
    PlantingContainer,
    RaisedBed,
    ContainerPot,
    GreenhousePlanter,
}

impl ContainerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::PlantingContainer => "planting_container",
            ContainerKind::RaisedBed => "raised_bed",
            ContainerKind::ContainerPot => "container_pot",
            ContainerKind::GreenhousePlanter => "greenhouse_planter",
        }
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self, ContainerKind::PlantingContainer)
    }
}

/// Identity shared by every container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerInfo {
    pub id: String,
    pub name: String,
    pub location: Option<String>,
}

impl ContainerInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: None,
        }
    }

    pub fn location_or_default(&self) -> &str {
        self.location.as_deref().unwrap_or("unspecified location")
    }
}

impl fmt::Display for ContainerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) at {}", self.name, self.id, self.location_or_default())
    }
}

/// Outer measurements in inches. Pots report their diameter as both
/// length and width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub depth: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, depth: f64) -> Result<Self> {
        Ok(Self {
            length: require_positive("length", length)?,
            width: require_positive("width", width)?,
            depth: require_positive("depth", depth)?,
        })
    }
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GardenError::InvalidDimension { field, value })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Capabilities every planting container provides.
///
/// There is no constructor at this level: only the concrete
/// variants below can be built.
pub trait PlantingContainer: fmt::Debug {
    fn info(&self) -> &ContainerInfo;

    fn kind(&self) -> ContainerKind;

    fn dimensions(&self) -> Dimensions;

    /// Planting surface in square inches.
    fn calculate_area(&self) -> f64;

    /// Soil capacity in cubic inches.
    fn calculate_volume(&self) -> f64;

    fn get_drainage_type(&self) -> &'static str;

    fn id(&self) -> &str {
        &self.info().id
    }

    fn name(&self) -> &str {
        &self.info().name
    }

    fn location(&self) -> Option<&str> {
        self.info().location.as_deref()
    }

    fn is_mobile(&self) -> bool {
        false
    }

    /// Moves a mobile container and returns a description of the move.
    fn relocate(&mut self, _new_location: &str) -> Result<String> {
        Err(GardenError::ContainerNotMobile(self.id().to_string()))
    }

    /// Number of plants that fit in a square grid of `plant_spacing` inches.
    fn get_planting_capacity(&self, plant_spacing: f64) -> usize {
        if plant_spacing.is_nan() || plant_spacing <= 0.0 {
            return 0;
        }
        let dims = self.dimensions();
        let per_row = (dims.length / plant_spacing).floor() as usize;
        let rows = (dims.width / plant_spacing).floor() as usize;
        per_row.saturating_mul(rows)
    }
}

// ---------------------------------------------------------------------------
// Raised bed
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilUnit {
    CubicInches,
    CubicFeet,
    CubicYards,
}

/// Fixed rectangular bed with excellent drainage.
#[derive(Debug, Clone, PartialEq)]
pub struct RaisedBed {
    info: ContainerInfo,
    dimensions: Dimensions,
    material: String,
}

impl RaisedBed {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        length: f64,
        width: f64,
        depth: f64,
    ) -> Result<Self> {
        Ok(Self {
            info: ContainerInfo::new(id, name),
            dimensions: Dimensions::new(length, width, depth)?,
            material: "wood".into(),
        })
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.info.location = Some(location.into());
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = material.into();
        self
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    /// Soil required to fill the bed. Feet and yards are rounded to two
    /// decimals, cubic inches are exact.
    pub fn calculate_soil_needed(&self, unit: SoilUnit) -> f64 {
        let cubic_inches = self.calculate_volume();
        let cubic_feet = cubic_inches / CUBIC_INCHES_PER_CUBIC_FOOT;
        match unit {
            SoilUnit::CubicInches => cubic_inches,
            SoilUnit::CubicFeet => round2(cubic_feet),
            SoilUnit::CubicYards => round2(cubic_feet / CUBIC_FEET_PER_CUBIC_YARD),
        }
    }
}

impl PlantingContainer for RaisedBed {
    fn info(&self) -> &ContainerInfo {
        &self.info
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::RaisedBed
    }

    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn calculate_area(&self) -> f64 {
        self.dimensions.length * self.dimensions.width
    }

    fn calculate_volume(&self) -> f64 {
        self.calculate_area() * self.dimensions.depth
    }

    fn get_drainage_type(&self) -> &'static str {
        "Excellent - elevated with bottom drainage"
    }
}

// ---------------------------------------------------------------------------
// Container pot
// ---------------------------------------------------------------------------

/// Mobile circular pot. Drainage depends on whether it has holes.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerPot {
    info: ContainerInfo,
    diameter: f64,
    depth: f64,
    has_drainage_holes: bool,
}

impl ContainerPot {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        diameter: f64,
        depth: f64,
    ) -> Result<Self> {
        Ok(Self {
            info: ContainerInfo::new(id, name),
            diameter: require_positive("diameter", diameter)?,
            depth: require_positive("depth", depth)?,
            has_drainage_holes: true,
        })
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.info.location = Some(location.into());
        self
    }

    pub fn with_drainage_holes(mut self, has_drainage_holes: bool) -> Self {
        self.has_drainage_holes = has_drainage_holes;
        self
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn has_drainage_holes(&self) -> bool {
        self.has_drainage_holes
    }
}

impl PlantingContainer for ContainerPot {
    fn info(&self) -> &ContainerInfo {
        &self.info
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::ContainerPot
    }

    fn dimensions(&self) -> Dimensions {
        Dimensions {
            length: self.diameter,
            width: self.diameter,
            depth: self.depth,
        }
    }

    fn calculate_area(&self) -> f64 {
        PI * self.radius().powi(2)
    }

    fn calculate_volume(&self) -> f64 {
        self.calculate_area() * self.depth
    }

    fn get_drainage_type(&self) -> &'static str {
        if self.has_drainage_holes {
            "Good - drainage holes present"
        } else {
            "Poor - no drainage holes (needs careful watering)"
        }
    }

    fn is_mobile(&self) -> bool {
        true
    }

    fn relocate(&mut self, new_location: &str) -> Result<String> {
        let message = format!(
            "Moved {} from {} to {}",
            self.info.name,
            self.info.location_or_default(),
            new_location
        );
        self.info.location = Some(new_location.to_string());
        Ok(message)
    }
}

// ---------------------------------------------------------------------------
// Greenhouse planter
// ---------------------------------------------------------------------------

/// Rectangular planter inside a climate-controlled greenhouse.
#[derive(Debug, Clone, PartialEq)]
pub struct GreenhousePlanter {
    info: ContainerInfo,
    dimensions: Dimensions,
    has_heating: bool,
    has_supplemental_light: bool,
}

impl GreenhousePlanter {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        length: f64,
        width: f64,
        depth: f64,
    ) -> Result<Self> {
        Ok(Self {
            info: ContainerInfo::new(id, name),
            dimensions: Dimensions::new(length, width, depth)?,
            has_heating: false,
            has_supplemental_light: false,
        })
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.info.location = Some(location.into());
        self
    }

    pub fn with_heating(mut self, has_heating: bool) -> Self {
        self.has_heating = has_heating;
        self
    }

    pub fn with_supplemental_light(mut self, has_supplemental_light: bool) -> Self {
        self.has_supplemental_light = has_supplemental_light;
        self
    }

    pub fn has_heating(&self) -> bool {
        self.has_heating
    }

    pub fn has_supplemental_light(&self) -> bool {
        self.has_supplemental_light
    }

    /// Winter growing needs heat.
    pub fn can_grow_year_round(&self) -> bool {
        self.has_heating
    }

    pub fn get_growing_advantages(&self) -> Vec<&'static str> {
        let mut advantages = vec!["Protected from weather", "Pest control easier"];
        if self.has_heating {
            advantages.push("Year-round growing possible");
        }
        if self.has_supplemental_light {
            advantages.push("Extended day length for faster growth");
        }
        advantages
    }
}

impl PlantingContainer for GreenhousePlanter {
    fn info(&self) -> &ContainerInfo {
        &self.info
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::GreenhousePlanter
    }

    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn calculate_area(&self) -> f64 {
        self.dimensions.length * self.dimensions.width
    }

    fn calculate_volume(&self) -> f64 {
        self.calculate_area() * self.dimensions.depth
    }

    fn get_drainage_type(&self) -> &'static str {
        // Heated soil dries out faster.
        if self.has_heating {
            "Controlled - heated bed, check moisture daily"
        } else {
            "Controlled - designed for optimal moisture retention"
        }
    }
}
