use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GardenError, Result};

/// Plant kinds known to the catalog, including the abstract base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantKind {
    /// The shared base of every plant. Never constructible.
    Plant,
    Vegetable,
    Herb,
    Flower,
}

impl PlantKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantKind::Plant => "plant",
            PlantKind::Vegetable => "vegetable",
            PlantKind::Herb => "herb",
            PlantKind::Flower => "flower",
        }
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self, PlantKind::Plant)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantCategory {
    Vegetable,
    Herb,
    Flower,
}

impl PlantCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PlantCategory::Vegetable => "vegetable",
            PlantCategory::Herb => "herb",
            PlantCategory::Flower => "flower",
        }
    }
}

/// Identity and growth data shared by every plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantProfile {
    pub id: String,
    pub name: String,
    pub species: String,
    pub days_to_maturity: u32,
}

impl PlantProfile {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        species: impl Into<String>,
        days_to_maturity: u32,
    ) -> Result<Self> {
        if days_to_maturity == 0 {
            return Err(GardenError::InvalidMaturity(0));
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            species: species.into(),
            days_to_maturity,
        })
    }
}

impl fmt::Display for PlantProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.species)
    }
}

/// Care requirements every plant must answer.
pub trait Plant: fmt::Debug {
    fn profile(&self) -> &PlantProfile;

    fn category(&self) -> PlantCategory;

    /// Distance between plants, in inches.
    fn get_spacing_requirement(&self) -> f64;

    fn get_water_frequency(&self) -> &'static str;

    fn get_harvest_method(&self) -> &'static str;

    fn is_frost_tolerant(&self) -> bool;

    fn is_frost_sensitive(&self) -> bool {
        !self.is_frost_tolerant()
    }

    fn id(&self) -> &str {
        &self.profile().id
    }

    fn name(&self) -> &str {
        &self.profile().name
    }

    fn species(&self) -> &str {
        &self.profile().species
    }

    fn days_to_maturity(&self) -> u32 {
        self.profile().days_to_maturity
    }
}

fn lookup_name(profile: &PlantProfile) -> String {
    profile.name.to_lowercase()
}

// ---------------------------------------------------------------------------
// Vegetable
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarvestType {
    #[default]
    Single,
    Continuous,
}

/// Food crop, usually an annual.
#[derive(Debug, Clone, PartialEq)]
pub struct Vegetable {
    profile: PlantProfile,
    harvest_type: HarvestType,
}

impl Vegetable {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        species: impl Into<String>,
        days_to_maturity: u32,
    ) -> Result<Self> {
        Ok(Self {
            profile: PlantProfile::new(id, name, species, days_to_maturity)?,
            harvest_type: HarvestType::default(),
        })
    }

    pub fn with_harvest_type(mut self, harvest_type: HarvestType) -> Self {
        self.harvest_type = harvest_type;
        self
    }

    pub fn harvest_type(&self) -> HarvestType {
        self.harvest_type
    }
}

impl Plant for Vegetable {
    fn profile(&self) -> &PlantProfile {
        &self.profile
    }

    fn category(&self) -> PlantCategory {
        PlantCategory::Vegetable
    }

    fn get_spacing_requirement(&self) -> f64 {
        match lookup_name(&self.profile).as_str() {
            "lettuce" => 6.0,
            "tomato" => 24.0,
            "pepper" => 18.0,
            "carrot" => 3.0,
            "cucumber" => 24.0,
            "bean" => 6.0,
            "squash" => 36.0,
            _ => 12.0,
        }
    }

    fn get_water_frequency(&self) -> &'static str {
        "Daily to every other day, keep soil consistently moist"
    }

    fn get_harvest_method(&self) -> &'static str {
        match self.harvest_type {
            HarvestType::Continuous => "Cut or pick regularly to encourage more production",
            HarvestType::Single => "Single harvest when fully mature",
        }
    }

    fn is_frost_tolerant(&self) -> bool {
        matches!(
            lookup_name(&self.profile).as_str(),
            "lettuce" | "kale" | "broccoli" | "carrot"
        )
    }
}

// ---------------------------------------------------------------------------
// Herb
// ---------------------------------------------------------------------------

/// Aromatic plant grown for the kitchen.
#[derive(Debug, Clone, PartialEq)]
pub struct Herb {
    profile: PlantProfile,
    is_perennial: bool,
}

impl Herb {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        species: impl Into<String>,
        days_to_maturity: u32,
    ) -> Result<Self> {
        Ok(Self {
            profile: PlantProfile::new(id, name, species, days_to_maturity)?,
            is_perennial: false,
        })
    }

    pub fn with_perennial(mut self, is_perennial: bool) -> Self {
        self.is_perennial = is_perennial;
        self
    }

    pub fn is_perennial(&self) -> bool {
        self.is_perennial
    }
}

impl Plant for Herb {
    fn profile(&self) -> &PlantProfile {
        &self.profile
    }

    fn category(&self) -> PlantCategory {
        PlantCategory::Herb
    }

    fn get_spacing_requirement(&self) -> f64 {
        match lookup_name(&self.profile).as_str() {
            "basil" => 10.0,
            "parsley" => 8.0,
            "cilantro" => 6.0,
            "oregano" => 12.0,
            "thyme" => 8.0,
            "rosemary" => 18.0,
            _ => 8.0,
        }
    }

    fn get_water_frequency(&self) -> &'static str {
        "Every 2-3 days, allow soil to dry slightly between watering"
    }

    fn get_harvest_method(&self) -> &'static str {
        "Cut stems regularly, leaving 1/3 of plant to continue growing"
    }

    fn is_frost_tolerant(&self) -> bool {
        matches!(
            lookup_name(&self.profile).as_str(),
            "oregano" | "thyme" | "sage" | "chives"
        )
    }
}

// ---------------------------------------------------------------------------
// Flower
// ---------------------------------------------------------------------------

/// Ornamental plant.
#[derive(Debug, Clone, PartialEq)]
pub struct Flower {
    profile: PlantProfile,
    bloom_color: String,
    attracts_pollinators: bool,
}

impl Flower {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        species: impl Into<String>,
        days_to_maturity: u32,
    ) -> Result<Self> {
        Ok(Self {
            profile: PlantProfile::new(id, name, species, days_to_maturity)?,
            bloom_color: "mixed".into(),
            attracts_pollinators: true,
        })
    }

    pub fn with_bloom_color(mut self, bloom_color: impl Into<String>) -> Self {
        self.bloom_color = bloom_color.into();
        self
    }

    pub fn with_pollinators(mut self, attracts_pollinators: bool) -> Self {
        self.attracts_pollinators = attracts_pollinators;
        self
    }

    pub fn bloom_color(&self) -> &str {
        &self.bloom_color
    }

    pub fn attracts_pollinators(&self) -> bool {
        self.attracts_pollinators
    }

    pub fn get_pollinator_benefits(&self) -> String {
        if self.attracts_pollinators {
            format!(
                "{} attracts bees and butterflies, supporting garden ecosystem",
                self.profile.name
            )
        } else {
            format!(
                "{} is ornamental but less attractive to pollinators",
                self.profile.name
            )
        }
    }
}

impl Plant for Flower {
    fn profile(&self) -> &PlantProfile {
        &self.profile
    }

    fn category(&self) -> PlantCategory {
        PlantCategory::Flower
    }

    fn get_spacing_requirement(&self) -> f64 {
        match lookup_name(&self.profile).as_str() {
            "marigold" => 8.0,
            "zinnia" => 12.0,
            "sunflower" => 24.0,
            "petunia" => 10.0,
            "cosmos" => 18.0,
            _ => 12.0,
        }
    }

    fn get_water_frequency(&self) -> &'static str {
        "Daily during blooming season, keep evenly moist"
    }

    fn get_harvest_method(&self) -> &'static str {
        "Cut stems in early morning for longest vase life, deadhead spent blooms"
    }

    fn is_frost_tolerant(&self) -> bool {
        false
    }
}
