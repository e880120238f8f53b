//! Garden planner model: planting containers, plants, the cells that bind
//! them, and a manager that reports occupancy and upcoming harvests.

pub mod config;
pub mod data;
pub mod error;
pub mod logic;
pub mod models;

pub use error::{GardenError, Result};
pub use logic::manager::GardenManager;
