use thiserror::Error;

use crate::models::Coordinate;

pub type Result<T> = std::result::Result<T, GardenError>;

/// Every failure the garden model can report.
///
/// All errors are raised at the point of violation; nothing is deferred.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GardenError {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------
    #[error("'{kind}' is abstract and cannot be instantiated")]
    AbstractInstantiation { kind: &'static str },

    #[error("{field} must be a strictly positive number, got {value}")]
    InvalidDimension { field: &'static str, value: f64 },

    #[error("days to maturity must be a positive integer, got {0}")]
    InvalidMaturity(i64),

    #[error("{kind} '{id}' is missing required field '{field}'")]
    MissingField {
        kind: &'static str,
        id: String,
        field: &'static str,
    },

    // ------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------
    #[error("{kind} '{id}' is already registered")]
    DuplicateId { kind: &'static str, id: String },

    #[error("cell {coordinate} already exists in container '{container_id}'")]
    DuplicateCell {
        container_id: String,
        coordinate: Coordinate,
    },

    #[error("container '{0}' is not part of this garden")]
    UnknownContainer(String),

    #[error("plant '{0}' is not in the plant catalog")]
    UnknownPlant(String),

    #[error("no cell {coordinate} in container '{container_id}'")]
    UnknownCell {
        container_id: String,
        coordinate: Coordinate,
    },

    #[error("container '{0}' is fixed in place and cannot be moved")]
    ContainerNotMobile(String),

    // ------------------------------------------------------------------
    // Cell lifecycle
    // ------------------------------------------------------------------
    #[error("cell '{cell_id}' is already planted")]
    CellOccupied { cell_id: String },

    #[error("cell '{cell_id}' has nothing to harvest")]
    CellEmpty { cell_id: String },

    #[error("cell '{cell_id}' is not planted")]
    NotPlanted { cell_id: String },

    #[error("harvest date for cell '{cell_id}' falls outside the supported calendar")]
    DateOutOfRange { cell_id: String },
}

impl GardenError {
    /// True for errors caused by an identifier that does not resolve.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UnknownContainer(_) | Self::UnknownPlant(_) | Self::UnknownCell { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = GardenError::DuplicateCell {
            container_id: "bed1".into(),
            coordinate: Coordinate { row: 0, col: 1 },
        };
        assert_eq!(err.to_string(), "cell A2 already exists in container 'bed1'");

        let err = GardenError::InvalidDimension {
            field: "length",
            value: -4.0,
        };
        assert_eq!(
            err.to_string(),
            "length must be a strictly positive number, got -4"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(GardenError::UnknownPlant("v9".into()).is_not_found());
        assert!(!GardenError::CellOccupied {
            cell_id: "bed1_A1".into()
        }
        .is_not_found());
    }
}
