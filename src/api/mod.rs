use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

pub mod config;

pub use config::encoder::*;

/*****************************************************************************
 * return values and error code
 *****************************************************************************/
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PredError {
    /* allocation failure while building entries, dependent lists or timeline */
    #[error("insufficient resources: {0}")]
    InsufficientResources(String),
    /* query outside the pre-built structure matrix */
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /* encoder configuration out of range */
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<TryReserveError> for PredError {
    fn from(err: TryReserveError) -> Self {
        PredError::InsufficientResources(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PredError>;

/* number of hierarchy depths in the catalog (period 1, 2, 4, 8, 16, 32) */
pub const MAX_HIERARCHICAL_LEVELS: usize = 6;
/* reference count range accepted by the builder */
pub const MIN_REF_COUNT: usize = 1;
pub const MAX_REF_COUNT: usize = 4;

#[derive(Debug, FromPrimitive, ToPrimitive, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[repr(C)]
pub enum PredStructure {
    LowDelayP = 0,
    LowDelayB = 1,
    RandomAccess = 2,
}

pub const PRED_STRUCTURE_NUM: usize = 3;

impl PredStructure {
    pub const ALL: [PredStructure; PRED_STRUCTURE_NUM] = [
        PredStructure::LowDelayP,
        PredStructure::LowDelayB,
        PredStructure::RandomAccess,
    ];

    pub fn is_low_delay(self) -> bool {
        self != PredStructure::RandomAccess
    }
}

impl fmt::Display for PredStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::PredStructure::*;
        match self {
            LowDelayP => write!(f, "Low Delay P"),
            LowDelayB => write!(f, "Low Delay B"),
            RandomAccess => write!(f, "Random Access"),
        }
    }
}

impl Default for PredStructure {
    fn default() -> Self {
        PredStructure::RandomAccess
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num_traits::FromPrimitive;

    #[test]
    fn pred_structure_from_primitive() {
        assert_eq!(PredStructure::from_u8(0), Some(PredStructure::LowDelayP));
        assert_eq!(PredStructure::from_u8(2), Some(PredStructure::RandomAccess));
        assert_eq!(PredStructure::from_u8(3), None);
    }

    #[test]
    fn reserve_failure_is_insufficient_resources() {
        let mut v: Vec<u64> = Vec::new();
        let err: PredError = v.try_reserve(usize::MAX).unwrap_err().into();
        match err {
            PredError::InsufficientResources(_) => {}
            e => panic!("unexpected error {:?}", e),
        }
    }
}
