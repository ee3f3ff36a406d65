use crate::api::*;

use num_traits::FromPrimitive;

// Encoder settings consumed by the prediction structure planner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    // Hierarchy depth (0..=5), selects a period of 1, 2, 4, 8, 16 or 32 pictures.
    pub hierarchical_levels: usize,
    // GOP discipline.
    pub pred_structure: PredStructure,
    // Maximum number of references per list (1..=4).
    pub reference_count: usize,
    // Empty List1 of temporal layer 0 pictures before building.
    pub base_layer_switch_mode: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            hierarchical_levels: 3,
            pred_structure: PredStructure::RandomAccess,
            reference_count: MAX_REF_COUNT,
            base_layer_switch_mode: false,
        }
    }
}

impl EncoderConfig {
    pub fn new(
        hierarchical_levels: usize,
        pred_structure: PredStructure,
        reference_count: usize,
    ) -> Self {
        EncoderConfig {
            hierarchical_levels,
            pred_structure,
            reference_count,
            ..Default::default()
        }
    }

    pub fn with_pred_structure_index(mut self, pred_structure: u8) -> Result<Self> {
        self.pred_structure = PredStructure::from_u8(pred_structure).ok_or_else(|| {
            PredError::InvalidConfig(format!("unknown prediction structure {}", pred_structure))
        })?;
        Ok(self)
    }

    // Number of pictures in one period of the selected hierarchy.
    pub fn pred_struct_period(&self) -> usize {
        1 << self.hierarchical_levels
    }

    pub fn validate(&self) -> Result<()> {
        if self.hierarchical_levels >= MAX_HIERARCHICAL_LEVELS {
            return Err(PredError::InvalidConfig(format!(
                "hierarchical_levels must be in 0..{}, got {}",
                MAX_HIERARCHICAL_LEVELS, self.hierarchical_levels
            )));
        }
        if self.reference_count < MIN_REF_COUNT || self.reference_count > MAX_REF_COUNT {
            return Err(PredError::InvalidConfig(format!(
                "reference_count must be in {}..={}, got {}",
                MIN_REF_COUNT, MAX_REF_COUNT, self.reference_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = EncoderConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.pred_struct_period(), 8);
    }

    #[test]
    fn out_of_range_config_is_rejected() {
        let cfg = EncoderConfig::new(6, PredStructure::LowDelayP, 1);
        assert!(matches!(cfg.validate(), Err(PredError::InvalidConfig(_))));
        let cfg = EncoderConfig::new(2, PredStructure::LowDelayP, 0);
        assert!(matches!(cfg.validate(), Err(PredError::InvalidConfig(_))));
        let cfg = EncoderConfig::new(2, PredStructure::LowDelayP, 5);
        assert!(matches!(cfg.validate(), Err(PredError::InvalidConfig(_))));
    }

    #[test]
    fn pred_structure_index() {
        let cfg = EncoderConfig::default().with_pred_structure_index(1).unwrap();
        assert_eq!(cfg.pred_structure, PredStructure::LowDelayB);
        assert!(EncoderConfig::default().with_pred_structure_index(7).is_err());
    }
}
