pub(crate) mod pstruct;
pub(crate) mod rps;
pub(crate) mod timeline;

use std::cmp;

use log::*;

use crate::api::*;
use crate::com::util::*;
use crate::com::*;

use pstruct::*;
use rps::*;
use timeline::*;

pub(crate) const REFP_0: usize = 0;
pub(crate) const REFP_NUM: usize = 2;

const GROUP_SIZE: usize = MAX_HIERARCHICAL_LEVELS * PRED_STRUCTURE_NUM * MAX_REF_COUNT;

fn group_index(
    pred_type: PredStructure,
    reference_count: usize,
    hierarchical_levels: usize,
) -> Option<usize> {
    if hierarchical_levels >= MAX_HIERARCHICAL_LEVELS
        || reference_count < MIN_REF_COUNT
        || reference_count > MAX_REF_COUNT
    {
        return None;
    }
    Some(
        (hierarchical_levels * PRED_STRUCTURE_NUM + pred_type as usize) * MAX_REF_COUNT
            + reference_count
            - MIN_REF_COUNT,
    )
}

/*****************************************************************************
 * prediction structure group
 *
 * every (hierarchy depth, GOP discipline, reference count) combination,
 * built once at encoder start and read-only afterwards.
 *****************************************************************************/
#[derive(Debug, Clone)]
pub struct PredictionStructureGroup {
    structures: Vec<PredictionStructure>,
    base_layer_switch_mode: bool,
}

impl PredictionStructureGroup {
    pub fn new(cfg: &EncoderConfig) -> Result<Self> {
        cfg.validate()?;

        let mut structures = Vec::new();
        structures.try_reserve_exact(GROUP_SIZE)?;

        for hierarchical_levels in 0..MAX_HIERARCHICAL_LEVELS {
            let config = pred_struct_config(hierarchical_levels).ok_or_else(|| {
                PredError::InvalidConfig(format!("no GOP template for {} levels", hierarchical_levels))
            })?;
            for &pred_type in PredStructure::ALL.iter() {
                for reference_count in MIN_REF_COUNT..=MAX_REF_COUNT {
                    let mut ps = build_pred_struct(
                        config,
                        pred_type,
                        reference_count,
                        cfg.base_layer_switch_mode,
                    )?;
                    let timeline = build_timeline(&ps)?;
                    synthesize_rps(&mut ps, &timeline)?;
                    structures.push(ps);
                }
            }
        }

        debug!(
            "prediction structure group ready: {} structures, base layer switch {}",
            structures.len(),
            cfg.base_layer_switch_mode
        );

        Ok(PredictionStructureGroup {
            structures,
            base_layer_switch_mode: cfg.base_layer_switch_mode,
        })
    }

    pub fn get(
        &self,
        pred_type: PredStructure,
        reference_count: usize,
        hierarchical_levels: usize,
    ) -> Result<&PredictionStructure> {
        group_index(pred_type, reference_count, hierarchical_levels)
            .and_then(|idx| self.structures.get(idx))
            .ok_or_else(|| {
                error!(
                    "no prediction structure for {} refs {} levels {}",
                    pred_type, reference_count, hierarchical_levels
                );
                PredError::InvalidRequest(format!(
                    "{} with {} references and {} hierarchical levels",
                    pred_type, reference_count, hierarchical_levels
                ))
            })
    }

    pub fn get_for_config(&self, cfg: &EncoderConfig) -> Result<&PredictionStructure> {
        self.get(cfg.pred_structure, cfg.reference_count, cfg.hierarchical_levels)
    }

    pub fn base_layer_switch_mode(&self) -> bool {
        self.base_layer_switch_mode
    }

    pub fn iter(&self) -> impl Iterator<Item = &PredictionStructure> {
        self.structures.iter()
    }
}

pub fn get_prediction_structure(
    group: &PredictionStructureGroup,
    pred_type: PredStructure,
    reference_count: usize,
    hierarchical_levels: usize,
) -> Result<&PredictionStructure> {
    group.get(pred_type, reference_count, hierarchical_levels)
}
