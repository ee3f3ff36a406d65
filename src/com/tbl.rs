use super::*;

/*****************************************************************************
 * GOP templates, one per hierarchy depth
 *
 * entry k describes the picture k pictures after the previous anchor in
 * display order (entry 0 is the anchor itself). negative deltas reference
 * forward in display order, 0 marks an unused slot.
 *****************************************************************************/
#[rustfmt::skip]
static FLAT_PRED_STRUCT: [PredictionStructureConfigEntry; 1] = [
    PredictionStructureConfigEntry { temporal_layer: 0, decode_order:  0, ref_list0: [  1,   2,   3,   4], ref_list1: [  1,   0,   0,   0] }, // 0
];

#[rustfmt::skip]
static TWO_LEVEL_PRED_STRUCT: [PredictionStructureConfigEntry; 2] = [
    PredictionStructureConfigEntry { temporal_layer: 0, decode_order:  0, ref_list0: [  2,   4,   6,   8], ref_list1: [  2,   0,   0,   0] }, // 0
    PredictionStructureConfigEntry { temporal_layer: 1, decode_order:  1, ref_list0: [  1,   0,   0,   0], ref_list1: [ -1,   0,   0,   0] }, // 1
];

#[rustfmt::skip]
static THREE_LEVEL_PRED_STRUCT: [PredictionStructureConfigEntry; 4] = [
    PredictionStructureConfigEntry { temporal_layer: 0, decode_order:  0, ref_list0: [  4,   8,  12,   0], ref_list1: [  4,   0,   0,   0] }, // 0
    PredictionStructureConfigEntry { temporal_layer: 2, decode_order:  2, ref_list0: [  1,   0,   0,   0], ref_list1: [ -1,  -3,   0,   0] }, // 1
    PredictionStructureConfigEntry { temporal_layer: 1, decode_order:  1, ref_list0: [  2,   0,   0,   0], ref_list1: [ -2,   0,   0,   0] }, // 2
    PredictionStructureConfigEntry { temporal_layer: 2, decode_order:  3, ref_list0: [  1,   3,   0,   0], ref_list1: [ -1,   0,   0,   0] }, // 3
];

#[rustfmt::skip]
static FOUR_LEVEL_PRED_STRUCT: [PredictionStructureConfigEntry; 8] = [
    PredictionStructureConfigEntry { temporal_layer: 0, decode_order:  0, ref_list0: [  8,  16,   0,   0], ref_list1: [  8,   0,   0,   0] }, // 0
    PredictionStructureConfigEntry { temporal_layer: 3, decode_order:  3, ref_list0: [  1,   0,   0,   0], ref_list1: [ -1,  -3,  -7,   0] }, // 1
    PredictionStructureConfigEntry { temporal_layer: 2, decode_order:  2, ref_list0: [  2,   0,   0,   0], ref_list1: [ -2,  -6,   0,   0] }, // 2
    PredictionStructureConfigEntry { temporal_layer: 3, decode_order:  4, ref_list0: [  1,   3,   0,   0], ref_list1: [ -1,  -5,   0,   0] }, // 3
    PredictionStructureConfigEntry { temporal_layer: 1, decode_order:  1, ref_list0: [  4,   0,   0,   0], ref_list1: [ -4,   0,   0,   0] }, // 4
    PredictionStructureConfigEntry { temporal_layer: 3, decode_order:  6, ref_list0: [  1,   5,   0,   0], ref_list1: [ -1,  -3,   0,   0] }, // 5
    PredictionStructureConfigEntry { temporal_layer: 2, decode_order:  5, ref_list0: [  2,   6,   0,   0], ref_list1: [ -2,   0,   0,   0] }, // 6
    PredictionStructureConfigEntry { temporal_layer: 3, decode_order:  7, ref_list0: [  1,   3,   7,   0], ref_list1: [ -1,   0,   0,   0] }, // 7
];

#[rustfmt::skip]
static FIVE_LEVEL_PRED_STRUCT: [PredictionStructureConfigEntry; 16] = [
    PredictionStructureConfigEntry { temporal_layer: 0, decode_order:  0, ref_list0: [ 16,   0,   0,   0], ref_list1: [ 16,   0,   0,   0] }, // 0
    PredictionStructureConfigEntry { temporal_layer: 4, decode_order:  4, ref_list0: [  1,   0,   0,   0], ref_list1: [ -1,  -3,  -7, -15] }, // 1
    PredictionStructureConfigEntry { temporal_layer: 3, decode_order:  3, ref_list0: [  2,   0,   0,   0], ref_list1: [ -2,  -6, -14,   0] }, // 2
    PredictionStructureConfigEntry { temporal_layer: 4, decode_order:  5, ref_list0: [  1,   3,   0,   0], ref_list1: [ -1,  -5, -13,   0] }, // 3
    PredictionStructureConfigEntry { temporal_layer: 2, decode_order:  2, ref_list0: [  4,   0,   0,   0], ref_list1: [ -4, -12,   0,   0] }, // 4
    PredictionStructureConfigEntry { temporal_layer: 4, decode_order:  7, ref_list0: [  1,   5,   0,   0], ref_list1: [ -1,  -3, -11,   0] }, // 5
    PredictionStructureConfigEntry { temporal_layer: 3, decode_order:  6, ref_list0: [  2,   6,   0,   0], ref_list1: [ -2, -10,   0,   0] }, // 6
    PredictionStructureConfigEntry { temporal_layer: 4, decode_order:  8, ref_list0: [  1,   3,   7,   0], ref_list1: [ -1,  -9,   0,   0] }, // 7
    PredictionStructureConfigEntry { temporal_layer: 1, decode_order:  1, ref_list0: [  8,   0,   0,   0], ref_list1: [ -8,   0,   0,   0] }, // 8
    PredictionStructureConfigEntry { temporal_layer: 4, decode_order: 11, ref_list0: [  1,   9,   0,   0], ref_list1: [ -1,  -3,  -7,   0] }, // 9
    PredictionStructureConfigEntry { temporal_layer: 3, decode_order: 10, ref_list0: [  2,  10,   0,   0], ref_list1: [ -2,  -6,   0,   0] }, // 10
    PredictionStructureConfigEntry { temporal_layer: 4, decode_order: 12, ref_list0: [  1,   3,  11,   0], ref_list1: [ -1,  -5,   0,   0] }, // 11
    PredictionStructureConfigEntry { temporal_layer: 2, decode_order:  9, ref_list0: [  4,  12,   0,   0], ref_list1: [ -4,   0,   0,   0] }, // 12
    PredictionStructureConfigEntry { temporal_layer: 4, decode_order: 14, ref_list0: [  1,   5,  13,   0], ref_list1: [ -1,  -3,   0,   0] }, // 13
    PredictionStructureConfigEntry { temporal_layer: 3, decode_order: 13, ref_list0: [  2,   6,  14,   0], ref_list1: [ -2,   0,   0,   0] }, // 14
    PredictionStructureConfigEntry { temporal_layer: 4, decode_order: 15, ref_list0: [  1,   3,   7,  15], ref_list1: [ -1,   0,   0,   0] }, // 15
];

#[rustfmt::skip]
static SIX_LEVEL_PRED_STRUCT: [PredictionStructureConfigEntry; 32] = [
    PredictionStructureConfigEntry { temporal_layer: 0, decode_order:  0, ref_list0: [ 32,   0,   0,   0], ref_list1: [ 32,   0,   0,   0] }, // 0
    PredictionStructureConfigEntry { temporal_layer: 5, decode_order:  5, ref_list0: [  1,   0,   0,   0], ref_list1: [ -1,  -3,  -7, -15] }, // 1
    PredictionStructureConfigEntry { temporal_layer: 4, decode_order:  4, ref_list0: [  2,   0,   0,   0], ref_list1: [ -2,  -6, -14, -30] }, // 2
    PredictionStructureConfigEntry { temporal_layer: 5, decode_order:  6, ref_list0: [  1,   3,   0,   0], ref_list1: [ -1,  -5, -13, -29] }, // 3
    PredictionStructureConfigEntry { temporal_layer: 3, decode_order:  3, ref_list0: [  4,   0,   0,   0], ref_list1: [ -4, -12, -28,   0] }, // 4
    PredictionStructureConfigEntry { temporal_layer: 5, decode_order:  8, ref_list0: [  1,   5,   0,   0], ref_list1: [ -1,  -3, -11, -27] }, // 5
    PredictionStructureConfigEntry { temporal_layer: 4, decode_order:  7, ref_list0: [  2,   6,   0,   0], ref_list1: [ -2, -10, -26,   0] }, // 6
    PredictionStructureConfigEntry { temporal_layer: 5, decode_order:  9, ref_list0: [  1,   3,   7,   0], ref_list1: [ -1,  -9, -25,   0] }, // 7
    PredictionStructureConfigEntry { temporal_layer: 2, decode_order:  2, ref_list0: [  8,   0,   0,   0], ref_list1: [ -8, -24,   0,   0] }, // 8
    PredictionStructureConfigEntry { temporal_layer: 5, decode_order: 12, ref_list0: [  1,   9,   0,   0], ref_list1: [ -1,  -3,  -7, -23] }, // 9
    PredictionStructureConfigEntry { temporal_layer: 4, decode_order: 11, ref_list0: [  2,  10,   0,   0], ref_list1: [ -2,  -6, -22,   0] }, // 10
    PredictionStructureConfigEntry { temporal_layer: 5, decode_order: 13, ref_list0: [  1,   3,  11,   0], ref_list1: [ -1,  -5, -21,   0] }, // 11
    PredictionStructureConfigEntry { temporal_layer: 3, decode_order: 10, ref_list0: [  4,  12,   0,   0], ref_list1: [ -4, -20,   0,   0] }, // 12
    PredictionStructureConfigEntry { temporal_layer: 5, decode_order: 15, ref_list0: [  1,   5,  13,   0], ref_list1: [ -1,  -3, -19,   0] }, // 13
    PredictionStructureConfigEntry { temporal_layer: 4, decode_order: 14, ref_list0: [  2,   6,  14,   0], ref_list1: [ -2, -18,   0,   0] }, // 14
    PredictionStructureConfigEntry { temporal_layer: 5, decode_order: 16, ref_list0: [  1,   3,   7,  15], ref_list1: [ -1, -17,   0,   0] }, // 15
    PredictionStructureConfigEntry { temporal_layer: 1, decode_order:  1, ref_list0: [ 16,   0,   0,   0], ref_list1: [-16,   0,   0,   0] }, // 16
    PredictionStructureConfigEntry { temporal_layer: 5, decode_order: 20, ref_list0: [  1,  17,   0,   0], ref_list1: [ -1,  -3,  -7, -15] }, // 17
    PredictionStructureConfigEntry { temporal_layer: 4, decode_order: 19, ref_list0: [  2,  18,   0,   0], ref_list1: [ -2,  -6, -14,   0] }, // 18
    PredictionStructureConfigEntry { temporal_layer: 5, decode_order: 21, ref_list0: [  1,   3,  19,   0], ref_list1: [ -1,  -5, -13,   0] }, // 19
    PredictionStructureConfigEntry { temporal_layer: 3, decode_order: 18, ref_list0: [  4,  20,   0,   0], ref_list1: [ -4, -12,   0,   0] }, // 20
    PredictionStructureConfigEntry { temporal_layer: 5, decode_order: 23, ref_list0: [  1,   5,  21,   0], ref_list1: [ -1,  -3, -11,   0] }, // 21
    PredictionStructureConfigEntry { temporal_layer: 4, decode_order: 22, ref_list0: [  2,   6,  22,   0], ref_list1: [ -2, -10,   0,   0] }, // 22
    PredictionStructureConfigEntry { temporal_layer: 5, decode_order: 24, ref_list0: [  1,   3,   7,  23], ref_list1: [ -1,  -9,   0,   0] }, // 23
    PredictionStructureConfigEntry { temporal_layer: 2, decode_order: 17, ref_list0: [  8,  24,   0,   0], ref_list1: [ -8,   0,   0,   0] }, // 24
    PredictionStructureConfigEntry { temporal_layer: 5, decode_order: 27, ref_list0: [  1,   9,  25,   0], ref_list1: [ -1,  -3,  -7,   0] }, // 25
    PredictionStructureConfigEntry { temporal_layer: 4, decode_order: 26, ref_list0: [  2,  10,  26,   0], ref_list1: [ -2,  -6,   0,   0] }, // 26
    PredictionStructureConfigEntry { temporal_layer: 5, decode_order: 28, ref_list0: [  1,   3,  11,  27], ref_list1: [ -1,  -5,   0,   0] }, // 27
    PredictionStructureConfigEntry { temporal_layer: 3, decode_order: 25, ref_list0: [  4,  12,  28,   0], ref_list1: [ -4,   0,   0,   0] }, // 28
    PredictionStructureConfigEntry { temporal_layer: 5, decode_order: 30, ref_list0: [  1,   5,  13,  29], ref_list1: [ -1,  -3,   0,   0] }, // 29
    PredictionStructureConfigEntry { temporal_layer: 4, decode_order: 29, ref_list0: [  2,   6,  14,  30], ref_list1: [ -2,   0,   0,   0] }, // 30
    PredictionStructureConfigEntry { temporal_layer: 5, decode_order: 31, ref_list0: [  1,   3,   7,  15], ref_list1: [ -1,   0,   0,   0] }, // 31
];

pub(crate) static PRED_STRUCT_CONFIG_CATALOG: [PredictionStructureConfig; MAX_HIERARCHICAL_LEVELS] = [
    PredictionStructureConfig { entries: &FLAT_PRED_STRUCT },
    PredictionStructureConfig { entries: &TWO_LEVEL_PRED_STRUCT },
    PredictionStructureConfig { entries: &THREE_LEVEL_PRED_STRUCT },
    PredictionStructureConfig { entries: &FOUR_LEVEL_PRED_STRUCT },
    PredictionStructureConfig { entries: &FIVE_LEVEL_PRED_STRUCT },
    PredictionStructureConfig { entries: &SIX_LEVEL_PRED_STRUCT },
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn periods_are_powers_of_two() {
        for (levels, cfg) in PRED_STRUCT_CONFIG_CATALOG.iter().enumerate() {
            assert_eq!(cfg.period(), 1 << levels);
            assert_eq!(cfg.entries[0].temporal_layer, 0);
            assert_eq!(cfg.entries[0].decode_order, 0);
        }
    }

    #[test]
    fn decode_order_is_a_permutation() {
        for cfg in PRED_STRUCT_CONFIG_CATALOG.iter() {
            let mut seen = vec![false; cfg.period()];
            for entry in cfg.entries {
                assert!(!seen[entry.decode_order]);
                seen[entry.decode_order] = true;
            }
        }
    }

    #[test]
    fn every_entry_has_a_backward_reference() {
        for cfg in PRED_STRUCT_CONFIG_CATALOG.iter() {
            for entry in cfg.entries {
                assert!(entry.ref_list0[0] > 0);
                // unused slots only trail
                let used = entry.ref_list0.iter().take_while(|d| **d != 0).count();
                assert!(entry.ref_list0[used..].iter().all(|d| *d == 0));
            }
        }
    }
}
