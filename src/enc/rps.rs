use super::*;

/*****************************************************************************
 * reference picture set synthesis
 *
 * negative pictures precede the current one in display order and are held
 * when it is coded. positive ones follow it and are tied to it through the
 * timeline in either direction: held when it is coded, or holding it when
 * they are coded. both parts are delta-of-delta coded, nearest picture first.
 *****************************************************************************/
pub(crate) fn synthesize_rps(ps: &mut PredictionStructure, timeline: &Timeline) -> Result<()> {
    let mut max_held_pic_count = 0;

    for entry_idx in 0..ps.entry_count() {
        let current = timeline.representative[entry_idx];
        let entry = &mut ps.entries[entry_idx];
        let mut held = 0;

        entry.delta_negative_gop_pos_minus1.clear();
        entry.used_by_negative_curr_pic_flag.clear();
        let mut prev = 0;
        for candidate in (0..current).rev() {
            if !timeline.is_live(candidate, current) {
                continue;
            }
            let delta = current - candidate;
            let used = entry.ref_list0.contains(delta as i32) || entry.ref_list1.contains(delta as i32);
            entry.delta_negative_gop_pos_minus1.try_reserve(1)?;
            entry.used_by_negative_curr_pic_flag.try_reserve(1)?;
            entry.delta_negative_gop_pos_minus1.push(delta - 1 - prev);
            entry.used_by_negative_curr_pic_flag.push(used);
            prev = delta;
            held += 1;
        }
        entry.negative_ref_pic_total_count = entry.delta_negative_gop_pos_minus1.len();

        entry.delta_positive_gop_pos_minus1.clear();
        entry.used_by_positive_curr_pic_flag.clear();
        let mut prev = 0;
        for candidate in current + 1..timeline.size {
            let is_held = timeline.is_live(candidate, current);
            if !is_held && !timeline.is_live(current, candidate) {
                continue;
            }
            let delta = candidate - current;
            let used =
                entry.ref_list0.contains(-(delta as i32)) || entry.ref_list1.contains(-(delta as i32));
            entry.delta_positive_gop_pos_minus1.try_reserve(1)?;
            entry.used_by_positive_curr_pic_flag.try_reserve(1)?;
            entry.delta_positive_gop_pos_minus1.push(delta - 1 - prev);
            entry.used_by_positive_curr_pic_flag.push(used);
            prev = delta;
            if is_held {
                held += 1;
            }
        }
        entry.positive_ref_pic_total_count = entry.delta_positive_gop_pos_minus1.len();

        entry.ref_pics_list0_total_count_minus1 = entry.ref_list0.count().saturating_sub(1) as u8;
        entry.ref_pics_list1_total_count_minus1 = entry.ref_list1.count().saturating_sub(1) as u8;
        entry.ref_pics_override_total_count_flag = entry.ref_pics_list0_total_count_minus1
            != ps.default_ref_pics_list0_total_count_minus1
            || entry.ref_pics_list1_total_count_minus1 != ps.default_ref_pics_list1_total_count_minus1;

        max_held_pic_count = cmp::max(max_held_pic_count, held);
    }
    ps.max_held_pic_count = max_held_pic_count;

    debug!(
        "{} period {}: max dec pic buffering {}",
        ps.pred_type,
        ps.pred_struct_period,
        ps.max_dec_pic_buffering()
    );

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::enc::pstruct::build_pred_struct;
    use crate::enc::timeline::build_timeline;
    use pretty_assertions::assert_eq;

    fn build(levels: usize, pred_type: PredStructure, refs: usize) -> (PredictionStructure, Timeline) {
        let config = pred_struct_config(levels).unwrap();
        let mut ps = build_pred_struct(config, pred_type, refs, false).unwrap();
        let tl = build_timeline(&ps).unwrap();
        synthesize_rps(&mut ps, &tl).unwrap();
        (ps, tl)
    }

    #[test]
    fn rps_decodes_back_to_the_retained_set() {
        for levels in 0..MAX_HIERARCHICAL_LEVELS {
            for &pred_type in PredStructure::ALL.iter() {
                for refs in MIN_REF_COUNT..=MAX_REF_COUNT {
                    let (ps, tl) = build(levels, pred_type, refs);
                    for (e, entry) in ps.entries.iter().enumerate() {
                        let current = tl.representative[e];
                        let mut signaled: Vec<usize> = entry
                            .negative_deltas()
                            .iter()
                            .map(|d| current - d)
                            .chain(entry.positive_deltas().iter().map(|d| current + d))
                            .collect();
                        signaled.sort();
                        let retained: Vec<usize> = (0..tl.size)
                            .filter(|p| {
                                tl.is_live(*p, current) || (*p > current && tl.is_live(current, *p))
                            })
                            .collect();
                        assert_eq!(signaled, retained);
                    }
                }
            }
        }
    }

    #[test]
    fn every_reference_is_signaled_as_used() {
        for levels in 0..MAX_HIERARCHICAL_LEVELS {
            for &pred_type in PredStructure::ALL.iter() {
                let (ps, _) = build(levels, pred_type, 4);
                for entry in ps.entries.iter() {
                    let mut used: Vec<i32> = entry
                        .negative_deltas()
                        .iter()
                        .zip(entry.used_by_negative_curr_pic_flag.iter())
                        .filter(|(_, u)| **u)
                        .map(|(d, _)| *d as i32)
                        .chain(
                            entry
                                .positive_deltas()
                                .iter()
                                .zip(entry.used_by_positive_curr_pic_flag.iter())
                                .filter(|(_, u)| **u)
                                .map(|(d, _)| -(*d as i32)),
                        )
                        .collect();
                    used.sort();
                    let mut refs: Vec<i32> = entry
                        .ref_list0
                        .deltas
                        .iter()
                        .chain(entry.ref_list1.deltas.iter())
                        .cloned()
                        .collect();
                    refs.sort();
                    refs.dedup();
                    assert_eq!(used, refs);
                }
            }
        }
    }

    #[test]
    fn key_picture_holds_nothing_behind_it() {
        for &pred_type in PredStructure::ALL.iter() {
            let (ps, tl) = build(3, pred_type, 4);
            let key = &ps.entries[ps.init_pic_index];
            assert_eq!(key.negative_ref_pic_total_count, 0);
            assert!(key.used_by_positive_curr_pic_flag.iter().all(|u| !u));
            assert_eq!(key.ref_pics_list0_total_count_minus1, 0);
            assert!(!key.ref_pics_override_total_count_flag);
            // the pictures that keep the key picture alive are listed ahead of it
            let current = tl.representative[ps.init_pic_index];
            for d in key.positive_deltas() {
                assert!(tl.is_live(current, current + d));
            }
        }
    }

    #[test]
    fn three_level_random_access_two_references() {
        let (ps, _) = build(2, PredStructure::RandomAccess, 2);
        let anchors: Vec<usize> = (ps.init_pic_index..ps.entry_count())
            .filter(|idx| ps.entries[*idx].decode_order == 0)
            .collect();
        assert_eq!(anchors.len(), 3);
        for idx in anchors {
            let anchor = &ps.entries[idx];
            assert!(anchor.is_referenced);
            assert!(anchor.positive_ref_pic_total_count >= 3);
            assert!(anchor.used_by_positive_curr_pic_flag.iter().all(|u| !u));
        }

        // the B pictures of the period hold the anchor coded ahead of them
        for pos in 5..8 {
            let e = &ps.entries[ps.entry_index_for_position(pos).unwrap()];
            assert!(e.positive_deltas().contains(&(8 - pos as usize)));
        }
        let b = &ps.entries[ps.entry_index_for_position(5).unwrap()];
        assert_eq!(b.positive_deltas(), vec![1, 3]);
        assert_eq!(b.used_by_positive_curr_pic_flag, vec![true, true]);
    }

    #[test]
    fn flat_low_delay_keeps_reference_window() {
        let (ps, _) = build(0, PredStructure::LowDelayP, 4);
        let steady = &ps.entries[ps.steady_state_index];
        assert_eq!(steady.negative_deltas(), vec![1, 2, 3, 4]);
        assert_eq!(steady.delta_negative_gop_pos_minus1, vec![0, 0, 0, 0]);
        // the next four pictures reference this one
        assert_eq!(steady.positive_deltas(), vec![1, 2, 3, 4]);
        assert_eq!(steady.used_by_positive_curr_pic_flag, vec![false; 4]);
        assert_eq!(steady.ref_pics_list0_total_count_minus1, 3);
        assert!(steady.ref_pics_override_total_count_flag);
        assert_eq!(ps.max_dec_pic_buffering(), 5);
    }
}
