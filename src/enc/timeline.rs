use super::*;

/*****************************************************************************
 * reference timeline
 *
 * the structure is replayed over a virtual stream made of whole periods:
 * group 0 holds the leading pictures and the key picture, group g > 0 the
 * pictures at display positions ((g-1)*P, g*P]. within a group pictures are
 * coded in the entries' decode order.
 *****************************************************************************/
pub(crate) struct Timeline {
    /* virtual stream length, in pictures */
    pub(crate) size: usize,
    /* decode slot -> stream index */
    pub(crate) decode_order_table: Vec<usize>,
    /* stream index -> decode slot */
    pub(crate) display_order_table: Vec<usize>,
    /* live[producer][consumer]: producer still held when consumer is coded */
    live: Vec<Vec<bool>>,
    /* stream index whose retained set is signaled for each entry */
    pub(crate) representative: Vec<usize>,
}

impl Timeline {
    #[inline]
    pub(crate) fn is_live(&self, producer: usize, consumer: usize) -> bool {
        self.live[producer][consumer]
    }
}

fn decode_key(ps: &PredictionStructure, idx: usize) -> usize {
    let period = ps.pred_struct_period as isize;
    let pos = ps.position_of(idx);
    let group = if pos <= 0 { 0 } else { (pos - 1) / period + 1 };
    group as usize * ps.pred_struct_period + ps.entries[ps.entry_index_at(idx)].decode_order
}

/* consumers are checked against the picture's own lists, dependent lists are
 * merged over every occurrence of a steady-state entry */
fn references(ps: &PredictionStructure, consumer: usize, list_idx: usize, delta: i32) -> bool {
    let entry = &ps.entries[ps.entry_index_at(consumer)];
    if list_idx == REFP_0 {
        entry.ref_list0.contains(delta)
    } else {
        entry.ref_list1.contains(delta)
    }
}

pub(crate) fn build_timeline(ps: &PredictionStructure) -> Result<Timeline> {
    let period = ps.pred_struct_period;
    let extent_periods = ps.maximum_extent / period;
    // steady entries are sampled one extent past the first steady period,
    // with one more extent of consumers behind them
    let sample_group = 2 * extent_periods + 1;
    let group_count = sample_group + extent_periods + 2;
    let size = ps.leading_pic_count + 1 + (group_count - 1) * period;

    let mut decode_order_table = Vec::new();
    decode_order_table.try_reserve_exact(size)?;
    decode_order_table.extend(0..size);
    decode_order_table.sort_by_key(|idx| decode_key(ps, *idx));

    let mut display_order_table = Vec::new();
    display_order_table.try_reserve_exact(size)?;
    display_order_table.resize(size, 0);
    for (slot, idx) in decode_order_table.iter().enumerate() {
        display_order_table[*idx] = slot;
    }

    let mut live = Vec::new();
    live.try_reserve_exact(size)?;
    for _ in 0..size {
        let mut row = Vec::new();
        row.try_reserve_exact(size)?;
        row.resize(size, false);
        live.push(row);
    }

    for producer in 0..size {
        let entry = &ps.entries[ps.entry_index_at(producer)];
        let mut last_slot = None;
        for (list_idx, deps) in [&entry.dep_list0, &entry.dep_list1].iter().enumerate() {
            for &delta in deps.deltas.iter() {
                let consumer = producer as isize + delta as isize;
                if consumer < 0 || consumer >= size as isize {
                    continue;
                }
                let consumer = consumer as usize;
                if !references(ps, consumer, list_idx, delta) {
                    continue;
                }
                let slot = display_order_table[consumer];
                last_slot = Some(last_slot.map_or(slot, |s: usize| cmp::max(s, slot)));
            }
        }

        // the buffer slot stays occupied from the moment the producer is
        // coded until its last consumer
        if let Some(last_slot) = last_slot {
            for slot in display_order_table[producer] + 1..=last_slot {
                live[producer][decode_order_table[slot]] = true;
            }
        }
    }

    let mut representative = Vec::new();
    representative.try_reserve_exact(ps.entry_count())?;
    representative.extend(0..ps.steady_state_index);
    let sample_start = ps.leading_pic_count + (sample_group - 1) * period + 1;
    representative.extend((0..ps.steady_state_pic_count).map(|m| sample_start + m));

    trace!(
        "{} period {}: timeline over {} pictures, steady state sampled at {}",
        ps.pred_type,
        period,
        size,
        sample_start
    );

    Ok(Timeline {
        size,
        decode_order_table,
        display_order_table,
        live,
        representative,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::enc::pstruct::build_pred_struct;

    fn build(levels: usize, pred_type: PredStructure, refs: usize) -> (PredictionStructure, Timeline) {
        let config = pred_struct_config(levels).unwrap();
        let ps = build_pred_struct(config, pred_type, refs, false).unwrap();
        let tl = build_timeline(&ps).unwrap();
        (ps, tl)
    }

    #[test]
    fn representatives_resolve_to_their_entry() {
        for levels in 0..MAX_HIERARCHICAL_LEVELS {
            for &pred_type in PredStructure::ALL.iter() {
                let (ps, tl) = build(levels, pred_type, 4);
                for (e, idx) in tl.representative.iter().enumerate() {
                    assert_eq!(ps.entry_index_at(*idx), e);
                    assert!(*idx < tl.size);
                }
            }
        }
    }

    #[test]
    fn decode_tables_are_inverse() {
        let (_, tl) = build(3, PredStructure::RandomAccess, 2);
        for (slot, idx) in tl.decode_order_table.iter().enumerate() {
            assert_eq!(tl.display_order_table[*idx], slot);
        }
    }

    #[test]
    fn random_access_codes_anchor_first() {
        let (ps, tl) = build(2, PredStructure::RandomAccess, 1);
        // key picture opens the stream, leading pictures follow it
        assert_eq!(tl.decode_order_table[0], ps.leading_pic_count);
        let slots: Vec<usize> = (0..ps.leading_pic_count)
            .map(|idx| tl.display_order_table[idx])
            .collect();
        assert!(slots.iter().all(|s| *s >= 1 && *s < ps.pred_struct_period));
    }

    #[test]
    fn low_delay_codes_in_display_order() {
        let (_, tl) = build(3, PredStructure::LowDelayP, 4);
        for (slot, idx) in tl.decode_order_table.iter().enumerate() {
            assert_eq!(slot, *idx);
        }
    }

    #[test]
    fn references_are_live_at_their_consumer() {
        for levels in 0..MAX_HIERARCHICAL_LEVELS {
            for &pred_type in PredStructure::ALL.iter() {
                let (ps, tl) = build(levels, pred_type, 4);
                for consumer in 0..tl.size {
                    let e = &ps.entries[ps.entry_index_at(consumer)];
                    for &d in e.ref_list0.deltas.iter().chain(e.ref_list1.deltas.iter()) {
                        let producer = (consumer as isize - d as isize) as usize;
                        assert!(tl.is_live(producer, consumer));
                    }
                }
            }
        }
    }

    #[test]
    fn nothing_is_live_before_it_is_coded() {
        let (_, tl) = build(4, PredStructure::RandomAccess, 4);
        for producer in 0..tl.size {
            for consumer in 0..tl.size {
                if tl.is_live(producer, consumer) {
                    assert!(tl.display_order_table[producer] < tl.display_order_table[consumer]);
                }
            }
        }
    }

    #[test]
    fn top_layer_is_never_live() {
        let (ps, tl) = build(3, PredStructure::RandomAccess, 4);
        for producer in 0..tl.size {
            let e = &ps.entries[ps.entry_index_at(producer)];
            if !e.is_referenced {
                assert!((0..tl.size).all(|c| !tl.is_live(producer, c)));
            }
        }
    }
}
