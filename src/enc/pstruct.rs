use super::*;

/* first `reference_count` used deltas of a template list */
fn template_refs(deltas: &[i32; MAX_REF_COUNT], reference_count: usize) -> Vec<i32> {
    deltas
        .iter()
        .cloned()
        .filter(|d| *d != 0)
        .take(reference_count)
        .collect()
}

/* template lists after the per-discipline rules, before section clipping */
struct TemplateLists {
    list0: Vec<i32>,
    list1: Vec<i32>,
}

fn effective_template(
    config: &PredictionStructureConfig,
    pred_type: PredStructure,
    reference_count: usize,
    base_layer_switch_mode: bool,
) -> Vec<TemplateLists> {
    config
        .entries
        .iter()
        .map(|entry| {
            let list0 = template_refs(&entry.ref_list0, reference_count);
            let list1 = match pred_type {
                PredStructure::LowDelayP => vec![],
                PredStructure::LowDelayB => list0.clone(),
                PredStructure::RandomAccess => {
                    if base_layer_switch_mode && entry.temporal_layer == 0 {
                        vec![]
                    } else {
                        template_refs(&entry.ref_list1, reference_count)
                    }
                }
            };
            TemplateLists { list0, list1 }
        })
        .collect()
}

/* farthest backward reach measured from the end of the period, rounded to whole periods */
fn maximum_extent(ring: GopRing, template: &[TemplateLists]) -> usize {
    let period = ring.period();
    let mut max_distance = 0;
    let mut idx = ring.next(0);
    for _ in 0..period {
        let offset = ring.offset_in_period(idx);
        let lists = &template[idx];
        for &delta in lists.list0.iter().chain(lists.list1.iter()) {
            let distance = (period - offset) as isize + delta as isize;
            if distance > max_distance {
                max_distance = distance;
            }
        }
        idx = ring.next(idx);
    }
    cmp::max(ceiling(max_distance as usize, period), period)
}

fn new_entry(
    config: &PredictionStructureConfigEntry,
    pred_type: PredStructure,
    offset: usize,
    list0: Vec<i32>,
    list1: Vec<i32>,
) -> PredictionStructureEntry {
    PredictionStructureEntry {
        temporal_layer_index: config.temporal_layer,
        // low delay codes in display order
        decode_order: if pred_type.is_low_delay() {
            offset - 1
        } else {
            config.decode_order
        },
        ref_list0: ReferenceList::from_deltas(list0),
        ref_list1: ReferenceList::from_deltas(list1),
        ..Default::default()
    }
}

/*****************************************************************************
 * build one prediction structure out of a GOP template
 *****************************************************************************/
pub(crate) fn build_pred_struct(
    config: &PredictionStructureConfig,
    pred_type: PredStructure,
    reference_count: usize,
    base_layer_switch_mode: bool,
) -> Result<PredictionStructure> {
    let ring = config.ring();
    let period = ring.period();
    let template = effective_template(config, pred_type, reference_count, base_layer_switch_mode);

    let maximum_extent = maximum_extent(ring, &template);
    let leading_pic_count = if pred_type == PredStructure::RandomAccess {
        period - 1
    } else {
        0
    };
    let init_pic_count = maximum_extent - period + 1;
    let steady_state_pic_count = period;

    let mut ps = PredictionStructure {
        pred_type,
        pred_struct_period: period,
        maximum_extent,
        leading_pic_count,
        init_pic_count,
        steady_state_pic_count,
        leading_pic_index: 0,
        init_pic_index: leading_pic_count,
        steady_state_index: leading_pic_count + init_pic_count,
        default_ref_pics_list0_total_count_minus1: 0,
        default_ref_pics_list1_total_count_minus1: 0,
        max_held_pic_count: 0,
        entries: vec![],
    };
    ps.entries
        .try_reserve_exact(leading_pic_count + init_pic_count + steady_state_pic_count)?;

    // Leading pictures precede the key picture in display order but follow
    // it in decode order, so they may only reach forward, up to the key picture.
    let mut idx = ring.next(0);
    for pos in -(leading_pic_count as isize)..0 {
        let list0: Vec<i32> = template[idx]
            .list1
            .iter()
            .cloned()
            .filter(|d| *d < 0 && pos - (*d as isize) <= 0)
            .collect();
        ps.entries.push(new_entry(
            &config.entries[idx],
            pred_type,
            ring.offset_in_period(idx),
            list0,
            vec![],
        ));
        idx = ring.next(idx);
    }

    // Init pictures replay the template from the key picture on, without
    // reaching behind it.
    let mut idx = 0;
    for pos in 0..init_pic_count as isize {
        let clip = |deltas: &Vec<i32>| -> Vec<i32> {
            deltas
                .iter()
                .cloned()
                .filter(|d| pos - (*d as isize) >= 0)
                .collect()
        };
        let list0 = clip(&template[idx].list0);
        let list1 = clip(&template[idx].list1);
        ps.entries.push(new_entry(
            &config.entries[idx],
            pred_type,
            ring.offset_in_period(idx),
            list0,
            list1,
        ));
        idx = ring.next(idx);
    }

    // Steady state copies one full period verbatim.
    for _ in 0..steady_state_pic_count {
        ps.entries.push(new_entry(
            &config.entries[idx],
            pred_type,
            ring.offset_in_period(idx),
            template[idx].list0.clone(),
            template[idx].list1.clone(),
        ));
        idx = ring.next(idx);
    }

    derive_dependent_lists(&mut ps)?;

    debug!(
        "{} period {} refs {}: extent {} leading {} init {} steady {}",
        pred_type,
        period,
        reference_count,
        maximum_extent,
        leading_pic_count,
        init_pic_count,
        steady_state_pic_count
    );

    Ok(ps)
}

/*****************************************************************************
 * invert reference lists into dependent lists
 *
 * the window covers the stream start plus two extents, long enough that every
 * steady-state reference resolves, including across one wraparound.
 *****************************************************************************/
fn derive_dependent_lists(ps: &mut PredictionStructure) -> Result<()> {
    let window = ps.steady_state_index + 2 * ps.maximum_extent;

    for list_idx in 0..REFP_NUM {
        for idx in 0..window {
            let origin = ps.entry_index_at(idx);
            let deltas = if list_idx == REFP_0 {
                ps.entries[origin].ref_list0.deltas.clone()
            } else {
                ps.entries[origin].ref_list1.deltas.clone()
            };
            for delta in deltas {
                let target = idx as isize - delta as isize;
                if target < 0 {
                    continue;
                }
                let target = ps.entry_index_at(target as usize);
                let entry = &mut ps.entries[target];
                if list_idx == REFP_0 {
                    entry.dep_list0.insert(delta)?;
                } else {
                    entry.dep_list1.insert(delta)?;
                }
            }
        }
    }

    for entry in ps.entries.iter_mut() {
        entry.is_referenced = entry.dep_list0.count() > 0 || entry.dep_list1.count() > 0;
    }

    Ok(())
}
