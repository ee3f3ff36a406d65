pub(crate) mod tbl;
pub mod util;

use std::fmt;

use crate::api::*;
use util::*;

/*****************************************************************************
 * GOP template
 *****************************************************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionStructureConfigEntry {
    pub temporal_layer: u8,
    pub decode_order: usize,
    pub ref_list0: [i32; MAX_REF_COUNT],
    pub ref_list1: [i32; MAX_REF_COUNT],
}

#[derive(Debug, Clone, Copy)]
pub struct PredictionStructureConfig {
    pub entries: &'static [PredictionStructureConfigEntry],
}

impl PredictionStructureConfig {
    pub fn period(&self) -> usize {
        self.entries.len()
    }

    pub fn ring(&self) -> GopRing {
        GopRing::new(self.period())
    }
}

/// Compiled-in template for a hierarchy depth (period `1 << hierarchical_levels`).
pub fn pred_struct_config(hierarchical_levels: usize) -> Option<&'static PredictionStructureConfig> {
    tbl::PRED_STRUCT_CONFIG_CATALOG.get(hierarchical_levels)
}

/*****************************************************************************
 * reference / dependent lists
 *****************************************************************************/
/// Offsets, in pictures, from a picture to the pictures it predicts from.
/// Positive deltas point back in display order, negative ones forward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceList {
    pub deltas: Vec<i32>,
}

impl ReferenceList {
    pub(crate) fn from_deltas(deltas: Vec<i32>) -> Self {
        ReferenceList { deltas }
    }

    pub fn count(&self) -> usize {
        self.deltas.len()
    }

    pub fn contains(&self, delta: i32) -> bool {
        self.deltas.contains(&delta)
    }
}

/// Inverse of [`ReferenceList`]: the deltas with which later pictures
/// reference this one. A picture at `position + delta` uses it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependentList {
    pub deltas: Vec<i32>,
}

impl DependentList {
    pub fn count(&self) -> usize {
        self.deltas.len()
    }

    pub fn contains(&self, delta: i32) -> bool {
        self.deltas.contains(&delta)
    }

    // Returns false when the delta was already recorded.
    pub(crate) fn insert(&mut self, delta: i32) -> Result<bool> {
        if self.contains(delta) {
            return Ok(false);
        }
        self.deltas.try_reserve(1)?;
        self.deltas.push(delta);
        Ok(true)
    }
}

/*****************************************************************************
 * prediction structure
 *****************************************************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Leading,
    Init,
    SteadyState,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::Section::*;
        f.pad(match self {
            Leading => "leading",
            Init => "init",
            SteadyState => "steady",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionStructureEntry {
    pub temporal_layer_index: u8,
    /* decode order within the period */
    pub decode_order: usize,

    pub ref_list0: ReferenceList,
    pub ref_list1: ReferenceList,
    pub dep_list0: DependentList,
    pub dep_list1: DependentList,
    pub is_referenced: bool,

    /* reference picture set */
    pub negative_ref_pic_total_count: usize,
    pub positive_ref_pic_total_count: usize,
    pub delta_negative_gop_pos_minus1: Vec<usize>,
    pub delta_positive_gop_pos_minus1: Vec<usize>,
    pub used_by_negative_curr_pic_flag: Vec<bool>,
    pub used_by_positive_curr_pic_flag: Vec<bool>,
    pub ref_pics_list0_total_count_minus1: u8,
    pub ref_pics_list1_total_count_minus1: u8,
    pub ref_pics_override_total_count_flag: bool,
}

impl PredictionStructureEntry {
    /// Absolute deltas (current minus retained) of the negative RPS part, in signaling order.
    pub fn negative_deltas(&self) -> Vec<usize> {
        let mut prev = 0;
        self.delta_negative_gop_pos_minus1
            .iter()
            .map(|d| {
                prev += d + 1;
                prev
            })
            .collect()
    }

    /// Absolute deltas (retained minus current) of the positive RPS part, in signaling order.
    pub fn positive_deltas(&self) -> Vec<usize> {
        let mut prev = 0;
        self.delta_positive_gop_pos_minus1
            .iter()
            .map(|d| {
                prev += d + 1;
                prev
            })
            .collect()
    }

    /// Number of pictures the RPS signals for this entry.
    pub fn rps_size(&self) -> usize {
        self.negative_ref_pic_total_count + self.positive_ref_pic_total_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionStructure {
    pub pred_type: PredStructure,
    pub pred_struct_period: usize,
    pub maximum_extent: usize,

    pub leading_pic_count: usize,
    pub init_pic_count: usize,
    pub steady_state_pic_count: usize,
    pub leading_pic_index: usize,
    pub init_pic_index: usize,
    pub steady_state_index: usize,

    pub default_ref_pics_list0_total_count_minus1: u8,
    pub default_ref_pics_list1_total_count_minus1: u8,
    /* most pictures held at once while an entry is coded, set with the RPS */
    pub max_held_pic_count: usize,

    pub entries: Vec<PredictionStructureEntry>,
}

impl PredictionStructure {
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Resolves an index of the virtual, endlessly repeating stream onto
    /// the entry describing it: indices past the end fold into the
    /// steady-state section.
    pub fn entry_index_at(&self, idx: usize) -> usize {
        if idx < self.steady_state_index {
            idx
        } else {
            let ring = GopRing::new(self.steady_state_pic_count);
            self.steady_state_index + ring.at((idx - self.steady_state_index) as isize)
        }
    }

    /// Display position (relative to the key picture) of a virtual stream index.
    pub fn position_of(&self, idx: usize) -> isize {
        idx as isize - self.leading_pic_count as isize
    }

    /// Entry used by the picture at a display position relative to the key picture.
    pub fn entry_index_for_position(&self, pos: isize) -> Option<usize> {
        let idx = pos + self.leading_pic_count as isize;
        if idx < 0 {
            None
        } else {
            Some(self.entry_index_at(idx as usize))
        }
    }

    pub fn section_of(&self, idx: usize) -> Section {
        if idx < self.init_pic_index {
            Section::Leading
        } else if idx < self.steady_state_index {
            Section::Init
        } else {
            Section::SteadyState
        }
    }

    pub fn max_temporal_layer(&self) -> u8 {
        self.entries
            .iter()
            .map(|e| e.temporal_layer_index)
            .max()
            .unwrap_or(0)
    }

    /// Decoded picture buffer size: the most pictures held at once plus the
    /// picture being coded. Pictures the positive RPS lists only because
    /// they will hold the current one are not in the buffer yet.
    pub fn max_dec_pic_buffering(&self) -> usize {
        self.max_held_pic_count + 1
    }
}

fn fmt_deltas<T: fmt::Display>(f: &mut fmt::Formatter<'_>, deltas: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, d) in deltas.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", d)?;
    }
    write!(f, "]")
}

impl fmt::Display for PredictionStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} period {} extent {} leading {} init {} steady {}",
            self.pred_type,
            self.pred_struct_period,
            self.maximum_extent,
            self.leading_pic_count,
            self.init_pic_count,
            self.steady_state_pic_count
        )?;
        for (idx, e) in self.entries.iter().enumerate() {
            write!(
                f,
                "{:3} {:6} pos {:4} tid {} dec {:2} L0 ",
                idx,
                self.section_of(idx),
                self.position_of(idx),
                e.temporal_layer_index,
                e.decode_order
            )?;
            fmt_deltas(f, &e.ref_list0.deltas)?;
            write!(f, " L1 ")?;
            fmt_deltas(f, &e.ref_list1.deltas)?;
            write!(f, " D0 ")?;
            fmt_deltas(f, &e.dep_list0.deltas)?;
            write!(f, " D1 ")?;
            fmt_deltas(f, &e.dep_list1.deltas)?;
            write!(f, " RPS- ")?;
            fmt_deltas(f, &e.negative_deltas())?;
            write!(f, " RPS+ ")?;
            fmt_deltas(f, &e.positive_deltas())?;
            writeln!(f, "{}", if e.is_referenced { " ref" } else { "" })?;
        }
        Ok(())
    }
}
