/// Cyclic index over one prediction structure period.
///
/// Every pass that replays a GOP template walks it through `next`/`at` so the
/// wraparound arithmetic lives in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GopRing {
    period: usize,
}

impl GopRing {
    pub fn new(period: usize) -> Self {
        assert!(period > 0);
        GopRing { period }
    }

    #[inline]
    pub fn period(&self) -> usize {
        self.period
    }

    #[inline]
    pub fn next(&self, idx: usize) -> usize {
        (idx + 1) % self.period
    }

    // Template index of a (possibly negative) display position.
    #[inline]
    pub fn at(&self, pos: isize) -> usize {
        pos.rem_euclid(self.period as isize) as usize
    }

    // Display offset after the previous anchor, in 1..=period.
    #[inline]
    pub fn offset_in_period(&self, idx: usize) -> usize {
        if idx == 0 {
            self.period
        } else {
            idx
        }
    }
}

// Round x up to a multiple of base.
#[inline]
pub fn ceiling(x: usize, base: usize) -> usize {
    (x + base - 1) / base * base
}
