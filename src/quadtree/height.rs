//! Abstracted height data type.

use std::fmt;

type UnderlyingInt = u8;

/// Maximum height for a tree root.
///
/// A node of height h covers a 2^h x 2^h square of cells, so a root at height
/// 64 covers the entire signed 64-bit plane. The cap keeps all coordinate
/// arithmetic within `i64`. Heights above the cap can exist transiently while
/// a generation is being computed (the root is grown twice before
/// evaluation); compaction restores the cap before control returns to the
/// caller.
pub const MAX_HEIGHT: Height = Height(64);

/// Smallest height at which a node has grandchildren.
///
/// This is both the base case of the evolution engine (a height-2 node holds
/// the sixteen cells needed to step its center 2x2 square) and the floor for
/// border-emptiness checks during compaction.
pub const MIN_GROWABLE: Height = Height(2);

/// Distance of a node from the leaf layer.
///
/// Leaves have height 0 and cover a single cell; an inner node's four
/// children all sit one height below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Height(UnderlyingInt);

impl Height {
    pub const fn new(int: UnderlyingInt) -> Self {
        Height(int)
    }

    /// Height of this node's children.
    ///
    /// Panics for leaves since there is nothing below them; reaching this
    /// from a leaf means there is a bug in the calling code.
    pub fn child(self) -> Self {
        match self.0.checked_sub(1) {
            Some(h) => Height(h),
            None => panic!("[Bug in quadtree] Leaf nodes have no child height"),
        }
    }

    /// Height of a node one level up.
    pub fn parent(self) -> Self {
        Height(self.0 + 1)
    }

    pub fn is_leaf(self) -> bool {
        self.0 == 0
    }

    /// Distance from a node's center to each of its children's centers.
    ///
    /// Descending into a quadrant re-centers the coordinate by this amount.
    /// The height is clamped to [MAX_HEIGHT] first and the shift floored at
    /// zero so that the computation is defined for every height that can
    /// occur, including leaves and the transient above-cap heights.
    pub fn seek_offset(self) -> i64 {
        let clamped = self.min(MAX_HEIGHT).0;
        let shift_by = clamped.saturating_sub(2);
        1i64 << shift_by
    }

    /// Inclusive coordinate bounds `(min, max)` of a node at this height
    /// centered on the origin.
    ///
    /// At the height cap the node covers the whole signed 64-bit plane, and
    /// `1 << (height - 1)` would overflow, so the bounds are pinned to the
    /// integer extremes.
    pub fn coverage(self) -> (i64, i64) {
        if self >= MAX_HEIGHT {
            (i64::MIN, i64::MAX)
        } else {
            let point = if self.0 == 0 { 0 } else { 1i64 << (self.0 - 1) };
            (-point, point - 1)
        }
    }

    pub fn as_raw_int(self) -> UnderlyingInt {
        self.0
    }

    pub fn as_u32(self) -> u32 {
        self.0 as u32
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// -------------------------------------------------------------------------------------------------
// Unit tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_offset_is_one_for_small_heights() {
        assert_eq!(Height::new(0).seek_offset(), 1);
        assert_eq!(Height::new(1).seek_offset(), 1);
        assert_eq!(Height::new(2).seek_offset(), 1);
    }

    #[test]
    fn seek_offset_doubles_per_height() {
        assert_eq!(Height::new(3).seek_offset(), 2);
        assert_eq!(Height::new(4).seek_offset(), 4);
        assert_eq!(Height::new(10).seek_offset(), 1 << 8);
    }

    #[test]
    fn seek_offset_clamps_at_the_cap() {
        assert_eq!(MAX_HEIGHT.seek_offset(), 1 << 62);
        // Transient above-cap heights must not shift past the i64 range.
        assert_eq!(Height::new(66).seek_offset(), 1 << 62);
    }

    #[test]
    fn coverage_of_small_heights() {
        assert_eq!(Height::new(1).coverage(), (-1, 0));
        assert_eq!(Height::new(2).coverage(), (-2, 1));
        assert_eq!(Height::new(5).coverage(), (-16, 15));
    }

    #[test]
    fn coverage_at_the_cap_is_the_whole_plane() {
        assert_eq!(MAX_HEIGHT.coverage(), (i64::MIN, i64::MAX));
        assert_eq!(Height::new(65).coverage(), (i64::MIN, i64::MAX));
    }

    #[test]
    fn child_and_parent_are_inverses() {
        let height = Height::new(7);
        assert_eq!(height.parent().child(), height);
    }

    #[test]
    #[should_panic]
    fn child_of_leaf_height_panics() {
        Height::new(0).child();
    }
}
