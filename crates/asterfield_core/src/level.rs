//! One depth tier of the fractal tree.
//!
//! A level is a flat, fixed-size pair of arrays - parts and their transform
//! matrices - kept index-aligned for the lifetime of the field. Children of
//! parent `p` occupy the contiguous slice `[p * child_count, (p + 1) *
//! child_count)` of the next level, so the parent of part `i` is simply
//! `i / child_count`.

use crate::math::Mat4;
use crate::part::Part;

/// Parts and index-aligned transform matrices for one depth tier.
pub struct Level {
    parts: Vec<Part>,
    matrices: Vec<Mat4>,
}

impl Level {
    /// Wraps a part array, allocating the matching matrix array.
    #[must_use]
    pub fn new(parts: Vec<Part>) -> Self {
        let matrices = vec![Mat4::IDENTITY; parts.len()];
        Self { parts, matrices }
    }

    /// Number of parts (== number of matrices) in this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True if the level holds no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Read-only view of the parts.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Read-only view of the matrices, index-aligned with `parts()`.
    #[must_use]
    pub fn matrices(&self) -> &[Mat4] {
        &self.matrices
    }

    /// Mutable part and matrix slots for the level's own update pass.
    pub(crate) fn slots_mut(&mut self) -> (&mut [Part], &mut [Mat4]) {
        (&mut self.parts, &mut self.matrices)
    }
}

/// Part count of level `depth` for a tree with the given fan-out.
#[must_use]
pub fn level_len(depth: usize, child_count: usize) -> usize {
    child_count.pow(depth as u32)
}

/// Index of the parent (in the preceding level) of part `index`.
#[must_use]
pub const fn parent_index(index: usize, child_count: usize) -> usize {
    index / child_count
}

/// Child index range (in the following level) owned by parent `index`.
#[must_use]
pub const fn child_range(index: usize, child_count: usize) -> std::ops::Range<usize> {
    index * child_count..(index + 1) * child_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_arrays_stay_aligned() {
        let level = Level::new(vec![Part::root(); 8]);
        assert_eq!(level.len(), 8);
        assert_eq!(level.parts().len(), level.matrices().len());
    }

    #[test]
    fn test_sizing() {
        assert_eq!(level_len(0, 150), 1);
        assert_eq!(level_len(1, 150), 150);
        assert_eq!(level_len(2, 4), 16);
        assert_eq!(level_len(1, 1), 1);
    }

    #[test]
    fn test_parent_child_are_inverse() {
        let child_count = 4;
        for parent in 0..16 {
            for child in child_range(parent, child_count) {
                assert_eq!(parent_index(child, child_count), parent);
            }
        }
    }
}
