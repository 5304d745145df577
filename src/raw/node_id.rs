use core::num::NonZero;

/// Width of the raw slot index. Tests shrink it to `u16` so the arena's
/// capacity assertion is reachable without allocating four billion nodes.
#[cfg(test)]
type RawId = u16;
#[cfg(not(test))]
type RawId = u32;

/// Index of a node slot inside an [`Arena`](super::arena::Arena).
///
/// Stored one past the slot index, so the zero niche is free and
/// `Option<NodeId>` costs no more than `NodeId`. Every parent and child link
/// in a tree or list node is an `Option<NodeId>`, so the niche keeps nodes at
/// four bytes per link.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct NodeId(NonZero<RawId>);

impl NodeId {
    /// Largest representable slot index. One short of `RawId::MAX` because
    /// the stored value is `index + 1`.
    pub(crate) const MAX: usize = (RawId::MAX - 1) as usize;

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`NodeId::from_index()` - `index` > `NodeId::MAX`!");
        // `index <= MAX` makes `index + 1` nonzero and in range for `RawId`.
        Self(NonZero::new((index + 1) as RawId).unwrap())
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
