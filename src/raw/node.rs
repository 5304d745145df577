use super::node_id::NodeId;

/// Red-black node color. The sentinel is always black.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// A red-black tree node holding one key/value entry.
///
/// `entry` is `None` only for the sentinel node. Child links always hold a real
/// id: an absent child stores the sentinel's id, never a null. The parent link
/// is `None` for the root (and for a detached sentinel), mirroring the
/// null-parent / sentinel-child split of the classic formulation.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) entry: Option<(K, V)>,
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

impl<K, V> Node<K, V> {
    /// Creates the shared sentinel. The tree points both child links back at
    /// the sentinel's own id immediately after allocating it; they are never
    /// followed in between.
    pub(crate) fn sentinel() -> Self {
        Self {
            entry: None,
            color: Color::Black,
            parent: None,
            left: NodeId::from_index(0),
            right: NodeId::from_index(0),
        }
    }

    /// Creates a freshly inserted node: red, both children at the sentinel.
    pub(crate) fn new(key: K, value: V, nil: NodeId) -> Self {
        Self {
            entry: Some((key, value)),
            color: Color::Red,
            parent: None,
            left: nil,
            right: nil,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.entry.as_ref().expect("`Node::key()` - the sentinel has no entry!").0
    }

    #[inline]
    pub(crate) fn value(&self) -> &V {
        &self.entry.as_ref().expect("`Node::value()` - the sentinel has no entry!").1
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.entry.as_mut().expect("`Node::value_mut()` - the sentinel has no entry!").1
    }

    /// Takes the entry out of the node, used when splicing it out of the tree.
    pub(crate) fn into_entry(self) -> (K, V) {
        self.entry.expect("`Node::into_entry()` - the sentinel has no entry!")
    }
}
