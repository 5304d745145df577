use core::borrow::Borrow;

use alloc::vec::Vec;

use super::arena::Arena;
use super::node::{Color, Node};
use super::node_id::NodeId;

/// The red-black tree engine backing `Set`, `Multiset`, and `Map`.
///
/// Nodes live in an [`Arena`] and reference each other by [`NodeId`]. A single
/// always-black sentinel node stands in for every absent child and for the
/// one-past-end position, so traversal and rebalancing never test for null
/// children. The root's parent link is `None`.
///
/// Keys are compared with `Ord`; an inserted key that is equal to an existing
/// one descends right, so duplicates land after their equals in the in-order
/// sequence. Uniqueness is the caller's policy: `Set` and `Map` check `find`
/// before inserting, `Multiset` does not.
#[derive(Clone)]
pub(crate) struct RbTree<K, V> {
    nodes: Arena<Node<K, V>>,
    root: NodeId,
    nil: NodeId,
    len: usize,
}

impl<K, V> RbTree<K, V> {
    pub(crate) fn new() -> Self {
        let mut nodes = Arena::new();
        let nil = nodes.alloc(Node::sentinel());
        nodes.get_mut(nil).left = nil;
        nodes.get_mut(nil).right = nil;
        Self { nodes, root: nil, nil, len: 0 }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Theoretical ceiling on the element count, limited by the id width and
    /// by how many nodes fit in the address space. One slot is the sentinel's.
    pub(crate) const fn max_size() -> usize {
        let by_memory = usize::MAX / size_of::<Node<K, V>>();
        let by_id = NodeId::MAX - 1;
        if by_memory < by_id { by_memory } else { by_id }
    }

    /// Drops every element. The tree keeps a (fresh) sentinel as its root.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        let nil = self.nodes.alloc(Node::sentinel());
        self.nodes.get_mut(nil).left = nil;
        self.nodes.get_mut(nil).right = nil;
        self.root = nil;
        self.nil = nil;
        self.len = 0;
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node<K, V> {
        self.nodes.get(id)
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.nodes.get_mut(id)
    }

    #[inline]
    pub(crate) fn key(&self, id: NodeId) -> &K {
        self.node(id).key()
    }

    #[inline]
    pub(crate) fn value(&self, id: NodeId) -> &V {
        self.node(id).value()
    }

    #[inline]
    pub(crate) fn value_mut(&mut self, id: NodeId) -> &mut V {
        self.node_mut(id).value_mut()
    }

    /// Leftmost node of the subtree rooted at `id` (`id` itself if it has no
    /// left child). Must not be called with the sentinel.
    fn min(&self, mut id: NodeId) -> NodeId {
        while self.node(id).left != self.nil {
            id = self.node(id).left;
        }
        id
    }

    /// Rightmost node of the subtree rooted at `id`.
    fn max(&self, mut id: NodeId) -> NodeId {
        while self.node(id).right != self.nil {
            id = self.node(id).right;
        }
        id
    }

    /// First node in-order, `None` when empty.
    pub(crate) fn first(&self) -> Option<NodeId> {
        (self.root != self.nil).then(|| self.min(self.root))
    }

    /// Last node in-order, `None` when empty.
    pub(crate) fn last(&self) -> Option<NodeId> {
        (self.root != self.nil).then(|| self.max(self.root))
    }

    /// In-order successor: leftmost of the right subtree, or the nearest
    /// ancestor of which `id` lies in the left subtree.
    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        let right = self.node(id).right;
        if right != self.nil {
            return Some(self.min(right));
        }
        let mut current = id;
        while let Some(parent) = self.node(current).parent {
            if self.node(parent).left == current {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// In-order predecessor, the mirror of [`Self::successor`].
    pub(crate) fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        let left = self.node(id).left;
        if left != self.nil {
            return Some(self.max(left));
        }
        let mut current = id;
        while let Some(parent) = self.node(current).parent {
            if self.node(parent).right == current {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// All node ids in ascending key order.
    pub(crate) fn in_order_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.len);
        let mut current = self.first();
        while let Some(id) = current {
            ids.push(id);
            current = self.successor(id);
        }
        ids
    }

    /// Moves every entry out in ascending key order, leaving the tree empty.
    pub(crate) fn drain_in_order(&mut self) -> Vec<(K, V)> {
        let ids = self.in_order_ids();
        let mut entries = Vec::with_capacity(ids.len());
        for id in ids {
            entries.push(self.nodes.take(id).into_entry());
        }
        self.clear();
        entries
    }

    pub(crate) fn iter(&self) -> RawIter<'_, K, V> {
        RawIter {
            tree: self,
            front: self.first(),
            back: self.last(),
        }
    }

    /// Iterates from `front` (inclusive) through `back` (inclusive). Both must
    /// be `Some` or both `None`, with `front` not after `back` in key order.
    pub(crate) fn iter_between(&self, front: Option<NodeId>, back: Option<NodeId>) -> RawIter<'_, K, V> {
        debug_assert_eq!(front.is_some(), back.is_some());
        RawIter { tree: self, front, back }
    }
}

impl<K: Ord, V> RbTree<K, V> {
    /// First node whose key is not less than `key`, in ascending order.
    pub(crate) fn lower_bound<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        let mut best = None;
        while current != self.nil {
            if self.node(current).key().borrow() < key {
                current = self.node(current).right;
            } else {
                best = Some(current);
                current = self.node(current).left;
            }
        }
        best
    }

    /// First node whose key is strictly greater than `key`.
    pub(crate) fn upper_bound<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        let mut best = None;
        while current != self.nil {
            if key < self.node(current).key().borrow() {
                best = Some(current);
                current = self.node(current).left;
            } else {
                current = self.node(current).right;
            }
        }
        best
    }

    /// Finds the *first* node equal to `key` in ascending order, so that with
    /// duplicates present the multiset sees its oldest equal element first.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let id = self.lower_bound(key)?;
        (self.node(id).key().borrow() == key).then_some(id)
    }

    /// Inserts unconditionally. Equal keys descend right, so a duplicate lands
    /// immediately after its equals in the in-order sequence.
    pub(crate) fn insert(&mut self, key: K, value: V) -> NodeId {
        let id = self.nodes.alloc(Node::new(key, value, self.nil));

        let mut parent = None;
        let mut current = self.root;
        while current != self.nil {
            parent = Some(current);
            if self.node(id).key() < self.node(current).key() {
                current = self.node(current).left;
            } else {
                current = self.node(current).right;
            }
        }

        self.node_mut(id).parent = parent;
        match parent {
            None => self.root = id,
            Some(p) => {
                if self.node(id).key() < self.node(p).key() {
                    self.node_mut(p).left = id;
                } else {
                    self.node_mut(p).right = id;
                }
            }
        }
        self.len += 1;

        if parent.is_some() {
            self.fix_insert(id);
        } else {
            self.node_mut(id).color = Color::Black;
        }
        id
    }

    /// Removes the node `z`, which must be a member of this tree, and returns
    /// its entry. The standard three-case deletion: splice in the sole child,
    /// or replace `z` by the minimum of its right subtree; repair runs only if
    /// the spliced-out node was black.
    pub(crate) fn remove(&mut self, z: NodeId) -> (K, V) {
        let mut spliced_color = self.node(z).color;
        let x;

        if self.node(z).left == self.nil {
            x = self.node(z).right;
            self.transplant(z, x);
        } else if self.node(z).right == self.nil {
            x = self.node(z).left;
            self.transplant(z, x);
        } else {
            let y = self.min(self.node(z).right);
            spliced_color = self.node(y).color;
            x = self.node(y).right;
            if self.node(y).parent == Some(z) {
                // x may be the sentinel; fix_delete still climbs from it.
                self.node_mut(x).parent = Some(y);
            } else {
                self.transplant(y, x);
                let z_right = self.node(z).right;
                self.node_mut(y).right = z_right;
                self.node_mut(z_right).parent = Some(y);
            }
            self.transplant(z, y);
            let z_left = self.node(z).left;
            self.node_mut(y).left = z_left;
            self.node_mut(z_left).parent = Some(y);
            let z_color = self.node(z).color;
            self.node_mut(y).color = z_color;
        }

        let entry = self.nodes.take(z).into_entry();
        self.len -= 1;

        if spliced_color == Color::Black {
            self.fix_delete(x);
        }
        entry
    }

    /// Replaces the subtree rooted at `u` with the one rooted at `v`. Writes
    /// `v`'s parent link even when `v` is the sentinel; `fix_delete` relies on
    /// that transient link to climb.
    fn transplant(&mut self, u: NodeId, v: NodeId) {
        let parent = self.node(u).parent;
        match parent {
            None => self.root = v,
            Some(p) => {
                if self.node(p).left == u {
                    self.node_mut(p).left = v;
                } else {
                    self.node_mut(p).right = v;
                }
            }
        }
        self.node_mut(v).parent = parent;
    }

    fn rotate_left(&mut self, x: NodeId) {
        let y = self.node(x).right;
        let y_left = self.node(y).left;

        self.node_mut(x).right = y_left;
        if y_left != self.nil {
            self.node_mut(y_left).parent = Some(x);
        }

        let x_parent = self.node(x).parent;
        self.node_mut(y).parent = x_parent;
        match x_parent {
            None => self.root = y,
            Some(p) => {
                if self.node(p).left == x {
                    self.node_mut(p).left = y;
                } else {
                    self.node_mut(p).right = y;
                }
            }
        }

        self.node_mut(y).left = x;
        self.node_mut(x).parent = Some(y);
    }

    fn rotate_right(&mut self, x: NodeId) {
        let y = self.node(x).left;
        let y_right = self.node(y).right;

        self.node_mut(x).left = y_right;
        if y_right != self.nil {
            self.node_mut(y_right).parent = Some(x);
        }

        let x_parent = self.node(x).parent;
        self.node_mut(y).parent = x_parent;
        match x_parent {
            None => self.root = y,
            Some(p) => {
                if self.node(p).left == x {
                    self.node_mut(p).left = y;
                } else {
                    self.node_mut(p).right = y;
                }
            }
        }

        self.node_mut(y).right = x;
        self.node_mut(x).parent = Some(y);
    }

    /// Restores the red-black invariants after inserting the red node `k`.
    /// Uncle red: recolor and climb. Uncle black: one or two rotations,
    /// distinguishing the four parent/child side configurations.
    fn fix_insert(&mut self, mut k: NodeId) {
        loop {
            let Some(parent) = self.node(k).parent else { break };
            if self.node(parent).color != Color::Red {
                break;
            }
            // A red node is never the root, so the grandparent exists.
            let grandparent =
                self.node(parent).parent.expect("`RbTree::fix_insert()` - a red node has no parent!");

            if self.node(grandparent).left == parent {
                let uncle = self.node(grandparent).right;
                if self.node(uncle).color == Color::Red {
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(uncle).color = Color::Black;
                    self.node_mut(grandparent).color = Color::Red;
                    k = grandparent;
                } else {
                    if self.node(parent).right == k {
                        k = parent;
                        self.rotate_left(k);
                    }
                    let parent = self.node(k).parent.expect("`RbTree::fix_insert()` - rotation detached `k`!");
                    let grandparent =
                        self.node(parent).parent.expect("`RbTree::fix_insert()` - rotation detached the parent!");
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(grandparent).color = Color::Red;
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.node(grandparent).left;
                if self.node(uncle).color == Color::Red {
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(uncle).color = Color::Black;
                    self.node_mut(grandparent).color = Color::Red;
                    k = grandparent;
                } else {
                    if self.node(parent).left == k {
                        k = parent;
                        self.rotate_right(k);
                    }
                    let parent = self.node(k).parent.expect("`RbTree::fix_insert()` - rotation detached `k`!");
                    let grandparent =
                        self.node(parent).parent.expect("`RbTree::fix_insert()` - rotation detached the parent!");
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(grandparent).color = Color::Red;
                    self.rotate_left(grandparent);
                }
            }

            if k == self.root {
                break;
            }
        }
        let root = self.root;
        self.node_mut(root).color = Color::Black;
    }

    /// Restores the black-height invariant after splicing out a black node.
    /// `x` carries the "extra black"; the sibling cases push it up or resolve
    /// it with a terminal rotation, mirrored for both sides.
    fn fix_delete(&mut self, mut x: NodeId) {
        while x != self.root && self.node(x).color == Color::Black {
            let parent = self.node(x).parent.expect("`RbTree::fix_delete()` - non-root `x` has no parent!");
            if self.node(parent).left == x {
                let mut w = self.node(parent).right;
                if self.node(w).color == Color::Red {
                    self.node_mut(w).color = Color::Black;
                    self.node_mut(parent).color = Color::Red;
                    self.rotate_left(parent);
                    w = self.node(parent).right;
                }
                let w_left = self.node(w).left;
                let w_right = self.node(w).right;
                if self.node(w_left).color == Color::Black && self.node(w_right).color == Color::Black {
                    self.node_mut(w).color = Color::Red;
                    x = parent;
                } else {
                    if self.node(w_right).color == Color::Black {
                        self.node_mut(w_left).color = Color::Black;
                        self.node_mut(w).color = Color::Red;
                        self.rotate_right(w);
                        w = self.node(parent).right;
                    }
                    let parent_color = self.node(parent).color;
                    self.node_mut(w).color = parent_color;
                    self.node_mut(parent).color = Color::Black;
                    let w_right = self.node(w).right;
                    self.node_mut(w_right).color = Color::Black;
                    self.rotate_left(parent);
                    x = self.root;
                }
            } else {
                let mut w = self.node(parent).left;
                if self.node(w).color == Color::Red {
                    self.node_mut(w).color = Color::Black;
                    self.node_mut(parent).color = Color::Red;
                    self.rotate_right(parent);
                    w = self.node(parent).left;
                }
                let w_left = self.node(w).left;
                let w_right = self.node(w).right;
                if self.node(w_left).color == Color::Black && self.node(w_right).color == Color::Black {
                    self.node_mut(w).color = Color::Red;
                    x = parent;
                } else {
                    if self.node(w_left).color == Color::Black {
                        self.node_mut(w_right).color = Color::Black;
                        self.node_mut(w).color = Color::Red;
                        self.rotate_left(w);
                        w = self.node(parent).left;
                    }
                    let parent_color = self.node(parent).color;
                    self.node_mut(w).color = parent_color;
                    self.node_mut(parent).color = Color::Black;
                    let w_left = self.node(w).left;
                    self.node_mut(w_left).color = Color::Black;
                    self.rotate_right(parent);
                    x = self.root;
                }
            }
        }
        self.node_mut(x).color = Color::Black;
    }
}

impl<K, V> Default for RbTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// In-order cursor pair over a tree, yielding shared key/value references from
/// both ends until the cursors meet.
pub(crate) struct RawIter<'a, K, V> {
    tree: &'a RbTree<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
}

impl<'a, K, V> Iterator for RawIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.front?;
        if self.back == Some(current) {
            self.front = None;
            self.back = None;
        } else {
            self.front = self.tree.successor(current);
        }
        let node = self.tree.node(current);
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.front.is_none() {
            (0, Some(0))
        } else {
            (1, Some(self.tree.len()))
        }
    }
}

impl<K, V> DoubleEndedIterator for RawIter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let current = self.back?;
        if self.front == Some(current) {
            self.front = None;
            self.back = None;
        } else {
            self.back = self.tree.predecessor(current);
        }
        let node = self.tree.node(current);
        Some((node.key(), node.value()))
    }
}

#[cfg(test)]
impl<K: Ord, V> RbTree<K, V> {
    /// Asserts the five red-black invariants plus parent-link consistency and
    /// the cached length. Used by the property tests after every mutation.
    pub(crate) fn check_invariants(&self) {
        assert_eq!(self.node(self.nil).color, Color::Black, "sentinel must be black");
        if self.root != self.nil {
            assert_eq!(self.node(self.root).color, Color::Black, "root must be black");
            assert!(self.node(self.root).parent.is_none(), "root must have no parent");
        }

        let mut count = 0;
        self.check_subtree(self.root, &mut count);
        assert_eq!(count, self.len, "cached length must match the node count");

        // In-order traversal must be non-decreasing.
        let mut previous: Option<&K> = None;
        let mut current = self.first();
        while let Some(id) = current {
            if let Some(prev) = previous {
                assert!(prev <= self.node(id).key(), "in-order sequence must be ascending");
            }
            previous = Some(self.node(id).key());
            current = self.successor(id);
        }
    }

    /// Returns the black-height of the subtree at `id`, asserting equal black
    /// heights on both sides and no red-red parent/child pairs along the way.
    fn check_subtree(&self, id: NodeId, count: &mut usize) -> usize {
        if id == self.nil {
            return 1;
        }
        *count += 1;

        let node = self.node(id);
        if node.left != self.nil {
            assert_eq!(self.node(node.left).parent, Some(id), "left child must point back at its parent");
            assert!(self.node(node.left).key() <= node.key(), "left subtree must not exceed the node");
        }
        if node.right != self.nil {
            assert_eq!(self.node(node.right).parent, Some(id), "right child must point back at its parent");
            assert!(node.key() <= self.node(node.right).key(), "right subtree must not precede the node");
        }
        if node.color == Color::Red {
            assert_eq!(self.node(node.left).color, Color::Black, "a red node must have black children");
            assert_eq!(self.node(node.right).color, Color::Black, "a red node must have black children");
        }

        let left_height = self.check_subtree(node.left, count);
        let right_height = self.check_subtree(node.right, count);
        assert_eq!(left_height, right_height, "black-height must be uniform");

        left_height + usize::from(node.color == Color::Black)
    }
}
