use tracing::trace;

use super::{Aggregate, Link, Node, Tree};

impl<T, A: Aggregate<T>> Tree<T, A> {
    /// Remove the slot at `index` of `leaf`, rebalancing upward.
    ///
    /// # Safety
    /// `leaf` must be a leaf of this tree and `index < leaf.used()`.
    pub(crate) unsafe fn remove_at(&mut self, leaf: Link<T, A>, index: usize) -> T {
        self.len -= 1;
        let removed = Node::basic_remove(leaf, index).unwrap();
        self.rebalance_remove(leaf);
        removed
    }

    unsafe fn rebalance_remove(&mut self, mut node: Link<T, A>) {
        loop {
            if (*node.as_ptr()).parent.is_none() || (*node.as_ptr()).used() * 2 > self.order {
                return;
            }

            let Some((left, right)) = Node::pair_with_smallest(node) else {
                self.demote_root(node);
                return;
            };

            let l = (*left.as_ptr()).used();
            let r = (*right.as_ptr()).used();
            let sum = l + r;
            if sum > self.order {
                // The pair holds more than one node's worth, so borrow
                // from the fuller side. An even spread can come out as a
                // zero shift right at the fill boundary; the pair is then
                // already as balanced as it gets.
                let half = sum >> 1;
                let shift = half - (*node.as_ptr()).used();
                if shift == 0 {
                    return;
                }
                trace!(sum, shift, "redistributing around a removal");
                if node == left {
                    Node::take_next(left, shift, self.order);
                } else {
                    Node::give_next(left, shift, self.order);
                }
                return;
            }

            // The pair fits in one node: fold the right into the left and
            // carry the removal of the emptied right up a level.
            trace!(sum, "merging siblings");
            let parent = (*right.as_ptr()).parent.unwrap();
            let index = Node::index_in_parent(right);
            Node::donate(right, left, 0, r, l, self.order);
            Node::basic_remove(parent, index);
            node = parent;
        }
    }

    /// `node` is the only node left on its level, so its parent can only
    /// be the root, worn down to this single child. Make `node` the root.
    unsafe fn demote_root(&mut self, node: Link<T, A>) {
        let parent = (*node.as_ptr()).parent.take().unwrap();
        debug_assert!((*parent.as_ptr()).parent.is_none());
        debug_assert_eq!((*parent.as_ptr()).used(), 1);
        drop(Box::from_raw(parent.as_ptr()));
        trace!("demoted the root");
        self.root = node;
    }
}
