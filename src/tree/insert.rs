use tracing::trace;

use super::node::Pending;
use super::{Aggregate, Body, Link, Node, Slots, Tree};

impl<T, A: Aggregate<T>> Tree<T, A> {
    /// Insert `item` at `index` of `leaf`, rebalancing upward as needed.
    ///
    /// # Safety
    /// `leaf` must be a leaf of this tree and `index <= leaf.used()`.
    pub(crate) unsafe fn insert_at(&mut self, leaf: Link<T, A>, index: usize, item: T) {
        self.len += 1;
        self.rebalance_insert(leaf, index, Pending::Item(item));
    }

    unsafe fn rebalance_insert(
        &mut self,
        mut node: Link<T, A>,
        mut index: usize,
        mut value: Pending<T, A>,
    ) {
        loop {
            if (*node.as_ptr()).used() < self.order {
                Node::basic_insert(node, index, value, self.order);
                return;
            }

            // A front insert can spill into the left sibling while that
            // sibling still has room.
            if index == 0 {
                if let Some(prev) = (*node.as_ptr()).prev {
                    let at = (*prev.as_ptr()).used();
                    if at < self.order {
                        Node::basic_insert(prev, at, value, self.order);
                        return;
                    }
                }
            }

            // Spread the load across the smaller neighbor if the pair can
            // absorb the newcomer without a split.
            if let Some((left, right)) = Node::pair_with_smallest(node) {
                let l = (*left.as_ptr()).used();
                let sum = l + (*right.as_ptr()).used() + 1;
                if sum <= 2 * self.order {
                    let half = sum >> 1;
                    let at = if node == right { l + index } else { index };
                    let keep = if at < half { half - 1 } else { half };
                    trace!(sum, keep, "redistributing around an insert");
                    if keep > l {
                        Node::take_next(left, keep - l, self.order);
                    } else if keep < l {
                        Node::give_next(left, l - keep, self.order);
                    }
                    if at < half {
                        Node::basic_insert(left, at, value, self.order);
                    } else {
                        Node::basic_insert(right, at - keep, value, self.order);
                    }
                    return;
                }
            }

            // Split, place the pending value on the side it falls into,
            // and carry the new sibling up as the next thing to insert.
            // The side left without the newcomer keeps the larger half,
            // so it still makes minimum fill when the order is odd.
            let used = (*node.as_ptr()).used();
            let half = used / 2;
            let keep = if index <= half { half } else { used - half };
            let sibling = Node::split(node, keep, self.order);
            trace!(keep, "split a full node");
            if index <= half {
                Node::basic_insert(node, index, value, self.order);
            } else {
                Node::basic_insert(sibling, index - keep, value, self.order);
            }

            if (*node.as_ptr()).parent.is_none() {
                self.promote_root(node);
            }
            index = Node::index_in_parent(node) + 1;
            value = Pending::Child(sibling);
            node = (*node.as_ptr()).parent.unwrap();
        }
    }

    /// Wrap the old root in a fresh branch of width 2.
    unsafe fn promote_root(&mut self, old_root: Link<T, A>) {
        let mut slots = Slots::with_width(2);
        slots.insert(0, old_root, self.order);
        let new_root = Node::alloc(Body::Branch(slots));
        (*old_root.as_ptr()).parent = Some(new_root);
        Node::refresh_agg(new_root);
        trace!("promoted a new root");
        self.root = new_root;
    }
}
