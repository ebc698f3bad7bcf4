use crate::error::Corruption;

use super::{Aggregate, Body, Link, Tree};

impl<T, A: Aggregate<T>> Tree<T, A> {
    /// Walk the tree level by level and re-derive every structural rule
    /// the mutations are supposed to preserve. Normal operations on a
    /// healthy tree can never make this fail.
    pub(crate) fn check(&self) -> Result<(), Corruption> {
        unsafe {
            let root = &*self.root.as_ptr();
            if root.parent.is_some() {
                return Err(Corruption::RootAttached);
            }
            if root.prev.is_some() || root.next.is_some() {
                return Err(Corruption::RootChained);
            }

            let mut level = vec![self.root];
            let mut items = 0;
            loop {
                self.check_chain(&level)?;

                let mut next_level = Vec::new();
                let mut leaves = 0;
                for &link in &level {
                    self.check_widths(link)?;
                    match &(*link.as_ptr()).body {
                        Body::Leaf(slots) => {
                            leaves += 1;
                            items += slots.used();
                            if A::of_items(slots.as_slice()) != (*link.as_ptr()).agg {
                                return Err(Corruption::StaleAggregate);
                            }
                        }
                        Body::Branch(slots) => {
                            for &child in slots.as_slice() {
                                if (*child.as_ptr()).parent != Some(link) {
                                    return Err(Corruption::DisownedChild);
                                }
                            }
                            if A::of_children(slots.as_slice()) != (*link.as_ptr()).agg {
                                return Err(Corruption::StaleAggregate);
                            }
                            next_level.extend_from_slice(slots.as_slice());
                        }
                    }
                }

                if leaves > 0 {
                    if leaves < level.len() {
                        return Err(Corruption::UnevenDepth);
                    }
                    if level[0] != self.first {
                        return Err(Corruption::LostFirstLeaf);
                    }
                    if items != self.len {
                        return Err(Corruption::LengthDrift);
                    }
                    return Ok(());
                }
                level = next_level;
            }
        }
    }

    unsafe fn check_chain(&self, level: &[Link<T, A>]) -> Result<(), Corruption> {
        if (*level[0].as_ptr()).prev.is_some() {
            return Err(Corruption::BrokenChain);
        }
        if (*level[level.len() - 1].as_ptr()).next.is_some() {
            return Err(Corruption::BrokenChain);
        }
        for pair in level.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if (*a.as_ptr()).next != Some(b) || (*b.as_ptr()).prev != Some(a) {
                return Err(Corruption::BrokenChain);
            }
            // Adjacent siblings must not fit in a single node, or they
            // would have been merged.
            if (*a.as_ptr()).width() + (*b.as_ptr()).width() <= self.order {
                return Err(Corruption::MergeableSiblings);
            }
        }
        Ok(())
    }

    unsafe fn check_widths(&self, link: Link<T, A>) -> Result<(), Corruption> {
        let node = &*link.as_ptr();
        let used = node.used();
        let width = node.width();
        if width < 1 || width > self.order {
            return Err(Corruption::WidthOutOfRange);
        }
        if self.order.is_power_of_two() && !width.is_power_of_two() {
            return Err(Corruption::WidthOutOfRange);
        }
        if used > width {
            return Err(Corruption::Overflowed);
        }
        if used > 0 && used * 2 <= width {
            return Err(Corruption::SlackArray);
        }
        if link != self.root && used * 2 < self.order {
            return Err(Corruption::Underfull);
        }
        Ok(())
    }
}
