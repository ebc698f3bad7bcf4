use super::node::Link;

/// Per-node summary kept alongside the slots. This is the one capability
/// that separates the positional variant (subtree sizes) from the keyed
/// ones (leftmost keys); everything structural is shared.
pub(crate) trait Aggregate<T>: Clone + Default + PartialEq + Sized {
    /// Summary of a leaf's items.
    fn of_items(items: &[T]) -> Self;

    /// Summary of a branch's children, read from their stored summaries.
    ///
    /// # Safety
    /// Every link must point to a live node.
    unsafe fn of_children(children: &[Link<T, Self>]) -> Self;
}

/// Subtree item count; positional addressing descends through it.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub(crate) struct Size(pub(crate) usize);

impl<T> Aggregate<T> for Size {
    fn of_items(items: &[T]) -> Self {
        Size(items.len())
    }

    unsafe fn of_children(children: &[Link<T, Self>]) -> Self {
        let mut total = 0;
        for child in children {
            total += (*child.as_ptr()).agg.0;
        }
        Size(total)
    }
}

/// Key of the leftmost item below a node; keyed lookup descends through
/// it. `None` only ever describes an empty root leaf.
#[derive(Clone, PartialEq, Debug)]
pub(crate) struct FirstKey<K>(pub(crate) Option<K>);

impl<K> Default for FirstKey<K> {
    fn default() -> Self {
        FirstKey(None)
    }
}

/// Leaf payload of the keyed variants.
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K: Clone + PartialEq, V> Aggregate<Entry<K, V>> for FirstKey<K> {
    fn of_items(items: &[Entry<K, V>]) -> Self {
        FirstKey(items.first().map(|entry| entry.key.clone()))
    }

    unsafe fn of_children(children: &[Link<Entry<K, V>, Self>]) -> Self {
        match children.first() {
            Some(child) => (*child.as_ptr()).agg.clone(),
            None => FirstKey(None),
        }
    }
}
