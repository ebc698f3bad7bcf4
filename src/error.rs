use thiserror::Error;

/// A structural rule the tree failed to uphold. Returned only by the
/// `verify` methods; no normal operation on a healthy tree can produce
/// one.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Corruption {
    #[error("root node still points at a parent")]
    RootAttached,

    #[error("root node has siblings")]
    RootChained,

    #[error("slot array width outside its legal range")]
    WidthOutOfRange,

    #[error("node uses more slots than its array holds")]
    Overflowed,

    #[error("slot array more than half empty")]
    SlackArray,

    #[error("non-root node below minimum fill")]
    Underfull,

    #[error("adjacent siblings would fit in a single node")]
    MergeableSiblings,

    #[error("sibling chain out of step with the tree")]
    BrokenChain,

    #[error("child does not point back at its parent")]
    DisownedChild,

    #[error("cached aggregate disagrees with the slots below it")]
    StaleAggregate,

    #[error("leaves sit at different depths")]
    UnevenDepth,

    #[error("first-leaf shortcut no longer reaches the leftmost leaf")]
    LostFirstLeaf,

    #[error("tracked length disagrees with the leaf slots")]
    LengthDrift,

    #[error("keys out of order across the leaf chain")]
    UnsortedKeys,
}
