/// How [`AvlTree::insert()`] treats a key equal to one already stored.
///
/// [`AvlTree::insert()`]: crate::AvlTree::insert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateKeys {
    /// Store every inserted key as its own node.
    ///
    /// Equal keys compare as "not less than" during the descent and are routed
    /// into the right subtree of the existing key.
    #[default]
    RouteRight,

    /// Keep the first inserted key and return its node handle for subsequent
    /// inserts of an equal key, without allocating.
    KeepFirst,
}

/// Construction options for an [`AvlTree`](crate::AvlTree).
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Number of node slots to reserve up front.
    pub initial_capacity: usize,

    /// Equal-key insertion policy.
    pub duplicates: DuplicateKeys,
}

impl Config {
    /// Sets the number of node slots reserved when the tree is created.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the equal-key insertion policy.
    #[must_use]
    pub fn with_duplicates(mut self, policy: DuplicateKeys) -> Self {
        self.duplicates = policy;
        self
    }
}
