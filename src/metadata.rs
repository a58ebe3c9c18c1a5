#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchMetadata {
    pub num_nodes_visited: usize,
    /// Number of cells in the path, start and goal included.
    pub length: usize,
}
