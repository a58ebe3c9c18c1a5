#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Expand from the start cell even when it is an obstacle. When false,
    /// such a search fails with `Error::StartObstacle`.
    pub allow_obstacle_start: bool,
    /// Capture a trace frame per expansion. Expansions are still counted
    /// in the metadata when this is off.
    pub record_trace: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            allow_obstacle_start: true,
            record_trace: true,
        }
    }
}
