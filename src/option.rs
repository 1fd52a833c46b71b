pub const DEFAULT_MAX_ATTEMPTS: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionOption {
    /// Upper bound on tree walks per call. Exceeding it means the mixer is
    /// not behaving as a uniform bit source. Zero is treated as one.
    pub max_attempts: u32,
}

impl PartitionOption {
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub(crate) fn attempt_bound(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

impl Default for PartitionOption {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
