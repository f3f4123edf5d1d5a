use crate::composer::DEFAULT_HASHTAGS;

/// Network-independent parts of a status update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    /// Hashtag segment appended to every status.
    pub hashtags: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            hashtags: DEFAULT_HASHTAGS.to_string(),
        }
    }
}
