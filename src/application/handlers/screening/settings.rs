//! Generation parameters shared by every completion the screening flow requests.

/// Sampling parameters sent with each completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionSettings {
    /// Varied but bounded phrasing.
    pub temperature: f32,
    /// Keeps replies short.
    pub max_tokens: u32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 150,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_favor_short_varied_replies() {
        let settings = CompletionSettings::default();
        assert_eq!(settings.temperature, 0.7);
        assert_eq!(settings.max_tokens, 150);
    }
}
