//! Reader configuration.

use crate::reader::XmlReader;

/// Default maximum element nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings that control how an [`XmlReader`] treats its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Maximum element nesting depth accepted before the read fails.
    pub max_depth: usize,
    /// Drop malformed scalar values with a warning instead of failing.
    pub lenient_values: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            lenient_values: false,
        }
    }
}

/// Builder for configuring and creating an [`XmlReader`].
#[derive(Debug, Clone, Default)]
pub struct XmlReaderBuilder {
    config: ReaderConfig,
}

impl XmlReaderBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum element nesting depth.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Enables or disables lenient scalar parsing.
    #[must_use]
    pub fn lenient_values(mut self, lenient: bool) -> Self {
        self.config.lenient_values = lenient;
        self
    }

    /// Returns the configuration assembled so far.
    #[must_use]
    pub const fn config(&self) -> ReaderConfig {
        self.config
    }

    /// Builds a reader over the given document.
    #[must_use]
    pub fn build(self, xml: &str) -> XmlReader<'_> {
        XmlReader::with_config(xml, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReaderConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!config.lenient_values);
    }

    #[test]
    fn test_builder_settings() {
        let builder = XmlReaderBuilder::new().max_depth(8).lenient_values(true);
        let config = builder.config();
        assert_eq!(config.max_depth, 8);
        assert!(config.lenient_values);

        let reader = builder.build("<vm/>");
        assert_eq!(reader.config().max_depth, 8);
    }
}
