//! Traits for the rendering collaborators.

use std::path::Path;

use super::GeneratorError;

/// Encode an arbitrary payload string into an embeddable image reference.
pub trait CodeEncoder {
    fn encode(&self, payload: &str) -> Result<String, GeneratorError>;
}

/// Render combined markup plus an auxiliary stylesheet into PDF bytes.
///
/// Relative asset references in the markup resolve against `asset_base`.
pub trait DocumentRenderer {
    fn render(
        &self,
        markup: &str,
        stylesheet: &str,
        asset_base: &Path,
    ) -> Result<Vec<u8>, GeneratorError>;
}
