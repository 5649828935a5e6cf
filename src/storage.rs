//! Hash codec trait and implementations
//!
//! A hash is `Option<Vec<String>>`: the ordered identifiers of a non-empty
//! value, or `None` for the absence sentinel. Codecs turn it into text for
//! hosts that persist hashes as documents. The absence sentinel is written as
//! the format's null.

use crate::error::{Error, Result};

/// Hash as handed to and from the host
pub type SelectionHash = Option<Vec<String>>;

/// Trait for hash codec implementations
///
/// This allows swapping JSON for YAML or other formats.
pub trait HashCodec: Clone + Send + Sync {
    /// Format name (e.g., "json", "yaml")
    fn name(&self) -> &str;

    /// Encode a hash to text
    fn encode(&self, hash: &SelectionHash) -> Result<String>;

    /// Decode a hash from text
    fn decode(&self, content: &str) -> Result<SelectionHash>;
}

// =============================================================================
// JSON Codec
// =============================================================================

/// JSON hash codec (default)
#[derive(Clone, Default)]
pub struct JsonCodec {
    /// Pretty print JSON output
    pretty: bool,
}

impl JsonCodec {
    /// Create a compact JSON codec
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a JSON codec with pretty printing enabled
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl HashCodec for JsonCodec {
    fn name(&self) -> &str {
        "json"
    }

    fn encode(&self, hash: &SelectionHash) -> Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(hash).map_err(Error::from)
        } else {
            serde_json::to_string(hash).map_err(Error::from)
        }
    }

    fn decode(&self, content: &str) -> Result<SelectionHash> {
        serde_json::from_str(content).map_err(|e| Error::Parse(format!("JSON decode error: {e}")))
    }
}

// =============================================================================
// YAML Codec
// =============================================================================

/// YAML hash codec
#[cfg(feature = "yaml")]
#[derive(Clone, Default)]
pub struct YamlCodec;

#[cfg(feature = "yaml")]
impl YamlCodec {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "yaml")]
impl HashCodec for YamlCodec {
    fn name(&self) -> &str {
        "yaml"
    }

    fn encode(&self, hash: &SelectionHash) -> Result<String> {
        serde_yaml::to_string(hash).map_err(|e| Error::Parse(format!("YAML encode error: {e}")))
    }

    fn decode(&self, content: &str) -> Result<SelectionHash> {
        serde_yaml::from_str(content).map_err(|e| Error::Parse(format!("YAML decode error: {e}")))
    }
}

// =============================================================================
// Tests
// =============================================================================
