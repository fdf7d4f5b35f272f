//! `PhysicalObject-Commons`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// URI of an image of the object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
}

impl PhysicalObject {
    /// Check that `image`, when set, is an absolute URI.
    pub fn validate(&self) -> Result<()> {
        if let Some(image) = &self.image {
            validate_image(image)?;
        }
        Ok(())
    }
}

/// Parse `image` as an absolute URI.
pub fn validate_image(image: &str) -> Result<Url> {
    Ok(Url::parse(image)?)
}
