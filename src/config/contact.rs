//! Contact link configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::recommendation::{ContactLinkBuilder, DEFAULT_WHATSAPP_BASE};

/// Where the "book a setup call" link points
#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    /// Base of the WhatsApp deep link, e.g. `https://wa.me/15550001111`
    #[serde(default = "default_whatsapp_base_url")]
    pub whatsapp_base_url: String,
}

impl ContactConfig {
    pub fn link_builder(&self) -> ContactLinkBuilder {
        ContactLinkBuilder::new(self.whatsapp_base_url.clone())
    }

    /// Validate contact configuration (HTTPS required in production)
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        let url = self.whatsapp_base_url.as_str();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ValidationError::InvalidContactUrl);
        }
        if production && !url.starts_with("https://") {
            return Err(ValidationError::ContactUrlMustBeHttps);
        }
        Ok(())
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_base_url: default_whatsapp_base_url(),
        }
    }
}

fn default_whatsapp_base_url() -> String {
    DEFAULT_WHATSAPP_BASE.to_string()
}
