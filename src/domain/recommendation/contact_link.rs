//! WhatsApp deep link for booking a distribution channel setup.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::domain::catalog::ReferenceTables;
use crate::domain::wizard::WizardState;

/// Default base of the deep link.
pub const DEFAULT_WHATSAPP_BASE: &str = "https://wa.me/";

/// Bytes kept as-is: alphanumerics plus `-_.~/`.
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Builds the contact message and its deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinkBuilder {
    base_url: String,
}

impl Default for ContactLinkBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_WHATSAPP_BASE)
    }
}

impl ContactLinkBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Plain-text message; unanswered fields render as empty strings.
    pub fn message(&self, state: &WizardState, tables: &ReferenceTables) -> String {
        let product_name = state
            .product_type()
            .and_then(|pt| tables.product_type(pt))
            .map(|row| row.name)
            .unwrap_or_default();
        let stage = state.product_stage().map(|s| s.label()).unwrap_or_default();
        let channel = tables.get_channel(state.distribution());
        let channel_name = channel.map(|c| c.name).unwrap_or_default();
        let channel_model = channel.map(|c| c.model).unwrap_or_default();
        let selected = state.selected_channel().unwrap_or_default();

        format!(
            "Hi! I'd like to discuss distribution channel setup:\n\
             \n\
             Product Type: {product_name}\n\
             Product Stage: {stage}\n\
             Recommended Channel: {channel_name}\n\
             Channel Model: {channel_model}\n\
             Selected Option: {selected}\n\
             \n\
             I'm interested in learning more about implementation."
        )
    }

    /// `{base}?text={percent-encoded message}`.
    pub fn link(&self, state: &WizardState, tables: &ReferenceTables) -> String {
        let message = self.message(state, tables);
        format!(
            "{}?text={}",
            self.base_url,
            utf8_percent_encode(&message, MESSAGE_ENCODE_SET)
        )
    }
}
