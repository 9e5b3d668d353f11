use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Fixed business contact data shown next to the quote form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Destination WhatsApp number, digits only, country code included
    pub whatsapp_number: String,
    /// Phone number as displayed on the page
    pub display_phone: String,
    /// Street line of the shop address
    pub address_street: String,
    /// City / state / postal line of the shop address
    pub address_city: String,
    /// Link to the shop on Google Maps
    pub maps_url: String,
    /// Address of the embedded read-only map
    pub map_embed_url: String,
    /// Days the shop is open
    pub hours_days: String,
    /// Opening hours within those days
    pub hours_range: String,
}

impl ContactConfig {
    /// Create ContactConfig from environment variables, falling back to the
    /// fixed production values for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading contact configuration");

        let defaults = ContactConfig::default();

        let whatsapp_number = env::var("BESTCAR_WHATSAPP_NUMBER").unwrap_or_else(|_| {
            warn!("BESTCAR_WHATSAPP_NUMBER not set, using default destination");
            defaults.whatsapp_number.clone()
        });
        debug!("WhatsApp destination: {}", whatsapp_number);

        let display_phone =
            env::var("BESTCAR_DISPLAY_PHONE").unwrap_or_else(|_| defaults.display_phone.clone());

        let config = ContactConfig {
            whatsapp_number,
            display_phone,
            ..defaults
        };

        config.validate()?;
        info!("Contact configuration loaded successfully");
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.whatsapp_number.is_empty() {
            error!("WhatsApp destination number is empty");
            return Err(ConfigError::ValidationError(
                "WhatsApp destination number cannot be empty".to_string(),
            ));
        }

        if !self.whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            error!("WhatsApp destination number contains non-digits");
            return Err(ConfigError::InvalidValue(
                "WhatsApp destination number must contain digits only".to_string(),
            ));
        }

        if self.display_phone.is_empty() {
            return Err(ConfigError::ValidationError(
                "Display phone cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// `tel:` link matching the displayed phone number.
    pub fn tel_link(&self) -> String {
        format!("tel:+{}", self.whatsapp_number)
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            whatsapp_number: "5511977035404".to_string(),
            display_phone: "(11) 97703-5404".to_string(),
            address_street: "R. Itatinga, 32 - Jardim Monte Líbano".to_string(),
            address_city: "Santo André - SP, 09290-420".to_string(),
            maps_url: "https://maps.app.goo.gl/FGjDQBAPkSKoRa6J9".to_string(),
            map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3655.4!2d-46.5311!3d-23.6647!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x94ce42c8d6e6eb9d%3A0x0!2sR.%20Itatinga%2C%2032%20-%20Jardim%20Monte%20Libano%2C%20Santo%20Andr%C3%A9%20-%20SP!5e0!3m2!1spt-BR!2sbr!4v1".to_string(),
            hours_days: "Segunda a Sexta".to_string(),
            hours_range: "8:00 às 18:00".to_string(),
        }
    }
}
