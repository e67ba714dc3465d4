//! Catalog-wide constants stamped on every listing
//!
//! Defaults reproduce the values the feed has always shipped with. A YAML file
//! can override any subset of them:
//!
//! ```yaml
//! listing:
//!   quantity: 5
//!   location: "20100"
//! manufacturer:
//!   email: info@example.com
//! ```

use crate::error::{FeedError, FeedResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything in a listing that does not come from the catalog row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConstants {
    pub listing: ListingDefaults,
    pub manufacturer: Manufacturer,
    pub responsible_person: ResponsiblePerson,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListingDefaults {
    pub action: String,
    pub quantity: u32,
    pub format: String,
    pub duration: String,
    pub vat_percent: f64,
    pub location: String,
    pub returns_within: String,
    pub return_shipping_paid_by: String,
    /// Value of `C:Marca veicolo`
    pub vehicle_brand: String,
}

impl Default for ListingDefaults {
    fn default() -> Self {
        Self {
            action: "Add".to_string(),
            quantity: 10,
            format: "FixedPrice".to_string(),
            duration: "GTC".to_string(),
            vat_percent: 22.0,
            location: "82030".to_string(),
            returns_within: "Days_14".to_string(),
            return_shipping_paid_by: "Seller".to_string(),
            vehicle_brand: "Leggere descrizione per specifiche".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manufacturer {
    pub name: String,
    pub address_line1: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub email: String,
}

impl Default for Manufacturer {
    fn default() -> Self {
        Self {
            name: "TAMOIL ITALIA S.p.A.".to_string(),
            address_line1: "Via Andrea Costa 17".to_string(),
            city: "Milano".to_string(),
            country: "IT".to_string(),
            postal_code: "20131".to_string(),
            email: "tamoil.italia@pec.tamoil.it".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResponsiblePerson {
    pub name: String,
    /// Written to `Responsible Person 1 Type`. The historical feed puts the
    /// street address here, so that is the default.
    #[serde(rename = "type")]
    pub kind: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
}

impl Default for ResponsiblePerson {
    fn default() -> Self {
        Self {
            name: "TAMOIL ITALIA S.p.A.".to_string(),
            kind: "Via Andrea Costa 17".to_string(),
            city: "Milano".to_string(),
            country: "IT".to_string(),
            postal_code: "20131".to_string(),
        }
    }
}

impl CatalogConstants {
    /// Parse constants from YAML text; omitted keys keep their defaults
    pub fn from_yaml(content: &str) -> FeedResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let constants: Self = serde_yaml::from_str(content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Load constants from a YAML file
    pub fn load(path: &Path) -> FeedResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FeedError::Config(format!(
                "Failed to read constants file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Built-in defaults, or the file at `path` when one is given
    pub fn load_or_default(path: Option<&Path>) -> FeedResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn to_yaml(&self) -> FeedResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> FeedResult<()> {
        if !self.listing.vat_percent.is_finite() || self.listing.vat_percent < 0.0 {
            return Err(FeedError::Config(format!(
                "vat_percent must be a non-negative number, got {}",
                self.listing.vat_percent
            )));
        }
        if self.listing.action.trim().is_empty() {
            return Err(FeedError::Config("action must not be empty".to_string()));
        }
        Ok(())
    }
}
