//! Config model and persistence helpers.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Top-level configuration stored in `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Branding shown in the header, hero and footer.
    pub company: CompanyCfg,
    /// Contact details shown in the footer.
    pub contact: ContactCfg,
    /// Pricing and timeline rows in the contact section.
    pub survey: SurveyCfg,
}

/// Company branding values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyCfg {
    /// Parent holding company name.
    pub holding_name: String,
    /// Division name shown next to the holding name.
    pub division_name: String,
    /// Parent company website opened from the header link.
    pub parent_site_url: String,
    /// One-line tagline under the headline.
    pub tagline: String,
}

/// Contact details for the footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactCfg {
    /// Street address of the technology center.
    pub address: String,
    /// Public phone number.
    pub phone: String,
    /// Survey request mailbox.
    pub email: String,
}

/// Timeline and pricing copy for the contact section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyCfg {
    /// Typical survey duration.
    pub duration: String,
    /// Typical report delivery window.
    pub report_delivery: String,
    /// Pricing line.
    pub pricing: String,
}

impl Config {
    /// Load from disk or create defaults when missing.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            let s = fs::read_to_string(path)?;
            Ok(toml::from_str(&s)?)
        } else {
            let cfg = Self::default();
            cfg.save(path)?;
            Ok(cfg)
        }
    }

    /// Persist the config as pretty TOML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let s = toml::to_string_pretty(self)?;
        fs::write(path, s)?;
        Ok(())
    }
}

impl Default for Config {
    /// Defaults match the copy of the public site.
    fn default() -> Self {
        Self {
            company: CompanyCfg {
                holding_name: "Horizon Holdings".into(),
                division_name: "Exploration Technologies".into(),
                parent_site_url: "https://horizon-holdings.example.com/".into(),
                tagline: "Revolutionary satellite-based Atomic Mineral Resonance Tomography that detects underground minerals, oil, and gas deposits without ever touching the ground".into(),
            },
            contact: ContactCfg {
                address: "4500 Satellite Blvd, Denver, CO 80205".into(),
                phone: "(555) EXPLORE".into(),
                email: "surveys@horizon-exploration.com".into(),
            },
            survey: SurveyCfg {
                duration: "2-5 days".into(),
                report_delivery: "7-14 days".into(),
                pricing: "Custom quote".into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let cfg = Config::default();
        let s = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&s).unwrap();
        assert_eq!(back.company.holding_name, cfg.company.holding_name);
        assert_eq!(back.contact.email, cfg.contact.email);
        assert_eq!(back.survey.pricing, cfg.survey.pricing);
    }
}
