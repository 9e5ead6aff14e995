use crate::features::forms::{FieldErrors, check_email, optional_text, valid_http_url};
use crate::features::products::types::valid_currency;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub site_name: String,
    pub tagline: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub social: SocialLinks,
    pub payments: PaymentSettings,
    pub maintenance_mode: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl SocialLinks {
    /// Present links with their display label, in menu order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Twitter", &self.twitter),
            ("LinkedIn", &self.linkedin),
            ("GitHub", &self.github),
            ("Instagram", &self.instagram),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.as_deref().map(|url| (label, url)))
        .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentSettings {
    pub currency: String,
    pub stripe: StripeSettings,
    pub razorpay: RazorpaySettings,
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self {
            currency: crate::features::products::types::DEFAULT_CURRENCY.to_string(),
            stripe: StripeSettings::default(),
            razorpay: RazorpaySettings::default(),
        }
    }
}

/// Only the publishable key ever reaches the browser.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StripeSettings {
    pub enabled: bool,
    pub publishable_key: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RazorpaySettings {
    pub enabled: bool,
    pub key_id: String,
}

/// Trims every field, drops blanks to `None`, and checks the result before
/// it is sent with `PUT /api/settings`.
pub fn normalize_settings(settings: &SiteSettings) -> Result<SiteSettings, FieldErrors> {
    let mut errors = FieldErrors::new();

    let site_name = settings.site_name.trim().to_string();
    if site_name.is_empty() {
        errors.insert("site_name", "Site name is required");
    }

    let contact_email = match settings.contact_email.as_deref().and_then(optional_text) {
        Some(email) => match check_email(&email) {
            Ok(email) => Some(email),
            Err(message) => {
                errors.insert("contact_email", message);
                None
            }
        },
        None => None,
    };

    let mut social_link = |field: &'static str, value: &Option<String>| {
        let link = value.as_deref().and_then(optional_text);
        if link.as_deref().is_some_and(|url| !valid_http_url(url)) {
            errors.insert(field, "Link must be an http(s) URL");
        }
        link
    };
    let social = SocialLinks {
        twitter: social_link("twitter", &settings.social.twitter),
        linkedin: social_link("linkedin", &settings.social.linkedin),
        github: social_link("github", &settings.social.github),
        instagram: social_link("instagram", &settings.social.instagram),
    };

    let payments = &settings.payments;
    let currency = payments.currency.trim().to_ascii_uppercase();
    if !valid_currency(&currency) {
        errors.insert("currency", "Currency must be a 3-letter code");
    }

    let stripe_key = payments.stripe.publishable_key.trim().to_string();
    if payments.stripe.enabled && !stripe_key.starts_with("pk_") {
        errors.insert("stripe_key", "Stripe needs a publishable key (pk_...)");
    }

    let razorpay_key = payments.razorpay.key_id.trim().to_string();
    if payments.razorpay.enabled && !razorpay_key.starts_with("rzp_") {
        errors.insert("razorpay_key", "Razorpay needs a key id (rzp_...)");
    }

    errors.into_result(SiteSettings {
        site_name,
        tagline: settings.tagline.as_deref().and_then(optional_text),
        contact_email,
        contact_phone: settings.contact_phone.as_deref().and_then(optional_text),
        address: settings.address.as_deref().and_then(optional_text),
        social,
        payments: PaymentSettings {
            currency,
            stripe: StripeSettings {
                enabled: payments.stripe.enabled,
                publishable_key: stripe_key,
            },
            razorpay: RazorpaySettings {
                enabled: payments.razorpay.enabled,
                key_id: razorpay_key,
            },
        },
        maintenance_mode: settings.maintenance_mode,
    })
}

#[cfg(test)]
mod tests {
    use super::{SiteSettings, normalize_settings};

    fn settings() -> SiteSettings {
        SiteSettings {
            site_name: " Folio Studio ".to_string(),
            contact_email: Some(" Hello@Folio.Studio ".to_string()),
            ..SiteSettings::default()
        }
    }

    #[test]
    fn normalizes_text_fields() {
        let mut input = settings();
        input.tagline = Some("   ".to_string());
        input.social.github = Some(" https://github.com/folio ".to_string());

        let normalized = normalize_settings(&input).unwrap_or_default();
        assert_eq!(normalized.site_name, "Folio Studio");
        assert_eq!(normalized.contact_email.as_deref(), Some("hello@folio.studio"));
        assert_eq!(normalized.tagline, None);
        assert_eq!(normalized.social.entries(), vec![("GitHub", "https://github.com/folio")]);
        assert_eq!(normalized.payments.currency, "USD");
    }

    #[test]
    fn rejects_missing_name_and_bad_links() {
        let mut input = settings();
        input.site_name = String::new();
        input.contact_email = Some("nope".to_string());
        input.social.twitter = Some("twitter.com/folio".to_string());

        let errors = normalize_settings(&input).err().unwrap_or_default();
        assert_eq!(errors.get("site_name"), Some("Site name is required"));
        assert_eq!(errors.get("contact_email"), Some("Enter a valid email address"));
        assert!(errors.get("twitter").is_some());
    }

    #[test]
    fn enabled_providers_need_public_keys() {
        let mut input = settings();
        input.payments.stripe.enabled = true;
        input.payments.stripe.publishable_key = "sk_live_secret".to_string();
        input.payments.razorpay.enabled = true;

        let errors = normalize_settings(&input).err().unwrap_or_default();
        assert!(errors.get("stripe_key").is_some());
        assert!(errors.get("razorpay_key").is_some());

        input.payments.stripe.publishable_key = "pk_test_123".to_string();
        input.payments.razorpay.key_id = "rzp_test_123".to_string();
        assert!(normalize_settings(&input).is_ok());
    }

    #[test]
    fn disabled_providers_skip_key_checks() {
        let mut input = settings();
        input.payments.stripe.publishable_key = "whatever".to_string();
        assert!(normalize_settings(&input).is_ok());
    }

    #[test]
    fn deserializes_partial_documents() {
        let json = r#"{"siteName":"Folio","payments":{"stripe":{"enabled":true,"publishableKey":"pk_1"}}}"#;
        let parsed: SiteSettings = serde_json::from_str(json).unwrap_or_default();
        assert_eq!(parsed.site_name, "Folio");
        assert!(parsed.payments.stripe.enabled);
        assert_eq!(parsed.payments.currency, "USD");
    }
}
