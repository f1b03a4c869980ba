//! Registration form data assembled from data tokens.
//!
//! Mirrors the record the browser suites feed into a sign-up form: a random
//! first and last name, an address derived from the first name, and a
//! password carrying a six-character identifier.

use serde::{Deserialize, Serialize};

use crate::resolver::TokenResolver;

/// Domain used for generated email addresses.
pub const EMAIL_DOMAIN: &str = "example.com";

const FIRST_NAME_TOKEN: &str = "<FIRSTNAME>";
const LAST_NAME_TOKEN: &str = "<LASTNAME>";
const PASSWORD_ID_TOKEN: &str = "<UNIQUEID6>";
const PASSWORD_PREFIX: &str = "Test";
const PASSWORD_SUFFIX: &str = "!";
const FALLBACK_LOCAL_PART: &str = "user";

/// A generated sign-up record.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use data_tokens::{RegistrationData, SeededRandomSource, TokenResolver};
/// use mockable::DefaultClock;
///
/// let resolver = TokenResolver::new(Arc::new(DefaultClock), Arc::new(SeededRandomSource::new(7)));
/// let data = RegistrationData::generate(&resolver);
///
/// assert!(data.email.ends_with("@example.com"));
/// assert_eq!(data.password.len(), "Test".len() + 6 + "!".len());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
    /// Random first name.
    pub first_name: String,
    /// Random last name.
    pub last_name: String,
    /// Lowercased first name at [`EMAIL_DOMAIN`].
    pub email: String,
    /// `Test` followed by a six-character identifier and `!`.
    pub password: String,
}

impl RegistrationData {
    /// Generates a record using `resolver` for every random part.
    #[must_use]
    pub fn generate(resolver: &TokenResolver) -> Self {
        let first_name = resolver.resolve(FIRST_NAME_TOKEN);
        let last_name = resolver.resolve(LAST_NAME_TOKEN);
        let email = email_for(&first_name);
        let password = format!(
            "{PASSWORD_PREFIX}{}{PASSWORD_SUFFIX}",
            resolver.resolve(PASSWORD_ID_TOKEN)
        );

        Self {
            first_name,
            last_name,
            email,
            password,
        }
    }
}

/// Builds an address from the ASCII alphanumerics of `first_name`.
fn email_for(first_name: &str) -> String {
    let local_part: String = first_name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if local_part.is_empty() {
        format!("{FALLBACK_LOCAL_PART}@{EMAIL_DOMAIN}")
    } else {
        format!("{local_part}@{EMAIL_DOMAIN}")
    }
}
