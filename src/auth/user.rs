//! The user record handed back by the identity provider.
use serde_derive::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A signed-in user, shaped the way the identity provider returns it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct User {
    /// Provider-assigned user id
    pub id: String,
    /// Every address attached to the account
    #[serde(default)]
    pub email_addresses: Vec<EmailAddress>,
    /// Id of the entry in `email_addresses` that is the primary address
    #[serde(default)]
    pub primary_email_address_id: Option<String>,
    /// Free-form metadata; `role` is the only key the site reads
    #[serde(default)]
    pub public_metadata: Map<String, Value>,
    /// Given name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Avatar
    #[serde(default)]
    pub image_url: Option<String>,
}

/// An email address attached to a [`User`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EmailAddress {
    /// Provider-assigned address id
    pub id: String,
    /// The address itself
    pub email_address: String,
}

impl User {
    /// The address pointed to by `primary_email_address_id`.
    #[must_use]
    pub fn primary_email(&self) -> Option<&str> {
        let primary_id = self.primary_email_address_id.as_deref()?;
        self.email_addresses
            .iter()
            .find(|email| email.id == primary_id)
            .map(|email| email.email_address.as_str())
    }

    /// The `role` entry of the public metadata, when it is a string.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.public_metadata.get("role").and_then(Value::as_str)
    }

    /// First and last name joined, or whichever of the two is present.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// Name to greet the user with.
    ///
    /// Full name, else first name, else primary email, else `"User"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.full_name()
            .or_else(|| non_empty(self.first_name.as_deref()).map(ToOwned::to_owned))
            .or_else(|| self.primary_email().map(ToOwned::to_owned))
            .unwrap_or_else(|| "User".to_owned())
    }

    /// Avatar initials.
    ///
    /// Both initials when first and last name exist, else the first name's
    /// initial, else the email's, else `"U"`.
    #[must_use]
    pub fn initials(&self) -> String {
        let first = non_empty(self.first_name.as_deref()).and_then(first_char);
        let last = non_empty(self.last_name.as_deref()).and_then(first_char);
        match (first, last) {
            (Some(first), Some(last)) => format!("{first}{last}").to_uppercase(),
            (Some(first), None) => first.to_uppercase().collect(),
            _ => self
                .primary_email()
                .and_then(first_char)
                .map_or_else(|| "U".to_owned(), |initial| initial.to_uppercase().collect()),
        }
    }
}

/// `None` for missing or blank strings
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|val| !val.trim().is_empty())
}

/// First non-blank character
fn first_char(value: &str) -> Option<char> {
    value.trim().chars().next()
}
