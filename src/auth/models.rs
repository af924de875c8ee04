//! Session and profile models.

use serde::{Deserialize, Serialize};

use crate::auth::AuthToken;

/// User profile as returned by the backend. Every field is optional; older
/// accounts may carry only a phone number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Backend user id.
    #[serde(default, alias = "_id")]
    pub id: Option<String>,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Phone number the account is keyed by.
    #[serde(default)]
    pub phone: Option<String>,

    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
}

/// Role requested at OTP verification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Ordinary customer.
    #[default]
    User,
    /// Store administrator.
    Admin,
}

/// Client-side authentication state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    logged_in: bool,
    profile: Option<Profile>,
    token: Option<AuthToken>,
    delivery_time: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the session as logged in with the given profile and token.
    pub fn set_user(&mut self, profile: Option<Profile>, token: AuthToken) {
        self.logged_in = true;
        self.profile = profile;
        self.token = Some(token);
    }

    /// Replace the stored profile, keeping the login state untouched.
    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    /// Store the delivery slot chosen by the user.
    pub fn set_delivery_time(&mut self, slot: impl Into<String>) {
        self.delivery_time = Some(slot.into());
    }

    /// Reset to a logged-out session.
    pub fn clear(&mut self) {
        self.logged_in = false;
        self.profile = None;
        self.token = None;
        self.delivery_time = None;
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    #[must_use]
    pub fn delivery_time(&self) -> Option<&str> {
        self.delivery_time.as_deref()
    }
}
