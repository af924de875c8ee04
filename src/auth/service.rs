//! OTP auth service.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::{
    api::{ApiClient, endpoints},
    auth::{AuthServiceError, Profile, UserRole},
};

/// Successful OTP verification: the session token plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,

    /// Profile of the logged-in user, when the backend includes it.
    #[serde(default)]
    pub user: Option<Profile>,
}

#[derive(Debug, Serialize)]
struct SendOtpRequest<'a> {
    phone: &'a str,
}

#[derive(Debug, Serialize)]
struct VerifyOtpRequest<'a> {
    phone: &'a str,
    otp: &'a str,
    role: UserRole,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshTokenRequest<'a> {
    refresh_token: &'a str,
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Ask the backend to text an OTP to `phone`.
    async fn send_otp(&self, phone: &str) -> Result<(), AuthServiceError>;

    /// Exchange phone + OTP for a session token.
    async fn verify_otp(
        &self,
        phone: &str,
        otp: &str,
        role: UserRole,
    ) -> Result<LoginResponse, AuthServiceError>;

    /// Invalidate the current session server-side.
    async fn logout(&self) -> Result<(), AuthServiceError>;

    /// Exchange a refresh token for a new session token.
    async fn refresh_token(&self, refresh_token: &str) -> Result<LoginResponse, AuthServiceError>;

    /// Fetch the current user's profile.
    async fn fetch_profile(&self) -> Result<Profile, AuthServiceError>;

    /// Update the current user's profile.
    async fn update_profile(&self, profile: &Profile) -> Result<Profile, AuthServiceError>;
}

/// [`AuthService`] over the REST backend.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: ApiClient,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn send_otp(&self, phone: &str) -> Result<(), AuthServiceError> {
        self.client
            .post(endpoints::SEND_OTP, &SendOtpRequest { phone })
            .await?;

        Ok(())
    }

    async fn verify_otp(
        &self,
        phone: &str,
        otp: &str,
        role: UserRole,
    ) -> Result<LoginResponse, AuthServiceError> {
        let body = self
            .client
            .post(endpoints::VERIFY_OTP, &VerifyOtpRequest { phone, otp, role })
            .await?;

        Ok(body.decode().map_err(crate::api::ApiError::from)?)
    }

    async fn logout(&self) -> Result<(), AuthServiceError> {
        self.client
            .post(endpoints::LOGOUT, &serde_json::json!({}))
            .await?;

        Ok(())
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<LoginResponse, AuthServiceError> {
        let body = self
            .client
            .post(
                endpoints::REFRESH_TOKEN,
                &RefreshTokenRequest { refresh_token },
            )
            .await?;

        Ok(body.decode().map_err(crate::api::ApiError::from)?)
    }

    async fn fetch_profile(&self) -> Result<Profile, AuthServiceError> {
        let body = self.client.get(endpoints::USER_PROFILE, &[]).await?;

        Ok(body.decode().map_err(crate::api::ApiError::from)?)
    }

    async fn update_profile(&self, profile: &Profile) -> Result<Profile, AuthServiceError> {
        let body = self.client.put(endpoints::USER_PROFILE, profile).await?;

        Ok(body.decode().map_err(crate::api::ApiError::from)?)
    }
}
