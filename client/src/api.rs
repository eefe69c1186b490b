//! Typed endpoint methods on the API client.

use reqwest::Method;
use serde_json::json;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{Contact, ContactList, ContactListParams, ContactStats, User};

impl ApiClient {
    /// POST /auth/login; installs the session on success.
    ///
    /// A 401 here is a wrong password, not an expired session: it
    /// propagates to the caller untouched so the form can render it.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let body = self
            .execute(
                Method::POST,
                "/auth/login",
                Some(json!({"email": email, "password": password})),
            )
            .await?;

        self.install_session(body)
    }

    /// POST /auth/signup; installs the session on success
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        admin_secret: &str,
    ) -> Result<User, ClientError> {
        let body = self
            .execute(
                Method::POST,
                "/auth/signup",
                Some(json!({
                    "name": name,
                    "email": email,
                    "password": password,
                    "adminSecret": admin_secret,
                })),
            )
            .await?;

        self.install_session(body)
    }

    /// POST /auth/logout; local state is dropped even if the call fails
    pub async fn logout(&self) -> Result<(), ClientError> {
        let result = self.execute(Method::POST, "/auth/logout", None).await;
        self.session().clear();
        result.map(|_| ())
    }

    /// POST /auth/forgot-password
    pub async fn forgot_password(&self, email: &str) -> Result<(), ClientError> {
        self.execute(
            Method::POST,
            "/auth/forgot-password",
            Some(json!({"email": email})),
        )
        .await
        .map(|_| ())
    }

    /// GET /auth/verify-reset-token/{token}
    pub async fn verify_reset_token(&self, token: &str) -> Result<bool, ClientError> {
        let body = self
            .execute(
                Method::GET,
                &format!("/auth/verify-reset-token/{}", token),
                None,
            )
            .await?;

        Ok(body.get("valid").and_then(|v| v.as_bool()).unwrap_or(false))
    }

    /// POST /auth/reset-password
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<(), ClientError> {
        self.execute(
            Method::POST,
            "/auth/reset-password",
            Some(json!({"token": token, "newPassword": new_password})),
        )
        .await
        .map(|_| ())
    }

    /// PATCH /auth/profile
    pub async fn update_profile(&self, name: &str) -> Result<User, ClientError> {
        let body = self
            .execute(Method::PATCH, "/auth/profile", Some(json!({"name": name})))
            .await?;

        let user: User = parse_field(&body, "user")?;
        self.session().set_user(user.clone());
        Ok(user)
    }

    /// GET /contacts
    pub async fn list_contacts(
        &self,
        params: &ContactListParams,
    ) -> Result<ContactList, ClientError> {
        let path = format!("/contacts{}", params.to_query_string());
        let body = self.execute(Method::GET, &path, None).await?;
        parse(&body)
    }

    /// GET /contacts/stats
    pub async fn contact_stats(&self) -> Result<ContactStats, ClientError> {
        let body = self.execute(Method::GET, "/contacts/stats", None).await?;
        parse(&body)
    }

    /// GET /contacts/{id}
    pub async fn get_contact(&self, id: Uuid) -> Result<Contact, ClientError> {
        let body = self
            .execute(Method::GET, &format!("/contacts/{}", id), None)
            .await?;
        parse_field(&body, "contact")
    }

    /// PATCH /contacts/{id}/read
    pub async fn set_contact_read(&self, id: Uuid, read: bool) -> Result<Contact, ClientError> {
        let body = self
            .execute(
                Method::PATCH,
                &format!("/contacts/{}/read", id),
                Some(json!({"read": read})),
            )
            .await?;
        parse_field(&body, "contact")
    }

    /// DELETE /contacts/{id}
    pub async fn delete_contact(&self, id: Uuid) -> Result<(), ClientError> {
        self.execute(Method::DELETE, &format!("/contacts/{}", id), None)
            .await
            .map(|_| ())
    }

    /// PATCH /contacts/bulk-read
    pub async fn bulk_set_read(&self, ids: &[Uuid], read: bool) -> Result<u64, ClientError> {
        let body = self
            .execute(
                Method::PATCH,
                "/contacts/bulk-read",
                Some(json!({"ids": ids, "read": read})),
            )
            .await?;

        Ok(body.get("count").and_then(|v| v.as_u64()).unwrap_or(0))
    }

    /// Store the user and access token from a login/signup response
    fn install_session(&self, body: serde_json::Value) -> Result<User, ClientError> {
        let user: User = parse_field(&body, "user")?;
        let access_token = body
            .get("accessToken")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ClientError::transport("response had no accessToken"))?;

        self.session()
            .set_session(user.clone(), access_token.to_string());
        Ok(user)
    }
}

fn parse<T: serde::de::DeserializeOwned>(body: &serde_json::Value) -> Result<T, ClientError> {
    serde_json::from_value(body.clone())
        .map_err(|e| ClientError::transport(format!("unexpected response shape: {}", e)))
}

fn parse_field<T: serde::de::DeserializeOwned>(
    body: &serde_json::Value,
    field: &str,
) -> Result<T, ClientError> {
    let value = body
        .get(field)
        .ok_or_else(|| ClientError::transport(format!("response had no {}", field)))?;
    serde_json::from_value(value.clone())
        .map_err(|e| ClientError::transport(format!("unexpected response shape: {}", e)))
}
