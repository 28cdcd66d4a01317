//! Typed client for the bakery REST backend.
//!
//! Thin wrapper over `gloo-net`. Protected endpoints get a bearer header
//! whose token is read from the [`Session`] at call time, never cached on
//! the client, so a token rotated or cleared mid-session takes effect on the
//! very next request.

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::error::{classify_response, classify_transport, ApiError};
use crate::session::Session;
use sweetcrust_shared::{
    LoginRequest, LoginResponse, Order, OrderStatus, RegisterRequest, RegisterResponse,
    StatsOverview, HEADER_AUTHORIZATION,
};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, session }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Bearer credential for the token currently in the store, if any.
    /// Evaluated per request.
    fn bearer(&self) -> Option<String> {
        self.session.get().map(|token| format!("Bearer {token}"))
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.bearer() {
            Some(credential) => builder.header(HEADER_AUTHORIZATION, &credential),
            None => builder,
        }
    }

    // ---- auth ------------------------------------------------------------

    /// `POST /api/auth/login`. Unprotected; the caller stores the returned
    /// token.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let res = Request::post(&self.url("/api/auth/login"))
            .json(&body)
            .map_err(classify_transport)?
            .send()
            .await
            .map_err(classify_transport)?;
        read_json(res).await
    }

    /// `POST /api/auth/register`. Unprotected; does not log the new account
    /// in.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<RegisterResponse, ApiError> {
        let body = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        };
        let res = Request::post(&self.url("/api/auth/register"))
            .json(&body)
            .map_err(classify_transport)?
            .send()
            .await
            .map_err(classify_transport)?;
        read_json(res).await
    }

    // ---- stats -----------------------------------------------------------

    /// `GET /api/stats/overview`
    pub async fn stats_overview(&self) -> Result<StatsOverview, ApiError> {
        let res = self
            .authed(Request::get(&self.url("/api/stats/overview")))
            .send()
            .await
            .map_err(classify_transport)?;
        read_json(res).await
    }

    // ---- orders ----------------------------------------------------------

    /// `GET /api/orders?q=&status=`. Empty filters are omitted from the
    /// query string, matching what the backend expects.
    pub async fn list_orders(
        &self,
        q: &str,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, ApiError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if !q.is_empty() {
            params.push(("q", q.to_string()));
        }
        if let Some(status) = status {
            params.push(("status", status.to_string()));
        }

        let builder = Request::get(&self.url("/api/orders"))
            .query(params.iter().map(|(k, v)| (*k, v.as_str())));
        let res = self
            .authed(builder)
            .send()
            .await
            .map_err(classify_transport)?;
        read_json(res).await
    }

    /// `POST /api/orders`
    pub async fn create_order(&self, order: &Order) -> Result<Order, ApiError> {
        let res = self
            .authed(Request::post(&self.url("/api/orders")))
            .json(order)
            .map_err(classify_transport)?
            .send()
            .await
            .map_err(classify_transport)?;
        read_json(res).await
    }

    /// `PUT /api/orders/{id}`
    pub async fn update_order(&self, id: i64, order: &Order) -> Result<Order, ApiError> {
        let res = self
            .authed(Request::put(&self.url(&format!("/api/orders/{id}"))))
            .json(order)
            .map_err(classify_transport)?
            .send()
            .await
            .map_err(classify_transport)?;
        read_json(res).await
    }

    /// `DELETE /api/orders/{id}` — 204 on success, no body to decode.
    pub async fn delete_order(&self, id: i64) -> Result<(), ApiError> {
        let res = self
            .authed(Request::delete(&self.url(&format!("/api/orders/{id}"))))
            .send()
            .await
            .map_err(classify_transport)?;
        if res.ok() {
            return Ok(());
        }
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        Err(classify_response(status, &body))
    }
}

/// Decodes a successful response, or classifies the failure.
async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    if !res.ok() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        return Err(classify_response(status, &body));
    }
    res.json::<T>().await.map_err(classify_transport)
}

/// Fetches the shared [`ApiClient`] from context.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::memory_session;

    #[test]
    fn url_joins_paths_against_a_trimmed_base() {
        let (session, _, _) = memory_session();
        let api = ApiClient::new("http://localhost:5000/", session);
        assert_eq!(api.url("/api/orders"), "http://localhost:5000/api/orders");
        assert_eq!(api.url("api/orders"), "http://localhost:5000/api/orders");
    }

    #[test]
    fn bearer_reflects_the_store_at_call_time() {
        let (session, _, _) = memory_session();
        let api = ApiClient::new("http://localhost:5000", session.clone());

        assert_eq!(api.bearer(), None);

        session.save("abc123", false);
        assert_eq!(api.bearer().as_deref(), Some("Bearer abc123"));

        // Rotation between calls must show up on the next call only; there
        // is no snapshot held inside the client.
        session.save("rotated", true);
        assert_eq!(api.bearer().as_deref(), Some("Bearer rotated"));

        session.clear();
        assert_eq!(api.bearer(), None);
    }
}
