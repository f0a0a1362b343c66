//! Ordering backend REST client.
//!
//! One method per endpoint. Each method sends exactly one JSON request and
//! parses the response body into whatever type the caller asks for; use
//! `serde_json::Value` to get the raw body.

use jollibee_core::{
    CustomerCredentials, NewCustomer, NewMenuItem, NewStaffUser, OrderId, OrderStatus,
    StaffCredentials, StaffRole, StatusUpdate,
};
use reqwest::{Client, Method};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use super::error::ApiError;
use super::types::BearerToken;

const CUSTOMERS_REGISTER: &str = "/customers/register";
const CUSTOMERS_LOGIN: &str = "/customers/login";
const STAFF_LOGIN: &str = "/staff/login";
const STAFF_USERS: &str = "/staff/users";
const MENU_ITEMS: &str = "/menu/items";
const ORDERS: &str = "/orders";
const MY_ORDERS: &str = "/orders/my-orders";

/// Client for the ordering backend.
///
/// Cheap to clone; clones share the underlying connection pool. No timeout
/// or retry is configured, so callers that need cancellation should wrap
/// calls themselves (e.g. with `tokio::time::timeout`).
#[derive(Clone)]
pub struct JollibeeClient {
    http: Client,
    /// Base URL without a trailing slash, e.g. `https://host/api`.
    base_url: String,
}

impl std::fmt::Debug for JollibeeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JollibeeClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl JollibeeClient {
    /// Create a client with a default HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `base_url` is not an absolute URL,
    /// or [`ApiError::UnusableBaseUrl`] if paths cannot be appended to it.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_http_client(Client::new(), base_url)
    }

    /// Create a client on top of an existing `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `base_url` is not an absolute URL,
    /// or [`ApiError::UnusableBaseUrl`] if paths cannot be appended to it.
    pub fn with_http_client(http: Client, base_url: &str) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url)?;

        // Paths are appended textually, so anything after the path would swallow them.
        let unusable = if parsed.cannot_be_a_base() {
            Some("not a hierarchical URL")
        } else if parsed.query().is_some() {
            Some("query strings are not supported")
        } else if parsed.fragment().is_some() {
            Some("fragments are not supported")
        } else {
            None
        };
        if let Some(reason) = unusable {
            return Err(ApiError::UnusableBaseUrl {
                url: base_url.to_string(),
                reason,
            });
        }

        let base_url = parsed.as_str().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// The base URL every path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Register a new customer account.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend answers with a
    /// non-success status, or the body cannot be parsed.
    #[instrument(skip_all, fields(email = %customer.email))]
    pub async fn register_customer<R: DeserializeOwned>(
        &self,
        customer: &NewCustomer,
    ) -> Result<R, ApiError> {
        self.send_json(Method::POST, CUSTOMERS_REGISTER, None, customer)
            .await
    }

    /// Log a customer in. The response normally carries the customer token.
    ///
    /// Only `{email, password}` is sent.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend answers with a
    /// non-success status, or the body cannot be parsed.
    #[instrument(skip(self, password))]
    pub async fn login_customer<R: DeserializeOwned>(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<R, ApiError> {
        let credentials = CustomerCredentials {
            email,
            password: password.expose_secret(),
        };
        self.send_json(Method::POST, CUSTOMERS_LOGIN, None, &credentials)
            .await
    }

    // =========================================================================
    // Staff
    // =========================================================================

    /// Log a staff member or admin in.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend answers with a
    /// non-success status, or the body cannot be parsed.
    #[instrument(skip(self, password), fields(role = %role))]
    pub async fn login_staff<R: DeserializeOwned>(
        &self,
        username: &str,
        password: &SecretString,
        role: StaffRole,
    ) -> Result<R, ApiError> {
        let credentials = StaffCredentials {
            username,
            password: password.expose_secret(),
            role,
        };
        self.send_json(Method::POST, STAFF_LOGIN, None, &credentials)
            .await
    }

    /// Create a staff account. Requires an admin token.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend answers with a
    /// non-success status, or the body cannot be parsed.
    #[instrument(skip_all, fields(username = %user.username, role = %user.role))]
    pub async fn create_staff_user<R: DeserializeOwned>(
        &self,
        user: &NewStaffUser,
        admin_token: &BearerToken,
    ) -> Result<R, ApiError> {
        self.send_json(Method::POST, STAFF_USERS, Some(admin_token), user)
            .await
    }

    // =========================================================================
    // Menu
    // =========================================================================

    /// Fetch the menu.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend answers with a
    /// non-success status, or the body cannot be parsed.
    #[instrument(skip(self))]
    pub async fn get_menu_items<R: DeserializeOwned>(&self) -> Result<R, ApiError> {
        self.get(MENU_ITEMS, None).await
    }

    /// Add an item to the menu. Requires an admin token.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend answers with a
    /// non-success status, or the body cannot be parsed.
    #[instrument(skip_all, fields(name = %item.name, price = %item.price))]
    pub async fn create_menu_item<R: DeserializeOwned>(
        &self,
        item: &NewMenuItem,
        admin_token: &BearerToken,
    ) -> Result<R, ApiError> {
        self.send_json(Method::POST, MENU_ITEMS, Some(admin_token), item)
            .await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Place an order. The payload is sent as-is; the backend assigns the id
    /// and initial status. Requires a customer token.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend answers with a
    /// non-success status, or the body cannot be parsed.
    #[instrument(skip_all)]
    pub async fn create_order<T, R>(
        &self,
        order: &T,
        customer_token: &BearerToken,
    ) -> Result<R, ApiError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send_json(Method::POST, ORDERS, Some(customer_token), order)
            .await
    }

    /// Fetch the orders of the customer the token belongs to.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend answers with a
    /// non-success status, or the body cannot be parsed.
    #[instrument(skip_all)]
    pub async fn get_customer_orders<R: DeserializeOwned>(
        &self,
        customer_token: &BearerToken,
    ) -> Result<R, ApiError> {
        self.get(MY_ORDERS, Some(customer_token)).await
    }

    /// Fetch every order. Requires a staff token.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend answers with a
    /// non-success status, or the body cannot be parsed.
    #[instrument(skip_all)]
    pub async fn get_all_orders<R: DeserializeOwned>(
        &self,
        staff_token: &BearerToken,
    ) -> Result<R, ApiError> {
        self.get(ORDERS, Some(staff_token)).await
    }

    /// Change the status of an order. Requires a staff token.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend answers with a
    /// non-success status, or the body cannot be parsed.
    #[instrument(skip(self, staff_token), fields(order_id = %order_id, status = %status))]
    pub async fn update_order_status<R: DeserializeOwned>(
        &self,
        order_id: OrderId,
        status: &OrderStatus,
        staff_token: &BearerToken,
    ) -> Result<R, ApiError> {
        let path = order_status_path(order_id);
        self.send_json(
            Method::PATCH,
            &path,
            Some(staff_token),
            &StatusUpdate { status },
        )
        .await
    }

    // =========================================================================
    // Transport
    // =========================================================================

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&BearerToken>,
    ) -> Result<R, ApiError> {
        self.execute(Method::GET, path, token, None::<&()>).await
    }

    async fn send_json<B, R>(
        &self,
        method: Method,
        path: &str,
        token: Option<&BearerToken>,
        body: &B,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(method, path, token, Some(body)).await
    }

    #[instrument(
        skip(self, token, body),
        fields(method = %method, authenticated = token.is_some())
    )]
    async fn execute<B, R>(
        &self,
        method: Method,
        path: &str,
        token: Option<&BearerToken>,
        body: Option<&B>,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut request = self.http.request(method, self.endpoint(path));

        if let Some(token) = token {
            request = request.bearer_auth(token.expose());
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Backend returned error status");
            return Err(ApiError::from_status(status, text));
        }

        debug!(status = status.as_u16(), bytes = text.len(), "Request completed");

        // An empty success body (e.g. 204) parses as JSON null.
        let body = if text.trim().is_empty() {
            "null"
        } else {
            text.as_str()
        };
        Ok(serde_json::from_str(body)?)
    }
}

fn order_status_path(order_id: OrderId) -> String {
    format!("{ORDERS}/{order_id}/status")
}
