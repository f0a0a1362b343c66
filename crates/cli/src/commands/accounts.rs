//! Customer and staff account commands.

use jollibee_client::{BearerToken, ClientConfig};
use jollibee_core::{Email, NewCustomer, NewStaffUser, StaffRole};
use secrecy::SecretString;
use serde_json::Value;
use tracing::info;

use super::{CommandError, print_json, remote_client};

/// Register a customer account.
///
/// # Errors
///
/// Returns an error if the backend call fails.
pub async fn register_customer(
    config: &ClientConfig,
    name: String,
    email: Email,
    phone: String,
    password: String,
) -> Result<(), CommandError> {
    let client = remote_client(config)?;

    info!("Registering customer: {email}");
    let customer = NewCustomer {
        name,
        email,
        phone,
        password,
    };
    let response: Value = client.register_customer(&customer).await?;
    print_json(&response)
}

/// Log in as a customer and print the response (including the token).
///
/// # Errors
///
/// Returns an error if the backend call fails.
pub async fn login_customer(
    config: &ClientConfig,
    email: &str,
    password: String,
) -> Result<(), CommandError> {
    let client = remote_client(config)?;
    let response: Value = client
        .login_customer(email, &SecretString::from(password))
        .await?;
    print_json(&response)
}

/// Log in as staff or admin and print the response.
///
/// # Errors
///
/// Returns an error if the backend call fails.
pub async fn login_staff(
    config: &ClientConfig,
    username: &str,
    password: String,
    role: StaffRole,
) -> Result<(), CommandError> {
    let client = remote_client(config)?;
    let response: Value = client
        .login_staff(username, &SecretString::from(password), role)
        .await?;
    print_json(&response)
}

/// Create a staff account.
///
/// # Errors
///
/// Returns an error if the backend call fails.
pub async fn create_staff_user(
    config: &ClientConfig,
    username: String,
    password: String,
    role: StaffRole,
    name: String,
    token: String,
) -> Result<(), CommandError> {
    let client = remote_client(config)?;

    info!("Creating {role} account: {username}");
    let user = NewStaffUser {
        username,
        password,
        role,
        name,
    };
    let response: Value = client
        .create_staff_user(&user, &BearerToken::new(token))
        .await?;
    print_json(&response)
}
