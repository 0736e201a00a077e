//! Database credential retrieval and mapping.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::stores::SecretStore;
use crate::{Error, Result};

/// Connection parameters for the adoption-history database, renamed from the
/// raw secret fields (`dbname`, `username`, `password`, `host`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionParams {
    pub database: String,
    pub user: String,
    pub password: String,
    pub host: String,
}

/// Fetch the raw string payload of the secret identified by `secret_id`.
pub async fn get_secret_value<S>(store: &S, secret_id: &str) -> Result<String>
where
    S: SecretStore,
{
    store.get_secret_value(secret_id).await
}

/// Fetch the RDS credential secret and decode it into connection parameters.
///
/// The payload must be a JSON object carrying all four credential fields; a
/// missing field fails the whole mapping rather than returning a partial
/// result.
pub async fn get_rds_connection_parameters<S>(
    store: &S,
    secret_id: &str,
) -> Result<ConnectionParams>
where
    S: SecretStore,
{
    let payload = get_secret_value(store, secret_id).await?;
    let secret: Value = serde_json::from_str(&payload)?;

    Ok(ConnectionParams {
        database: required_field(&secret, "dbname")?,
        user: required_field(&secret, "username")?,
        password: required_field(&secret, "password")?,
        host: required_field(&secret, "host")?,
    })
}

fn required_field(secret: &Value, field: &'static str) -> Result<String> {
    secret
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(Error::MissingSecretField(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FakeSecretStore {
        payload: Option<String>,
    }

    impl FakeSecretStore {
        fn with_payload(payload: &str) -> Self {
            Self {
                payload: Some(payload.to_string()),
            }
        }

        fn failing() -> Self {
            Self { payload: None }
        }
    }

    #[async_trait]
    impl SecretStore for FakeSecretStore {
        async fn get_secret_value(&self, _secret_id: &str) -> Result<String> {
            self.payload
                .clone()
                .ok_or_else(|| Error::SecretStore("secret not found".to_string()))
        }
    }

    #[tokio::test]
    async fn returns_raw_secret_string() {
        let store = FakeSecretStore::with_payload("raw-value");

        let value = get_secret_value(&store, "arn:secret").await.unwrap();

        assert_eq!(value, "raw-value");
    }

    #[tokio::test]
    async fn maps_credential_fields() {
        let store = FakeSecretStore::with_payload(
            r#"{"dbname":"petdb","username":"admin","password":"secret","host":"db.local"}"#,
        );

        let params = get_rds_connection_parameters(&store, "arn:secret")
            .await
            .unwrap();

        assert_eq!(
            params,
            ConnectionParams {
                database: "petdb".to_string(),
                user: "admin".to_string(),
                password: "secret".to_string(),
                host: "db.local".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn missing_field_fails_without_partial_result() {
        let store = FakeSecretStore::with_payload(
            r#"{"dbname":"petdb","username":"admin","password":"secret"}"#,
        );

        let err = get_rds_connection_parameters(&store, "arn:secret")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MissingSecretField("host")));
    }

    #[tokio::test]
    async fn malformed_payload_fails_with_parse_error() {
        let store = FakeSecretStore::with_payload("not json at all");

        let err = get_rds_connection_parameters(&store, "arn:secret")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::SecretParse(_)));
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let store = FakeSecretStore::failing();

        let err = get_rds_connection_parameters(&store, "arn:secret")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::SecretStore(_)));
    }
}
