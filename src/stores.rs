//! Remote store interfaces and their AWS SDK implementations.
//!
//! The traits are the substitution seam for tests; the concrete types wrap
//! the SSM and Secrets Manager clients. A fresh client is built per
//! constructor call, mirroring the one-shot resolution model.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};

use crate::{Error, Result};

/// A named parameter returned from the parameter store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

/// Batch read access to a remote key-value parameter store.
#[async_trait]
pub trait ParameterStore {
    /// Fetch the named parameters in one call. Names the store does not know
    /// are simply absent from the result.
    async fn get_parameters(&self, names: &[&str]) -> Result<Vec<Parameter>>;
}

/// Read access to a remote secret store.
#[async_trait]
pub trait SecretStore {
    /// Fetch the raw string payload of the secret identified by `secret_id`.
    async fn get_secret_value(&self, secret_id: &str) -> Result<String>;
}

async fn shared_config(region: Option<String>) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(Region::new(region));
    }
    loader.load().await
}

/// [`ParameterStore`] backed by AWS Systems Manager.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: aws_sdk_ssm::Client,
}

impl SsmParameterStore {
    /// Build a client from the default credential chain, overriding the
    /// region when one is supplied.
    pub async fn new(region: Option<String>) -> Self {
        let client = aws_sdk_ssm::Client::new(&shared_config(region).await);
        Self { client }
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameters(&self, names: &[&str]) -> Result<Vec<Parameter>> {
        let response = self
            .client
            .get_parameters()
            .set_names(Some(names.iter().map(|name| name.to_string()).collect()))
            .send()
            .await
            .map_err(|e| Error::ParameterStore(format!("Failed to get parameters: {}", e)))?;

        let parameters = response
            .parameters()
            .iter()
            .filter_map(|p| match (p.name(), p.value()) {
                (Some(name), Some(value)) => Some(Parameter {
                    name: name.to_string(),
                    value: value.to_string(),
                }),
                _ => None,
            })
            .collect();

        Ok(parameters)
    }
}

/// [`SecretStore`] backed by AWS Secrets Manager.
#[derive(Debug, Clone)]
pub struct SecretsManagerStore {
    client: aws_sdk_secretsmanager::Client,
}

impl SecretsManagerStore {
    /// Build a client from the default credential chain, overriding the
    /// region when one is supplied.
    pub async fn new(region: Option<String>) -> Self {
        let client = aws_sdk_secretsmanager::Client::new(&shared_config(region).await);
        Self { client }
    }
}

#[async_trait]
impl SecretStore for SecretsManagerStore {
    async fn get_secret_value(&self, secret_id: &str) -> Result<String> {
        let response = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| Error::SecretStore(format!("Failed to get secret: {}", e)))?;

        let secret_string = response
            .secret_string()
            .ok_or_else(|| Error::SecretStore("Secret has no string value".to_string()))?
            .to_string();

        Ok(secret_string)
    }
}
