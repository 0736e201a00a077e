//! Runtime configuration resolution for the Banilux adoption history service.
//!
//! Configuration is read from the process environment first; when the update
//! URL or the RDS secret ARN is missing there, the four known keys are read
//! from AWS Systems Manager Parameter Store instead. Database credentials are
//! fetched from AWS Secrets Manager and reshaped into connection parameters.
//!
//! Resolution is one-shot: nothing is cached, validated, or refreshed, and
//! every remote failure propagates to the caller.

pub mod config;
pub mod env;
pub mod error;
pub mod secrets;
pub mod stores;

pub use config::{fetch_config, fetch_config_from_parameter_store, Config};
pub use env::{EnvProvider, ProcessEnv};
pub use error::{Error, Result};
pub use secrets::{get_rds_connection_parameters, get_secret_value, ConnectionParams};
pub use stores::{Parameter, ParameterStore, SecretStore, SecretsManagerStore, SsmParameterStore};
