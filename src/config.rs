//! Service configuration resolution.
//!
//! The environment is the primary source; the parameter store is the
//! fallback when the update URL or the RDS secret ARN is not set.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::env::EnvProvider;
use crate::stores::ParameterStore;
use crate::Result;

const ENV_UPDATE_ADOPTION_URL: &str = "UPDATE_ADOPTION_URL";
const ENV_RDS_SECRET_ARN: &str = "RDS_SECRET_ARN";
const ENV_AWS_REGION: &str = "AWS_REGION";

/// Resolved service configuration.
///
/// Absent values stay `None`; enforcing their presence is the caller's
/// contract. The bucket and table fields are only populated when the
/// configuration comes from the parameter store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub update_adoption_url: Option<String>,
    pub rds_secret_arn: Option<String>,
    pub region: Option<String>,
    pub s3_bucket_name: Option<String>,
    pub dynamodb_tablename: Option<String>,
}

/// The parameter-store keys this service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParameterKey {
    UpdateAdoptionUrl,
    RdsSecretArn,
    S3BucketName,
    DynamodbTablename,
}

impl ParameterKey {
    const ALL: [ParameterKey; 4] = [
        ParameterKey::UpdateAdoptionUrl,
        ParameterKey::RdsSecretArn,
        ParameterKey::S3BucketName,
        ParameterKey::DynamodbTablename,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::UpdateAdoptionUrl => "/banilux/updateadoptionstatusurl",
            Self::RdsSecretArn => "/banilux/rdssecretarn",
            Self::S3BucketName => "/banilux/s3bucketname",
            Self::DynamodbTablename => "/banilux/dynamodbtablename",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    fn assign(self, cfg: &mut Config, value: String) {
        let slot = match self {
            Self::UpdateAdoptionUrl => &mut cfg.update_adoption_url,
            Self::RdsSecretArn => &mut cfg.rds_secret_arn,
            Self::S3BucketName => &mut cfg.s3_bucket_name,
            Self::DynamodbTablename => &mut cfg.dynamodb_tablename,
        };
        *slot = Some(value);
    }
}

/// Resolve configuration from the environment, falling back to the parameter
/// store when the update URL or the secret ARN is missing.
///
/// With all three environment variables set, the store is never contacted.
pub async fn fetch_config<E, P>(env: &E, store: &P) -> Result<Config>
where
    E: EnvProvider,
    P: ParameterStore,
{
    let cfg = Config {
        update_adoption_url: env.var(ENV_UPDATE_ADOPTION_URL),
        rds_secret_arn: env.var(ENV_RDS_SECRET_ARN),
        region: env.var(ENV_AWS_REGION),
        ..Config::default()
    };

    if cfg.update_adoption_url.is_none() || cfg.rds_secret_arn.is_none() {
        debug!("environment configuration incomplete, reading parameter store");
        return fetch_config_from_parameter_store(store, cfg.region).await;
    }

    debug!("configuration resolved from environment");
    Ok(cfg)
}

/// Batch-read the four known keys from the parameter store.
///
/// Parameters with unrecognized names are logged and dropped; a failed
/// remote call fails the whole resolution attempt.
pub async fn fetch_config_from_parameter_store<P>(
    store: &P,
    region: Option<String>,
) -> Result<Config>
where
    P: ParameterStore,
{
    let names: Vec<&str> = ParameterKey::ALL.iter().map(|key| key.name()).collect();
    let parameters = store.get_parameters(&names).await?;

    let mut cfg = Config {
        region,
        ..Config::default()
    };

    for parameter in parameters {
        match ParameterKey::from_name(&parameter.name) {
            Some(key) => key.assign(&mut cfg, parameter.value),
            None => warn!(name = %parameter.name, "ignoring unrecognized parameter"),
        }
    }

    Ok(cfg)
}
