//! Pass-through to S3-style object storage: uploads and time-limited
//! presigned download URLs.

use std::time::Duration;

use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region, SharedCredentialsProvider};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use chrono::Utc;
use util::config;

use crate::services::error::ServiceError;

/// Lifetime of presigned download URLs.
pub const PRESIGN_EXPIRY: Duration = Duration::from_secs(60);

pub struct ObjectStorage {
    client: Client,
    bucket: String,
    region: String,
}

impl ObjectStorage {
    /// Builds a client from `ACCESS_KEY`/`SECRET`/`REGION`/`BUCKET_NAME`.
    ///
    /// Configuration is validated lazily, per request: a missing value fails
    /// fast with a `Config` error rather than at startup.
    pub fn from_config() -> Result<Self, ServiceError> {
        let access_key = config::access_key();
        let secret = config::secret();
        let region = config::region();
        let bucket = config::bucket_name();

        if access_key.is_empty() || secret.is_empty() || region.is_empty() || bucket.is_empty() {
            return Err(ServiceError::Config(
                "Missing AWS configuration in environment variables".into(),
            ));
        }

        let credentials = Credentials::new(access_key, secret, None, None, "environment");
        let conf = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(region.clone()))
            .credentials_provider(SharedCredentialsProvider::new(credentials))
            .build();

        Ok(Self {
            client: Client::from_conf(conf),
            bucket,
            region,
        })
    }

    /// Uploads a file under a timestamp-prefixed key and returns the
    /// constructed public URL.
    pub async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ServiceError> {
        let key = format!("{}_{}", Utc::now().timestamp_millis(), file_name);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| ServiceError::Storage(format!("Upload failed: {e}")))?;

        Ok(format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket, self.region, key
        ))
    }

    /// Returns a time-limited presigned GET URL for `key`, or `NotFound`
    /// when the signer yields no result.
    pub async fn presigned_url(&self, key: &str) -> Result<String, ServiceError> {
        let presigning = PresigningConfig::expires_in(PRESIGN_EXPIRY)
            .map_err(|e| ServiceError::Storage(format!("Presign configuration failed: {e}")))?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|_| ServiceError::NotFound(format!("Object '{key}' not found")))?;

        Ok(presigned.uri().to_string())
    }
}
