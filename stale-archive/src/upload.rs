#![doc = "S3 integration for the CLI: bridges the core ObjectStore trait to the AWS SDK."]
//
//! # S3 store (CLI <-> Core)
//!
//! [`S3Store`] is the production implementation of
//! [`stale_archive_core::contract::ObjectStore`]. The archiver in the core crate only
//! sees the trait; everything AWS-specific stays here.
//!
//! ## Configuration
//!
//! Built with `aws_config::load_defaults`, so credentials, region and endpoint come from
//! the usual AWS chain (`AWS_*` variables, `~/.aws/config`, instance metadata, ...).
//! Nothing is read or validated explicitly.
//!
//! Generated bucket names contain dots, which break virtual-hosted TLS certificates, so
//! the client always uses path-style addressing.

use async_trait::async_trait;
use std::path::Path;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use stale_archive_core::contract::{ObjectStore, StoreError};

/// The one region where S3 rejects an explicit location constraint.
const DEFAULT_S3_REGION: &str = "us-east-1";

pub struct S3Store {
    client: aws_sdk_s3::Client,
    region: Option<String>,
}

impl S3Store {
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let region = sdk_config.region().map(|r| r.to_string());
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(true)
            .build();
        tracing::info!(
            region = region.as_deref().unwrap_or("<unset>"),
            "Initialized S3Store from environment"
        );
        S3Store {
            client: aws_sdk_s3::Client::from_conf(s3_config),
            region,
        }
    }

    /// Underlying SDK client, for operations outside the archiving contract.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }

    fn location_constraint(&self) -> Option<CreateBucketConfiguration> {
        let region = self.region.as_deref()?;
        if region == DEFAULT_S3_REGION {
            return None;
        }
        Some(
            CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(region))
                .build(),
        )
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn create_bucket(&self, name: &str) -> Result<(), StoreError> {
        tracing::info!(bucket = name, region = ?self.region, "Creating S3 bucket");
        let mut request = self.client.create_bucket().bucket(name);
        if let Some(configuration) = self.location_constraint() {
            request = request.create_bucket_configuration(configuration);
        }

        match request.send().await {
            Ok(_) => {
                tracing::info!(bucket = name, "Successfully created S3 bucket");
                Ok(())
            }
            Err(e) => {
                let context = DisplayErrorContext(&e);
                tracing::error!(bucket = name, error = %context, "S3 error creating bucket");
                Err(format!("S3 error creating bucket {name}: {context}").into())
            }
        }
    }

    async fn upload_file(
        &self,
        local_path: &Path,
        bucket: &str,
        key: &str,
    ) -> Result<(), StoreError> {
        tracing::debug!(path = %local_path.display(), bucket, key, "Uploading file to S3");
        let body = ByteStream::from_path(local_path).await.map_err(|e| {
            tracing::error!(error = ?e, path = %local_path.display(), "Failed to open file for upload");
            format!("failed to read {}: {e}", local_path.display())
        })?;

        let result = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await;

        match result {
            Ok(_) => {
                tracing::debug!(bucket, key, "Successfully uploaded object");
                Ok(())
            }
            Err(e) => {
                let context = DisplayErrorContext(&e);
                tracing::error!(bucket, key, error = %context, "S3 error uploading object");
                Err(format!("S3 error uploading {key}: {context}").into())
            }
        }
    }
}
