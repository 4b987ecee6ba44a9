// COS Rust Library for Tencent Cloud Object Storage Compatible Services
// Copyright 2025 the cos-rs contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::cos::client::CosClient;
use crate::cos::cors_config::CorsConfig;
use crate::cos::error::Error;
use crate::cos::header_constants::CONTENT_MD5;
use crate::cos::multimap_ext::{Multimap, MultimapExt};
use crate::cos::response::PutBucketCorsResponse;
use crate::cos::segmented_bytes::SegmentedBytes;
use crate::cos::types::{CosApi, CosRequest, ToCosRequest};
use crate::cos::utils::{check_bucket_name, insert, md5sum_hash};
use bytes::Bytes;
use http::Method;

/// Argument builder for the put-bucket-cors API operation, replacing the
/// `cors` sub-resource of a bucket with the given configuration.
///
/// Constructed by the [`CosClient::put_bucket_cors`](crate::cos::client::CosClient::put_bucket_cors) method.
#[derive(Clone, Debug)]
pub struct PutBucketCors {
    client: CosClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,

    config: CorsConfig,
}

impl PutBucketCors {
    pub fn new(client: CosClient, bucket: String) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket,
            config: CorsConfig::default(),
        }
    }

    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn extra_query_params(mut self, extra_query_params: Option<Multimap>) -> Self {
        self.extra_query_params = extra_query_params;
        self
    }

    /// Sets the region for the request
    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn cors_config(mut self, config: CorsConfig) -> Self {
        self.config = config;
        self
    }
}

impl CosApi for PutBucketCors {
    type CosResponse = PutBucketCorsResponse;
}

impl ToCosRequest for PutBucketCors {
    fn to_cos_request(self) -> Result<CosRequest, Error> {
        check_bucket_name(&self.bucket, true)?;
        self.config.validate()?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();

        let bytes: Bytes = self.config.to_xml().into();
        headers.add(CONTENT_MD5, md5sum_hash(&bytes));
        let body: Option<SegmentedBytes> = Some(SegmentedBytes::from(bytes));

        Ok(CosRequest::new(self.client, Method::PUT)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "cors"))
            .headers(headers)
            .body(body))
    }
}
