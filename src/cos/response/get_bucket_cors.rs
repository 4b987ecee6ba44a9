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

use crate::cos::cors_config::CorsConfig;
use crate::cos::error::Error;
use crate::cos::types::{CosRequest, FromCosResponse};
use crate::cos::utils::take_bucket;
use async_trait::async_trait;
use bytes::Buf;
use http::HeaderMap;
use std::mem;
use xmltree::Element;

/// Response of
/// [get_bucket_cors()](crate::cos::client::CosClient::get_bucket_cors)
/// API.
///
/// A bucket without a CORS configuration yields an empty
/// [`CorsConfig`](crate::cos::cors_config::CorsConfig), not an error.
#[derive(Clone, Debug)]
pub struct GetBucketCorsResponse {
    pub headers: HeaderMap,
    pub region: String,
    pub bucket: String,
    pub config: CorsConfig,
}

#[async_trait]
impl FromCosResponse for GetBucketCorsResponse {
    async fn from_cos_response(
        req: CosRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        match resp {
            Ok(mut resp) => {
                let headers: HeaderMap = mem::take(resp.headers_mut());
                let body = resp.bytes().await?;
                let config = if body.is_empty() {
                    CorsConfig::default()
                } else {
                    let root = Element::parse(body.reader())?;
                    CorsConfig::from_xml(&root)?
                };
                Ok(Self {
                    headers,
                    region: req.inner_region,
                    bucket: take_bucket(req.bucket)?,
                    config,
                })
            }
            Err(Error::CosError(e)) if e.code == "NoSuchCORSConfiguration" => Ok(Self {
                headers: e.headers,
                region: req.inner_region,
                bucket: take_bucket(req.bucket)?,
                config: CorsConfig::default(),
            }),
            Err(e) => Err(e),
        }
    }
}
