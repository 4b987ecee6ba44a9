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

use crate::cos::builders::PutBucketCors;
use crate::cos::client::CosClient;

impl CosClient {
    /// Creates a [`PutBucketCors`] request builder, replacing the bucket's
    /// CORS configuration with the one set via
    /// [`cors_config()`](PutBucketCors::cors_config).
    ///
    /// To execute the request, call [`PutBucketCors::send()`](crate::cos::types::CosApi::send),
    /// which returns a [`Result`] containing a [`PutBucketCorsResponse`](crate::cos::response::PutBucketCorsResponse).
    ///
    /// The service accepts at most
    /// [`MAX_CORS_CONFIG_SIZE`](crate::cos::client::MAX_CORS_CONFIG_SIZE)
    /// bytes of configuration; an oversized payload is rejected remotely.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cos_rs::cos::client::CosClient;
    /// use cos_rs::cos::cors_config::{CorsConfig, CorsRule};
    /// use cos_rs::cos::creds::StaticProvider;
    /// use cos_rs::cos::http::BaseUrl;
    /// use cos_rs::cos::response::PutBucketCorsResponse;
    /// use cos_rs::cos::types::CosApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "https://cos.ap-guangzhou.myqcloud.com".parse::<BaseUrl>().unwrap();
    ///     let provider = StaticProvider::new("AKID-EXAMPLE", "SECRET-EXAMPLE", None);
    ///     let client = CosClient::new(base_url, Some(provider), None, None).unwrap();
    ///
    ///     let config = CorsConfig {
    ///         rules: vec![CorsRule {
    ///             allowed_origins: vec![String::from("https://example.com")],
    ///             allowed_methods: vec![String::from("PUT"), String::from("GET")],
    ///             max_age_seconds: Some(600),
    ///             ..Default::default()
    ///         }],
    ///     };
    ///
    ///     let resp: PutBucketCorsResponse = client
    ///         .put_bucket_cors("examplebucket-1250000000")
    ///         .cors_config(config)
    ///         .send().await.unwrap();
    ///     println!("set CORS configuration on bucket '{}'", resp.bucket);
    /// }
    /// ```
    pub fn put_bucket_cors<S: Into<String>>(&self, bucket: S) -> PutBucketCors {
        PutBucketCors::new(self.clone(), bucket.into())
    }
}
