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

use crate::cos::builders::DeleteBucketCors;
use crate::cos::client::CosClient;

impl CosClient {
    /// Creates a [`DeleteBucketCors`] request builder.
    ///
    /// To execute the request, call [`DeleteBucketCors::send()`](crate::cos::types::CosApi::send),
    /// which returns a [`Result`] containing a [`DeleteBucketCorsResponse`](crate::cos::response::DeleteBucketCorsResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cos_rs::cos::client::CosClient;
    /// use cos_rs::cos::creds::StaticProvider;
    /// use cos_rs::cos::http::BaseUrl;
    /// use cos_rs::cos::response::DeleteBucketCorsResponse;
    /// use cos_rs::cos::types::CosApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "https://cos.ap-guangzhou.myqcloud.com".parse::<BaseUrl>().unwrap();
    ///     let provider = StaticProvider::new("AKID-EXAMPLE", "SECRET-EXAMPLE", None);
    ///     let client = CosClient::new(base_url, Some(provider), None, None).unwrap();
    ///
    ///     let resp: DeleteBucketCorsResponse = client
    ///         .delete_bucket_cors("examplebucket-1250000000")
    ///         .send().await.unwrap();
    ///     println!("deleted CORS configuration of bucket '{}'", resp.bucket);
    /// }
    /// ```
    pub fn delete_bucket_cors<S: Into<String>>(&self, bucket: S) -> DeleteBucketCors {
        DeleteBucketCors::new(self.clone(), bucket.into())
    }
}
