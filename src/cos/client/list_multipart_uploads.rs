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

use crate::cos::builders::ListMultipartUploads;
use crate::cos::client::CosClient;

impl CosClient {
    /// Creates a [`ListMultipartUploads`] request builder, listing one page
    /// of in-progress multipart uploads of the bucket.
    ///
    /// To execute the request, call [`ListMultipartUploads::send()`](crate::cos::types::CosApi::send),
    /// which returns a [`Result`] containing a [`ListMultipartUploadsResponse`](crate::cos::response::ListMultipartUploadsResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cos_rs::cos::client::CosClient;
    /// use cos_rs::cos::creds::StaticProvider;
    /// use cos_rs::cos::http::BaseUrl;
    /// use cos_rs::cos::response::ListMultipartUploadsResponse;
    /// use cos_rs::cos::types::CosApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "https://cos.ap-guangzhou.myqcloud.com".parse::<BaseUrl>().unwrap();
    ///     let provider = StaticProvider::new("AKID-EXAMPLE", "SECRET-EXAMPLE", None);
    ///     let client = CosClient::new(base_url, Some(provider), None, None).unwrap();
    ///
    ///     let mut key_marker: Option<String> = None;
    ///     let mut upload_id_marker: Option<String> = None;
    ///     loop {
    ///         let resp: ListMultipartUploadsResponse = client
    ///             .list_multipart_uploads("examplebucket-1250000000")
    ///             .max_uploads(Some(100))
    ///             .key_marker(key_marker.take())
    ///             .upload_id_marker(upload_id_marker.take())
    ///             .send().await.unwrap();
    ///         for upload in &resp.uploads {
    ///             println!("{} {}", upload.key, upload.upload_id);
    ///         }
    ///         if !resp.is_truncated {
    ///             break;
    ///         }
    ///         key_marker = resp.next_key_marker;
    ///         upload_id_marker = resp.next_upload_id_marker;
    ///     }
    /// }
    /// ```
    pub fn list_multipart_uploads<S: Into<String>>(&self, bucket: S) -> ListMultipartUploads {
        ListMultipartUploads::new(self.clone(), bucket.into())
    }
}
