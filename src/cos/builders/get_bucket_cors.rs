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

use crate::cos::builders::BucketCommon;
use crate::cos::error::Error;
use crate::cos::response::GetBucketCorsResponse;
use crate::cos::types::{CosApi, CosRequest, ToCosRequest};
use crate::cos::utils::{check_bucket_name, insert};
use http::Method;

/// Argument builder for the get-bucket-cors API operation, addressing the
/// `cors` sub-resource of a bucket.
///
/// Constructed by the [`CosClient::get_bucket_cors`](crate::cos::client::CosClient::get_bucket_cors) method.
pub type GetBucketCors = BucketCommon<GetBucketCorsPhantomData>;

#[derive(Clone, Debug, Default)]
pub struct GetBucketCorsPhantomData;

impl CosApi for GetBucketCors {
    type CosResponse = GetBucketCorsResponse;
}

impl ToCosRequest for GetBucketCors {
    fn to_cos_request(self) -> Result<CosRequest, Error> {
        check_bucket_name(&self.bucket, true)?;

        Ok(CosRequest::new(self.client, Method::GET)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "cors"))
            .headers(self.extra_headers.unwrap_or_default()))
    }
}
