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
use crate::cos::multimap_ext::Multimap;
use std::marker::PhantomData;

/// Common parameters for bucket operations that take no body and no
/// operation-specific arguments. The phantom type parameter identifies the
/// operation.
#[derive(Clone, Debug)]
pub struct BucketCommon<T> {
    pub(crate) client: CosClient,

    pub(crate) extra_headers: Option<Multimap>,
    pub(crate) extra_query_params: Option<Multimap>,
    pub(crate) region: Option<String>,
    pub(crate) bucket: String,

    _operation: PhantomData<T>,
}

impl<T> BucketCommon<T> {
    pub fn new(client: CosClient, bucket: String) -> Self {
        BucketCommon {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket,
            _operation: PhantomData,
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
}
