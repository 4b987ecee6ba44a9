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

use crate::cos::client::{CosClient, MAX_UPLOADS};
use crate::cos::error::Error;
use crate::cos::multimap_ext::{Multimap, MultimapExt};
use crate::cos::response::ListMultipartUploadsResponse;
use crate::cos::types::{CosApi, CosRequest, ToCosRequest};
use crate::cos::utils::{check_bucket_name, insert};
use http::Method;

/// Argument builder for the list-multipart-uploads API operation, addressing
/// the `uploads` sub-resource of a bucket.
///
/// One call returns at most one page; drive pagination by feeding the
/// response's `next_key_marker` / `next_upload_id_marker` back into
/// [`key_marker`](ListMultipartUploads::key_marker) and
/// [`upload_id_marker`](ListMultipartUploads::upload_id_marker) while the
/// response is truncated.
///
/// Constructed by the [`CosClient::list_multipart_uploads`](crate::cos::client::CosClient::list_multipart_uploads) method.
#[derive(Clone, Debug)]
pub struct ListMultipartUploads {
    client: CosClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,

    delimiter: Option<String>,
    encoding_type: Option<String>,
    prefix: Option<String>,
    max_uploads: Option<u16>,
    key_marker: Option<String>,
    upload_id_marker: Option<String>,
}

impl ListMultipartUploads {
    pub fn new(client: CosClient, bucket: String) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket,
            delimiter: None,
            encoding_type: None,
            prefix: None,
            max_uploads: None,
            key_marker: None,
            upload_id_marker: None,
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

    /// Groups keys by the delimiter; keys between the prefix and the first
    /// delimiter are rolled up into a common prefix.
    pub fn delimiter(mut self, delimiter: Option<String>) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Requests `url` encoding of keys, prefixes and markers in the
    /// response. Decoding is applied transparently to the parsed result.
    pub fn encoding_type(mut self, encoding_type: Option<String>) -> Self {
        self.encoding_type = encoding_type;
        self
    }

    /// Limits the listing to keys starting with the prefix.
    pub fn prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix;
        self
    }

    /// Sets the page size, between 1 and 1000. The service default is 1000.
    pub fn max_uploads(mut self, max_uploads: Option<u16>) -> Self {
        self.max_uploads = max_uploads;
        self
    }

    /// Lists uploads whose key is lexicographically after this marker.
    pub fn key_marker(mut self, key_marker: Option<String>) -> Self {
        self.key_marker = key_marker;
        self
    }

    /// Together with `key_marker`, lists uploads of the marker key whose
    /// upload id is after this marker.
    pub fn upload_id_marker(mut self, upload_id_marker: Option<String>) -> Self {
        self.upload_id_marker = upload_id_marker;
        self
    }
}

impl CosApi for ListMultipartUploads {
    type CosResponse = ListMultipartUploadsResponse;
}

impl ToCosRequest for ListMultipartUploads {
    fn to_cos_request(self) -> Result<CosRequest, Error> {
        check_bucket_name(&self.bucket, true)?;

        if let Some(v) = self.max_uploads {
            if v == 0 || v > MAX_UPLOADS {
                return Err(Error::InvalidMaxUploads(v));
            }
        }

        let mut query_params: Multimap = insert(self.extra_query_params, "uploads");
        if let Some(v) = self.delimiter {
            query_params.add("delimiter", v);
        }
        if let Some(v) = self.encoding_type {
            query_params.add("encoding-type", v);
        }
        if let Some(v) = self.prefix {
            query_params.add("prefix", v);
        }
        if let Some(v) = self.max_uploads {
            query_params.add("max-uploads", v.to_string());
        }
        if let Some(v) = self.key_marker {
            query_params.add("key-marker", v);
        }
        if let Some(v) = self.upload_id_marker {
            query_params.add("upload-id-marker", v);
        }

        Ok(CosRequest::new(self.client, Method::GET)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default()))
    }
}
