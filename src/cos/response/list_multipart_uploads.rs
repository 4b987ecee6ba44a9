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

use crate::cos::error::Error;
use crate::cos::types::{CosRequest, FromCosResponse, MultipartUpload};
use crate::cos::utils::{
    get_default_text, get_option_text, get_text, url_decode,
};
use async_trait::async_trait;
use bytes::Buf;
use http::HeaderMap;
use std::mem;
use xmltree::Element;

/// Response of
/// [list_multipart_uploads()](crate::cos::client::CosClient::list_multipart_uploads)
/// API.
///
/// One page of in-progress uploads. When `is_truncated` is set, pass
/// `next_key_marker` and `next_upload_id_marker` as the markers of the next
/// request to continue the listing.
#[derive(Clone, Debug)]
pub struct ListMultipartUploadsResponse {
    pub headers: HeaderMap,
    pub region: String,
    pub bucket: String,

    pub encoding_type: Option<String>,
    pub key_marker: Option<String>,
    pub upload_id_marker: Option<String>,
    pub next_key_marker: Option<String>,
    pub next_upload_id_marker: Option<String>,
    pub max_uploads: Option<u16>,
    pub is_truncated: bool,
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    pub uploads: Vec<MultipartUpload>,
    pub common_prefixes: Vec<String>,
}

#[async_trait]
impl FromCosResponse for ListMultipartUploadsResponse {
    async fn from_cos_response(
        req: CosRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;
        let mut root = Element::parse(body.reader())?;

        let bucket = get_default_text(&root, "Bucket");
        // S3 style listings use <EncodingType>, the original service XML
        // uses <Encoding-Type>
        let encoding_type = get_option_text(&root, "EncodingType")
            .or_else(|| get_option_text(&root, "Encoding-Type"));

        let key_marker = url_decode(&encoding_type, get_option_text(&root, "KeyMarker"))?;
        let next_key_marker =
            url_decode(&encoding_type, get_option_text(&root, "NextKeyMarker"))?;
        let upload_id_marker = get_option_text(&root, "UploadIdMarker");
        let next_upload_id_marker = get_option_text(&root, "NextUploadIdMarker");

        let max_uploads = match get_option_text(&root, "MaxUploads") {
            Some(v) if !v.is_empty() => Some(v.parse::<u16>()?),
            _ => None,
        };
        let is_truncated = get_default_text(&root, "IsTruncated").to_lowercase() == "true";

        let prefix = url_decode(&encoding_type, get_option_text(&root, "Prefix"))?;
        let delimiter = url_decode(&encoding_type, get_option_text(&root, "Delimiter"))?;

        let mut uploads: Vec<MultipartUpload> = Vec::new();
        while let Some(upload_elem) = root.take_child("Upload") {
            let mut upload = MultipartUpload::from_xml(&upload_elem)?;
            upload.key = url_decode(&encoding_type, Some(upload.key))?.unwrap_or_default();
            uploads.push(upload);
        }

        // The canonical tag is <CommonPrefixes>; the legacy misspelling
        // <CommonPrefixs> is still emitted by some endpoints.
        let mut common_prefixes: Vec<String> = Vec::new();
        for tag in ["CommonPrefixes", "CommonPrefixs"] {
            while let Some(cp) = root.take_child(tag) {
                let value = url_decode(&encoding_type, Some(get_text(&cp, "Prefix")?))?;
                common_prefixes.push(value.unwrap_or_default());
            }
        }

        Ok(Self {
            headers,
            region: req.inner_region,
            bucket,
            encoding_type,
            key_marker,
            upload_id_marker,
            next_key_marker,
            next_upload_id_marker,
            max_uploads,
            is_truncated,
            prefix,
            delimiter,
            uploads,
            common_prefixes,
        })
    }
}
