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

//! Request type, API traits and shared data records

use crate::cos::client::CosClient;
use crate::cos::error::Error;
use crate::cos::multimap_ext::Multimap;
use crate::cos::segmented_bytes::SegmentedBytes;
use crate::cos::utils::{from_iso8601utc, get_option_text, UtcTime};
use async_trait::async_trait;
use http::Method;
use std::sync::Arc;
use xmltree::Element;

/// An HTTP request descriptor, built by an operation builder and executed
/// against the client's endpoint.
#[derive(Clone, Debug)]
pub struct CosRequest {
    pub(crate) client: CosClient,

    pub method: Method,
    pub region: Option<String>,
    pub bucket: Option<String>,
    pub query_params: Multimap,
    pub headers: Multimap,
    pub body: Option<Arc<SegmentedBytes>>,

    /// Region resolved at execution time from the request and the base URL.
    pub inner_region: String,
}

impl CosRequest {
    pub fn new(client: CosClient, method: Method) -> Self {
        CosRequest {
            client,
            method,
            region: None,
            bucket: None,
            query_params: Multimap::new(),
            headers: Multimap::new(),
            body: None,
            inner_region: String::new(),
        }
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn bucket(mut self, bucket: Option<String>) -> Self {
        self.bucket = bucket;
        self
    }

    pub fn query_params(mut self, query_params: Multimap) -> Self {
        self.query_params = query_params;
        self
    }

    pub fn headers(mut self, headers: Multimap) -> Self {
        self.headers = headers;
        self
    }

    pub fn body(mut self, body: Option<SegmentedBytes>) -> Self {
        self.body = body.map(Arc::new);
        self
    }

    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        self.inner_region = self.client.resolve_region(self.region.as_deref())?;

        self.client
            .execute(
                self.method.clone(),
                &self.inner_region,
                &mut self.headers,
                &self.query_params,
                self.bucket.as_deref(),
                self.body.clone(),
            )
            .await
    }
}

/// Builds a [`CosRequest`] from an operation builder.
pub trait ToCosRequest {
    fn to_cos_request(self) -> Result<CosRequest, Error>;
}

/// Converts the raw HTTP outcome of a request into a typed response.
#[async_trait]
pub trait FromCosResponse: Sized {
    async fn from_cos_response(
        req: CosRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Executes an operation builder and returns its typed response.
#[async_trait]
pub trait CosApi: ToCosRequest + Sized + Send {
    type CosResponse: FromCosResponse;

    async fn send(self) -> Result<Self::CosResponse, Error> {
        let mut req = self.to_cos_request()?;
        let resp = req.execute().await;
        Self::CosResponse::from_cos_response(req, resp).await
    }
}

/// Account that initiated a multipart upload. The service emits the id as
/// `<ID>` on S3-compatible endpoints and as the legacy `<UID>` elsewhere;
/// both are accepted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Initiator {
    pub id: String,
    pub display_name: Option<String>,
}

impl Initiator {
    pub fn from_xml(element: &Element) -> Initiator {
        Initiator {
            id: get_option_text(element, "ID")
                .or_else(|| get_option_text(element, "UID"))
                .unwrap_or_default(),
            display_name: get_option_text(element, "DisplayName"),
        }
    }
}

/// Account that owns a multipart upload; same tag conventions as
/// [`Initiator`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Owner {
    pub id: String,
    pub display_name: Option<String>,
}

impl Owner {
    pub fn from_xml(element: &Element) -> Owner {
        Owner {
            id: get_option_text(element, "ID")
                .or_else(|| get_option_text(element, "UID"))
                .unwrap_or_default(),
            display_name: get_option_text(element, "DisplayName"),
        }
    }
}

/// An in-progress multipart upload, as returned by list-multipart-uploads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartUpload {
    pub key: String,
    pub upload_id: String,
    pub storage_class: Option<String>,
    pub initiator: Option<Initiator>,
    pub owner: Option<Owner>,
    pub initiated: Option<UtcTime>,
}

impl MultipartUpload {
    pub fn from_xml(element: &Element) -> Result<MultipartUpload, Error> {
        let upload_id = get_option_text(element, "UploadId")
            .or_else(|| get_option_text(element, "UploadID"))
            .ok_or_else(|| Error::XmlError(String::from("<UploadId> tag not found")))?;

        let initiated = match get_option_text(element, "Initiated") {
            Some(v) => Some(from_iso8601utc(&v)?),
            None => None,
        };

        Ok(MultipartUpload {
            key: get_option_text(element, "Key")
                .ok_or_else(|| Error::XmlError(String::from("<Key> tag not found")))?,
            upload_id,
            storage_class: get_option_text(element, "StorageClass"),
            initiator: element.get_child("Initiator").map(Initiator::from_xml),
            owner: element.get_child("Owner").map(Owner::from_xml),
            initiated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_multipart_upload_from_xml() {
        let data = "<Upload>\
                    <Key>logs/app.log</Key>\
                    <UploadId>1585130821cbb7df1d1</UploadId>\
                    <StorageClass>STANDARD</StorageClass>\
                    <Initiator><UID>100000000001</UID></Initiator>\
                    <Owner><ID>100000000001</ID><DisplayName>qcs-user</DisplayName></Owner>\
                    <Initiated>2025-03-25T10:18:32.000Z</Initiated>\
                    </Upload>";
        let root = Element::parse(data.as_bytes()).unwrap();
        let upload = MultipartUpload::from_xml(&root).unwrap();

        assert_eq!(upload.key, "logs/app.log");
        assert_eq!(upload.upload_id, "1585130821cbb7df1d1");
        assert_eq!(upload.storage_class.as_deref(), Some("STANDARD"));
        assert_eq!(upload.initiator.as_ref().unwrap().id, "100000000001");
        assert_eq!(
            upload.owner.as_ref().unwrap().display_name.as_deref(),
            Some("qcs-user")
        );
        assert_eq!(
            upload.initiated.unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 25, 10, 18, 32).unwrap()
        );
    }

    #[test]
    fn test_multipart_upload_accepts_legacy_upload_id_tag() {
        let data = "<Upload><Key>a</Key><UploadID>xyz</UploadID></Upload>";
        let root = Element::parse(data.as_bytes()).unwrap();
        let upload = MultipartUpload::from_xml(&root).unwrap();
        assert_eq!(upload.upload_id, "xyz");
    }

    #[test]
    fn test_multipart_upload_requires_key_and_upload_id() {
        let root = Element::parse("<Upload><Key>a</Key></Upload>".as_bytes()).unwrap();
        assert!(MultipartUpload::from_xml(&root).is_err());

        let root = Element::parse("<Upload><UploadId>x</UploadId></Upload>".as_bytes()).unwrap();
        assert!(MultipartUpload::from_xml(&root).is_err());
    }
}
