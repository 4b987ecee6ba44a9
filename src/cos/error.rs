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

//! Error definitions for this library

use crate::cos::utils::get_default_text;
use bytes::{Buf, Bytes};
use reqwest::header::HeaderMap;
use xmltree::Element;

/// Error response of a rejected request, parsed from the service's XML
/// `<Error>` body.
#[derive(Clone, Debug, Default)]
pub struct ErrorResponse {
    /// Response headers of the rejected request.
    pub headers: HeaderMap,
    /// Service error code, e.g. `NoSuchCORSConfiguration`.
    pub code: String,
    /// Human readable error description.
    pub message: String,
    /// Resource the request was addressed to.
    pub resource: String,
    /// Request id assigned by the service.
    pub request_id: String,
    /// Trace id assigned by the service, if any.
    pub trace_id: String,
    /// Bucket name of the request, if any.
    pub bucket_name: String,
}

impl ErrorResponse {
    pub fn parse(body: Bytes, headers: HeaderMap) -> Result<ErrorResponse, Error> {
        let root = Element::parse(body.reader())?;

        Ok(ErrorResponse {
            headers,
            code: get_default_text(&root, "Code"),
            message: get_default_text(&root, "Message"),
            resource: get_default_text(&root, "Resource"),
            request_id: get_default_text(&root, "RequestId"),
            trace_id: get_default_text(&root, "TraceId"),
            bucket_name: get_default_text(&root, "BucketName"),
        })
    }
}

/// Error of this library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    TimeParseError(#[from] chrono::ParseError),

    #[error(transparent)]
    InvalidUrl(#[from] http::uri::InvalidUri),

    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    XmlParseError(#[from] xmltree::ParseError),

    #[error(transparent)]
    HttpError(#[from] reqwest::Error),

    #[error(transparent)]
    StrError(#[from] reqwest::header::ToStrError),

    #[error(transparent)]
    IntError(#[from] std::num::ParseIntError),

    #[error(transparent)]
    BoolError(#[from] std::str::ParseBoolError),

    #[error(transparent)]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("{0}")]
    XmlError(String),

    #[error("{0}")]
    InvalidBaseUrl(String),

    #[error("{0}")]
    InvalidBucketName(String),

    #[error("{0}")]
    UrlBuildError(String),

    #[error("invalid CORS configuration: {0}")]
    InvalidCorsConfig(String),

    #[error("invalid max-uploads value {0}; must be between 1 and 1000")]
    InvalidMaxUploads(u16),

    #[error("region must be {0}, but passed {1}")]
    RegionMismatch(String, String),

    #[error(
        "cos operation failed; code: {}, message: {}, resource: {}, request_id: {}, trace_id: {}, bucket: {}",
        .0.code, .0.message, .0.resource, .0.request_id, .0.trace_id, .0.bucket_name
    )]
    CosError(ErrorResponse),

    #[error("invalid response received; status code: {0}; content-type: {1}")]
    InvalidResponse(u16, String),

    #[error("server failed with HTTP status code {0}")]
    ServerError(u16),
}
