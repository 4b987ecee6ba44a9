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

//! Tests for Signature V4 request signing
//!
//! Only the public API is exercised, to avoid coupling tests to internal
//! implementation details.

use super::header_constants::{AUTHORIZATION, HOST, X_AMZ_CONTENT_SHA256, X_AMZ_DATE};
use super::multimap_ext::{Multimap, MultimapExt};
use super::signer::{get_signature, get_signing_key, sign_v4_cos};
use crate::cos::utils::EMPTY_SHA256;
use chrono::{TimeZone, Utc};
use http::Method;

fn get_test_date() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 24, 0, 0, 0).unwrap()
}

fn base_headers(host: &str) -> Multimap {
    let mut headers = Multimap::new();
    headers.add(HOST, host);
    headers.add(X_AMZ_CONTENT_SHA256, EMPTY_SHA256);
    headers.add(X_AMZ_DATE, "20250524T000000Z");
    headers
}

#[test]
fn test_sign_v4_cos_adds_authorization_header() {
    let mut headers = base_headers("examplebucket-1250000000.cos.ap-guangzhou.myqcloud.com");
    let query_params = Multimap::new();
    let access_key = "AKID-EXAMPLE";

    sign_v4_cos(
        &Method::GET,
        "/",
        "ap-guangzhou",
        &mut headers,
        &query_params,
        access_key,
        "SECRET-EXAMPLE",
        EMPTY_SHA256,
        get_test_date(),
    );

    assert!(headers.contains_key(AUTHORIZATION));
    let auth_header = headers.get(AUTHORIZATION).unwrap();
    assert!(auth_header.starts_with("AWS4-HMAC-SHA256"));
    assert!(auth_header.contains(access_key));
    assert!(auth_header.contains("/20250524/ap-guangzhou/s3/aws4_request"));
    assert!(auth_header.contains("SignedHeaders=host;x-amz-content-sha256;x-amz-date"));
}

#[test]
fn test_sign_v4_cos_deterministic() {
    let query_params = Multimap::new();
    let mut headers1 = base_headers("example.com");
    let mut headers2 = base_headers("example.com");

    for headers in [&mut headers1, &mut headers2] {
        sign_v4_cos(
            &Method::GET,
            "/",
            "ap-guangzhou",
            headers,
            &query_params,
            "test_key",
            "test_secret",
            EMPTY_SHA256,
            get_test_date(),
        );
    }

    assert_eq!(headers1.get("Authorization"), headers2.get("Authorization"));
}

#[test]
fn test_sign_v4_cos_different_methods() {
    let query_params = Multimap::new();
    let mut headers_get = base_headers("example.com");
    let mut headers_delete = base_headers("example.com");

    sign_v4_cos(
        &Method::GET,
        "/",
        "ap-guangzhou",
        &mut headers_get,
        &query_params,
        "test",
        "secret",
        EMPTY_SHA256,
        get_test_date(),
    );

    sign_v4_cos(
        &Method::DELETE,
        "/",
        "ap-guangzhou",
        &mut headers_delete,
        &query_params,
        "test",
        "secret",
        EMPTY_SHA256,
        get_test_date(),
    );

    assert_ne!(
        headers_get.get("Authorization"),
        headers_delete.get("Authorization")
    );
}

#[test]
fn test_sign_v4_cos_query_params_affect_signature() {
    let mut headers1 = base_headers("example.com");
    let mut headers2 = base_headers("example.com");

    let mut cors_params = Multimap::new();
    cors_params.add("cors", "");
    let mut uploads_params = Multimap::new();
    uploads_params.add("uploads", "");

    sign_v4_cos(
        &Method::GET,
        "/",
        "ap-guangzhou",
        &mut headers1,
        &cors_params,
        "test",
        "secret",
        EMPTY_SHA256,
        get_test_date(),
    );

    sign_v4_cos(
        &Method::GET,
        "/",
        "ap-guangzhou",
        &mut headers2,
        &uploads_params,
        "test",
        "secret",
        EMPTY_SHA256,
        get_test_date(),
    );

    assert_ne!(headers1.get("Authorization"), headers2.get("Authorization"));
}

#[test]
fn test_signature_is_hex() {
    let signing_key = get_signing_key("secret", get_test_date(), "ap-guangzhou", "s3");
    let signature = get_signature(signing_key.as_slice(), b"test_string_to_sign");

    assert_eq!(signature.len(), 64);
    assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
}
