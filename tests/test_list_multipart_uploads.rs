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

use cos_rs::cos::client::CosClient;
use cos_rs::cos::creds::StaticProvider;
use cos_rs::cos::error::Error;
use cos_rs::cos::http::BaseUrl;
use cos_rs::cos::response::ListMultipartUploadsResponse;
use cos_rs::cos::types::{FromCosResponse, ToCosRequest};
use http::Method;

const BUCKET: &str = "examplebucket-1250000000";

fn test_client() -> CosClient {
    let _ = env_logger::builder().is_test(true).try_init();
    let base_url = "https://cos.ap-guangzhou.myqcloud.com"
        .parse::<BaseUrl>()
        .unwrap();
    let provider = StaticProvider::new("AKID-EXAMPLE", "SECRET-EXAMPLE", None);
    CosClient::new(base_url, Some(provider), None, None).unwrap()
}

#[test]
fn list_multipart_uploads_builds_expected_request() {
    let req = test_client()
        .list_multipart_uploads(BUCKET)
        .delimiter(Some(String::from("/")))
        .encoding_type(Some(String::from("url")))
        .prefix(Some(String::from("logs/")))
        .max_uploads(Some(100))
        .key_marker(Some(String::from("logs/app.log")))
        .upload_id_marker(Some(String::from("1585130821cbb7df1d1")))
        .to_cos_request()
        .unwrap();

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.bucket.as_deref(), Some(BUCKET));
    assert!(req.query_params.contains_key("uploads"));
    assert_eq!(req.query_params.get("delimiter").unwrap(), "/");
    assert_eq!(req.query_params.get("encoding-type").unwrap(), "url");
    assert_eq!(req.query_params.get("prefix").unwrap(), "logs/");
    assert_eq!(req.query_params.get("max-uploads").unwrap(), "100");
    assert_eq!(req.query_params.get("key-marker").unwrap(), "logs/app.log");
    assert_eq!(
        req.query_params.get("upload-id-marker").unwrap(),
        "1585130821cbb7df1d1"
    );
}

#[test]
fn list_multipart_uploads_omits_unset_parameters() {
    let req = test_client()
        .list_multipart_uploads(BUCKET)
        .to_cos_request()
        .unwrap();

    assert!(req.query_params.contains_key("uploads"));
    for key in [
        "delimiter",
        "encoding-type",
        "prefix",
        "max-uploads",
        "key-marker",
        "upload-id-marker",
    ] {
        assert!(!req.query_params.contains_key(key), "unexpected {key}");
    }
}

#[test]
fn list_multipart_uploads_validates_max_uploads() {
    for v in [0u16, 1001, u16::MAX] {
        let res = test_client()
            .list_multipart_uploads(BUCKET)
            .max_uploads(Some(v))
            .to_cos_request();
        assert!(matches!(res, Err(Error::InvalidMaxUploads(got)) if got == v));
    }

    for v in [1u16, 500, 1000] {
        assert!(test_client()
            .list_multipart_uploads(BUCKET)
            .max_uploads(Some(v))
            .to_cos_request()
            .is_ok());
    }
}

async fn parse(body: &str) -> ListMultipartUploadsResponse {
    let req = test_client()
        .list_multipart_uploads(BUCKET)
        .to_cos_request()
        .unwrap();
    let resp = reqwest::Response::from(http::Response::new(body.to_string()));
    ListMultipartUploadsResponse::from_cos_response(req, Ok(resp))
        .await
        .unwrap()
}

#[tokio::test]
async fn parses_truncated_listing() {
    let body = "<ListMultipartUploadsResult>\
        <Bucket>examplebucket-1250000000</Bucket>\
        <KeyMarker/>\
        <UploadIdMarker/>\
        <NextKeyMarker>logs/b.log</NextKeyMarker>\
        <NextUploadIdMarker>1585130821cbb7df1d2</NextUploadIdMarker>\
        <MaxUploads>2</MaxUploads>\
        <IsTruncated>true</IsTruncated>\
        <Upload>\
            <Key>logs/a.log</Key>\
            <UploadId>1585130821cbb7df1d1</UploadId>\
            <StorageClass>STANDARD</StorageClass>\
            <Initiator><UID>100000000001</UID></Initiator>\
            <Owner><UID>100000000001</UID></Owner>\
            <Initiated>2025-03-25T10:18:32.000Z</Initiated>\
        </Upload>\
        <Upload>\
            <Key>logs/b.log</Key>\
            <UploadId>1585130821cbb7df1d2</UploadId>\
        </Upload>\
        </ListMultipartUploadsResult>";

    let resp = parse(body).await;

    assert_eq!(resp.bucket, BUCKET);
    assert!(resp.is_truncated);
    assert_eq!(resp.max_uploads, Some(2));
    assert_eq!(resp.next_key_marker.as_deref(), Some("logs/b.log"));
    assert_eq!(
        resp.next_upload_id_marker.as_deref(),
        Some("1585130821cbb7df1d2")
    );
    assert_eq!(resp.uploads.len(), 2);
    assert_eq!(resp.uploads[0].key, "logs/a.log");
    assert_eq!(resp.uploads[0].initiator.as_ref().unwrap().id, "100000000001");
    assert_eq!(resp.uploads[1].upload_id, "1585130821cbb7df1d2");
}

#[tokio::test]
async fn parses_final_page() {
    let body = "<ListMultipartUploadsResult>\
        <Bucket>examplebucket-1250000000</Bucket>\
        <MaxUploads>1000</MaxUploads>\
        <IsTruncated>false</IsTruncated>\
        </ListMultipartUploadsResult>";

    let resp = parse(body).await;

    assert!(!resp.is_truncated);
    assert!(resp.uploads.is_empty());
    assert_eq!(resp.next_key_marker.as_deref(), None);
    assert_eq!(resp.next_upload_id_marker, None);
}

#[tokio::test]
async fn decodes_url_encoded_keys_and_prefixes() {
    let body = "<ListMultipartUploadsResult>\
        <Bucket>examplebucket-1250000000</Bucket>\
        <Encoding-Type>url</Encoding-Type>\
        <Prefix>logs%2F</Prefix>\
        <Delimiter>%2F</Delimiter>\
        <IsTruncated>false</IsTruncated>\
        <Upload>\
            <Key>logs%2Fapp%20log.txt</Key>\
            <UploadId>xyz</UploadId>\
        </Upload>\
        <CommonPrefixes><Prefix>logs%2F2025%2F</Prefix></CommonPrefixes>\
        </ListMultipartUploadsResult>";

    let resp = parse(body).await;

    assert_eq!(resp.encoding_type.as_deref(), Some("url"));
    assert_eq!(resp.prefix.as_deref(), Some("logs/"));
    assert_eq!(resp.delimiter.as_deref(), Some("/"));
    assert_eq!(resp.uploads[0].key, "logs/app log.txt");
    assert_eq!(resp.common_prefixes, vec![String::from("logs/2025/")]);
}

#[tokio::test]
async fn accepts_legacy_common_prefix_spelling() {
    let body = "<ListMultipartUploadsResult>\
        <Bucket>examplebucket-1250000000</Bucket>\
        <IsTruncated>false</IsTruncated>\
        <CommonPrefixs><Prefix>logs/</Prefix></CommonPrefixs>\
        <CommonPrefixs><Prefix>tmp/</Prefix></CommonPrefixs>\
        </ListMultipartUploadsResult>";

    let resp = parse(body).await;
    assert_eq!(
        resp.common_prefixes,
        vec![String::from("logs/"), String::from("tmp/")]
    );
}

#[tokio::test]
async fn bad_body_is_an_error_not_an_empty_listing() {
    let req = test_client()
        .list_multipart_uploads(BUCKET)
        .to_cos_request()
        .unwrap();
    let resp = reqwest::Response::from(http::Response::new(String::from("not xml")));
    let res = ListMultipartUploadsResponse::from_cos_response(req, Ok(resp)).await;
    assert!(res.is_err());
}
