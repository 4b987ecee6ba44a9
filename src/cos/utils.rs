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

//! Various utility and helper functions

use crate::cos::error::Error;
use crate::cos::multimap_ext::{Multimap, MultimapExt};
use crate::cos::segmented_bytes::SegmentedBytes;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::engine::Engine as _;
use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use lazy_static::lazy_static;
use md5::compute as md5compute;
use regex::Regex;
use sha2::{Digest, Sha256};
pub use urlencoding::decode as urldecode;
pub use urlencoding::encode as url_encode;
use xmltree::Element;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// SHA-256 hash of the empty payload, used for bodyless requests.
pub const EMPTY_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Encodes data as a lowercase hex string
pub fn hex_encode(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

/// Gets hex encoded SHA256 hash of given data
pub fn sha256_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

pub fn sha256_hash_sb(sb: &SegmentedBytes) -> String {
    let mut hasher = Sha256::new();
    for data in sb.iter() {
        hasher.update(data);
    }
    format!("{:x}", hasher.finalize())
}

/// Gets base64 encoded MD5 hash of given data
pub fn md5sum_hash(data: &[u8]) -> String {
    b64encode(md5compute(data).as_slice())
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets signer date value of given time
pub fn to_signer_date(time: UtcTime) -> String {
    time.format("%Y%m%d").to_string()
}

/// Gets AMZ date value of given time
pub fn to_amz_date(time: UtcTime) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Parses ISO8601 UTC formatted value to time
pub fn from_iso8601utc(s: &str) -> Result<UtcTime, ParseError> {
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(
        match NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S.%3fZ") {
            Ok(d) => d,
            _ => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%SZ")?,
        },
        Utc,
    ))
}

/// Percent-decodes a listing field when the response was requested with
/// `encoding-type=url`; passes the value through otherwise.
pub fn url_decode(
    encoding_type: &Option<String>,
    value: Option<String>,
) -> Result<Option<String>, Error> {
    if let Some(encoding) = encoding_type.as_ref() {
        if encoding == "url" {
            if let Some(v) = value {
                return Ok(Some(urldecode(&v)?.to_string()));
            }
        }
    }

    Ok(value)
}

pub fn match_hostname(value: &str) -> bool {
    lazy_static! {
        static ref HOSTNAME_REGEX: Regex =
            Regex::new(r"^([a-z_\d-]{1,63}\.)*([a-z_\d-]{1,63})$").unwrap();
    }

    if !HOSTNAME_REGEX.is_match(value.to_lowercase().as_str()) {
        return false;
    }

    for token in value.split('.') {
        if token.starts_with('-')
            || token.starts_with('_')
            || token.ends_with('-')
            || token.ends_with('_')
        {
            return false;
        }
    }

    true
}

/// Validates given bucket name
pub fn check_bucket_name(bucket_name: &str, strict: bool) -> Result<(), Error> {
    if bucket_name.trim().is_empty() {
        return Err(Error::InvalidBucketName(String::from(
            "bucket name cannot be empty",
        )));
    }

    if bucket_name.len() < 3 {
        return Err(Error::InvalidBucketName(String::from(
            "bucket name cannot be less than 3 characters",
        )));
    }

    if bucket_name.len() > 63 {
        return Err(Error::InvalidBucketName(String::from(
            "bucket name cannot be greater than 63 characters",
        )));
    }

    lazy_static! {
        static ref IPV4_REGEX: Regex = Regex::new(r"^((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])\.){3}(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])$").unwrap();
        static ref VALID_BUCKET_NAME_REGEX: Regex =
            Regex::new("^[A-Za-z0-9][A-Za-z0-9\\.\\-_:]{1,61}[A-Za-z0-9]$").unwrap();
        static ref VALID_BUCKET_NAME_STRICT_REGEX: Regex =
            Regex::new("^[a-z0-9][a-z0-9\\.\\-]{1,61}[a-z0-9]$").unwrap();
    }

    if IPV4_REGEX.is_match(bucket_name) {
        return Err(Error::InvalidBucketName(String::from(
            "bucket name cannot be an IP address",
        )));
    }

    if bucket_name.contains("..") || bucket_name.contains(".-") || bucket_name.contains("-.") {
        return Err(Error::InvalidBucketName(String::from(
            "bucket name contains invalid successive characters '..', '.-' or '-.'",
        )));
    }

    if strict {
        if !VALID_BUCKET_NAME_STRICT_REGEX.is_match(bucket_name) {
            return Err(Error::InvalidBucketName(String::from(
                "bucket name does not follow standards strictly",
            )));
        }
    } else if !VALID_BUCKET_NAME_REGEX.is_match(bucket_name) {
        return Err(Error::InvalidBucketName(String::from(
            "bucket name does not follow standards",
        )));
    }

    Ok(())
}

/// Gets text value of given XML element for given tag.
pub fn get_text(element: &Element, tag: &str) -> Result<String, Error> {
    Ok(element
        .get_child(tag)
        .ok_or(Error::XmlError(format!("<{tag}> tag not found")))?
        .get_text()
        .ok_or(Error::XmlError(format!("text of <{tag}> tag not found")))?
        .to_string())
}

/// Gets optional text value of given XML element for given tag.
pub fn get_option_text(element: &Element, tag: &str) -> Option<String> {
    element
        .get_child(tag)
        .map(|v| v.get_text().unwrap_or_default().to_string())
}

/// Gets default text value of given XML element for given tag.
pub fn get_default_text(element: &Element, tag: &str) -> String {
    element.get_child(tag).map_or(String::new(), |v| {
        v.get_text().unwrap_or_default().to_string()
    })
}

/// Gets text values of all child elements with the given tag, in document
/// order.
pub fn get_text_list(element: &Element, tag: &str) -> Vec<String> {
    element
        .children
        .iter()
        .filter_map(|v| v.as_element())
        .filter(|e| e.name == tag)
        .map(|e| e.get_text().unwrap_or_default().to_string())
        .collect()
}

/// Inserts a valueless query parameter (sub-resource) into the given optional
/// multimap.
pub fn insert(params: Option<Multimap>, key: &str) -> Multimap {
    let mut map = params.unwrap_or_default();
    map.add(key, "");
    map
}

pub fn take_bucket(opt: Option<String>) -> Result<String, Error> {
    opt.filter(|v| !v.is_empty())
        .ok_or_else(|| Error::InvalidBucketName(String::from("no bucket name provided")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_hex_encode() {
        assert_eq!(hex_encode(&[0x00, 0x0f, 0xff]), "000fff");
        assert_eq!(hex_encode(b""), "");
    }

    #[test]
    fn test_empty_sha256() {
        assert_eq!(sha256_hash(b""), EMPTY_SHA256);
    }

    #[test]
    fn test_md5sum_hash() {
        // md5("") = d41d8cd98f00b204e9800998ecf8427e
        assert_eq!(md5sum_hash(b""), "1B2M2Y8AsgTpgAmY7PhCfg==");
    }

    #[test]
    fn test_date_formats() {
        let t = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(to_signer_date(t), "20250102");
        assert_eq!(to_amz_date(t), "20250102T030405Z");
    }

    #[test]
    fn test_from_iso8601utc_with_and_without_millis() {
        let t = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(from_iso8601utc("2025-01-02T03:04:05.000Z").unwrap(), t);
        assert_eq!(from_iso8601utc("2025-01-02T03:04:05Z").unwrap(), t);
        assert!(from_iso8601utc("2025-01-02 03:04:05").is_err());
    }

    #[test]
    fn test_url_decode_respects_encoding_type() {
        let url = Some(String::from("url"));
        assert_eq!(
            url_decode(&url, Some(String::from("logs%2F2025"))).unwrap(),
            Some(String::from("logs/2025"))
        );
        assert_eq!(
            url_decode(&None, Some(String::from("logs%2F2025"))).unwrap(),
            Some(String::from("logs%2F2025"))
        );
        assert_eq!(url_decode(&url, None).unwrap(), None);
    }

    #[test]
    fn test_check_bucket_name() {
        assert!(check_bucket_name("examplebucket-1250000000", true).is_ok());
        assert!(check_bucket_name("", true).is_err());
        assert!(check_bucket_name("ab", true).is_err());
        assert!(check_bucket_name(&"a".repeat(64), true).is_err());
        assert!(check_bucket_name("192.168.0.1", true).is_err());
        assert!(check_bucket_name("foo..bar", true).is_err());
        assert!(check_bucket_name("Uppercase", true).is_err());
        assert!(check_bucket_name("Uppercase", false).is_ok());
    }

    #[test]
    fn test_take_bucket() {
        assert_eq!(
            take_bucket(Some(String::from("mybucket"))).unwrap(),
            "mybucket"
        );
        assert!(take_bucket(None).is_err());
        assert!(take_bucket(Some(String::new())).is_err());
    }
}
