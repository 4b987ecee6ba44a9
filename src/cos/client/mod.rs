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

//! Client to perform bucket operations.
//!
//! The client owns the HTTP transport and the credential provider; every
//! operation builder is created from a client instance and inherits both.

use bytes::Bytes;
use http::Method;
use log::debug;
use reqwest::header::HeaderMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::cos::creds::Provider;
use crate::cos::error::{Error, ErrorResponse};
use crate::cos::header_constants::*;
use crate::cos::http::{BaseUrl, Url};
use crate::cos::multimap_ext::{Multimap, MultimapExt};
use crate::cos::segmented_bytes::SegmentedBytes;
use crate::cos::signer::sign_v4_cos;
use crate::cos::utils::{
    md5sum_hash, sha256_hash_sb, to_amz_date, utc_now, EMPTY_SHA256,
};

mod delete_bucket_cors;
mod get_bucket_cors;
mod list_multipart_uploads;
mod put_bucket_cors;

/// The default region used when neither the base URL nor the request names
/// one.
pub const DEFAULT_REGION: &str = "ap-guangzhou";

/// Maximum size (in bytes) the service accepts for a CORS configuration
/// payload. The limit is enforced remotely; an oversized payload surfaces as
/// a service rejection at send time.
pub const MAX_CORS_CONFIG_SIZE: usize = 64 * 1024; // 64 KiB

/// Maximum number of uploads a single list-multipart-uploads page may
/// request.
pub const MAX_UPLOADS: u16 = 1000;

/// Client builder. Use [`CosClientBuilder::new`] with a [`BaseUrl`], chain
/// the optional setters and call [`build()`](CosClientBuilder::build).
#[derive(Debug, Default)]
pub struct CosClientBuilder {
    base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    ssl_cert_file: Option<PathBuf>,
    ignore_cert_check: Option<bool>,
    app_info: Option<(String, String)>,
    timeout: Option<Duration>,
}

impl CosClientBuilder {
    /// Creates a builder with the given base URL of the service endpoint.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            ..Default::default()
        }
    }

    /// Sets the credential provider. Without one, requests are sent
    /// unsigned.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|v| Arc::new(v) as Arc<dyn Provider + Send + Sync>);
        self
    }

    /// Sets a PEM file with additional trusted root certificates.
    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&std::path::Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file.map(PathBuf::from);
        self
    }

    /// Disables TLS certificate verification. Only for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Sets the application name and version, appended to the User-Agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Sets a request timeout applied to every request of the client.
    /// A timed-out request surfaces as a transport error.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the [`CosClient`]. The HTTP transport is created once and
    /// shared by all clones of the client.
    pub fn build(self) -> Result<CosClient, Error> {
        let mut user_agent = format!(
            "COS ({}; {}) cos-rs/{}",
            std::env::consts::OS,
            std::env::consts::ARCH,
            env!("CARGO_PKG_VERSION")
        );
        if let Some((app_name, app_version)) = &self.app_info {
            user_agent.push_str(&format!(" {app_name}/{app_version}"));
        }

        let mut builder = reqwest::Client::builder().no_gzip().user_agent(user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        {
            if let Some(true) = self.ignore_cert_check {
                builder = builder.danger_accept_invalid_certs(true);
            }
            if let Some(v) = &self.ssl_cert_file {
                let buf = std::fs::read(v)?;
                let cert = reqwest::Certificate::from_pem(&buf)?;
                builder = builder.add_root_certificate(cert);
            }
        }

        Ok(CosClient {
            http_client: builder.build()?,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider: self.provider,
            }),
        })
    }
}

struct SharedClientItems {
    base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
}

impl fmt::Debug for SharedClientItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedClientItems")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Client for the bucket APIs of a COS/S3-compatible service. Cloning is
/// cheap; all clones share the transport and credentials.
#[derive(Clone, Debug)]
pub struct CosClient {
    http_client: reqwest::Client,
    shared: Arc<SharedClientItems>,
}

impl CosClient {
    /// Creates a client with the given base URL and optional credential
    /// provider, certificate file and certificate-check override.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cos_rs::cos::client::CosClient;
    /// use cos_rs::cos::creds::StaticProvider;
    /// use cos_rs::cos::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://cos.ap-guangzhou.myqcloud.com".parse().unwrap();
    /// let provider = StaticProvider::new("AKID-EXAMPLE", "SECRET-EXAMPLE", None);
    /// let client = CosClient::new(base_url, Some(provider), None, None).unwrap();
    /// ```
    pub fn new<P: Provider + Send + Sync + 'static>(
        base_url: BaseUrl,
        provider: Option<P>,
        ssl_cert_file: Option<&std::path::Path>,
        ignore_cert_check: Option<bool>,
    ) -> Result<CosClient, Error> {
        CosClientBuilder::new(base_url)
            .provider(provider)
            .ssl_cert_file(ssl_cert_file)
            .ignore_cert_check(ignore_cert_check)
            .build()
    }

    pub fn is_secure(&self) -> bool {
        self.shared.base_url.https
    }

    /// Resolves the effective region of a request: an explicit request
    /// region must agree with the base URL's region; otherwise the base
    /// URL's region or [`DEFAULT_REGION`] applies.
    pub(crate) fn resolve_region(&self, region: Option<&str>) -> Result<String, Error> {
        let base_region = &self.shared.base_url.region;
        match region {
            Some(r) if !r.is_empty() => {
                if !base_region.is_empty() && base_region != r {
                    return Err(Error::RegionMismatch(base_region.clone(), r.to_string()));
                }
                Ok(r.to_string())
            }
            _ if !base_region.is_empty() => Ok(base_region.clone()),
            _ => Ok(DEFAULT_REGION.to_string()),
        }
    }

    fn build_headers(
        &self,
        headers: &mut Multimap,
        query_params: &Multimap,
        region: &str,
        url: &Url,
        method: &Method,
        body: Option<&SegmentedBytes>,
    ) {
        headers.add(HOST, url.host_header_value());

        let mut md5sum = String::new();
        let mut sha256 = String::new();
        match *method {
            Method::PUT | Method::POST => {
                let data_len = body.map_or(0, |b| b.len());
                headers.add(CONTENT_LENGTH, data_len.to_string());
                if !headers.contains_key(CONTENT_TYPE) {
                    headers.add(CONTENT_TYPE, "application/octet-stream");
                }
                if self.shared.provider.is_some() {
                    sha256 = body.map_or_else(|| EMPTY_SHA256.to_string(), sha256_hash_sb);
                } else if !headers.contains_key(CONTENT_MD5) {
                    md5sum = body.map_or_else(
                        || md5sum_hash(&[]),
                        |b| md5sum_hash(b.to_bytes().as_ref()),
                    );
                }
            }
            _ => {
                if self.shared.provider.is_some() {
                    sha256 = EMPTY_SHA256.to_string();
                }
            }
        }
        if !md5sum.is_empty() {
            headers.add(CONTENT_MD5, md5sum);
        }
        if !sha256.is_empty() {
            headers.add(X_AMZ_CONTENT_SHA256, sha256.clone());
        }

        let date = utc_now();
        headers.add(X_AMZ_DATE, to_amz_date(date));

        if let Some(p) = &self.shared.provider {
            let creds = p.fetch();
            if let Some(token) = creds.session_token {
                headers.add(X_AMZ_SECURITY_TOKEN, token);
            }
            sign_v4_cos(
                method,
                &url.path,
                region,
                headers,
                query_params,
                &creds.access_key,
                &creds.secret_key,
                &sha256,
                date,
            );
        }
    }

    fn get_error_response(
        &self,
        body: Bytes,
        status_code: u16,
        header_map: HeaderMap,
        resource: &str,
        bucket_name: Option<&str>,
    ) -> Error {
        if !body.is_empty() {
            let content_type = header_map
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            if content_type.to_lowercase().contains("xml") {
                return match ErrorResponse::parse(body, header_map) {
                    Ok(v) => Error::CosError(v),
                    Err(e) => e,
                };
            }
            return Error::InvalidResponse(status_code, content_type);
        }

        let (code, message) = match status_code {
            403 => (String::from("AccessDenied"), String::from("Access denied")),
            404 => match bucket_name {
                Some(_) => (
                    String::from("NoSuchBucket"),
                    String::from("Bucket does not exist"),
                ),
                _ => (
                    String::from("ResourceNotFound"),
                    String::from("Request resource not found"),
                ),
            },
            405 | 501 => (
                String::from("MethodNotAllowed"),
                String::from("The specified method is not allowed against this resource"),
            ),
            409 => match bucket_name {
                Some(_) => (
                    String::from("NoSuchBucket"),
                    String::from("Bucket does not exist"),
                ),
                _ => (
                    String::from("ResourceConflict"),
                    String::from("Request resource conflicts"),
                ),
            },
            _ => return Error::ServerError(status_code),
        };

        let request_id = header_map
            .get(X_COS_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let trace_id = header_map
            .get(X_COS_TRACE_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Error::CosError(ErrorResponse {
            headers: header_map,
            code,
            message,
            resource: resource.to_string(),
            request_id,
            trace_id,
            bucket_name: bucket_name.unwrap_or_default().to_string(),
        })
    }

    pub(crate) async fn execute(
        &self,
        method: Method,
        region: &str,
        headers: &mut Multimap,
        query_params: &Multimap,
        bucket_name: Option<&str>,
        body: Option<Arc<SegmentedBytes>>,
    ) -> Result<reqwest::Response, Error> {
        let url = self
            .shared
            .base_url
            .build_url(&method, query_params, bucket_name)?;
        self.build_headers(
            headers,
            query_params,
            region,
            &url,
            &method,
            body.as_deref(),
        );

        debug!("{} {}", method, url);

        let mut req = self.http_client.request(method.clone(), url.to_string());

        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }

        if method == Method::PUT || method == Method::POST {
            req = req.body(body.as_deref().map(SegmentedBytes::to_bytes).unwrap_or_default());
        }

        let resp = req.send().await?;
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status_code = resp.status().as_u16();
        let header_map = resp.headers().clone();
        let body = resp.bytes().await?;

        Err(self.get_error_response(body, status_code, header_map, &url.path, bucket_name))
    }
}
