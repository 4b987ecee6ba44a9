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

//! # COS Rust SDK (`cos-rs`)
//!
//! This crate provides a strongly-typed, async interface to the bucket-level
//! APIs of Tencent Cloud COS and other S3-compatible object storage services.
//!
//! Each supported operation has a request builder (e.g.
//! [`cos::builders::PutBucketCors`], [`cos::builders::ListMultipartUploads`])
//! with fluent setters for its parameters. All builders implement the
//! [`cos::types::CosApi`] trait, whose async
//! [`send`](crate::cos::types::CosApi::send) method executes the request and
//! returns a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use cos_rs::cos::client::CosClient;
//! use cos_rs::cos::creds::StaticProvider;
//! use cos_rs::cos::http::BaseUrl;
//! use cos_rs::cos::types::CosApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let base_url = "https://cos.ap-guangzhou.myqcloud.com"
//!         .parse::<BaseUrl>()
//!         .unwrap();
//!     let provider = StaticProvider::new("AKID-EXAMPLE", "SECRET-EXAMPLE", None);
//!     let client = CosClient::new(base_url, Some(provider), None, None).unwrap();
//!
//!     let resp = client
//!         .get_bucket_cors("examplebucket-1250000000")
//!         .send()
//!         .await
//!         .unwrap();
//!     for rule in &resp.config.rules {
//!         println!("allowed origins: {:?}", rule.allowed_origins);
//!     }
//! }
//! ```

pub mod cos;
