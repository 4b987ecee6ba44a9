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

//! Typed responses of the supported operations

mod delete_bucket_cors;
mod get_bucket_cors;
mod list_multipart_uploads;
mod put_bucket_cors;

pub use delete_bucket_cors::DeleteBucketCorsResponse;
pub use get_bucket_cors::GetBucketCorsResponse;
pub use list_multipart_uploads::ListMultipartUploadsResponse;
pub use put_bucket_cors::PutBucketCorsResponse;
