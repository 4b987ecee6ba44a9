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

use bytes::{Bytes, BytesMut};

/// A request body held as a sequence of byte segments, so callers can append
/// chunks without copying them into one contiguous buffer.
#[derive(Clone, Debug, Default)]
pub struct SegmentedBytes {
    segments: Vec<Bytes>,
    total_size: usize,
}

impl SegmentedBytes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.total_size
    }

    pub fn is_empty(&self) -> bool {
        self.total_size == 0
    }

    pub fn append(&mut self, bytes: Bytes) {
        self.total_size += bytes.len();
        self.segments.push(bytes);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bytes> {
        self.segments.iter()
    }

    /// Copies all segments into a single contiguous `Bytes`.
    pub fn to_bytes(&self) -> Bytes {
        if self.segments.len() == 1 {
            return self.segments[0].clone();
        }
        let mut buf = BytesMut::with_capacity(self.total_size);
        for segment in &self.segments {
            buf.extend_from_slice(segment);
        }
        buf.freeze()
    }
}

impl From<Bytes> for SegmentedBytes {
    fn from(bytes: Bytes) -> Self {
        let mut sb = SegmentedBytes::new();
        sb.append(bytes);
        sb
    }
}

impl From<String> for SegmentedBytes {
    fn from(s: String) -> Self {
        SegmentedBytes::from(Bytes::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let sb = SegmentedBytes::new();
        assert!(sb.is_empty());
        assert_eq!(sb.len(), 0);
        assert_eq!(sb.to_bytes(), Bytes::new());
    }

    #[test]
    fn test_append_and_collect() {
        let mut sb = SegmentedBytes::new();
        sb.append(Bytes::from_static(b"hello "));
        sb.append(Bytes::from_static(b"world"));
        assert_eq!(sb.len(), 11);
        assert_eq!(sb.iter().count(), 2);
        assert_eq!(sb.to_bytes(), Bytes::from_static(b"hello world"));
    }

    #[test]
    fn test_from_string() {
        let sb = SegmentedBytes::from(String::from("<CORSConfiguration/>"));
        assert_eq!(sb.len(), 20);
        assert_eq!(sb.to_bytes(), Bytes::from_static(b"<CORSConfiguration/>"));
    }
}
