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

use crate::cos::utils::url_encode;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

/// Collapses runs of spaces into a single space, as required by canonical
/// header construction. Returns `Cow::Borrowed` when the trimmed input needs
/// no rewriting.
#[inline]
fn collapse_spaces(s: &str) -> Cow<'_, str> {
    let trimmed = s.trim();
    if !trimmed.contains("  ") {
        return Cow::Borrowed(trimmed);
    }
    let mut result = String::with_capacity(trimmed.len());
    let mut prev_space = false;
    for c in trimmed.chars() {
        if c == ' ' {
            if !prev_space {
                result.push(' ');
            }
            prev_space = true;
        } else {
            result.push(c);
            prev_space = false;
        }
    }
    Cow::Owned(result)
}

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Merges another multimap into this one
    fn add_multimap(&mut self, other: Multimap);

    /// Converts the multimap to an HTTP query string
    fn to_query_string(&self) -> String;

    /// Converts the multimap to a canonical query string for signing
    fn get_canonical_query_string(&self) -> String;

    /// Converts the multimap to signed headers and canonical headers
    fn get_canonical_headers(&self) -> (String, String);
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key, values);
        }
    }

    fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, values) in self.iter_all() {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }

    fn get_canonical_query_string(&self) -> String {
        // BTreeMap keeps keys in the sorted order signing requires
        let mut sorted: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (key, values) in self.iter_all() {
            sorted
                .entry(key.as_str())
                .or_default()
                .extend(values.iter().map(|s| s.as_str()));
        }

        let mut query = String::new();
        for (key, mut values) in sorted {
            values.sort_unstable();
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }

    fn get_canonical_headers(&self) -> (String, String) {
        let mut btmap: BTreeMap<String, String> = BTreeMap::new();

        for (k, values) in self.iter_all() {
            let key = k.to_lowercase();
            if key == "authorization" || key == "user-agent" {
                continue;
            }

            let mut vs: Vec<&String> = values.iter().collect();
            vs.sort();

            let mut value = String::new();
            for v in vs {
                if !value.is_empty() {
                    value.push(',');
                }
                value.push_str(&collapse_spaces(v));
            }
            btmap.insert(key, value);
        }

        let mut signed_headers = String::new();
        let mut canonical_headers = String::new();
        let mut add_delim = false;
        for (key, value) in &btmap {
            if add_delim {
                signed_headers.push(';');
                canonical_headers.push('\n');
            }

            signed_headers.push_str(key);

            canonical_headers.push_str(key);
            canonical_headers.push(':');
            canonical_headers.push_str(value);

            add_delim = true;
        }

        (signed_headers, canonical_headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("hello world"), "hello world");
        assert_eq!(collapse_spaces("hello   world"), "hello world");
        assert_eq!(collapse_spaces("a  b  c  d"), "a b c d");
        assert_eq!(collapse_spaces("  hello  world  "), "hello world");
        assert_eq!(collapse_spaces("   "), "");
        assert_eq!(collapse_spaces(""), "");
        // only spaces are collapsed, not tabs
        assert_eq!(collapse_spaces("hello\t\tworld"), "hello\t\tworld");
    }

    #[test]
    fn test_collapse_spaces_borrows_when_clean() {
        assert!(matches!(
            collapse_spaces("application/xml"),
            Cow::Borrowed(_)
        ));
        assert!(matches!(collapse_spaces("a  b"), Cow::Owned(_)));
    }

    #[test]
    fn test_canonical_query_string_is_sorted() {
        let mut map = Multimap::new();
        map.add("uploads", "");
        map.add("prefix", "logs/");
        map.add("max-uploads", "100");
        assert_eq!(
            map.get_canonical_query_string(),
            "max-uploads=100&prefix=logs%2F&uploads="
        );
    }

    #[test]
    fn test_canonical_headers_skip_authorization() {
        let mut map = Multimap::new();
        map.add("Host", "cos.ap-guangzhou.myqcloud.com");
        map.add("Authorization", "secret");
        map.add("X-Amz-Date", "20250101T000000Z");
        let (signed, canonical) = map.get_canonical_headers();
        assert_eq!(signed, "host;x-amz-date");
        assert_eq!(
            canonical,
            "host:cos.ap-guangzhou.myqcloud.com\nx-amz-date:20250101T000000Z"
        );
    }
}
