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

use crate::cos::error::Error;
use crate::cos::utils::{get_option_text, get_text_list};
use xmltree::Element;

/// A single CORS rule of a bucket.
///
/// `allowed_methods` and `allowed_origins` are mandatory; everything else is
/// omitted from the XML payload when unset.
#[derive(PartialEq, Clone, Debug, Default)]
pub struct CorsRule {
    pub id: Option<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_origins: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    pub max_age_seconds: Option<u32>,
}

impl CorsRule {
    pub fn from_xml(element: &Element) -> Result<CorsRule, Error> {
        let max_age_seconds = match get_option_text(element, "MaxAgeSeconds") {
            Some(v) => Some(v.parse::<u32>()?),
            None => None,
        };

        Ok(CorsRule {
            id: get_option_text(element, "ID"),
            allowed_methods: get_text_list(element, "AllowedMethod"),
            allowed_origins: get_text_list(element, "AllowedOrigin"),
            allowed_headers: get_text_list(element, "AllowedHeader"),
            expose_headers: get_text_list(element, "ExposeHeader"),
            max_age_seconds,
        })
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.allowed_methods.is_empty() {
            return Err(Error::InvalidCorsConfig(String::from(
                "rule must have at least one allowed method",
            )));
        }
        if self.allowed_origins.is_empty() {
            return Err(Error::InvalidCorsConfig(String::from(
                "rule must have at least one allowed origin",
            )));
        }
        Ok(())
    }

    pub fn to_xml(&self) -> String {
        let mut data = String::from("<CORSRule>");

        if let Some(id) = &self.id {
            data.push_str("<ID>");
            data.push_str(id);
            data.push_str("</ID>");
        }

        for origin in &self.allowed_origins {
            data.push_str("<AllowedOrigin>");
            data.push_str(origin);
            data.push_str("</AllowedOrigin>");
        }

        for method in &self.allowed_methods {
            data.push_str("<AllowedMethod>");
            data.push_str(method);
            data.push_str("</AllowedMethod>");
        }

        for header in &self.allowed_headers {
            data.push_str("<AllowedHeader>");
            data.push_str(header);
            data.push_str("</AllowedHeader>");
        }

        for header in &self.expose_headers {
            data.push_str("<ExposeHeader>");
            data.push_str(header);
            data.push_str("</ExposeHeader>");
        }

        if let Some(max_age) = self.max_age_seconds {
            data.push_str("<MaxAgeSeconds>");
            data.push_str(&max_age.to_string());
            data.push_str("</MaxAgeSeconds>");
        }

        data.push_str("</CORSRule>");
        data
    }
}

/// CORS configuration of a bucket; the payload of put-bucket-cors and the
/// result of get-bucket-cors.
#[derive(PartialEq, Clone, Debug, Default)]
pub struct CorsConfig {
    pub rules: Vec<CorsRule>,
}

impl CorsConfig {
    pub fn from_xml(root: &Element) -> Result<CorsConfig, Error> {
        let mut config = CorsConfig { rules: Vec::new() };

        for rule_elem in root.children.iter().filter_map(|c| c.as_element()) {
            if rule_elem.name == "CORSRule" {
                config.rules.push(CorsRule::from_xml(rule_elem)?);
            }
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        for rule in &self.rules {
            rule.validate()?;
        }
        Ok(())
    }

    pub fn empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn to_xml(&self) -> String {
        let mut data = String::from("<CORSConfiguration>");
        for rule in &self.rules {
            data.push_str(&rule.to_xml());
        }
        data.push_str("</CORSConfiguration>");
        data
    }
}
