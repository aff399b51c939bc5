use std::collections::HashMap;

use axum::Json;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Link {
    #[serde(rename = "rel")]
    pub relation: String,

    #[serde(rename = "href")]
    pub hypertext_reference: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Response<T> {
    #[serde(flatten)]
    pub content: T,
    pub debug_info: HashMap<String, Value>,
    pub links: Vec<Link>,
}

impl<T> Response<T> {
    pub fn new(content: T) -> Self {
        Self {
            content,
            debug_info: HashMap::new(),
            links: vec![],
        }
    }

    pub fn builder(content: T) -> ResponseBuilder<T> {
        ResponseBuilder::new(content)
    }

    pub fn json(self) -> Json<Self> {
        Json(self)
    }
}

pub struct ResponseBuilder<T> {
    pub response: Response<T>,
}

impl<T> ResponseBuilder<T> {
    pub fn new(content: T) -> Self {
        Self {
            response: Response::new(content),
        }
    }

    pub fn debug_info<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Serialize,
    {
        self.response
            .debug_info
            .insert(key.into(), serde_json::to_value(value).unwrap());
        self
    }

    pub fn link<R, H>(mut self, relation: R, hypertext_reference: H) -> Self
    where
        R: Into<String>,
        H: Into<String>,
    {
        self.response.links.push(Link {
            relation: relation.into(),
            hypertext_reference: hypertext_reference.into(),
        });
        self
    }

    pub fn link_option<R, H>(self, relation: R, hypertext_reference: Option<H>) -> Self
    where
        R: Into<String>,
        H: Into<String>,
    {
        if let Some(href) = hypertext_reference {
            self.link(relation, href)
        } else {
            self
        }
    }

    pub fn build(self) -> Response<T> {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_links_and_debug_info() {
        let response = Response::builder("content")
            .link("self", "/api/v1/mosques/abc")
            .link_option("location", None::<String>)
            .debug_info("note", "hi")
            .build();
        assert_eq!(response.links.len(), 1);
        assert_eq!(response.links[0].relation, "self");
        assert_eq!(response.debug_info["note"], "hi");
    }
}
