// src/pages/login.rs

use super::selector;
use crate::constants;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static META: LazyLock<Selector> = LazyLock::new(|| selector("meta"));

pub struct LoginPage {
    document: Html,
}

impl LoginPage {
    pub fn parse(body: &str) -> Self {
        Self {
            document: Html::parse_document(body),
        }
    }

    /// `<meta name="csrf-token" content="...">`，有多个时取最后一个
    pub fn csrf_token(&self) -> Option<String> {
        self.document
            .select(&META)
            .filter(|meta| meta.value().attr("name") == Some(constants::site::CSRF_META_NAME))
            .filter_map(|meta| meta.value().attr("content"))
            .last()
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }
}
