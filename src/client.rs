// src/client.rs

use crate::{config::AppConfig, constants, error::*};
use log::{debug, trace};
use reqwest::{Client, Response, cookie::Jar, redirect};
use std::sync::Arc;
use url::Url;

/// 一个已抓取的页面：最终地址 (跟随重定向后) 与正文
#[derive(Debug, Clone)]
pub struct Page {
    pub url: Url,
    pub body: String,
}

/// 一次运行内的 HTTP 会话。页面请求与视频下载共用同一个 Cookie 存储，
/// 仅重定向策略不同。
pub struct Session {
    pages: Client,
    assets: Client,
    base_url: Url,
}

impl Session {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let jar = Arc::new(Jar::default());
        let pages = Self::builder(config, jar.clone()).build()?;
        let assets = Self::builder(config, jar)
            .redirect(redirect::Policy::custom(|attempt| {
                // previous 包含原始地址，因此长度超过上限即为第 3 次重定向
                if attempt.previous().len() > constants::MAX_ASSET_REDIRECTS {
                    attempt.error(format!(
                        "重定向次数超过 {} 次",
                        constants::MAX_ASSET_REDIRECTS
                    ))
                } else {
                    attempt.follow()
                }
            }))
            .build()?;

        Ok(Self {
            pages,
            assets,
            base_url: config.base_url.clone(),
        })
    }

    fn builder(config: &AppConfig, jar: Arc<Jar>) -> reqwest::ClientBuilder {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .cookie_provider(jar);
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }

    /// 将站内相对链接解析为绝对地址
    pub fn resolve(&self, href: &str) -> AppResult<Url> {
        Ok(self.base_url.join(href)?)
    }

    pub async fn get_page(&self, url: &Url) -> AppResult<Page> {
        debug!("GET {}", url);
        let res = Self::check_status(self.pages.get(url.clone()).send().await?)?;
        let url = res.url().clone();
        let body = res.text().await?;
        trace!("页面 {} 长度 {} 字节", url, body.len());
        Ok(Page { url, body })
    }

    /// 提交表单并返回跟随重定向后的最终地址。不检查状态码。
    pub async fn post_form(
        &self,
        url: &Url,
        headers: &[(&str, &str)],
        form: &[(&str, &str)],
    ) -> AppResult<Url> {
        debug!("POST {}", url);
        let mut request = self.pages.post(url.clone()).form(form);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let res = request.send().await?;
        debug!("POST {} -> {} ({})", url, res.url(), res.status());
        Ok(res.url().clone())
    }

    /// 视频等二进制资源的请求，最多跟随两次重定向
    pub async fn get_asset(&self, url: &Url) -> AppResult<Response> {
        debug!("GET (asset) {}", url);
        Self::check_status(self.assets.get(url.clone()).send().await?)
    }

    fn check_status(res: Response) -> AppResult<Response> {
        let status = res.status();
        if !status.is_success() {
            return Err(AppError::Http {
                url: res.url().to_string(),
                status,
            });
        }
        Ok(res)
    }
}
