// src/auth.rs

use crate::{
    client::Session,
    config::credentials::Credentials,
    constants,
    error::*,
    pages::LoginPage,
};
use log::{debug, info, warn};
use url::Url;

/// 两步登录：先从登录页取得 CSRF Token，再提交账号密码。
pub struct Authenticator<'a> {
    session: &'a Session,
}

impl<'a> Authenticator<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// 网站在登录失败时同样返回 200，唯一可靠的信号是
    /// 跟随重定向后的最终地址是否为站点根地址。
    pub async fn authenticate(&self, credentials: &Credentials, canonical_root: &Url) -> AppResult<()> {
        let login_url = self.session.resolve(constants::site::LOGIN_PATH)?;
        let page = self.session.get_page(&login_url).await?;
        let token = LoginPage::parse(&page.body)
            .csrf_token()
            .ok_or(AuthError::MissingToken)?;
        debug!("已获取 CSRF Token ({} 字符)", token.len());

        let landed = self
            .session
            .post_form(
                &login_url,
                &[(constants::site::CSRF_HEADER, token.as_str())],
                &[
                    ("email", credentials.email.as_str()),
                    ("password", credentials.password.as_str()),
                ],
            )
            .await?;

        if &landed == canonical_root {
            info!("账号 {} 登录成功", credentials.email);
            Ok(())
        } else {
            warn!("登录后跳转到 {}，预期为 {}", landed, canonical_root);
            Err(AuthError::RejectedCredentials(landed.to_string()).into())
        }
    }
}
