// src/pages/mod.rs

//! 每种页面一个访问器，所有 CSS 选择器都集中在这里。
//! 网站改版时只需要修改对应的访问器。

pub mod chapter;
pub mod chapter_index;
pub mod course_index;
pub mod login;

pub use chapter::ChapterPage;
pub use chapter_index::ChapterIndexPage;
pub use course_index::{CourseIndexPage, CourseLink};
pub use login::LoginPage;

use scraper::{ElementRef, Selector};

/// 选择器都是编译期写死的字面量，解析失败属于程序错误
fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("无效的 CSS 选择器 '{}': {:?}", css, e))
}

/// 元素文本，空白折叠为单个空格
fn normalized_text(element: ElementRef<'_>) -> String {
    element.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ")
}
