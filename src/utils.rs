// src/utils.rs

use heck::ToTitleCase;
use regex::Regex;
use std::sync::LazyLock;

static ILLEGAL_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static ACTIVITY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/activity/[0-9]{3}$").unwrap());

/// 课程标题 -> 目录名：非法字符替换为空格，连续空白合并为单个下划线。
/// 结果只能是保存目录下的一级子目录，`.` 和 `..` 之类同样视为空标题。
pub fn sanitize_course_title(title: &str) -> String {
    let name = ILLEGAL_CHARS_RE.replace_all(title, " ");
    let name = WHITESPACE_RE.replace_all(name.trim(), "_");
    if name.chars().all(|c| c == '.') {
        return "untitled".to_string();
    }
    name.into_owned()
}

/// `007-intro-to-vue.md`
pub fn chapter_file_name(ordinal: usize, slug: &str, ext: &str) -> String {
    format!("{:03}-{}.{}", ordinal, slug, ext)
}

/// 测验/练习页面 (`/activity/042`) 不包含可下载内容
pub fn is_activity_url(url: &str) -> bool {
    ACTIVITY_RE.is_match(url)
}

/// 去掉 `#fragment` 后的链接与其最后一段路径 (章节 slug)
pub fn split_chapter_href(href: &str) -> (&str, &str) {
    let url = href.split('#').next().unwrap_or(href);
    let slug = url.rsplit('/').next().unwrap_or(url);
    (url, slug)
}

/// `intro-to-vue` -> `Intro To Vue`，仅用于显示
pub fn dashes_to_title(slug: &str) -> String {
    slug.to_title_case()
}

pub fn truncate_text(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut end_pos = 0;
    for (i, c) in text.char_indices() {
        width += if c.is_ascii() { 1 } else { 2 };
        if width > max_width.saturating_sub(3) {
            end_pos = i;
            break;
        }
    }
    if end_pos == 0 { text.to_string() } else { format!("{}...", &text[..end_pos]) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_course_title() {
        assert_eq!(sanitize_course_title("Vue: Components & Props"), "Vue_Components_&_Props");
        assert_eq!(sanitize_course_title("  Nuxt   3  Fundamentals "), "Nuxt_3_Fundamentals");
        assert_eq!(sanitize_course_title("a<b>c\"d/e\\f|g?h*i"), "a_b_c_d_e_f_g_h_i");
        assert_eq!(sanitize_course_title("Tabs\tand\nnewlines"), "Tabs_and_newlines");
        assert_eq!(sanitize_course_title("???"), "untitled");
    }

    #[test]
    fn test_sanitize_never_leaves_the_parent_directory() {
        assert_eq!(sanitize_course_title(".."), "untitled");
        assert_eq!(sanitize_course_title("."), "untitled");
        assert_eq!(sanitize_course_title(" ... "), "untitled");
        assert_eq!(sanitize_course_title("../etc"), ".._etc");
        assert_eq!(sanitize_course_title("Vue 3.x"), "Vue_3.x");
    }

    #[test]
    fn test_chapter_file_name() {
        assert_eq!(chapter_file_name(7, "intro-to-vue", "md"), "007-intro-to-vue.md");
        assert_eq!(chapter_file_name(7, "intro-to-vue", "mp4"), "007-intro-to-vue.mp4");
        assert_eq!(chapter_file_name(1234, "x", "md"), "1234-x.md");
    }

    #[test]
    fn test_is_activity_url() {
        assert!(is_activity_url("https://vueschool.io/lessons/activity/042"));
        assert!(is_activity_url("/activity/999"));
        assert!(!is_activity_url("https://vueschool.io/lessons/activity/4"));
        assert!(!is_activity_url("https://vueschool.io/lessons/activity/0421"));
        assert!(!is_activity_url("https://vueschool.io/lessons/activity/042/next"));
        assert!(!is_activity_url("https://vueschool.io/lessons/intro-to-vue"));
    }

    #[test]
    fn test_split_chapter_href() {
        assert_eq!(
            split_chapter_href("/lessons/intro-to-vue#player"),
            ("/lessons/intro-to-vue", "intro-to-vue")
        );
        assert_eq!(
            split_chapter_href("https://vueschool.io/courses/x/lessons/props"),
            ("https://vueschool.io/courses/x/lessons/props", "props")
        );
        assert_eq!(split_chapter_href("plain"), ("plain", "plain"));
    }

    #[test]
    fn test_dashes_to_title() {
        assert_eq!(dashes_to_title("intro-to-vue"), "Intro To Vue");
        assert_eq!(dashes_to_title("props"), "Props");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a very long course title", 10), "a very ...");
    }
}
