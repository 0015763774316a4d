// src/models.rs

/// 单个文件 (章节文字或视频) 的处理结果
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ItemStatus {
    Written,
    Downloaded,
    AlreadyDownloaded,
    NoContent,
    Failed,
}

impl ItemStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Written => "已保存",
            ItemStatus::Downloaded => "下载成功",
            ItemStatus::AlreadyDownloaded => "文件已存在，跳过",
            ItemStatus::NoContent => "页面中没有下载链接",
            ItemStatus::Failed => "处理失败",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub filename: String,
    pub status: ItemStatus,
    pub message: Option<String>,
}

impl ItemOutcome {
    pub fn new(filename: impl Into<String>, status: ItemStatus) -> Self {
        Self {
            filename: filename.into(),
            status,
            message: None,
        }
    }

    pub fn failed(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            status: ItemStatus::Failed,
            message: Some(message.into()),
        }
    }

    /// 用于报告分组的原因描述
    pub fn reason(&self) -> String {
        let default_msg = self.status.label();
        match &self.message {
            Some(msg) => format!("{} ({})", default_msg, msg),
            None => default_msg.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterReport {
    pub ordinal: usize,
    pub slug: String,
    pub text: ItemOutcome,
    pub video: ItemOutcome,
}

impl ChapterReport {
    pub fn items(&self) -> [&ItemOutcome; 2] {
        [&self.text, &self.video]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseStatus {
    Processed,
    NoChapters,
    DirectoryFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseReport {
    pub title: String,
    pub dir_name: String,
    pub status: CourseStatus,
    pub chapters: Vec<ChapterReport>,
}

impl CourseReport {
    pub fn new(title: &str, dir_name: &str, status: CourseStatus) -> Self {
        Self {
            title: title.to_string(),
            dir_name: dir_name.to_string(),
            status,
            chapters: Vec::new(),
        }
    }
}
