// src/downloader/progress.rs

use crate::ui;
use indicatif::ProgressBar;

/// 单个下载的进度快照
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 服务器未给出长度时为 `None`
    pub total: Option<u64>,
    pub transferred: u64,
}

impl Progress {
    pub fn is_done(&self) -> bool {
        self.total == Some(self.transferred)
    }
}

/// 下载进度的订阅方。下载引擎只负责发出事件，如何展示由实现者决定。
pub trait ProgressSink {
    fn on_progress(&mut self, progress: Progress);

    /// 下载失败时调用，之后不会再有事件
    fn on_abort(&mut self) {}
}

/// 记录全部事件，主要用于测试
impl ProgressSink for Vec<Progress> {
    fn on_progress(&mut self, progress: Progress) {
        self.push(progress);
    }
}

/// 终端进度条：第一次拿到总长度时创建，传输完成时结束。
/// 无论成功与否，进度条都会在 drop 时被收尾。
pub struct ConsoleProgress {
    filename: String,
    pbar: Option<ProgressBar>,
}

impl ConsoleProgress {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            pbar: None,
        }
    }
}

impl ProgressSink for ConsoleProgress {
    fn on_progress(&mut self, progress: Progress) {
        if self.pbar.is_none()
            && let Some(total) = progress.total
        {
            self.pbar = Some(ui::new_bytes_progress_bar(total, &self.filename));
        }
        if let Some(pbar) = &self.pbar {
            pbar.set_position(progress.transferred);
            if progress.is_done() {
                pbar.finish();
            }
        }
    }

    fn on_abort(&mut self) {
        if let Some(pbar) = self.pbar.take() {
            pbar.abandon_with_message(format!("{} (失败)", self.filename));
        }
    }
}

impl Drop for ConsoleProgress {
    fn drop(&mut self) {
        if let Some(pbar) = self.pbar.take()
            && !pbar.is_finished()
        {
            pbar.finish_and_clear();
        }
    }
}
