// src/downloader/engine.rs

use super::progress::{Progress, ProgressSink};
use crate::{client::Session, error::*};
use anyhow::anyhow;
use futures::StreamExt;
use log::{debug, warn};
use std::{
    fs::{self, File},
    io::{self, Write as IoWrite},
    path::{Path, PathBuf},
};
use url::Url;

/// 下载中的临时文件 (`<目标>.part`)。`commit` 时改名为目标文件，
/// 否则在 drop 时删除，目标路径上只会出现完整的文件。
struct PartialFile {
    path: PathBuf,
    destination: PathBuf,
    file: Option<File>,
}

impl PartialFile {
    fn create(destination: &Path) -> io::Result<Self> {
        let mut name = destination.as_os_str().to_owned();
        name.push(".part");
        let path = PathBuf::from(name);
        Ok(Self {
            file: Some(File::create(&path)?),
            path,
            destination: destination.to_path_buf(),
        })
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.write_all(buf),
            None => Err(io::Error::other("文件已关闭")),
        }
    }

    fn commit(mut self) -> io::Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
        }
        fs::rename(&self.path, &self.destination)?;
        // 已提交，不再删除
        self.path = PathBuf::new();
        Ok(())
    }
}

impl Drop for PartialFile {
    fn drop(&mut self) {
        if self.path.as_os_str().is_empty() {
            return;
        }
        drop(self.file.take());
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("已删除未完成的文件 {:?}", self.path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("删除未完成的文件 {:?} 失败: {}", self.path, e),
        }
    }
}

/// 一次性写入小文件 (章节文字)，同样经过 `.part` 临时文件，
/// 中途失败时目标路径上不会出现残缺内容。
pub(crate) fn write_file(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = PartialFile::create(destination)?;
    file.write_all(contents)?;
    file.commit()
}

pub struct DownloadEngine<'a> {
    session: &'a Session,
}

impl<'a> DownloadEngine<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// 将 `url` 流式写入 `destination`，返回写入的字节数。
    /// 失败时目标文件被删除，进度订阅方收到 `on_abort`。
    pub async fn download(
        &self,
        url: &Url,
        destination: &Path,
        sink: &mut dyn ProgressSink,
    ) -> AppResult<u64> {
        let result = self.stream_to_file(url, destination, sink).await;
        if let Err(e) = &result {
            warn!("下载 {} -> {:?} 失败: {}", url, destination, e);
            sink.on_abort();
        }
        result
    }

    async fn stream_to_file(
        &self,
        url: &Url,
        destination: &Path,
        sink: &mut dyn ProgressSink,
    ) -> AppResult<u64> {
        let res = self.session.get_asset(url).await?;
        let total = res.content_length();
        debug!("开始下载 {} (大小: {:?})", res.url(), total);

        let mut file = PartialFile::create(destination)?;
        let mut transferred = 0u64;
        sink.on_progress(Progress { total, transferred });

        let mut stream = res.bytes_stream();
        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result?;
            file.write_all(&chunk)?;
            transferred += chunk.len() as u64;
            sink.on_progress(Progress { total, transferred });
        }

        if let Some(expected) = total
            && transferred != expected
        {
            return Err(AppError::Other(anyhow!(
                "下载不完整 (预期 {} 字节，实际 {} 字节)",
                expected,
                transferred
            )));
        }

        file.commit()?;
        Ok(transferred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_removed_unless_committed() {
        let dir = tempfile::tempdir().unwrap();
        let dropped = dir.path().join("dropped.mp4");
        {
            let mut file = PartialFile::create(&dropped).unwrap();
            file.write_all(b"partial").unwrap();
            assert!(dir.path().join("dropped.mp4.part").exists());
        }
        assert!(!dropped.exists());
        assert!(!dir.path().join("dropped.mp4.part").exists());

        let kept = dir.path().join("kept.mp4");
        let mut file = PartialFile::create(&kept).unwrap();
        file.write_all(b"complete").unwrap();
        file.commit().unwrap();
        assert_eq!(fs::read(&kept).unwrap(), b"complete");
        assert!(!dir.path().join("kept.mp4.part").exists());
    }

    #[test]
    fn test_write_file_replaces_nothing_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let notes = dir.path().join("001-intro.md");
        write_file(&notes, b"# Intro<br>body").unwrap();
        assert_eq!(fs::read_to_string(&notes).unwrap(), "# Intro<br>body");
        assert!(!dir.path().join("001-intro.md.part").exists());

        // 目标路径被目录占用：改名失败，临时文件被清理
        let blocked = dir.path().join("002-props.md");
        fs::create_dir(&blocked).unwrap();
        assert!(write_file(&blocked, b"# Props<br>body").is_err());
        assert!(blocked.is_dir());
        assert!(!dir.path().join("002-props.md.part").exists());

        let missing_dir = dir.path().join("absent").join("003-x.md");
        assert!(write_file(&missing_dir, b"x").is_err());
        assert!(!missing_dir.exists());
    }
}
