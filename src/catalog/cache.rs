// src/catalog/cache.rs

use super::Catalog;
use crate::error::AppResult;
use log::{debug, info, warn};
use std::{fs, path::Path};

/// 读取缓存的课程目录。文件不存在、无法解析或为空时返回 `None`。
pub fn load(path: &Path) -> Option<Catalog> {
    if !path.is_file() {
        debug!("课程目录缓存 {:?} 不存在", path);
        return None;
    }
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("读取课程目录缓存 {:?} 失败: {}", path, e);
            return None;
        }
    };
    match serde_json::from_str::<Catalog>(&content) {
        Ok(catalog) if !catalog.is_empty() => {
            info!("使用课程目录缓存 {:?} ({} 门课程)", path, catalog.len());
            Some(catalog)
        }
        Ok(_) => {
            debug!("课程目录缓存 {:?} 为空", path);
            None
        }
        Err(e) => {
            warn!("课程目录缓存 {:?} 解析失败: {}", path, e);
            None
        }
    }
}

pub fn store(path: &Path, catalog: &Catalog) -> AppResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    let json_content = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json_content)?;
    info!("课程目录已写入缓存 {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Course;

    #[test]
    fn test_store_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("blueprint.json");
        let mut catalog = Catalog::new();
        let mut course = Course::new("Vue 3 Fundamentals");
        course.insert_chapter("intro", "https://vueschool.io/lessons/intro");
        catalog.insert(course);

        store(&path, &catalog).unwrap();
        assert_eq!(load(&path), Some(catalog));
    }

    #[test]
    fn test_missing_empty_or_corrupt_cache_is_a_miss() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        assert_eq!(load(&dir.join("absent.json")), None);

        let empty = dir.join("empty.json");
        fs::write(&empty, "{}").unwrap();
        assert_eq!(load(&empty), None);

        let empty_array = dir.join("array.json");
        fs::write(&empty_array, "[]").unwrap();
        assert_eq!(load(&empty_array), None);

        let corrupt = dir.join("corrupt.json");
        fs::write(&corrupt, "{ not json").unwrap();
        assert_eq!(load(&corrupt), None);
    }
}
