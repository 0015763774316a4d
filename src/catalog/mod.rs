// src/catalog/mod.rs

pub mod cache;
pub mod discover;

pub use discover::CatalogDiscoverer;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use std::{fmt, marker::PhantomData};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub slug: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Course {
    pub title: String,
    pub chapters: Vec<Chapter>,
}

impl Course {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            chapters: Vec::new(),
        }
    }

    /// 同一课程内 slug 重复时后写入者覆盖前者，位置保持第一次出现的位置
    pub fn insert_chapter(&mut self, slug: &str, url: &str) {
        match self.chapters.iter_mut().find(|c| c.slug == slug) {
            Some(chapter) => chapter.url = url.to_string(),
            None => self.chapters.push(Chapter {
                slug: slug.to_string(),
                url: url.to_string(),
            }),
        }
    }
}

/// 课程标题 -> (章节 slug -> 章节地址)，均保持发现时的顺序。
/// 序列化为 `{ "课程": { "slug": "url" } }` 形式的 JSON 对象。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn titles(&self) -> Vec<&str> {
        self.courses.iter().map(|c| c.title.as_str()).collect()
    }

    pub fn get(&self, title: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.title == title)
    }

    /// 同名课程覆盖旧值并保留原位置
    pub fn insert(&mut self, course: Course) {
        match self.courses.iter_mut().find(|c| c.title == course.title) {
            Some(existing) => *existing = course,
            None => self.courses.push(course),
        }
    }

    /// 白名单过滤；白名单为空时不做任何处理
    pub fn retain_titles(&mut self, whitelist: &[String]) {
        if whitelist.is_empty() {
            return;
        }
        self.courses.retain(|c| whitelist.contains(&c.title));
    }
}

impl Serialize for Course {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.chapters.len()))?;
        for chapter in &self.chapters {
            map.serialize_entry(&chapter.slug, &chapter.url)?;
        }
        map.end()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.courses.len()))?;
        for course in &self.courses {
            map.serialize_entry(&course.title, course)?;
        }
        map.end()
    }
}

/// 按出现顺序读取 JSON 对象的键值对
struct OrderedEntries<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedEntries<V> {
    type Value = Vec<(String, V)>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            entries.push((key, value));
        }
        Ok(entries)
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = deserializer.deserialize_map(OrderedEntries::<ChapterEntries>(PhantomData))?;
        let mut catalog = Catalog::new();
        for (title, ChapterEntries(chapters)) in entries {
            let mut course = Course::new(title);
            for (slug, url) in chapters {
                course.insert_chapter(&slug, &url);
            }
            catalog.insert(course);
        }
        Ok(catalog)
    }
}

struct ChapterEntries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for ChapterEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_map(OrderedEntries::<String>(PhantomData))
            .map(ChapterEntries)
    }
}
