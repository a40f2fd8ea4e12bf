//! Post Context - Value Objects

use super::PostError;

/// 帖子唯一标识
pub type PostId = i64;

/// 帖子正文
///
/// 不变量: 已去除首尾空白，且不为空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostText(String);

impl PostText {
    pub fn parse(raw: &str) -> Result<Self, PostError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(PostError::MissingText);
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
