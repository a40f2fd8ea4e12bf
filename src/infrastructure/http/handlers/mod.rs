//! HTTP Handlers
//!
//! 校验中间件已经把 `User` / `UserName` / `PostText` 放入请求 extensions，
//! handler 只负责调用应用层并转换响应

mod ping;
mod posts;
mod users;

pub use ping::*;
pub use posts::*;
pub use users::*;
