//! 知识库模块
//!
//! 固定语料的分段与上下文拼接。不做向量检索，每次请求都携带完整语料。

pub mod corpus;
pub mod segmenter;
pub mod store;

pub use corpus::DEFAULT_CORPUS;
pub use segmenter::segment;
pub use store::{CHUNK_SEPARATOR, KnowledgeChunk, KnowledgeStore};
