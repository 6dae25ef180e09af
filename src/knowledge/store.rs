use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::config::KnowledgeConfig;
use crate::knowledge::corpus::DEFAULT_CORPUS;
use crate::knowledge::segmenter::segment;

/// 片段之间的分隔符
pub const CHUNK_SEPARATOR: &str = "\n---\n";

/// 知识片段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeChunk {
    /// 片段文本
    pub content: String,
    /// 在语料中的序号
    pub position: usize,
}

/// 只读知识库
///
/// 启动时构建一次，之后所有请求共享同一份片段序列。不做相关性排序，
/// `context()` 总是返回全部片段。
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    chunks: Vec<KnowledgeChunk>,
}

impl KnowledgeStore {
    /// 切分语料并建立知识库
    pub fn from_corpus(corpus: &str, chunk_size: usize, overlap: usize) -> Self {
        let chunks = segment(corpus, chunk_size, overlap)
            .into_iter()
            .enumerate()
            .map(|(position, content)| KnowledgeChunk { content, position })
            .collect();

        Self { chunks }
    }

    /// 使用内置语料
    pub fn from_config(config: &KnowledgeConfig) -> Self {
        let store = Self::from_corpus(DEFAULT_CORPUS, config.chunk_size, config.chunk_overlap);
        info!(
            chunks = store.len(),
            chunk_size = config.chunk_size,
            chunk_overlap = config.chunk_overlap,
            "Knowledge store initialized"
        );
        store
    }

    pub fn chunks(&self) -> &[KnowledgeChunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// 按原始顺序拼接全部片段
    pub fn context(&self) -> String {
        self.chunks
            .iter()
            .map(|c| c.content.as_str())
            .collect::<Vec<&str>>()
            .join(CHUNK_SEPARATOR)
    }
}
