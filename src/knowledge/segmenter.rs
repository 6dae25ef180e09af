//! 文本分段器
//!
//! 按字符数切分文本，可选重叠。不感知句子或段落边界。

/// 计算相邻两段起点的间距
///
/// `overlap >= chunk_size` 时忽略重叠，步长退化为 `chunk_size`，保证始终前进。
fn stride(chunk_size: usize, overlap: usize) -> usize {
    if overlap < chunk_size {
        chunk_size - overlap
    } else {
        chunk_size
    }
}

/// 将文本切分为最多 `chunk_size` 个字符的片段
///
/// - 以 Unicode 字符计数，不会截断多字节字符
/// - `chunk_size == 0` 时整段返回
/// - 空文本返回空序列
/// - 到达文本末尾的片段即为最后一段
pub fn segment(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    if chunk_size == 0 {
        return vec![text.to_string()];
    }

    // 每个字符的字节起点，末尾补上总长度
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let total_chars = boundaries.len() - 1;

    let step = stride(chunk_size, overlap);
    let mut chunks = Vec::with_capacity(total_chars / step + 1);
    let mut start = 0;

    while start < total_chars {
        let end = (start + chunk_size).min(total_chars);
        chunks.push(text[boundaries[start]..boundaries[end]].to_string());
        if end == total_chars {
            break;
        }
        start += step;
    }

    chunks
}
