//! 生成结果解析
//!
//! 不同后端返回的结构不一致：有的直接给出 `text`，OpenAI 兼容接口放在
//! `choices[].message.content`，Gemini 原生接口放在 `candidates[].content.parts[].text`。
//! 这里把它们统一成 [`GeneratedContent`]，按固定优先级取值。

use serde::Deserialize;

/// 后端响应体
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CompletionResponse {
    pub text: Option<String>,
    pub output_text: Option<String>,
    pub choices: Vec<Choice>,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CandidateContent {
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CandidatePart {
    pub text: Option<String>,
}

/// 提取出的生成内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedContent {
    /// 顶层文本字段
    Direct(String),
    /// OpenAI 兼容的 choice
    Choice(String),
    /// 嵌套的 candidate
    Candidate(String),
    /// 没有可用文本
    Unusable,
}

impl GeneratedContent {
    /// 可用时返回文本（已去除首尾空白）
    pub fn into_text(self) -> Option<String> {
        match self {
            GeneratedContent::Direct(text)
            | GeneratedContent::Choice(text)
            | GeneratedContent::Candidate(text) => Some(text),
            GeneratedContent::Unusable => None,
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            GeneratedContent::Direct(_) => "direct",
            GeneratedContent::Choice(_) => "choice",
            GeneratedContent::Candidate(_) => "candidate",
            GeneratedContent::Unusable => "unusable",
        }
    }
}

/// 空白字符串视为缺失
fn usable(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

impl CompletionResponse {
    fn direct_text(&self) -> Option<String> {
        usable(self.text.as_deref()).or_else(|| usable(self.output_text.as_deref()))
    }

    fn choice_text(&self) -> Option<String> {
        let choice = self.choices.first()?;
        usable(
            choice
                .message
                .as_ref()
                .and_then(|m| m.content.as_deref()),
        )
        .or_else(|| usable(choice.text.as_deref()))
    }

    fn candidate_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let joined: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        usable(Some(joined.as_str()))
    }

    /// 依次尝试 direct → choice → candidate
    pub fn content(&self) -> GeneratedContent {
        if let Some(text) = self.direct_text() {
            return GeneratedContent::Direct(text);
        }
        if let Some(text) = self.choice_text() {
            return GeneratedContent::Choice(text);
        }
        if let Some(text) = self.candidate_text() {
            return GeneratedContent::Candidate(text);
        }
        GeneratedContent::Unusable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> CompletionResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_openai_choice() {
        let response = parse(json!({
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "  Tudo normal.\n"}}]
        }));

        assert_eq!(
            response.content(),
            GeneratedContent::Choice("Tudo normal.".to_string())
        );
    }

    #[test]
    fn test_direct_text_wins() {
        let response = parse(json!({
            "text": "direto",
            "choices": [{"message": {"content": "escolha"}}],
            "candidates": [{"content": {"parts": [{"text": "candidato"}]}}]
        }));

        assert_eq!(response.content(), GeneratedContent::Direct("direto".to_string()));
    }

    #[test]
    fn test_blank_direct_falls_through() {
        let response = parse(json!({
            "text": "   ",
            "candidates": [{"content": {"parts": [{"text": "ALERTA "}, {"text": "SOS NECESSÁRIO"}]}}]
        }));

        let content = response.content();
        assert_eq!(content.source(), "candidate");
        assert_eq!(content.into_text().unwrap(), "ALERTA SOS NECESSÁRIO");
    }

    #[test]
    fn test_null_message_content_is_unusable() {
        let response = parse(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }));

        assert_eq!(response.content(), GeneratedContent::Unusable);
        assert!(response.content().into_text().is_none());
    }

    #[test]
    fn test_empty_object_is_unusable() {
        assert_eq!(parse(json!({})).content(), GeneratedContent::Unusable);
    }
}
