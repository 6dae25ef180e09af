//! 告警分类

/// 模型在需要紧急求助时插入的固定短语
pub const ALERT_MARKER: &str = "ALERTA SOS NECESSÁRIO";

/// 提示词中要求插入标记的心率阈值（bpm）
pub const SOS_HEART_RATE_THRESHOLD: i64 = 120;

/// 文本中是否含有告警标记
///
/// 精确子串匹配，区分大小写和重音。
pub fn classify(analysis_text: &str) -> bool {
    analysis_text.contains(ALERT_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ALERTA SOS NECESSÁRIO: recomenda-se contato imediato.", true)]
    #[case("Análise: ... ALERTA SOS NECESSÁRIO", true)]
    #[case("Tudo normal.", false)]
    #[case("alerta sos necessário", false)]
    #[case("ALERTA SOS NECESSARIO", false)]
    #[case("ALERTA  SOS NECESSÁRIO", false)]
    #[case("", false)]
    fn test_classify(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(classify(text), expected);
    }
}
