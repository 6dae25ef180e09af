//! 提示词模块
//!
//! 把知识库上下文和生命体征读数拼成一条固定格式的提示词。

use crate::models::vitals::VitalReading;
use crate::services::alert::{ALERT_MARKER, SOS_HEART_RATE_THRESHOLD};

/// 系统角色设定
pub const SYSTEM_PROMPT: &str =
    "Você é um assistente de saúde mental empático e especializado em idosos.";

/// 构建分析提示词
///
/// 只引用读数中的四个字段。告警标记由模型按指令自行插入，这里不根据心率做任何判断。
pub fn build_prompt(context: &str, reading: &VitalReading) -> String {
    format!(
        "{persona}
Sua tarefa é analisar os dados vitais de um idoso e, com base na Base de Conhecimento fornecida, gerar uma análise e uma recomendação.

**Base de Conhecimento:**
{context}

**Dados Vitais do Idoso (ID: {user_id}):**
- Frequência Cardíaca em Repouso: {heart_rate} bpm
- Duração do Sono (última noite): {sleep:?} horas
- Contagem de Passos (últimas 24h): {steps} passos

**Instruções para a Resposta:**
1. **Análise:** Identifique o sintoma mais preocupante (se houver) e o relacione com a Base de Conhecimento.
2. **Recomendação:** Forneça uma recomendação clara, empática e não alarmista.
3. **Alerta SOS:** Se a Frequência Cardíaca for superior a {threshold} bpm, inclua a frase \"{marker}\" no início da análise.

Formato da Resposta (apenas o texto):
[Análise e Recomendação]
",
        persona = SYSTEM_PROMPT,
        context = context,
        user_id = reading.user_id,
        heart_rate = reading.heart_rate,
        sleep = reading.sleep_duration_hours,
        steps = reading.steps_count,
        threshold = SOS_HEART_RATE_THRESHOLD,
        marker = ALERT_MARKER,
    )
}
