//! 内置知识库
//!
//! 老年人心理健康与幸福感参考资料（葡萄牙语），进程启动时加载一次。

pub const DEFAULT_CORPUS: &str = "
# Base de Conhecimento: Saúde Mental e Bem-Estar de Idosos

## Sinais de Estresse e Ansiedade em Idosos
- Aumento súbito da frequência cardíaca (acima de 100 bpm em repouso) sem esforço físico.
- Padrões de sono interrompidos ou insônia por mais de 3 dias seguidos.
- Redução drástica na contagem de passos diários (abaixo de 1000).
- Alterações de humor, irritabilidade ou isolamento social.

## Recomendações para Frequência Cardíaca Elevada
- Se a frequência cardíaca estiver acima de 120 bpm em repouso, acionar o alerta SOS.
- Entre 100-120 bpm, sugerir técnicas de respiração e relaxamento.
- Recomendar contato com o cuidador para verificação do estado emocional.

## Recomendações para Distúrbios do Sono
- Sugerir rotina de sono regular e evitar telas antes de dormir.
- Se a insônia persistir, recomendar atividade física leve durante o dia.

## Recomendações para Baixa Atividade Física
- Incentivar caminhadas leves e exercícios de alongamento.
- Se a contagem de passos for consistentemente baixa, verificar se há dor ou desconforto.

## Tom de Comunicação
- A comunicação deve ser empática, clara e não alarmista.
- Sempre sugerir a consulta a um profissional de saúde em caso de persistência dos sintomas.
";
