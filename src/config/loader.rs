use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// 凭据所在的环境变量
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 优先级从低到高：
    /// 1. 内置默认值
    /// 2. ./config.toml
    /// 3. `VIDA_` 前缀环境变量（`__` 分隔层级，如 `VIDA_SERVER__PORT`）
    /// 4. `OPENAI_API_KEY`
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        let mut config: AppConfig = Self::figment(path).extract()?;

        if config.llm.api_key.is_empty() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                config.llm.api_key = key;
            }
        }

        Ok(config)
    }

    fn figment(path: PathBuf) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("VIDA_").split("__"))
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.llm.base_url.is_empty() {
            return Err(ConfigValidationError::MissingBaseUrl);
        }

        if config.llm.model_name.is_empty() {
            return Err(ConfigValidationError::MissingModelName);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("大模型接口地址未配置")]
    MissingBaseUrl,

    #[error("模型名称未配置")]
    MissingModelName,
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{DEFAULT_CORPUS, KnowledgeStore};
    use figment::Jail;

    #[test]
    fn test_load_defaults_without_file() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let config = ConfigLoader::load().expect("defaults");
            assert_eq!(config.server.port, 8001);
            assert_eq!(config.llm.model_name, "gemini-2.5-flash");
            assert!(config.llm.api_key.is_empty());
            Ok(())
        });
    }

    #[test]
    fn test_file_and_env_overrides() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(
                "config.toml",
                r#"
                [server]
                port = 9000

                [knowledge]
                chunk_size = 500
                chunk_overlap = 50
                "#,
            )?;
            jail.set_env("VIDA_LLM__MODEL_NAME", "gemini-2.0-flash");
            jail.set_env(API_KEY_ENV, "sk-test");

            let config = ConfigLoader::load().expect("config");
            assert_eq!(config.server.port, 9000);
            assert_eq!(config.knowledge.chunk_size, 500);
            assert_eq!(config.knowledge.chunk_overlap, 50);
            assert_eq!(config.llm.model_name, "gemini-2.0-flash");
            assert_eq!(config.llm.api_key, "sk-test");
            Ok(())
        });
    }

    #[test]
    fn test_validate() {
        let mut config = AppConfig::development();
        assert!(ConfigLoader::validate(&config).is_ok());

        // 0 表示不切分，整段作为一个片段
        config.knowledge.chunk_size = 0;
        assert!(ConfigLoader::validate(&config).is_ok());
        let store = KnowledgeStore::from_config(&config.knowledge);
        assert_eq!(store.len(), 1);
        assert_eq!(store.context(), DEFAULT_CORPUS);

        config = AppConfig::development();
        config.llm.model_name.clear();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::MissingModelName)
        ));
    }
}
