//! Configuração do triagem carregada a partir de `triagem.toml`.
//!
//! A struct [`TriagemConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `TRIAGEM_SERVICE_URL` tem precedência sobre o arquivo.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Configuração de nível superior carregada de `triagem.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TriagemConfig {
    /// URL base do Screening Service.
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Máximo de documentos aceitos em uma sessão.
    #[serde(default = "default_max_documents")]
    pub max_documents: usize,

    /// Tamanho máximo de cada documento, em megabytes.
    #[serde(default = "default_max_document_mb")]
    pub max_document_mb: u64,
}

// Valor padrão para a URL do serviço: instância local.
fn default_service_url() -> String {
    "http://localhost:8000".to_string()
}

// Valor padrão para o máximo de documentos: 20.
fn default_max_documents() -> usize {
    20
}

// Valor padrão para o tamanho máximo por documento: 10 MB.
fn default_max_document_mb() -> u64 {
    10
}

impl Default for TriagemConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            max_documents: default_max_documents(),
            max_document_mb: default_max_document_mb(),
        }
    }
}

impl TriagemConfig {
    /// Carrega a configuração de `triagem.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self> {
        let path = Path::new("triagem.toml");
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<TriagemConfig>(&contents)?
        } else {
            Self::default()
        };

        // Variável de ambiente tem precedência sobre o arquivo de configuração para a URL.
        if let Ok(url) = std::env::var("TRIAGEM_SERVICE_URL")
            && !url.is_empty()
        {
            config.service_url = url;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = TriagemConfig::default();
        assert_eq!(config.service_url, "http://localhost:8000");
        assert_eq!(config.max_documents, 20);
        assert_eq!(config.max_document_mb, 10);
    }

    #[test]
    fn deserialize_partial_toml() {
        let toml_str = r#"
            service_url = "https://screening.internal:9443"
            max_documents = 50
        "#;
        let config: TriagemConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service_url, "https://screening.internal:9443");
        assert_eq!(config.max_documents, 50);
        assert_eq!(config.max_document_mb, 10);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: TriagemConfig = toml::from_str("").unwrap();
        assert_eq!(config, TriagemConfig::default());
    }
}
