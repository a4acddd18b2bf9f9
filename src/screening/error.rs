//! Tipos de erro para o cliente do Screening Service.
//!
//! Define [`ScreeningError`] com variantes para erros da API, falhas de rede
//! e leitura de documentos. Usa `thiserror` para derivar `Display` e `Error`
//! automaticamente a partir dos atributos `#[error(...)]`.

use thiserror::Error;

/// Erros que podem ocorrer ao interagir com o Screening Service.
///
/// As variantes cobrem os três cenários de falha:
/// - [`Api`](ScreeningError::Api) — o serviço retornou um status HTTP de erro,
///   com a mensagem de detalhe extraída do corpo `{"detail": ...}` quando presente
/// - [`Network`](ScreeningError::Network) — falha na camada de rede
/// - [`DocumentRead`](ScreeningError::DocumentRead) — o conteúdo de um documento
///   não pôde ser lido no momento do upload
#[derive(Debug, Error)]
pub enum ScreeningError {
    /// Erro retornado pelo serviço (ex.: 400 lote inválido, 404 sessão inexistente).
    #[error("screening service returned status {status}: {}", .detail.as_deref().unwrap_or("no detail provided"))]
    Api { status: u16, detail: Option<String> },

    /// Falha de rede subjacente (DNS, conexão recusada, timeout).
    /// Encapsula o erro original do `reqwest` via `#[from]`.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Falha ao materializar os bytes de um documento para envio.
    #[error("failed to read document content: {0}")]
    DocumentRead(#[from] std::io::Error),
}

impl ScreeningError {
    /// Mensagem de detalhe fornecida pelo serviço, quando houver.
    ///
    /// O orquestrador usa este acessor para aplicar a regra "detalhe do
    /// serviço ou mensagem genérica" ao popular o erro do workflow.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ScreeningError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
