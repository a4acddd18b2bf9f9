//! Tipos de dados para as operações do Screening Service.
//!
//! Todas as structs derivam `Serialize` e `Deserialize` para conversão JSON
//! conforme o formato retornado pelos endpoints `/upload-resumes` e
//! `/screen-resumes` do serviço.

use serde::{Deserialize, Serialize};

/// Resposta do endpoint de upload de documentos.
///
/// O `session_id` é o token opaco que correlaciona a chamada de scoring
/// subsequente com o lote enviado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Mensagem informativa do serviço (ex.: "2 resume(s) uploaded successfully").
    #[serde(default)]
    pub message: String,
    /// Identificador de sessão emitido pelo serviço após o upload.
    pub session_id: String,
}

/// Relatório completo de triagem retornado pelo endpoint de scoring.
///
/// A ordenação de `results` é autoritativa — o serviço já devolve os
/// candidatos ranqueados por pontuação e o cliente nunca reordena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    /// Resultados por candidato, na ordem de ranking do serviço.
    pub results: Vec<CandidateResult>,
    /// URL (possivelmente relativa) do relatório gerado, quando disponível.
    #[serde(default)]
    pub report_url: Option<String>,
}

/// Resultado da triagem de um único documento candidato.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    /// Nome do arquivo enviado.
    pub filename: String,
    /// Resumo textual da análise produzido pelo serviço.
    pub summary: String,
    /// Pontuação de aderência no intervalo [0,1].
    pub match_score: f64,
    /// Dados de contato extraídos do documento, quando presentes.
    #[serde(default)]
    pub contact_info: Option<ContactInfo>,
    /// Julgamento por requisito, na ordem retornada pelo serviço.
    #[serde(default)]
    pub requirements_analysis: Vec<RequirementMatch>,
}

/// Dados de contato extraídos de um documento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Julgamento de um requisito individual: atendido ou não, com justificativa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementMatch {
    pub requirement: String,
    pub matched: bool,
    pub explanation: String,
}
