//! Interface de linha de comando do triagem baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (screen, demo)
//! e flags globais (--service-url, --verbose).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// triagem — Cliente de triagem de currículos contra um Screening Service.
#[derive(Debug, Parser)]
#[command(name = "triagem", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// URL base do Screening Service, sobrepondo a configuração.
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Executa a triagem completa: critérios, documentos, envio e resultados.
    Screen {
        /// Texto dos critérios da vaga.
        #[arg(long, conflicts_with = "criteria_file")]
        criteria: Option<String>,

        /// Caminho para um arquivo de texto contendo os critérios.
        #[arg(long)]
        criteria_file: Option<PathBuf>,

        /// Documentos candidatos (PDF ou DOCX).
        #[arg(required = true)]
        documents: Vec<PathBuf>,

        /// Salva o relatório gerado pelo serviço neste caminho.
        #[arg(long)]
        save_report: Option<PathBuf>,
    },

    /// Executa a demonstração embutida com um backend local simulado.
    Demo,
}
