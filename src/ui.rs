//! Interface de terminal do triagem — spinners e saída colorida.
//!
//! Usa as crates `indicatif` para spinners de progresso e `console` para
//! estilização com cores. O [`SubmissionProgress`] acompanha visualmente
//! o envio e a pontuação de um lote de documentos no terminal.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::orchestrator::{PhaseSink, SubmissionPhase, SubmissionRecord};
use crate::presenter::{format_percent, score_tier, ScoreTier};
use crate::screening::ScreeningReport;
use crate::workflow::Step;

/// Imprime o cabeçalho do passo atual do fluxo, ex.: `[2/3] INTAKE`.
pub fn print_step(step: Step) {
    let cyan = Style::new().cyan().bold();
    println!("{} {step}", cyan.apply_to(format!("[{}/3]", step.position())));
}

/// Indicador visual de progresso para uma submissão no terminal.
///
/// Exibe um spinner animado durante o upload e a pontuação, e mensagens
/// coloridas para sucesso (verde) e falha (vermelho).
pub struct SubmissionProgress {
    // Barra de progresso/spinner do indicatif.
    pb: ProgressBar,
    // Estilo verde para mensagens de sucesso.
    green: Style,
    // Estilo vermelho para mensagens de falha.
    red: Style,
    // Estilo amarelo para pontuações moderadas.
    yellow: Style,
}

impl SubmissionProgress {
    /// Inicia o spinner com a contagem de documentos do lote.
    pub fn start(document_count: usize) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(format!("Submitting {document_count} document(s)"));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
        }
    }

    /// Finaliza o spinner com uma mensagem de sucesso em verde.
    pub fn finish_success(&self) {
        self.pb.finish_and_clear();
        println!("  {} Screening completed", self.green.apply_to("✓"));
    }

    /// Finaliza o spinner com a mensagem de erro em vermelho.
    pub fn finish_failure(&self, message: &str) {
        self.pb.finish_and_clear();
        println!("  {} {message}", self.red.apply_to("✗"));
    }

    /// Imprime o relatório de triagem, candidato a candidato, na ordem
    /// de ranking retornada pelo serviço.
    pub fn print_report(&self, report: &ScreeningReport) {
        println!();
        println!("{}", self.green.apply_to("─── Screening Results ───"));
        for (rank, result) in report.results.iter().enumerate() {
            let percent = format_percent(result.match_score);
            let styled = match score_tier(result.match_score) {
                ScoreTier::Strong => self.green.apply_to(percent),
                ScoreTier::Moderate => self.yellow.apply_to(percent),
                ScoreTier::Weak => self.red.apply_to(percent),
            };
            println!();
            println!("{}. {} — {styled}", rank + 1, result.filename);
            println!("   {}", result.summary);
            if let Some(contact) = &result.contact_info {
                if let Some(email) = &contact.email {
                    println!("   email: {email}");
                }
                if let Some(phone) = &contact.phone {
                    println!("   phone: {phone}");
                }
            }
            for requirement in &result.requirements_analysis {
                let mark = if requirement.matched {
                    self.green.apply_to("✓")
                } else {
                    self.red.apply_to("✗")
                };
                println!(
                    "   {mark} {}: {}",
                    requirement.requirement, requirement.explanation
                );
            }
        }
    }

    /// Imprime o registro da submissão formatado em JSON com estilo colorido.
    pub fn print_record(&self, record: &SubmissionRecord) {
        println!();
        println!("{}", self.green.apply_to("─── Submission Record ───"));
        println!(
            "{}",
            serde_json::to_string_pretty(record).unwrap_or_default()
        );
    }
}

impl PhaseSink for SubmissionProgress {
    fn phase_changed(&self, phase: SubmissionPhase) {
        match phase {
            SubmissionPhase::Uploading => self.pb.set_message("UPLOADING documents"),
            SubmissionPhase::Scoring => self.pb.set_message("SCORING against criteria"),
            _ => {}
        }
    }
}
