//! Dashboard page

use gabarita_guard::PlanTier;
use serde_json::Value;

use crate::app::AppContext;
use crate::commands::{print_data, require_plan, Command};
use crate::error::CliResult;
use crate::output;
use crate::views::{load_or_default, DashboardStats};

pub struct DashboardCommand;

#[async_trait::async_trait]
impl Command for DashboardCommand {
    async fn execute(&self, app: &AppContext) -> CliResult<()> {
        require_plan(app, PlanTier::Basic).await?;

        let dashboard = app.client().dashboard();
        let stats: DashboardStats = load_or_default("stats", dashboard.stats(app.ctx())).await?;

        output::print_header("Dashboard");
        output::print_field(
            "Simulados realizados",
            &stats.simulados_realizados.to_string(),
        );
        output::print_field(
            "Questões respondidas",
            &stats.questoes_respondidas.to_string(),
        );
        output::print_field("Taxa de acerto", &format!("{}%", stats.hit_rate()));
        output::print_field("Média geral", &format!("{:.1}", stats.media_geral));
        output::print_field("Tempo de estudo", &format!("{}h", stats.tempo_estudo));

        let progress: Value =
            load_or_default("progress", dashboard.progress(app.ctx())).await?;
        println!();
        output::print_header("Progresso");
        print_data(&progress, "Sem progresso registrado");

        let activity: Value =
            load_or_default("recent activity", dashboard.recent_activity(app.ctx())).await?;
        println!();
        output::print_header("Atividades recentes");
        print_data(&activity, "Nenhuma atividade recente");

        Ok(())
    }
}
