//! Plans page: listing and checkout

use gabarita_api::CheckoutSession;
use tracing::error;

use crate::app::AppContext;
use crate::commands::Command;
use crate::error::{CliError, CliResult};
use crate::output;
use crate::views::{expect_success, load_or_default, Plan};

pub struct PlansCommand;

#[async_trait::async_trait]
impl Command for PlansCommand {
    async fn execute(&self, app: &AppContext) -> CliResult<()> {
        let plans: Vec<Plan> =
            load_or_default("plans", app.client().plans().list(app.ctx())).await?;

        output::print_header("Planos");
        if plans.is_empty() {
            output::print_info("Nenhum plano disponível no momento");
            return Ok(());
        }

        for plan in &plans {
            println!();
            let title = if plan.popular {
                format!("{} (mais popular)", plan.nome)
            } else {
                plan.nome.clone()
            };
            output::print_field(&title, &plan.price_label());
            if !plan.descricao.is_empty() {
                println!("  {}", plan.descricao);
            }
            for feature in &plan.recursos {
                println!("  ✓ {}", feature);
            }
            println!("  gabarita subscribe {}", plan.id_label());
        }
        Ok(())
    }
}

/// Start a subscription
///
/// By default a payment checkout is created and its `init_point` printed for
/// the user to open. `direct` uses the plan subscription endpoint instead.
pub struct SubscribeCommand {
    plan_id: String,
    direct: bool,
}

impl SubscribeCommand {
    pub fn new(plan_id: String, direct: bool) -> Self {
        Self { plan_id, direct }
    }

    async fn checkout(&self, app: &AppContext) -> CliResult<()> {
        let body = match app.client().payments().create(app.ctx(), &self.plan_id).await {
            Ok(body) => body,
            Err(e) if e.is_cancelled() => return Err(e.into()),
            Err(e) => {
                error!("Payment request failed: {}", e);
                return Err(CliError::Payment(e.to_string()));
            }
        };

        let checkout = CheckoutSession::from_body(&body).ok_or_else(|| {
            error!("Payment response without checkout URL: {}", body);
            CliError::Payment("missing init_point".to_string())
        })?;

        if let Some(url) = checkout.checkout_url() {
            output::print_success("Pagamento criado. Conclua a assinatura em:");
            println!("{}", url);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Command for SubscribeCommand {
    async fn execute(&self, app: &AppContext) -> CliResult<()> {
        if !self.direct {
            return self.checkout(app).await;
        }

        let body = app
            .client()
            .plans()
            .subscribe(app.ctx(), &self.plan_id)
            .await?;
        expect_success(body, "Não foi possível assinar o plano")?;
        output::print_success(&format!("Plano {} assinado", self.plan_id));
        Ok(())
    }
}
