//! Account panel

use gabarita_guard::{plan_name, PlanTier};
use serde_json::{Map, Value};
use tracing::error;

use crate::app::AppContext;
use crate::commands::{print_data, require_plan, Command};
use crate::error::CliResult;
use crate::output;
use crate::views::{expect_success, load_or_default, UserProfile};

#[derive(Debug, Clone)]
pub enum ProfileAction {
    Show,
    /// Update the given fields, others untouched
    Update {
        name: Option<String>,
        email: Option<String>,
    },
    /// Raw plan lookup
    Plan,
}

pub struct ProfileCommand {
    action: ProfileAction,
}

impl ProfileCommand {
    pub fn new(action: ProfileAction) -> Self {
        Self { action }
    }
}

#[async_trait::async_trait]
impl Command for ProfileCommand {
    async fn execute(&self, app: &AppContext) -> CliResult<()> {
        require_plan(app, PlanTier::Free).await?;

        match &self.action {
            ProfileAction::Show => show_profile(app).await,
            ProfileAction::Update { name, email } => {
                update_profile(app, name.as_deref(), email.as_deref()).await
            }
            ProfileAction::Plan => show_plan(app).await,
        }
    }
}

async fn show_profile(app: &AppContext) -> CliResult<()> {
    let profile: UserProfile =
        load_or_default("profile", app.client().users().profile(app.ctx())).await?;

    output::print_header("Minha Conta");
    let missing = "-";
    output::print_field("Nome", profile.nome.as_deref().unwrap_or(missing));
    output::print_field("Email", profile.email.as_deref().unwrap_or(missing));
    output::print_field("Plano", profile.plano.as_deref().unwrap_or(missing));
    output::print_field(
        "Membro desde",
        profile.data_cadastro.as_deref().unwrap_or(missing),
    );
    Ok(())
}

/// The plan lookup answers `{ "plano": ... }` without the usual envelope
async fn show_plan(app: &AppContext) -> CliResult<()> {
    let body = match app.client().users().plan(app.ctx()).await {
        Ok(body) => body,
        Err(e) if e.is_cancelled() => return Err(e.into()),
        Err(e) => {
            error!("Failed to load plan: {}", e);
            Value::Null
        }
    };

    match plan_fields(&body) {
        Some((name, tier)) => {
            output::print_field("Plano", name);
            output::print_field("Nível de acesso", tier.as_str());
        }
        None => print_data(&body, "Plano indisponível"),
    }
    Ok(())
}

/// Reported plan name and the tier it ranks as
fn plan_fields(body: &Value) -> Option<(&str, PlanTier)> {
    plan_name(body).map(|name| (name, PlanTier::from_wire(name)))
}

async fn update_profile(
    app: &AppContext,
    name: Option<&str>,
    email: Option<&str>,
) -> CliResult<()> {
    let mut fields = Map::new();
    if let Some(name) = name {
        fields.insert("nome".to_string(), Value::from(name));
    }
    if let Some(email) = email {
        fields.insert("email".to_string(), Value::from(email));
    }

    let body = app
        .client()
        .users()
        .update_profile(app.ctx(), &Value::Object(fields))
        .await?;
    expect_success(body, "Não foi possível atualizar o perfil")?;

    output::print_success("Perfil atualizado");
    Ok(())
}
