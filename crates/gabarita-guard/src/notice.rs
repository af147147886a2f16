//! Restricted-access notice

use std::fmt;

use crate::tier::PlanTier;

pub const DEFAULT_FALLBACK_MESSAGE: &str =
    "Você precisa de um plano superior para acessar este conteúdo.";
pub const NOTICE_TITLE: &str = "Acesso Restrito";
pub const UPGRADE_LABEL: &str = "Fazer Upgrade do Plano";
pub const HOME_LABEL: &str = "Voltar ao Início";

/// What a denied user sees instead of the protected view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictedNotice {
    pub message: String,
    pub current: PlanTier,
    /// Plan name as the backend reported it; may be a name outside [`PlanTier`]
    pub current_name: String,
    pub required: PlanTier,
    /// Route of the plans page
    pub upgrade_route: String,
    /// Route of the home page
    pub home_route: String,
}

impl RestrictedNotice {
    pub fn title(&self) -> &'static str {
        NOTICE_TITLE
    }

    pub fn current_plan_line(&self) -> String {
        format!("Seu plano atual: {}", self.current_name)
    }

    pub fn required_plan_line(&self) -> String {
        format!("Plano necessário: {}", self.required)
    }

    /// Navigation links as `(label, route)`
    pub fn links(&self) -> [(&'static str, &str); 2] {
        [
            (UPGRADE_LABEL, self.upgrade_route.as_str()),
            (HOME_LABEL, self.home_route.as_str()),
        ]
    }
}

impl fmt::Display for RestrictedNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        writeln!(f, "{}", self.message)?;
        writeln!(f, "{}", self.current_plan_line())?;
        writeln!(f, "{}", self.required_plan_line())?;
        for (label, route) in self.links() {
            writeln!(f, "  {} -> {}", label, route)?;
        }
        Ok(())
    }
}
