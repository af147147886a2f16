//! Login, registration and logout

use std::io::{self, BufRead, Write};

use serde_json::json;

use crate::app::AppContext;
use crate::commands::Command;
use crate::error::{CliError, CliResult};
use crate::output::{self, OutputStyle};
use crate::views::expect_success;

/// Environment variable consulted before prompting for a password
pub const PASSWORD_ENV: &str = "GABARITA_PASSWORD";

/// Password from `GABARITA_PASSWORD`, else one line read from `input`
///
/// Passwords never come from argv, where shell history and the process list
/// would expose them.
pub fn resolve_password(
    from_env: Option<String>,
    input: &mut impl BufRead,
) -> CliResult<String> {
    if let Some(password) = from_env.filter(|value| !value.is_empty()) {
        return Ok(password);
    }

    print!("{}", OutputStyle::default().prompt("Senha"));
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let password = line.trim_end_matches(&['\r', '\n'][..]).to_string();

    if password.is_empty() {
        return Err(CliError::InvalidArgument {
            message: format!("empty password (set {} or type it at the prompt)", PASSWORD_ENV),
        });
    }
    Ok(password)
}

fn password_from_env_or_stdin(known: &Option<String>) -> CliResult<String> {
    match known {
        Some(password) => Ok(password.clone()),
        None => resolve_password(std::env::var(PASSWORD_ENV).ok(), &mut io::stdin().lock()),
    }
}

pub struct LoginCommand {
    email: String,
    password: Option<String>,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Self {
        Self {
            email,
            password: Some(password),
        }
    }

    /// Ask for the password when the command runs
    pub fn prompting(email: String) -> Self {
        Self {
            email,
            password: None,
        }
    }
}

#[async_trait::async_trait]
impl Command for LoginCommand {
    async fn execute(&self, app: &AppContext) -> CliResult<()> {
        let password = password_from_env_or_stdin(&self.password)?;
        let body = app
            .client()
            .auth()
            .login(app.ctx(), &self.email, &password)
            .await?;
        expect_success(body, "Email ou senha inválidos")?;

        if !app.session().is_authenticated() {
            return Err(CliError::Rejected(
                "Login aceito, mas nenhum token foi recebido".to_string(),
            ));
        }

        output::print_success(&format!("Bem-vindo, {}", self.email));
        Ok(())
    }
}

pub struct RegisterCommand {
    name: String,
    email: String,
    password: Option<String>,
}

impl RegisterCommand {
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password: Some(password),
        }
    }

    /// Ask for the password when the command runs
    pub fn prompting(name: String, email: String) -> Self {
        Self {
            name,
            email,
            password: None,
        }
    }
}

#[async_trait::async_trait]
impl Command for RegisterCommand {
    async fn execute(&self, app: &AppContext) -> CliResult<()> {
        let password = password_from_env_or_stdin(&self.password)?;
        let user = json!({
            "nome": self.name,
            "email": self.email,
            "password": password,
        });
        let body = app.client().auth().register(app.ctx(), &user).await?;
        expect_success(body, "Não foi possível criar a conta")?;

        output::print_success("Conta criada. Faça login com 'gabarita login'.");
        Ok(())
    }
}

pub struct LogoutCommand;

#[async_trait::async_trait]
impl Command for LogoutCommand {
    async fn execute(&self, app: &AppContext) -> CliResult<()> {
        app.client().auth().logout(app.ctx())?;
        output::print_success("Sessão encerrada");
        Ok(())
    }
}
