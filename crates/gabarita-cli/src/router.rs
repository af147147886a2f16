// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gabarita_api::ExamConfig;
use gabarita_guard::PlanTier;

use crate::app::AppContext;
use crate::commands::*;
use crate::error::CliResult;

/// Gabarita - study and exam practice from the terminal
#[derive(Parser, Debug)]
#[command(name = "gabarita")]
#[command(bin_name = "gabarita")]
#[command(about = "Study and exam practice client for the Gabarita platform")]
#[command(version)]
#[command(author = "Gabarita Contributors")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Backend base URL (overrides GABARITA_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Sign in and store the session token
    ///
    /// The password is read from GABARITA_PASSWORD or prompted for.
    Login {
        #[arg(value_name = "EMAIL")]
        email: String,
    },

    /// Create an account
    ///
    /// The password is read from GABARITA_PASSWORD or prompted for.
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,
    },

    /// Drop the stored session
    Logout,

    /// Account panel
    Profile {
        #[command(subcommand)]
        action: Option<ProfileSubcommand>,
    },

    /// List available plans
    Plans,

    /// Subscribe to a plan (prints the payment checkout URL)
    Subscribe {
        #[arg(value_name = "PLAN")]
        plan_id: String,

        /// Subscribe through the plans endpoint without a payment checkout
        #[arg(long)]
        direct: bool,
    },

    /// Payment history and status
    Payments {
        #[command(subcommand)]
        action: Option<PaymentsSubcommand>,
    },

    /// Study statistics
    Dashboard,

    /// Practice exams
    Exam {
        #[command(subcommand)]
        action: ExamSubcommand,
    },

    /// Question bank
    Questions {
        #[command(subcommand)]
        action: Option<QuestionsSubcommand>,
    },

    /// Essays
    Essay {
        #[command(subcommand)]
        action: EssaySubcommand,
    },

    /// Platform news
    News {
        #[arg(value_name = "ID")]
        id: Option<String>,
    },

    /// Rankings
    Ranking {
        /// Ranking type
        #[arg(value_name = "TYPE")]
        kind: Option<String>,

        /// Show your own position
        #[arg(long, conflicts_with = "kind")]
        me: bool,
    },

    /// Help center
    Support {
        #[command(subcommand)]
        action: Option<SupportSubcommand>,
    },

    /// Check whether your plan grants access to a tier's content
    Access {
        /// gratuito, basico, premium or vip
        #[arg(value_name = "TIER")]
        tier: PlanTier,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProfileSubcommand {
    /// Show the account panel
    Show,
    /// Update profile fields
    Update {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },
    /// Raw plan lookup
    Plan,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PaymentsSubcommand {
    History,
    Verify {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ExamSubcommand {
    /// Create a practice exam
    Create {
        #[arg(long, default_value = "matematica")]
        subject: String,

        #[arg(long, default_value = "medio")]
        difficulty: String,

        #[arg(long, default_value_t = 10)]
        questions: u32,

        /// Time limit in minutes
        #[arg(long, default_value_t = 60)]
        time: u32,
    },
    List,
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Finish an exam
    Submit {
        #[arg(value_name = "ID")]
        id: String,

        /// Answers as JSON
        #[arg(long)]
        answers: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum QuestionsSubcommand {
    List {
        /// Filters as key=value
        #[arg(value_name = "FILTER")]
        filters: Vec<String>,
    },
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },
    Answer {
        #[arg(value_name = "ID")]
        id: String,

        #[arg(value_name = "ANSWER")]
        answer: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum EssaySubcommand {
    Submit {
        #[arg(long)]
        theme: String,

        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        #[arg(long)]
        file: Option<PathBuf>,
    },
    List,
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum SupportSubcommand {
    Faq,
    Ticket {
        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,
    },
    Tickets,
}

/// Route commands to their handlers
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();

        crate::logging::init_logging(cli.verbose, cli.quiet);

        let app = AppContext::load(cli.api_url.as_deref())?;
        app.cancel_on_ctrl_c();

        Self::execute(&cli.command, &app).await
    }

    /// Execute a command
    pub async fn execute(command: &Commands, app: &AppContext) -> CliResult<()> {
        Self::handler(command).execute(app).await
    }

    /// Handler for a parsed command
    pub fn handler(command: &Commands) -> Box<dyn Command> {
        match command.clone() {
            Commands::Login { email } => Box::new(LoginCommand::prompting(email)),
            Commands::Register { name, email } => {
                Box::new(RegisterCommand::prompting(name, email))
            }
            Commands::Logout => Box::new(LogoutCommand),
            Commands::Profile { action } => Box::new(ProfileCommand::new(match action {
                Some(ProfileSubcommand::Show) | None => ProfileAction::Show,
                Some(ProfileSubcommand::Update { name, email }) => {
                    ProfileAction::Update { name, email }
                }
                Some(ProfileSubcommand::Plan) => ProfileAction::Plan,
            })),
            Commands::Plans => Box::new(PlansCommand),
            Commands::Subscribe { plan_id, direct } => {
                Box::new(SubscribeCommand::new(plan_id, direct))
            }
            Commands::Payments { action } => Box::new(PaymentsCommand::new(match action {
                Some(PaymentsSubcommand::History) | None => PaymentsAction::History,
                Some(PaymentsSubcommand::Verify { id }) => PaymentsAction::Verify { id },
            })),
            Commands::Dashboard => Box::new(DashboardCommand),
            Commands::Exam { action } => Box::new(ExamCommand::new(match action {
                ExamSubcommand::Create {
                    subject,
                    difficulty,
                    questions,
                    time,
                } => ExamAction::Create(ExamConfig {
                    subject,
                    difficulty,
                    question_count: questions,
                    time_limit_minutes: time,
                }),
                ExamSubcommand::List => ExamAction::List,
                ExamSubcommand::Show { id } => ExamAction::Show { id },
                ExamSubcommand::Submit { id, answers } => ExamAction::Submit { id, answers },
            })),
            Commands::Questions { action } => Box::new(QuestionsCommand::new(match action {
                Some(QuestionsSubcommand::List { filters }) => QuestionsAction::List { filters },
                None => QuestionsAction::List {
                    filters: Vec::new(),
                },
                Some(QuestionsSubcommand::Show { id }) => QuestionsAction::Show { id },
                Some(QuestionsSubcommand::Answer { id, answer }) => {
                    QuestionsAction::Answer { id, answer }
                }
            })),
            Commands::Essay { action } => Box::new(EssayCommand::new(match action {
                EssaySubcommand::Submit { theme, text, file } => {
                    EssayAction::Submit { theme, text, file }
                }
                EssaySubcommand::List => EssayAction::List,
                EssaySubcommand::Show { id } => EssayAction::Show { id },
            })),
            Commands::News { id } => Box::new(NewsCommand::new(id)),
            Commands::Ranking { kind, me } => Box::new(RankingCommand::new(kind, me)),
            Commands::Support { action } => Box::new(SupportCommand::new(match action {
                Some(SupportSubcommand::Faq) | None => SupportAction::Faq,
                Some(SupportSubcommand::Ticket { subject, message }) => {
                    SupportAction::Ticket { subject, message }
                }
                Some(SupportSubcommand::Tickets) => SupportAction::Tickets,
            })),
            Commands::Access { tier } => Box::new(AccessCommand::new(tier)),
        }
    }
}
