use anyhow::Context;
use clap::{Parser, Subcommand};
use inscription::registration::{
    choices, ClientConfig, HttpBackend, Language, Notification, NotificationLevel, Role,
    RoleSelector, UniquenessChecker, UniquenessFailurePolicy, Ui,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "inscription")]
#[command(about = "Register students, instructors and admins against the registration backend")]
struct Args {
    #[clap(long, default_value = "inscription.toml")]
    config: String,

    /// Override the backend base URL from the config file
    #[clap(long)]
    base_url: Option<String>,

    /// Override the notification language
    #[clap(long)]
    ui_language: Option<Language>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register a new user
    Register {
        #[arg(long)]
        role: Role,
        /// Field value as key=value, repeatable
        #[arg(long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
        /// Abort when the email check cannot reach the backend
        #[arg(long)]
        fail_closed: bool,
    },
    /// Ask the backend whether an email is already registered
    CheckEmail {
        #[arg(long)]
        role: Role,
        #[arg(long)]
        email: String,
    },
    /// List the fields of a role's form
    Fields {
        #[arg(long)]
        role: Role,
    },
}

/// Terminal stand-in for toasts and page navigation.
struct TerminalUi;

impl Ui for TerminalUi {
    fn notify(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => println!("[ok] {}", notification.message),
            NotificationLevel::Error => eprintln!("[error] {}", notification.message),
        }
    }

    fn navigate(&mut self, route: &str) {
        println!("-> {}", route);
    }
}

fn parse_field(raw: &str) -> anyhow::Result<(&str, &str)> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim(), v))
        .with_context(|| format!("field '{}' is not in KEY=VALUE form", raw))
}

async fn register(
    cfg: &ClientConfig,
    role: Role,
    fields: &[String],
    fail_closed: bool,
) -> anyhow::Result<()> {
    let mut cfg = cfg.clone();
    if fail_closed {
        cfg.uniqueness_failure = UniquenessFailurePolicy::FailClosed;
    }

    let backend = Arc::new(HttpBackend::new(cfg.clone()).context("build backend client")?);
    let mut selector = RoleSelector::new(backend, &cfg);
    selector.select(role);

    for raw in fields {
        let (key, value) = parse_field(raw)?;
        selector
            .set_field(key, value)
            .with_context(|| format!("set field '{}'", key))?;
    }

    let submitted = selector
        .submit(&mut TerminalUi)
        .await
        .with_context(|| format!("{} registration", role))?;
    println!("id: {}", submitted.id);
    Ok(())
}

async fn check_email(cfg: &ClientConfig, role: Role, email: &str) -> anyhow::Result<()> {
    let backend = Arc::new(HttpBackend::new(cfg.clone()).context("build backend client")?);
    let checker = UniquenessChecker::new(backend, cfg.uniqueness_failure);
    let exists = checker
        .email_exists(role, email)
        .await
        .context("check email")?;

    if exists {
        println!("{} is already registered as {}", email, role);
    } else {
        println!("{} is free for {}", email, role);
    }
    Ok(())
}

fn list_fields(role: Role) {
    let descriptor = role.descriptor();
    println!("{} ({})", role, descriptor.route);
    for field in descriptor.fields {
        match choices::options_for(field) {
            Some(options) => println!("  {:<14} one of: {}", field, options.join(" | ")),
            None => println!("  {}", field),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("inscription=info")),
        )
        .init();

    let args = Args::parse();
    let mut cfg = ClientConfig::load(&args.config).context("load config")?;

    if let Some(base_url) = args.base_url {
        cfg.base_url = base_url;
    }
    if let Some(language) = args.ui_language {
        cfg.ui_language = language;
    }
    cfg.validate().context("validate config")?;

    info!("Using backend {}", cfg.base_url);

    match args.command {
        Commands::Register {
            role,
            fields,
            fail_closed,
        } => register(&cfg, role, &fields, fail_closed).await,
        Commands::CheckEmail { role, email } => check_email(&cfg, role, &email).await,
        Commands::Fields { role } => {
            list_fields(role);
            Ok(())
        }
    }
}
