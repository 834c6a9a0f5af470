use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use opencrow::components::account_row::render_account_row;
use opencrow::components::header::{render_footer, render_header};
use opencrow::components::quota_card::{platform_icon, render_quota_line};
use opencrow::components::quota_plan::{render_recommendations, render_schedule};
use opencrow::config::{API_URL_ENV, DEFAULT_API_URL, HOME_ENV};
use opencrow::net::types::{AccountQuota, GuideLookup};
use opencrow::pages::Outcome;
use opencrow::pages::accounts::{self, AccountsPage};
use opencrow::pages::dashboard::{self, DashboardPage};
use opencrow::pages::guides::{self, GuidesPage};
use opencrow::pages::session::SessionPage;
use opencrow::pages::settings::{self, SettingsPage};
use opencrow::state::accounts::AccountForm;
use opencrow::util::prompt::{Prompt, TerminalPrompt};
use opencrow::{ApiClient, ApiError, Backend, ClientConfig};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}")]
    Failed(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "opencrow", about = "Open Crow AI quota dashboard CLI")]
struct Cli {
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    base_url: String,

    /// Directory holding the session file (default `~/.opencrow`).
    #[arg(long, env = HOME_ENV)]
    home: Option<PathBuf>,

    /// Print raw backend JSON instead of rendered pages.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Answer yes to every confirmation.
    #[arg(long, short = 'y', global = true, default_value_t = false)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    Register(CredentialArgs),
    Login(CredentialArgs),
    Logout,
    Whoami,
    Dashboard,
    Accounts(AccountsCommand),
    Quota(QuotaCommand),
    Guides(GuidesCommand),
    Settings(SettingsCommand),
}

#[derive(Args, Debug)]
struct CredentialArgs {
    email: String,

    #[arg(long, env = "OPENCROW_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Args, Debug)]
struct AccountsCommand {
    #[command(subcommand)]
    command: AccountsSubcommand,
}

#[derive(Subcommand, Debug)]
enum AccountsSubcommand {
    List,
    Show {
        id: i64,
    },
    Add {
        #[arg(long)]
        platform: String,
        #[arg(long, env = "OPENCROW_API_KEY", hide_env_values = true)]
        api_key: String,
        #[arg(long, default_value = "")]
        identifier: String,
    },
    Delete {
        id: i64,
    },
    Verify {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct QuotaCommand {
    #[command(subcommand)]
    command: QuotaSubcommand,
}

#[derive(Subcommand, Debug)]
enum QuotaSubcommand {
    Recommendations,
    Schedule,
    Account { id: i64 },
}

#[derive(Args, Debug)]
struct GuidesCommand {
    #[command(subcommand)]
    command: GuidesSubcommand,
}

#[derive(Subcommand, Debug)]
enum GuidesSubcommand {
    List,
    Show { platform_id: String },
}

#[derive(Args, Debug)]
struct SettingsCommand {
    #[command(subcommand)]
    command: SettingsSubcommand,
}

#[derive(Subcommand, Debug)]
enum SettingsSubcommand {
    Show,
    Set {
        #[arg(long)]
        telegram_chat_id: Option<String>,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        timezone: Option<String>,
    },
}

struct CliContext {
    client: ApiClient,
    prompt: TerminalPrompt,
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let home = cli.home.unwrap_or_else(|| ClientConfig::from_env().home);
    let config = ClientConfig::new(&cli.base_url, home);
    tracing::debug!(base_url = %config.base_url, home = %config.home.display(), "client configured");

    let ctx = CliContext {
        client: ApiClient::from_config(&config)?,
        prompt: TerminalPrompt { assume_yes: cli.yes },
        json: cli.json,
    };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Register(args) => run_register(&ctx, args).await,
        Command::Login(args) => run_login(&ctx, args).await,
        Command::Logout => run_logout(&ctx),
        Command::Whoami => run_whoami(&ctx).await,
        Command::Dashboard => run_dashboard(&ctx).await,
        Command::Accounts(command) => run_accounts(&ctx, command.command).await,
        Command::Quota(command) => run_quota(&ctx, command.command).await,
        Command::Guides(command) => run_guides(&ctx, command.command).await,
        Command::Settings(command) => run_settings(&ctx, command.command).await,
    }
}

// =============================================================================
// SESSION
// =============================================================================

async fn run_ping(ctx: &CliContext) -> Result<(), CliError> {
    let health = ctx.client.health().await?.into_data();
    if ctx.json {
        return print_json(&health);
    }
    println!("{} ({})", health.status, ctx.client.http().base_url());
    Ok(())
}

async fn run_register(ctx: &CliContext, args: CredentialArgs) -> Result<(), CliError> {
    let user = session(ctx).register(&args.email, &args.password).await?;
    if ctx.json {
        return print_json(&user);
    }
    println!("Registered {}. Log in with `opencrow login {}`.", user.email, user.email);
    Ok(())
}

async fn run_login(ctx: &CliContext, args: CredentialArgs) -> Result<(), CliError> {
    let user = session(ctx).login(&args.email, &args.password).await?;
    if ctx.json {
        return print_json(&user);
    }
    println!("Logged in as {}", user.email);
    Ok(())
}

fn run_logout(ctx: &CliContext) -> Result<(), CliError> {
    session(ctx).logout()?;
    if !ctx.json {
        println!("Logged out");
    }
    Ok(())
}

async fn run_whoami(ctx: &CliContext) -> Result<(), CliError> {
    let user = session(ctx).whoami().await?;
    if ctx.json {
        return print_json(&user);
    }
    println!("{} (id {})", user.email, user.id);
    println!("language: {}  timezone: {}", user.preferred_language, user.timezone);
    Ok(())
}

fn session(ctx: &CliContext) -> SessionPage<'_, ApiClient> {
    SessionPage::new(&ctx.client, ctx.client.tokens())
}

// =============================================================================
// DASHBOARD
// =============================================================================

async fn run_dashboard(ctx: &CliContext) -> Result<(), CliError> {
    if ctx.json {
        return print_json(&ctx.client.dashboard().await?.data);
    }
    let mut page = DashboardPage::new(&ctx.client);
    page.load().await;
    print_page(ctx, dashboard::TITLE, &page.render());
    Ok(())
}

// =============================================================================
// ACCOUNTS
// =============================================================================

async fn run_accounts(ctx: &CliContext, command: AccountsSubcommand) -> Result<(), CliError> {
    let mut page = AccountsPage::new(&ctx.client);
    match command {
        AccountsSubcommand::List => {
            if ctx.json {
                return print_json(&ctx.client.list_accounts().await?.data);
            }
            page.load().await;
            print_page(ctx, accounts::TITLE, &page.render());
            Ok(())
        }
        AccountsSubcommand::Show { id } => {
            let account = ctx.client.get_account(id).await?.data;
            if ctx.json {
                return print_json(&account);
            }
            println!("{}", render_account_row(&account, None));
            for quota in &account.quotas {
                println!("{}", render_quota_line(quota));
            }
            Ok(())
        }
        AccountsSubcommand::Add { platform, api_key, identifier } => {
            let form = AccountForm { platform_id: platform, api_key, account_identifier: identifier };
            let outcome = page.create(&form, &ctx.prompt).await;
            finish(ctx, outcome, |account| format!("Added account {} ({})", account.id, account.platform_id))?;
            print_accounts(ctx, &page);
            Ok(())
        }
        AccountsSubcommand::Delete { id } => {
            let outcome = page.delete(id, &ctx.prompt).await;
            finish(ctx, outcome, |()| format!("Deleted account {id}"))?;
            print_accounts(ctx, &page);
            Ok(())
        }
        AccountsSubcommand::Verify { id } => {
            let outcome = page.verify(id, &ctx.prompt).await;
            finish(ctx, outcome, |response| response.message.clone())?;
            print_accounts(ctx, &page);
            Ok(())
        }
    }
}

fn print_accounts(ctx: &CliContext, page: &AccountsPage<'_, ApiClient>) {
    if !ctx.json && !page.state.loading {
        print_page(ctx, accounts::TITLE, &page.render());
    }
}

// =============================================================================
// QUOTA
// =============================================================================

async fn run_quota(ctx: &CliContext, command: QuotaSubcommand) -> Result<(), CliError> {
    match command {
        QuotaSubcommand::Recommendations => {
            let recommendations = ctx.client.recommendations().await?.data;
            if ctx.json {
                return print_json(&recommendations);
            }
            print!("{}", render_recommendations(&recommendations));
            Ok(())
        }
        QuotaSubcommand::Schedule => {
            let schedule = ctx.client.schedule().await?.data;
            if ctx.json {
                return print_json(&schedule);
            }
            print!("{}", render_schedule(&schedule));
            Ok(())
        }
        QuotaSubcommand::Account { id } => {
            let quota = ctx.client.account_quota(id).await?.data;
            if ctx.json {
                return print_json(&quota);
            }
            match quota {
                AccountQuota::Found { account_id, platform_id, platform_name, quotas } => {
                    println!("{} {platform_name} (account {account_id})", platform_icon(&platform_id));
                    for quota in &quotas {
                        println!("{}", render_quota_line(quota));
                    }
                    Ok(())
                }
                AccountQuota::Missing { error } => Err(CliError::NotFound(error)),
            }
        }
    }
}

// =============================================================================
// GUIDES
// =============================================================================

async fn run_guides(ctx: &CliContext, command: GuidesSubcommand) -> Result<(), CliError> {
    let mut page = GuidesPage::new(&ctx.client);
    match command {
        GuidesSubcommand::List => {
            if ctx.json {
                return print_json(&ctx.client.list_guides().await?.data);
            }
            page.load().await;
        }
        GuidesSubcommand::Show { platform_id } => {
            if ctx.json {
                return match ctx.client.get_guide(&platform_id).await?.data {
                    GuideLookup::Found(guide) => print_json(&guide),
                    GuideLookup::Missing { error } => Err(CliError::NotFound(error)),
                };
            }
            page.load().await;
            page.select(&platform_id).await;
            if !page.state.is_selected(&platform_id) {
                return Err(CliError::NotFound(platform_id));
            }
        }
    }
    print_page(ctx, guides::TITLE, &page.render());
    Ok(())
}

// =============================================================================
// SETTINGS
// =============================================================================

async fn run_settings(ctx: &CliContext, command: SettingsSubcommand) -> Result<(), CliError> {
    let mut page = SettingsPage::new(&ctx.client);
    match command {
        SettingsSubcommand::Show => {
            if ctx.json {
                return print_json(&ctx.client.me().await?.data);
            }
            page.load().await;
        }
        SettingsSubcommand::Set { telegram_chat_id, language, timezone } => {
            page.load().await;
            if page.state.user.is_none() {
                return Err(CliError::Failed(settings::SAVE_FAILED.to_owned()));
            }
            let form = &mut page.state.form;
            if let Some(chat_id) = telegram_chat_id {
                form.telegram_chat_id = chat_id;
            }
            if let Some(language) = language {
                form.preferred_language = language;
            }
            if let Some(timezone) = timezone {
                form.timezone = timezone;
            }
            let outcome = page.save(&ctx.prompt).await;
            if let Outcome::Failed(message) = outcome {
                return Err(CliError::Failed(message));
            }
            if ctx.json {
                return print_json(&page.state.user);
            }
        }
    }
    print_page(ctx, settings::TITLE, &page.render());
    Ok(())
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Report a mutation outcome. Cancelled actions succeed quietly.
fn finish<T: Serialize>(ctx: &CliContext, outcome: Outcome<T>, summary: impl FnOnce(&T) -> String) -> Result<(), CliError> {
    match outcome {
        Outcome::Applied(value) => {
            if ctx.json {
                return print_json(&value);
            }
            ctx.prompt.alert(&summary(&value));
            Ok(())
        }
        Outcome::Cancelled => {
            ctx.prompt.alert("Cancelled");
            Ok(())
        }
        Outcome::Failed(message) => Err(CliError::Failed(message)),
    }
}

fn print_page(ctx: &CliContext, title: &str, body: &str) {
    let user = ctx.client.tokens().user().ok().flatten();
    print!("{}", render_header(title, user.as_ref()));
    print!("{body}");
    print!("{}", render_footer());
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
