mod app;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ntfly_core::AiProvider;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use app::App;

#[derive(Parser)]
#[command(name = "ntfly", version, about = "Ntfly site builder: encrypted provider keys and static site projects")]
struct Cli {
    /// Directory holding the local store
    #[arg(long, env = "NTFLY_DATA_DIR", default_value = ".ntfly", global = true)]
    data_dir: PathBuf,

    /// Email recorded in the login history on successful unlocks
    #[arg(long, env = "NTFLY_USER", global = true)]
    user: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// AI provider keys
    #[command(subcommand)]
    Ai(AiCommand),
    /// Backend service credentials
    #[command(subcommand)]
    Backend(BackendCommand),
    /// Generated site projects
    #[command(subcommand)]
    Project(ProjectCommand),
    /// Login history
    #[command(subcommand)]
    History(HistoryCommand),
}

#[derive(Args)]
struct PassphraseArg {
    #[arg(long, env = "NTFLY_PASSPHRASE", hide_env_values = true)]
    passphrase: String,
}

#[derive(Subcommand)]
enum AiCommand {
    /// Set one provider's key, keeping the others
    Save {
        #[arg(long)]
        provider: AiProvider,
        #[arg(long)]
        key: String,
        #[arg(long)]
        enable: bool,
        #[command(flatten)]
        pass: PassphraseArg,
    },
    /// Decrypt and print the provider table, keys masked
    Show {
        #[command(flatten)]
        pass: PassphraseArg,
    },
    Clear,
    Status,
}

#[derive(Subcommand)]
enum BackendCommand {
    Save {
        /// Take every field from NTFLY_BACKEND_* variables
        #[arg(long)]
        from_env: bool,
        #[command(flatten)]
        fields: BackendFields,
        #[command(flatten)]
        pass: PassphraseArg,
    },
    Show {
        #[command(flatten)]
        pass: PassphraseArg,
    },
    Clear,
    Status,
}

#[derive(Args, Default)]
struct BackendFields {
    #[arg(long, default_value = "")]
    api_key: String,
    #[arg(long, default_value = "")]
    auth_domain: String,
    #[arg(long, default_value = "")]
    project_id: String,
    #[arg(long, default_value = "")]
    storage_bucket: String,
    #[arg(long, default_value = "")]
    messaging_sender_id: String,
    #[arg(long, default_value = "")]
    app_id: String,
    #[arg(long)]
    measurement_id: Option<String>,
}

#[derive(Subcommand)]
enum ProjectCommand {
    Create {
        #[arg(long)]
        name: String,
        /// business, ecommerce, portfolio or landing
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "#6366f1")]
        primary: String,
        #[arg(long, default_value = "#ec4899")]
        secondary: String,
    },
    List,
    Show {
        id: String,
    },
    /// Save the project as a ZIP archive
    Export {
        id: String,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Write a single self-contained HTML preview
    Preview {
        id: String,
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Subcommand)]
enum HistoryCommand {
    List,
    Stats,
    Clear,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_env("NTFLY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut app = App::open(&cli.data_dir, cli.user)?;

    match cli.command {
        Command::Ai(cmd) => match cmd {
            AiCommand::Save {
                provider,
                key,
                enable,
                pass,
            } => app.ai_save(provider, &key, enable, &pass.passphrase).await,
            AiCommand::Show { pass } => app.ai_show(&pass.passphrase).await,
            AiCommand::Clear => app.ai_clear(),
            AiCommand::Status => app.ai_status(),
        },
        Command::Backend(cmd) => match cmd {
            BackendCommand::Save {
                from_env,
                fields,
                pass,
            } => {
                let config = if from_env {
                    ntfly_core::BackendServiceConfig::from_env()
                } else {
                    fields.into_config()
                };
                app.backend_save(config, &pass.passphrase).await
            }
            BackendCommand::Show { pass } => app.backend_show(&pass.passphrase).await,
            BackendCommand::Clear => app.backend_clear(),
            BackendCommand::Status => app.backend_status(),
        },
        Command::Project(cmd) => match cmd {
            ProjectCommand::Create {
                name,
                category,
                description,
                primary,
                secondary,
            } => app.project_create(&name, &category, &description, &primary, &secondary),
            ProjectCommand::List => app.project_list(),
            ProjectCommand::Show { id } => app.project_show(&id),
            ProjectCommand::Export { id, out } => app.project_export(&id, &out),
            ProjectCommand::Preview { id, out } => app.project_preview(&id, &out),
        },
        Command::History(cmd) => match cmd {
            HistoryCommand::List => app.history_list(),
            HistoryCommand::Stats => app.history_stats(),
            HistoryCommand::Clear => app.history_clear(),
        },
    }
}

impl BackendFields {
    fn into_config(self) -> ntfly_core::BackendServiceConfig {
        ntfly_core::BackendServiceConfig {
            api_key: self.api_key,
            auth_domain: self.auth_domain,
            project_id: self.project_id,
            storage_bucket: self.storage_bucket,
            messaging_sender_id: self.messaging_sender_id,
            app_id: self.app_id,
            measurement_id: self.measurement_id.filter(|v| !v.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ai_save() {
        let cli = Cli::try_parse_from([
            "ntfly", "ai", "save", "--provider", "claude", "--key", "sk", "--enable",
            "--passphrase", "pw",
        ])
        .unwrap();
        match cli.command {
            Command::Ai(AiCommand::Save { provider, enable, .. }) => {
                assert_eq!(provider, AiProvider::Claude);
                assert!(enable);
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn test_rejects_unknown_provider() {
        assert!(Cli::try_parse_from([
            "ntfly", "ai", "save", "--provider", "bard", "--key", "k", "--passphrase", "pw",
        ])
        .is_err());
    }
}
