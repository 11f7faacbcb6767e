use anyhow::{bail, Context, Result};
use ntfly_builder::{render_preview, ArchiveExporter, Category, ProjectDescription, ProjectRepository};
use ntfly_core::security::{is_valid_email, validate_form_data};
use ntfly_core::{
    AIProviderConfig, AiKeysStore, AiProvider, BackendConfigStore, BackendServiceConfig,
    ConfigDocument, EncryptedConfigStore, EnvelopeCodec, Guard, KeyValueStore, SledStore,
    StoreConfig,
};
use ntfly_history::{LoginHistory, LoginKind};
use std::path::Path;
use std::sync::Arc;

/// Everything one `ntfly` invocation works against.
pub struct App {
    ai: AiKeysStore,
    backend: BackendConfigStore,
    projects: ProjectRepository,
    history: LoginHistory,
    guard: Guard,
    user: Option<String>,
}

impl App {
    pub fn open(data_dir: &Path, user: Option<String>) -> Result<Self> {
        let config = StoreConfig {
            data_dir: data_dir.to_path_buf(),
        };
        let store: Arc<dyn KeyValueStore> = Arc::new(
            SledStore::from_config(&config)
                .with_context(|| format!("opening store at {}", data_dir.display()))?,
        );
        Ok(Self::with_store(store, user))
    }

    pub fn with_store(store: Arc<dyn KeyValueStore>, user: Option<String>) -> Self {
        let codec = EnvelopeCodec::default();
        Self {
            ai: EncryptedConfigStore::new(store.clone(), codec),
            backend: EncryptedConfigStore::new(store.clone(), codec),
            projects: ProjectRepository::new(store.clone()),
            history: LoginHistory::new(store),
            guard: Guard::default(),
            user,
        }
    }

    pub async fn ai_save(
        &mut self,
        provider: AiProvider,
        key: &str,
        enable: bool,
        passphrase: &str,
    ) -> Result<()> {
        let mut config = unlock(&mut self.guard, &self.ai, passphrase)
            .await?
            .unwrap_or_default();
        self.note_login(LoginKind::Dashboard);

        config.set(provider, key, enable);
        self.guard.seal(&self.ai, &config, passphrase).await?;
        println!("saved {provider} key (enabled: {enable})");
        Ok(())
    }

    pub async fn ai_show(&mut self, passphrase: &str) -> Result<()> {
        let Some(config) = unlock(&mut self.guard, &self.ai, passphrase).await? else {
            println!("no AI provider keys stored");
            return Ok(());
        };
        self.note_login(LoginKind::Dashboard);
        print_providers(&config);
        Ok(())
    }

    pub fn ai_clear(&self) -> Result<()> {
        self.ai.clear()?;
        println!("AI provider keys removed");
        Ok(())
    }

    pub fn ai_status(&self) -> Result<()> {
        print_status(&self.ai);
        Ok(())
    }

    pub async fn backend_save(&mut self, config: BackendServiceConfig, passphrase: &str) -> Result<()> {
        if !config.is_configured() {
            bail!("backend config needs at least api key, auth domain, project id and app id");
        }
        // Confirms the passphrase matches whatever is already stored.
        unlock(&mut self.guard, &self.backend, passphrase).await?;
        self.note_login(LoginKind::Dashboard);

        self.guard.seal(&self.backend, &config, passphrase).await?;
        println!("backend config saved for project {}", config.project_id);
        Ok(())
    }

    pub async fn backend_show(&mut self, passphrase: &str) -> Result<()> {
        let Some(config) = unlock(&mut self.guard, &self.backend, passphrase).await? else {
            println!("no backend config stored");
            return Ok(());
        };
        self.note_login(LoginKind::Dashboard);

        println!("api key:             {}", mask(&config.api_key));
        println!("auth domain:         {}", config.auth_domain);
        println!("project id:          {}", config.project_id);
        println!("storage bucket:      {}", config.storage_bucket);
        println!("messaging sender id: {}", config.messaging_sender_id);
        println!("app id:              {}", config.app_id);
        if let Some(id) = &config.measurement_id {
            println!("measurement id:      {id}");
        }
        Ok(())
    }

    pub fn backend_clear(&self) -> Result<()> {
        self.backend.clear()?;
        println!("backend config removed");
        Ok(())
    }

    pub fn backend_status(&self) -> Result<()> {
        print_status(&self.backend);
        Ok(())
    }

    pub fn project_create(
        &self,
        name: &str,
        category: &str,
        description: &str,
        primary: &str,
        secondary: &str,
    ) -> Result<()> {
        let category: Category = category.parse()?;
        let form = validate_form_data([
            ("name", name),
            ("description", description),
            ("primaryColor", primary),
            ("secondaryColor", secondary),
        ]);
        if !form.valid {
            bail!(form.errors.join("; "));
        }
        let field = |name: &str| form.sanitized.get(name).cloned().unwrap_or_default();
        if field("name").is_empty() {
            bail!("project name must not be empty");
        }

        let project = self.projects.create(ProjectDescription {
            name: field("name"),
            category,
            description: field("description"),
            primary_color: field("primaryColor"),
            secondary_color: field("secondaryColor"),
        })?;
        println!("{}", project.id);
        Ok(())
    }

    pub fn project_list(&self) -> Result<()> {
        let projects = self.projects.list()?;
        if projects.is_empty() {
            println!("no projects");
        }
        for p in projects {
            println!(
                "{}  {:<10}  {}  {}",
                p.id,
                p.category.as_str(),
                p.created_at.format("%Y-%m-%d %H:%M"),
                p.name
            );
        }
        Ok(())
    }

    pub fn project_show(&self, id: &str) -> Result<()> {
        let project = self.project(id)?;
        println!("{}", serde_json::to_string_pretty(&project.description)?);
        for (name, content) in &project.files {
            println!("  {name} ({} bytes)", content.len());
        }
        Ok(())
    }

    pub fn project_export(&self, id: &str, out: &Path) -> Result<()> {
        let project = self.project(id)?;
        let path = ArchiveExporter::new(out).export(&project)?;
        println!("{}", path.display());
        Ok(())
    }

    pub fn project_preview(&self, id: &str, out: &Path) -> Result<()> {
        let project = self.project(id)?;
        let html = render_preview(&project)?;
        std::fs::write(out, html).with_context(|| format!("writing {}", out.display()))?;
        println!("{}", out.display());
        Ok(())
    }

    pub fn history_list(&self) -> Result<()> {
        for r in self.history.records() {
            println!(
                "{} {}  {:<9}  {}",
                r.formatted_date,
                r.formatted_time,
                format!("{:?}", r.kind).to_lowercase(),
                r.email
            );
        }
        Ok(())
    }

    pub fn history_stats(&self) -> Result<()> {
        let stats = self.history.stats();
        println!("total:     {}", stats.total);
        println!("last 24h:  {}", stats.last_24h);
        println!("last 7d:   {}", stats.last_7d);
        Ok(())
    }

    pub fn history_clear(&self) -> Result<()> {
        self.history.clear()?;
        println!("login history cleared");
        Ok(())
    }

    fn project(&self, id: &str) -> Result<ntfly_builder::GeneratedProject> {
        Ok(self.projects.require(id)?)
    }

    fn note_login(&self, kind: LoginKind) {
        let Some(email) = self.user.as_deref() else {
            return;
        };
        if !is_valid_email(email) {
            tracing::warn!("NTFLY_USER is not a valid email, login not recorded");
            return;
        }
        let user_id = email.split('@').next().unwrap_or(email);
        self.history.record(user_id, email, kind);
    }
}

async fn unlock<T: ConfigDocument>(
    guard: &mut Guard,
    store: &EncryptedConfigStore<T>,
    passphrase: &str,
) -> Result<Option<T>> {
    guard
        .unlock(store, passphrase)
        .await
        .with_context(|| format!("unlocking {} config", T::KIND.as_str()))
}

fn print_providers(config: &AIProviderConfig) {
    for provider in AiProvider::ALL {
        let entry = config.get(provider);
        let state = if entry.enabled { "on " } else { "off" };
        println!("{:<8} {state} {}", provider.as_str(), mask(&entry.secret_key));
    }
}

fn print_status<T: ConfigDocument>(store: &EncryptedConfigStore<T>) {
    match store.load_envelope() {
        Some(envelope) => {
            let when = envelope
                .created_at()
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "unknown".into());
            println!("{}: stored {when}", store.kind().as_str());
            println!("  salt {}", hex::encode(&envelope.salt));
            println!("  iv   {}", hex::encode(&envelope.iv));
        }
        None => println!("{}: not stored", store.kind().as_str()),
    }
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        return "-".into();
    }
    let shown: String = secret.chars().take(4).collect();
    format!("{shown}****")
}
