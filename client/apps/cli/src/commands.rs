//! Command runner
//!
//! Every protected command settles the route guard first, the same way a
//! dashboard page would before mounting its collections.

use std::fs;
use std::sync::Arc;

use anyhow::{Context, bail};
use auth::{
    GuardDecision, LoginRequest, RegisterRequest, Role, Route, RouteGuard, SessionConfig,
    SessionStore,
};
use kernel::id::{ApplicationId, SchemeId};
use platform::{ApiClient, ClientConfig, FileStorage, ReqwestTransport};
use portal::domain::repository::{ListSource, RecordWriter, SchemeApplicant};
use portal::{
    ApplicationsApi, ApplicationsCollection, CollectionHandle, Editable, InstitutesApi,
    MembersApi, NotificationDraft, NotificationsApi, ReadOnlyCollection, Record, RecordId,
    ResourceCollection, SchemeApplication, SchemesApi, StudentPortalApi, StudentsApi,
};
use serde::Serialize;

use crate::cli::{Collection, Command};

type Client = Arc<ApiClient<ReqwestTransport>>;

pub struct Portal {
    session: Arc<SessionStore<ReqwestTransport>>,
    client: Client,
}

impl Portal {
    /// Build the session store and rehydrate it from the session file
    pub fn connect(config: ClientConfig) -> anyhow::Result<Self> {
        let transport = ReqwestTransport::new(config.clone())?;
        let session = Arc::new(SessionStore::new(
            transport.clone(),
            Arc::new(FileStorage::new(config.state_path.clone())),
            SessionConfig::default(),
        ));
        session.initialize();

        let client = Arc::new(session.authorized_client(transport));
        tracing::debug!(base_url = %config.base_url, phase = ?session.phase(), "Portal connected");

        Ok(Self { session, client })
    }

    pub async fn run(&self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Login { email, password } => self.login(email, password).await,
            Command::Register {
                name,
                email,
                password,
            } => self.register(name, email, password).await,
            Command::Logout => {
                self.session.logout();
                println!("Signed out");
                Ok(())
            }
            Command::Whoami => self.whoami(),
            Command::List { collection } => self.list(collection).await,
            Command::Scheme { id } => {
                let scheme = SchemesApi::schemes(self.client.clone())
                    .get_by_id(&SchemeId::new(id))
                    .await
                    .map_err(|e| e.to_app_error())?;
                print_json(&scheme)
            }
            Command::Apply { scheme_id, form } => self.apply(scheme_id, &form).await,
            Command::SetStatus { id, status } => {
                self.require(RouteGuard::admin()).await?;
                let applications =
                    ApplicationsCollection::mount(ApplicationsApi::applications(self.client.clone()));
                settled(&applications).await?;
                applications
                    .update_status(&ApplicationId::new(id.as_str()), status)
                    .await
                    .map_err(|e| e.to_app_error())?;
                println!("Application {id} is now {status}");
                Ok(())
            }
            Command::Notify { kind, message } => {
                self.require(RouteGuard::admin()).await?;
                let notifications =
                    ResourceCollection::mount(NotificationsApi::notifications(self.client.clone()));
                settled(&notifications).await?;
                let created = notifications
                    .create(&NotificationDraft { kind, message })
                    .await
                    .map_err(|e| e.to_app_error())?;
                print_json(&created)
            }
            Command::Delete { collection, id } => self.delete(collection, &id).await,
            Command::MyApplications => {
                self.require(RouteGuard::student()).await?;
                let mine = ReadOnlyCollection::mount(StudentPortalApi::new(self.client.clone()));
                print_json(&settled(&mine).await?)
            }
            Command::AdmitCard => {
                self.require(RouteGuard::student()).await?;
                let card = StudentPortalApi::new(self.client.clone())
                    .my_admit_card()
                    .await
                    .map_err(|e| e.to_app_error())?;
                match card.url.as_deref() {
                    Some(url) if card.is_issued() => println!("{url}"),
                    _ => println!("Admit card not issued yet"),
                }
                Ok(())
            }
        }
    }

    async fn login(&self, email: String, password: String) -> anyhow::Result<()> {
        match self.session.login(&LoginRequest::new(email, password)).await {
            Some(user) => {
                println!(
                    "Signed in as {} ({}), home {}",
                    user.display_name(),
                    user.role,
                    Route::home_for(user.role)
                );
                Ok(())
            }
            None => bail!(self.session_error("Login failed")),
        }
    }

    async fn register(&self, name: String, email: String, password: String) -> anyhow::Result<()> {
        let request = RegisterRequest::student(name, email, password);
        match self.session.register(&request).await {
            Some(_) => {
                println!("Registered; sign in with `portal login`");
                Ok(())
            }
            None => bail!(self.session_error("Registration failed")),
        }
    }

    fn whoami(&self) -> anyhow::Result<()> {
        match self.session.current_user() {
            Some(user) => {
                println!("{} <{}> {}", user.display_name(), user.email, user.role);
                Ok(())
            }
            None => bail!("Not signed in"),
        }
    }

    async fn list(&self, collection: Collection) -> anyhow::Result<()> {
        // Schemes are public; everything else is the admin dashboard
        if collection != Collection::Schemes {
            self.require(RouteGuard::admin()).await?;
        }

        let client = self.client.clone();
        match collection {
            Collection::Members => {
                print_json(&settled(&ResourceCollection::mount(MembersApi::members(client))).await?)
            }
            Collection::Institutes => print_json(
                &settled(&ResourceCollection::mount(InstitutesApi::institutes(client))).await?,
            ),
            Collection::Students => {
                print_json(&settled(&ResourceCollection::mount(StudentsApi::students(client))).await?)
            }
            Collection::Schemes => {
                print_json(&settled(&ResourceCollection::mount(SchemesApi::schemes(client))).await?)
            }
            Collection::Notifications => print_json(
                &settled(&ResourceCollection::mount(NotificationsApi::notifications(client)))
                    .await?,
            ),
            Collection::Applications => print_json(
                &settled(&ApplicationsCollection::mount(ApplicationsApi::applications(client)))
                    .await?,
            ),
        }
    }

    async fn apply(&self, scheme_id: String, form: &std::path::Path) -> anyhow::Result<()> {
        self.require(RouteGuard::student()).await?;

        let raw = fs::read_to_string(form)
            .with_context(|| format!("Failed to read {}", form.display()))?;
        let application: SchemeApplication =
            serde_json::from_str(&raw).context("Application form is not valid JSON")?;

        if let Err(message) = application.validate() {
            bail!("{message}");
        }

        let body = SchemesApi::schemes(self.client.clone())
            .apply_for_scheme(&SchemeId::new(scheme_id), &application)
            .await
            .map_err(|e| e.to_app_error())?;
        print_json(&body)
    }

    async fn delete(&self, collection: Collection, id: &str) -> anyhow::Result<()> {
        self.require(RouteGuard::admin()).await?;
        let client = self.client.clone();
        match collection {
            Collection::Members => remove(MembersApi::members(client), id).await?,
            Collection::Institutes => remove(InstitutesApi::institutes(client), id).await?,
            Collection::Students => remove(StudentsApi::students(client), id).await?,
            Collection::Schemes => remove(SchemesApi::schemes(client), id).await?,
            Collection::Notifications => remove(NotificationsApi::notifications(client), id).await?,
            Collection::Applications => bail!("Applications cannot be deleted"),
        }
        println!("Deleted {id}");
        Ok(())
    }

    /// Settle the guard; anything but `Render` ends the command
    async fn require(&self, guard: RouteGuard) -> anyhow::Result<()> {
        let mut receiver = self.session.subscribe();
        match guard.settle(&mut receiver).await {
            GuardDecision::Render => Ok(()),
            GuardDecision::Redirect(Route::Login) => {
                bail!("Not signed in; run `portal login` first")
            }
            decision => bail!(
                "This command needs {} access ({decision})",
                required_label(guard.required())
            ),
        }
    }

    fn session_error(&self, fallback: &str) -> String {
        self.session
            .snapshot()
            .error
            .unwrap_or_else(|| fallback.to_string())
    }
}

fn required_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "an admin",
        Role::Student => "a student",
        Role::Institute => "an institute",
        Role::Member => "a member",
    }
}

/// Wait for the initial fetch and surface its error
async fn settled<R: Record>(handle: &CollectionHandle<R>) -> anyhow::Result<Vec<R>> {
    let state = handle.wait_ready().await;
    match state.error {
        Some(e) => Err(e.to_app_error().into()),
        None => Ok(state.items),
    }
}

async fn remove<R, A>(api: A, id: &str) -> anyhow::Result<()>
where
    R: Editable,
    A: ListSource<Item = R> + RecordWriter<Item = R> + Sync + 'static,
{
    let collection = ResourceCollection::mount(api);
    settled(&collection).await?;
    collection
        .remove(&RecordId::<R>::new(id))
        .await
        .map_err(|e| e.to_app_error())?;
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
