// ── Controller ──
//
// Owns the API client, the data store and the notification slot.
// Validates forms, routes commands to the API, reloads all collections
// after every successful write and reports outcomes as notifications.

use std::sync::Arc;

use barberia_api::ApiClient;
use barberia_api::models::{NewAppointment, NewBarber, NewClient, NewScheduleEntry, ResourceId};
use serde::Serialize;
use strum::{Display, EnumIter};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::command::forms::Form;
use crate::command::{Command, CommandResult};
use crate::config::ServiceConfig;
use crate::error::CoreError;
use crate::model::{Appointment, Barber, Client, EntityId};
use crate::notify::{Notification, Notifier};
use crate::store::{DataStore, StoreSnapshot};
use crate::stream::{EntityStream, Snapshot};

// ── View ─────────────────────────────────────────────────────────

/// Top-level screen the operator is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Dashboard,
    Barbers,
    Clients,
    Book,
    Appointments,
}

/// One of the three reloadable collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Barbers,
    Clients,
    Appointments,
}

impl Collection {
    /// Notification text for a failed fetch of this collection.
    pub fn load_error_message(self) -> &'static str {
        match self {
            Self::Barbers => "Failed to load barbers",
            Self::Clients => "Failed to load clients",
            Self::Appointments => "Failed to load appointments",
        }
    }
}

/// What a `reload_all` did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReloadReport {
    pub generation: u64,
    /// `false` when a newer reload started before this one settled.
    pub applied: bool,
    /// Collections whose fetch failed and were reset to empty.
    pub failed: Vec<Collection>,
}

impl ReloadReport {
    pub fn is_complete(&self) -> bool {
        self.applied && self.failed.is_empty()
    }
}

// ── Confirmation ─────────────────────────────────────────────────

/// Asks the operator a yes/no question before a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Result of a confirmed-delete request.
#[derive(Debug, Clone)]
pub enum DeleteOutcome {
    Deleted(CommandResult),
    /// The operator declined; nothing was sent.
    Declined,
}

// ── Controller ───────────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<ControllerInner>`.
#[derive(Clone)]
pub struct Controller {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    config: ServiceConfig,
    api: ApiClient,
    store: Arc<DataStore>,
    notifier: Notifier,
    view: watch::Sender<View>,
}

impl Controller {
    /// Build a controller and its HTTP client from configuration.
    /// Performs no I/O; call [`reload_all()`](Self::reload_all) to load data.
    pub fn new(config: ServiceConfig) -> Result<Self, CoreError> {
        let api = ApiClient::new(config.api_url.clone(), &config.transport())?;
        Ok(Self::with_api(config, api))
    }

    /// Build a controller around an existing API client.
    pub fn with_api(config: ServiceConfig, api: ApiClient) -> Self {
        let notifier = Notifier::new(config.notification_ttl);
        let (view, _) = watch::channel(View::default());

        Self {
            inner: Arc::new(ControllerInner {
                config,
                api,
                store: Arc::new(DataStore::new()),
                notifier,
                view,
            }),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.inner.config
    }

    pub fn store(&self) -> &Arc<DataStore> {
        &self.inner.store
    }

    pub fn notifier(&self) -> &Notifier {
        &self.inner.notifier
    }

    /// The notification currently shown, if any.
    pub fn notification(&self) -> Option<Notification> {
        self.inner.notifier.current()
    }

    pub fn subscribe_notifications(&self) -> watch::Receiver<Option<Notification>> {
        self.inner.notifier.subscribe()
    }

    // ── Views ────────────────────────────────────────────────────

    pub fn select_view(&self, view: View) {
        self.inner.view.send_replace(view);
    }

    pub fn active_view(&self) -> View {
        *self.inner.view.borrow()
    }

    pub fn subscribe_view(&self) -> watch::Receiver<View> {
        self.inner.view.subscribe()
    }

    // ── Reload ───────────────────────────────────────────────────

    /// Fetch barbers, clients and appointments concurrently and replace
    /// the store's contents once all three have settled.
    ///
    /// Never fails: a collection whose fetch fails becomes empty and an
    /// error notification is published.
    pub async fn reload_all(&self) -> ReloadReport {
        let store = &self.inner.store;
        let ticket = store.begin_reload();
        let api = &self.inner.api;

        let (barbers_res, clients_res, appointments_res) = tokio::join!(
            api.list_barbers(),
            api.list_clients(),
            api.list_appointments(),
        );

        let mut failed = Vec::new();
        let snapshot = StoreSnapshot {
            barbers: settle::<_, Barber>(Collection::Barbers, barbers_res, &mut failed),
            clients: settle::<_, Client>(Collection::Clients, clients_res, &mut failed),
            appointments: settle::<_, Appointment>(
                Collection::Appointments,
                appointments_res,
                &mut failed,
            ),
        };

        let applied = store.apply_snapshot(ticket, snapshot);
        if applied {
            for collection in &failed {
                self.inner.notifier.error(collection.load_error_message());
            }
            info!(
                generation = ticket.generation(),
                barbers = store.barber_count(),
                clients = store.client_count(),
                appointments = store.appointment_count(),
                "reload complete"
            );
        }

        ReloadReport {
            generation: ticket.generation(),
            applied,
            failed,
        }
    }

    // ── Command execution ────────────────────────────────────────

    /// Run a write against the service.
    ///
    /// On success a success notification is published and all
    /// collections are reloaded. On failure an error notification is
    /// published and the store is left untouched.
    pub async fn execute(&self, cmd: Command) -> Result<CommandResult, CoreError> {
        debug!(?cmd, "executing command");

        if let Err(e) = self.dispatch(&cmd).await {
            warn!(error = %e, status = ?e.status(), body = e.body().unwrap_or_default(), "command failed");
            self.inner.notifier.error(cmd.failure_message(&e));
            return Err(match (CoreError::from(e), cmd.target()) {
                (CoreError::NotFound { .. }, Some((entity_type, identifier))) => {
                    CoreError::NotFound {
                        entity_type: entity_type.into(),
                        identifier,
                    }
                }
                (err, _) => err,
            });
        }

        let notification = self.inner.notifier.success(cmd.success_message());
        let reload = self.reload_all().await;
        Ok(CommandResult {
            notification,
            reload,
        })
    }

    /// Validate `form` and run the resulting command.
    ///
    /// Validation failures publish an error notification and send
    /// nothing. The form is reset only after a successful write.
    pub async fn submit<F: Form>(&self, form: &mut F) -> Result<CommandResult, CoreError> {
        let cmd = match form.validate() {
            Ok(cmd) => cmd,
            Err(e) => {
                if let CoreError::ValidationFailed { message } = &e {
                    self.inner.notifier.error(message.clone());
                }
                return Err(e);
            }
        };

        let result = self.execute(cmd).await?;
        form.reset();
        Ok(result)
    }

    /// Delete an appointment after the operator confirms.
    pub async fn delete_appointment(
        &self,
        id: &EntityId,
        reason: Option<String>,
        confirm: &impl Confirm,
    ) -> Result<DeleteOutcome, CoreError> {
        if !confirm.confirm(&format!("Delete appointment {id}?")) {
            debug!(%id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        self.execute(Command::DeleteAppointment {
            id: id.clone(),
            reason,
        })
        .await
        .map(DeleteOutcome::Deleted)
    }

    /// Health check; returns the service's plain-text answer.
    pub async fn ping(&self) -> Result<String, CoreError> {
        Ok(self.inner.api.ping().await?)
    }

    async fn dispatch(&self, cmd: &Command) -> Result<(), barberia_api::Error> {
        let api = &self.inner.api;
        match cmd {
            Command::CreateBarber(req) => api.create_barber(&NewBarber::from(req)).await,
            Command::AddSchedule { barber_id, entry } => {
                api.add_schedule(&ResourceId::from(barber_id), &NewScheduleEntry::from(entry))
                    .await
            }
            Command::CreateClient(req) => api.create_client(&NewClient::from(req)).await,
            Command::CreateAppointment(req) => {
                api.create_appointment(&NewAppointment::from(req)).await
            }
            Command::DeleteAppointment { id, reason } => {
                api.delete_appointment(&ResourceId::from(id), reason.as_deref())
                    .await
            }
        }
    }

    // ── Snapshot delegates ───────────────────────────────────────

    pub fn barbers_snapshot(&self) -> Snapshot<Barber> {
        self.inner.store.barbers_snapshot()
    }

    pub fn clients_snapshot(&self) -> Snapshot<Client> {
        self.inner.store.clients_snapshot()
    }

    pub fn appointments_snapshot(&self) -> Snapshot<Appointment> {
        self.inner.store.appointments_snapshot()
    }

    pub fn barbers(&self) -> EntityStream<Barber> {
        self.inner.store.subscribe_barbers()
    }

    pub fn clients(&self) -> EntityStream<Client> {
        self.inner.store.subscribe_clients()
    }

    pub fn appointments(&self) -> EntityStream<Appointment> {
        self.inner.store.subscribe_appointments()
    }
}

/// Fail-soft conversion of one list result.
fn settle<W, T: From<W>>(
    collection: Collection,
    result: Result<Vec<W>, barberia_api::Error>,
    failed: &mut Vec<Collection>,
) -> Vec<T> {
    match result {
        Ok(entries) => entries.into_iter().map(T::from).collect(),
        Err(e) => {
            warn!(%collection, error = %e, "list failed; collection reset to empty");
            failed.push(collection);
            Vec::new()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn closures_confirm() {
        let asked = Cell::new(String::new());
        let decline = |prompt: &str| {
            asked.set(prompt.to_owned());
            false
        };
        assert!(!decline.confirm("Delete appointment 7?"));
        assert_eq!(asked.take(), "Delete appointment 7?");
    }

    #[test]
    fn view_defaults_to_dashboard() {
        assert_eq!(View::default(), View::Dashboard);
        assert_eq!(View::Appointments.to_string(), "appointments");
    }

    #[test]
    fn collection_error_messages() {
        assert_eq!(Collection::Barbers.load_error_message(), "Failed to load barbers");
        assert_eq!(Collection::Clients.to_string(), "clients");
    }

    #[test]
    fn report_completeness() {
        let report = ReloadReport {
            generation: 1,
            applied: true,
            failed: vec![Collection::Clients],
        };
        assert!(!report.is_complete());
    }
}
