use log::{debug, info, warn};

use crate::core::Result;
use super::{
    api_client::ContactsApi,
    confirmer::{Confirmer, ConfirmPrompt},
    contact::Contact,
    form::ContactForm,
    normalizer::readable_error,
    notification::Notification,
    page_listener::PageListener,
    search,
};

const MISSING_ID: &str = "Missing contact id.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Loading,
    Saving,
}

/// Everything the contacts page renders from. Only [`PageController`]
/// writes to it.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    contacts    : Vec<Contact>,
    mode        : Mode,
    dialog_open : bool,
    editing_id  : Option<String>,
    search_text : String,
}

impl PageState {
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_loading(&self) -> bool {
        self.mode == Mode::Loading
    }

    pub fn is_saving(&self) -> bool {
        self.mode == Mode::Saving
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn filtered_contacts(&self) -> Vec<&Contact> {
        search::filter(&self.contacts, &self.search_text)
    }

    pub fn dialog_title(&self) -> &'static str {
        match self.editing_id {
            Some(_) => "Edit Contact",
            None => "Create Contact",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.editing_id {
            Some(_) => "Update",
            None => "Create",
        }
    }
}

/// Identifies one issued list request. Only the most recent ticket may
/// replace the record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Blocked,
    Created,
    Updated,
    Failed,
}

pub struct PageController<A: ContactsApi> {
    api         : A,
    confirmer   : Box<dyn Confirmer>,
    listeners   : Vec<Box<dyn PageListener>>,

    state       : PageState,
    form        : ContactForm,

    issued_loads: u64,
    started     : bool,
}

impl<A: ContactsApi> PageController<A> {
    pub fn new(api: A, confirmer: Box<dyn Confirmer>) -> Self {
        Self {
            api,
            confirmer,
            listeners   : Vec::new(),
            state       : PageState::default(),
            form        : ContactForm::new(),
            issued_loads: 0,
            started     : false,
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn PageListener>) -> &mut Self {
        self.listeners.push(listener);
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn filtered_contacts(&self) -> Vec<&Contact> {
        self.state.filtered_contacts()
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.state.search_text = text.to_string();
        self.state_changed();
    }

    /// Runs the initial load. Calling it again does nothing.
    pub async fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        info!("Contacts page started");
        self.load().await;
    }

    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let result = self.api.list().await;
        self.finish_load(ticket, result);
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued_loads += 1;
        self.state.mode = Mode::Loading;
        self.state_changed();
        LoadTicket(self.issued_loads)
    }

    /// Applies a list result. Results for anything but the latest ticket
    /// are dropped and leave the busy flag alone.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<Contact>>) {
        if ticket.0 != self.issued_loads {
            debug!("Dropping stale contacts load {} (latest {})", ticket.0, self.issued_loads);
            return;
        }

        self.state.mode = Mode::Idle;
        match result {
            Ok(contacts) => {
                debug!("Loaded {} contacts", contacts.len());
                self.state.contacts = contacts;
                self.state_changed();
            },
            Err(e) => {
                warn!("Loading contacts error: {e}");
                self.state_changed();
                self.notify(Notification::error("Failed to load contacts", &readable_error(&e)));
            }
        }
    }

    pub fn open_create(&mut self) {
        self.state.editing_id = None;
        self.form.reset();
        self.state.dialog_open = true;
        self.state_changed();
    }

    /// Opens the dialog on `contact`. Returns false when the record has no id.
    pub fn open_edit(&mut self, contact: &Contact) -> bool {
        if !contact.has_id() {
            self.notify(Notification::error("Edit failed", MISSING_ID));
            return false;
        }

        self.state.editing_id = Some(contact.id().to_string());
        self.form.patch(contact);
        self.state.dialog_open = true;
        self.state_changed();
        true
    }

    pub fn close_dialog(&mut self) {
        self.state.dialog_open = false;
        self.form.mark_untouched();
        self.state_changed();
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.form.is_valid() {
            self.form.mark_all_touched();
            self.state_changed();
            return SubmitOutcome::Blocked;
        }

        self.state.mode = Mode::Saving;
        self.state_changed();

        let input = self.form.to_input();
        let editing_id = self.state.editing_id.clone();
        let result = match editing_id.as_deref() {
            Some(id) => self.api.update(id, &input).await.map(|_| SubmitOutcome::Updated),
            None => self.api.create(&input).await.map(|_| SubmitOutcome::Created),
        };

        self.state.mode = Mode::Idle;
        match result {
            Ok(outcome) => {
                info!("Contact {} saved", editing_id.as_deref().unwrap_or("(new)"));
                self.state.dialog_open = false;
                self.state_changed();
                self.notify(Notification::success(match outcome {
                    SubmitOutcome::Updated => "Contact updated",
                    _ => "Contact created",
                }));
                self.load().await;
                outcome
            },
            Err(e) => {
                warn!("Saving contact error: {e}");
                self.state_changed();
                self.notify(Notification::error("Save failed", &readable_error(&e)));
                SubmitOutcome::Failed
            }
        }
    }

    /// Asks for confirmation, then deletes. Returns true once the record is
    /// gone on the backend.
    pub async fn confirm_delete(&mut self, contact: &Contact) -> bool {
        if !contact.has_id() {
            self.notify(Notification::error("Delete failed", MISSING_ID));
            return false;
        }

        if !self.confirmer.confirm(&ConfirmPrompt::delete(contact)) {
            debug!("Deleting contact {} cancelled", contact.id());
            return false;
        }

        match self.api.delete(contact.id()).await {
            Ok(_) => {
                info!("Contact {} deleted", contact.id());
                self.notify(Notification::success("Contact deleted"));
                self.load().await;
                true
            },
            Err(e) => {
                warn!("Deleting contact {} error: {e}", contact.id());
                self.notify(Notification::error("Delete failed", &readable_error(&e)));
                false
            }
        }
    }

    pub async fn seed(&mut self) {
        self.state.mode = Mode::Loading;
        self.state_changed();

        match self.api.seed().await {
            Ok(_) => {
                info!("Contacts seeded");
                self.notify(Notification::success("Database seeded"));
                self.load().await;
            },
            Err(e) => {
                warn!("Seeding contacts error: {e}");
                self.state.mode = Mode::Idle;
                self.state_changed();
                self.notify(Notification::error("Seed failed", &readable_error(&e)));
            }
        }
    }

    fn state_changed(&self) {
        for listener in self.listeners.iter() {
            listener.on_state_changed(&self.state);
        }
    }

    fn notify(&self, notification: Notification) {
        for listener in self.listeners.iter() {
            listener.on_notification(&notification);
        }
    }
}
