//! Startup workflow that resolves the local identity.
//!
//! ```text
//! Start ──exists──▶ Reconciling ──table present──▶ Ready
//!   │                   │
//!   │ absent            │ table missing (purge) / corrupted (backup)
//!   ▼                   ▼
//! NeedProvision ──▶ Menu ──▶ Creating ──▶ Ready
//!                     │ ───▶ Binding  ──▶ Ready
//!                     └────▶ Quit
//! ```
//!
//! Invariant after `Reconciling`: the local record is either backed by a
//! backend table or gone.

use crate::{
    BootstrapOutcome, BootstrapState, IdentityError, LocalRecordStore,
    Result as IdentityResult,
};

use lb_core::{
    IdentityRecord, Prompter, is_valid_table_identifier, normalize_username, validate_email,
    validate_secret_confirmation,
};
use lb_db::TableProbe;

use log::{debug, info, warn};

pub const MENU_OPTIONS: [&str; 3] = ["Create a new user", "Already have a username", "QUIT"];
pub const NAME_PROMPT: &str = "Please enter your name:";
pub const NEW_USERNAME_PROMPT: &str = "Please enter a username:";
pub const EXISTING_USERNAME_PROMPT: &str = "Enter your username:";

const MENU_BANNER: &str = "==================== USER ====================";
const SETUP_MESSAGE: &str = "Seems like your information is not on file. Let's set up";
const USERNAME_TAKEN_MESSAGE: &str = "Username is unavailable. Please try again";
const USERNAME_UNKNOWN_MESSAGE: &str = "Username does not exist. Please enter it again.";
const USERNAME_INVALID_MESSAGE: &str =
    "Usernames may only contain letters, digits and underscores. Please try again";

const CREATE_OPTION: usize = 0;
const BIND_OPTION: usize = 1;

pub struct IdentityBootstrapper<P, B> {
    store: LocalRecordStore,
    probe: B,
    prompter: P,
}

impl<P, B> IdentityBootstrapper<P, B>
where
    P: Prompter,
    B: TableProbe,
{
    pub fn new(store: LocalRecordStore, probe: B, prompter: P) -> Self {
        Self {
            store,
            probe,
            prompter,
        }
    }

    pub fn store(&self) -> &LocalRecordStore {
        &self.store
    }

    pub fn probe(&self) -> &B {
        &self.probe
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Drives the workflow from `Start` until it reaches `Ready` or `Quit`.
    ///
    /// Backend, storage and input failures are returned as errors; there are
    /// no retries.
    pub async fn run(&mut self) -> IdentityResult<BootstrapOutcome> {
        let mut state = BootstrapState::Start;

        loop {
            state = match state {
                BootstrapState::Ready(record) => {
                    info!("Identity ready: '{}'", record.username);
                    return Ok(BootstrapOutcome::Ready(record));
                }
                BootstrapState::Quit => {
                    info!("User quit from the setup menu");
                    return Ok(BootstrapOutcome::Quit);
                }
                other => self.step(other).await?,
            };
        }
    }

    /// Performs a single transition. Terminal states map to themselves.
    pub async fn step(&mut self, state: BootstrapState) -> IdentityResult<BootstrapState> {
        debug!("Bootstrap state: {state:?}");

        match state {
            BootstrapState::Start => self.start(),
            BootstrapState::Reconciling => self.reconcile().await,
            BootstrapState::NeedProvision => {
                info!("No usable local identity, starting provisioning");
                Ok(BootstrapState::Menu)
            }
            BootstrapState::Menu => self.menu(),
            BootstrapState::Creating => self.create_user().await,
            BootstrapState::Binding => self.bind_existing_user().await,
            terminal @ (BootstrapState::Ready(_) | BootstrapState::Quit) => Ok(terminal),
        }
    }

    fn start(&mut self) -> IdentityResult<BootstrapState> {
        self.store.ensure_dir()?;

        if self.store.exists()? {
            Ok(BootstrapState::Reconciling)
        } else {
            Ok(BootstrapState::NeedProvision)
        }
    }

    async fn reconcile(&mut self) -> IdentityResult<BootstrapState> {
        let record = match self.store.load() {
            Ok(record) => record,
            Err(IdentityError::NotFound { .. }) => return Ok(BootstrapState::NeedProvision),
            Err(e @ IdentityError::Corrupted { .. }) => {
                warn!("{e}");
                self.store.backup_corrupted()?;
                return Ok(BootstrapState::NeedProvision);
            }
            Err(e) => return Err(e),
        };

        if self.probe.table_exists(&record.username).await? {
            return Ok(BootstrapState::Ready(record));
        }

        warn!(
            "Cached username '{}' has no backend table, purging local record",
            record.username
        );
        self.store.purge()?;
        Ok(BootstrapState::NeedProvision)
    }

    fn menu(&mut self) -> IdentityResult<BootstrapState> {
        self.prompter.notify(MENU_BANNER);
        let choice = self.prompter.input_menu(&MENU_OPTIONS)?;
        debug!("User selected: {}", MENU_OPTIONS[choice]);

        Ok(match choice {
            CREATE_OPTION => BootstrapState::Creating,
            BIND_OPTION => BootstrapState::Binding,
            _ => BootstrapState::Quit,
        })
    }

    async fn create_user(&mut self) -> IdentityResult<BootstrapState> {
        self.prompter.notify(SETUP_MESSAGE);
        let name = self.prompter.input_str(NAME_PROMPT)?;

        let username = loop {
            let candidate = self.prompt_username(NEW_USERNAME_PROMPT)?;
            if !self.probe.table_exists(&candidate).await? {
                break candidate;
            }
            self.prompter.notify(USERNAME_TAKEN_MESSAGE);
        };

        self.probe.create_table(&username).await?;

        let secret = validate_secret_confirmation(&mut self.prompter)?;
        let email = validate_email(&mut self.prompter)?;

        let record = IdentityRecord::new(name, username, secret, email);
        self.store.save(&record)?;

        Ok(BootstrapState::Ready(record))
    }

    async fn bind_existing_user(&mut self) -> IdentityResult<BootstrapState> {
        let name = self.prompter.input_str(NAME_PROMPT)?;

        let username = loop {
            let candidate = self.prompt_username(EXISTING_USERNAME_PROMPT)?;
            if self.probe.table_exists(&candidate).await? {
                break candidate;
            }
            self.prompter.notify(USERNAME_UNKNOWN_MESSAGE);
        };

        // The secret is not checked against any stored credential; it becomes
        // the new local secret.
        let secret = validate_secret_confirmation(&mut self.prompter)?;

        // Collected but not persisted: bound identities are saved without email.
        let _ = validate_email(&mut self.prompter)?;

        let record = IdentityRecord::new(name, username, secret, String::new());
        self.store.save(&record)?;

        Ok(BootstrapState::Ready(record))
    }

    /// Prompts until the normalized answer is usable as a table name.
    fn prompt_username(&mut self, prompt: &str) -> IdentityResult<String> {
        loop {
            let candidate = normalize_username(&self.prompter.input_str(prompt)?);
            if is_valid_table_identifier(&candidate) {
                return Ok(candidate);
            }
            self.prompter.notify(USERNAME_INVALID_MESSAGE);
        }
    }
}
