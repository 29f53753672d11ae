//! Top-level application context.
//!
//! Owns all the state the original app kept in process-wide singletons:
//! the catalog, the active filter, the conversation log, the login session
//! and the assistant's random source. Single logical thread of control;
//! everything mutates only in response to discrete user events.

use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use uuid::Uuid;

use crate::assistant;
use crate::catalog::{Catalog, Filter};
use crate::conversation::{ConversationLog, ConversationMessage, DeliveryStatus};
use crate::error::Result;
use crate::session::UserProfile;
use crate::storage::{Config, Session, SessionStore};

/// Application context: catalog, filter, conversation and session.
pub struct App {
    catalog: Catalog,
    filter: Filter,
    conversation: ConversationLog,
    store: SessionStore,
    session: Session,
    config: Config,
    rng: Mcg128Xsl64,
}

impl App {
    /// Build a context from explicit parts. The stored session is loaded
    /// (and validated, discarding invalid state) exactly once, here.
    pub fn new(catalog: Catalog, store: SessionStore, config: Config) -> Self {
        let rng = match config.assistant.seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        let session = store.load();
        Self {
            catalog,
            filter: Filter::all(),
            conversation: ConversationLog::new(),
            store,
            session,
            config,
            rng,
        }
    }

    /// Context over the built-in catalog and default storage locations.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created or the
    /// config file cannot be read.
    pub fn open_default() -> Result<Self> {
        let store = SessionStore::open_default()?;
        let config = Config::load()?;
        Ok(Self::new(Catalog::builtin(), store, config))
    }

    // ── Chat ─────────────────────────────────────────────────────────

    /// Append a user message, route it, and append the assistant reply.
    ///
    /// Returns the id of the assistant message. The caller is responsible
    /// for the cosmetic typing delay (see [`App::typing_delay`]); messages
    /// order by submission regardless.
    pub fn send_message(&mut self, text: &str) -> Uuid {
        let user_id = self.conversation.push_user(text);
        let reply = assistant::respond(text, &self.filter, &self.catalog, &mut self.rng);
        self.conversation.set_status(user_id, DeliveryStatus::Sent);
        self.conversation.push_assistant(reply)
    }

    /// Cosmetic delay to wait before revealing the next assistant reply.
    pub fn typing_delay(&mut self) -> Duration {
        assistant::typing_delay(
            &mut self.rng,
            self.config.assistant.typing_delay_min_ms,
            self.config.assistant.typing_delay_extra_ms,
        )
    }

    pub fn conversation(&self) -> &[ConversationMessage] {
        self.conversation.messages()
    }

    /// Discard all history, back to the single greeting.
    pub fn clear_conversation(&mut self) {
        self.conversation.clear();
    }

    // ── Filter ───────────────────────────────────────────────────────

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    // ── Session ──────────────────────────────────────────────────────

    /// Validate and persist a login.
    ///
    /// # Errors
    ///
    /// Returns a validation error (and leaves stored state untouched) when
    /// the profile is incomplete or the email is malformed.
    pub fn login(&mut self, profile: &UserProfile) -> Result<()> {
        self.session = self.store.login(profile)?;
        Ok(())
    }

    pub fn logout(&mut self) {
        self.session = self.store.logout();
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.session.profile()
    }

    // ── Misc ─────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
