//! Session state: display name, login flags and the login modal.

use std::sync::mpsc::Receiver;

use super::{ChangeEvent, Notifier, StateResult};
use crate::db::Database;

/// Storage key for the logged-in user's display name.
pub const USER_KEY: &str = "healthcare_user";

/// Who is using the dashboard.
///
/// There is no authentication: logging in just records a display name.
/// `is_logged_in` is true exactly when `user_name` is non-empty.
#[derive(Debug, Default)]
pub struct SessionState {
    user_name: String,
    is_logged_in: bool,
    show_login_modal: bool,
    login_input: String,
    notifier: Notifier,
}

impl SessionState {
    /// Create a logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn show_login_modal(&self) -> bool {
        self.show_login_modal
    }

    /// Text currently typed into the login field. Never persisted.
    pub fn login_input(&self) -> &str {
        &self.login_input
    }

    pub fn subscribe(&mut self) -> Receiver<ChangeEvent> {
        self.notifier.subscribe()
    }

    /// Log in under `name`.
    ///
    /// Blank names are ignored without touching state; check
    /// [`is_logged_in`](Self::is_logged_in) to see whether it took.
    pub fn login(&mut self, db: &Database, name: &str) -> StateResult<()> {
        let name = trim_name(name);
        if name.is_empty() {
            tracing::debug!("ignoring login with blank name");
            return Ok(());
        }

        db.set_value(USER_KEY, name)?;

        self.user_name = name.to_string();
        self.is_logged_in = true;
        self.login_input.clear();
        self.show_login_modal = false;

        tracing::info!(user = %self.user_name, "logged in");
        self.notifier.notify(ChangeEvent::SessionChanged { is_logged_in: true });
        self.notifier
            .notify(ChangeEvent::LoginModalChanged { visible: false });
        Ok(())
    }

    /// Log in with whatever is in the login field.
    pub fn submit_login(&mut self, db: &Database) -> StateResult<()> {
        let input = self.login_input.clone();
        self.login(db, &input)
    }

    /// Log out and forget the stored name.
    pub fn logout(&mut self, db: &Database) -> StateResult<()> {
        db.remove_value(USER_KEY)?;

        self.user_name.clear();
        self.is_logged_in = false;

        tracing::info!("logged out");
        self.notifier
            .notify(ChangeEvent::SessionChanged { is_logged_in: false });
        Ok(())
    }

    /// Restore a previous login from storage.
    ///
    /// An absent or empty stored name leaves the session as it is.
    pub fn load_user(&mut self, db: &Database) -> StateResult<()> {
        match db.get_value(USER_KEY)? {
            Some(saved) if !saved.is_empty() => {
                self.user_name = saved;
                self.is_logged_in = true;
                tracing::info!(user = %self.user_name, "restored session");
                self.notifier.notify(ChangeEvent::SessionChanged { is_logged_in: true });
            }
            _ => tracing::debug!("no saved session"),
        }
        Ok(())
    }

    pub fn open_login_modal(&mut self) {
        self.set_modal(true);
    }

    pub fn close_login_modal(&mut self) {
        self.set_modal(false);
    }

    /// Replace the login field's text.
    pub fn set_login_input(&mut self, text: &str) {
        self.login_input = text.to_string();
    }

    /// Drop in-memory state back to logged out. Storage is left alone.
    pub fn reset(&mut self) {
        self.user_name.clear();
        self.is_logged_in = false;
        self.login_input.clear();
        self.notifier
            .notify(ChangeEvent::SessionChanged { is_logged_in: false });
        self.set_modal(false);
    }

    fn set_modal(&mut self, visible: bool) {
        self.show_login_modal = visible;
        self.notifier.notify(ChangeEvent::LoginModalChanged { visible });
    }
}

/// Trim whitespace, including the byte-order mark that pasted names can carry.
fn trim_name(name: &str) -> &str {
    name.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Database, SessionState) {
        (Database::open_in_memory().unwrap(), SessionState::new())
    }

    #[test]
    fn test_login_trims_and_persists() {
        let (db, mut session) = setup();
        session.open_login_modal();
        session.set_login_input("  Alice  ");

        session.login(&db, "  Alice  ").unwrap();

        assert!(session.is_logged_in());
        assert_eq!(session.user_name(), "Alice");
        assert!(!session.show_login_modal());
        assert_eq!(session.login_input(), "");
        assert_eq!(db.get_value(USER_KEY).unwrap(), Some("Alice".to_string()));
    }

    #[test]
    fn test_blank_login_is_ignored() {
        let (db, mut session) = setup();
        session.open_login_modal();

        session.login(&db, "   \t").unwrap();

        assert!(!session.is_logged_in());
        assert_eq!(session.user_name(), "");
        // Modal stays open so the user can retry
        assert!(session.show_login_modal());
        assert_eq!(db.get_value(USER_KEY).unwrap(), None);
    }

    #[test]
    fn test_byte_order_mark_is_blank() {
        let (db, mut session) = setup();

        session.login(&db, "\u{FEFF} \u{FEFF}").unwrap();
        assert!(!session.is_logged_in());
        assert_eq!(db.get_value(USER_KEY).unwrap(), None);

        session.login(&db, "\u{FEFF}Alice ").unwrap();
        assert_eq!(session.user_name(), "Alice");
    }

    #[test]
    fn test_submit_login_uses_input() {
        let (db, mut session) = setup();
        session.set_login_input(" Budi ");

        session.submit_login(&db).unwrap();

        assert_eq!(session.user_name(), "Budi");
        assert_eq!(session.login_input(), "");
    }

    #[test]
    fn test_logout_clears_storage() {
        let (db, mut session) = setup();
        session.login(&db, "Alice").unwrap();

        session.logout(&db).unwrap();

        assert!(!session.is_logged_in());
        assert_eq!(session.user_name(), "");
        assert_eq!(db.get_value(USER_KEY).unwrap(), None);
    }

    #[test]
    fn test_load_user() {
        let (db, mut session) = setup();
        db.set_value(USER_KEY, "Siti").unwrap();

        session.load_user(&db).unwrap();

        assert!(session.is_logged_in());
        assert_eq!(session.user_name(), "Siti");
    }

    #[test]
    fn test_load_user_without_saved_name() {
        let (db, mut session) = setup();
        session.load_user(&db).unwrap();

        assert!(!session.is_logged_in());
        assert_eq!(session.user_name(), "");
    }

    #[test]
    fn test_modal_toggle_only_touches_flag() {
        let (_db, mut session) = setup();
        session.open_login_modal();
        assert!(session.show_login_modal());
        session.close_login_modal();
        assert!(!session.show_login_modal());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_events() {
        let (db, mut session) = setup();
        let rx = session.subscribe();

        session.login(&db, "Alice").unwrap();
        session.logout(&db).unwrap();

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                ChangeEvent::SessionChanged { is_logged_in: true },
                ChangeEvent::LoginModalChanged { visible: false },
                ChangeEvent::SessionChanged { is_logged_in: false },
            ]
        );
    }

    #[test]
    fn test_reset_emits_events() {
        let (db, mut session) = setup();
        let rx = session.subscribe();
        session.login(&db, "Alice").unwrap();
        session.open_login_modal();
        rx.try_iter().for_each(drop);

        session.reset();

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                ChangeEvent::SessionChanged { is_logged_in: false },
                ChangeEvent::LoginModalChanged { visible: false },
            ]
        );
        assert!(!session.show_login_modal());
    }

    #[test]
    fn test_reset_keeps_storage() {
        let (db, mut session) = setup();
        session.login(&db, "Alice").unwrap();

        session.reset();
        assert!(!session.is_logged_in());

        session.load_user(&db).unwrap();
        assert_eq!(session.user_name(), "Alice");
    }
}
