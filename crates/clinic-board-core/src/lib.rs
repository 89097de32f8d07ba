//! Clinic Board Core Library
//!
//! State layer for a clinic scheduling dashboard. The host UI (reached over
//! UniFFI) renders pages; this crate owns what they show.
//!
//! # Architecture
//!
//! ```text
//!                         Host UI (Swift / Kotlin)
//!                                   │
//!                         ┌─────────▼─────────┐
//!                         │  ClinicBoardCore  │
//!                         └─────────┬─────────┘
//!           ┌───────────────┬───────┴───────┬────────────────┐
//!           ▼               ▼               ▼                ▼
//!     SessionState   PreferenceState   RosterState    PresentationContext
//!           │               │                          (markers + title)
//!           └───────┬───────┘
//!                   ▼
//!          Database (kv_store)
//! ```
//!
//! The three state containers never call each other. Only session and
//! preference touch storage.
//!
//! # Modules
//!
//! - [`db`]: SQLite-backed key-value store
//! - [`models`]: Doctor records and weekday names
//! - [`state`]: Session, preference and roster containers
//! - [`presentation`]: Root markers and title mirrored by the host
//! - [`config`]: TOML configuration
//! - [`logging`]: `tracing` subscriber setup

pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod presentation;
pub mod state;

// Re-export commonly used types
pub use config::DashboardConfig;
pub use db::Database;
pub use models::Doctor;
pub use presentation::PresentationContext;
pub use state::{ChangeEvent, PreferenceState, RosterState, SessionState};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use clinic_board_nav::Route;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum ClinicBoardError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<db::DbError> for ClinicBoardError {
    fn from(e: db::DbError) -> Self {
        match e {
            db::DbError::Json { .. } => ClinicBoardError::SerializationError(e.to_string()),
            db::DbError::Sqlite(_) => ClinicBoardError::StorageError(e.to_string()),
        }
    }
}

impl From<state::StateError> for ClinicBoardError {
    fn from(e: state::StateError) -> Self {
        match e {
            state::StateError::Storage(db_err) => db_err.into(),
        }
    }
}

impl From<config::ConfigError> for ClinicBoardError {
    fn from(e: config::ConfigError) -> Self {
        ClinicBoardError::ConfigError(e.to_string())
    }
}

impl From<clinic_board_nav::RouteError> for ClinicBoardError {
    fn from(e: clinic_board_nav::RouteError) -> Self {
        match e {
            clinic_board_nav::RouteError::NotFound(path) => ClinicBoardError::RouteNotFound(path),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for ClinicBoardError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        ClinicBoardError::StorageError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Install the log subscriber. Returns false if one was already installed.
#[uniffi::export]
pub fn init_logging(filter: String) -> bool {
    logging::install(&filter)
}

/// Open or create the dashboard store at the given path.
#[uniffi::export]
pub fn open_dashboard(path: String) -> Result<Arc<ClinicBoardCore>, ClinicBoardError> {
    let db = Database::open(&path)?;
    Ok(Arc::new(ClinicBoardCore::new(db, DashboardConfig::default())))
}

/// Create a dashboard backed by an in-memory store (for testing).
#[uniffi::export]
pub fn open_dashboard_in_memory() -> Result<Arc<ClinicBoardCore>, ClinicBoardError> {
    let db = Database::open_in_memory()?;
    Ok(Arc::new(ClinicBoardCore::new(db, DashboardConfig::default())))
}

/// Create a dashboard from a TOML config file.
#[uniffi::export]
pub fn open_dashboard_from_config_file(
    config_path: String,
) -> Result<Arc<ClinicBoardCore>, ClinicBoardError> {
    let config = DashboardConfig::load(&config_path)?;
    ClinicBoardCore::from_config(config).map(Arc::new)
}

/// Create a dashboard from a TOML config string.
#[uniffi::export]
pub fn open_dashboard_with_config(toml: String) -> Result<Arc<ClinicBoardCore>, ClinicBoardError> {
    let config = DashboardConfig::from_toml_str(&toml)?;
    ClinicBoardCore::from_config(config).map(Arc::new)
}

/// All navigable routes, in menu order.
#[uniffi::export]
pub fn list_routes() -> Vec<FfiRoute> {
    clinic_board_nav::ROUTES.iter().map(|r| r.into()).collect()
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe dashboard state for FFI.
#[derive(uniffi::Object)]
pub struct ClinicBoardCore {
    db: Arc<Mutex<Database>>,
    session: Mutex<SessionState>,
    preference: Mutex<PreferenceState>,
    roster: Mutex<RosterState>,
    presentation: Mutex<PresentationContext>,
    title_suffix: String,
}

impl ClinicBoardCore {
    /// Wrap an opened database. Containers start at their defaults.
    pub fn new(db: Database, config: DashboardConfig) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            session: Mutex::new(SessionState::new()),
            preference: Mutex::new(PreferenceState::new()),
            roster: Mutex::new(RosterState::new()),
            presentation: Mutex::new(PresentationContext::new()),
            title_suffix: config.title_suffix,
        }
    }

    /// Open the configured store and install logging with the configured
    /// filter, unless a subscriber is already in place.
    pub fn from_config(config: DashboardConfig) -> Result<Self, ClinicBoardError> {
        logging::install(&config.log_filter);
        let db = match &config.database_path {
            Some(path) => Database::open(path)?,
            None => Database::open_in_memory()?,
        };
        Ok(Self::new(db, config))
    }
}

#[uniffi::export]
impl ClinicBoardCore {
    // =========================================================================
    // Session Operations
    // =========================================================================

    /// Log in under a display name. Blank names are ignored.
    pub fn login(&self, name: String) -> Result<FfiSession, ClinicBoardError> {
        let db = self.db.lock()?;
        let mut session = self.session.lock()?;
        session.login(&db, &name)?;
        Ok((&*session).into())
    }

    /// Log in with the current login field text.
    pub fn submit_login(&self) -> Result<FfiSession, ClinicBoardError> {
        let db = self.db.lock()?;
        let mut session = self.session.lock()?;
        session.submit_login(&db)?;
        Ok((&*session).into())
    }

    /// Log out and forget the stored name.
    pub fn logout(&self) -> Result<FfiSession, ClinicBoardError> {
        let db = self.db.lock()?;
        let mut session = self.session.lock()?;
        session.logout(&db)?;
        Ok((&*session).into())
    }

    /// Restore the saved login, if any. Call once at startup.
    pub fn load_user(&self) -> Result<FfiSession, ClinicBoardError> {
        let db = self.db.lock()?;
        let mut session = self.session.lock()?;
        session.load_user(&db)?;
        Ok((&*session).into())
    }

    pub fn open_login_modal(&self) -> Result<(), ClinicBoardError> {
        self.session.lock()?.open_login_modal();
        Ok(())
    }

    pub fn close_login_modal(&self) -> Result<(), ClinicBoardError> {
        self.session.lock()?.close_login_modal();
        Ok(())
    }

    pub fn set_login_input(&self, text: String) -> Result<(), ClinicBoardError> {
        self.session.lock()?.set_login_input(&text);
        Ok(())
    }

    /// Current session snapshot.
    pub fn session(&self) -> Result<FfiSession, ClinicBoardError> {
        let session = self.session.lock()?;
        Ok((&*session).into())
    }

    // =========================================================================
    // Preference Operations
    // =========================================================================

    /// Load and apply the dark-mode flag. Call once at startup.
    ///
    /// `system_prefers_dark` is the host's color-scheme signal, or None if
    /// it has none.
    pub fn initialize_dark_mode(
        &self,
        system_prefers_dark: Option<bool>,
    ) -> Result<bool, ClinicBoardError> {
        let db = self.db.lock()?;
        let mut preference = self.preference.lock()?;
        let mut presentation = self.presentation.lock()?;
        Ok(preference.initialize_dark_mode(&db, &mut presentation, system_prefers_dark)?)
    }

    /// Flip dark mode. Returns the new value.
    pub fn toggle_dark_mode(&self) -> Result<bool, ClinicBoardError> {
        let db = self.db.lock()?;
        let mut preference = self.preference.lock()?;
        let mut presentation = self.presentation.lock()?;
        Ok(preference.toggle_dark_mode(&db, &mut presentation)?)
    }

    pub fn is_dark_mode(&self) -> Result<bool, ClinicBoardError> {
        Ok(self.preference.lock()?.is_dark_mode())
    }

    // =========================================================================
    // Roster Operations
    // =========================================================================

    /// Today's day name from the local clock.
    pub fn current_day_name(&self) -> Result<String, ClinicBoardError> {
        Ok(self.roster.lock()?.current_day_name().to_string())
    }

    /// Every doctor on the roster.
    pub fn doctor_list(&self) -> Result<Vec<FfiDoctor>, ClinicBoardError> {
        let roster = self.roster.lock()?;
        Ok(roster.doctor_list().iter().map(|d| d.into()).collect())
    }

    /// Recompute and return today's doctors.
    pub fn get_today_doctors(&self) -> Result<Vec<FfiDoctor>, ClinicBoardError> {
        let mut roster = self.roster.lock()?;
        Ok(roster.refresh_today().iter().map(|d| d.into()).collect())
    }

    /// Move the cursor to the next of today's doctors, wrapping around.
    pub fn get_next_doctor(&self) -> Result<(), ClinicBoardError> {
        self.roster.lock()?.next_doctor();
        Ok(())
    }

    pub fn reset_doctor_index(&self) -> Result<(), ClinicBoardError> {
        self.roster.lock()?.reset_doctor_index();
        Ok(())
    }

    pub fn current_doctor_index(&self) -> Result<u32, ClinicBoardError> {
        Ok(self.roster.lock()?.current_index() as u32)
    }

    /// Doctors practicing on a named day (e.g. "Rabu"). Leaves today's view alone.
    pub fn doctors_on_day(&self, day_name: String) -> Result<Vec<FfiDoctor>, ClinicBoardError> {
        let day = models::parse_day_name(&day_name)
            .ok_or_else(|| ClinicBoardError::InvalidInput(format!("unknown day: {}", day_name)))?;
        let roster = self.roster.lock()?;
        Ok(roster.doctors_on(day).iter().map(|d| d.into()).collect())
    }

    /// Doctor under the cursor, if today's list is non-empty.
    pub fn current_doctor(&self) -> Result<Option<FfiDoctor>, ClinicBoardError> {
        Ok(self.roster.lock()?.current_doctor().map(|d| d.into()))
    }

    // =========================================================================
    // Navigation & Presentation
    // =========================================================================

    /// Navigate to a path and update the window title.
    pub fn navigate(&self, path: String) -> Result<FfiRoute, ClinicBoardError> {
        let route = clinic_board_nav::resolve(&path)?;
        self.presentation
            .lock()?
            .apply_route(route, &self.title_suffix);
        Ok(route.into())
    }

    /// Drop all in-memory state back to startup defaults and clear the title.
    ///
    /// Storage is untouched, so `load_user` and `initialize_dark_mode`
    /// restore the saved values afterwards.
    pub fn reset_state(&self) -> Result<(), ClinicBoardError> {
        self.session.lock()?.reset();
        self.roster.lock()?.reset();
        let mut presentation = self.presentation.lock()?;
        self.preference.lock()?.reset(&mut presentation);
        presentation.set_title("");
        tracing::debug!("dashboard state reset");
        Ok(())
    }

    /// Markers and title the host should mirror onto its root.
    pub fn presentation(&self) -> Result<FfiPresentation, ClinicBoardError> {
        let presentation = self.presentation.lock()?;
        Ok((&*presentation).into())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe session snapshot.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiSession {
    pub user_name: String,
    pub is_logged_in: bool,
    pub show_login_modal: bool,
    pub login_input: String,
}

impl From<&SessionState> for FfiSession {
    fn from(session: &SessionState) -> Self {
        Self {
            user_name: session.user_name().to_string(),
            is_logged_in: session.is_logged_in(),
            show_login_modal: session.show_login_modal(),
            login_input: session.login_input().to_string(),
        }
    }
}

/// FFI-safe doctor.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiDoctor {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    /// Practice days as display names (e.g. "Senin")
    pub days: Vec<String>,
    pub time_range: String,
    pub experience_label: String,
    pub rating: f64,
}

impl From<&Doctor> for FfiDoctor {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
            days: doctor.day_names().into_iter().map(String::from).collect(),
            time_range: doctor.time_range.clone(),
            experience_label: doctor.experience_label.clone(),
            rating: doctor.rating,
        }
    }
}

/// FFI-safe route.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiRoute {
    pub path: String,
    pub page: String,
    pub title: String,
}

impl From<&Route> for FfiRoute {
    fn from(route: &Route) -> Self {
        Self {
            path: route.path.to_string(),
            page: route.page.name().to_string(),
            title: route.title.to_string(),
        }
    }
}

/// FFI-safe presentation state.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiPresentation {
    pub markers: Vec<String>,
    pub title: String,
}

impl From<&PresentationContext> for FfiPresentation {
    fn from(ctx: &PresentationContext) -> Self {
        Self {
            markers: ctx.markers(),
            title: ctx.title().to_string(),
        }
    }
}
