//! Route table and document titles.

use thiserror::Error;

/// Suffix appended to every page title.
pub const DEFAULT_TITLE_SUFFIX: &str = "Healthcare App";

/// Routing errors.
#[derive(Error, Debug, PartialEq)]
pub enum RouteError {
    #[error("No route matches path: {0}")]
    NotFound(String),
}

pub type RouteResult<T> = Result<T, RouteError>;

/// Pages the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    DoctorSchedule,
    MedicalSurvey,
    PatientRegistration,
}

impl Page {
    /// Stable page identifier (matches the host's component name).
    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::DoctorSchedule => "DoctorSchedule",
            Page::MedicalSurvey => "MedicalSurvey",
            Page::PatientRegistration => "PatientRegistration",
        }
    }
}

/// A navigable path bound to a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    /// Absolute path, always starting with `/`
    pub path: &'static str,
    /// Page rendered at this path
    pub page: Page,
    /// Display title, without suffix
    pub title: &'static str,
}

impl Route {
    /// Full window title for this route, e.g. `"Jadwal Dokter | Healthcare App"`.
    pub fn document_title(&self, suffix: &str) -> String {
        format!("{} | {}", self.title, suffix)
    }
}

/// Every route the dashboard exposes, in menu order.
pub static ROUTES: [Route; 4] = [
    Route {
        path: "/",
        page: Page::Home,
        title: "Home",
    },
    Route {
        path: "/jadwal-dokter",
        page: Page::DoctorSchedule,
        title: "Jadwal Dokter",
    },
    Route {
        path: "/survey-kemasyarakatan",
        page: Page::MedicalSurvey,
        title: "Survey Kemasyarakatan",
    },
    Route {
        path: "/daftar-pasien",
        page: Page::PatientRegistration,
        title: "Daftar Pasien",
    },
];

/// Resolve a path to its route.
///
/// Query strings, fragments and a single trailing slash are ignored, so
/// `/jadwal-dokter/?day=Senin` resolves like `/jadwal-dokter`.
pub fn resolve(path: &str) -> RouteResult<&'static Route> {
    let normalized = normalize_path(path);
    ROUTES
        .iter()
        .find(|route| route.path == normalized)
        .ok_or_else(|| RouteError::NotFound(path.to_string()))
}

fn normalize_path(path: &str) -> &str {
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    let path = path[..end].trim();
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}
