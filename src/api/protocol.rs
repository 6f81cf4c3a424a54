use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kiosk service status, server-authoritative.
/// Wire strings are exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KioskStatus {
    #[serde(rename = "Libre")]
    Libre,
    #[serde(rename = "Pendiente")]
    Pendiente,
    #[serde(rename = "En atención")]
    EnAtencion,
    #[serde(rename = "Finalizada")]
    Finalizada,
}

impl KioskStatus {
    /// The exact string used on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            KioskStatus::Libre => "Libre",
            KioskStatus::Pendiente => "Pendiente",
            KioskStatus::EnAtencion => "En atención",
            KioskStatus::Finalizada => "Finalizada",
        }
    }

    /// Presentation class for view adapters.
    pub fn css_class(&self) -> &'static str {
        match self {
            KioskStatus::Libre => "libre",
            KioskStatus::Pendiente => "pendiente",
            KioskStatus::EnAtencion => "en-atencion",
            KioskStatus::Finalizada => "finalizada",
        }
    }
}

impl fmt::Display for KioskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.wire_name())
    }
}

/// One kiosk as reported by `GET /estado`.
/// Extra wire fields (`inicio`, `fin`) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KioskRecord {
    #[serde(rename = "estado")]
    pub status: KioskStatus,
    #[serde(rename = "mesero", default)]
    pub staff: Option<String>,
    #[serde(rename = "ultima_accion", default)]
    pub last_action: Option<String>,
}

/// Full kiosk-state snapshot. Sorted map for deterministic iteration.
pub type BoardState = BTreeMap<String, KioskRecord>;

fn default_true() -> bool {
    true
}

/// One staff member as reported by `GET /meseros/disponibilidad`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffAvailability {
    #[serde(rename = "disponible", default = "default_true")]
    pub available: bool,
    /// Occupying kiosk; meaningful only when unavailable, and may be
    /// absent even then.
    #[serde(rename = "kiosko", default)]
    pub kiosk: Option<String>,
}

pub type AvailabilityMap = BTreeMap<String, StaffAvailability>;

/// Message reply from the mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionReply {
    pub msg: String,
}

const CANNOT_ATTEND: &str = "no puede ser atendido";
const ALREADY_ATTENDING: &str = "ya está atendiendo";

impl ActionReply {
    /// Whether the server rejected an assignment as a business conflict.
    /// The backend signals this only through message text, so the exact
    /// phrases are part of the protocol.
    pub fn is_conflict(&self) -> bool {
        self.msg.contains(CANNOT_ATTEND) || self.msg.contains(ALREADY_ATTENDING)
    }
}

/// Short user-facing label for a kiosk identifier: `kiosko-3` -> `K3`.
pub fn short_kiosk_label(kiosk: &str) -> String {
    kiosk.replace("kiosko-", "K")
}
