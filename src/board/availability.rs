use crate::api::protocol::AvailabilityMap;

/// Label shown when a staff member is occupied but the record does not say
/// where.
pub const UNKNOWN_KIOSK: &str = "kiosko desconocido";

/// Last-fetched staff availability, replaced wholesale on every refresh.
/// Eventually consistent with the kiosk-state snapshot; transient
/// mismatches between the two are expected and tolerated.
#[derive(Debug, Default)]
pub struct AvailabilityCache {
    staff: AvailabilityMap,
}

impl AvailabilityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cache with a freshly fetched mapping.
    pub fn replace(&mut self, staff: AvailabilityMap) {
        self.staff = staff;
    }

    /// Fail-open: staff members without a record count as available.
    pub fn is_available(&self, staff: &str) -> bool {
        self.staff.get(staff).is_none_or(|s| s.available)
    }

    /// The kiosk occupying `staff`, if the cache marks them unavailable.
    pub fn occupied_at(&self, staff: &str) -> Option<String> {
        let record = self.staff.get(staff)?;
        if record.available {
            return None;
        }
        Some(
            record
                .kiosk
                .clone()
                .unwrap_or_else(|| UNKNOWN_KIOSK.to_string()),
        )
    }

    pub fn staff(&self) -> &AvailabilityMap {
        &self.staff
    }
}
