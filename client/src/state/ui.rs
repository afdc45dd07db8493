//! Local dashboard chrome state (tabs, detail dialogs, notices).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the record views so list and
//! editor state stay identical between the admin and employee screens.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use records::entity::{Inspection, User, Vehicle};

/// Admin dashboard sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Vehicles,
    Users,
    Trips,
    Inspections,
    Service,
}

impl AdminTab {
    pub const ALL: [Self; 5] = [Self::Vehicles, Self::Users, Self::Trips, Self::Inspections, Self::Service];

    pub fn label(self) -> &'static str {
        match self {
            Self::Vehicles => "Vehicles",
            Self::Users => "Users",
            Self::Trips => "Trips",
            Self::Inspections => "Inspections",
            Self::Service => "Service",
        }
    }
}

/// Read-only record shown in the detail dialog.
#[derive(Clone, Debug, PartialEq)]
pub enum Detail {
    Vehicle(Vehicle),
    Inspection(Inspection),
}

/// Admin dashboard presentation state.
#[derive(Clone, Debug, Default)]
pub struct AdminUi {
    pub tab: AdminTab,
    pub detail: Option<Detail>,
    /// User loaded via "view" in the users tab.
    pub selected_user: Option<User>,
    /// Text typed into the assign-vehicle field of the user panel.
    pub assign_vehicle_text: String,
    /// Last acknowledgement from the maintenance notification call.
    pub service_notice: Option<String>,
}

impl AdminUi {
    /// Switching tabs closes per-tab panels.
    pub fn select_tab(&mut self, tab: AdminTab) {
        if self.tab != tab {
            self.tab = tab;
            self.detail = None;
            self.selected_user = None;
            self.assign_vehicle_text.clear();
        }
    }

    pub fn show_user(&mut self, user: User) {
        self.assign_vehicle_text = user.vehicle_id.map(|id| id.to_string()).unwrap_or_default();
        self.selected_user = Some(user);
    }

    /// Vehicle id to assign, if the field holds a valid number.
    pub fn assign_vehicle_id(&self) -> Option<i64> {
        self.assign_vehicle_text.trim().parse().ok()
    }
}

/// Employee dashboard presentation state.
#[derive(Clone, Debug, Default)]
pub struct EmployeeUi {
    pub assigned_vehicle: Option<Vehicle>,
    pub show_vehicle: bool,
}
