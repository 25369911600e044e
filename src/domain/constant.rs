//! Console texts and structured tracing event names

/// Fixed console texts
pub mod text {
    pub const BANNER: &str = "=== Conference Center Event Management System ===";
    pub const MENU_HEADER: &str = "Menu:";
    pub const MENU_ADD_WORKSHOP: &str = "1. Add a Workshop";
    pub const MENU_ADD_SEMINAR: &str = "2. Add a Seminar";
    pub const MENU_VIEW_ALL: &str = "3. View all events";
    pub const MENU_EXIT: &str = "4. Exit";
    pub const MENU_PROMPT: &str = "Choose an option (1-4): ";
    pub const GOODBYE: &str = "Exiting program. Goodbye!";

    pub const INVALID_INTEGER: &str = "Please enter a valid integer.";

    pub const WORKSHOP_NAME_PROMPT: &str = "Enter workshop name: ";
    pub const CAPACITY_PROMPT: &str = "Enter capacity (integer >= 0): ";
    pub const WORKSHOP_TOPIC_PROMPT: &str = "Enter workshop topic: ";
    pub const COMPANY_PROMPT: &str = "Enter company: ";
    pub const WORKSHOP_ADDED: &str = "Workshop added successfully.";

    pub const SEMINAR_NAME_PROMPT: &str = "Enter seminar name: ";
    pub const SPEAKER_PROMPT: &str = "Enter speaker name: ";
    pub const SEMINAR_ADDED: &str = "Seminar added successfully.";

    pub const NO_EVENTS: &str = "No events registered yet.";
    pub const SUMMARY_HEADER: &str = "--- All Events (summary) ---";
    pub const SUMMARY_FOOTER: &str = "-----------------------------";
    pub const DETAIL_PROMPT: &str = "Show detailed view of each event? (y/n): ";
    pub const DETAIL_HEADER: &str = "--- Detailed Events ---";
    pub const DETAIL_DIVIDER: &str = "---------------------";
}

/// Field defaults applied to blank input
pub mod defaults {
    pub const NAME: &str = "Unnamed Event";
    pub const TOPIC: &str = "General";
    pub const COMPANY: &str = "Unknown";
    pub const SPEAKER: &str = "TBD";
}

/// Menu loop events
pub mod menu {
    pub const MENU_STARTED: &str = "menu.started";
    pub const CHOICE_RECEIVED: &str = "choice.received";
    pub const CHOICE_INVALID: &str = "choice.invalid";
    pub const INTEGER_REJECTED: &str = "integer.rejected";
    pub const ERROR_REPORTED: &str = "error.reported";
    pub const ADD_FAILED: &str = "add.failed";
    pub const MENU_EXITED: &str = "menu.exited";
}

/// Registry events
pub mod registry {
    pub const EVENT_REGISTERED: &str = "event.registered";
    pub const CAPACITY_REJECTED: &str = "capacity.rejected";
}
