use party_types::party::Venue;

use super::PartyService;

/// Party held in the classroom.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassroomParty;

impl PartyService for ClassroomParty {
    fn venue(&self) -> Venue {
        Venue::Classroom
    }

    fn sing(&self) -> String {
        "在班里唱".to_string()
    }

    fn dance(&self) -> String {
        "在班里跳".to_string()
    }

    fn rap(&self) -> String {
        "在班里rap".to_string()
    }

    fn basketball(&self) -> String {
        "在班里打篮球".to_string()
    }
}
