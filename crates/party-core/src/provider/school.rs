use party_types::party::Venue;

use super::PartyService;

/// Party held at school.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchoolParty;

impl PartyService for SchoolParty {
    fn venue(&self) -> Venue {
        Venue::School
    }

    fn sing(&self) -> String {
        "在学校唱".to_string()
    }

    fn dance(&self) -> String {
        "在学校跳".to_string()
    }

    fn rap(&self) -> String {
        "在学校rap".to_string()
    }

    fn basketball(&self) -> String {
        "在学校打篮球".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn school_activities() {
        let school = SchoolParty;
        assert_eq!(school.venue(), Venue::School);
        assert_eq!(school.sing(), "在学校唱");
        assert_eq!(school.dance(), "在学校跳");
        assert_eq!(school.rap(), "在学校rap");
        assert_eq!(school.basketball(), "在学校打篮球");
    }
}
