//! Party providers.
//!
//! Each [`Venue`] has one stateless implementation of [`PartyService`]. The
//! registry never calls the activity methods by name; it goes through
//! [`perform`], which maps an [`Activity`] to the matching method.

mod classroom;
mod school;

pub use classroom::ClassroomParty;
pub use school::SchoolParty;

use std::sync::Arc;

use party_types::party::{Activity, Venue};

/// A venue's set of party activities.
///
/// Every activity takes no arguments and returns a fixed description.
pub trait PartyService: Send + Sync {
    /// The venue this service runs parties for.
    fn venue(&self) -> Venue;

    fn sing(&self) -> String;

    fn dance(&self) -> String;

    fn rap(&self) -> String;

    fn basketball(&self) -> String;

    /// Activities this service exposes to the registry.
    fn activities(&self) -> &'static [Activity] {
        &Activity::ALL
    }
}

/// Run one activity on a service.
pub fn perform(service: &dyn PartyService, activity: Activity) -> String {
    let result = match activity {
        Activity::Sing => service.sing(),
        Activity::Dance => service.dance(),
        Activity::Rap => service.rap(),
        Activity::Basketball => service.basketball(),
    };
    tracing::debug!(venue = %service.venue(), %activity, %result, "activity performed");
    result
}

/// The fixed set of services, one per venue.
pub fn default_services() -> Vec<Arc<dyn PartyService>> {
    vec![Arc::new(SchoolParty), Arc::new(ClassroomParty)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_services_cover_every_venue() {
        let venues: Vec<Venue> = default_services().iter().map(|s| s.venue()).collect();
        assert_eq!(venues, Venue::ALL.to_vec());
    }

    #[test]
    fn perform_routes_to_matching_method() {
        let school = SchoolParty;
        assert_eq!(perform(&school, Activity::Sing), school.sing());
        assert_eq!(perform(&school, Activity::Dance), school.dance());
        assert_eq!(perform(&school, Activity::Rap), school.rap());
        assert_eq!(perform(&school, Activity::Basketball), school.basketball());
    }
}
