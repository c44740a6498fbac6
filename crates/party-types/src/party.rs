use std::fmt;
use std::str::FromStr;

use crate::error::DispatchError;

/// Message returned for every request that cannot be served.
///
/// Unknown venue, unknown activity and a failing activity all collapse to
/// this one string.
pub const FALLBACK_MESSAGE: &str = "未找到方法，派对活动不存在!";

/// A venue hosting a party ("provider" in request paths).
///
/// The set is closed: every venue offers the full list of [`Activity`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Venue {
    School,
    Classroom,
}

impl Venue {
    /// All venues, in registration order.
    pub const ALL: [Venue; 2] = [Venue::School, Venue::Classroom];

    /// Canonical path segment for this venue.
    pub fn as_str(&self) -> &'static str {
        match self {
            Venue::School => "school",
            Venue::Classroom => "classroom",
        }
    }

    /// Legacy service name still accepted in request paths.
    pub fn legacy_name(&self) -> &'static str {
        match self {
            Venue::School => "schoolPartyService",
            Venue::Classroom => "classPartyService",
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Venue {
    type Err = DispatchError;

    /// Exact, case-sensitive match on the canonical or legacy name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Venue::ALL
            .into_iter()
            .find(|v| v.as_str() == s || v.legacy_name() == s)
            .ok_or_else(|| DispatchError::UnknownVenue(s.to_string()))
    }
}

/// An activity a venue can run ("operation" in request paths).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Activity {
    Sing,
    Dance,
    Rap,
    Basketball,
}

impl Activity {
    pub const ALL: [Activity; 4] = [
        Activity::Sing,
        Activity::Dance,
        Activity::Rap,
        Activity::Basketball,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Sing => "sing",
            Activity::Dance => "dance",
            Activity::Rap => "rap",
            Activity::Basketball => "basketball",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activity {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activity::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| DispatchError::UnknownActivity(s.to_string()))
    }
}

/// Registry key: one activity at one venue.
///
/// Displayed as `venue:activity` (e.g. `school:sing`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActivityKey {
    pub venue: Venue,
    pub activity: Activity,
}

impl ActivityKey {
    pub fn new(venue: Venue, activity: Activity) -> Self {
        Self { venue, activity }
    }

    /// Parse a key from the two path segments of a request.
    ///
    /// The venue is checked first, so an unknown venue is reported even when
    /// the activity is also unknown.
    pub fn parse(venue: &str, activity: &str) -> Result<Self, DispatchError> {
        let venue = venue.parse::<Venue>()?;
        let activity = activity.parse::<Activity>()?;
        Ok(Self::new(venue, activity))
    }
}

impl fmt::Display for ActivityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.venue, self.activity)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
