use http::Method;

/// The endpoints of the api used by the match table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Lists the matches of a tournament. Expects a `tournament_id` query parameter.
    GetFixtures,
}

impl Endpoint {
    pub fn method(self) -> Method {
        match self {
            Self::GetFixtures => Method::GET,
        }
    }

    /// Returns the path of the endpoint relative to the api base.
    pub fn path(self) -> &'static str {
        match self {
            Self::GetFixtures => "/fixtures",
        }
    }
}
