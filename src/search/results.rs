use std::sync::Arc;

use crate::schema::record::{Organization, Ticket, User};

/// One matched organization with its related users and tickets.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationResult {
    pub organization: Arc<Organization>,
    pub users: Vec<Arc<User>>,
    pub tickets: Vec<Arc<Ticket>>,
}

/// One matched ticket with its resolved references. A foreign key pointing
/// at nothing leaves the relation unset.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketResult {
    pub ticket: Arc<Ticket>,
    pub organization: Option<Arc<Organization>>,
    pub submitter: Option<Arc<User>>,
    pub assignee: Option<Arc<User>>,
}

/// One matched user with their organization and submitted tickets.
#[derive(Debug, Clone, PartialEq)]
pub struct UserResult {
    pub user: Arc<User>,
    pub organization: Option<Arc<Organization>>,
    pub tickets: Vec<Arc<Ticket>>,
}

/// Aggregated results of a tag-dispatched search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults {
    Organizations(Vec<OrganizationResult>),
    Tickets(Vec<TicketResult>),
    Users(Vec<UserResult>),
}

impl SearchResults {
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Organizations(results) => results.len(),
            SearchResults::Tickets(results) => results.len(),
            SearchResults::Users(results) => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
