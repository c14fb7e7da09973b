//! Query façade and join assembly over the three collection stores.

use std::path::Path;

use tracing::{debug, info};

use crate::core::error::Result;
use crate::schema::entity::{EntityKind, FIELD_ORGANIZATION_ID, FIELD_SUBMITTER_ID};
use crate::schema::record::{Organization, Ticket, User};
use crate::search::results::{OrganizationResult, SearchResults, TicketResult, UserResult};
use crate::store::search_store::SearchStore;

/// Entry point for the shell: loads all three collections and answers
/// field/value searches with cross-collection joins resolved.
///
/// The service performs no input validation and carries no readiness state;
/// both belong to the shell.
pub struct SearchService {
    organizations: SearchStore<Organization>,
    tickets: SearchStore<Ticket>,
    users: SearchStore<User>,
}

impl SearchService {
    pub fn new() -> Self {
        SearchService {
            organizations: SearchStore::new(),
            tickets: SearchStore::new(),
            users: SearchStore::new(),
        }
    }

    /// Load all three collections. With no directory the bundled datasets
    /// are used; otherwise each filename is resolved under the directory.
    pub fn load_database(&self, directory: Option<&Path>) -> Result<()> {
        self.organizations
            .load(&dataset_path(directory, EntityKind::Organization))?;
        self.tickets
            .load(&dataset_path(directory, EntityKind::Ticket))?;
        self.users.load(&dataset_path(directory, EntityKind::User))?;
        Ok(())
    }

    /// Dispatch a search on the entity-type tag.
    pub fn search(&self, kind: EntityKind, field: &str, value: &str) -> Result<SearchResults> {
        match kind {
            EntityKind::Organization => Ok(SearchResults::Organizations(
                self.search_organizations(field, value)?,
            )),
            EntityKind::Ticket => Ok(SearchResults::Tickets(self.search_tickets(field, value)?)),
            EntityKind::User => Ok(SearchResults::Users(self.search_users(field, value)?)),
        }
    }

    /// The queryable field names for a kind, in reporting order.
    pub fn list_fields(&self, kind: EntityKind) -> &'static [&'static str] {
        kind.fields()
    }

    pub fn search_organizations(&self, field: &str, value: &str) -> Result<Vec<OrganizationResult>> {
        info!("Searching organizations with {} equal to '{}'", field, value);
        let mut results = Vec::new();

        for organization in self.organizations.find_by_field_value(field, value)? {
            debug!("Fetching users belonging to organization {}", organization.name);
            let users = self
                .users
                .find_by_field_value(FIELD_ORGANIZATION_ID, &organization.id)?;

            debug!("Fetching tickets related to organization {}", organization.name);
            let tickets = self
                .tickets
                .find_by_field_value(FIELD_ORGANIZATION_ID, &organization.id)?;

            results.push(OrganizationResult {
                organization,
                users,
                tickets,
            });
        }
        Ok(results)
    }

    pub fn search_tickets(&self, field: &str, value: &str) -> Result<Vec<TicketResult>> {
        info!("Searching tickets with {} equal to '{}'", field, value);
        let mut results = Vec::new();

        for ticket in self.tickets.find_by_field_value(field, value)? {
            debug!("Fetching organization for ticket {}", ticket.subject);
            let organization = self.organizations.find_by_id(ticket.organization_id)?;

            debug!("Fetching submitter for ticket {}", ticket.subject);
            let submitter = self.users.find_by_id(ticket.submitter_id)?;

            debug!("Fetching assignee for ticket {}", ticket.subject);
            let assignee = self.users.find_by_id(ticket.assignee_id)?;

            results.push(TicketResult {
                ticket,
                organization,
                submitter,
                assignee,
            });
        }
        Ok(results)
    }

    pub fn search_users(&self, field: &str, value: &str) -> Result<Vec<UserResult>> {
        info!("Searching users with {} equal to '{}'", field, value);
        let mut results = Vec::new();

        for user in self.users.find_by_field_value(field, value)? {
            debug!("Fetching organization for user {}", user.name);
            let organization = self.organizations.find_by_id(user.organization_id)?;

            debug!("Fetching tickets submitted by user {}", user.name);
            let tickets = self.tickets.find_by_field_value(FIELD_SUBMITTER_ID, &user.id)?;

            results.push(UserResult {
                user,
                organization,
                tickets,
            });
        }
        Ok(results)
    }
}

impl Default for SearchService {
    fn default() -> Self {
        SearchService::new()
    }
}

fn dataset_path(directory: Option<&Path>, kind: EntityKind) -> String {
    match directory {
        Some(directory) => directory.join(kind.dataset_filename()).display().to_string(),
        None => kind.dataset_filename().to_string(),
    }
}
