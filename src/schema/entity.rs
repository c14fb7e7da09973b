//! Entity kinds and their fixed field tables.
//!
//! Field names match the keys of the source JSON files. Every kind shares the
//! common entity fields; the rest are declared per kind, in the order they
//! are reported by the `fields` command.

pub const FIELD_ID: &str = "_id";
pub const FIELD_URL: &str = "url";
pub const FIELD_EXTERNAL_ID: &str = "external_id";
pub const FIELD_CREATED_AT: &str = "created_at";
pub const FIELD_TAGS: &str = "tags";

pub const FIELD_NAME: &str = "name";
pub const FIELD_DOMAIN_NAMES: &str = "domain_names";
pub const FIELD_DETAILS: &str = "details";
pub const FIELD_SHARED_TICKETS: &str = "shared_tickets";

pub const FIELD_TYPE: &str = "type";
pub const FIELD_SUBJECT: &str = "subject";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_PRIORITY: &str = "priority";
pub const FIELD_STATUS: &str = "status";
pub const FIELD_SUBMITTER_ID: &str = "submitter_id";
pub const FIELD_ASSIGNEE_ID: &str = "assignee_id";
pub const FIELD_ORGANIZATION_ID: &str = "organization_id";
pub const FIELD_HAS_INCIDENTS: &str = "has_incidents";
pub const FIELD_DUE_AT: &str = "due_at";
pub const FIELD_VIA: &str = "via";

pub const FIELD_ALIAS: &str = "alias";
pub const FIELD_ACTIVE: &str = "active";
pub const FIELD_VERIFIED: &str = "verified";
pub const FIELD_SHARED: &str = "shared";
pub const FIELD_LOCALE: &str = "locale";
pub const FIELD_TIMEZONE: &str = "timezone";
pub const FIELD_LAST_LOGIN_AT: &str = "last_login_at";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_SIGNATURE: &str = "signature";
pub const FIELD_SUSPENDED: &str = "suspended";
pub const FIELD_ROLE: &str = "role";

pub const ORGANIZATIONS_FILENAME: &str = "organizations.json";
pub const TICKETS_FILENAME: &str = "tickets.json";
pub const USERS_FILENAME: &str = "users.json";

const ORGANIZATION_FIELDS: &[&str] = &[
    FIELD_ID,
    FIELD_URL,
    FIELD_EXTERNAL_ID,
    FIELD_CREATED_AT,
    FIELD_TAGS,
    FIELD_NAME,
    FIELD_DOMAIN_NAMES,
    FIELD_DETAILS,
    FIELD_SHARED_TICKETS,
];

const TICKET_FIELDS: &[&str] = &[
    FIELD_ID,
    FIELD_URL,
    FIELD_EXTERNAL_ID,
    FIELD_CREATED_AT,
    FIELD_TAGS,
    FIELD_TYPE,
    FIELD_SUBJECT,
    FIELD_DESCRIPTION,
    FIELD_PRIORITY,
    FIELD_STATUS,
    FIELD_SUBMITTER_ID,
    FIELD_ASSIGNEE_ID,
    FIELD_ORGANIZATION_ID,
    FIELD_HAS_INCIDENTS,
    FIELD_DUE_AT,
    FIELD_VIA,
];

const USER_FIELDS: &[&str] = &[
    FIELD_ID,
    FIELD_URL,
    FIELD_EXTERNAL_ID,
    FIELD_CREATED_AT,
    FIELD_TAGS,
    FIELD_NAME,
    FIELD_ALIAS,
    FIELD_ACTIVE,
    FIELD_VERIFIED,
    FIELD_SHARED,
    FIELD_LOCALE,
    FIELD_TIMEZONE,
    FIELD_LAST_LOGIN_AT,
    FIELD_EMAIL,
    FIELD_PHONE,
    FIELD_SIGNATURE,
    FIELD_ORGANIZATION_ID,
    FIELD_SUSPENDED,
    FIELD_ROLE,
];

/// Tag selecting one of the three record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Organization,
    Ticket,
    User,
}

impl EntityKind {
    /// Parse a user-supplied entity name. Leading/trailing whitespace and
    /// case are forgiven.
    pub fn parse(entity: &str) -> Option<Self> {
        match entity.trim().to_lowercase().as_str() {
            "organization" => Some(EntityKind::Organization),
            "ticket" => Some(EntityKind::Ticket),
            "user" => Some(EntityKind::User),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Organization => "organization",
            EntityKind::Ticket => "ticket",
            EntityKind::User => "user",
        }
    }

    /// The schema field table for this kind, common fields first.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            EntityKind::Organization => ORGANIZATION_FIELDS,
            EntityKind::Ticket => TICKET_FIELDS,
            EntityKind::User => USER_FIELDS,
        }
    }

    pub fn dataset_filename(self) -> &'static str {
        match self {
            EntityKind::Organization => ORGANIZATIONS_FILENAME,
            EntityKind::Ticket => TICKETS_FILENAME,
            EntityKind::User => USERS_FILENAME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_trimmed_and_case_insensitive() {
        assert_eq!(EntityKind::parse(" Organization "), Some(EntityKind::Organization));
        assert_eq!(EntityKind::parse("TICKET"), Some(EntityKind::Ticket));
        assert_eq!(EntityKind::parse("user"), Some(EntityKind::User));
        assert_eq!(EntityKind::parse("account"), None);
    }

    #[test]
    fn common_fields_lead_every_table() {
        let common = [FIELD_ID, FIELD_URL, FIELD_EXTERNAL_ID, FIELD_CREATED_AT, FIELD_TAGS];
        for kind in [EntityKind::Organization, EntityKind::Ticket, EntityKind::User] {
            assert_eq!(&kind.fields()[..common.len()], &common);
        }
    }

    #[test]
    fn field_tables_match_declared_schema() {
        assert_eq!(EntityKind::Organization.fields().len(), 9);
        assert_eq!(EntityKind::Ticket.fields().len(), 16);
        assert_eq!(EntityKind::User.fields().len(), 19);
    }
}
