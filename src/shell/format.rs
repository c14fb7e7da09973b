//! Table and ANSI rendering of search responses.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::schema::entity as fields;
use crate::search::results::{OrganizationResult, SearchResults, TicketResult, UserResult};

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_BRIGHT_CYAN: &str = "\x1b[96m";
const ANSI_RESET: &str = "\x1b[0m";

pub fn format_error(message: &str) -> String {
    format!("{ANSI_RED}{message}{ANSI_RESET}")
}

pub fn format_ready(message: &str) -> String {
    format!("{ANSI_GREEN}{message}{ANSI_RESET}")
}

pub fn format_info(message: &str) -> String {
    format!("{ANSI_BRIGHT_CYAN}{message}{ANSI_RESET}")
}

/// Render the field list of an entity as a one-column table.
pub fn format_fields(field_names: &[&str]) -> String {
    let mut builder = Builder::new();
    for name in field_names {
        builder.push_record([*name]);
    }
    render_table(builder)
}

/// Render aggregated results: one key/value table per record, then a total.
pub fn format_results(results: &SearchResults) -> String {
    let mut output = String::new();
    match results {
        SearchResults::Organizations(organizations) => {
            for result in organizations {
                output.push_str(&format_organization(result));
            }
        }
        SearchResults::Tickets(tickets) => {
            for result in tickets {
                output.push_str(&format_ticket(result));
            }
        }
        SearchResults::Users(users) => {
            for result in users {
                output.push_str(&format_user(result));
            }
        }
    }
    output.push_str(&format_info(&format!(
        "Total number of records: {}",
        results.len()
    )));
    output
}

fn format_organization(result: &OrganizationResult) -> String {
    let organization = &result.organization;
    let mut rows: Vec<(String, String)> = vec![
        (fields::FIELD_ID.into(), organization.id.clone()),
        (fields::FIELD_EXTERNAL_ID.into(), organization.external_id.clone()),
        (fields::FIELD_CREATED_AT.into(), organization.created_at.clone()),
        (fields::FIELD_URL.into(), organization.url.clone()),
        (fields::FIELD_TAGS.into(), list_string(&organization.tags)),
        (fields::FIELD_NAME.into(), organization.name.clone()),
        (fields::FIELD_DOMAIN_NAMES.into(), list_string(&organization.domain_names)),
        (fields::FIELD_DETAILS.into(), organization.details.clone()),
        (fields::FIELD_SHARED_TICKETS.into(), organization.shared_tickets.to_string()),
    ];

    for (i, user) in result.users.iter().enumerate() {
        rows.push((format!("user_{i}"), user.name.clone()));
    }
    for (i, ticket) in result.tickets.iter().enumerate() {
        rows.push((format!("ticket_{i}"), ticket.subject.clone()));
    }

    render_record(rows)
}

fn format_ticket(result: &TicketResult) -> String {
    let ticket = &result.ticket;
    let mut rows: Vec<(String, String)> = vec![
        (fields::FIELD_ID.into(), ticket.id.clone()),
        (fields::FIELD_EXTERNAL_ID.into(), ticket.external_id.clone()),
        (fields::FIELD_CREATED_AT.into(), ticket.created_at.clone()),
        (fields::FIELD_URL.into(), ticket.url.clone()),
        (fields::FIELD_TAGS.into(), list_string(&ticket.tags)),
        (fields::FIELD_TYPE.into(), ticket.ticket_type.clone()),
        (fields::FIELD_SUBJECT.into(), ticket.subject.clone()),
        (fields::FIELD_DESCRIPTION.into(), ticket.description.clone()),
        (fields::FIELD_PRIORITY.into(), ticket.priority.clone()),
        (fields::FIELD_STATUS.into(), ticket.status.clone()),
        (fields::FIELD_HAS_INCIDENTS.into(), ticket.has_incidents.to_string()),
        (fields::FIELD_DUE_AT.into(), ticket.due_at.clone()),
        (fields::FIELD_VIA.into(), ticket.via.clone()),
    ];

    if let Some(submitter) = &result.submitter {
        rows.push(("submitter_name".into(), submitter.name.clone()));
    }
    if let Some(assignee) = &result.assignee {
        rows.push(("assignee_name".into(), assignee.name.clone()));
    }
    if let Some(organization) = &result.organization {
        rows.push(("organization_name".into(), organization.name.clone()));
    }

    render_record(rows)
}

fn format_user(result: &UserResult) -> String {
    let user = &result.user;
    let mut rows: Vec<(String, String)> = vec![
        (fields::FIELD_ID.into(), user.id.clone()),
        (fields::FIELD_EXTERNAL_ID.into(), user.external_id.clone()),
        (fields::FIELD_CREATED_AT.into(), user.created_at.clone()),
        (fields::FIELD_URL.into(), user.url.clone()),
        (fields::FIELD_TAGS.into(), list_string(&user.tags)),
        (fields::FIELD_NAME.into(), user.name.clone()),
        (fields::FIELD_ALIAS.into(), user.alias.clone()),
        (fields::FIELD_ACTIVE.into(), user.active.to_string()),
        (fields::FIELD_VERIFIED.into(), user.verified.to_string()),
        (fields::FIELD_SHARED.into(), user.shared.to_string()),
        (fields::FIELD_LOCALE.into(), user.locale.clone()),
        (fields::FIELD_TIMEZONE.into(), user.timezone.clone()),
        (fields::FIELD_LAST_LOGIN_AT.into(), user.last_login_at.clone()),
        (fields::FIELD_EMAIL.into(), user.email.clone()),
        (fields::FIELD_PHONE.into(), user.phone.clone()),
        (fields::FIELD_SIGNATURE.into(), user.signature.clone()),
        (fields::FIELD_SUSPENDED.into(), user.suspended.to_string()),
        (fields::FIELD_ROLE.into(), user.role.clone()),
    ];

    if let Some(organization) = &result.organization {
        rows.push(("organization_name".into(), organization.name.clone()));
    }
    for (i, ticket) in result.tickets.iter().enumerate() {
        rows.push((format!("ticket_{i}"), ticket.subject.clone()));
    }

    render_record(rows)
}

fn list_string(values: &[String]) -> String {
    format!("[{}]", values.join(", "))
}

fn render_record(rows: Vec<(String, String)>) -> String {
    let mut builder = Builder::new();
    for (key, value) in rows {
        builder.push_record([key, value]);
    }
    format!("{ANSI_GREEN}{}{ANSI_RESET}\n", rendered(builder))
}

fn render_table(builder: Builder) -> String {
    format!("{}\n", rendered(builder))
}

fn rendered(builder: Builder) -> String {
    let mut table = builder.build();
    table.with(Style::ascii());
    table.to_string()
}
