//! End-to-end tests against the service façade, over the bundled datasets
//! and small generated ones.

use std::fs;
use std::path::Path;

use searchdesk::core::error::ErrorKind;
use searchdesk::schema::entity::EntityKind;
use searchdesk::search::results::SearchResults;
use searchdesk::search::service::SearchService;

fn write_datasets(dir: &Path, organizations: &str, tickets: &str, users: &str) {
    fs::write(dir.join("organizations.json"), organizations).unwrap();
    fs::write(dir.join("tickets.json"), tickets).unwrap();
    fs::write(dir.join("users.json"), users).unwrap();
}

fn xylar_only_service() -> (SearchService, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    write_datasets(
        dir.path(),
        r#"[{"_id": 104, "name": "Xylar", "domain_names": ["anixang.com"], "shared_tickets": false, "tags": ["Hendricks"]}]"#,
        "[]",
        "[]",
    );
    let service = SearchService::new();
    service.load_database(Some(dir.path())).unwrap();
    (service, dir)
}

#[test]
fn organization_is_reachable_through_every_indexed_value() {
    let (service, _dir) = xylar_only_service();

    for (field, value) in [
        ("name", "Xylar"),
        ("tags", "Hendricks"),
        ("shared_tickets", "false"),
        ("_id", "104"),
    ] {
        let results = service.search_organizations(field, value).unwrap();
        assert_eq!(results.len(), 1, "field {field}");
        assert_eq!(results[0].organization.id, "104");
    }

    let empty = service
        .search_organizations("domain_names", "nonexistent.com")
        .unwrap();
    assert!(empty.is_empty());
}

#[test]
fn unknown_field_is_distinguished_from_no_match() {
    let (service, _dir) = xylar_only_service();

    let err = service.search_organizations("domain", "anixang.com").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownField);

    assert!(service
        .search_organizations("domain_names", "anixang.com")
        .unwrap()
        .len()
        == 1);
}

#[test]
fn ticket_joins_resolve_submitter_assignee_and_organization() {
    let service = SearchService::new();
    service.load_database(None).unwrap();

    let results = service
        .search_tickets("subject", "A Catastrophe in Korea (North)")
        .unwrap();
    assert_eq!(results.len(), 1);
    let result = &results[0];

    let submitter = result.submitter.as_ref().unwrap();
    assert_eq!(submitter.id, "1");
    assert_eq!(submitter.name, "Francisca Rasmussen");
    // The joined record is the user's full record, not a projection.
    let full_user = service.search_users("_id", "1").unwrap();
    assert_eq!(*submitter, full_user[0].user);

    assert_eq!(result.assignee.as_ref().unwrap().name, "Cross Barlow");
    assert_eq!(result.organization.as_ref().unwrap().name, "Enthaze");
}

#[test]
fn null_foreign_key_leaves_the_relation_unset() {
    let service = SearchService::new();
    service.load_database(None).unwrap();

    let results = service
        .search_tickets("subject", "A Catastrophe in Hungary")
        .unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].assignee.is_none());
    assert!(results[0].submitter.is_some());
}

#[test]
fn user_joins_resolve_organization_and_submitted_tickets() {
    let service = SearchService::new();
    service.load_database(None).unwrap();

    let results = service.search_users("name", "Cross Barlow").unwrap();
    assert_eq!(results.len(), 1);
    let result = &results[0];

    assert_eq!(result.organization.as_ref().unwrap().name, "Xylar");
    assert_eq!(result.tickets.len(), 1);
    assert_eq!(result.tickets[0].subject, "A Catastrophe in Micronesia");
}

#[test]
fn organization_joins_resolve_users_and_tickets_sorted_by_id() {
    let service = SearchService::new();
    service.load_database(None).unwrap();

    let results = service.search_organizations("name", "Xylar").unwrap();
    assert_eq!(results.len(), 1);
    let result = &results[0];

    let user_ids: Vec<&str> = result.users.iter().map(|user| user.id.as_str()).collect();
    assert_eq!(user_ids, ["2", "3"]);

    let subjects: Vec<&str> = result
        .tickets
        .iter()
        .map(|ticket| ticket.subject.as_str())
        .collect();
    assert_eq!(
        subjects,
        ["A Catastrophe in Micronesia", "A Catastrophe in Hungary"]
    );
}

#[test]
fn join_resolution_is_idempotent() {
    let service = SearchService::new();
    service.load_database(None).unwrap();

    let first = service.search_tickets("via", "chat").unwrap();
    let second = service.search_tickets("via", "chat").unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first[0].organization.as_ref().unwrap(),
        second[0].organization.as_ref().unwrap()
    );
}

#[test]
fn tag_dispatch_matches_the_per_kind_calls() {
    let service = SearchService::new();
    service.load_database(None).unwrap();

    match service.search(EntityKind::User, "role", "admin").unwrap() {
        SearchResults::Users(users) => assert_eq!(users.len(), 2),
        other => panic!("expected user results, got {other:?}"),
    }
    match service.search(EntityKind::Ticket, "via", "web").unwrap() {
        SearchResults::Tickets(tickets) => assert_eq!(tickets.len(), 2),
        other => panic!("expected ticket results, got {other:?}"),
    }
}

#[test]
fn list_fields_keeps_declaration_order() {
    let service = SearchService::new();
    let fields = service.list_fields(EntityKind::Organization);
    assert_eq!(
        fields,
        [
            "_id",
            "url",
            "external_id",
            "created_at",
            "tags",
            "name",
            "domain_names",
            "details",
            "shared_tickets"
        ]
    );
    assert_eq!(service.list_fields(EntityKind::Ticket)[5], "type");
    assert_eq!(service.list_fields(EntityKind::User).len(), 19);
}

#[test]
fn reload_discards_values_only_present_in_old_data() {
    let dir = tempfile::tempdir().unwrap();
    write_datasets(
        dir.path(),
        r#"[{"_id": 1, "name": "Enthaze"}]"#,
        "[]",
        "[]",
    );
    let service = SearchService::new();
    service.load_database(Some(dir.path())).unwrap();
    assert_eq!(service.search_organizations("name", "Enthaze").unwrap().len(), 1);

    write_datasets(
        dir.path(),
        r#"[{"_id": 2, "name": "Nutralab"}]"#,
        "[]",
        "[]",
    );
    service.load_database(Some(dir.path())).unwrap();
    assert!(service.search_organizations("name", "Enthaze").unwrap().is_empty());
    assert_eq!(service.search_organizations("name", "Nutralab").unwrap().len(), 1);
}

#[test]
fn load_from_a_missing_directory_fails() {
    let service = SearchService::new();
    let err = service
        .load_database(Some(Path::new("definitely/not/here")))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Io);
}

#[test]
fn a_record_that_cannot_be_decoded_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    write_datasets(
        dir.path(),
        r#"[{"_id": 1, "shared_tickets": "sometimes"}]"#,
        "[]",
        "[]",
    );
    let service = SearchService::new();
    let err = service.load_database(Some(dir.path())).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Decode);
}
