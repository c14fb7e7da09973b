//! Entity and field name validation for shell input.

use crate::schema::entity::EntityKind;

pub fn is_entity_valid(entity: &str) -> bool {
    EntityKind::parse(entity).is_some()
}

pub fn is_field_valid(entity: &str, field: &str) -> bool {
    match EntityKind::parse(entity) {
        Some(kind) => {
            let field = field.trim().to_lowercase();
            kind.fields().contains(&field.as_str())
        }
        None => false,
    }
}
