//! SurrealDB repository implementations.

mod admin;
mod menu_item;
mod restaurant;

pub use admin::SurrealAdminRepository;
pub use menu_item::SurrealMenuItemRepository;
pub use restaurant::SurrealRestaurantRepository;

/// Add the `SET` clause for a field that may also be cleared: a new
/// value binds `$field`, `Some(None)` writes `NONE`.
fn push_clearable(
    sets: &mut Vec<String>,
    field: &'static str,
    value: &Option<Option<String>>,
) {
    match value {
        Some(Some(_)) => sets.push(format!("{field} = ${field}")),
        Some(None) => sets.push(format!("{field} = NONE")),
        None => {}
    }
}
