//! Public menu view: a restaurant's items grouped by category.

use serde::Serialize;

use crate::models::menu_item::MenuItem;
use crate::models::restaurant::Restaurant;

/// Filter value meaning "every category".
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuView {
    pub restaurant: Restaurant,
    /// Distinct categories present on the menu, before filtering.
    pub categories: Vec<String>,
    pub groups: Vec<CategoryGroup>,
    pub item_count: usize,
}

/// Group `items` by category, keeping the order in which each category
/// first appears. A `filter` of `None` or [`ALL_CATEGORIES`] keeps all.
pub fn group_by_category(items: Vec<MenuItem>, filter: Option<&str>) -> Vec<CategoryGroup> {
    let filter = filter.filter(|f| *f != ALL_CATEGORIES);
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for item in items {
        if filter.is_some_and(|f| f != item.category) {
            continue;
        }
        match groups.iter_mut().find(|g| g.category == item.category) {
            Some(group) => group.items.push(item),
            None => groups.push(CategoryGroup {
                category: item.category.clone(),
                items: vec![item],
            }),
        }
    }

    groups
}

pub fn build_menu_view(
    restaurant: Restaurant,
    items: Vec<MenuItem>,
    filter: Option<&str>,
) -> MenuView {
    let mut categories: Vec<String> = Vec::new();
    for item in &items {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }

    let groups = group_by_category(items, filter);
    let item_count = groups.iter().map(|g| g.items.len()).sum();

    MenuView {
        restaurant,
        categories,
        groups,
        item_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn item(name: &str, category: &str) -> MenuItem {
        let now = Utc::now();
        MenuItem {
            id: Uuid::new_v4(),
            restaurant_id: Uuid::nil(),
            name: name.into(),
            description: String::new(),
            price: 1.0,
            category: category.into(),
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn groups_preserve_first_appearance_order() {
        let groups = group_by_category(
            vec![
                item("Tiramisu", "Desserts"),
                item("Pizza", "Main Course"),
                item("Gelato", "Desserts"),
            ],
            None,
        );
        let names: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, ["Desserts", "Main Course"]);
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[0].items[1].name, "Gelato");
    }

    #[test]
    fn filter_keeps_one_category() {
        let groups = group_by_category(
            vec![item("Pizza", "Main Course"), item("Gelato", "Desserts")],
            Some("Desserts"),
        );
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items[0].name, "Gelato");

        let all = group_by_category(vec![item("Pizza", "Main Course")], Some(ALL_CATEGORIES));
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn view_lists_categories_before_filtering() {
        let now = Utc::now();
        let restaurant = Restaurant {
            id: Uuid::new_v4(),
            name: "Bella".into(),
            email: "b@x.com".into(),
            slug: "bella".into(),
            phone: None,
            address: None,
            description: None,
            website: None,
            logo: None,
            currency: "USD".into(),
            categories: Vec::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let view = build_menu_view(
            restaurant,
            vec![item("Pizza", "Main Course"), item("Gelato", "Desserts")],
            Some("Desserts"),
        );
        assert_eq!(view.categories, ["Main Course", "Desserts"]);
        assert_eq!(view.item_count, 1);
    }
}
