use crate::domain::model::{Categorized, CategorySection};

/// Partition `items` into category sections.
///
/// Section order is first-seen category order; within a section, records keep
/// their relative input order. Matching is exact-string: categories differing
/// only in case or whitespace land in distinct sections.
pub fn group_by_category<T: Categorized>(items: Vec<T>) -> Vec<CategorySection<T>> {
    let mut sections: Vec<CategorySection<T>> = Vec::new();

    for item in items {
        match sections.iter_mut().find(|s| s.name == item.category()) {
            Some(section) => section.items.push(item),
            None => sections.push(CategorySection {
                name: item.category().to_string(),
                items: vec![item],
            }),
        }
    }

    sections
}
