use crate::core::grouper::group_by_category;
use crate::domain::model::MenuSnapshot;
use crate::domain::ports::BackendClient;
use crate::utils::error::Result;

/// Loads the public menu: two concurrent table reads, then grouping.
///
/// The backend filters to `available = true` and orders by category, so the
/// grouper's first-seen section order follows the server's ordering; no
/// client-side re-sort happens here. Both queries must succeed — a failure of
/// either aborts the whole load and no partial menu is produced.
pub struct MenuLoader<'a, B: BackendClient> {
    backend: &'a B,
}

impl<'a, B: BackendClient> MenuLoader<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    pub async fn load(&self) -> Result<MenuSnapshot> {
        tracing::debug!("Fetching menu tables");
        let (alcohol, food) = tokio::try_join!(
            self.backend.fetch_available_alcohol(),
            self.backend.fetch_available_food(),
        )?;
        tracing::debug!(
            "Fetched {} alcohol rows and {} food rows",
            alcohol.len(),
            food.len()
        );

        Ok(MenuSnapshot {
            alcohol: group_by_category(alcohol),
            food: group_by_category(food),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AlcoholItem, FoodItem, RoleRecord, Session};
    use crate::utils::error::MenuError;
    use async_trait::async_trait;

    struct MockBackend {
        alcohol: Result<Vec<AlcoholItem>>,
        food: Result<Vec<FoodItem>>,
    }

    impl MockBackend {
        fn new(alcohol: Result<Vec<AlcoholItem>>, food: Result<Vec<FoodItem>>) -> Self {
            Self { alcohol, food }
        }
    }

    fn clone_items<T: Clone>(result: &Result<Vec<T>>) -> Result<Vec<T>> {
        match result {
            Ok(items) => Ok(items.clone()),
            Err(_) => Err(MenuError::DataError {
                message: "mock failure".to_string(),
            }),
        }
    }

    #[async_trait]
    impl BackendClient for MockBackend {
        async fn get_session(&self) -> Result<Option<Session>> {
            Ok(None)
        }

        async fn query_role(&self, _user_id: &str, _role: &str) -> Result<Option<RoleRecord>> {
            Ok(None)
        }

        async fn fetch_available_alcohol(&self) -> Result<Vec<AlcoholItem>> {
            clone_items(&self.alcohol)
        }

        async fn fetch_available_food(&self) -> Result<Vec<FoodItem>> {
            clone_items(&self.food)
        }

        async fn sign_out(&self) -> Result<()> {
            Ok(())
        }
    }

    fn food(id: &str, category: &str) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: format!("Dish {}", id),
            category: category.to_string(),
            description: None,
            price: 100.0,
            vegetarian: false,
            available: true,
        }
    }

    fn alcohol(id: &str, category: &str) -> AlcoholItem {
        AlcoholItem {
            id: id.to_string(),
            name: format!("Pour {}", id),
            category: category.to_string(),
            brand: None,
            price_30ml: Some(120.0),
            price_60ml: None,
            price_90ml: None,
            price_180ml: None,
            price_bottle: None,
            available: true,
        }
    }

    #[tokio::test]
    async fn test_empty_tables_yield_empty_groupings() {
        let backend = MockBackend::new(Ok(vec![]), Ok(vec![]));
        let snapshot = MenuLoader::new(&backend).load().await.unwrap();

        assert!(snapshot.alcohol.is_empty());
        assert!(snapshot.food.is_empty());
    }

    #[tokio::test]
    async fn test_both_tables_grouped_independently() {
        let backend = MockBackend::new(
            Ok(vec![alcohol("a1", "Whisky"), alcohol("a2", "Rum")]),
            Ok(vec![
                food("f1", "Starters"),
                food("f2", "Mains"),
                food("f3", "Starters"),
            ]),
        );

        let snapshot = MenuLoader::new(&backend).load().await.unwrap();

        assert_eq!(snapshot.alcohol.len(), 2);
        assert_eq!(snapshot.food.len(), 2);
        assert_eq!(snapshot.food[0].name, "Starters");
        assert_eq!(snapshot.food[0].items.len(), 2);
    }

    #[tokio::test]
    async fn test_one_failing_query_fails_the_whole_load() {
        let backend = MockBackend::new(
            Err(MenuError::DataError {
                message: "mock failure".to_string(),
            }),
            Ok(vec![
                food("f1", "Starters"),
                food("f2", "Mains"),
                food("f3", "Desserts"),
            ]),
        );

        let result = MenuLoader::new(&backend).load().await;
        assert!(result.is_err());
    }
}
