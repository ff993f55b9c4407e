use crate::app::pages::Notice;
use crate::core::menu::MenuLoader;
use crate::domain::model::{AlcoholItem, FoodItem, MenuSnapshot};
use crate::domain::ports::BackendClient;

const MENU_HEADING: &str = "Premium Bar Menu";
const MENU_LOCALITY: &str = "Hinjewadi, Pune";

#[derive(Debug)]
enum MenuState {
    Loading,
    Ready(MenuSnapshot),
    Failed(Notice),
}

/// The public read-only menu page. `refresh` is the only way in and out of
/// the loading state; a failed load keeps the previous state out of view and
/// surfaces a notice instead of a partial menu.
pub struct MenuPage<'a, B: BackendClient> {
    backend: &'a B,
    state: MenuState,
}

impl<'a, B: BackendClient> MenuPage<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self {
            backend,
            state: MenuState::Loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, MenuState::Loading)
    }

    pub fn notice(&self) -> Option<&Notice> {
        match &self.state {
            MenuState::Failed(notice) => Some(notice),
            _ => None,
        }
    }

    pub async fn refresh(&mut self) {
        self.state = MenuState::Loading;
        self.state = match MenuLoader::new(self.backend).load().await {
            Ok(snapshot) => MenuState::Ready(snapshot),
            Err(e) => {
                tracing::error!("Error fetching menu: {}", e);
                MenuState::Failed(Notice::error("Failed to load menu"))
            }
        };
    }

    pub fn render(&self) -> String {
        match &self.state {
            MenuState::Loading => "Loading...".to_string(),
            MenuState::Failed(notice) => notice.message.clone(),
            MenuState::Ready(snapshot) => render_menu(snapshot),
        }
    }
}

fn render_menu(snapshot: &MenuSnapshot) -> String {
    let mut lines = vec![
        MENU_HEADING.to_string(),
        MENU_LOCALITY.to_string(),
        String::new(),
        "=== Beverages ===".to_string(),
    ];

    for section in &snapshot.alcohol {
        lines.push(String::new());
        lines.push(format!("-- {} --", section.name));
        for item in &section.items {
            lines.extend(render_alcohol_item(item));
        }
    }

    lines.push(String::new());
    lines.push("=== Food ===".to_string());

    for section in &snapshot.food {
        lines.push(String::new());
        lines.push(format!("-- {} --", section.name));
        for item in &section.items {
            lines.extend(render_food_item(item));
        }
    }

    lines.join("\n")
}

fn render_alcohol_item(item: &AlcoholItem) -> Vec<String> {
    let mut lines = Vec::new();
    match &item.brand {
        Some(brand) => lines.push(format!("{} ({})", item.name, brand)),
        None => lines.push(item.name.clone()),
    }

    let slots: Vec<String> = [
        ("30ml", item.price_30ml),
        ("60ml", item.price_60ml),
        ("90ml", item.price_90ml),
        ("180ml", item.price_180ml),
        ("Bottle", item.price_bottle),
    ]
    .into_iter()
    .filter_map(|(label, price)| price.map(|p| format!("{} {}", label, fmt_price(p))))
    .collect();

    if !slots.is_empty() {
        lines.push(format!("  {}", slots.join(" | ")));
    }
    lines
}

fn render_food_item(item: &FoodItem) -> Vec<String> {
    let marker = if item.vegetarian { " 🌱" } else { "" };
    let mut lines = vec![format!("{}  {}{}", item.name, fmt_price(item.price), marker)];
    if let Some(description) = &item.description {
        lines.push(format!("  {}", description));
    }
    lines
}

fn fmt_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("₹{}", price as i64)
    } else {
        format!("₹{:.2}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RoleRecord, Session};
    use crate::utils::error::{MenuError, Result};
    use async_trait::async_trait;

    struct MockBackend {
        fail: bool,
        alcohol: Vec<AlcoholItem>,
        food: Vec<FoodItem>,
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
            if self.fail {
                return Err(MenuError::DataError {
                    message: "mock failure".to_string(),
                });
            }
            Ok(self.alcohol.clone())
        }

        async fn fetch_available_food(&self) -> Result<Vec<FoodItem>> {
            Ok(self.food.clone())
        }

        async fn sign_out(&self) -> Result<()> {
            Ok(())
        }
    }

    fn whisky() -> AlcoholItem {
        AlcoholItem {
            id: "a1".to_string(),
            name: "Amrut Fusion".to_string(),
            category: "Whisky".to_string(),
            brand: Some("Amrut".to_string()),
            price_30ml: Some(380.0),
            price_60ml: Some(700.0),
            price_90ml: None,
            price_180ml: None,
            price_bottle: Some(5200.0),
            available: true,
        }
    }

    fn paneer() -> FoodItem {
        FoodItem {
            id: "f1".to_string(),
            name: "Paneer Tikka".to_string(),
            category: "Starters".to_string(),
            description: Some("Chargrilled cottage cheese".to_string()),
            price: 250.0,
            vegetarian: true,
            available: true,
        }
    }

    #[tokio::test]
    async fn test_page_starts_loading_and_settles() {
        let backend = MockBackend {
            fail: false,
            alcohol: vec![],
            food: vec![],
        };
        let mut page = MenuPage::new(&backend);
        assert!(page.is_loading());
        assert_eq!(page.render(), "Loading...");

        page.refresh().await;
        assert!(!page.is_loading());
        assert!(page.notice().is_none());
    }

    #[tokio::test]
    async fn test_render_groups_and_formats_items() {
        let backend = MockBackend {
            fail: false,
            alcohol: vec![whisky()],
            food: vec![paneer()],
        };
        let mut page = MenuPage::new(&backend);
        page.refresh().await;

        let body = page.render();
        assert!(body.contains("Premium Bar Menu"));
        assert!(body.contains("-- Whisky --"));
        assert!(body.contains("Amrut Fusion (Amrut)"));
        assert!(body.contains("30ml ₹380 | 60ml ₹700 | Bottle ₹5200"));
        assert!(body.contains("-- Starters --"));
        assert!(body.contains("Paneer Tikka  ₹250 🌱"));
        assert!(body.contains("  Chargrilled cottage cheese"));
    }

    #[tokio::test]
    async fn test_failed_load_shows_notice_not_partial_menu() {
        let backend = MockBackend {
            fail: true,
            alcohol: vec![],
            food: vec![paneer(), paneer(), paneer()],
        };
        let mut page = MenuPage::new(&backend);
        page.refresh().await;

        assert!(!page.is_loading());
        let notice = page.notice().expect("failure notice");
        assert_eq!(notice.message, "Failed to load menu");
        assert!(!page.render().contains("Paneer Tikka"));
    }

    #[test]
    fn test_fmt_price_trims_whole_amounts() {
        assert_eq!(fmt_price(250.0), "₹250");
        assert_eq!(fmt_price(129.5), "₹129.50");
    }
}
