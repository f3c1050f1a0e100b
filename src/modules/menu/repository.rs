use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// The fixed menu categories. The registry holds exactly one menu per type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuType {
    Ale,
    Wine,
    Food,
}

impl FromStr for MenuType {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "ale" => Ok(Self::Ale),
            "wine" => Ok(Self::Wine),
            "food" => Ok(Self::Food),
            unrecognised => Err(Error::MenuTypeNotFound(unrecognised.to_string())),
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MenuSort {
    Name,
    Price,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl MenuItem {
    fn new(name: &str, description: &str, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
            price,
        }
    }
}

pub struct CreateMenuItemPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MenuTypeNotFound(String),
    MenuItemNotFound(String),
}

/// In-memory menu registry shared across request handlers.
#[derive(Clone)]
pub struct MenuStore {
    menus: Arc<RwLock<HashMap<MenuType, Vec<MenuItem>>>>,
}

impl MenuStore {
    /// Builds the registry with the fixed sample data every process starts with.
    pub fn seeded() -> Self {
        let mut menus = HashMap::new();

        menus.insert(
            MenuType::Ale,
            vec![
                MenuItem::new("Dwarven Spring", "A smooth pale ale", 0.8),
                MenuItem::new("Monk's Staff", "A strong dark stout", 1.2),
                MenuItem::new("Harvest Mist", "A refreshing wheat beer", 1.0),
            ],
        );
        menus.insert(
            MenuType::Wine,
            vec![
                MenuItem::new("Stargazer", "Sauvignon Blanc, crisp and dry", 2.2),
                MenuItem::new("Alexston Farmstead", "Moscato, sweet dessert wine", 2.8),
                MenuItem::new("Red Valley", "Cabernet Sauvignon, full-bodied red", 2.5),
            ],
        );
        menus.insert(
            MenuType::Food,
            vec![
                MenuItem::new(
                    "Today's Special",
                    "Ask the bartender for today's special",
                    1.2,
                ),
                MenuItem::new(
                    "Steak and Ale Pie",
                    "A hearty pie served with carrots and potatoes",
                    1.5,
                ),
                MenuItem::new(
                    "Methi Matar Malai",
                    "Pea and fenugreek in a creamy curry sauce",
                    0.9,
                ),
            ],
        );

        Self {
            menus: Arc::new(RwLock::new(menus)),
        }
    }
}

pub async fn get_menu(store: &MenuStore, menu_type: &str) -> Result<Vec<MenuItem>, Error> {
    let parsed_type = MenuType::from_str(menu_type)?;
    let menus = store.menus.read().await;

    menus
        .get(&parsed_type)
        .cloned()
        .ok_or_else(|| Error::MenuTypeNotFound(menu_type.to_string()))
}

pub async fn retrieve(
    store: &MenuStore,
    menu_type: &str,
    sort: MenuSort,
    order: SortOrder,
) -> Result<Vec<MenuItem>, Error> {
    let mut menu = get_menu(store, menu_type).await?;

    // Stable sort, so items comparing equal keep their insertion order
    menu.sort_by(|a, b| {
        let ordering = match sort {
            MenuSort::Name => a.name.cmp(&b.name),
            MenuSort::Price => a.price.total_cmp(&b.price),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    Ok(menu)
}

pub async fn add(
    store: &MenuStore,
    menu_type: &str,
    payload: CreateMenuItemPayload,
) -> Result<Vec<MenuItem>, Error> {
    let parsed_type = MenuType::from_str(menu_type)?;

    // Hold the write guard across the read-modify-write so concurrent adds
    // cannot drop each other's items
    let mut menus = store.menus.write().await;
    let menu = menus
        .get_mut(&parsed_type)
        .ok_or_else(|| Error::MenuTypeNotFound(menu_type.to_string()))?;

    menu.push(MenuItem {
        id: Uuid::new_v4(),
        name: payload.name,
        description: payload.description,
        price: payload.price,
    });

    Ok(menu.clone())
}

pub async fn remove(store: &MenuStore, menu_type: &str, id: &str) -> Result<bool, Error> {
    let parsed_type = MenuType::from_str(menu_type)?;
    let parsed_id =
        Uuid::parse_str(id).map_err(|_| Error::MenuItemNotFound(id.to_string()))?;

    let mut menus = store.menus.write().await;
    let menu = menus
        .get_mut(&parsed_type)
        .ok_or_else(|| Error::MenuTypeNotFound(menu_type.to_string()))?;

    let size_before = menu.len();
    menu.retain(|item| item.id != parsed_id);

    if menu.len() == size_before {
        // Menu size did not change, item not found
        return Err(Error::MenuItemNotFound(id.to_string()));
    }

    Ok(true)
}
