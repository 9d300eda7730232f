//! Helpers for a user's shopping cart and the store that fills it.
//!
//! A cart maps an item name to how many of that item the user wants.
//! Every helper takes what it changes by value and hands it back.

use std::collections::{BTreeMap, HashMap};

use tracing::event;

mod errors;
pub use self::errors::CartError;

/// Item name to quantity.
pub type Cart = HashMap<String, u32>;
/// Ingredient name to quantity.
pub type Recipe = HashMap<String, u32>;
/// Recipe name to its ingredients.
pub type Ideas = HashMap<String, Recipe>;
/// Item name to where the store keeps it.
pub type AisleMapping = HashMap<String, Aisle>;
/// A filled order, ordered by item name.
pub type FulfillmentCart = BTreeMap<String, Fulfillment>;
/// Item name to what the store has of it.
pub type Inventory = HashMap<String, InventoryEntry>;

/// Where in the store an item lives.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aisle {
    pub aisle: String,
    pub refrigerated: bool,
}

/// One line of an order sent to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fulfillment {
    pub quantity: u32,
    pub aisle: String,
    pub refrigerated: bool,
}

/// How much of an item the store has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stock {
    Available(u32),
    OutOfStock,
}

/// The store's stock of an item and where it's kept.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryEntry {
    pub stock: Stock,
    pub aisle: String,
    pub refrigerated: bool,
}

/// Add one of each item to the cart.
///
/// # Examples
///
/// ```
/// use blackjack_rules::cart::{add_item, Cart};
///
/// let cart = Cart::from([("Banana".to_string(), 3)]);
/// let cart = add_item(cart, ["Banana", "Apple"]);
///
/// assert_eq!(Some(&4), cart.get("Banana"));
/// assert_eq!(Some(&1), cart.get("Apple"));
/// ```
pub fn add_item<I, S>(mut cart: Cart, items: I) -> Cart
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for item in items {
        *cart.entry(item.into()).or_insert(0) += 1;
    }
    cart
}

/// Build a new cart from a list of notes. Repeated
/// items are counted.
pub fn read_notes<I, S>(notes: I) -> Cart
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    add_item(Cart::new(), notes)
}

/// Add or replace recipes.
pub fn update_recipes<I, S>(mut ideas: Ideas, updates: I) -> Ideas
where
    I: IntoIterator<Item = (S, Recipe)>,
    S: Into<String>,
{
    for (name, recipe) in updates {
        ideas.insert(name.into(), recipe);
    }
    ideas
}

/// The cart sorted alphabetically by item.
pub fn sort_entries(cart: Cart) -> BTreeMap<String, u32> {
    cart.into_iter().collect()
}

/// Combine the cart with where each item is kept so the
/// store can fill it.
///
/// Every item in the cart has to have an entry in the aisle mapping.
///
/// # Examples
///
/// ```
/// use blackjack_rules::cart::{send_to_store, Aisle, AisleMapping, Cart, CartError};
///
/// let cart = Cart::from([("Milk".to_string(), 2)]);
/// let aisles = AisleMapping::from([(
///     "Milk".to_string(),
///     Aisle { aisle: "Aisle 2".to_string(), refrigerated: true },
/// )]);
///
/// let order = send_to_store(&cart, &aisles).unwrap();
/// assert_eq!(2, order["Milk"].quantity);
/// assert!(order["Milk"].refrigerated);
///
/// let cart = Cart::from([("Eggs".to_string(), 1)]);
/// assert_eq!(
///     Err(CartError::UnknownItem("Eggs".to_string())),
///     send_to_store(&cart, &aisles)
/// );
/// ```
pub fn send_to_store(cart: &Cart, aisles: &AisleMapping) -> Result<FulfillmentCart, CartError> {
    cart.iter()
        .map(|(item, &quantity)| -> Result<(String, Fulfillment), CartError> {
            let aisle = aisles
                .get(item)
                .ok_or_else(|| CartError::UnknownItem(item.clone()))?;
            Ok((
                item.clone(),
                Fulfillment {
                    quantity,
                    aisle: aisle.aisle.clone(),
                    refrigerated: aisle.refrigerated,
                },
            ))
        })
        .collect()
}

/// Take a filled order out of the store's stock.
///
/// Stock that reaches zero is marked out of stock. Items the
/// store doesn't carry are skipped.
pub fn update_store_inventory(
    fulfillment: &FulfillmentCart,
    mut inventory: Inventory,
) -> Inventory {
    for (item, order) in fulfillment {
        let Some(entry) = inventory.get_mut(item) else {
            event!(
                tracing::Level::TRACE,
                item = item.as_str(),
                "Item not in store inventory"
            );
            continue;
        };

        entry.stock = match entry.stock {
            Stock::Available(count) if count > order.quantity => {
                Stock::Available(count - order.quantity)
            }
            _ => Stock::OutOfStock,
        };
        event!(
            tracing::Level::TRACE,
            item = item.as_str(),
            stock = ?entry.stock,
            "Updated stock"
        );
    }
    inventory
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aisle(name: &str, refrigerated: bool) -> Aisle {
        Aisle {
            aisle: name.to_string(),
            refrigerated,
        }
    }

    fn entry(stock: Stock, name: &str, refrigerated: bool) -> InventoryEntry {
        InventoryEntry {
            stock,
            aisle: name.to_string(),
            refrigerated,
        }
    }

    #[test]
    fn test_add_item() {
        let cart = Cart::from([("Banana".to_string(), 3), ("Apple".to_string(), 2)]);
        let cart = add_item(cart, ["Apple", "Apple", "Orange", "Banana"]);

        assert_eq!(3, cart.len());
        assert_eq!(4, cart["Banana"]);
        assert_eq!(4, cart["Apple"]);
        assert_eq!(1, cart["Orange"]);
    }

    #[test]
    fn test_add_nothing() {
        let cart = Cart::from([("Banana".to_string(), 3)]);
        let cart = add_item(cart, Vec::<String>::new());
        assert_eq!(Cart::from([("Banana".to_string(), 3)]), cart);
    }

    #[test]
    fn test_read_notes() {
        let cart = read_notes(vec!["Banana", "Apple", "Orange", "Banana"]);
        assert_eq!(3, cart.len());
        assert_eq!(2, cart["Banana"]);
        assert_eq!(1, cart["Apple"]);

        assert!(read_notes(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn test_update_recipes() {
        let ideas = Ideas::from([
            (
                "Banana Bread".to_string(),
                Recipe::from([("Banana".to_string(), 1), ("Flour".to_string(), 2)]),
            ),
            (
                "Raspberry Pie".to_string(),
                Recipe::from([("Raspberry".to_string(), 1)]),
            ),
        ]);
        let updates = vec![
            (
                "Banana Bread",
                Recipe::from([("Banana".to_string(), 4), ("Walnuts".to_string(), 2)]),
            ),
            ("Pasta", Recipe::from([("Noodles".to_string(), 1)])),
        ];

        let ideas = update_recipes(ideas, updates);

        assert_eq!(3, ideas.len());
        assert_eq!(
            Recipe::from([("Banana".to_string(), 4), ("Walnuts".to_string(), 2)]),
            ideas["Banana Bread"]
        );
        assert_eq!(1, ideas["Raspberry Pie"]["Raspberry"]);
        assert_eq!(1, ideas["Pasta"]["Noodles"]);
    }

    #[test]
    fn test_sort_entries() {
        let cart = read_notes(["Pear", "Apple", "Kiwi", "Apple"]);
        let sorted = sort_entries(cart);
        let items: Vec<(&str, u32)> = sorted.iter().map(|(k, &v)| (k.as_str(), v)).collect();
        assert_eq!(vec![("Apple", 2), ("Kiwi", 1), ("Pear", 1)], items);
    }

    #[test]
    fn test_send_to_store() {
        let cart = read_notes(["Milk", "Milk", "Bread"]);
        let aisles = AisleMapping::from([
            ("Milk".to_string(), aisle("Aisle 2", true)),
            ("Bread".to_string(), aisle("Aisle 1", false)),
            ("Eggs".to_string(), aisle("Aisle 2", true)),
        ]);

        let order = send_to_store(&cart, &aisles).unwrap();

        assert_eq!(2, order.len());
        assert_eq!(
            Fulfillment {
                quantity: 2,
                aisle: "Aisle 2".to_string(),
                refrigerated: true,
            },
            order["Milk"]
        );
        assert_eq!(1, order["Bread"].quantity);
        assert!(!order["Bread"].refrigerated);
        assert_eq!(
            vec!["Bread", "Milk"],
            order.keys().map(String::as_str).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_send_to_store_unknown_item() {
        let cart = read_notes(["Caviar"]);
        assert_eq!(
            Err(CartError::UnknownItem("Caviar".to_string())),
            send_to_store(&cart, &AisleMapping::new())
        );
    }

    #[test_log::test]
    fn test_update_store_inventory() {
        let cart = read_notes(["Milk", "Milk", "Bread", "Bread", "Bread", "Caviar"]);
        let aisles = AisleMapping::from([
            ("Milk".to_string(), aisle("Aisle 2", true)),
            ("Bread".to_string(), aisle("Aisle 1", false)),
            ("Caviar".to_string(), aisle("Aisle 9", true)),
        ]);
        let order = send_to_store(&cart, &aisles).unwrap();

        let inventory = Inventory::from([
            ("Milk".to_string(), entry(Stock::Available(10), "Aisle 2", true)),
            ("Bread".to_string(), entry(Stock::Available(3), "Aisle 1", false)),
            ("Eggs".to_string(), entry(Stock::Available(12), "Aisle 2", true)),
        ]);

        let inventory = update_store_inventory(&order, inventory);

        assert_eq!(3, inventory.len());
        assert_eq!(Stock::Available(8), inventory["Milk"].stock);
        assert_eq!(Stock::OutOfStock, inventory["Bread"].stock);
        assert_eq!(Stock::Available(12), inventory["Eggs"].stock);
        assert!(!inventory.contains_key("Caviar"));
    }

    #[test]
    fn test_out_of_stock_stays_out() {
        let order = FulfillmentCart::from([(
            "Milk".to_string(),
            Fulfillment {
                quantity: 1,
                aisle: "Aisle 2".to_string(),
                refrigerated: true,
            },
        )]);
        let inventory = Inventory::from([(
            "Milk".to_string(),
            entry(Stock::OutOfStock, "Aisle 2", true),
        )]);

        let inventory = update_store_inventory(&order, inventory);
        assert_eq!(Stock::OutOfStock, inventory["Milk"].stock);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_stock_serde() {
        let json = serde_json::to_string(&Stock::Available(3)).unwrap();
        let back: Stock = serde_json::from_str(&json).unwrap();
        assert_eq!(Stock::Available(3), back);
    }
}
