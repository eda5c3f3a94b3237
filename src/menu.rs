use crate::models::MenuItem;

/// The canteen's standing menu, loaded once into shared state.
///
/// Orders snapshot the name and price of each selection, so editing this
/// list never rewrites order history.
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: "m1".to_string(),
            name: "Vegetable Samosa".to_string(),
            price: 1.50,
            description: Some("Crisp pastry with a spiced potato filling".to_string()),
            category: "Appetizer".to_string(),
        },
        MenuItem {
            id: "m2".to_string(),
            name: "Chicken Biryani".to_string(),
            price: 8.99,
            description: Some("Fragrant basmati rice layered with chicken".to_string()),
            category: "Main Course".to_string(),
        },
        MenuItem {
            id: "m3".to_string(),
            name: "Paneer Tikka Masala".to_string(),
            price: 7.50,
            description: None,
            category: "Main Course".to_string(),
        },
        MenuItem {
            id: "m4".to_string(),
            name: "Mango Lassi".to_string(),
            price: 3.00,
            description: None,
            category: "Drink".to_string(),
        },
        MenuItem {
            id: "m5".to_string(),
            name: "Coke".to_string(),
            price: 1.25,
            description: None,
            category: "Drink".to_string(),
        },
    ]
}
