//! Static suggestion content shown in the search overlay.

use serde::Deserialize;

/// A product featured as a direct-navigation shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrendingItem {
    pub id: u64,
    pub name: String,
    /// Whole Turkish lira.
    pub price: u32,
    pub image: String,
}

impl TrendingItem {
    pub fn price_label(&self) -> String {
        format!("{} TL", self.price)
    }
}

/// Read-only reference lists supplied by the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub popular_searches: Vec<String>,
    pub trending_items: Vec<TrendingItem>,
}

impl Default for Catalog {
    fn default() -> Self {
        let popular_searches = [
            "Altın kolye",
            "Gümüş bilezik",
            "Elmas küpe",
            "Rose gold yüzük",
            "İnci kolye",
            "Çelik bilezik",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let trending_items = [
            (1, "Gold Necklace", 299, "photo-1599643478518-a784e5dc4c8f"),
            (2, "Silver Bracelet", 249, "photo-1611591437281-460bfbe1220a"),
            (3, "Diamond Earrings", 399, "photo-1535632066927-ab7c9ab60908"),
            (4, "Rose Gold Ring", 349, "photo-1605100804763-247f67b3557e"),
        ]
        .iter()
        .map(|&(id, name, price, photo)| TrendingItem {
            id,
            name: name.to_string(),
            price,
            image: format!("https://images.unsplash.com/{photo}?w=100&h=100&fit=crop"),
        })
        .collect();

        Self {
            popular_searches,
            trending_items,
        }
    }
}
