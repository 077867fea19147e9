//! Catalog items and the startup seed list.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A purchasable catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: Uuid,
    /// Weapon, Tool, Cosmetic, Power-up, ...
    pub item_type: String,
    pub item_name: String,
    pub coin_price: i64,
    pub description: String,
    pub image_url: String,
}

impl Item {
    pub fn new(
        item_type: impl Into<String>,
        item_name: impl Into<String>,
        coin_price: i64,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_type: item_type.into(),
            item_name: item_name.into(),
            coin_price,
            description: description.into(),
            image_url: image_url.into(),
        }
    }
}

struct SeedItem {
    item_type: &'static str,
    item_name: &'static str,
    coin_price: i64,
    description: &'static str,
    image_url: &'static str,
}

const SEED_ITEMS: &[SeedItem] = &[
    SeedItem {
        item_type: "Weapon",
        item_name: "Steel Sword",
        coin_price: 150,
        description: "A sharp steel sword for battle",
        image_url: "https://images.unsplash.com/photo-1598300042247-d088f8ab3a91?w=300&h=300&fit=crop",
    },
    SeedItem {
        item_type: "Weapon",
        item_name: "Magic Staff",
        coin_price: 300,
        description: "A powerful magic staff",
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=300&h=300&fit=crop",
    },
    SeedItem {
        item_type: "Tool",
        item_name: "Pickaxe",
        coin_price: 75,
        description: "Perfect for mining",
        image_url: "https://images.unsplash.com/photo-1504917595217-d4dc5ebe6122?w=300&h=300&fit=crop",
    },
    SeedItem {
        item_type: "Tool",
        item_name: "Fishing Rod",
        coin_price: 50,
        description: "Catch the biggest fish",
        image_url: "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=300&h=300&fit=crop",
    },
    SeedItem {
        item_type: "Cosmetic",
        item_name: "Golden Crown",
        coin_price: 500,
        description: "Show your royal status",
        image_url: "https://images.unsplash.com/photo-1611652022419-a9419f74343d?w=300&h=300&fit=crop",
    },
    SeedItem {
        item_type: "Cosmetic",
        item_name: "Cape of Shadows",
        coin_price: 200,
        description: "A mysterious dark cape",
        image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=300&fit=crop",
    },
    SeedItem {
        item_type: "Power-up",
        item_name: "Speed Potion",
        coin_price: 25,
        description: "Increases your speed temporarily",
        image_url: "https://images.unsplash.com/photo-1559181567-c3190ca9959b?w=300&h=300&fit=crop",
    },
    SeedItem {
        item_type: "Power-up",
        item_name: "Strength Elixir",
        coin_price: 35,
        description: "Doubles your strength for 10 minutes",
        image_url: "https://images.unsplash.com/photo-1582719471384-894fbb16e074?w=300&h=300&fit=crop",
    },
];

/// Fresh copies of the seed catalog, each with a new id
pub fn seed_items() -> Vec<Item> {
    SEED_ITEMS
        .iter()
        .map(|seed| {
            Item::new(
                seed.item_type,
                seed.item_name,
                seed.coin_price,
                seed.description,
                seed.image_url,
            )
        })
        .collect()
}
