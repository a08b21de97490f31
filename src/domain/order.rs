use serde::{Deserialize, Serialize};

/// Order record assigned by the order service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
    pub number: u64,
    /// Catalog ids in bun, fillings..., bun order.
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Success payload of an order submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub name: String,
    pub order: Order,
}

/// Public order feed page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub total: u64,
    #[serde(rename = "totalToday", default)]
    pub total_today: u64,
}
