use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// Constants
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// Default role assigned to accounts created from the signup screen.
pub const DEFAULT_ROLE: &str = "staff";

// =========================================================
// Domain Models
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
        }
    }

    /// Parses the wire/UI representation. Empty or unknown input is `None`,
    /// which the order filter treats as "all statuses".
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(OrderStatus::Pending),
            "Completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bakery order, exactly as the backend stores it.
///
/// `id` is the backend's row identifier and is absent on records that have
/// not been persisted yet; `order_id` is the human-facing order number typed
/// by staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub order_id: String,
    pub customer_name: String,
    pub product_ordered: String,
    pub quantity: u32,
    pub order_date: NaiveDate,
    pub order_status: OrderStatus,
    #[serde(default)]
    pub total_price: Option<f64>,
}

// =========================================================
// Auth Payloads
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: UserSummary,
}

// =========================================================
// Stats Payloads
// =========================================================

/// Per-status order count, keyed the way the stats endpoint groups rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub order_status: OrderStatus,
    pub count: u64,
}

/// Per-product order count from the top-products ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCount {
    pub product_ordered: String,
    pub count: u64,
}

/// Response of `GET /api/stats/overview`. Top-level keys are camelCase on
/// the wire; the grouped rows keep the backend's column names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOverview {
    pub total: u64,
    pub pending: u64,
    pub completed: u64,
    #[serde(rename = "topProduct", default)]
    pub top_product: Option<String>,
    #[serde(rename = "byStatus", default)]
    pub by_status: Vec<StatusCount>,
    #[serde(rename = "topProducts", default)]
    pub top_products: Vec<ProductCount>,
}

// =========================================================
// Error Payload
// =========================================================

/// Structured error body returned by the backend on failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_round_trips_through_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"Pending\""
        );
        assert_eq!(OrderStatus::parse("Completed"), Some(OrderStatus::Completed));
        assert_eq!(OrderStatus::parse(""), None);
        assert_eq!(OrderStatus::parse("shipped"), None);
    }

    #[test]
    fn stats_overview_uses_camel_case_top_level_keys() {
        let json = r#"{
            "total": 12,
            "pending": 5,
            "completed": 7,
            "topProduct": "Croissant",
            "byStatus": [{"order_status": "Pending", "count": 5}],
            "topProducts": [{"product_ordered": "Croissant", "count": 9}]
        }"#;
        let stats: StatsOverview = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total, 12);
        assert_eq!(stats.top_product.as_deref(), Some("Croissant"));
        assert_eq!(stats.by_status[0].count, 5);
        assert_eq!(stats.top_products[0].product_ordered, "Croissant");
    }

    #[test]
    fn stats_overview_tolerates_missing_optional_sections() {
        let stats: StatsOverview =
            serde_json::from_str(r#"{"total": 0, "pending": 0, "completed": 0}"#).unwrap();
        assert!(stats.top_product.is_none());
        assert!(stats.by_status.is_empty());
    }

    #[test]
    fn order_serializes_date_as_iso_and_omits_unassigned_id() {
        let order = Order {
            id: None,
            order_id: "ORD-1001".into(),
            customer_name: "Alice".into(),
            product_ordered: "Cake".into(),
            quantity: 2,
            order_date: NaiveDate::from_ymd_opt(2025, 8, 14).unwrap(),
            order_status: OrderStatus::Pending,
            total_price: Some(24.5),
        };
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"order_date\":\"2025-08-14\""));
        assert!(!json.contains("\"id\""));
    }
}
