use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Promotion {
    MorningBrewDiscount,
    HappyHourSpecials,
    DailyRoastDeals,
    LoyaltyBeanBonus,
}

impl Promotion {
    pub fn rate(self) -> f64 {
        match self {
            Promotion::MorningBrewDiscount => 0.10,
            Promotion::HappyHourSpecials => 0.15,
            Promotion::DailyRoastDeals => 0.20,
            Promotion::LoyaltyBeanBonus => 0.25,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Promotion::MorningBrewDiscount => "Morning Brew Discount",
            Promotion::HappyHourSpecials => "Happy Hour Specials",
            Promotion::DailyRoastDeals => "Daily Roast Deals",
            Promotion::LoyaltyBeanBonus => "Loyalty Bean Bonus",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct PaymentQuoteQuery {
    pub promotion: Option<Promotion>,
    pub tendered: Option<f64>,
}
