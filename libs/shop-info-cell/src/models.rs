// libs/shop-info-cell/src/models.rs
use serde::{Deserialize, Serialize};

/// The shop's public business card, served verbatim on the info endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopInfo {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    pub hours: Vec<OpeningHours>,
    pub latitude: f64,
    pub longitude: f64,
}

/// One display row of the opening-hours table; order is presentation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningHours {
    pub days: String,
    pub hours: String,
}

impl ShopInfo {
    pub fn current() -> Self {
        Self {
            name: "Your Barbershop".to_string(),
            tagline: "Fresh fades. Clean shaves. Good vibes.".to_string(),
            about: "We are a neighborhood barbershop focused on classic cuts and modern \
                    styles. Enjoy a chill atmosphere, premium products, and barbers who \
                    care about the details."
                .to_string(),
            address: "123 Main St, Your City".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: Some("book@yourbarbershop.com".to_string()),
            hours: vec![
                OpeningHours {
                    days: "Mon-Fri".to_string(),
                    hours: "9:00 AM - 7:00 PM".to_string(),
                },
                OpeningHours {
                    days: "Sat".to_string(),
                    hours: "9:00 AM - 5:00 PM".to_string(),
                },
                OpeningHours {
                    days: "Sun".to_string(),
                    hours: "Closed".to_string(),
                },
            ],
            latitude: 40.7128,
            longitude: -74.0060,
        }
    }
}
