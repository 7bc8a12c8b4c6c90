use crate::models::Property;
use crate::ui::PropertyGallery;
use serde::Serialize;

/// Listing card view-model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyCard {
    pub id: String,
    pub title: String,
    pub location: String,
    pub price: String,
    pub summary: String,
    pub cover_image: String,
    pub status: String,
    pub features: Vec<String>,
}

impl From<&Property> for PropertyCard {
    fn from(property: &Property) -> Self {
        let location = match &property.location.area {
            Some(area) => format!("{}, {}", area, property.location.city),
            None => property.location.city.clone(),
        };

        Self {
            id: property.id.clone(),
            title: property.title.clone(),
            location,
            price: format!("{}/mo", format_money(property.price)),
            summary: format!("{} bd · {} ba", property.bedrooms, property.bathrooms),
            cover_image: PropertyGallery::for_property(property).current_image().to_string(),
            status: capitalize(&property.status),
            features: property.features.clone(),
        }
    }
}

/// "$12,500"
pub fn format_money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}${}", sign, grouped)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
