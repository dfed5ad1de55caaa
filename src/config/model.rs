use serde::{Deserialize, Serialize};

/// Fully resolved site configuration.
///
/// Every section carries `#[serde(default)]` so a resolved config always has
/// every optional section present, matching the shape of
/// `presets/defaults.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Required tenant identity. `company.slug` must be non-empty before
    /// materialization begins.
    pub company: Company,
    pub branding: Branding,
    pub industry: Industry,
    pub service_area: ServiceArea,
    pub social: Social,
    /// Third-party embed snippets pasted verbatim into the template.
    pub ghl: Ghl,
    pub seo: Seo,
    pub reviews: Reviews,
    pub hours: Hours,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub faq: Vec<FaqEntry>,
    pub gallery: Vec<GalleryItem>,
    pub team: Vec<Team>,
}

/// Company identity and contact details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub name: String,
    /// URL/filesystem-safe identifier; destination directory name and
    /// provisioning lookup key.
    pub slug: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub license: String,
    pub years_in_business: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub font: String,
    /// Local source path before asset resolution; relative public path after.
    pub logo: String,
    pub favicon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Industry {
    pub slug: String,
    pub emergency_service: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceArea {
    pub areas: Vec<String>,
    pub radius_miles: u32,
    pub primary_city: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    pub facebook: String,
    pub instagram: String,
    pub google_business: String,
    pub yelp: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ghl {
    pub chat_widget: String,
    pub calendar_embed: String,
    pub form_embed: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Reviews {
    pub rating: f64,
    pub count: u32,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Hours {
    pub weekday: String,
    pub saturday: String,
    pub sunday: String,
}

/// One entry in the tenant's service catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Empty until asset resolution finds an image for this service; left
    /// as configured when no candidate exists.
    pub image: String,
    pub featured: bool,
    pub price_range: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub name: String,
    pub text: String,
    pub rating: u32,
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryItem {
    pub image: String,
    pub caption: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub name: String,
    pub role: String,
    pub photo: String,
    pub bio: String,
}
