use serde::Serialize;

pub const ANY_STYLIST_ID: &str = "any";

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub duration_min: u32,
    pub price_eur: u32,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stylist {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: Option<&'static str>,
}

impl Stylist {
    pub fn is_any(&self) -> bool {
        self.id == ANY_STYLIST_ID
    }
}

pub static SERVICES: [Service; 3] = [
    Service {
        id: "cut",
        name: "Signature Cut",
        duration_min: 60,
        price_eur: 48,
        description: "Individuelle Beratung, Schnitt & Finish",
    },
    Service {
        id: "color",
        name: "Color Glow",
        duration_min: 120,
        price_eur: 85,
        description: "Balayage oder Highlights mit Glossing",
    },
    Service {
        id: "care",
        name: "Care Ritual",
        duration_min: 45,
        price_eur: 35,
        description: "Intensivpflege mit Kopfhautmassage",
    },
];

pub static STYLISTS: [Stylist; 4] = [
    Stylist {
        id: ANY_STYLIST_ID,
        name: "Erste freie Stylist:in",
        specialty: None,
    },
    Stylist {
        id: "sarah",
        name: "Sarah",
        specialty: Some("Master Stylistin"),
    },
    Stylist {
        id: "marco",
        name: "Marco",
        specialty: Some("Senior Stylist"),
    },
    Stylist {
        id: "lisa",
        name: "Lisa",
        specialty: Some("Coloristin"),
    },
];

pub fn service_by_id(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

pub fn stylist_by_id(id: &str) -> Option<&'static Stylist> {
    STYLISTS.iter().find(|s| s.id == id)
}
