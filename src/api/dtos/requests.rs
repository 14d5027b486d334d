use serde::Deserialize;

#[derive(Deserialize)]
pub struct SelectServiceRequest {
    pub service_id: String,
}

#[derive(Deserialize)]
pub struct SelectStylistRequest {
    pub stylist_id: String,
}

#[derive(Deserialize)]
pub struct SelectDateRequest {
    pub date: String,
}

#[derive(Deserialize)]
pub struct SelectTimeRequest {
    pub time: String,
}

#[derive(Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub note: Option<String>,
}
