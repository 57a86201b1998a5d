//! Advertisement domain models and parameters.

use chrono::{DateTime, Utc};
use entity::ad::AdType;

use crate::model::ad::AdDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Ad {
    pub id: i32,
    pub ad_type: AdType,
    pub position: String,
    pub image_url: String,
    pub link_url: String,
    pub title: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Ad {
    pub fn from_entity(entity: entity::ad::Model) -> Self {
        Self {
            id: entity.id,
            ad_type: entity.ad_type,
            position: entity.position,
            image_url: entity.image_url,
            link_url: entity.link_url,
            title: entity.title,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AdDto {
        AdDto {
            id: self.id,
            ad_type: ad_type_to_str(&self.ad_type).to_string(),
            position: self.position,
            image_url: self.image_url,
            link_url: self.link_url,
            title: self.title,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

pub fn ad_type_to_str(ad_type: &AdType) -> &'static str {
    match ad_type {
        AdType::Popup => "popup",
        AdType::Banner => "banner",
    }
}

pub fn str_to_ad_type(value: &str) -> Option<AdType> {
    match value {
        "popup" => Some(AdType::Popup),
        "banner" => Some(AdType::Banner),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct CreateAdParams {
    pub ad_type: AdType,
    pub position: String,
    pub image_url: String,
    pub link_url: String,
    pub title: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateAdParams {
    pub id: i32,
    pub ad_type: AdType,
    pub position: String,
    pub image_url: String,
    pub link_url: String,
    pub title: Option<String>,
    pub is_active: bool,
}
