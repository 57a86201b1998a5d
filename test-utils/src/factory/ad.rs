//! Ad factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AdFactory<'a> {
    db: &'a DatabaseConnection,
    ad_type: entity::ad::AdType,
    position: String,
    is_active: bool,
}

impl<'a> AdFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            ad_type: entity::ad::AdType::Banner,
            position: "top".to_string(),
            is_active: true,
        }
    }

    pub fn ad_type(mut self, ad_type: entity::ad::AdType) -> Self {
        self.ad_type = ad_type;
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::ad::Model, DbErr> {
        let id = next_id();
        entity::ad::ActiveModel {
            ad_type: ActiveValue::Set(self.ad_type),
            position: ActiveValue::Set(self.position),
            image_url: ActiveValue::Set(format!("https://cdn.example.com/ad-{}.png", id)),
            link_url: ActiveValue::Set(format!("https://example.com/promo/{}", id)),
            title: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
