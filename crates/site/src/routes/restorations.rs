//! Restoration request form handlers.

use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use solerevive_core::Email;

use crate::db::RestorationRepository;
use crate::error::{AppError, Result};
use crate::models::restoration::{NewRestorationRequest, RestorationRequest};
use crate::state::AppState;

/// Restoration request form data.
#[derive(Debug, Deserialize)]
pub struct RestorationForm {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub sneaker_brand: String,
    #[serde(default)]
    pub sneaker_model: String,
    #[serde(default)]
    pub size: Option<Decimal>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl RestorationForm {
    fn validate(self) -> Result<NewRestorationRequest> {
        let customer_name = self.customer_name.trim();
        let service_type = self.service_type.trim();
        let sneaker_brand = self.sneaker_brand.trim();
        let sneaker_model = self.sneaker_model.trim();
        let description = self.description.trim();

        if customer_name.is_empty()
            || self.email.trim().is_empty()
            || service_type.is_empty()
            || sneaker_brand.is_empty()
            || sneaker_model.is_empty()
            || description.is_empty()
        {
            return Err(AppError::BadRequest(
                "Name, email, service type, sneaker details, and description are required"
                    .to_string(),
            ));
        }

        let email =
            Email::parse(self.email.trim()).map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(NewRestorationRequest {
            customer_name: customer_name.to_string(),
            email,
            phone: self.phone,
            service_type: service_type.to_string(),
            sneaker_brand: sneaker_brand.to_string(),
            sneaker_model: sneaker_model.to_string(),
            size: self.size,
            description: description.to_string(),
            images: self.images,
        })
    }
}

/// Submit a restoration request.
///
/// POST /api/restorations
///
/// The response includes the generated request number the customer can
/// use to follow up on their ticket.
#[instrument(skip(state, form), fields(email = %form.email, service = %form.service_type))]
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<RestorationForm>,
) -> Result<(StatusCode, Json<RestorationRequest>)> {
    let request = form.validate()?;

    let created = RestorationRepository::new(state.pool())
        .create(&request)
        .await?;

    tracing::info!(
        id = %created.id,
        request_number = %created.request_number,
        "Restoration request stored"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> RestorationForm {
        RestorationForm {
            customer_name: "Devon".to_string(),
            email: "devon@example.com".to_string(),
            phone: None,
            service_type: "deep-clean".to_string(),
            sneaker_brand: "Nike".to_string(),
            sneaker_model: "Dunk Low".to_string(),
            size: Some(Decimal::new(105, 1)),
            description: "Yellowed midsole, scuffed toe box".to_string(),
            images: vec![],
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let request = form().validate().unwrap();
        assert_eq!(request.service_type, "deep-clean");
        assert_eq!(request.size, Some(Decimal::new(105, 1)));
    }

    #[test]
    fn test_missing_description_is_rejected() {
        let mut bad = form();
        bad.description = String::new();
        assert!(matches!(
            bad.validate().unwrap_err(),
            AppError::BadRequest(_)
        ));
    }

    #[test]
    fn test_missing_sneaker_details_are_rejected() {
        let mut bad = form();
        bad.sneaker_model = "  ".to_string();
        assert!(matches!(
            bad.validate().unwrap_err(),
            AppError::BadRequest(_)
        ));
    }
}
