use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::empty_as_none;
use crate::validation::{finite, not_blank};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BidAddDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Account is mandatory"))]
    pub account: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Type is mandatory"))]
    pub r#type: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(
        required(message = "Quantity is mandatory"),
        range(exclusive_min = 0.0, message = "Quantity must be greater than 0"),
        custom(function = "finite", message = "Quantity must be a finite number")
    )]
    pub quantity: Option<f64>,
}

/// Modification partielle: un champ absent garde sa valeur en base
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BidUpdateDto {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required(message = "Id is mandatory"))]
    pub id: Option<i32>,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Account is mandatory"))]
    pub account: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Type is mandatory"))]
    pub r#type: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(
        range(exclusive_min = 0.0, message = "Quantity must be greater than 0"),
        custom(function = "finite", message = "Quantity must be a finite number")
    )]
    pub quantity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidListItemDto {
    pub id: i32,
    pub account: String,
    pub r#type: String,
    pub quantity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldErrors;

    #[test]
    fn test_valid_add_dto() {
        let dto = BidAddDto {
            account: "Account3".to_string(),
            r#type: "TypeC".to_string(),
            quantity: Some(300.0),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_add_dto_reports_every_field() {
        let dto = BidAddDto {
            account: " ".to_string(),
            r#type: String::new(),
            quantity: Some(0.0),
        };

        let errors = FieldErrors::from(dto.validate().unwrap_err());

        assert!(errors.contains("account"));
        assert!(errors.contains("quantity"));
        assert_eq!(errors.messages("account"), ["Account is mandatory"]);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_add_dto_requires_quantity() {
        let dto = BidAddDto {
            account: "Account".to_string(),
            r#type: "Type".to_string(),
            quantity: None,
        };

        let errors = FieldErrors::from(dto.validate().unwrap_err());
        assert_eq!(errors.messages("quantity"), ["Quantity is mandatory"]);
    }

    #[test]
    fn test_infinite_quantity_is_rejected() {
        let dto = BidAddDto {
            account: "Account".to_string(),
            r#type: "Type".to_string(),
            quantity: Some(f64::INFINITY),
        };

        let errors = FieldErrors::from(dto.validate().unwrap_err());
        assert_eq!(errors.messages("quantity"), ["Quantity must be a finite number"]);
        assert_eq!(errors.len(), 1);

        let dto = BidUpdateDto {
            id: Some(1),
            quantity: Some(f64::INFINITY),
            ..Default::default()
        };
        assert!(FieldErrors::from(dto.validate().unwrap_err()).contains("quantity"));
    }

    #[test]
    fn test_update_dto_only_checks_present_fields() {
        let dto = BidUpdateDto {
            id: Some(1),
            quantity: Some(12.5),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        let dto = BidUpdateDto {
            id: Some(1),
            account: Some(String::new()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_dto_requires_id() {
        let errors = FieldErrors::from(BidUpdateDto::default().validate().unwrap_err());
        assert!(errors.contains("id"));
    }
}
