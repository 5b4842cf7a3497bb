//! ProductType entity and request DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::rules::{required_non_negative, required_text};

/// Product type as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductType {
    /// Externally supplied identifier
    #[serde(rename = "prodtype_id", alias = "ProdType_ID")]
    #[schema(example = 1)]
    pub id: i32,
    /// Display name
    #[serde(rename = "prodtype_name", alias = "ProdType_Name")]
    #[schema(example = "Electronics")]
    pub name: String,
}

/// Create request. Missing fields deserialize to zero values so they
/// surface as `required` failures.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct ProductTypeCreate {
    #[serde(rename = "prodtype_id", alias = "ProdType_ID")]
    #[validate(custom(function = "required_non_negative"))]
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "prodtype_name", alias = "ProdType_Name")]
    #[validate(custom(function = "required_text"), length(max = 40, code = "max"))]
    #[schema(example = "Electronics", max_length = 40)]
    pub name: String,
}

/// Update request, the id comes from the path.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct ProductTypeUpdate {
    #[serde(rename = "prodtype_name", alias = "ProdType_Name")]
    #[validate(custom(function = "required_text"), length(max = 40, code = "max"))]
    #[schema(example = "Home Appliances", max_length = 40)]
    pub name: String,
}

impl From<ProductTypeCreate> for ProductType {
    fn from(dto: ProductTypeCreate) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}
