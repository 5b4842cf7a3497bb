//! Request validation into ordered `FieldError` reports.
//!
//! Rules live on the DTOs as `validator` attributes. This module turns the
//! resulting `ValidationErrors` into a stable list: fields in declaration
//! order, one entry per field, the first failing rule in that field's rule
//! order.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::rules::RULE_PARAM;
use crate::domain::{LoginRequest, ProductTypeCreate, ProductTypeUpdate, UserCreate};
use crate::errors::FieldError;

/// Reporting order for one field.
struct FieldRules {
    /// Rust field name
    field: &'static str,
    /// Wire name, used when the validator keys errors by the serde rename
    wire: &'static str,
    /// Name reported in `failed_field`
    label: &'static str,
    /// Rule tags in declaration order
    tags: &'static [&'static str],
}

const PRODUCT_TYPE_CREATE_RULES: &[FieldRules] = &[
    FieldRules {
        field: "id",
        wire: "prodtype_id",
        label: "ID",
        tags: &["required", "gte"],
    },
    FieldRules {
        field: "name",
        wire: "prodtype_name",
        label: "Name",
        tags: &["required", "max"],
    },
];

const PRODUCT_TYPE_UPDATE_RULES: &[FieldRules] = &[FieldRules {
    field: "name",
    wire: "prodtype_name",
    label: "Name",
    tags: &["required", "max"],
}];

const USER_CREATE_RULES: &[FieldRules] = &[
    FieldRules {
        field: "id",
        wire: "user_id",
        label: "ID",
        tags: &["required", "gt"],
    },
    FieldRules {
        field: "role_id",
        wire: "role_id",
        label: "RoleID",
        tags: &["required", "gt"],
    },
    FieldRules {
        field: "name",
        wire: "user_name",
        label: "Name",
        tags: &["required", "max"],
    },
    FieldRules {
        field: "email",
        wire: "user_email",
        label: "Email",
        tags: &["required", "email", "max"],
    },
    FieldRules {
        field: "password",
        wire: "user_password",
        label: "Password",
        tags: &["required", "max"],
    },
];

const LOGIN_RULES: &[FieldRules] = &[
    FieldRules {
        field: "email",
        wire: "user_email",
        label: "Email",
        tags: &["required", "email", "max"],
    },
    FieldRules {
        field: "password",
        wire: "user_password",
        label: "Password",
        tags: &["required", "max"],
    },
];

pub fn validate_product_type_create(dto: &ProductTypeCreate) -> Vec<FieldError> {
    report("ProductTypeCreate", PRODUCT_TYPE_CREATE_RULES, dto.validate())
}

pub fn validate_product_type_update(dto: &ProductTypeUpdate) -> Vec<FieldError> {
    report("ProductTypeUpdate", PRODUCT_TYPE_UPDATE_RULES, dto.validate())
}

pub fn validate_user_create(dto: &UserCreate) -> Vec<FieldError> {
    report("UserCreate", USER_CREATE_RULES, dto.validate())
}

pub fn validate_login(dto: &LoginRequest) -> Vec<FieldError> {
    report("LoginRequest", LOGIN_RULES, dto.validate())
}

fn report(
    struct_name: &str,
    rules: &[FieldRules],
    result: Result<(), ValidationErrors>,
) -> Vec<FieldError> {
    let Err(errors) = result else {
        return Vec::new();
    };
    let by_field = errors.field_errors();

    rules
        .iter()
        .filter_map(|rule| {
            let failures = by_field
                .get(rule.field)
                .or_else(|| by_field.get(rule.wire))?;
            let failure = first_failure(rule.tags, failures)?;

            Some(FieldError::new(
                format!("{}.{}", struct_name, rule.label),
                failure.code.to_string(),
                rule_param(failure),
            ))
        })
        .collect()
}

fn first_failure<'a>(
    tags: &[&str],
    failures: &'a [ValidationError],
) -> Option<&'a ValidationError> {
    tags.iter()
        .find_map(|tag| failures.iter().find(|f| f.code == *tag))
        .or_else(|| failures.first())
}

/// Parameter of the failed rule, `max` for length rules.
fn rule_param(failure: &ValidationError) -> String {
    let key = if failure.code == "max" { "max" } else { RULE_PARAM };

    match failure.params.get(key) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(value) => value.to_string(),
        None => String::new(),
    }
}
