use sea_orm::Set;

use crate::dto::rule_name::{RuleNameAddDto, RuleNameListItemDto, RuleNameUpdateDto};
use crate::models::rule_name;

pub fn to_list_item(rule: &rule_name::Model) -> RuleNameListItemDto {
    RuleNameListItemDto {
        id: rule.id,
        name: rule.name.clone(),
        description: rule.description.clone(),
        json: rule.json.clone(),
        template: rule.template.clone(),
        sql_str: rule.sql_str.clone(),
        sql_part: rule.sql_part.clone(),
    }
}

pub fn to_active_model(dto: RuleNameAddDto) -> rule_name::ActiveModel {
    rule_name::ActiveModel {
        name: Set(dto.name),
        description: Set(dto.description),
        json: Set(dto.json),
        template: Set(dto.template),
        sql_str: Set(dto.sql_str),
        sql_part: Set(dto.sql_part),
        ..Default::default()
    }
}

pub fn to_update_dto(rule: &rule_name::Model) -> RuleNameUpdateDto {
    RuleNameUpdateDto {
        id: Some(rule.id),
        name: Some(rule.name.clone()),
        description: Some(rule.description.clone()),
        json: rule.json.clone(),
        template: rule.template.clone(),
        sql_str: rule.sql_str.clone(),
        sql_part: rule.sql_part.clone(),
    }
}

pub fn merge(current: rule_name::Model, patch: RuleNameUpdateDto) -> rule_name::Model {
    rule_name::Model {
        name: patch.name.unwrap_or(current.name),
        description: patch.description.unwrap_or(current.description),
        json: patch.json.or(current.json),
        template: patch.template.or(current.template),
        sql_str: patch.sql_str.or(current.sql_str),
        sql_part: patch.sql_part.or(current.sql_part),
        ..current
    }
}
