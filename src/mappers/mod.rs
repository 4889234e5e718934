// Copie de champs entre entités et DTO.
// `merge(current, patch)` applique une modification partielle: un champ absent
// du DTO conserve la valeur stockée.

pub mod bid_mapper;
pub mod curve_point_mapper;
pub mod rating_mapper;
pub mod rule_name_mapper;
pub mod trade_mapper;
pub mod user_mapper;
