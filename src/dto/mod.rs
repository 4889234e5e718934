// DTO des formulaires: Add (création), Update (modification partielle), ListItem (affichage)

pub mod bid;
pub mod curve_point;
pub mod rating;
pub mod rule_name;
pub mod trade;
pub mod user;

use serde::{Deserialize, Deserializer, de};
use std::fmt;
use std::str::FromStr;

/// Un champ numérique laissé vide dans le formulaire vaut "absent"
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}
