// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Description:
//   Entités persistées (une table par famille) avec SeaORM.
//
// Liste des modules:
//   - health : Réponse du health check
//   - bid : Offres (table bidlist)
//   - curve_point : Points de courbe
//   - rating : Notations Moody's / S&P / Fitch
//   - rule_name : Règles (json, template, sql stockés tels quels)
//   - trade : Trades
//   - users : Utilisateurs + enum Role (USER / ADMIN)
//
// Points d'attention:
//   - Aucune relation entre les tables (pas de clé étrangère)
//   - Les dates d'audit sont gérées par les services, jamais par les DTO
//
// ============================================================================

pub mod health;
pub mod bid;
pub mod curve_point;
pub mod rating;
pub mod rule_name;
pub mod trade;
pub mod users;
