use crate::errors::AppError;

/// Hash des mots de passe: bcrypt salé ($2b$<coût>$<salt+hash>)
///
/// Le coût est inscrit dans chaque hash: changer `cost` n'invalide pas
/// les mots de passe déjà enregistrés.
#[derive(Debug, Clone)]
pub struct PasswordEncoder {
    cost: u32,
}

impl PasswordEncoder {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, raw_password: &str) -> Result<String, AppError> {
        // bcrypt génère lui-même un salt aléatoire de 16 bytes
        let hash = bcrypt::hash_with_result(raw_password, self.cost)
            .map_err(|e| AppError::PasswordHash(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Vérifie un mot de passe contre un hash stocké.
    /// La comparaison finale est faite en temps constant par bcrypt.
    pub fn verify(&self, raw_password: &str, stored_hash: &str) -> bool {
        match bcrypt::verify(raw_password, stored_hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Stored password hash is not a valid bcrypt hash: {}", e);
                false
            }
        }
    }
}
