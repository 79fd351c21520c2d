/**
 * Directory Seeds
 *
 * Account records loaded at startup, either from a JSON file
 * (`DIRECTORY_SEED`) or from the built-in demo set. Seeds carry the clear
 * password; it is hashed when the directory is built.
 *
 * # File Format
 *
 * ```json
 * [
 *   {
 *     "pseudo": "amina",
 *     "firstname": "Amina",
 *     "lastname": "Diallo",
 *     "photo": "amina.jpg",
 *     "email": "amina.diallo@exemple.fr",
 *     "phone": "06 12 34 56 78",
 *     "password": "motdepasse"
 *   }
 * ]
 * ```
 *
 * `id` is optional and generated when absent.
 */

use std::path::Path;

use serde::Deserialize;
use uuid::Uuid;

use crate::backend::error::BackendError;

/// Password shared by every demo account
pub const DEMO_PASSWORD: &str = "motdepasse";

/// One account as written in a seed file
#[derive(Debug, Clone, Deserialize)]
pub struct AccountSeed {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub pseudo: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub photo: Option<String>,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Read a seed file
pub fn load_seeds(path: &Path) -> Result<Vec<AccountSeed>, BackendError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| BackendError::seed(path, e.to_string()))?;
    let seeds: Vec<AccountSeed> =
        serde_json::from_str(&contents).map_err(|e| BackendError::seed(path, e.to_string()))?;

    tracing::info!("Loaded {} accounts from {}", seeds.len(), path.display());
    Ok(seeds)
}

/// Built-in accounts used when no seed file is configured
pub fn demo_seeds() -> Vec<AccountSeed> {
    const ACCOUNTS: &[(&str, &str, &str, Option<&str>, &str)] = &[
        ("amina", "Amina", "Diallo", Some("amina.jpg"), "06 12 34 56 78"),
        ("bastien", "Bastien", "Moreau", None, "06 23 45 67 89"),
        ("camille", "Camille", "Lefèvre", Some("camille.jpg"), "07 34 56 78 90"),
        ("dylan", "Dylan", "Nguyen", None, "06 45 67 89 01"),
        ("elodie", "Élodie", "Martin", Some("elodie.jpg"), "07 56 78 90 12"),
        ("farid", "Farid", "Benali", None, "06 67 89 01 23"),
        ("gaelle", "Gaëlle", "Robert", Some("gaelle.jpg"), "07 78 90 12 34"),
        ("hugo", "Hugo", "Petit", None, "06 89 01 23 45"),
        ("ines", "Inès", "Garcia", Some("ines.jpg"), "07 90 12 34 56"),
        ("jules", "Jules", "Bernard", None, "06 01 23 45 67"),
        ("karim", "Karim", "Haddad", Some("karim.jpg"), "07 12 34 56 70"),
        ("lea", "Léa", "Dubois", None, "06 98 76 54 32"),
    ];

    ACCOUNTS
        .iter()
        .map(|(pseudo, firstname, lastname, photo, phone)| AccountSeed {
            id: Uuid::new_v4(),
            pseudo: pseudo.to_string(),
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            photo: photo.map(str::to_string),
            email: format!("{}@exemple.fr", pseudo),
            phone: phone.to_string(),
            password: DEMO_PASSWORD.to_string(),
        })
        .collect()
}
