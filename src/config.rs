use std::{env, fs, io, path::PathBuf};

use thiserror::Error;

use crate::model::{
    role::{ParseRoleError, Role},
    seed, Group, Groups, GroupsError, Member,
};

const SEED_FILE_VAR: &str = "GROUPS_SEED_FILE";
const USER_ROLE_VAR: &str = "GROUPS_USER_ROLE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read seed file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("seed file is not a valid group list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed file breaks an invariant: {0}")]
    Invalid(#[from] GroupsError),
    #[error("GROUPS_USER_ROLE: {0}")]
    Role(#[from] ParseRoleError),
}

/// Startup settings, read from the environment after `.env` is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// JSON list of groups that replaces the built in seed.
    pub seed_file: Option<PathBuf>,
    pub user_role: Role,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_file: None,
            user_role: Role::Admin,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let seed_file = var(SEED_FILE_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        let user_role = match var(USER_ROLE_VAR) {
            Some(role) => role.trim().parse::<Role>()?,
            None => Role::Admin,
        };
        Ok(Self {
            seed_file,
            user_role,
        })
    }

    pub fn load_groups(&self) -> Result<Groups, ConfigError> {
        let Some(path) = &self.seed_file else {
            return Ok(Groups::seeded());
        };
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let groups: Vec<Group> = serde_json::from_str(&json)?;
        Ok(Groups::new(groups)?)
    }

    pub fn current_user(&self) -> Member {
        Member {
            role: self.user_role,
            ..seed::current_user()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use uuid::Uuid;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    fn temp_file(contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("groups-{}.json", Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_vars(vars(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.load_groups().unwrap(), Groups::seeded());
        assert_eq!(settings.current_user().role, Role::Admin);
    }

    #[test]
    fn test_user_role() {
        let settings = Settings::from_vars(vars(&[(USER_ROLE_VAR, " leader ")])).unwrap();
        let user = settings.current_user();
        assert_eq!(user.role, Role::Leader);
        assert_eq!(user.id, seed::current_user().id);
    }

    #[test]
    fn test_invalid_user_role() {
        let err = Settings::from_vars(vars(&[(USER_ROLE_VAR, "owner")])).unwrap_err();
        assert!(matches!(err, ConfigError::Role(_)));
    }

    #[test]
    fn test_seed_file_roundtrip() {
        let json = serde_json::to_string(Groups::seeded().as_slice()).unwrap();
        let path = temp_file(&json);
        let settings = Settings {
            seed_file: Some(path.clone()),
            ..Settings::default()
        };

        let groups = settings.load_groups().unwrap();
        fs::remove_file(path).unwrap();

        assert_eq!(groups, Groups::seeded());
    }

    #[test]
    fn test_seed_file_with_duplicate_ids() {
        let mut seed = seed::initial_groups();
        seed.push(seed[1].clone());
        let path = temp_file(&serde_json::to_string(&seed).unwrap());
        let settings = Settings {
            seed_file: Some(path.clone()),
            ..Settings::default()
        };

        let err = settings.load_groups().unwrap_err();
        fs::remove_file(path).unwrap();

        assert!(matches!(
            err,
            ConfigError::Invalid(GroupsError::DuplicateGroupId(_))
        ));
    }

    #[test]
    fn test_seed_file_missing_or_malformed() {
        let missing = Settings {
            seed_file: Some(env::temp_dir().join(format!("{}.json", Uuid::new_v4()))),
            ..Settings::default()
        };
        assert!(matches!(missing.load_groups(), Err(ConfigError::Read { .. })));

        let path = temp_file(r#"[{"id": "1", "status": "closed"}]"#);
        let malformed = Settings {
            seed_file: Some(path.clone()),
            ..Settings::default()
        };
        let result = malformed.load_groups();
        fs::remove_file(path).unwrap();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
