//! Project manifest (package.json) handling
//!
//! Only the keys the pipeline rewrites are typed; everything else is carried
//! through untouched in [`PackageManifest::extra`]. Serialization writes the
//! top-level keys back in their source order and keeps the order inside each
//! map. Keys the source did not have are appended.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::config::defaults::{DEFAULT_THEMING_VERSION, DEV_ONLY_DEPENDENCIES, STANDALONE_SCRIPTS};
use crate::config::packages::THEMING_PACKAGE;
use crate::core::edition::Edition;
use crate::core::versions::DependencyVersionPair;

const NAME: &str = "name";
const SCRIPTS: &str = "scripts";
const DEPENDENCIES: &str = "dependencies";
const DEV_DEPENDENCIES: &str = "devDependencies";

/// Parsed package.json
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageManifest {
    /// Package name
    pub name: Option<String>,

    /// npm scripts
    pub scripts: Option<Map<String, Value>>,

    /// Runtime dependencies
    pub dependencies: Option<Map<String, Value>>,

    /// Development dependencies
    pub dev_dependencies: Option<Map<String, Value>>,

    /// Keys the pipeline does not touch
    pub extra: Map<String, Value>,

    /// Top-level key order of the source document
    key_order: Vec<String>,
}

/// Remove `key` and decode it; `null` counts as absent
fn take<T: DeserializeOwned>(
    object: &mut Map<String, Value>,
    key: &str,
) -> Result<Option<T>, serde_json::Error> {
    match object.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value).map(Some),
    }
}

impl PackageManifest {
    /// Parse manifest JSON
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serialize with 2-space indentation
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn from_object(mut object: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let key_order = object.keys().cloned().collect();
        Ok(Self {
            name: take(&mut object, NAME)?,
            scripts: take(&mut object, SCRIPTS)?,
            dependencies: take(&mut object, DEPENDENCIES)?,
            dev_dependencies: take(&mut object, DEV_DEPENDENCIES)?,
            extra: object,
            key_order,
        })
    }

    fn to_object(&self) -> Map<String, Value> {
        let typed = [
            (NAME, self.name.clone().map(Value::String)),
            (SCRIPTS, self.scripts.clone().map(Value::Object)),
            (DEPENDENCIES, self.dependencies.clone().map(Value::Object)),
            (DEV_DEPENDENCIES, self.dev_dependencies.clone().map(Value::Object)),
        ];

        let mut object = Map::new();
        for key in &self.key_order {
            let value = match typed.iter().find(|(typed_key, _)| *typed_key == key.as_str()) {
                Some((_, value)) => value.as_ref(),
                None => self.extra.get(key),
            };
            if let Some(value) = value {
                object.insert(key.clone(), value.clone());
            }
        }
        for (key, value) in &self.extra {
            if !object.contains_key(key) {
                object.insert(key.clone(), value.clone());
            }
        }
        for (key, value) in typed {
            if let Some(value) = value {
                object.entry(key).or_insert(value);
            }
        }
        object
    }

    /// Version of a runtime dependency, if declared
    pub fn dependency(&self, package: &str) -> Option<&str> {
        self.dependencies
            .as_ref()
            .and_then(|deps| deps.get(package))
            .and_then(Value::as_str)
    }

    /// Standalone copy of this manifest for one edition.
    ///
    /// The receiver is left untouched, so premium and community builds of
    /// the same project never observe each other's changes. An existing
    /// dependency keeps its position when its version is replaced.
    #[must_use]
    pub fn for_edition(
        &self,
        edition: Edition,
        versions: &DependencyVersionPair,
        project_name: &str,
    ) -> Self {
        let mut next = self.clone();

        next.scripts = Some(
            STANDALONE_SCRIPTS
                .iter()
                .map(|(k, v)| ((*k).to_string(), Value::from(*v)))
                .collect(),
        );

        if let Some(dev) = next.dev_dependencies.as_mut() {
            for name in DEV_ONLY_DEPENDENCIES {
                dev.shift_remove(*name);
            }
        }

        let deps = next.dependencies.get_or_insert_with(Map::new);
        deps.entry(THEMING_PACKAGE)
            .or_insert_with(|| Value::from(DEFAULT_THEMING_VERSION));
        deps.shift_remove(edition.other_dock_manager_package());
        deps.insert(
            edition.dock_manager_package().to_string(),
            Value::from(versions.for_edition(edition)),
        );

        let base = next
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(project_name);
        next.name = Some(format!("{base}-{}", edition.as_str()));

        next
    }
}

impl Serialize for PackageManifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_object().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PackageManifest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_object(object).map_err(D::Error::custom)
    }
}
