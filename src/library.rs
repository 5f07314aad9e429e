use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use once_cell::sync::Lazy;

use serde::Deserialize;
use serde_json::{Map, Value};

use thiserror::Error;

use crate::error::MaterialError;
use crate::material::{GlowMaterial, RadianceMaterial};
use crate::record;

type Builder = fn(&Map<String, Value>) -> Result<Box<dyn RadianceMaterial>, MaterialError>;

static BUILDERS: Lazy<HashMap<&'static str, Builder>> = Lazy::new(|| {
    let mut builders: HashMap<&'static str, Builder> = HashMap::new();

    builders.insert(GlowMaterial::TYPE, |rec| {
        Ok(Box::new(GlowMaterial::from_json(rec)?))
    });

    builders
});

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot read material library: {0}")]
    InputError(#[source] std::io::Error),
    #[error("cannot write radiance file: {0}")]
    OutputError(#[source] std::io::Error),
    #[error("{0}")]
    FormatError(#[from] json5::Error),
    #[error("unknown material type '{0}'")]
    UnknownType(String),
    #[error("{0}")]
    Material(#[from] MaterialError),
}

/// Builds a material from a record, picking the type from its `type` key.
pub fn material_from_json(
    rec: &Map<String, Value>,
) -> Result<Box<dyn RadianceMaterial>, LoaderError> {
    let kind = record::get_str(rec, "type")?;

    let builder = BUILDERS
        .get(kind)
        .ok_or_else(|| LoaderError::UnknownType(kind.to_owned()))?;

    Ok(builder(rec)?)
}

///
/// Ordered set of materials, as read from or written to a single file
///
#[derive(Default)]
pub struct MaterialLibrary {
    materials: Vec<Box<dyn RadianceMaterial>>,
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
        }
    }

    pub fn push(mut self, material: Box<dyn RadianceMaterial>) -> Self {
        self.materials.push(material);

        self
    }

    pub fn from_records(records: &[Map<String, Value>]) -> Result<Self, LoaderError> {
        let mut library = Self::new();

        for (i, rec) in records.iter().enumerate() {
            let material = material_from_json(rec).map_err(|e| {
                log::error!("material record {i} rejected: {e}");
                e
            })?;

            log::debug!(
                "loaded {} material '{}'",
                material.material_type(),
                material.name()
            );

            library = library.push(material);
        }

        Ok(library)
    }

    pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let library_str = std::fs::read_to_string(path).map_err(LoaderError::InputError)?;

        log::debug!("reading material library {}", path.display());

        library_str.parse()
    }

    pub fn materials(&self) -> &[Box<dyn RadianceMaterial>] {
        &self.materials
    }

    /// Last material with the given name, later definitions shadow earlier ones.
    pub fn get(&self, name: &str) -> Option<&dyn RadianceMaterial> {
        self.materials
            .iter()
            .rev()
            .find(|m| m.name() == name)
            .map(|m| &**m)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Radiance definitions separated by a blank line, or one per line when `minimal`.
    pub fn to_rad_string(&self, minimal: bool) -> String {
        let separator = if minimal { "\n" } else { "\n\n" };

        self.materials
            .iter()
            .map(|m| m.to_rad_string(minimal))
            .collect::<Vec<_>>()
            .join(separator)
    }

    pub fn write_rad_file<P: AsRef<Path>>(
        &self,
        path: P,
        minimal: bool,
    ) -> Result<(), LoaderError> {
        let path = path.as_ref();
        let mut contents = self.to_rad_string(minimal);
        contents.push('\n');

        std::fs::write(path, contents).map_err(LoaderError::OutputError)?;

        log::info!("wrote {} materials to {}", self.len(), path.display());

        Ok(())
    }

    pub fn to_json(&self) -> Value {
        Value::Array(
            self.materials
                .iter()
                .map(|m| Value::Object(m.to_json()))
                .collect(),
        )
    }
}

impl FromStr for MaterialLibrary {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let file: LibraryFile = json5::from_str(s)?;

        let records = match &file {
            LibraryFile::List(records) => records,
            LibraryFile::Wrapped { materials } => materials,
        };

        Self::from_records(records)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LibraryFile {
    List(Vec<Map<String, Value>>),
    Wrapped { materials: Vec<Map<String, Value>> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::white_glow;
    use serde_json::json;

    const LIBRARY: &str = r#"
        // skies
        {
            materials: [
                { type: "glow", name: "sky_glow", red: 0.9, green: 0.95, blue: 1.0, radius: 0 },
                {
                    "type": "glow",
                    "name": "ground_glow",
                    "red": 0.2,
                    "green": 0.2,
                    "blue": 0.2,
                    "radius": 0,
                },
            ],
        }
    "#;

    #[test]
    fn parse_wrapped() {
        let library: MaterialLibrary = LIBRARY.parse().unwrap();

        assert_eq!(library.len(), 2);
        assert_eq!(library.materials()[0].name(), "sky_glow");
        assert_eq!(library.materials()[1].name(), "ground_glow");
        assert_eq!(
            library.get("ground_glow").unwrap().to_rad_string(true),
            "void glow ground_glow 0 0 4 0.200 0.200 0.200 0.000"
        );
        assert!(library.get("missing").is_none());
    }

    #[test]
    fn parse_list() {
        let text = r#"[{"type": "glow", "name": "g", "red": 1, "green": 1, "blue": 1, "radius": 2}]"#;
        let library: MaterialLibrary = text.parse().unwrap();

        assert_eq!(
            library.to_rad_string(false),
            "void glow g\n0\n0\n4 1.000 1.000 1.000 2.000"
        );
    }

    #[test]
    fn rad_string_layout() {
        let library = MaterialLibrary::new()
            .push(Box::new(white_glow(None).unwrap()))
            .push(Box::new(GlowMaterial::new("dim", 0.1, 0.1, 0.1, 5).unwrap()));

        assert_eq!(
            library.to_rad_string(true),
            "void glow white_glow 0 0 4 1.000 1.000 1.000 0.000\n\
             void glow dim 0 0 4 0.100 0.100 0.100 5.000"
        );
        assert_eq!(
            library.to_rad_string(false),
            "void glow white_glow\n0\n0\n4 1.000 1.000 1.000 0.000\n\n\
             void glow dim\n0\n0\n4 0.100 0.100 0.100 5.000"
        );
    }

    #[test]
    fn json_export() {
        let library: MaterialLibrary = LIBRARY.parse().unwrap();
        let json = library.to_json();

        assert_eq!(json[0]["type"], json!("glow"));
        assert_eq!(json[1]["radius"], json!(0.0));

        let records: Vec<Map<String, Value>> = serde_json::from_value(json).unwrap();
        let again = MaterialLibrary::from_records(&records).unwrap();

        assert_eq!(again.to_rad_string(false), library.to_rad_string(false));
    }

    #[test]
    fn dispatch_errors() {
        let rec = json!({"type": "plastic", "name": "p"});
        assert!(matches!(
            material_from_json(rec.as_object().unwrap()),
            Err(LoaderError::UnknownType(t)) if t == "plastic"
        ));

        let rec = json!({"name": "g", "red": 1, "green": 1, "blue": 1, "radius": 0});
        assert!(matches!(
            material_from_json(rec.as_object().unwrap()),
            Err(LoaderError::Material(MaterialError::MissingField("type")))
        ));

        let rec = json!({"type": "glow", "name": "g", "red": 1, "green": 1});
        assert!(matches!(
            material_from_json(rec.as_object().unwrap()),
            Err(LoaderError::Material(MaterialError::MissingField("blue")))
        ));

        assert!(matches!(
            "{ materials: [".parse::<MaterialLibrary>(),
            Err(LoaderError::FormatError(_))
        ));
    }

    #[test]
    fn demo_library() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/skies.json5");
        let library = MaterialLibrary::load_path(path).unwrap();

        assert_eq!(library.len(), 3);
        assert_eq!(
            library.get("sun_disc").unwrap().to_rad_string(true),
            "void glow sun_disc 0 0 4 100000.000 95000.000 88000.000 0.000"
        );
    }

    #[test]
    fn rad_file() {
        let path = std::env::temp_dir().join(format!("radmat-{}.rad", std::process::id()));
        let library: MaterialLibrary = LIBRARY.parse().unwrap();

        library.write_rad_file(&path, false).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(written.starts_with("void glow sky_glow\n0\n0\n4 0.900 0.950 1.000 0.000\n\n"));
        assert!(written.ends_with("0.000\n"));

        assert!(matches!(
            MaterialLibrary::load_path(&path),
            Err(LoaderError::InputError(_))
        ));
    }
}
