use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::{check_name, format_definition, Modifier, RadianceMaterial};
use crate::error::MaterialError;
use crate::number::{AsNumber, NumberConfig, RadianceNumber};
use crate::record::{self, GLOW_FIELDS};

const RED: NumberConfig = NumberConfig::positive("red");
const GREEN: NumberConfig = NumberConfig::positive("green");
const BLUE: NumberConfig = NumberConfig::positive("blue");
const MAX_RADIUS: NumberConfig = NumberConfig::positive("max_radius");

pub const WHITE_GLOW_NAME: &str = "white_glow";

///
/// Glow material: emits light of the given color, `max_radius` limits the distance
/// at which it is used as a light source during shadow testing
///
#[derive(Debug, Clone, PartialEq)]
pub struct GlowMaterial {
    name: String,
    modifier: Modifier,
    red: RadianceNumber,
    green: RadianceNumber,
    blue: RadianceNumber,
    max_radius: RadianceNumber,
}

impl GlowMaterial {
    pub const TYPE: &'static str = "glow";

    pub fn new(
        name: impl Into<String>,
        red: impl AsNumber,
        green: impl AsNumber,
        blue: impl AsNumber,
        max_radius: impl AsNumber,
    ) -> Result<Self, MaterialError> {
        let name = name.into();
        check_name(&name)?;

        Ok(Self {
            name,
            modifier: Modifier::Void,
            red: RadianceNumber::new(RED, red)?,
            green: RadianceNumber::new(GREEN, green)?,
            blue: RadianceNumber::new(BLUE, blue)?,
            max_radius: RadianceNumber::new(MAX_RADIUS, max_radius)?,
        })
    }

    /// Builds a glow from its JSON record. The `type` key is not consulted.
    pub fn from_json(rec: &Map<String, Value>) -> Result<Self, MaterialError> {
        record::require(rec, &["name"])?;

        let [red, green, blue, radius] = GLOW_FIELDS.map(|(_, key)| record::get(rec, key));
        let (red, green, blue, radius) = (red?, green?, blue?, radius?);

        Self::new(record::get_str(rec, "name")?, red, green, blue, radius)
    }

    pub fn red(&self) -> f64 {
        self.red.get()
    }

    pub fn green(&self) -> f64 {
        self.green.get()
    }

    pub fn blue(&self) -> f64 {
        self.blue.get()
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius.get()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), MaterialError> {
        let name = name.into();
        check_name(&name)?;
        self.name = name;

        Ok(())
    }

    pub fn set_red(&mut self, value: impl AsNumber) -> Result<(), MaterialError> {
        self.red.set(value)
    }

    pub fn set_green(&mut self, value: impl AsNumber) -> Result<(), MaterialError> {
        self.green.set(value)
    }

    pub fn set_blue(&mut self, value: impl AsNumber) -> Result<(), MaterialError> {
        self.blue.set(value)
    }

    pub fn set_max_radius(&mut self, value: impl AsNumber) -> Result<(), MaterialError> {
        self.max_radius.set(value)
    }

    /// Real arguments in Radiance order, matching `GLOW_FIELDS`.
    fn reals(&self) -> [f64; 4] {
        [self.red(), self.green(), self.blue(), self.max_radius()]
    }
}

impl RadianceMaterial for GlowMaterial {
    fn name(&self) -> &str {
        &self.name
    }

    fn material_type(&self) -> &'static str {
        Self::TYPE
    }

    fn modifier(&self) -> &Modifier {
        &self.modifier
    }

    fn to_rad_string(&self, minimal: bool) -> String {
        format_definition(&self.head_line(), &[], &[], &self.reals(), minimal)
    }

    fn to_json(&self) -> Map<String, Value> {
        let mut rec = Map::new();
        rec.insert("type".into(), Value::from(Self::TYPE));
        rec.insert("name".into(), Value::from(self.name.as_str()));

        for ((_, key), value) in GLOW_FIELDS.iter().zip(self.reals()) {
            rec.insert((*key).into(), record::number(value));
        }

        rec
    }
}

impl Display for GlowMaterial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rad_string(false))
    }
}

impl Serialize for GlowMaterial {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GlowMaterial {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rec = Map::<String, Value>::deserialize(deserializer)?;

        Self::from_json(&rec).map_err(serde::de::Error::custom)
    }
}

/// White glow for multi-phase daylight studies, named `white_glow` unless `name` is given.
pub fn white_glow(name: Option<&str>) -> Result<GlowMaterial, MaterialError> {
    GlowMaterial::new(name.unwrap_or(WHITE_GLOW_NAME), 1, 1, 1, 0)
}
