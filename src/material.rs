use std::fmt::{Display, Formatter};

use serde_json::{Map, Value};

use crate::error::MaterialError;

pub mod glow;

pub use glow::{white_glow, GlowMaterial};

/// Name of the material modifying another one, `void` when there is none.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modifier {
    #[default]
    Void,
    Named(String),
}

impl Modifier {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Void => "void",
            Self::Named(name) => name,
        }
    }
}

impl Display for Modifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait RadianceMaterial: Send + Sync {
    fn name(&self) -> &str;
    fn material_type(&self) -> &'static str;
    fn modifier(&self) -> &Modifier;

    /// Full Radiance definition. Newlines become single spaces when `minimal` is set.
    fn to_rad_string(&self, minimal: bool) -> String;

    /// JSON record of the material, always carrying a `type` key.
    fn to_json(&self) -> Map<String, Value>;

    fn head_line(&self) -> String {
        format!(
            "{} {} {}\n",
            self.modifier(),
            self.material_type(),
            self.name()
        )
    }
}

/// Joins the header with the three argument blocks of a Radiance primitive.
pub(crate) fn format_definition(
    head_line: &str,
    strings: &[&str],
    integers: &[i64],
    reals: &[f64],
    minimal: bool,
) -> String {
    let mut out = String::from(head_line);

    push_block(&mut out, strings.iter().map(|s| s.to_string()));
    out.push('\n');
    push_block(&mut out, integers.iter().map(|i| i.to_string()));
    out.push('\n');
    push_block(&mut out, reals.iter().map(|r| format!("{r:.3}")));

    if minimal {
        out.replace('\n', " ")
    } else {
        out
    }
}

fn push_block(out: &mut String, values: impl ExactSizeIterator<Item = String>) {
    out.push_str(&values.len().to_string());

    for value in values {
        out.push(' ');
        out.push_str(&value);
    }
}

pub fn check_name(name: &str) -> Result<(), MaterialError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(MaterialError::InvalidName(name.to_owned()))
    }
}
