use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, impl_entity_identity};

/// Product category.
///
/// Identity is the `code`: see [`Entity`]. Comparing two categories with `==`
/// never looks at name, description or the active flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    code: Option<String>,
    name: Option<String>,
    description: Option<String>,
    active: bool,
}

impl Category {
    /// Create an active category.
    pub fn new(code: impl Into<String>, name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            code: Some(code.into()),
            name: Some(name.into()),
            description: description.map(str::to_string),
            active: true,
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_code(&mut self, code: Option<&str>) {
        self.code = code.map(str::to_string);
    }

    pub fn set_name(&mut self, name: Option<&str>) {
        self.name = name.map(str::to_string);
    }

    pub fn set_description(&mut self, description: Option<&str>) {
        self.description = description.map(str::to_string);
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl Entity for Category {
    type Key = str;

    fn key(&self) -> Option<&str> {
        self.code()
    }
}

impl_entity_identity!(Category);

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Category {{ code: {}, name: {}, description: {}, active: {} }}",
            self.code().unwrap_or("-"),
            self.name().unwrap_or("-"),
            self.description().unwrap_or("-"),
            self.active
        )
    }
}
