//! The ordered module list.

use serde::Deserialize;

use crate::collectors::Collector;
use crate::template::Template;

/// One status line module: a collector, its argument, and its template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleDescriptor {
    pub collector: Collector,
    #[serde(default)]
    pub arg: Option<String>,
    pub format: Template,
    /// Slow modules are only re-collected at startup, on refresh, and at shutdown.
    #[serde(default)]
    pub slow: bool,
}

impl ModuleDescriptor {
    pub fn new(collector: Collector, arg: Option<&str>, format: Template, slow: bool) -> Self {
        Self {
            collector,
            arg: arg.map(str::to_string),
            format,
            slow,
        }
    }

    pub fn collect(&self) -> Option<String> {
        self.collector.collect(self.arg.as_deref())
    }
}

/// Immutable, ordered list of modules. Order is left-to-right output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    modules: Vec<ModuleDescriptor>,
}

impl Registry {
    pub fn new(modules: Vec<ModuleDescriptor>) -> Self {
        Self { modules }
    }

    pub fn modules(&self) -> &[ModuleDescriptor] {
        &self.modules
    }

    pub fn slow(&self) -> impl Iterator<Item = &ModuleDescriptor> {
        self.modules.iter().filter(|m| m.slow)
    }

    pub fn fast(&self) -> impl Iterator<Item = &ModuleDescriptor> {
        self.modules.iter().filter(|m| !m.slow)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
