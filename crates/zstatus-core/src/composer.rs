//! Renders registry modules into the bounded status buffer.
//!
//! Slow modules are rendered into a fresh buffer whose contents become the
//! cached [`SlowSection`]. Every tick the fast modules are appended after a
//! copy of that section. Modules are concatenated strictly in registry order
//! with no implicit separators; the first segment that does not fit ends
//! composition for that pass.

use std::sync::Arc;

use crate::buffer::StatusBuffer;
use crate::registry::{ModuleDescriptor, Registry};

/// Rendered output of the slow modules.
///
/// Replaced as a whole on every slow refresh, so its text and length can
/// never be observed out of step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlowSection {
    text: String,
}

impl SlowSection {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Offset at which fast modules start.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Composer {
    registry: Arc<Registry>,
    max_len: usize,
    unknown: String,
}

impl Composer {
    /// `max_len` is the buffer capacity including the terminator slot.
    pub fn new(registry: Arc<Registry>, max_len: usize, unknown: impl Into<String>) -> Self {
        Self {
            registry,
            max_len,
            unknown: unknown.into(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Collects and renders every slow module from offset 0.
    pub fn render_slow(&self) -> SlowSection {
        let mut buf = StatusBuffer::new(self.max_len);
        self.render_into(&mut buf, self.registry.slow());
        SlowSection {
            text: buf.into_string(),
        }
    }

    /// Appends every fast module to `buf`, which must already hold the slow
    /// section. Returns the final length.
    pub fn render_fast(&self, buf: &mut StatusBuffer) -> usize {
        self.render_into(buf, self.registry.fast());
        buf.len()
    }

    /// Composes a full line: the cached slow section followed by fresh fast modules.
    pub fn compose(&self, slow: &SlowSection) -> StatusBuffer {
        let mut buf = StatusBuffer::with_prefix(slow.as_str(), self.max_len);
        self.render_fast(&mut buf);
        buf
    }

    fn render_into<'a>(
        &self,
        buf: &mut StatusBuffer,
        modules: impl Iterator<Item = &'a ModuleDescriptor>,
    ) {
        for module in modules {
            let value = module.collect();
            let segment = module.format.render(value.as_deref().unwrap_or(&self.unknown));
            if let Err(overflow) = buf.push_segment(&segment) {
                tracing::debug!(
                    collector = ?module.collector,
                    %overflow,
                    "status line full, skipping remaining modules"
                );
                break;
            }
        }
    }
}
