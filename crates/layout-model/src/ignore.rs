//! Classifiers for objects that statistics should skip.
//!
//! The designer places marker objects (blockers, placeholders) that are not
//! real buildings. Which objects count as markers is the application's call,
//! so statistics take the rule as a parameter.

use crate::object::PlacedObject;

/// Decides whether an object is left out of statistics.
pub trait IgnoreRule {
    fn is_ignored(&self, object: &PlacedObject) -> bool;
}

impl<F> IgnoreRule for F
where
    F: Fn(&PlacedObject) -> bool,
{
    fn is_ignored(&self, object: &PlacedObject) -> bool {
        self(object)
    }
}

/// Counts every object.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIgnore;

impl IgnoreRule for NoIgnore {
    fn is_ignored(&self, _object: &PlacedObject) -> bool {
        false
    }
}

/// Ignores objects whose template is in a list (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateIgnoreRule {
    templates: Vec<String>,
}

impl TemplateIgnoreRule {
    pub fn new<I, S>(templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            templates: templates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }
}

impl Default for TemplateIgnoreRule {
    /// Ignores the designer's `Blocker` marker template.
    fn default() -> Self {
        Self::new(["Blocker"])
    }
}

impl IgnoreRule for TemplateIgnoreRule {
    fn is_ignored(&self, object: &PlacedObject) -> bool {
        self.templates
            .iter()
            .any(|template| template.eq_ignore_ascii_case(&object.template))
    }
}
