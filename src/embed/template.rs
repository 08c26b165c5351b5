//! Template types for typed variable injection.

use std::marker::PhantomData;

/// A set of variables that knows how to fill a template.
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Compiled-in template, tied to the variable set it expects.
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }

    pub const fn content(&self) -> &'static str {
        self.content
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}
