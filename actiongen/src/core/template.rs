//! Placeholder substitution for the built-in document templates.
//!
//! Templates are rendered with minijinja but only ever contain `{{ key }}`
//! placeholders. Undefined placeholders are an error rather than empty text.

use std::collections::BTreeMap;

use minijinja::{Environment, UndefinedBehavior};

use crate::core::error::{GenerateError, GenerateResult};

/// Name of the top-level document template.
pub const DOCUMENT: &str = "actions";
/// Name of the per-method template.
pub const METHOD: &str = "method";

const DOCUMENT_TEMPLATE: &str = include_str!("templates/actions.php");
const METHOD_TEMPLATE: &str = include_str!("templates/method.php");

/// Placeholder values for one render call.
pub type Placeholders<'a> = BTreeMap<&'a str, String>;

/// Template engine wrapper around minijinja.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> GenerateResult<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template(DOCUMENT, DOCUMENT_TEMPLATE)
            .map_err(|err| template_error(DOCUMENT, &err))?;
        env.add_template(METHOD, METHOD_TEMPLATE)
            .map_err(|err| template_error(METHOD, &err))?;
        Ok(Self { env })
    }

    /// Substitute `values` into the template called `name`.
    pub fn render(&self, name: &str, values: &Placeholders<'_>) -> GenerateResult<String> {
        let template = self
            .env
            .get_template(name)
            .map_err(|err| template_error(name, &err))?;
        template
            .render(values)
            .map_err(|err| template_error(name, &err))
    }
}

fn template_error(name: &str, err: &minijinja::Error) -> GenerateError {
    GenerateError::Template {
        name: name.to_string(),
        message: err.to_string(),
    }
}
