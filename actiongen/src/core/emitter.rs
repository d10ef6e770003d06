//! Rendering of forwarding methods.

use crate::core::error::GenerateResult;
use crate::core::template::{METHOD, Placeholders, Templates};
use crate::core::types::{EmittedAction, MethodDescriptor, Parameter, StepKind};

/// Doc line used when no documentation could be resolved.
pub const EMPTY_DOC: &str = "*";

const CONDITIONAL_NOTE: &str = "\n     * Conditional Assertion: Test won't be stopped on fail";

/// Renders one forwarding method per classified action.
pub struct MethodEmitter<'a> {
    templates: &'a Templates,
}

impl<'a> MethodEmitter<'a> {
    pub fn new(templates: &'a Templates) -> Self {
        Self { templates }
    }

    /// Render the forwarder `action.name` for the method in `descriptor`.
    ///
    /// The generated body hands the original method name and every received
    /// argument to `runStep`; argument values are never inspected.
    pub fn emit(
        &self,
        descriptor: &MethodDescriptor,
        action: &EmittedAction,
    ) -> GenerateResult<String> {
        let values = Placeholders::from([
            ("doc", method_doc(&descriptor.doc, action.kind)),
            ("module", descriptor.owner.clone()),
            ("method", descriptor.method.clone()),
            ("action", action.name.clone()),
            ("params", render_params(&descriptor.params)),
            ("step", action.kind.as_str().to_string()),
        ]);
        self.templates.render(METHOD, &values)
    }
}

fn method_doc(doc: &str, kind: StepKind) -> String {
    let doc = if doc.is_empty() { EMPTY_DOC } else { doc };
    match kind {
        StepKind::ConditionalAssertion => format!("{doc}{CONDITIONAL_NOTE}"),
        _ => doc.to_string(),
    }
}

/// Render a parameter list as `$a, $b = null`.
///
/// Order is kept as declared, so an optional parameter ahead of a required
/// one stays where it is.
pub fn render_params(params: &[Parameter]) -> String {
    params
        .iter()
        .map(|param| {
            if param.has_default {
                format!("${} = null", param.name)
            } else {
                format!("${}", param.name)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(doc: &str) -> MethodDescriptor {
        MethodDescriptor {
            owner: "Modules\\Web".to_string(),
            method: "seeText".to_string(),
            params: vec![Parameter::required("a"), Parameter::optional("b")],
            doc: doc.to_string(),
        }
    }

    #[test]
    fn optional_parameters_render_null_default() {
        let params = vec![Parameter::required("a"), Parameter::optional("b")];
        assert_eq!(render_params(&params), "$a, $b = null");
    }

    #[test]
    fn optional_before_required_is_preserved() {
        let params = vec![Parameter::optional("a"), Parameter::required("b")];
        assert_eq!(render_params(&params), "$a = null, $b");
        assert_eq!(render_params(&[]), "");
    }

    #[test]
    fn emit_assertion_forwards_original_method() {
        let templates = Templates::new().expect("templates");
        let emitter = MethodEmitter::new(&templates);
        let code = emitter
            .emit(
                &descriptor("* Checks text"),
                &EmittedAction::new(StepKind::Assertion, "seeText"),
            )
            .expect("emit");
        assert!(code.contains("public function seeText($a, $b = null) {"));
        assert!(code.contains("return $this->getScenario()->runStep("));
        assert!(code.contains("new \\Codeception\\Step\\Assertion('seeText', func_get_args())"));
        assert!(code.contains("     * Checks text\n     * @see \\Modules\\Web::seeText()"));
        assert!(!code.contains("Conditional Assertion"));
    }

    #[test]
    fn emit_conditional_assertion_notes_soft_failure() {
        let templates = Templates::new().expect("templates");
        let emitter = MethodEmitter::new(&templates);
        let code = emitter
            .emit(
                &descriptor("* Checks text"),
                &EmittedAction::new(StepKind::ConditionalAssertion, "canSeeText"),
            )
            .expect("emit");
        assert!(code.contains("public function canSeeText($a, $b = null) {"));
        assert!(code.contains("Step\\ConditionalAssertion('seeText', func_get_args())"));
        assert!(code.contains("* Conditional Assertion: Test won't be stopped on fail"));
    }

    #[test]
    fn empty_doc_renders_placeholder() {
        let templates = Templates::new().expect("templates");
        let emitter = MethodEmitter::new(&templates);
        let code = emitter
            .emit(&descriptor(""), &EmittedAction::new(StepKind::Action, "seeText"))
            .expect("emit");
        assert!(code.contains("     *\n     *\n     * @see"));
    }
}
