//! Method descriptor resolution: signature plus best-available documentation.

use crate::core::introspect::TypeIntrospector;
use crate::core::types::MethodDescriptor;

/// Resolve `method` as seen from `owning_type`.
///
/// Returns `None` when the method is not visible on `owning_type` at all.
///
/// Documentation is looked up against the declaring type:
///
/// 1. the method's own doc comment;
/// 2. otherwise the first directly implemented interface that has the method
///    (its doc is taken even when empty);
/// 3. otherwise, if the declaring type has a parent, the parent's doc for the
///    method. The search ends here whether or not the parent had one; the
///    parent's own interfaces are never consulted.
pub fn resolve(
    introspector: &dyn TypeIntrospector,
    owning_type: &str,
    method: &str,
) -> Option<MethodDescriptor> {
    let owner = introspector.declaring_type(owning_type, method)?;
    let params = introspector.parameters(&owner, method)?;
    let raw = documentation(introspector, &owner, method);
    Some(MethodDescriptor {
        owner,
        method: method.to_string(),
        params,
        doc: strip_doc_delimiters(&raw),
    })
}

fn documentation(introspector: &dyn TypeIntrospector, declaring: &str, method: &str) -> String {
    let mut doc = introspector
        .documentation(declaring, method)
        .unwrap_or_default();

    if doc.is_empty() {
        for interface in introspector.interfaces(declaring) {
            if introspector.has_method(&interface, method) {
                doc = introspector
                    .documentation(&interface, method)
                    .unwrap_or_default();
                break;
            }
        }
    }

    if doc.is_empty()
        && let Some(parent) = introspector.parent(declaring)
        && introspector.has_method(&parent, method)
    {
        doc = introspector
            .documentation(&parent, method)
            .unwrap_or_default();
    }

    doc
}

/// Remove `/**` and `*/` markers and surrounding whitespace.
pub fn strip_doc_delimiters(raw: &str) -> String {
    raw.replace("/**", "").replace("*/", "").trim().to_string()
}
