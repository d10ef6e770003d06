//! Type introspection over a pre-parsed metadata table.
//!
//! Generation needs a small slice of reflection: which type declares a method,
//! its parameters and doc comment, and the interfaces and parent of a type. The
//! [`TypeIntrospector`] trait captures exactly that; [`MetadataTable`] answers it
//! from records loaded out of the module manifest.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::types::Parameter;

/// Reflection capability consumed by the resolver and the manifest registry.
///
/// Method lookups behave like class reflection: a method is visible on a type
/// when the type declares it or inherits it from its parent chain.
pub trait TypeIntrospector {
    /// Type in `type_name`'s parent chain that declares `method`.
    fn declaring_type(&self, type_name: &str, method: &str) -> Option<String>;

    /// Parameters of `method` as seen from `type_name`, in declared order.
    fn parameters(&self, type_name: &str, method: &str) -> Option<Vec<Parameter>>;

    /// Raw doc comment of `method` as seen from `type_name`; empty when undocumented.
    fn documentation(&self, type_name: &str, method: &str) -> Option<String>;

    fn has_method(&self, type_name: &str, method: &str) -> bool {
        self.declaring_type(type_name, method).is_some()
    }

    /// Directly implemented interfaces, in declaration order.
    fn interfaces(&self, type_name: &str) -> Vec<String>;

    fn parent(&self, type_name: &str) -> Option<String>;
}

/// Method visibility as recorded in the manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// One formal parameter. `default` holds the source default expression, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamInfo {
    pub name: String,
    #[serde(default)]
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub params: Vec<ParamInfo>,
    #[serde(default)]
    pub visibility: Visibility,
}

/// A class or interface and the methods it declares itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
}

impl TypeInfo {
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.iter().find(|method| method.name == name)
    }
}

/// In-memory metadata table keyed by fully-qualified type name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataTable {
    types: BTreeMap<String, TypeInfo>,
}

impl MetadataTable {
    pub fn new(types: impl IntoIterator<Item = TypeInfo>) -> Self {
        let mut table = Self::default();
        for info in types {
            table.insert(info);
        }
        table
    }

    /// Insert or replace a type record.
    pub fn insert(&mut self, info: TypeInfo) {
        self.types.insert(info.name.clone(), info);
    }

    pub fn get(&self, type_name: &str) -> Option<&TypeInfo> {
        self.types.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// `type_name` followed by its ancestors, nearest first.
    ///
    /// Stops at the first unknown type and at any cycle.
    pub fn ancestry(&self, type_name: &str) -> Vec<&TypeInfo> {
        let mut chain: Vec<&TypeInfo> = Vec::new();
        let mut next = self.types.get(type_name);
        while let Some(info) = next {
            if chain.iter().any(|seen| seen.name == info.name) {
                break;
            }
            chain.push(info);
            next = info
                .parent
                .as_deref()
                .and_then(|parent| self.types.get(parent));
        }
        chain
    }

    /// Nearest declaration of `method` visible from `type_name`.
    pub fn find_method(&self, type_name: &str, method: &str) -> Option<(&TypeInfo, &MethodInfo)> {
        self.ancestry(type_name)
            .into_iter()
            .find_map(|info| info.method(method).map(|found| (info, found)))
    }
}

impl TypeIntrospector for MetadataTable {
    fn declaring_type(&self, type_name: &str, method: &str) -> Option<String> {
        self.find_method(type_name, method)
            .map(|(info, _)| info.name.clone())
    }

    fn parameters(&self, type_name: &str, method: &str) -> Option<Vec<Parameter>> {
        self.find_method(type_name, method).map(|(_, found)| {
            found
                .params
                .iter()
                .map(|param| Parameter {
                    name: param.name.clone(),
                    has_default: param.default.is_some(),
                })
                .collect()
        })
    }

    fn documentation(&self, type_name: &str, method: &str) -> Option<String> {
        self.find_method(type_name, method)
            .map(|(_, found)| found.doc.clone().unwrap_or_default())
    }

    fn interfaces(&self, type_name: &str) -> Vec<String> {
        self.types
            .get(type_name)
            .map(|info| info.interfaces.clone())
            .unwrap_or_default()
    }

    fn parent(&self, type_name: &str) -> Option<String> {
        self.types
            .get(type_name)
            .and_then(|info| info.parent.clone())
    }
}
