//! Input declarations handed over by the front end

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Annotation, Annotations, CType};
use crate::errors::{BindgenError, Result};

/// Opaque structural identity of a type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclId(pub u64);

/// A record type that becomes a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: String,
    pub id: DeclId,
    #[serde(default)]
    pub annotations: Annotations,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        Self {
            name: name.into(),
            id: DeclId(id),
            annotations: Annotations::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations = self.annotations.with(annotation);
        self
    }

    pub fn superclasses(&self) -> Vec<String> {
        self.annotations.superclasses()
    }

    pub fn is_in_place(&self) -> bool {
        self.annotations.has(&Annotation::InPlace)
    }
}

/// Formal parameter of a function declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDeclaration {
    pub name: String,
    pub ty: CType,
    #[serde(default)]
    pub annotations: Annotations,
}

impl ParamDeclaration {
    pub fn new(name: impl Into<String>, ty: CType) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: Annotations::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations = self.annotations.with(annotation);
        self
    }
}

/// C function declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParamDeclaration>,
    pub return_type: CType,
    #[serde(default)]
    pub annotations: Annotations,
}

impl FunctionDeclaration {
    pub fn new(name: impl Into<String>, return_type: CType) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type,
            annotations: Annotations::new(),
        }
    }

    pub fn with_param(mut self, param: ParamDeclaration) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations = self.annotations.with(annotation);
        self
    }

    pub fn is_annotated(&self, annotation: &Annotation) -> bool {
        self.annotations.has(annotation)
    }
}

/// C enum declaration with its values in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDeclaration {
    pub name: String,
    pub values: Vec<(String, i64)>,
}

impl EnumDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: i64) -> Self {
        self.values.push((name.into(), value));
        self
    }
}

/// The three input sets produced by the front end
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationSet {
    #[serde(default)]
    pub types: Vec<TypeDeclaration>,
    #[serde(default)]
    pub functions: Vec<FunctionDeclaration>,
    #[serde(default)]
    pub enums: Vec<EnumDeclaration>,
}

impl DeclarationSet {
    /// Assemble the input sets, rejecting duplicate names within a set
    pub fn new(
        types: Vec<TypeDeclaration>,
        functions: Vec<FunctionDeclaration>,
        enums: Vec<EnumDeclaration>,
    ) -> Result<Self> {
        let set = Self {
            types,
            functions,
            enums,
        };
        set.check_unique()?;
        Ok(set)
    }

    /// Decode a declaration set serialized by an out-of-process front end
    pub fn from_json(json: &str) -> Result<Self> {
        let set: DeclarationSet = serde_json::from_str(json)?;
        set.check_unique()?;
        Ok(set)
    }

    pub fn check_unique(&self) -> Result<()> {
        ensure_unique("type", self.types.iter().map(|t| t.name.as_str()))?;
        ensure_unique("function", self.functions.iter().map(|f| f.name.as_str()))?;
        ensure_unique("enum", self.enums.iter().map(|e| e.name.as_str()))?;
        for decl in &self.enums {
            ensure_unique("enum value", decl.values.iter().map(|(n, _)| n.as_str()))?;
        }
        Ok(())
    }
}

fn ensure_unique<'a>(kind: &'static str, names: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(BindgenError::duplicate(kind, name));
        }
    }
    Ok(())
}
