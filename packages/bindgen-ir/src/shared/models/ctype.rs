//! C type representation
//!
//! Closed set of shapes the front end can hand over. Typedefs keep both the
//! nominal name and the canonical type so that predicates can look through
//! them without re-parsing anything.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully resolved C type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CType {
    /// `void`
    Void,
    /// Builtin arithmetic type: `int`, `unsigned int`, `char`, `double`, ...
    Builtin { name: String, unsigned: bool },
    /// `struct <name>`
    Record { name: String },
    /// `enum <name>`
    Enum { name: String },
    /// Typedef with its canonical type
    Typedef { name: String, canonical: Box<CType> },
    /// `T *`
    Pointer { pointee: Box<CType> },
    /// `const T`
    Const { inner: Box<CType> },
    /// Function type (the pointee of a callback)
    Function { params: Vec<CType>, ret: Box<CType> },
}

impl CType {
    pub fn builtin(name: impl Into<String>) -> Self {
        let name = name.into();
        let unsigned = name.starts_with("unsigned") || name == "size_t" || name == "uint32_t";
        CType::Builtin { name, unsigned }
    }

    pub fn record(name: impl Into<String>) -> Self {
        CType::Record { name: name.into() }
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        CType::Enum { name: name.into() }
    }

    pub fn typedef(name: impl Into<String>, canonical: CType) -> Self {
        CType::Typedef {
            name: name.into(),
            canonical: Box::new(canonical),
        }
    }

    pub fn pointer(pointee: CType) -> Self {
        CType::Pointer {
            pointee: Box::new(pointee),
        }
    }

    pub fn constant(inner: CType) -> Self {
        CType::Const {
            inner: Box::new(inner),
        }
    }

    pub fn function(params: Vec<CType>, ret: CType) -> Self {
        CType::Function {
            params,
            ret: Box::new(ret),
        }
    }

    /// `struct <name> *` spelled through its conventional typedef, the way
    /// library headers declare opaque object handles.
    pub fn object_pointer(name: impl Into<String>) -> Self {
        let name = name.into();
        CType::pointer(CType::typedef(name.clone(), CType::record(name)))
    }

    /// Strip `const` qualifiers
    pub fn unqualified(&self) -> &CType {
        match self {
            CType::Const { inner } => inner.unqualified(),
            other => other,
        }
    }

    /// Peel typedefs and qualifiers down to the canonical type
    pub fn canonical(&self) -> &CType {
        match self {
            CType::Const { inner } => inner.canonical(),
            CType::Typedef { canonical, .. } => canonical.canonical(),
            other => other,
        }
    }

    /// Pointee of a (possibly typedef'd) pointer type
    pub fn pointee(&self) -> Option<&CType> {
        match self.canonical() {
            CType::Pointer { pointee } => Some(pointee),
            _ => None,
        }
    }

    pub fn is_pointer(&self) -> bool {
        self.pointee().is_some()
    }

    pub fn is_void(&self) -> bool {
        matches!(self.canonical(), CType::Void)
    }

    /// Name under which the type is spelled at its use site, ignoring
    /// qualifiers. Typedef names win over the canonical record name.
    pub fn nominal_name(&self) -> Option<&str> {
        match self.unqualified() {
            CType::Builtin { name, .. }
            | CType::Record { name }
            | CType::Enum { name }
            | CType::Typedef { name, .. } => Some(name),
            _ => None,
        }
    }

    /// C spelling of the type
    pub fn spelling(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CType::Void => write!(f, "void"),
            CType::Builtin { name, .. } => write!(f, "{}", name),
            CType::Record { name } => write!(f, "struct {}", name),
            CType::Enum { name } => write!(f, "enum {}", name),
            CType::Typedef { name, .. } => write!(f, "{}", name),
            CType::Pointer { pointee } => match pointee.as_ref() {
                CType::Function { params, ret } => {
                    let params: Vec<String> = params.iter().map(|p| p.to_string()).collect();
                    write!(f, "{} (*)({})", ret, params.join(", "))
                }
                other => write!(f, "{} *", other),
            },
            CType::Const { inner } => write!(f, "const {}", inner),
            CType::Function { params, ret } => {
                let params: Vec<String> = params.iter().map(|p| p.to_string()).collect();
                write!(f, "{} ({})", ret, params.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_peels_typedef_and_const() {
        let ty = CType::constant(CType::typedef("isl_set", CType::record("isl_set")));
        assert_eq!(ty.canonical(), &CType::record("isl_set"));
        assert_eq!(ty.nominal_name(), Some("isl_set"));
    }

    #[test]
    fn test_pointee_through_typedef() {
        let cb = CType::typedef(
            "isl_cb",
            CType::pointer(CType::function(vec![], CType::builtin("int"))),
        );
        assert!(cb.is_pointer());
        assert!(matches!(cb.pointee(), Some(CType::Function { .. })));
    }

    #[test]
    fn test_spelling() {
        assert_eq!(
            CType::pointer(CType::constant(CType::builtin("char"))).spelling(),
            "const char *"
        );
        assert_eq!(CType::object_pointer("isl_set").spelling(), "isl_set *");
        assert_eq!(
            CType::builtin("unsigned int"),
            CType::Builtin {
                name: "unsigned int".into(),
                unsigned: true
            }
        );
    }
}
