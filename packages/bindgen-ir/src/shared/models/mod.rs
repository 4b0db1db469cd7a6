//! Declaration model (input) and diagnostics (output side-channel)

mod annotation;
mod ctype;
mod declaration;
mod diagnostic;

pub use annotation::{Annotation, Annotations};
pub use ctype::CType;
pub use declaration::{
    DeclId, DeclarationSet, EnumDeclaration, FunctionDeclaration, ParamDeclaration,
    TypeDeclaration,
};
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
