//! Subclass Resolver
//!
//! Reports the declared superclass relation per class and rejects
//! relations an emitter could not realize: dangling superclass names and
//! cycles. A class may declare several superclasses; emitters model each
//! of them as one capability the class implements.

mod superclass_graph;

pub use superclass_graph::SuperclassGraph;
