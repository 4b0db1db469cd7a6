mod resolver;

pub use resolver::DependencyResolver;
