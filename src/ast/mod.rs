/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: The Node sum type, its constructors and the evaluator
/// - operators: Operator tags and their numeric semantics
pub mod ast;
pub mod operators;
