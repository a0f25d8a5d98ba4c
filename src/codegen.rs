use crate::ast::Node;
use crate::errors::{PascError, PascResult};

/// Renders an AST as line-oriented pseudocode.
///
/// A structural tree-walk with no knowledge of lexing or parsing; the input
/// is never mutated. The dispatch is exhaustive over the node set; anything
/// outside the renderable table fails with `UnknownNodeKind`: a bare `Type`
/// node (only meaningful inside a declaration), or a node holding a child
/// of the wrong shape (a Block whose compound is not a Compound, a
/// declaration or assignment built over non-Variable children).
pub struct PseudoCodeGenerator;

impl PseudoCodeGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, node: &Node) -> PascResult<String> {
        match node {
            Node::Program { block, .. } => self.generate(block),
            Node::Block {
                declarations,
                compound,
            } => {
                let mut lines = Vec::new();
                for declaration in declarations {
                    lines.push(self.generate(declaration)?);
                }
                match compound.as_ref() {
                    Node::Compound { statements } => {
                        for statement in statements {
                            lines.push(self.generate(statement)?);
                        }
                    }
                    other => return Err(PascError::unknown_node(other.kind())),
                }
                Ok(lines.join("\n"))
            }
            Node::Compound { statements } => {
                let mut lines = Vec::new();
                for statement in statements {
                    lines.push(self.generate(statement)?);
                }
                Ok(lines.join("\n"))
            }
            Node::VariableDeclaration {
                variable,
                type_spec,
            } => {
                let name = match variable.as_ref() {
                    Node::Variable { name } => name,
                    other => return Err(PascError::unknown_node(other.kind())),
                };
                let literal = match type_spec.as_ref() {
                    Node::Type { literal } => literal,
                    other => return Err(PascError::unknown_node(other.kind())),
                };
                Ok(format!("DECLARE {} AS {}", name, literal))
            }
            Node::Assignment { target, value } => {
                let name = match target.as_ref() {
                    Node::Variable { name } => name,
                    other => return Err(PascError::unknown_node(other.kind())),
                };
                Ok(format!("{} := {}", name, self.generate(value)?))
            }
            Node::BinaryOperation {
                left,
                operator,
                right,
            } => Ok(format!(
                "({} {} {})",
                self.generate(left)?,
                operator.text(),
                self.generate(right)?
            )),
            // A type name renders only as part of its declaration.
            Node::Type { .. } => Err(PascError::unknown_node(node.kind())),
            Node::Number { literal } => Ok(literal.clone()),
            Node::Variable { name } => Ok(name.clone()),
            Node::NoOperation => Ok(String::new()),
        }
    }
}

impl Default for PseudoCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Convenience function mirroring the three-call pipeline API
pub fn generate(node: &Node) -> PascResult<String> {
    PseudoCodeGenerator::new().generate(node)
}
