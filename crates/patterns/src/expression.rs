//! Arithmetic expressions with a closed set of node kinds.
//!
//! Dispatch is an exhaustive `match` over [`Expression`], so adding a node
//! kind fails to compile until every [`ExpressionVisitor`] handles it.

/// Expression tree node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expression {
    Literal(f64),
    Addition(Box<Expression>, Box<Expression>),
    Multiplication(Box<Expression>, Box<Expression>),
    Negation(Box<Expression>),
}

impl Expression {
    pub fn literal(value: f64) -> Self {
        Self::Literal(value)
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Self::Addition(Box::new(left), Box::new(right))
    }

    pub fn mul(left: Expression, right: Expression) -> Self {
        Self::Multiplication(Box::new(left), Box::new(right))
    }

    pub fn neg(inner: Expression) -> Self {
        Self::Negation(Box::new(inner))
    }

    /// Routes this node to the matching visitor method.
    pub fn accept<V: ExpressionVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Literal(value) => visitor.visit_literal(*value),
            Self::Addition(left, right) => visitor.visit_addition(left, right),
            Self::Multiplication(left, right) => visitor.visit_multiplication(left, right),
            Self::Negation(inner) => visitor.visit_negation(inner),
        }
    }

    /// Parenthesised infix rendering, e.g. `(1 + (2 * 3))`.
    pub fn print(&self) -> String {
        self.accept(&mut Printer)
    }

    pub fn evaluate(&self) -> f64 {
        self.accept(&mut Evaluator)
    }
}

/// One method per [`Expression`] variant.
///
/// Visitors recurse by calling [`Expression::accept`] on child nodes.
pub trait ExpressionVisitor {
    type Output;

    fn visit_literal(&mut self, value: f64) -> Self::Output;
    fn visit_addition(&mut self, left: &Expression, right: &Expression) -> Self::Output;
    fn visit_multiplication(&mut self, left: &Expression, right: &Expression) -> Self::Output;
    fn visit_negation(&mut self, inner: &Expression) -> Self::Output;
}

/// Renders an expression as text.
#[derive(Clone, Copy, Debug, Default)]
pub struct Printer;

impl ExpressionVisitor for Printer {
    type Output = String;

    fn visit_literal(&mut self, value: f64) -> String {
        value.to_string()
    }

    fn visit_addition(&mut self, left: &Expression, right: &Expression) -> String {
        format!("({} + {})", left.accept(self), right.accept(self))
    }

    fn visit_multiplication(&mut self, left: &Expression, right: &Expression) -> String {
        format!("({} * {})", left.accept(self), right.accept(self))
    }

    fn visit_negation(&mut self, inner: &Expression) -> String {
        format!("-{}", inner.accept(self))
    }
}

/// Computes the numeric value of an expression.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator;

impl ExpressionVisitor for Evaluator {
    type Output = f64;

    fn visit_literal(&mut self, value: f64) -> f64 {
        value
    }

    fn visit_addition(&mut self, left: &Expression, right: &Expression) -> f64 {
        left.accept(self) + right.accept(self)
    }

    fn visit_multiplication(&mut self, left: &Expression, right: &Expression) -> f64 {
        left.accept(self) * right.accept(self)
    }

    fn visit_negation(&mut self, inner: &Expression) -> f64 {
        -inner.accept(self)
    }
}
