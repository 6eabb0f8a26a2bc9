//! Print and evaluate a sample expression

use anyhow::Result;
use clap::Parser;
use console::style;
use patterns::Expression;

/// Print and evaluate `left + (factor * right)`
#[derive(Parser, Debug)]
pub struct Eval {
    #[arg(long, default_value_t = 1.0)]
    pub left: f64,

    #[arg(long, default_value_t = 2.0)]
    pub factor: f64,

    #[arg(long, default_value_t = 3.0)]
    pub right: f64,

    /// Negate the whole expression
    #[arg(long)]
    pub negate: bool,
}

impl Eval {
    pub fn expression(&self) -> Expression {
        let expr = Expression::add(
            Expression::literal(self.left),
            Expression::mul(Expression::literal(self.factor), Expression::literal(self.right)),
        );
        if self.negate { Expression::neg(expr) } else { expr }
    }

    pub fn execute(self) -> Result<()> {
        let expr = self.expression();
        println!("{} = {}", expr.print(), style(expr.evaluate()).green().bold());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_expression_is_seven() {
        let cmd = Eval::try_parse_from(["eval"]).unwrap();
        assert_eq!(cmd.expression().evaluate(), 7.0);
    }

    #[test]
    fn negate_flag_wraps_expression() {
        let cmd = Eval::try_parse_from(["eval", "--negate"]).unwrap();
        assert_eq!(cmd.expression().print(), "-(1 + (2 * 3))");
    }
}
