//! Flux rendering of checked filter expressions.
//!
//! Comparisons become `|> filter(fn: (r) => ...)` pipeline stages joined by
//! `&&`; comparisons against timestamp identifiers become `field@value`
//! anchors that the query assembler lifts into the `range()` call.

use crate::error::{Result, TranspileError};
use filter_syntax::{
    Call, Constant, EnumLookup, Expr, ExprKind, Filter, Function, Ident, Type,
    case::{to_screaming_snake_case, to_snake_case},
};
use tracing::{debug, trace};

/// Type information threaded from a leaf to the operator consuming it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeHint {
    #[default]
    None,
    /// Fully-qualified message (or enum) name of the operand.
    Message(String),
    Timestamp,
}

impl TypeHint {
    fn from_type(ty: &Type) -> Self {
        match ty.message_type() {
            "" => TypeHint::None,
            name => TypeHint::Message(name.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
struct Transpiled {
    fragment: String,
    hint: TypeHint,
}

impl Transpiled {
    fn plain(fragment: String) -> Self {
        Transpiled {
            fragment,
            hint: TypeHint::None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Comparator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparator {
    fn symbol(&self) -> &'static str {
        match self {
            Comparator::Eq => "==",
            Comparator::Ne => "!=",
            Comparator::Lt => "<",
            Comparator::Le => "<=",
            Comparator::Gt => ">",
            Comparator::Ge => ">=",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Logical {
    And,
    Or,
}

/// Convenience wrapper: transpile `filter` resolving enums through `enums`.
pub fn transpile(filter: &Filter, enums: &dyn EnumLookup) -> Result<String> {
    Transpiler::new(filter, enums).transpile()
}

/// One-shot transpiler over a single checked filter.
pub struct Transpiler<'a> {
    filter: &'a Filter,
    enums: &'a dyn EnumLookup,
}

impl<'a> Transpiler<'a> {
    pub fn new(filter: &'a Filter, enums: &'a dyn EnumLookup) -> Self {
        Self { filter, enums }
    }

    /// Returns the Flux fragment for the whole filter; empty for an empty filter.
    pub fn transpile(&self) -> Result<String> {
        let Some(checked) = &self.filter.checked_expr else {
            return Ok(String::new());
        };

        debug!("Transpiling filter expression {}", checked.expr);
        let out = self.transpile_expr(&checked.expr)?;
        debug!("Transpiled filter to '{}'", out.fragment);

        Ok(out.fragment)
    }

    fn transpile_expr(&self, expr: &Expr) -> Result<Transpiled> {
        trace!("Dispatching expr {}", expr.id);
        match &expr.kind {
            ExprKind::Call(call) => self.transpile_call(expr, call).map(Transpiled::plain),
            ExprKind::Ident(ident) => self.transpile_ident(expr, ident),
            ExprKind::Const(constant) => self.transpile_const(constant).map(Transpiled::plain),
            ExprKind::Select(_) => Err(TranspileError::UnsupportedSelect),
            ExprKind::List(_) => Err(TranspileError::UnsupportedExpr(expr.to_string())),
        }
    }

    fn transpile_const(&self, constant: &Constant) -> Result<String> {
        match constant {
            Constant::Bool(b) => Ok(b.to_string()),
            Constant::Int64(i) => Ok(i.to_string()),
            Constant::Uint64(u) => Ok(u.to_string()),
            Constant::Double(d) => Ok(format_double(*d)),
            Constant::String(s) => Ok(s.clone()),
            Constant::Null | Constant::Bytes(_) => {
                Err(TranspileError::UnsupportedConst(constant.to_string()))
            }
        }
    }

    fn transpile_call(&self, expr: &Expr, call: &Call) -> Result<String> {
        if self.type_of(expr).is_none() {
            return Err(TranspileError::UnknownCallType(expr.id));
        }

        let function = Function::from_name(&call.function)
            .ok_or_else(|| TranspileError::UnsupportedFunction(call.function.clone()))?;

        match function {
            Function::Has => self.transpile_has(call),
            Function::Equals => self.transpile_comparison(call, Comparator::Eq),
            Function::NotEquals => self.transpile_comparison(call, Comparator::Ne),
            Function::LessThan => self.transpile_comparison(call, Comparator::Lt),
            Function::LessEquals => self.transpile_comparison(call, Comparator::Le),
            Function::GreaterThan => self.transpile_comparison(call, Comparator::Gt),
            Function::GreaterEquals => self.transpile_comparison(call, Comparator::Ge),
            Function::And => self.transpile_logical(call, Logical::And),
            Function::Or => self.transpile_logical(call, Logical::Or),
            Function::Not => self.transpile_not(call),
            Function::Timestamp => self.transpile_timestamp(call),
        }
    }

    fn transpile_ident(&self, expr: &Expr, ident: &Ident) -> Result<Transpiled> {
        let name = to_snake_case(&ident.name);
        let ty = self
            .type_of(expr)
            .ok_or(TranspileError::UnknownIdentType(expr.id))?;

        // Bare enum values resolve to their canonical value name.
        if let Type::Message(full_name) = ty
            && let Some(enum_type) = self.enums.find_enum_by_name(full_name)
            && let Some(value) = enum_type.value_by_name(&to_screaming_snake_case(&name))
        {
            return Ok(Transpiled {
                fragment: value.name.clone(),
                hint: TypeHint::Message(full_name.clone()),
            });
        }

        if ty.is_timestamp() {
            return Ok(Transpiled {
                fragment: ident.name.clone(),
                hint: TypeHint::Timestamp,
            });
        }

        Ok(Transpiled {
            fragment: name,
            hint: TypeHint::from_type(ty),
        })
    }

    fn transpile_comparison(&self, call: &Call, op: Comparator) -> Result<String> {
        let [lhs, rhs] = binary_args(call)?;

        let ident = self.transpile_expr(lhs)?;
        let field = to_snake_case(&ident.fragment);
        let value = self.transpile_expr(rhs)?.fragment;

        if ident.hint == TypeHint::Timestamp {
            return Ok(format!("{field}@{value}"));
        }

        Ok(format!(
            "|> filter(fn: (r) => r[\"{field}\"] {} \"{value}\")",
            op.symbol()
        ))
    }

    fn transpile_logical(&self, call: &Call, op: Logical) -> Result<String> {
        let [lhs, rhs] = binary_args(call)?;

        let lhs = self.transpile_expr(lhs)?.fragment;
        let rhs = self.transpile_expr(rhs)?.fragment;

        match op {
            Logical::And => Ok(format!("{lhs}&&{rhs}")),
            Logical::Or => Err(TranspileError::UnsupportedOr),
        }
    }

    fn transpile_not(&self, call: &Call) -> Result<String> {
        check_arity(call, Function::Not.arity())?;
        Err(TranspileError::UnsupportedNot)
    }

    fn transpile_has(&self, call: &Call) -> Result<String> {
        let [lhs, rhs] = binary_args(call)?;

        let Some(constant) = rhs.as_const() else {
            return Err(TranspileError::UnsupportedHas(
                "transpiling `:` where RHS is other than Const",
            ));
        };

        match &lhs.kind {
            ExprKind::Ident(ident) => {
                let ty = self
                    .type_of(lhs)
                    .ok_or(TranspileError::UnknownIdentType(lhs.id))?;
                if !ty.is_repeated_primitive() {
                    return Err(TranspileError::UnsupportedHas(
                        "transpiling `:` on other types than repeated primitives",
                    ));
                }

                let field = self.transpile_ident(lhs, ident)?.fragment;
                let value = self.transpile_const(constant)?;
                Ok(format!(
                    "|> filter(fn: (r) => contains(value: \"{field}\", set: \"{value}\"))"
                ))
            }
            ExprKind::Select(select) => match select.operand.kind {
                ExprKind::Ident(_) | ExprKind::Select(_) => {
                    Err(TranspileError::UnsupportedHas("more transpiling"))
                }
                _ => Err(TranspileError::UnsupportedHas("more complicated transpiling")),
            },
            _ => Err(TranspileError::UnsupportedHas(
                "transpiling `:` where LHS is other than Ident and Select",
            )),
        }
    }

    /// `timestamp("...")` is a type annotation only; the literal passes through.
    fn transpile_timestamp(&self, call: &Call) -> Result<String> {
        check_arity(call, Function::Timestamp.arity())?;

        match call.args[0].as_const() {
            Some(Constant::String(value)) => Ok(value.clone()),
            _ => Err(TranspileError::MalformedTimestamp(call.function.clone())),
        }
    }

    fn type_of(&self, expr: &Expr) -> Option<&'a Type> {
        self.filter
            .checked_expr
            .as_ref()
            .and_then(|checked| checked.type_map.get(expr.id))
    }
}

/// Shortest round-trip form; exponent notation (`1e+21`, `1.5e-07`) outside
/// `1e-4 <= |d| < 1e6`.
fn format_double(d: f64) -> String {
    if d.is_nan() {
        return "NaN".to_string();
    }
    if d.is_infinite() {
        return if d > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if d == 0.0 {
        return d.to_string();
    }

    let scientific = format!("{d:e}");
    match scientific
        .split_once('e')
        .and_then(|(mantissa, exp)| exp.parse::<i32>().ok().map(|exp| (mantissa, exp)))
    {
        Some((mantissa, exp)) if !(-4..6).contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        _ => d.to_string(),
    }
}

fn check_arity(call: &Call, expected: usize) -> Result<()> {
    if call.args.len() != expected {
        return Err(TranspileError::Arity {
            function: call.function.clone(),
            count: call.args.len(),
        });
    }
    Ok(())
}

fn binary_args(call: &Call) -> Result<[&Expr; 2]> {
    match call.args.as_slice() {
        [lhs, rhs] => Ok([lhs, rhs]),
        _ => Err(TranspileError::Arity {
            function: call.function.clone(),
            count: call.args.len(),
        }),
    }
}
