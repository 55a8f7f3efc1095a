//! In-place helpers that special-case one identifier before transpiling.
//!
//! Both walk call arguments depth-first. Once the target identifier has been
//! seen, the next node visited among the following arguments carries the
//! value: the extractor reads its string constant, the hijacker overwrites
//! the node with a string constant. A match is only reported upwards when
//! that value is non-empty; otherwise the flag dies with the frame that set it.

use filter_syntax::{Constant, Expr, ExprKind, case::to_snake_case};
use tracing::debug;

/// Returns the string value compared against `target`, e.g. `"p1"` for
/// `pipeline_id = "p1"`. `None` when the identifier does not occur.
pub fn extract_const_value(expr: &Expr, target: &str) -> Option<String> {
    let (value, found) = extract(expr, target, false);
    found.then_some(value)
}

/// Renames the `before` identifier to `replace_name` and replaces the value
/// it is compared against with the string `replace_value`.
///
/// Returns the installed value when the identifier was found.
pub fn hijack_const_value(
    expr: &mut Expr,
    before: &str,
    replace_name: &str,
    replace_value: &str,
) -> Option<String> {
    let (value, found) = hijack(expr, before, replace_name, replace_value, false);
    found.then_some(value)
}

fn is_target(expr: &Expr, target: &str) -> bool {
    matches!(expr.kind, ExprKind::Ident(_))
        && expr.call_args().is_empty()
        && to_snake_case(expr.ident_name()) == target
}

fn extract(expr: &Expr, target: &str, found: bool) -> (String, bool) {
    if is_target(expr, target) {
        debug!("Found identifier '{}' at expr {}", target, expr.id);
        return (String::new(), true);
    }
    if found {
        return (expr.const_string().to_string(), true);
    }

    let mut found = found;
    for arg in expr.call_args() {
        let (value, arg_found) = extract(arg, target, found);
        found = arg_found;
        if !value.is_empty() && found {
            return (value, true);
        }
    }

    (String::new(), false)
}

fn hijack(
    expr: &mut Expr,
    before: &str,
    replace_name: &str,
    replace_value: &str,
    found: bool,
) -> (String, bool) {
    if is_target(expr, before) {
        if let ExprKind::Ident(ident) = &mut expr.kind {
            debug!(
                "Renaming identifier '{}' to '{}' at expr {}",
                ident.name, replace_name, expr.id
            );
            ident.name = replace_name.to_string();
        }
        return (String::new(), true);
    }
    if found {
        *expr = Expr::new(
            expr.id,
            ExprKind::Const(Constant::String(replace_value.to_string())),
        );
        return (replace_value.to_string(), true);
    }

    let mut found = found;
    if let ExprKind::Call(call) = &mut expr.kind {
        for arg in call.args.iter_mut() {
            let (value, arg_found) = hijack(arg, before, replace_name, replace_value, found);
            found = arg_found;
            if !value.is_empty() && found {
                return (value, true);
            }
        }
    }

    (String::new(), false)
}
