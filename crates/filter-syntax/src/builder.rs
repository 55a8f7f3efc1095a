//! Builds checked expressions by hand, the way the checker would: every node
//! gets the next sequential id, identifiers are typed from the declarations
//! and calls are typed `bool`. Constants are left out of the type table.

use crate::{
    ast::{
        constant::Constant,
        expr::{Call, Expr, ExprId, ExprKind, Ident, Select},
        function::Function,
    },
    declarations::Declarations,
    types::{CheckedExpr, Filter, Type, TypeMap},
};
use std::cell::{Cell, RefCell};

pub struct ExprBuilder<'a> {
    declarations: &'a Declarations,
    next_id: Cell<ExprId>,
    type_map: RefCell<TypeMap>,
}

impl<'a> ExprBuilder<'a> {
    pub fn new(declarations: &'a Declarations) -> Self {
        ExprBuilder {
            declarations,
            next_id: Cell::new(1),
            type_map: RefCell::new(TypeMap::new()),
        }
    }

    /// Identifier typed from the declarations. Undeclared names stay untyped.
    pub fn ident(&self, name: &str) -> Expr {
        let expr = self.node(ExprKind::Ident(Ident::new(name)));
        if let Some(ty) = self.declarations.ident_type(name) {
            self.type_map.borrow_mut().insert(expr.id, ty);
        }
        expr
    }

    /// Identifier with an explicit type, bypassing the declarations.
    pub fn typed_ident(&self, name: &str, ty: Type) -> Expr {
        let expr = self.node(ExprKind::Ident(Ident::new(name)));
        self.type_map.borrow_mut().insert(expr.id, ty);
        expr
    }

    pub fn constant(&self, value: Constant) -> Expr {
        self.node(ExprKind::Const(value))
    }

    pub fn string(&self, value: &str) -> Expr {
        self.constant(Constant::String(value.to_string()))
    }

    pub fn int(&self, value: i64) -> Expr {
        self.constant(Constant::Int64(value))
    }

    pub fn uint(&self, value: u64) -> Expr {
        self.constant(Constant::Uint64(value))
    }

    pub fn double(&self, value: f64) -> Expr {
        self.constant(Constant::Double(value))
    }

    pub fn boolean(&self, value: bool) -> Expr {
        self.constant(Constant::Bool(value))
    }

    pub fn select(&self, operand: Expr, field: &str) -> Expr {
        self.node(ExprKind::Select(Select {
            operand: Box::new(operand),
            field: field.to_string(),
        }))
    }

    pub fn list(&self, items: Vec<Expr>) -> Expr {
        self.node(ExprKind::List(items))
    }

    /// Call by surface name; unknown names are allowed so callers can build
    /// calls the transpiler must refuse.
    pub fn call(&self, function: &str, args: Vec<Expr>) -> Expr {
        let expr = self.node(ExprKind::Call(Call::new(function, args)));
        self.type_map.borrow_mut().insert(expr.id, Type::bool());
        expr
    }

    /// Call without a type table entry.
    pub fn untyped_call(&self, function: &str, args: Vec<Expr>) -> Expr {
        self.node(ExprKind::Call(Call::new(function, args)))
    }

    pub fn function(&self, function: Function, args: Vec<Expr>) -> Expr {
        self.call(function.name(), args)
    }

    pub fn eq(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.function(Function::Equals, vec![lhs, rhs])
    }

    pub fn ne(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.function(Function::NotEquals, vec![lhs, rhs])
    }

    pub fn lt(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.function(Function::LessThan, vec![lhs, rhs])
    }

    pub fn le(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.function(Function::LessEquals, vec![lhs, rhs])
    }

    pub fn gt(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.function(Function::GreaterThan, vec![lhs, rhs])
    }

    pub fn ge(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.function(Function::GreaterEquals, vec![lhs, rhs])
    }

    pub fn and(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.function(Function::And, vec![lhs, rhs])
    }

    pub fn or(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.function(Function::Or, vec![lhs, rhs])
    }

    pub fn not(&self, operand: Expr) -> Expr {
        self.function(Function::Not, vec![operand])
    }

    pub fn has(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.function(Function::Has, vec![lhs, rhs])
    }

    pub fn timestamp(&self, value: &str) -> Expr {
        let arg = self.string(value);
        let expr = self.function(Function::Timestamp, vec![arg]);
        self.type_map.borrow_mut().insert(expr.id, Type::timestamp());
        expr
    }

    pub fn finish(self, expr: Expr) -> CheckedExpr {
        CheckedExpr::new(expr, self.type_map.into_inner())
    }

    pub fn finish_filter(self, expr: Expr) -> Filter {
        Filter::new(self.finish(expr))
    }

    fn node(&self, kind: ExprKind) -> Expr {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Expr::new(id, kind)
    }
}
