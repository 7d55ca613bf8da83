//! AST traversal that collects string literals in source order.
//!
//! The walk is a pre-order, depth-first, left-to-right traversal. Where the
//! AST field order differs from source order (dict displays, conditional
//! expressions), children are visited in the order they appear in source,
//! so the collected list matches reading order.
//!
//! F-strings contribute their static text segments only; interpolated
//! expressions are walked (a literal nested inside one is still collected)
//! but never emitted themselves. Bytes literals are not string literals and
//! are ignored.

use rustpython_parser::ast;

use crate::error::ScanError;
use crate::parser::parse_python_source;

/// Parse `source` and return every string literal in it, in source order.
pub fn extract_from_source(source: &str, file_path: &str) -> Result<Vec<String>, ScanError> {
    let suite = parse_python_source(source, file_path)?;
    Ok(extract_literals(&suite))
}

/// Collect every string literal in an already-parsed statement list.
pub fn extract_literals(suite: &[ast::Stmt]) -> Vec<String> {
    let mut literals = Vec::new();
    collect_body(suite, &mut literals);
    literals
}

fn collect_body(body: &[ast::Stmt], literals: &mut Vec<String>) {
    for stmt in body {
        collect_stmt(stmt, literals);
    }
}

fn collect_stmt(stmt: &ast::Stmt, literals: &mut Vec<String>) {
    match stmt {
        ast::Stmt::FunctionDef(func_def) => {
            collect_exprs(&func_def.decorator_list, literals);
            collect_type_params(&func_def.type_params, literals);
            collect_arguments(&func_def.args, literals);
            if let Some(returns) = &func_def.returns {
                collect_expr(returns, literals);
            }
            collect_body(&func_def.body, literals);
        }
        ast::Stmt::AsyncFunctionDef(func_def) => {
            collect_exprs(&func_def.decorator_list, literals);
            collect_type_params(&func_def.type_params, literals);
            collect_arguments(&func_def.args, literals);
            if let Some(returns) = &func_def.returns {
                collect_expr(returns, literals);
            }
            collect_body(&func_def.body, literals);
        }
        ast::Stmt::ClassDef(class_def) => {
            collect_exprs(&class_def.decorator_list, literals);
            collect_type_params(&class_def.type_params, literals);
            collect_exprs(&class_def.bases, literals);
            for keyword in &class_def.keywords {
                collect_expr(&keyword.value, literals);
            }
            collect_body(&class_def.body, literals);
        }
        ast::Stmt::Return(ret) => {
            if let Some(value) = &ret.value {
                collect_expr(value, literals);
            }
        }
        ast::Stmt::Delete(delete) => collect_exprs(&delete.targets, literals),
        ast::Stmt::Assign(assign) => {
            collect_exprs(&assign.targets, literals);
            collect_expr(&assign.value, literals);
        }
        ast::Stmt::AugAssign(aug) => {
            collect_expr(&aug.target, literals);
            collect_expr(&aug.value, literals);
        }
        ast::Stmt::AnnAssign(ann) => {
            collect_expr(&ann.target, literals);
            collect_expr(&ann.annotation, literals);
            if let Some(value) = &ann.value {
                collect_expr(value, literals);
            }
        }
        ast::Stmt::TypeAlias(alias) => {
            collect_type_params(&alias.type_params, literals);
            collect_expr(&alias.value, literals);
        }
        ast::Stmt::For(for_stmt) => {
            collect_expr(&for_stmt.target, literals);
            collect_expr(&for_stmt.iter, literals);
            collect_body(&for_stmt.body, literals);
            collect_body(&for_stmt.orelse, literals);
        }
        ast::Stmt::AsyncFor(for_stmt) => {
            collect_expr(&for_stmt.target, literals);
            collect_expr(&for_stmt.iter, literals);
            collect_body(&for_stmt.body, literals);
            collect_body(&for_stmt.orelse, literals);
        }
        ast::Stmt::While(while_stmt) => {
            collect_expr(&while_stmt.test, literals);
            collect_body(&while_stmt.body, literals);
            collect_body(&while_stmt.orelse, literals);
        }
        ast::Stmt::If(if_stmt) => {
            collect_expr(&if_stmt.test, literals);
            collect_body(&if_stmt.body, literals);
            collect_body(&if_stmt.orelse, literals);
        }
        ast::Stmt::With(with_stmt) => {
            collect_with_items(&with_stmt.items, literals);
            collect_body(&with_stmt.body, literals);
        }
        ast::Stmt::AsyncWith(with_stmt) => {
            collect_with_items(&with_stmt.items, literals);
            collect_body(&with_stmt.body, literals);
        }
        ast::Stmt::Match(match_stmt) => {
            collect_expr(&match_stmt.subject, literals);
            for case in &match_stmt.cases {
                collect_pattern(&case.pattern, literals);
                if let Some(guard) = &case.guard {
                    collect_expr(guard, literals);
                }
                collect_body(&case.body, literals);
            }
        }
        ast::Stmt::Raise(raise) => {
            if let Some(exc) = &raise.exc {
                collect_expr(exc, literals);
            }
            if let Some(cause) = &raise.cause {
                collect_expr(cause, literals);
            }
        }
        ast::Stmt::Try(try_stmt) => {
            collect_body(&try_stmt.body, literals);
            collect_handlers(&try_stmt.handlers, literals);
            collect_body(&try_stmt.orelse, literals);
            collect_body(&try_stmt.finalbody, literals);
        }
        ast::Stmt::TryStar(try_stmt) => {
            collect_body(&try_stmt.body, literals);
            collect_handlers(&try_stmt.handlers, literals);
            collect_body(&try_stmt.orelse, literals);
            collect_body(&try_stmt.finalbody, literals);
        }
        ast::Stmt::Assert(assert) => {
            collect_expr(&assert.test, literals);
            if let Some(msg) = &assert.msg {
                collect_expr(msg, literals);
            }
        }
        ast::Stmt::Expr(expr_stmt) => collect_expr(&expr_stmt.value, literals),
        // Pass, Break, Continue, Import, ImportFrom, Global, Nonlocal:
        // no expression children.
        _ => {}
    }
}

fn collect_expr(expr: &ast::Expr, literals: &mut Vec<String>) {
    match expr {
        ast::Expr::Constant(constant) => {
            if let ast::Constant::Str(value) = &constant.value {
                literals.push(value.clone());
            }
        }
        ast::Expr::JoinedStr(joined) => collect_exprs(&joined.values, literals),
        ast::Expr::FormattedValue(formatted) => {
            collect_expr(&formatted.value, literals);
            if let Some(spec) = &formatted.format_spec {
                collect_expr(spec, literals);
            }
        }
        ast::Expr::BoolOp(bool_op) => collect_exprs(&bool_op.values, literals),
        ast::Expr::NamedExpr(named) => {
            collect_expr(&named.target, literals);
            collect_expr(&named.value, literals);
        }
        ast::Expr::BinOp(bin_op) => {
            collect_expr(&bin_op.left, literals);
            collect_expr(&bin_op.right, literals);
        }
        ast::Expr::UnaryOp(unary) => collect_expr(&unary.operand, literals),
        ast::Expr::Lambda(lambda) => {
            collect_arguments(&lambda.args, literals);
            collect_expr(&lambda.body, literals);
        }
        // Source order for `a if b else c` is body, test, orelse.
        ast::Expr::IfExp(if_exp) => {
            collect_expr(&if_exp.body, literals);
            collect_expr(&if_exp.test, literals);
            collect_expr(&if_exp.orelse, literals);
        }
        // Interleave keys and values so entries come out in reading order.
        // A None key is a `**mapping` spread.
        ast::Expr::Dict(dict) => {
            for (key, value) in dict.keys.iter().zip(&dict.values) {
                if let Some(key) = key {
                    collect_expr(key, literals);
                }
                collect_expr(value, literals);
            }
        }
        ast::Expr::Set(set) => collect_exprs(&set.elts, literals),
        ast::Expr::ListComp(comp) => {
            collect_expr(&comp.elt, literals);
            collect_generators(&comp.generators, literals);
        }
        ast::Expr::SetComp(comp) => {
            collect_expr(&comp.elt, literals);
            collect_generators(&comp.generators, literals);
        }
        ast::Expr::DictComp(comp) => {
            collect_expr(&comp.key, literals);
            collect_expr(&comp.value, literals);
            collect_generators(&comp.generators, literals);
        }
        ast::Expr::GeneratorExp(comp) => {
            collect_expr(&comp.elt, literals);
            collect_generators(&comp.generators, literals);
        }
        ast::Expr::Await(await_expr) => collect_expr(&await_expr.value, literals),
        ast::Expr::Yield(yield_expr) => {
            if let Some(value) = &yield_expr.value {
                collect_expr(value, literals);
            }
        }
        ast::Expr::YieldFrom(yield_from) => collect_expr(&yield_from.value, literals),
        ast::Expr::Compare(compare) => {
            collect_expr(&compare.left, literals);
            collect_exprs(&compare.comparators, literals);
        }
        ast::Expr::Call(call) => {
            collect_expr(&call.func, literals);
            collect_exprs(&call.args, literals);
            for keyword in &call.keywords {
                collect_expr(&keyword.value, literals);
            }
        }
        ast::Expr::Attribute(attribute) => collect_expr(&attribute.value, literals),
        ast::Expr::Subscript(subscript) => {
            collect_expr(&subscript.value, literals);
            collect_expr(&subscript.slice, literals);
        }
        ast::Expr::Starred(starred) => collect_expr(&starred.value, literals),
        ast::Expr::List(list) => collect_exprs(&list.elts, literals),
        ast::Expr::Tuple(tuple) => collect_exprs(&tuple.elts, literals),
        ast::Expr::Slice(slice) => {
            if let Some(lower) = &slice.lower {
                collect_expr(lower, literals);
            }
            if let Some(upper) = &slice.upper {
                collect_expr(upper, literals);
            }
            if let Some(step) = &slice.step {
                collect_expr(step, literals);
            }
        }
        // Name: no children.
        _ => {}
    }
}

fn collect_exprs(exprs: &[ast::Expr], literals: &mut Vec<String>) {
    for expr in exprs {
        collect_expr(expr, literals);
    }
}

fn collect_arguments(args: &ast::Arguments, literals: &mut Vec<String>) {
    for arg in args.posonlyargs.iter().chain(&args.args) {
        collect_arg(&arg.def, literals);
        if let Some(default) = &arg.default {
            collect_expr(default, literals);
        }
    }
    if let Some(vararg) = &args.vararg {
        collect_arg(vararg, literals);
    }
    for arg in &args.kwonlyargs {
        collect_arg(&arg.def, literals);
        if let Some(default) = &arg.default {
            collect_expr(default, literals);
        }
    }
    if let Some(kwarg) = &args.kwarg {
        collect_arg(kwarg, literals);
    }
}

fn collect_arg(arg: &ast::Arg, literals: &mut Vec<String>) {
    if let Some(annotation) = &arg.annotation {
        collect_expr(annotation, literals);
    }
}

fn collect_type_params(type_params: &[ast::TypeParam], literals: &mut Vec<String>) {
    for param in type_params {
        // ParamSpec and TypeVarTuple carry no expressions.
        if let ast::TypeParam::TypeVar(type_var) = param {
            if let Some(bound) = &type_var.bound {
                collect_expr(bound, literals);
            }
        }
    }
}

fn collect_generators(generators: &[ast::Comprehension], literals: &mut Vec<String>) {
    for generator in generators {
        collect_expr(&generator.target, literals);
        collect_expr(&generator.iter, literals);
        collect_exprs(&generator.ifs, literals);
    }
}

fn collect_with_items(items: &[ast::WithItem], literals: &mut Vec<String>) {
    for item in items {
        collect_expr(&item.context_expr, literals);
        if let Some(vars) = &item.optional_vars {
            collect_expr(vars, literals);
        }
    }
}

fn collect_handlers(handlers: &[ast::ExceptHandler], literals: &mut Vec<String>) {
    for handler in handlers {
        let ast::ExceptHandler::ExceptHandler(handler) = handler;
        if let Some(type_) = &handler.type_ {
            collect_expr(type_, literals);
        }
        collect_body(&handler.body, literals);
    }
}

fn collect_pattern(pattern: &ast::Pattern, literals: &mut Vec<String>) {
    match pattern {
        ast::Pattern::MatchValue(p) => collect_expr(&p.value, literals),
        // Singletons are None/True/False, never strings.
        ast::Pattern::MatchSingleton(_) | ast::Pattern::MatchStar(_) => {}
        ast::Pattern::MatchSequence(p) => {
            for inner in &p.patterns {
                collect_pattern(inner, literals);
            }
        }
        ast::Pattern::MatchMapping(p) => {
            for (key, inner) in p.keys.iter().zip(&p.patterns) {
                collect_expr(key, literals);
                collect_pattern(inner, literals);
            }
        }
        ast::Pattern::MatchClass(p) => {
            collect_expr(&p.cls, literals);
            for inner in &p.patterns {
                collect_pattern(inner, literals);
            }
            for inner in &p.kwd_patterns {
                collect_pattern(inner, literals);
            }
        }
        ast::Pattern::MatchAs(p) => {
            if let Some(inner) = &p.pattern {
                collect_pattern(inner, literals);
            }
        }
        ast::Pattern::MatchOr(p) => {
            for inner in &p.patterns {
                collect_pattern(inner, literals);
            }
        }
    }
}
