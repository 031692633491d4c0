mod direction;
pub use direction::Direction;

mod eval;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_any;
pub use expr_any::ExprAny;

mod expr_arg;
pub use expr_arg::ExprArg;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_field;
pub use expr_field::ExprField;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_pattern;
pub use expr_pattern::{ExprPattern, PatternKind};

mod expr_record;
pub use expr_record::ExprRecord;

mod expr_stmt;
pub use expr_stmt::ExprStmt;

mod filter;
pub use filter::Filter;

mod input;
pub use input::{ConstInput, Input};

mod limit;
pub use limit::Limit;

mod node;
pub use node::Node;

mod op_binary;
pub use op_binary::BinaryOp;

mod order_by;
pub use order_by::OrderBy;

mod order_by_expr;
pub use order_by_expr::OrderByExpr;

mod params;
pub use params::Params;

mod query;
pub use query::Query;

mod source;
pub use source::Source;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_cmp;

mod value_record;
pub use value_record::ValueRecord;

mod value_stream;
pub use value_stream::ValueStream;

pub mod visit;
pub use visit::Visit;

pub mod visit_mut;
pub use visit_mut::VisitMut;
