use indexmap::IndexSet;
use vista_core::{
    schema::source::{self, ModelId},
    stmt::{self, visit, ExprField, Visit},
};

/// Returns every source model a query reads from, including models reached
/// by relation navigation in filters, orderings and expansions.
pub(super) fn models(schema: &source::Schema, query: &stmt::Query) -> IndexSet<ModelId> {
    let mut collect = Collect {
        schema,
        models: IndexSet::new(),
    };

    collect.visit_query(query);
    collect.models
}

struct Collect<'a> {
    schema: &'a source::Schema,
    models: IndexSet<ModelId>,
}

impl Visit for Collect<'_> {
    fn visit_query(&mut self, i: &stmt::Query) {
        match &i.source {
            stmt::Source::Model(model) => {
                self.models.insert(*model);
            }
            stmt::Source::Field(path) => self.visit_expr_field(path),
        }

        visit::visit_query(self, i);
    }

    fn visit_expr_field(&mut self, i: &ExprField) {
        for field_id in &i.path {
            self.models.insert(field_id.model);

            if let Some(target) = self.schema.field(*field_id).relation_target() {
                self.models.insert(target);
            }
        }
    }
}
