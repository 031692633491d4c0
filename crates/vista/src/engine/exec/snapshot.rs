use crate::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use std::{collections::HashMap, sync::Arc};
use vista_core::{
    driver::{operation::Scan, Driver},
    schema::source::{self, FieldId, FieldTy, ModelId},
    stmt::{Value, ValueRecord},
};

/// The rows of every model a query touches, fetched once per execution.
#[derive(Debug, Default)]
pub(super) struct Snapshot {
    tables: IndexMap<ModelId, Table>,
}

#[derive(Debug)]
pub(super) struct Table {
    /// Rows in driver order
    rows: Vec<ValueRecord>,

    /// Row index by primary key
    by_pk: HashMap<Value, usize>,

    /// Row indices by foreign key value, per `BelongsTo` field
    by_fk: HashMap<FieldId, HashMap<Value, Vec<usize>>>,
}

impl Snapshot {
    pub(super) async fn load(
        schema: &Arc<source::Schema>,
        driver: &dyn Driver,
        models: IndexSet<ModelId>,
    ) -> Result<Snapshot> {
        let mut tables = IndexMap::with_capacity(models.len());

        for model_id in models {
            let model = schema.model(model_id);
            let res = driver.exec(schema, Scan { model: model_id }.into()).await?;

            let rows = res
                .rows
                .into_values()?
                .collect()
                .await?
                .into_iter()
                .map(Value::to_record)
                .collect::<Result<Vec<_>>>()?;

            tracing::trace!(model = %model.name, rows = rows.len(), "scanned source model");

            tables.insert(model_id, Table::new(model, rows)?);
        }

        Ok(Snapshot { tables })
    }

    pub(super) fn table(&self, model: ModelId) -> Result<&Table> {
        self.tables
            .get(&model)
            .ok_or_else(|| crate::err!("source model {model:?} was not loaded"))
    }
}

impl Table {
    fn new(model: &source::Model, rows: Vec<ValueRecord>) -> Result<Table> {
        let mut by_pk = HashMap::with_capacity(rows.len());
        let mut by_fk: HashMap<FieldId, HashMap<Value, Vec<usize>>> = HashMap::new();

        for (index, row) in rows.iter().enumerate() {
            if row.len() != model.fields.len() {
                return Err(Error::invalid_result(format!(
                    "row of `{}` has {} fields, expected {}",
                    model.name,
                    row.len(),
                    model.fields.len()
                )));
            }

            by_pk.insert(row[model.primary_key.index].clone(), index);

            for field in &model.fields {
                let FieldTy::BelongsTo(belongs_to) = &field.ty else {
                    continue;
                };

                let key = &row[belongs_to.foreign_key.index];

                if !key.is_null() {
                    by_fk
                        .entry(field.id)
                        .or_default()
                        .entry(key.clone())
                        .or_default()
                        .push(index);
                }
            }
        }

        Ok(Table { rows, by_pk, by_fk })
    }

    pub(super) fn rows(&self) -> &[ValueRecord] {
        &self.rows
    }

    /// The row whose primary key is `key`.
    pub(super) fn get(&self, key: &Value) -> Option<&ValueRecord> {
        self.by_pk.get(key).map(|&index| &self.rows[index])
    }

    /// Rows whose `pair` foreign key references `key`, in driver order.
    pub(super) fn referencing<'a>(
        &'a self,
        pair: FieldId,
        key: &Value,
    ) -> impl Iterator<Item = &'a ValueRecord> + 'a {
        self.by_fk
            .get(&pair)
            .and_then(|index| index.get(key))
            .into_iter()
            .flatten()
            .map(|&index| &self.rows[index])
    }
}
