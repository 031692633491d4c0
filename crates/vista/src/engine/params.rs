use super::Engine;
use crate::{Error, Result};
use vista_core::{schema::mapping, stmt::Params};

impl Engine {
    /// Converts each supplied parameter to the type of the computed members
    /// reading it.
    ///
    /// Keys no member reads pass through untouched.
    pub(super) fn coerce_params(&self, mut params: Params) -> Result<Params> {
        for model in self.schema.mapping.models() {
            let view_model = self.schema.view.model(model.view);

            for (index, field) in model.fields.iter().enumerate() {
                let mapping::Field::Param(param) = field else {
                    continue;
                };

                let Some(value) = params.get(&param.key) else {
                    continue;
                };

                let Some(coerced) = param.ty.coerce(value.clone()) else {
                    return Err(Error::type_mismatch(
                        format!("{}.{}", view_model.name, view_model.fields[index].name),
                        param.ty.clone(),
                        value.infer_ty(),
                    ));
                };

                params.insert(param.key.clone(), coerced);
            }
        }

        Ok(params)
    }
}
