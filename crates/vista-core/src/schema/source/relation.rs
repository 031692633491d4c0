use super::*;

#[derive(Debug, Clone)]
pub struct BelongsTo {
    /// Model the relation points to
    pub target: ModelId,

    /// Field on the owning model holding the target's primary key
    pub foreign_key: FieldId,
}

#[derive(Debug, Clone)]
pub struct HasMany {
    /// Model the relation points to
    pub target: ModelId,

    /// The `BelongsTo` field on the target that points back to the owner
    pub pair: FieldId,
}
