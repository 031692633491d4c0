use super::*;

use std::{
    ops::{self, Index, IndexMut},
    vec,
};

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ValueRecord {
    pub fields: Vec<Value>,
}

impl ValueRecord {
    pub fn from_vec(fields: Vec<Value>) -> Self {
        Self { fields }
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.fields
    }
}

impl<A> FromIterator<A> for ValueRecord
where
    A: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = A>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ops::Deref for ValueRecord {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.fields[..]
    }
}

impl ops::DerefMut for ValueRecord {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.fields[..]
    }
}

impl Index<usize> for ValueRecord {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        &self.fields[index]
    }
}

impl IndexMut<usize> for ValueRecord {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.fields[index]
    }
}

impl IntoIterator for ValueRecord {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueRecord {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl PartialEq<ValueRecord> for Value {
    fn eq(&self, other: &ValueRecord) -> bool {
        matches!(self, Value::Record(record) if record == other)
    }
}
