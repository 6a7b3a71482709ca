use crate::SimpleVec;
use serde::{
    de::{Deserialize, Deserializer, SeqAccess, Visitor},
    ser::{Serialize, SerializeSeq, Serializer},
};
use std::{
    fmt::{self, Formatter},
    marker::PhantomData,
};

// Upper bound on the capacity taken from a deserializer's size hint.
const MAX_PREALLOC: usize = 4096;

impl<T> Serialize for SimpleVec<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for el in self {
            seq.serialize_element(el)?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for SimpleVec<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SimpleVecVisitor(PhantomData))
    }
}

struct SimpleVecVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for SimpleVecVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = SimpleVec<T>;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let hint = seq.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut out = SimpleVec::<T>::try_with_capacity(hint).map_err(serde::de::Error::custom)?;
        while let Some(next) = seq.next_element()? {
            out.try_push(next).map_err(serde::de::Error::custom)?;
        }
        Ok(out)
    }
}
