//! Serde helpers encoding opaque byte buffers as lowercase hex strings.

use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&hex::encode(bytes))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    hex::decode(&raw).map_err(serde::de::Error::custom)
}

/// Same encoding for a sequence of byte buffers.
pub mod seq {
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(buffers: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut out = serializer.serialize_seq(Some(buffers.len()))?;
        for buffer in buffers {
            out.serialize_element(&hex::encode(buffer))?;
        }
        out.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter()
            .map(|entry| hex::decode(entry).map_err(serde::de::Error::custom))
            .collect()
    }
}
