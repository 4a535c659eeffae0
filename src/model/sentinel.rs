//! Legacy "not acquired" sentinels, applied only when serializing
//!
//! Fields that a ping may not carry are `Option`s in memory. Downstream
//! consumers of GSF data expect the historical placeholders instead, so
//! these serializers substitute them on the way out.
use serde::{Serialize, Serializer};

/// Serialize a missing float as NaN
pub fn nan<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(value.unwrap_or(f64::NAN))
}

/// Serialize a missing value as its zero
pub fn zero<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize + Default + Copy,
    S: Serializer,
{
    value.unwrap_or_default().serialize(serializer)
}

#[cfg(test)]
mod test {
    #[derive(serde::Serialize)]
    struct Fields {
        #[serde(serialize_with = "super::nan")]
        speed: Option<f64>,
        #[serde(serialize_with = "super::zero")]
        ratio: Option<u8>,
    }

    #[test]
    fn missing_values_become_sentinels() {
        let json = serde_json::to_string(&Fields {
            speed: None,
            ratio: None,
        })
        .unwrap();
        // serde_json writes non-finite floats as null
        assert_eq!(json, r#"{"speed":null,"ratio":0}"#);

        let json = serde_json::to_string(&Fields {
            speed: Some(1.5),
            ratio: Some(7),
        })
        .unwrap();
        assert_eq!(json, r#"{"speed":1.5,"ratio":7}"#);
    }
}
