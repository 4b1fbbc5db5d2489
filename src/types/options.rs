/// Opaque option payload attached to a rule.
///
/// The resolver never inspects payload contents; it only carries them from
/// the declarative table into the resolved policy. Records keep their field
/// order so output is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// A UTF-8 string.
    String(String),
    /// An ordered sequence of values.
    List(Vec<OptionValue>),
    /// An ordered set of named fields.
    Record(Vec<(String, OptionValue)>),
}

/// Build an [`OptionValue::List`] from anything convertible to values.
pub fn list<I, T>(items: I) -> OptionValue
where
    I: IntoIterator<Item = T>,
    T: Into<OptionValue>,
{
    OptionValue::List(items.into_iter().map(Into::into).collect())
}

/// Build an [`OptionValue::Record`] from `(name, value)` pairs, keeping
/// the given field order.
pub fn record<I, K, V>(fields: I) -> OptionValue
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<OptionValue>,
{
    OptionValue::Record(
        fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    )
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Int(v)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::String(v.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::String(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_i64() {
        assert_eq!(OptionValue::from(42_i64), OptionValue::Int(42));
    }

    #[test]
    fn from_bool() {
        assert_eq!(OptionValue::from(true), OptionValue::Bool(true));
    }

    #[test]
    fn from_str() {
        assert_eq!(
            OptionValue::from("always"),
            OptionValue::String("always".to_owned())
        );
    }

    #[test]
    fn list_converts_items() {
        assert_eq!(
            list([-1_i64, 0, 1]),
            OptionValue::List(vec![
                OptionValue::Int(-1),
                OptionValue::Int(0),
                OptionValue::Int(1),
            ])
        );
    }

    #[test]
    fn record_keeps_field_order() {
        let value = record([("before", false), ("after", true)]);
        match value {
            OptionValue::Record(fields) => {
                assert_eq!(fields[0].0, "before");
                assert_eq!(fields[1].0, "after");
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn nested_payload() {
        let value = record([
            ("ignoreArrayIndexes", OptionValue::from(true)),
            ("ignore", list([-2_i64, -1, 0, 1, 2])),
        ]);
        match value {
            OptionValue::Record(fields) => assert_eq!(fields.len(), 2),
            other => panic!("expected record, got {other:?}"),
        }
    }
}
