use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{ArgumentError, Payload};

/// Keyword-style arguments passed to a caller's entry point.
///
/// Arguments are decoded into the caller's `Input` type with serde, so any
/// `Deserialize` struct works as an input. Keys the input does not name are
/// ignored, and `Arguments` itself can be used as an input to accept them all.
///
/// # Example
///
/// ```
/// use fluxus::Arguments;
///
/// let args = Arguments::new().with("name", "John Doe").with("age", 42);
///
/// assert_eq!(args.len(), 2);
/// assert_eq!(args.get("age"), Some(&serde_json::json!(42)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arguments(Map<String, Value>);

impl Arguments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an argument, replacing any previous value under the same key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts an argument, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Merges `other` into these arguments. Keys in `other` take precedence.
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Builds arguments from the fields of a serializable value.
    ///
    /// A value that does not serialize to a mapping is wrapped as
    /// `{ "result": value }`.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` cannot be serialized.
    pub fn from_input<T: Serialize>(input: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(input).map(Self::from_value)
    }

    /// Normalizes a payload into the arguments of the next caller in a chain.
    ///
    /// Mappings are copied as they are; anything else is wrapped as
    /// `{ "result": payload }`. A captured error is forwarded by its message.
    pub(crate) fn from_payload(payload: &Payload) -> Self {
        match payload {
            Payload::Value(value) => Self::from_value(value.clone()),
            Payload::Exception(exception) => Self::new().with("result", exception.to_string()),
        }
    }

    fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            other => Self::new().with("result", other),
        }
    }

    /// Decodes the arguments into a caller's input.
    pub(crate) fn decode<T: DeserializeOwned>(
        self,
        caller: &'static str,
    ) -> Result<T, ArgumentError> {
        serde_json::from_value(Value::Object(self.0))
            .map_err(|source| ArgumentError { caller, source })
    }
}

impl From<Map<String, Value>> for Arguments {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Arguments
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Exception;

    #[derive(Debug, Deserialize)]
    struct Greeting {
        name: String,
        #[serde(default)]
        shout: bool,
    }

    #[test]
    fn merge_prefers_the_incoming_keys() {
        let mut args = Arguments::from_iter([("name", "John"), ("role", "admin")]);
        let incoming = Arguments::from_iter([("name", "Jane"), ("extra", "parameter")]);
        args.merge(incoming);

        assert_eq!(
            args,
            Arguments::from_iter([
                ("name", json!("Jane")),
                ("role", json!("admin")),
                ("extra", json!("parameter")),
            ])
        );
    }

    #[test]
    fn mapping_payload_is_copied() {
        let payload = Payload::from(json!({ "full_name": "John Doe" }));
        let args = Arguments::from_payload(&payload);

        assert_eq!(args.get("full_name"), Some(&json!("John Doe")));
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn other_payloads_are_wrapped_as_result() {
        let args = Arguments::from_payload(&Payload::from("Hello, Jane Doe!"));
        assert_eq!(args, Arguments::new().with("result", "Hello, Jane Doe!"));

        let args = Arguments::from_payload(&Payload::from(json!([1, 2, 3])));
        assert_eq!(args.get("result"), Some(&json!([1, 2, 3])));

        let args = Arguments::from_payload(&Payload::from(json!(null)));
        assert_eq!(args.get("result"), Some(&Value::Null));
    }

    #[test]
    fn exception_payload_is_forwarded_by_message() {
        #[derive(Debug, thiserror::Error)]
        #[error("connection reset")]
        struct ConnectionReset;

        let args = Arguments::from_payload(&Payload::from(Exception::new(ConnectionReset)));

        assert_eq!(args.get("result"), Some(&json!("connection reset")));
    }

    #[test]
    fn decode_ignores_unknown_keys() {
        let args = Arguments::new()
            .with("name", "Jane Doe")
            .with("priority", "high");

        let greeting: Greeting = args.decode("Greet").unwrap();

        assert_eq!(greeting.name, "Jane Doe");
        assert!(!greeting.shout);
    }

    #[test]
    fn decode_reports_the_caller() {
        let error = Arguments::new().decode::<Greeting>("Greet").unwrap_err();

        assert_eq!(error.caller, "Greet");
        assert_eq!(error.to_string(), "invalid arguments for `Greet`");
        assert!(error.source.to_string().contains("missing field `name`"));
    }

    #[test]
    fn from_input_serializes_fields() {
        #[derive(Serialize)]
        struct Signup<'a> {
            email: &'a str,
            age: u8,
        }

        let args = Arguments::from_input(&Signup {
            email: "jane@example.com",
            age: 30,
        })
        .unwrap();

        assert_eq!(args.get("email"), Some(&json!("jane@example.com")));
        assert_eq!(args.get("age"), Some(&json!(30)));

        let wrapped = Arguments::from_input(&"plain").unwrap();
        assert_eq!(wrapped.get("result"), Some(&json!("plain")));
    }

    #[test]
    fn into_map_hands_back_the_mapping() {
        let map = Arguments::new().with("a", 1).into_map();

        assert_eq!(Value::Object(map), json!({ "a": 1 }));
    }

    #[test]
    fn arguments_deserialize_as_a_plain_mapping() {
        let args: Arguments = serde_json::from_value(json!({ "a": 1 })).unwrap();

        assert_eq!(args, Arguments::new().with("a", 1));
    }
}
