//! Request bodies.

use std::collections::HashMap;
use std::io::Read;

use serde::Serialize;

use crate::http::error::{HttpError, HttpResult};

/// A single file attached to a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name the file is sent under.
    pub param: String,
    /// File name reported to the server.
    pub file_name: String,
    pub contents: Vec<u8>,
}

impl FilePart {
    pub fn new(
        param: impl Into<String>,
        file_name: impl Into<String>,
        contents: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            param: param.into(),
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }

    /// Build a part by reading `reader` to the end.
    pub fn from_reader<R: Read>(
        param: impl Into<String>,
        file_name: impl Into<String>,
        mut reader: R,
    ) -> HttpResult<Self> {
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents)?;
        Ok(Self::new(param, file_name, contents))
    }
}

/// The body of an outbound request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
    #[default]
    Empty,
    /// Bytes sent verbatim. No `Content-Type` is added, text included;
    /// set one through the request headers if the server needs it.
    Raw(Vec<u8>),
    /// Serialized as JSON; implies `application/json` unless the caller set one.
    Json(serde_json::Value),
    /// URL-encoded form fields.
    Form(HashMap<String, String>),
    /// Multipart form with text fields and one file.
    Multipart {
        fields: HashMap<String, String>,
        file: FilePart,
    },
}

impl Body {
    /// Serialize any value into a JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> HttpResult<Self> {
        serde_json::to_value(value)
            .map(Body::Json)
            .map_err(HttpError::Encode)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Body::Raw(bytes)
    }
}

impl From<&[u8]> for Body {
    fn from(bytes: &[u8]) -> Self {
        Body::Raw(bytes.to_vec())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Raw(text.into_bytes())
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Raw(text.as_bytes().to_vec())
    }
}

impl From<serde_json::Value> for Body {
    fn from(value: serde_json::Value) -> Self {
        Body::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct User {
        name: String,
    }

    #[test]
    fn test_json_from_struct() {
        let body = Body::json(&User { name: "test".into() }).unwrap();
        assert_eq!(body, Body::Json(json!({"name": "test"})));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Body::from("abc"), Body::Raw(b"abc".to_vec()));
        assert_eq!(Body::from(&b"\x00\x01"[..]), Body::Raw(vec![0, 1]));
        assert!(matches!(Body::from(json!([1, 2])), Body::Json(_)));
        assert!(Body::default().is_empty());
    }

    #[test]
    fn test_file_part_from_reader() {
        let part = FilePart::from_reader("file", "test.txt", &b"hello"[..]).unwrap();
        assert_eq!(part.param, "file");
        assert_eq!(part.file_name, "test.txt");
        assert_eq!(part.contents, b"hello");
    }

    #[test]
    fn test_non_string_map_keys_fail_to_encode() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(vec![1u8], "v");
        let err = Body::json(&map).unwrap_err();
        assert!(matches!(err, HttpError::Encode(_)));
    }
}
