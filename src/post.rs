use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{CardError, CardResult};

#[derive(Debug, Clone, PartialEq)]
pub struct PostDocument {
    pub kind: String,
    pub titre: String,
    pub objet: String,
    pub contexte: String,
    pub corps: String,
    pub resultats: String,
    pub auteur: String,
}

/// Example of post
/// # Lines starting with '#' are ignored
/// type: fix
/// titre: Crash au démarrage
/// objet: Correction du crash
/// contexte: ...
/// corps: ...
/// resultats: ...
/// auteur: thiago
impl PostDocument {
    pub fn load(file_name: &Path) -> CardResult<PostDocument> {
        let content = fs::read_to_string(file_name).map_err(|source| CardError::Read {
            path: file_name.to_path_buf(),
            source,
        })?;

        Self::from_string(&content)
    }

    pub fn from_string(content: &str) -> CardResult<PostDocument> {
        let stripped = strip_comments(content);
        let value: Value = serde_yaml::from_str(&stripped)?;

        let map = match value {
            Value::Mapping(map) => map,
            _ => return Err(CardError::NotAMapping),
        };

        Ok(PostDocument {
            kind: Self::field(&map, "type")?,
            titre: Self::field(&map, "titre")?,
            objet: Self::field(&map, "objet")?,
            contexte: Self::field(&map, "contexte")?,
            corps: Self::field(&map, "corps")?,
            resultats: Self::field(&map, "resultats")?,
            auteur: Self::field(&map, "auteur")?,
        })
    }

    fn field(map: &Mapping, name: &'static str) -> CardResult<String> {
        match map.get(name) {
            None => Err(CardError::MissingField(name)),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::Bool(b)) => Ok(b.to_string()),
            Some(Value::Null) => Ok(String::new()),
            Some(_) => Err(CardError::InvalidField(name)),
        }
    }
}

/// Drops every line whose first non-blank character is '#'
pub fn strip_comments(content: &str) -> String {
    let mut res = String::with_capacity(content.len());
    for line in content.lines() {
        if line.trim_start().starts_with('#') {
            continue;
        }
        res.push_str(line);
        res.push('\n');
    }
    res
}
