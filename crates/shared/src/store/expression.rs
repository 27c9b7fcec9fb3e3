use crate::abstract_trait::Document;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: Document,
}

/// Builds `SET #f0 = :f0, #f1 = :f1, ...` over the patch attributes.
///
/// Attribute names always go through placeholders so reserved words such as
/// `items` are accepted. Keys are sorted to keep the expression stable.
/// Returns `None` for an empty patch.
pub fn build_set_expression(patch: &Document) -> Option<UpdateExpression> {
    if patch.is_empty() {
        return None;
    }

    let mut keys: Vec<&String> = patch.keys().collect();
    keys.sort();

    let mut clauses = Vec::with_capacity(keys.len());
    let mut names = HashMap::with_capacity(keys.len());
    let mut values = HashMap::with_capacity(keys.len());

    for (index, key) in keys.into_iter().enumerate() {
        let name = format!("#f{index}");
        let value = format!(":f{index}");

        clauses.push(format!("{name} = {value}"));
        names.insert(name, key.clone());
        values.insert(value, patch[key].clone());
    }

    Some(UpdateExpression {
        expression: format!("SET {}", clauses.join(", ")),
        names,
        values,
    })
}
