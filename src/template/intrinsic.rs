//! Intrinsic function helpers
//!
//! These build the JSON shapes the provisioning engine resolves at deploy time
//! (`Ref`, `Fn::GetAtt`, ...). Nothing here is evaluated locally.

use serde_json::{Value, json};

/// `{"Ref": id}`
pub fn reference(logical_id: &str) -> Value {
    json!({ "Ref": logical_id })
}

/// `{"Fn::GetAtt": [id, attribute]}`
pub fn get_att(logical_id: &str, attribute: &str) -> Value {
    json!({ "Fn::GetAtt": [logical_id, attribute] })
}

/// `{"Fn::Join": [separator, parts]}`
pub fn join(separator: &str, parts: Vec<Value>) -> Value {
    json!({ "Fn::Join": [separator, parts] })
}

/// `{"Fn::Select": [index, list]}`
pub fn select(index: usize, list: Value) -> Value {
    json!({ "Fn::Select": [index, list] })
}

/// `{"Fn::GetAZs": ""}`, the availability zones of the deploy region
pub fn get_azs() -> Value {
    json!({ "Fn::GetAZs": "" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference() {
        assert_eq!(reference("Bucket"), json!({"Ref": "Bucket"}));
    }

    #[test]
    fn test_get_att() {
        assert_eq!(
            get_att("Bucket", "Arn"),
            json!({"Fn::GetAtt": ["Bucket", "Arn"]})
        );
    }

    #[test]
    fn test_select_azs() {
        assert_eq!(
            select(1, get_azs()),
            json!({"Fn::Select": [1, {"Fn::GetAZs": ""}]})
        );
    }

    #[test]
    fn test_join() {
        let joined = join("", vec![json!("arn:"), reference("X")]);
        assert_eq!(joined["Fn::Join"][0], "");
        assert_eq!(joined["Fn::Join"][1][1], json!({"Ref": "X"}));
    }
}
