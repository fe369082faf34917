//! The sample record populated by the demo.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use structer::{Field, Record};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub number: String,
}

impl Record for Contact {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![Field::new("number", &mut self.number)]
    }
}

/// An employee, filled from `EmployeeID` / `EmployeeName` and defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub employment_status: String,
    pub contacts: Vec<Contact>,
    pub labels: BTreeMap<String, String>,
}

impl Record for User {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("id", &mut self.id)
                .with_default("0")
                .with_env("EmployeeID"),
            Field::new("name", &mut self.name)
                .with_default("")
                .with_env("EmployeeName"),
            Field::new("employment_status", &mut self.employment_status)
                .with_default("Employed"),
            Field::new("contacts", &mut self.contacts)
                .with_default(r#"[{"number":"817-273-3746"},{"number":"415-384-9919"}]"#),
            Field::new("labels", &mut self.labels)
                .with_default(r#"{"team":"platform"}"#)
                .with_env("EmployeeLabels"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn populated_from_defaults() {
        let mut user = User::default();
        structer::set_defaults_with(&mut user, &env(&[])).unwrap();

        assert_eq!(user.id, 0);
        assert_eq!(user.name, "");
        assert_eq!(user.employment_status, "Employed");
        assert_eq!(user.contacts.len(), 2);
        assert_eq!(user.contacts[1].number, "415-384-9919");
        assert_eq!(user.labels["team"], "platform");
    }

    #[test]
    fn populated_from_environment() {
        let mut user = User::default();
        let vars = env(&[
            ("EmployeeID", "1001"),
            ("EmployeeName", "Ada Lovelace"),
            ("EmployeeLabels", r#"{"team":"analytics","site":"london"}"#),
        ]);
        structer::set_defaults_with(&mut user, &vars).unwrap();

        assert_eq!(user.id, 1001);
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.labels.len(), 2);
        assert_eq!(user.labels["site"], "london");
    }

    #[test]
    fn malformed_labels_are_reported() {
        let mut user = User::default();
        let vars = env(&[("EmployeeLabels", "team=analytics")]);
        let err = structer::set_defaults_with(&mut user, &vars).unwrap_err();

        assert!(matches!(
            err,
            structer::Error::MalformedDefault { ref path, .. } if path == "labels"
        ));
    }
}
