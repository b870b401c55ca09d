// 📦 Batch greeting - many requests from one JSON file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::greeting::{greet, Greeting};
use crate::person::Person;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingRequest {
    pub style: Greeting,
    pub person: Person,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub style: Greeting,
    pub name: String,
    pub greeting: String,
}

impl GreetingRequest {
    pub fn new(style: Greeting, person: Person) -> Self {
        GreetingRequest { style, person }
    }

    pub fn respond(&self) -> GreetingResponse {
        GreetingResponse {
            style: self.style,
            name: self.person.name.clone(),
            greeting: greet(self.style, &self.person),
        }
    }
}

/// Load a JSON array of requests
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<GreetingRequest>> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read requests file: {:?}", path.as_ref()))?;

    let requests: Vec<GreetingRequest> =
        serde_json::from_str(&content).context("Failed to parse requests JSON")?;

    tracing::debug!(count = requests.len(), path = ?path.as_ref(), "loaded greeting requests");

    Ok(requests)
}

/// Greet every request, keeping input order.
/// Invalid people are still greeted; the problem is only logged.
pub fn greet_all(requests: &[GreetingRequest]) -> Vec<GreetingResponse> {
    requests
        .iter()
        .enumerate()
        .map(|(index, request)| {
            if let Err(errors) = request.person.validate() {
                for error in errors {
                    tracing::warn!(index, %error, "greeting request failed validation");
                }
            }
            request.respond()
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_greet_all_keeps_order() {
        let requests = vec![
            GreetingRequest::new(Greeting::Casual, Person::new("Zoe", 20)),
            GreetingRequest::new(Greeting::Formal, Person::new("Adam", 70)),
            GreetingRequest::new(Greeting::Casual, Person::new("", 1)),
        ];

        let greetings: Vec<String> = greet_all(&requests)
            .into_iter()
            .map(|r| r.greeting)
            .collect();

        assert_eq!(greetings, vec!["Hi, Zoe!", "Good day, Adam!", "Hi, !"]);
    }

    #[test]
    fn test_respond_copies_name_and_style() {
        let response = GreetingRequest::new(Greeting::Formal, Person::new("Lin", 9)).respond();

        assert_eq!(response.style, Greeting::Formal);
        assert_eq!(response.name, "Lin");
        assert_eq!(response.greeting, "Good day, Lin!");
    }

    #[test]
    fn test_load_requests_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"style": "formal", "person": {{"name": "World", "age": 42}}}},
                {{"style": "casual", "person": {{"name": "Bob", "age": 7}}}}
            ]"#
        )
        .unwrap();

        let requests = load_requests(file.path()).unwrap();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].style, Greeting::Formal);
        assert_eq!(requests[1].person, Person::new("Bob", 7));
    }

    #[test]
    fn test_load_requests_accepts_negative_age() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"style":"formal","person":{{"name":"World","age":-1}}}}]"#
        )
        .unwrap();

        let requests = load_requests(file.path()).unwrap();
        assert_eq!(requests[0].person, Person::new("World", -1));

        let responses = greet_all(&requests);
        assert_eq!(responses[0].greeting, "Good day, World!");
    }

    #[test]
    fn test_load_requests_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"style": "rude", "person": {{"name": "X", "age": 1}}}}]"#).unwrap();

        let err = load_requests(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse requests JSON"));
    }

    #[test]
    fn test_load_requests_missing_file() {
        let err = load_requests("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read requests file"));
    }
}
