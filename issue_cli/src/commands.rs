//! Subcommand execution
//!
//! Each command renders its result to a string; `execute` prints it and
//! returns the process exit code.

use crate::cli::Commands;
use issue_manager::{IssueManager, Service};
use issue_taxonomy::config::ResourcePreferences;
use issue_taxonomy::{check_conformance, IssueClassifier, IssueName, IssueType, ResourceLoader};
use serde_json::json;
use std::error::Error;

pub type CommandResult<T> = Result<T, Box<dyn Error>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
}

impl Output {
    pub fn from_flag(json: bool) -> Self {
        if json {
            Output::Json
        } else {
            Output::Text
        }
    }
}

/// Outcome of one command
#[derive(Debug)]
pub struct Rendered {
    pub text: String,
    pub exit_code: i32,
}

impl Rendered {
    fn ok(text: String) -> Self {
        Self { text, exit_code: 0 }
    }
}

pub fn execute(
    command: Commands,
    resources: &ResourcePreferences,
    output: Output,
) -> CommandResult<i32> {
    let rendered = render(command, resources, output)?;
    println!("{}", rendered.text.trim_end());
    Ok(rendered.exit_code)
}

pub fn render(
    command: Commands,
    resources: &ResourcePreferences,
    output: Output,
) -> CommandResult<Rendered> {
    let load = || ResourceLoader::new(resources.clone()).load();

    let rendered = match command {
        Commands::Check => return check(resources, output),
        Commands::Http { status } => {
            let classification = load()?.classify_from_http_with_details(&status)?;
            Rendered::ok(render_issue_type(
                &classification.issue_type,
                Some(&classification.details),
                output,
            )?)
        }
        Commands::Exception { exception_type } => {
            let issue_type = load()?.classify_from_exception(&exception_type)?;
            Rendered::ok(render_issue_type(&issue_type, None, output)?)
        }
        Commands::ReverseHttp { issue_name } => {
            let issue_name = IssueName::parse_ignore_case(&issue_name)?;
            let classifier = load()?;
            let key = classifier.resolver().http_status_from_issue_name(issue_name);
            Rendered::ok(render_reverse(issue_name, "httpStatus", key, output)?)
        }
        Commands::ReverseException { issue_name } => {
            let issue_name = IssueName::parse_ignore_case(&issue_name)?;
            let classifier = load()?;
            let key = classifier.resolver().exception_from_issue_name(issue_name);
            Rendered::ok(render_reverse(issue_name, "exception", key, output)?)
        }
        Commands::Describe { issue_name } => {
            let issue_name = IssueName::parse_ignore_case(&issue_name)?;
            let issue_type = load()?.taxonomy().issue_type(issue_name)?;
            Rendered::ok(render_issue_type(&issue_type, None, output)?)
        }
        Commands::IssueHttp {
            status,
            service_id,
            service_name,
        } => Rendered::ok(issue_http(load()?, &status, service_id, service_name)?),
    };

    Ok(rendered)
}

fn check(resources: &ResourcePreferences, output: Output) -> CommandResult<Rendered> {
    // Load leniently so the report can describe what strict loading would reject
    let lenient = resources.clone().with_strict_validation(false);
    let classifier = ResourceLoader::new(lenient).load()?;
    let report = check_conformance(classifier.taxonomy(), classifier.resolver());

    let text = match output {
        Output::Text => report.to_string(),
        Output::Json => serde_json::to_string_pretty(&report)?,
    };

    Ok(Rendered {
        text,
        exit_code: if report.is_conformant() { 0 } else { 1 },
    })
}

fn issue_http(
    classifier: IssueClassifier,
    status: &str,
    service_id: String,
    service_name: String,
) -> CommandResult<String> {
    let manager = IssueManager::with_classifier(Service::new(service_id, service_name), classifier);
    let issue = manager.create_issue_from_http_status(status)?;
    Ok(issue.to_json()?)
}

fn render_issue_type(
    issue_type: &IssueType,
    details: Option<&str>,
    output: Output,
) -> serde_json::Result<String> {
    match output {
        Output::Json => {
            let mut value = serde_json::to_value(issue_type)?;
            if let (Some(details), Some(object)) = (details, value.as_object_mut()) {
                object.insert("details".to_string(), json!(details));
            }
            serde_json::to_string_pretty(&value)
        }
        Output::Text => {
            let mut text = format!(
                "{}\n  Category:    {}\n  Description: {}",
                issue_type.name, issue_type.category, issue_type.description
            );
            if let Some(details) = details {
                text.push_str(&format!("\n  Details:     {}", details));
            }
            Ok(text)
        }
    }
}

fn render_reverse(
    issue_name: IssueName,
    field: &str,
    key: Option<&str>,
    output: Output,
) -> serde_json::Result<String> {
    match output {
        Output::Json => {
            let mut object = serde_json::Map::new();
            object.insert("issueName".to_string(), json!(issue_name));
            object.insert(field.to_string(), json!(key));
            serde_json::to_string_pretty(&object)
        }
        Output::Text => Ok(match key {
            Some(key) => key.to_string(),
            None => format!("No mapping for {}", issue_name),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use issue_taxonomy::classifier::ClassificationError;
    use std::fs;

    fn bundled() -> ResourcePreferences {
        ResourcePreferences {
            resource_dir: None,
            ..ResourcePreferences::default()
        }
    }

    fn run(command: Commands, output: Output) -> Rendered {
        render(command, &bundled(), output).unwrap()
    }

    #[test]
    fn test_http_text() {
        let rendered = run(
            Commands::Http {
                status: "400 Bad Request".to_string(),
            },
            Output::Text,
        );

        assert_eq!(rendered.exit_code, 0);
        assert!(rendered.text.starts_with("VALIDATION_ISSUE\n"));
        assert!(rendered.text.contains("Category:    INTERNAL_ISSUE"));
        assert!(rendered.text.contains("Details:     Caused by HTTP Error: 400 Bad Request"));
    }

    #[test]
    fn test_http_json() {
        let rendered = run(
            Commands::Http {
                status: "404".to_string(),
            },
            Output::Json,
        );

        let value: serde_json::Value = serde_json::from_str(&rendered.text).unwrap();
        assert_eq!(value["name"], "NOT_FOUND_ISSUE");
        assert_eq!(value["details"], "Caused by HTTP Error: 404");
    }

    #[test]
    fn test_exception_falls_back() {
        let rendered = run(
            Commands::Exception {
                exception_type: "com.acme.Unknown".to_string(),
            },
            Output::Text,
        );
        assert!(rendered.text.starts_with("UNSPECIFIED_ISSUE"));
    }

    #[test]
    fn test_reverse_and_describe() {
        let rendered = run(
            Commands::ReverseHttp {
                issue_name: "validation_issue".to_string(),
            },
            Output::Text,
        );
        assert_eq!(rendered.text, "400");

        let rendered = run(
            Commands::ReverseException {
                issue_name: "VALIDATION_ISSUE".to_string(),
            },
            Output::Json,
        );
        let value: serde_json::Value = serde_json::from_str(&rendered.text).unwrap();
        assert_eq!(value["issueName"], "VALIDATION_ISSUE");
        assert!(value["exception"].is_string());

        let rendered = run(
            Commands::Describe {
                issue_name: "network_issue".to_string(),
            },
            Output::Text,
        );
        assert!(rendered.text.contains("Category:    DEPENDENCY_ISSUE"));
    }

    #[test]
    fn test_unknown_issue_name_is_an_error() {
        let result = render(
            Commands::Describe {
                issue_name: "TEAPOT_ISSUE".to_string(),
            },
            &bundled(),
            Output::Text,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_status_is_invalid_argument() {
        let error = render(
            Commands::Http {
                status: " ".to_string(),
            },
            &bundled(),
            Output::Text,
        )
        .unwrap_err();

        assert!(matches!(
            error.downcast_ref::<ClassificationError>(),
            Some(ClassificationError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_check_bundled_is_conformant() {
        let rendered = run(Commands::Check, Output::Json);
        assert_eq!(rendered.exit_code, 0);

        let value: serde_json::Value = serde_json::from_str(&rendered.text).unwrap();
        assert_eq!(value["missing_names"], json!([]));
    }

    #[test]
    fn test_check_reports_incomplete_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("issues.yaml"),
            "INTERNAL_ISSUE:\n  VALIDATION_ISSUE:\n    Description: \"Bad input\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("http_code_mappings.toml"),
            "\"400\" = \"VALIDATION_ISSUE\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("exception_mappings.toml"), "").unwrap();

        let preferences = ResourcePreferences::for_dir(dir.path()).with_strict_validation(true);
        let rendered = render(Commands::Check, &preferences, Output::Text).unwrap();

        assert_eq!(rendered.exit_code, 1);
        assert!(rendered.text.contains("not conformant"));
    }

    #[test]
    fn test_issue_http_json() {
        let rendered = run(
            Commands::IssueHttp {
                status: "503".to_string(),
                service_id: "svc-1".to_string(),
                service_name: "billing".to_string(),
            },
            Output::Text,
        );

        let value: serde_json::Value = serde_json::from_str(&rendered.text).unwrap();
        assert_eq!(value["issueType"]["name"], "SERVICE_UNAVAILABLE_ISSUE");
        assert_eq!(value["service"]["name"], "billing");
        assert_eq!(value["details"], "Caused by HTTP Error: 503");
    }
}
