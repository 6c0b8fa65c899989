use httpmock::Method::{GET, POST};
use httpmock::MockServer;
use restcheck::Issue;
use serde_json::{json, Map, Value};

mod common;

const USER: &str = "octocat";
const ISSUES_PATH: &str = "/repos/octocat/rest/issues";
const TOKEN: &str = "test-token";
const ISSUE_DESCRIPTION: &str = "Description of new issue";

#[test]
fn healthcheck_returns_200() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/zen");
        then.status(200).body("Keep it logically awesome.");
    });

    let response = common::github_client(&server, None).zen().unwrap();

    assert_eq!(200, response.status_code);
}

#[test]
fn healthcheck_body_is_not_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/zen");
        then.status(200).body("Non-blocking is better than blocking.");
    });

    let response = common::github_client(&server, None).zen().unwrap();

    assert!(!response.body.is_empty());
}

#[test]
fn defunkt_profile_body_is_not_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/defunkt");
        then.status(200)
            .json_body(json!({"login": "defunkt", "id": 2}));
    });

    let response = common::github_client(&server, None).defunkt().unwrap();

    assert_eq!(200, response.status_code);
    assert!(!response.body.is_empty());
}

#[test]
fn unauthenticated_issues_report_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(ISSUES_PATH);
        then.status(404).json_body(json!({"message": "Not Found"}));
    });

    let response = common::github_client(&server, None)
        .issues_unauthenticated(USER)
        .unwrap();

    assert_eq!(404, response.status_code);
    assert_eq!(
        Some(Value::String("Not Found".to_string())),
        response.json_path("message").unwrap()
    );
}

#[test]
fn authorized_issues_contain_the_expected_title() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(ISSUES_PATH)
            .header("Authorization", format!("Bearer {}", TOKEN));
        then.status(200).json_body(json!([
            {"title": "lux-training 09", "body": "first"},
            {"title": "another issue", "body": "second"},
        ]));
    });

    let response = common::github_client(&server, Some(TOKEN))
        .issues(USER)
        .unwrap();
    let issues: Vec<Issue> = response.json_as().unwrap();

    mock.assert();
    assert!(issues.iter().any(|issue| issue.title == "lux-training 09"));
}

#[test]
fn xml_accept_header_is_rejected() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path(ISSUES_PATH)
            .header("Accept", "application/xml");
        then.status(415)
            .json_body(json!({"message": "Must accept 'application/json'"}));
    });

    let response = common::github_client(&server, Some(TOKEN))
        .issues_with_accept("application/xml", USER)
        .unwrap();

    assert_eq!(415, response.status_code);
    let message = response.json_path("message").unwrap().unwrap();
    assert!(message
        .as_str()
        .unwrap()
        .contains("Must accept 'application/json'"));
}

#[test]
fn issue_posted_as_raw_text_is_created() {
    let title = common::unique_title();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path(ISSUES_PATH)
            .header("Accept", "application/json")
            .header("Authorization", format!("Bearer {}", TOKEN));
        then.status(201)
            .json_body(json!({"title": title.as_str(), "body": "Description of issue"}));
    });

    let body = format!(
        "{{\n    \"title\": \"{}\",\n    \"body\": \"Description of issue\"\n}}",
        title
    );
    let response = common::github_client(&server, Some(TOKEN))
        .create_issue_text(USER, &body)
        .unwrap();

    assert_eq!(201, response.status_code);
    assert!(response.body.contains(&title));
}

#[test]
fn issue_posted_as_record_round_trips() {
    let request_issue = Issue::new(common::unique_title(), ISSUE_DESCRIPTION);
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(ISSUES_PATH)
            .json_body_obj(&request_issue);
        // The live API echoes the record back with extra fields.
        then.status(201).json_body(json!({
            "body": request_issue.body.as_str(),
            "title": request_issue.title.as_str(),
            "number": 1347,
            "state": "open",
        }));
    });

    let response = common::github_client(&server, Some(TOKEN))
        .create_issue(USER, &request_issue)
        .unwrap();
    let response_issue: Issue = response.json_as().unwrap();

    mock.assert();
    assert_eq!(201, response.status_code);
    assert_eq!(request_issue.title, response_issue.title, "Issue title");
    assert_eq!(request_issue.body, response_issue.body, "Issue description");
    assert_eq!(request_issue, response_issue, "Issue record");
}

#[test]
fn issue_posted_as_map_round_trips() {
    let title = common::unique_title();
    let mut fields = Map::new();
    fields.insert("title".to_string(), Value::String(title.clone()));
    fields.insert(
        "body".to_string(),
        Value::String(ISSUE_DESCRIPTION.to_string()),
    );

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(ISSUES_PATH);
        then.status(201)
            .json_body(json!({"title": title.as_str(), "body": ISSUE_DESCRIPTION}));
    });

    let response = common::github_client(&server, Some(TOKEN))
        .create_issue_fields(USER, &fields)
        .unwrap();
    let response_fields: Map<String, Value> = response.json_as().unwrap();

    assert_eq!(201, response.status_code);
    assert_eq!(
        Some(&Value::String(title)),
        response_fields.get("title"),
        "Issue title"
    );
    assert_eq!(
        Some(&Value::String(ISSUE_DESCRIPTION.to_string())),
        response_fields.get("body"),
        "Issue description"
    );
}

#[test]
fn created_issue_fields_are_reachable_by_json_path() {
    let request_issue = Issue::new(common::unique_title(), ISSUE_DESCRIPTION);
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(ISSUES_PATH);
        then.status(201).json_body(json!({
            "title": request_issue.title.as_str(),
            "body": request_issue.body.as_str(),
        }));
    });

    let response = common::github_client(&server, Some(TOKEN))
        .create_issue(USER, &request_issue)
        .unwrap();

    assert_eq!(
        Some(Value::String(request_issue.title.clone())),
        response.json_path("title").unwrap(),
        "Issue title"
    );
    assert_eq!(
        Some(Value::String(request_issue.body.clone())),
        response.json_path("body").unwrap(),
        "Issue description"
    );
}

#[test]
fn creating_an_issue_without_a_token_is_unauthorized() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(ISSUES_PATH);
        then.status(401)
            .json_body(json!({"message": "Requires authentication"}));
    });

    let response = common::github_client(&server, None)
        .create_issue(USER, &Issue::new(common::unique_title(), ISSUE_DESCRIPTION))
        .unwrap();

    assert_eq!(401, response.status_code);
    assert_eq!(
        Some(Value::String("Requires authentication".to_string())),
        response.json_path("message").unwrap()
    );
}
