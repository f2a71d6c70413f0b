use lc_companion::{
    judge::{Poll, Session, SubmissionId},
    Error, Language,
};
use serde_json::json;
use tempfile::{tempdir, TempDir};
use wiremock::{
    matchers::{body_partial_json, body_string_contains, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

mod common;
use common::{platform, settings, two_sum, TOKEN};

async fn connect() -> (MockServer, TempDir, Session) {
    let server = platform().await;
    let dir = tempdir().unwrap();
    let session = Session::connect(settings(dir.path(), &server)).await.unwrap();
    (server, dir, session)
}

fn problem_page(server: &MockServer) -> String {
    format!("{}/problems/two-sum/description/", server.uri())
}

#[tokio::test]
async fn submit_returns_id() {
    let (server, _dir, session) = connect().await;
    Mock::given(method("POST"))
        .and(path("/problems/two-sum/submit/"))
        .and(header("x-csrftoken", TOKEN))
        .and(header("referer", problem_page(&server).as_str()))
        .and(body_partial_json(json!({
            "lang": "cpp",
            "question_id": 1,
            "test_mode": false,
            "typed_code": "int main() {}\n",
            "judge_type": "large"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"submission_id": 4242})))
        .expect(1)
        .mount(&server)
        .await;

    let cpp = Language::find("cpp").unwrap();
    let id = session.submit(&two_sum(), "int main() {}\n", cpp).await.unwrap();
    assert_eq!(id, SubmissionId(4242));
}

#[tokio::test]
async fn submit_without_id_is_rejected() {
    let (server, _dir, session) = connect().await;
    Mock::given(method("POST"))
        .and(path("/problems/two-sum/submit/"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": "You have submitted too often"
        })))
        .mount(&server)
        .await;

    let python = Language::find("python").unwrap();
    match session.submit(&two_sum(), "pass\n", python).await {
        Err(Error::SubmitRejected { status, detail }) => {
            assert_eq!(status.as_u16(), 429);
            assert_eq!(detail, "You have submitted too often");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn check_moves_from_pending_to_finished() {
    let (server, _dir, session) = connect().await;
    for state in ["PENDING", "STARTED"] {
        Mock::given(method("GET"))
            .and(path("/submissions/detail/7/check/"))
            .and(header("x-csrftoken", TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"state": state})))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/submissions/detail/7/check/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "state": "SUCCESS",
            "status_msg": "Wrong Answer",
            "status_code": 11,
            "total_correct": 3,
            "total_testcases": 57,
            "last_testcase": "[3,2,4]\n6",
            "expected_output": "[1,2]",
            "code_output": "[0,0]"
        })))
        .mount(&server)
        .await;

    let id = SubmissionId(7);
    assert_eq!(
        session.check(id).await.unwrap(),
        Poll::Pending(String::from("PENDING"))
    );
    assert_eq!(
        session.check(id).await.unwrap(),
        Poll::Pending(String::from("STARTED"))
    );
    match session.check(id).await.unwrap() {
        Poll::Finished(v) => {
            assert!(!v.accepted());
            assert_eq!(v.to_string(), "Wrong Answer (3/57)");
            assert_eq!(v.code_output().as_deref(), Some("[0,0]"));
        }
        other => panic!("still pending: {:?}", other),
    }
    assert!(!session.check(id).await.unwrap().is_pending());
}

#[tokio::test]
async fn playground_template_is_unescaped() {
    let (server, _dir, session) = connect().await;
    let page = concat!(
        "<script>\n",
        "  var pageData = {\n",
        "    code: 'class Solution {\\npublic:\\n    vector\\u003cint\\u003e twoSum();\\n};',\n",
        "  };\n",
        "</script>\n"
    );
    Mock::given(method("POST"))
        .and(path("/playground/new/empty"))
        .and(header("x-csrftoken", TOKEN))
        .and(body_string_contains("question=1"))
        .and(body_string_contains("lang=cpp"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .expect(1)
        .mount(&server)
        .await;

    let cpp = Language::find("cpp").unwrap();
    let template = session
        .playground_template(1, cpp, &problem_page(&server), "")
        .await
        .unwrap();
    assert_eq!(
        template,
        "class Solution {\npublic:\n    vector<int> twoSum();\n};"
    );
}

#[tokio::test]
async fn playground_without_code_fails() {
    let (server, _dir, session) = connect().await;
    Mock::given(method("POST"))
        .and(path("/playground/new/empty"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let c = Language::find("c").unwrap();
    let err = session
        .playground_template(1, c, &problem_page(&server), "")
        .await
        .err()
        .unwrap();
    assert!(matches!(err, Error::TemplateExtractionFailed), "{}", err);
}

#[tokio::test]
async fn detail_by_slug() {
    let (server, _dir, session) = connect().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("referer", problem_page(&server).as_str()))
        .and(body_partial_json(json!({
            "operationName": "getQuestionDetail",
            "variables": { "titleSlug": "two-sum" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "question": {
                "questionId": "1",
                "questionTitleSlug": "two-sum",
                "content": "<p>Given an array</p>",
                "sampleTestCase": "[2,7,11,15]\n9",
                "enableRunCode": true,
                "codeDefinition": "[{\"value\":\"python\",\"text\":\"Python\",\"defaultCode\":\"class Solution:\\n    pass\"}]"
            } }
        })))
        .mount(&server)
        .await;

    let detail = session.problem_detail(&two_sum()).await.unwrap();
    assert_eq!(detail.question_id, "1");
    assert_eq!(detail.sample_test_case.as_deref(), Some("[2,7,11,15]\n9"));
    let python = Language::find("python").unwrap();
    assert_eq!(
        detail.code_template(python).unwrap().as_deref(),
        Some("class Solution:\n    pass")
    );
}

#[tokio::test]
async fn detail_of_missing_problem() {
    let (server, _dir, session) = connect().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"question": null}})),
        )
        .mount(&server)
        .await;

    let err = session.problem_detail(&two_sum()).await.err().unwrap();
    assert!(matches!(err, Error::UnknownProblem(1)), "{}", err);
}
