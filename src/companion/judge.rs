pub mod playground;
pub mod problem;
pub mod search;
pub mod session;
pub mod submit;
pub mod verdict;

pub use problem::ProblemDetail;
pub use session::Session;
pub use submit::SubmissionId;
pub use verdict::{Poll, Verdict};

const LOGIN_PATH: &str = "/accounts/login/";
const INDEX_PATH: &str = "/api/problems/all/";
const PROBLEMSET_PATH: &str = "/problemset/all/";
const GRAPHQL_PATH: &str = "/graphql";
const PLAYGROUND_PATH: &str = "/playground/new/empty";

fn submit_path(slug: &str) -> String {
    format!("/problems/{}/submit/", slug)
}
fn check_path(id: SubmissionId) -> String {
    format!("/submissions/detail/{}/check/", id)
}
